//! Remote backend abstraction for the product repository and asset store.
//!
//! The hosted data backend is an external service the engine consumes, not
//! something it implements. This module defines the traits the rest of the
//! engine talks to, along with the raw wire shapes the repository returns.
//! Keeping the traits narrow makes the sync engine and admin controller
//! testable against scripted in-memory backends.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::upload::UploadFile;

pub mod hosted;

/// Price value as it arrives on the wire. Older rows carry the price as a
/// string; normalization coerces every shape to an integer minor unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Int(i64),
    Float(f64),
    Text(String),
}

/// A product row exactly as the remote repository returns it.
///
/// Rows predate the current schema, so every field except `id` may be
/// absent and some rows use `title` where newer ones use `name`. The
/// normalization table in [`crate::catalog::normalize`] resolves the
/// heterogeneity in one place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawProductRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default)]
    pub price_cents: Option<RawPrice>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Field set sent to the repository for inserts and updates.
///
/// The `image_url` here is always a durable reference; the admin
/// controller commits any locally selected file through the upload
/// pipeline before these fields are ever built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
    pub name: String,
    pub short_description: String,
    pub full_description: String,
    pub price_cents: i64,
    pub image_url: String,
}

/// Product repository operations consumed by the engine.
///
/// `list_products` returns rows in creation-descending order, the
/// repository's default and required ordering. All failures map into the
/// [`StoreError`] taxonomy and are surfaced to callers, never swallowed.
#[async_trait]
pub trait ProductBackend: Send + Sync {
    /// Fetch the full product set, newest first.
    async fn list_products(&self) -> Result<Vec<RawProductRecord>, StoreError>;

    /// Insert a new product; the stored row comes back with the
    /// server-assigned id and creation timestamp.
    async fn insert_product(&self, fields: &ProductFields) -> Result<RawProductRecord, StoreError>;

    /// Update an existing product and return the updated row.
    async fn update_product(&self, id: &str, fields: &ProductFields) -> Result<RawProductRecord, StoreError>;

    /// Delete a product. The local list entry is only removed after this
    /// acknowledges.
    async fn delete_product(&self, id: &str) -> Result<(), StoreError>;
}

/// Asset store consumed by the upload pipeline.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Upload a file and return a durable URL that remains valid after
    /// the session ends.
    async fn upload(&self, file: &UploadFile) -> Result<String, StoreError>;
}
