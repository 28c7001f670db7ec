//! Catalog domain: the canonical product entity and the in-memory state
//! around it.
//!
//! * [`normalize`] turns heterogeneous raw repository rows into the
//!   canonical entity via an ordered fallback table
//! * [`store`] is the session's authoritative in-memory list and
//!   favorite set, with change subscriptions
//! * [`filter`] is a pure free-text projection of the visible subset
//! * [`quick_view`] holds the single-slot "currently inspected product"

pub mod filter;
pub mod normalize;
pub mod quick_view;
pub mod store;

pub use filter::project;
pub use quick_view::QuickView;
pub use store::CatalogStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical, field-complete product entity.
///
/// Ids are assigned by the remote repository and never generated on the
/// client; `created_at` likewise. Prices are integer minor currency
/// units, so no fractional rounding ever happens downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub short_description: String,
    pub full_description: String,
    pub price_minor: i64,
    pub image_url: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Non-blank lines of the full description, each rendered as a
    /// bullet by the detail and quick views.
    pub fn bullet_lines(&self) -> impl Iterator<Item = &str> {
        self.full_description
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}
