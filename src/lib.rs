//! Heliostore - client-side state engine for a solar equipment storefront
//!
//! This library keeps a session's product catalog in sync with a hosted
//! data service: it fetches and normalizes heterogeneous product rows,
//! mirrors them into a local SQLite cache for instant restarts, and
//! exposes the browsing and administration operations a storefront
//! front-end drives.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`catalog`] - In-memory catalog state, normalization, and browsing
//! * [`sync`] - Refresh engine between the remote repository and the session
//! * [`admin`] - Gated CRUD surface and dashboard aggregates
//! * [`backend`] - Remote repository and asset store abstraction
//! * [`storage`] - Local cache persistence
//! * [`config`] - Application configuration management

/// Admin management surface: form lifecycle, mutations, dashboard
pub mod admin;

/// Remote backend traits, wire shapes, and the hosted implementation
pub mod backend;

/// Catalog state, normalization, filtering, and quick view
pub mod catalog;

/// Configuration module for managing application settings
pub mod config;

/// SeaORM entity models for cache tables
pub mod entities;

/// Error taxonomy shared across the engine
pub mod error;

/// File logging setup
pub mod logger;

/// Repository layer for cache database operations
pub mod repositories;

/// Session context carrying the admin gate
pub mod session;

/// Local storage layer for caching catalog data
pub mod storage;

/// Synchronization engine for keeping the session catalog fresh
pub mod sync;

/// Asset upload pipeline with preview and durable references
pub mod upload;

// Re-export the types most callers need directly
pub use catalog::{CatalogStore, Product, QuickView};
pub use error::StoreError;
pub use session::SessionContext;
pub use sync::{SyncService, SyncStatus};
