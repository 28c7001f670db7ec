//! Local persistent cache for catalog data.
//!
//! SQLite-backed snapshot store for the product list, the favorite-id
//! set, and the theme flag. The cache is a convenience mirror of the
//! remote repository, never authoritative: it is read once at startup to
//! seed the session and written after successful syncs and mutations.

pub mod db;
pub mod favorites;
pub mod products;
pub mod settings;

pub use db::LocalStorage;
pub use settings::ThemeMode;
