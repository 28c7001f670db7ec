//! Repository layer for cache database operations.
//!
//! Repository structs encapsulate the SeaORM queries behind the local
//! cache, keeping the entities pure data models. Each method is generic
//! over [`sea_orm::ConnectionTrait`] so the storage layer can run them on
//! a plain connection or inside a transaction.

pub mod favorite;
pub mod product;
pub mod setting;

pub use favorite::FavoriteRepository;
pub use product::ProductRepository;
pub use setting::SettingRepository;
