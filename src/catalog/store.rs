//! In-memory catalog store.
//!
//! The authoritative view of the product list and favorite set for the
//! running session. The sync engine replaces the list wholesale, the
//! admin controller applies confirmed mutations, and view code reads or
//! subscribes. Favorite toggles persist the full resulting set to the
//! cache on every mutation and are independent of any in-flight sync or
//! CRUD call.

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Result;
use log::warn;
use tokio::sync::{watch, Mutex};

use super::Product;
use crate::error::StoreError;
use crate::storage::LocalStorage;

/// Session-scoped catalog state.
pub struct CatalogStore {
    products: watch::Sender<Vec<Product>>,
    favorites: Mutex<HashSet<String>>,
    storage: Arc<Mutex<LocalStorage>>,
}

impl CatalogStore {
    /// Create an empty store backed by the given cache.
    pub fn new(storage: Arc<Mutex<LocalStorage>>) -> Self {
        let (products, _) = watch::channel(Vec::new());
        Self {
            products,
            favorites: Mutex::new(HashSet::new()),
            storage,
        }
    }

    /// Seed the store from the cache snapshot. Called once at startup so
    /// the previous session's catalog shows before the first sync lands.
    pub async fn load_cached(&self) -> Result<()> {
        let storage = self.storage.lock().await;
        let products = storage.load_products().await?;
        let favorites = storage.load_favorites().await?;
        drop(storage);

        self.products.send_replace(products);
        *self.favorites.lock().await = favorites;
        Ok(())
    }

    /// Current product list (cloned snapshot).
    pub fn products(&self) -> Vec<Product> {
        self.products.borrow().clone()
    }

    /// Subscribe to product-list changes.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Product>> {
        self.products.subscribe()
    }

    pub fn get(&self, id: &str) -> Option<Product> {
        self.products.borrow().iter().find(|p| p.id == id).cloned()
    }

    /// Resolve an id or report it as a dedicated not-found condition,
    /// which views render with a path back to the catalog.
    pub fn find(&self, id: &str) -> Result<Product, StoreError> {
        self.get(id).ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Replace the list wholesale (confirmed sync result).
    pub fn replace_all(&self, products: Vec<Product>) {
        self.products.send_replace(products);
    }

    /// Insert a newly created record at the head, matching the
    /// repository's creation-descending ordering.
    pub fn insert_first(&self, product: Product) {
        self.products.send_modify(|list| list.insert(0, product));
    }

    /// Replace a record in place at its existing position. Updates never
    /// reorder the list, so the edited row does not visually move.
    pub fn replace_in_place(&self, product: Product) -> bool {
        let mut replaced = false;
        self.products.send_modify(|list| {
            if let Some(slot) = list.iter_mut().find(|p| p.id == product.id) {
                *slot = product;
                replaced = true;
            }
        });
        replaced
    }

    /// Remove a record after the repository acknowledged its deletion.
    pub fn remove(&self, id: &str) -> bool {
        let mut removed = false;
        self.products.send_modify(|list| {
            let before = list.len();
            list.retain(|p| p.id != id);
            removed = list.len() != before;
        });
        removed
    }

    /// Current favorite-id set (cloned snapshot).
    pub async fn favorites(&self) -> HashSet<String> {
        self.favorites.lock().await.clone()
    }

    pub async fn is_favorite(&self, id: &str) -> bool {
        self.favorites.lock().await.contains(id)
    }

    /// Toggle membership and re-persist the full resulting set. Returns
    /// whether the id is a favorite afterwards. Cache-write failures are
    /// non-fatal; the in-memory set is already updated.
    pub async fn toggle_favorite(&self, id: &str) -> bool {
        let snapshot;
        let now_favorite;
        {
            let mut favorites = self.favorites.lock().await;
            if !favorites.remove(id) {
                favorites.insert(id.to_string());
                now_favorite = true;
            } else {
                now_favorite = false;
            }
            snapshot = favorites.clone();
        }

        let storage = self.storage.lock().await;
        if let Err(e) = storage.store_favorites(&snapshot).await {
            warn!("failed to persist favorites: {e}");
        }
        now_favorite
    }

    /// Write the current product list to the cache. Failures are logged
    /// and dropped; the cache is never authoritative.
    pub async fn persist_products(&self) {
        let snapshot = self.products();
        let storage = self.storage.lock().await;
        if let Err(e) = storage.store_products(&snapshot).await {
            warn!("failed to write product snapshot: {e}");
        }
    }
}
