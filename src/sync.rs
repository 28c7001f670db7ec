//! Synchronization engine between the remote repository and the session.
//!
//! [`SyncService::refresh`] fetches the full product set, normalizes it,
//! and on success replaces the catalog store's list wholesale and writes
//! a cache snapshot. On failure the store is left exactly as it was
//! (cache-restored, demo, or empty) and the failure comes back as a
//! recoverable [`SyncStatus::Error`], never an uncaught failure. Refresh
//! is idempotent and safely retryable at any time, including while an
//! unrelated CRUD call is in flight.

use std::sync::Arc;

use anyhow::Result;
use log::{error, info, warn};
use tokio::sync::Mutex;

use crate::backend::ProductBackend;
use crate::catalog::{normalize::normalize, CatalogStore};
use crate::storage::LocalStorage;

/// Outcome of a refresh, communicated to the caller for status display.
#[derive(Debug, Clone)]
pub enum SyncStatus {
    /// Another refresh already holds the in-flight guard.
    InProgress,
    /// The list was replaced with `fetched` normalized products.
    Success { fetched: usize },
    /// The remote call failed; prior state is preserved.
    Error { message: String },
}

/// Fetch-normalize-replace engine for the product catalog.
#[derive(Clone)]
pub struct SyncService {
    backend: Arc<dyn ProductBackend>,
    store: Arc<CatalogStore>,
    storage: Arc<Mutex<LocalStorage>>,
    placeholder_image: String,
    refresh_in_progress: Arc<Mutex<bool>>,
}

impl SyncService {
    pub fn new(
        backend: Arc<dyn ProductBackend>,
        store: Arc<CatalogStore>,
        storage: Arc<Mutex<LocalStorage>>,
        placeholder_image: String,
    ) -> Self {
        Self {
            backend,
            store,
            storage,
            placeholder_image,
            refresh_in_progress: Arc::new(Mutex::new(false)),
        }
    }

    /// Whether a refresh is currently running.
    pub async fn is_refreshing(&self) -> bool {
        *self.refresh_in_progress.lock().await
    }

    /// Fetch the product set and replace the catalog on success.
    pub async fn refresh(&self) -> Result<SyncStatus> {
        // Take the in-flight guard, but release the lock itself before
        // the long remote call.
        {
            let mut guard = self.refresh_in_progress.lock().await;
            if *guard {
                return Ok(SyncStatus::InProgress);
            }
            *guard = true;
        }

        let result = self.perform_refresh().await;

        *self.refresh_in_progress.lock().await = false;

        result
    }

    /// Spawn a background task refreshing every `interval_minutes`.
    /// Returns `None` when the interval is zero (manual refresh only).
    /// Each tick goes through the same in-flight guard as a manual
    /// refresh, so overlapping runs collapse into one.
    pub fn spawn_auto_refresh(&self, interval_minutes: u64) -> Option<tokio::task::JoinHandle<()>> {
        if interval_minutes == 0 {
            return None;
        }

        let service = self.clone();
        Some(tokio::spawn(async move {
            let period = std::time::Duration::from_secs(interval_minutes * 60);
            let mut ticker = tokio::time::interval(period);
            // The immediate first tick would double the startup refresh.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if let Err(e) = service.refresh().await {
                    warn!("auto refresh failed: {e}");
                }
            }
        }))
    }

    async fn perform_refresh(&self) -> Result<SyncStatus> {
        info!("refreshing product catalog");

        let raws = match self.backend.list_products().await {
            Ok(raws) => raws,
            Err(e) => {
                error!("failed to fetch products: {e}");
                return Ok(SyncStatus::Error {
                    message: format!("Failed to fetch products: {e}"),
                });
            }
        };

        let products: Vec<_> = raws
            .iter()
            .map(|raw| normalize(raw, &self.placeholder_image))
            .collect();
        let fetched = products.len();
        info!("fetched {fetched} products from repository");

        // The list only changes on confirmed success; a failed fetch has
        // already returned above.
        self.store.replace_all(products.clone());

        let storage = self.storage.lock().await;
        if let Err(e) = storage.store_products(&products).await {
            // The cache is a mirror, not the source of truth.
            warn!("failed to write product snapshot: {e}");
        }

        Ok(SyncStatus::Success { fetched })
    }
}
