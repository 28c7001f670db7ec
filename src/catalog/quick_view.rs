//! Single-slot quick-view selection.

use tokio::sync::Mutex;

use super::Product;

/// The "currently inspected product", held transiently for a modal quick
/// view. At most one selection exists; opening replaces any prior one and
/// nothing is ever persisted or queued. Always safe to call regardless of
/// other in-flight operations.
#[derive(Default)]
pub struct QuickView {
    slot: Mutex<Option<Product>>,
}

impl QuickView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection, replacing any prior one.
    pub async fn open(&self, product: Product) {
        *self.slot.lock().await = Some(product);
    }

    /// Clear the selection.
    pub async fn close(&self) {
        *self.slot.lock().await = None;
    }

    /// The current selection, if any.
    pub async fn current(&self) -> Option<Product> {
        self.slot.lock().await.clone()
    }
}
