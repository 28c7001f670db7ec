//! Session context supplied by the authentication collaborator.
//!
//! The engine does not implement authentication; it consumes a boolean
//! admin gate. The context is constructed once at application start and
//! torn down by `logout()` rather than living as an ambient singleton,
//! so every component that needs the gate receives it explicitly.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::StoreError;

/// Explicitly constructed session state passed into admin-facing components.
#[derive(Debug)]
pub struct SessionContext {
    is_admin: AtomicBool,
}

impl SessionContext {
    pub fn new(is_admin: bool) -> Self {
        Self {
            is_admin: AtomicBool::new(is_admin),
        }
    }

    /// Whether the current session may use the admin surface.
    pub fn is_admin(&self) -> bool {
        self.is_admin.load(Ordering::SeqCst)
    }

    /// Tear the session down. The admin surface becomes inaccessible
    /// immediately; the gate is checked on entry and on every mutation.
    pub fn logout(&self) {
        self.is_admin.store(false, Ordering::SeqCst);
    }

    /// Gate used by every admin operation before any work is done.
    pub fn require_admin(&self) -> Result<(), StoreError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(StoreError::Unauthorized)
        }
    }
}
