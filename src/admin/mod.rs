//! Admin management surface.
//!
//! The controller owns the create/edit form lifecycle and the mutation
//! paths against the remote repository. Every entry point re-checks the
//! session gate; every mutation goes to the repository first and touches
//! the in-memory catalog only after the repository acknowledged. There
//! are no optimistic list changes anywhere on this surface.

use std::sync::Arc;

use log::info;
use tokio::sync::Mutex;

use crate::backend::ProductBackend;
use crate::catalog::{normalize::normalize, CatalogStore, Product};
use crate::error::StoreError;
use crate::session::SessionContext;
use crate::upload::{ImageRef, UploadFile, UploadPipeline};

pub mod draft;
pub mod stats;

pub use draft::ProductDraft;
pub use stats::CatalogStats;

/// Lifecycle of the single create/edit form.
///
/// `Editing { target: None }` is the create form, `Some(id)` the edit
/// form. A failed submission returns to `Editing` with the draft intact
/// so nothing the operator typed is lost.
#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    Idle,
    Editing {
        target: Option<String>,
        draft: ProductDraft,
    },
    Submitting {
        target: Option<String>,
    },
}

/// Deletion awaiting explicit confirmation.
///
/// Requesting a delete only produces this token; nothing happens to the
/// repository or the list until [`PendingDelete::confirm`] consumes it.
/// Dropping the token cancels the deletion with no side effects.
pub struct PendingDelete {
    product: Product,
    backend: Arc<dyn ProductBackend>,
    store: Arc<CatalogStore>,
}

impl PendingDelete {
    /// The product that would be deleted, for the confirmation prompt.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Delete from the repository, then reflect the removal locally. On
    /// failure the product stays in the list and the error is returned.
    pub async fn confirm(self) -> Result<(), StoreError> {
        self.backend.delete_product(&self.product.id).await?;
        info!("deleted product {}", self.product.id);
        self.store.remove(&self.product.id);
        self.store.persist_products().await;
        Ok(())
    }
}

/// Controller for the admin CRUD surface and dashboard.
pub struct AdminController {
    session: Arc<SessionContext>,
    backend: Arc<dyn ProductBackend>,
    uploads: Arc<UploadPipeline>,
    store: Arc<CatalogStore>,
    placeholder_image: String,
    form: Mutex<FormState>,
}

impl AdminController {
    pub fn new(
        session: Arc<SessionContext>,
        backend: Arc<dyn ProductBackend>,
        uploads: Arc<UploadPipeline>,
        store: Arc<CatalogStore>,
        placeholder_image: String,
    ) -> Self {
        Self {
            session,
            backend,
            uploads,
            store,
            placeholder_image,
            form: Mutex::new(FormState::Idle),
        }
    }

    /// Current form state (cloned snapshot).
    pub async fn form_state(&self) -> FormState {
        self.form.lock().await.clone()
    }

    /// Open the create form with an empty draft.
    pub async fn open_create(&self) -> Result<(), StoreError> {
        self.session.require_admin()?;
        *self.form.lock().await = FormState::Editing {
            target: None,
            draft: ProductDraft::new(),
        };
        Ok(())
    }

    /// Open the edit form seeded from the existing record.
    pub async fn open_edit(&self, id: &str) -> Result<(), StoreError> {
        self.session.require_admin()?;
        let product = self.store.find(id)?;
        *self.form.lock().await = FormState::Editing {
            target: Some(product.id.clone()),
            draft: ProductDraft::from_product(&product),
        };
        Ok(())
    }

    /// The open draft, if a form is being edited.
    pub async fn draft(&self) -> Option<ProductDraft> {
        match &*self.form.lock().await {
            FormState::Editing { draft, .. } => Some(draft.clone()),
            _ => None,
        }
    }

    /// Replace the open draft with edited field values.
    pub async fn set_draft(&self, draft: ProductDraft) -> Result<(), StoreError> {
        let mut form = self.form.lock().await;
        match &mut *form {
            FormState::Editing { draft: slot, .. } => {
                *slot = draft;
                Ok(())
            }
            FormState::Idle => Err(StoreError::validation("form", "no form open")),
            FormState::Submitting { .. } => Err(StoreError::Busy),
        }
    }

    /// Register a locally selected image on the open draft. The draft
    /// gets an ephemeral preview reference immediately; the upload itself
    /// happens at submission.
    pub async fn attach_image(&self, file: UploadFile) -> Result<(), StoreError> {
        let mut form = self.form.lock().await;
        match &mut *form {
            FormState::Editing { draft, .. } => {
                let preview = self.uploads.select(file).await;
                if let Some(old) = draft.image.replace(preview) {
                    self.uploads.discard(&old).await;
                }
                Ok(())
            }
            FormState::Idle => Err(StoreError::validation("form", "no form open")),
            FormState::Submitting { .. } => Err(StoreError::Busy),
        }
    }

    /// Close the form, discarding the draft and any pending upload.
    pub async fn cancel(&self) {
        let mut form = self.form.lock().await;
        if let FormState::Editing { draft, .. } = &*form {
            if let Some(image) = &draft.image {
                self.uploads.discard(image).await;
            }
        }
        *form = FormState::Idle;
    }

    /// Submit the open form.
    ///
    /// Validation runs before any state transition or network call. The
    /// image is committed to a durable URL first; only then are the wire
    /// fields built and sent. Creates land at the head of the list,
    /// updates replace their row in place. On any failure the form
    /// returns to `Editing` with the draft intact.
    pub async fn submit(&self) -> Result<Product, StoreError> {
        self.session.require_admin()?;

        let (target, mut draft) = {
            let mut form = self.form.lock().await;
            let (target, draft) = match &*form {
                FormState::Editing { target, draft } => (target.clone(), draft.clone()),
                FormState::Idle => return Err(StoreError::validation("form", "no form open")),
                FormState::Submitting { .. } => return Err(StoreError::Busy),
            };
            draft.validate()?;
            *form = FormState::Submitting {
                target: target.clone(),
            };
            (target, draft)
        };

        match self.perform_submit(target.as_deref(), &mut draft).await {
            Ok(product) => {
                *self.form.lock().await = FormState::Idle;
                self.store.persist_products().await;
                Ok(product)
            }
            Err(e) => {
                // Draft retained so the operator can fix and resubmit.
                *self.form.lock().await = FormState::Editing { target, draft };
                Err(e)
            }
        }
    }

    async fn perform_submit(
        &self,
        target: Option<&str>,
        draft: &mut ProductDraft,
    ) -> Result<Product, StoreError> {
        let image_url = match &draft.image {
            Some(image) => {
                let url = self.uploads.commit(image).await?;
                // Upgrade the draft so a retained draft after a failed
                // persist call carries the durable reference, not a
                // consumed preview.
                draft.image = Some(ImageRef::persisted(url.clone()));
                url
            }
            None => String::new(),
        };
        let fields = draft.to_fields(image_url);

        let raw = match target {
            None => {
                let raw = self.backend.insert_product(&fields).await?;
                info!("created product {}", raw.id);
                let product = normalize(&raw, &self.placeholder_image);
                self.store.insert_first(product.clone());
                return Ok(product);
            }
            Some(id) => {
                let raw = self.backend.update_product(id, &fields).await?;
                info!("updated product {id}");
                raw
            }
        };

        let product = normalize(&raw, &self.placeholder_image);
        self.store.replace_in_place(product.clone());
        Ok(product)
    }

    /// Stage a deletion. Nothing is deleted until the returned token is
    /// confirmed; dropping it cancels with no side effects.
    pub async fn request_delete(&self, id: &str) -> Result<PendingDelete, StoreError> {
        self.session.require_admin()?;
        let product = self.store.find(id)?;
        Ok(PendingDelete {
            product,
            backend: Arc::clone(&self.backend),
            store: Arc::clone(&self.store),
        })
    }

    /// Dashboard aggregates over the full loaded catalog.
    pub async fn stats(&self) -> Result<CatalogStats, StoreError> {
        self.session.require_admin()?;
        let products = self.store.products();
        Ok(CatalogStats::compute(&products, chrono::Utc::now()))
    }
}
