//! Staging draft for the create/edit product form.

use crate::backend::ProductFields;
use crate::catalog::Product;
use crate::error::StoreError;
use crate::upload::ImageRef;

/// Transient copy of a product (or new-product shape) while a form is
/// open. The image may be an ephemeral preview until submission, at
/// which point the pipeline commits it to a durable reference.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductDraft {
    pub name: String,
    pub short_description: String,
    pub full_description: String,
    pub price_minor: i64,
    pub image: Option<ImageRef>,
}

impl ProductDraft {
    /// Empty draft for the create form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft seeded from an existing record for the edit form. The image
    /// starts as the already-persisted reference, so saving without
    /// selecting a new file keeps it unchanged.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            short_description: product.short_description.clone(),
            full_description: product.full_description.clone(),
            price_minor: product.price_minor,
            image: Some(ImageRef::persisted(product.image_url.clone())),
        }
    }

    /// Field-level validation, checked before any network call.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.trim().is_empty() {
            return Err(StoreError::validation("name", "must not be empty"));
        }
        if self.short_description.trim().is_empty() {
            return Err(StoreError::validation("short_description", "must not be empty"));
        }
        if self.full_description.trim().is_empty() {
            return Err(StoreError::validation("full_description", "must not be empty"));
        }
        if self.price_minor < 0 {
            return Err(StoreError::validation("price_minor", "must not be negative"));
        }
        Ok(())
    }

    /// Wire fields for the repository. `image_url` is the committed
    /// durable reference; drafts never reach the wire with a preview.
    pub fn to_fields(&self, image_url: String) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            short_description: self.short_description.clone(),
            full_description: self.full_description.clone(),
            price_cents: self.price_minor,
            image_url,
        }
    }
}
