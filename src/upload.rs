//! Asset upload pipeline.
//!
//! Selecting a file yields an ephemeral preview reference right away so a
//! form can show feedback; the durable upload happens only at submission
//! time via [`UploadPipeline::commit`]. The two kinds of reference are a
//! tagged variant so a session-local preview can never be handed to the
//! persistence boundary by accident.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::backend::AssetStore;
use crate::error::StoreError;

/// A locally selected file waiting to be uploaded.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Image reference held by a product draft.
///
/// `LocalPreview` is valid only for the running session and is never
/// written to the repository; `Persisted` is a durable URL from the asset
/// store (or an already-saved record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageRef {
    LocalPreview { token: Uuid, file_name: String },
    Persisted { url: String },
}

impl ImageRef {
    pub fn persisted(url: impl Into<String>) -> Self {
        Self::Persisted { url: url.into() }
    }

    /// Whether this reference may cross the persistence boundary.
    pub fn is_durable(&self) -> bool {
        matches!(self, Self::Persisted { .. })
    }

    pub fn persisted_url(&self) -> Option<&str> {
        match self {
            Self::Persisted { url } => Some(url),
            Self::LocalPreview { .. } => None,
        }
    }
}

/// Turns locally selected files into durable remote references.
pub struct UploadPipeline {
    assets: Arc<dyn AssetStore>,
    pending: Mutex<HashMap<Uuid, UploadFile>>,
}

impl UploadPipeline {
    pub fn new(assets: Arc<dyn AssetStore>) -> Self {
        Self {
            assets,
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Register a selected file and return its ephemeral preview
    /// reference immediately. Nothing is uploaded here.
    pub async fn select(&self, file: UploadFile) -> ImageRef {
        let token = Uuid::new_v4();
        let file_name = file.file_name.clone();
        self.pending.lock().await.insert(token, file);
        ImageRef::LocalPreview { token, file_name }
    }

    /// Resolve a reference to a durable URL, uploading the pending file
    /// when the reference is still a local preview.
    ///
    /// On upload failure the pending file is kept, so the caller can
    /// retry the whole submission without re-selecting the file.
    pub async fn commit(&self, image: &ImageRef) -> Result<String, StoreError> {
        match image {
            ImageRef::Persisted { url } => Ok(url.clone()),
            ImageRef::LocalPreview { token, file_name } => {
                let file = self
                    .pending
                    .lock()
                    .await
                    .get(token)
                    .cloned()
                    .ok_or_else(|| {
                        StoreError::Upload(format!("no pending file for preview of {file_name}"))
                    })?;

                let url = self.assets.upload(&file).await?;
                self.pending.lock().await.remove(token);
                Ok(url)
            }
        }
    }

    /// Drop a pending file when its form is cancelled.
    pub async fn discard(&self, image: &ImageRef) {
        if let ImageRef::LocalPreview { token, .. } = image {
            self.pending.lock().await.remove(token);
        }
    }
}
