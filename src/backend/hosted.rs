//! Hosted data-backend client.
//!
//! Speaks the hosted service's two REST dialects: PostgREST-style rows for
//! the `products` table and the storage-object API for image uploads. The
//! service authenticates every call with the same API key sent both as the
//! `apikey` header and as a bearer token.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{header, Client, Response, StatusCode};

use super::{AssetStore, ProductBackend, ProductFields, RawProductRecord};
use crate::error::StoreError;
use crate::upload::UploadFile;

const PRODUCTS_TABLE: &str = "products";

/// Client for the hosted product repository and asset store.
pub struct HostedBackend {
    http: Client,
    base_url: String,
    api_key: String,
    bucket: String,
}

impl HostedBackend {
    /// Create a client for the service at `base_url`, uploading images
    /// into `bucket`.
    pub fn new(base_url: &str, api_key: &str, bucket: &str) -> Result<Self, StoreError> {
        let http = Client::builder()
            .build()
            .map_err(|e| StoreError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            bucket: bucket.to_string(),
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, PRODUCTS_TABLE)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Map transport failures and non-success statuses into the error
    /// taxonomy, preserving the response body as the surfaced message.
    async fn check(&self, resp: Response) -> Result<Response, StoreError> {
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            let path = resp.url().path().to_string();
            return Err(StoreError::NotFound(path));
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::Network(format!("{status}: {body}")));
        }
        Ok(resp)
    }

    /// Inserts and updates ask for the stored representation back, so the
    /// canonical row (server-assigned id, timestamps) flows to the caller.
    async fn single_row(&self, resp: Response) -> Result<RawProductRecord, StoreError> {
        let mut rows: Vec<RawProductRecord> = resp
            .json()
            .await
            .map_err(|e| StoreError::Network(format!("malformed repository response: {e}")))?;
        if rows.is_empty() {
            return Err(StoreError::NotFound(PRODUCTS_TABLE.to_string()));
        }
        Ok(rows.remove(0))
    }
}

#[async_trait]
impl ProductBackend for HostedBackend {
    async fn list_products(&self) -> Result<Vec<RawProductRecord>, StoreError> {
        let resp = self
            .authed(self.http.get(self.table_url()))
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        let resp = self.check(resp).await?;

        resp.json()
            .await
            .map_err(|e| StoreError::Network(format!("malformed repository response: {e}")))
    }

    async fn insert_product(&self, fields: &ProductFields) -> Result<RawProductRecord, StoreError> {
        let resp = self
            .authed(self.http.post(self.table_url()))
            .header("Prefer", "return=representation")
            .json(&[fields])
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        let resp = self.check(resp).await?;

        self.single_row(resp).await
    }

    async fn update_product(&self, id: &str, fields: &ProductFields) -> Result<RawProductRecord, StoreError> {
        let resp = self
            .authed(self.http.patch(self.table_url()))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(fields)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        let resp = self.check(resp).await?;

        // An empty representation means the id filter matched nothing.
        self.single_row(resp).await.map_err(|e| match e {
            StoreError::NotFound(_) => StoreError::NotFound(id.to_string()),
            other => other,
        })
    }

    async fn delete_product(&self, id: &str) -> Result<(), StoreError> {
        let resp = self
            .authed(self.http.delete(self.table_url()))
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        self.check(resp).await?;
        Ok(())
    }
}

#[async_trait]
impl AssetStore for HostedBackend {
    async fn upload(&self, file: &UploadFile) -> Result<String, StoreError> {
        // Prefix with the upload instant so repeated uploads of the same
        // file name never collide in the bucket.
        let object = format!("{}-{}", Utc::now().timestamp_millis(), file.file_name);
        let upload_url = format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, object);

        let resp = self
            .authed(self.http.post(&upload_url))
            .header(header::CONTENT_TYPE, &file.content_type)
            .body(file.bytes.clone())
            .send()
            .await
            .map_err(|e| StoreError::Upload(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::Upload(format!("{status}: {body}")));
        }

        Ok(format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, object
        ))
    }
}
