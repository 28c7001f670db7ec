#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use heliostore::backend::{AssetStore, ProductBackend, ProductFields, RawPrice, RawProductRecord};
use heliostore::catalog::{CatalogStore, Product};
use heliostore::error::StoreError;
use heliostore::storage::LocalStorage;
use heliostore::upload::UploadFile;

/// Scripted in-memory product repository. Failure flags make individual
/// operations return network errors; every call is recorded so tests can
/// assert that an operation never reached the wire.
#[derive(Default)]
pub struct MockBackend {
    pub rows: StdMutex<Vec<RawProductRecord>>,
    pub fail_list: AtomicBool,
    pub fail_insert: AtomicBool,
    pub fail_update: AtomicBool,
    pub fail_delete: AtomicBool,
    pub calls: StdMutex<Vec<String>>,
    next_id: AtomicUsize,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<RawProductRecord>) -> Self {
        let backend = Self::default();
        *backend.rows.lock().unwrap() = rows;
        backend
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }
}

#[async_trait]
impl ProductBackend for MockBackend {
    async fn list_products(&self) -> Result<Vec<RawProductRecord>, StoreError> {
        self.record("list");
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(StoreError::Network("list failed".to_string()));
        }
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn insert_product(&self, fields: &ProductFields) -> Result<RawProductRecord, StoreError> {
        self.record("insert");
        if self.fail_insert.load(Ordering::SeqCst) {
            return Err(StoreError::Network("insert failed".to_string()));
        }
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let raw = RawProductRecord {
            id: format!("srv-{n}"),
            name: Some(fields.name.clone()),
            short_description: Some(fields.short_description.clone()),
            full_description: Some(fields.full_description.clone()),
            price_cents: Some(RawPrice::Int(fields.price_cents)),
            image_url: if fields.image_url.is_empty() {
                None
            } else {
                Some(fields.image_url.clone())
            },
            created_at: Some(Utc::now()),
            ..Default::default()
        };
        self.rows.lock().unwrap().insert(0, raw.clone());
        Ok(raw)
    }

    async fn update_product(&self, id: &str, fields: &ProductFields) -> Result<RawProductRecord, StoreError> {
        self.record("update");
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(StoreError::Network("update failed".to_string()));
        }
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        row.name = Some(fields.name.clone());
        row.short_description = Some(fields.short_description.clone());
        row.full_description = Some(fields.full_description.clone());
        row.price_cents = Some(RawPrice::Int(fields.price_cents));
        row.image_url = Some(fields.image_url.clone());
        Ok(row.clone())
    }

    async fn delete_product(&self, id: &str) -> Result<(), StoreError> {
        self.record("delete");
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(StoreError::Network("delete failed".to_string()));
        }
        self.rows.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }
}

/// Scripted asset store returning deterministic URLs.
#[derive(Default)]
pub struct MockAssetStore {
    pub fail: AtomicBool,
    pub uploaded: StdMutex<Vec<String>>,
}

impl MockAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uploaded(&self) -> Vec<String> {
        self.uploaded.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssetStore for MockAssetStore {
    async fn upload(&self, file: &UploadFile) -> Result<String, StoreError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(StoreError::Upload("upload failed".to_string()));
        }
        self.uploaded.lock().unwrap().push(file.file_name.clone());
        Ok(format!("https://assets.test/{}", file.file_name))
    }
}

pub const PLACEHOLDER: &str = "/assets/placeholder.svg";

pub fn raw(id: &str, name: &str, price: i64) -> RawProductRecord {
    RawProductRecord {
        id: id.to_string(),
        name: Some(name.to_string()),
        short_description: Some(format!("{name} short")),
        full_description: Some(format!("{name} full")),
        price_cents: Some(RawPrice::Int(price)),
        image_url: Some(format!("https://assets.test/{id}.jpg")),
        created_at: Some(Utc::now()),
        ..Default::default()
    }
}

pub fn product(id: &str, name: &str, price: i64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        short_description: format!("{name} short"),
        full_description: format!("{name} full"),
        price_minor: price,
        image_url: format!("https://assets.test/{id}.jpg"),
        created_at: Some(Utc::now()),
    }
}

pub fn upload_file(file_name: &str) -> UploadFile {
    UploadFile {
        file_name: file_name.to_string(),
        content_type: "image/jpeg".to_string(),
        bytes: vec![0xff, 0xd8, 0xff],
    }
}

/// In-memory cache plus an empty catalog store on top of it.
pub async fn mem_store() -> (Arc<Mutex<LocalStorage>>, Arc<CatalogStore>) {
    let storage = Arc::new(Mutex::new(
        LocalStorage::new(true).await.expect("in-memory cache"),
    ));
    let store = Arc::new(CatalogStore::new(Arc::clone(&storage)));
    (storage, store)
}
