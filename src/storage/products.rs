use anyhow::Result;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, TransactionTrait};

use super::db::LocalStorage;
use crate::catalog::Product;
use crate::entities::product;
use crate::repositories::ProductRepository;

impl From<product::Model> for Product {
    fn from(row: product::Model) -> Self {
        Self {
            id: row.id,
            name: row.name,
            short_description: row.short_description,
            full_description: row.full_description,
            price_minor: row.price_minor,
            image_url: row.image_url,
            created_at: row
                .created_at
                .as_deref()
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                .map(|d| d.with_timezone(&Utc)),
        }
    }
}

fn to_row(product: &Product, position: i32) -> product::ActiveModel {
    product::ActiveModel {
        id: ActiveValue::Set(product.id.clone()),
        name: ActiveValue::Set(product.name.clone()),
        short_description: ActiveValue::Set(product.short_description.clone()),
        full_description: ActiveValue::Set(product.full_description.clone()),
        price_minor: ActiveValue::Set(product.price_minor),
        image_url: ActiveValue::Set(product.image_url.clone()),
        created_at: ActiveValue::Set(product.created_at.map(|d| d.to_rfc3339())),
        position: ActiveValue::Set(position),
    }
}

impl LocalStorage {
    /// Write a product-list snapshot, replacing the previous one. Row
    /// positions record the list order so a restore reproduces it.
    pub async fn store_products(&self, products: &[Product]) -> Result<()> {
        let rows = products
            .iter()
            .enumerate()
            .map(|(i, p)| to_row(p, i as i32))
            .collect();

        let txn = self.conn.begin().await?;
        ProductRepository::replace_all(&txn, rows).await?;
        txn.commit().await?;
        Ok(())
    }

    /// Load the cached product snapshot in its stored order.
    pub async fn load_products(&self) -> Result<Vec<Product>> {
        Ok(ProductRepository::get_all(&self.conn)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
