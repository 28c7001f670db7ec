//! Product snapshot queries for the cache database.

use anyhow::Result;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::product;

/// Repository for cached product rows.
pub struct ProductRepository;

impl ProductRepository {
    /// All cached products in their snapshot order.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<product::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(product::Entity::find()
            .order_by_asc(product::Column::Position)
            .all(conn)
            .await?)
    }

    /// A single cached product by id.
    pub async fn get_by_id<C>(conn: &C, id: &str) -> Result<Option<product::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(product::Entity::find()
            .filter(product::Column::Id.eq(id))
            .one(conn)
            .await?)
    }

    /// Replace the whole snapshot. The cache mirrors the in-memory list
    /// wholesale; there is no row-level merge.
    pub async fn replace_all<C>(conn: &C, rows: Vec<product::ActiveModel>) -> Result<()>
    where
        C: ConnectionTrait,
    {
        product::Entity::delete_many().exec(conn).await?;
        if !rows.is_empty() {
            product::Entity::insert_many(rows).exec(conn).await?;
        }
        Ok(())
    }
}
