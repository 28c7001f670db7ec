//! Favorite-set queries for the cache database.

use anyhow::Result;
use sea_orm::{ActiveValue, ConnectionTrait, EntityTrait};

use crate::entities::favorite;

/// Repository for the persisted favorite-id set.
pub struct FavoriteRepository;

impl FavoriteRepository {
    /// All favorited product ids.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<String>>
    where
        C: ConnectionTrait,
    {
        Ok(favorite::Entity::find()
            .all(conn)
            .await?
            .into_iter()
            .map(|row| row.product_id)
            .collect())
    }

    /// Re-persist the full set. Toggles write the whole set rather than
    /// diffing, so the stored rows always match the in-memory set.
    pub async fn replace_all<C, I>(conn: &C, ids: I) -> Result<()>
    where
        C: ConnectionTrait,
        I: IntoIterator<Item = String>,
    {
        favorite::Entity::delete_many().exec(conn).await?;
        let rows: Vec<favorite::ActiveModel> = ids
            .into_iter()
            .map(|id| favorite::ActiveModel {
                product_id: ActiveValue::Set(id),
            })
            .collect();
        if !rows.is_empty() {
            favorite::Entity::insert_many(rows).exec(conn).await?;
        }
        Ok(())
    }
}
