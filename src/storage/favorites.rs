use std::collections::HashSet;

use anyhow::Result;
use sea_orm::TransactionTrait;

use super::db::LocalStorage;
use crate::repositories::FavoriteRepository;

impl LocalStorage {
    /// Persist the full favorite-id set, replacing the stored one.
    pub async fn store_favorites(&self, favorites: &HashSet<String>) -> Result<()> {
        let txn = self.conn.begin().await?;
        FavoriteRepository::replace_all(&txn, favorites.iter().cloned()).await?;
        txn.commit().await?;
        Ok(())
    }

    /// Load the persisted favorite-id set; empty on first run.
    pub async fn load_favorites(&self) -> Result<HashSet<String>> {
        Ok(FavoriteRepository::get_all(&self.conn)
            .await?
            .into_iter()
            .collect())
    }
}
