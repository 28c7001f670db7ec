use anyhow::{Context, Result};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::entities::{favorite, product, setting};

/// Cache database handle. Holds the SeaORM connection the repositories
/// run their queries on.
pub struct LocalStorage {
    pub conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open the cache database and make sure the schema exists.
    ///
    /// `in_memory` keeps everything in a private SQLite memory database,
    /// used by tests and by deployments that opt out of disk caching.
    pub async fn new(in_memory: bool) -> Result<Self> {
        let url = if in_memory {
            "sqlite::memory:".to_string()
        } else {
            let dir = dirs::data_dir()
                .context("could not determine data directory for the cache database")?
                .join("heliostore");
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create cache directory: {}", dir.display()))?;
            format!("sqlite://{}?mode=rwc", dir.join("cache.db").display())
        };

        let conn = Database::connect(&url)
            .await
            .with_context(|| format!("failed to open cache database: {url}"))?;

        let storage = Self { conn };
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Create the snapshot tables if they are missing.
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut statements = vec![
            schema.create_table_from_entity(product::Entity),
            schema.create_table_from_entity(favorite::Entity),
            schema.create_table_from_entity(setting::Entity),
        ];
        for stmt in &mut statements {
            stmt.if_not_exists();
            self.conn.execute(backend.build(&*stmt)).await?;
        }

        Ok(())
    }

    /// Whether the cache holds a product snapshot from a previous run.
    pub async fn has_data(&self) -> Result<bool> {
        use sea_orm::EntityTrait;
        Ok(product::Entity::find().one(&self.conn).await?.is_some())
    }

    /// Drop every cached row (reset helper).
    pub async fn clear_all_data(&self) -> Result<()> {
        use sea_orm::EntityTrait;
        product::Entity::delete_many().exec(&self.conn).await?;
        favorite::Entity::delete_many().exec(&self.conn).await?;
        setting::Entity::delete_many().exec(&self.conn).await?;
        Ok(())
    }
}
