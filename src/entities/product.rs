use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Cached snapshot of a catalog product. `position` preserves the exact
/// list order the snapshot was taken in, so a cache restore reproduces
/// the creation-descending view without re-sorting.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub short_description: String,
    pub full_description: String,
    pub price_minor: i64,
    pub image_url: String,
    pub created_at: Option<String>,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
