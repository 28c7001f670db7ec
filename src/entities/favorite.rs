use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A favorited product id. Membership is independent of the product's
/// lifecycle; an id may outlive the product it once pointed at.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
