use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A single wishlist entry. `created_at` is Unix seconds, set once at
/// insertion; only `fulfilled` is ever updated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wishes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub item: String,
    pub fulfilled: bool,
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}
