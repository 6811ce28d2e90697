//! Category entity - A named grouping for products.
//!
//! Categories are created and deleted but never edited. A category cannot be
//! deleted while any product still points at it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Unique identifier for the category
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name (e.g., "Electronics", "Furniture")
    pub name: String,
    /// Free-form description, absent when none was given
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Entity::has_many(super::product::Entity).into()
    }
}

impl ActiveModelBehavior for ActiveModel {}
