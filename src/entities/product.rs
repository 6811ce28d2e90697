//! Product entity - A stocked item with a quantity and a unit price.
//!
//! The category link is a plain nullable column. It is joined through a
//! hand-written relation rather than a derived `belongs_to`, so no foreign key
//! is emitted into the schema; the store checks references itself.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the product (e.g., "Laptop Pro")
    pub name: String,
    /// Units in stock, never negative
    #[sea_orm(default_value = 0)]
    pub quantity: i64,
    /// Price per unit, never negative
    #[sea_orm(default_value = 0.0)]
    pub unit_price: f64,
    /// Owning category, if any
    pub category_id: Option<i64>,
}

impl Model {
    /// Stock value of this product (`quantity * unit_price`).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn value(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Entity::belongs_to(super::category::Entity)
            .from(Column::CategoryId)
            .to(super::category::Column::Id)
            .into()
    }
}

impl ActiveModelBehavior for ActiveModel {}
