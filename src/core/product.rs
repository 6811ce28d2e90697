//! Product business logic - Handles all product-related operations.
//!
//! This module provides functions for creating, retrieving, listing and deleting
//! products. Products are never edited after creation. Listings join each product
//! with its category label using left-join semantics, so a product whose category
//! is missing still shows up with an empty label. All functions are async and
//! return Result types for proper error handling throughout the system.

use crate::{
    entities::{Category, Product, category, product},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// A product together with the name of its category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductListing {
    /// The product row
    pub product: product::Model,
    /// Category name, empty when the product has no (existing) category
    pub category_name: String,
}

impl ProductListing {
    fn from_join(product: product::Model, category: Option<category::Model>) -> Self {
        Self {
            product,
            category_name: category.map(|c| c.name).unwrap_or_default(),
        }
    }
}

/// Retrieves all products joined with their category names, ordered by product id.
pub async fn get_all_product_listings(db: &DatabaseConnection) -> Result<Vec<ProductListing>> {
    let rows = Product::find()
        .find_also_related(Category)
        .order_by_asc(product::Column::Id)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(product, category)| ProductListing::from_join(product, category))
        .collect())
}

/// Retrieves a specific product by its unique ID.
pub async fn get_product_by_id(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Checks the fields of a new product and returns the trimmed name.
///
/// # Errors
/// Returns a validation error if the name is blank, the quantity is negative,
/// or the unit price is negative or not finite.
pub fn validate_product(name: &str, quantity: i64, unit_price: f64) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Validation {
            message: "Product name cannot be empty".to_string(),
        });
    }

    if quantity < 0 {
        return Err(Error::Validation {
            message: format!("Quantity cannot be negative: {quantity}"),
        });
    }

    if unit_price < 0.0 || !unit_price.is_finite() {
        return Err(Error::Validation {
            message: format!("Unit price must be a non-negative number: {unit_price}"),
        });
    }

    Ok(name)
}

/// Creates a new product, performing input validation.
///
/// The name is trimmed. `category_id` is taken as given unless
/// `check_category` is set, in which case it must name an existing category.
///
/// # Errors
/// Returns an error if:
/// - The product name is empty or whitespace-only
/// - The quantity is negative
/// - The unit price is negative or not finite (NaN, infinity)
/// - `check_category` is set and the category does not exist
/// - The database insert operation fails
#[instrument(skip(db))]
pub async fn create_product(
    db: &DatabaseConnection,
    name: String,
    quantity: i64,
    unit_price: f64,
    category_id: Option<i64>,
    check_category: bool,
) -> Result<product::Model> {
    let name = validate_product(&name, quantity, unit_price)?;

    if check_category {
        if let Some(id) = category_id {
            Category::find_by_id(id)
                .one(db)
                .await?
                .ok_or(Error::CategoryNotFound { id })?;
        }
    }

    let product = product::ActiveModel {
        name: Set(name.to_string()),
        quantity: Set(quantity),
        unit_price: Set(unit_price),
        category_id: Set(category_id),
        ..Default::default()
    };
    let created = product.insert(db).await?;
    debug!(product_id = created.id, "Product created");
    Ok(created)
}

/// Deletes a product by id. Nothing references products, so this never cascades.
///
/// # Errors
/// Returns an error if:
/// - The product does not exist
/// - The database delete operation fails
#[instrument(skip(db))]
pub async fn delete_product(db: &DatabaseConnection, product_id: i64) -> Result<()> {
    let product = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?;

    let name = product.name.clone();
    product.delete(db).await?;
    info!(%name, "Product deleted");
    Ok(())
}
