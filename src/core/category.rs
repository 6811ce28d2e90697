//! Category business logic - Handles all category-related operations.
//!
//! Categories are only ever added or removed. Removal is guarded: the products
//! referencing a category are counted first and any non-zero count blocks the
//! delete. All functions are async and return Result types.

use crate::{
    entities::{Category, Product, category, product},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};
use tracing::{debug, info, instrument, warn};

/// Retrieves all categories, ordered by id (creation order).
pub async fn get_all_categories(db: &DatabaseConnection) -> Result<Vec<category::Model>> {
    Category::find()
        .order_by_asc(category::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a category by its unique ID.
pub async fn get_category_by_id(
    db: &DatabaseConnection,
    category_id: i64,
) -> Result<Option<category::Model>> {
    Category::find_by_id(category_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a category by name. Surrounding whitespace in `name` is ignored.
pub async fn get_category_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<category::Model>> {
    Category::find()
        .filter(category::Column::Name.eq(name.trim()))
        .order_by_asc(category::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Counts the categories in the store.
pub async fn count_categories(db: &DatabaseConnection) -> Result<u64> {
    Category::find().count(db).await.map_err(Into::into)
}

/// Counts the products whose `category_id` points at `category_id`.
pub async fn count_products_in_category(db: &DatabaseConnection, category_id: i64) -> Result<u64> {
    Product::find()
        .filter(product::Column::CategoryId.eq(category_id))
        .count(db)
        .await
        .map_err(Into::into)
}

/// Checks a category name and returns it trimmed.
///
/// # Errors
/// Returns a validation error if the name is empty or whitespace-only.
pub fn validate_category_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Validation {
            message: "Category name cannot be empty".to_string(),
        });
    }
    Ok(name)
}

/// Creates a new category.
///
/// The name is trimmed; a blank description is stored as `None`. With
/// `unique_names` set an existing category of the same name is a conflict.
///
/// # Errors
/// Returns an error if:
/// - The name is empty or whitespace-only
/// - `unique_names` is set and the name is already taken
/// - The database insert operation fails
#[instrument(skip(db, description))]
pub async fn create_category(
    db: &DatabaseConnection,
    name: String,
    description: Option<String>,
    unique_names: bool,
) -> Result<category::Model> {
    let name = validate_category_name(&name)?;

    if unique_names && get_category_by_name(db, name).await?.is_some() {
        return Err(Error::Conflict {
            message: format!("Category '{name}' already exists"),
        });
    }

    let description = description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    let category = category::ActiveModel {
        name: Set(name.to_string()),
        description: Set(description),
        ..Default::default()
    };
    let created = category.insert(db).await?;
    debug!(category_id = created.id, "Category created");
    Ok(created)
}

/// Deletes a category that no product references.
///
/// # Errors
/// Returns an error if:
/// - The category does not exist
/// - One or more products still reference it (the category is left intact)
/// - The database delete operation fails
#[instrument(skip(db))]
pub async fn delete_category(db: &DatabaseConnection, category_id: i64) -> Result<()> {
    let category = Category::find_by_id(category_id)
        .one(db)
        .await?
        .ok_or(Error::CategoryNotFound { id: category_id })?;

    let product_count = count_products_in_category(db, category_id).await?;
    if product_count > 0 {
        warn!(product_count, "Refusing to delete category still in use");
        return Err(Error::CategoryInUse {
            id: category_id,
            product_count,
        });
    }

    let name = category.name.clone();
    category.delete(db).await?;
    info!(%name, "Category deleted");
    Ok(())
}
