#![allow(clippy::expect_used)]

//! Shared test utilities.
//!
//! This module provides common helper functions for setting up in-memory test
//! databases and creating test rows with sensible defaults.

use crate::{
    config::{InventoryConfig, StoreOptions, database},
    core::{category, product, seed},
    entities,
    errors::Result,
    store::InventoryStore,
};
use sea_orm::DatabaseConnection;

const SAMPLE_CONFIG: &str = r#"
[[categories]]
name = "Electronics"
description = "Electronic devices"

[[categories]]
name = "Furniture"
description = "Interior furnishings"

[[products]]
name = "Laptop Pro"
quantity = 5
unit_price = 4500.0
category = "Electronics"

[[products]]
name = "Phone X"
quantity = 12
unit_price = 2999.99
category = "Electronics"

[[products]]
name = "Loft Desk"
quantity = 3
unit_price = 850.0
category = "Furniture"

[[products]]
name = "Office Chair"
quantity = 10
unit_price = 450.0
category = "Furniture"
"#;

/// Default options pointed at an in-memory database.
pub fn test_options() -> StoreOptions {
    StoreOptions {
        database_url: "sqlite::memory:".to_string(),
        ..StoreOptions::default()
    }
}

/// In-memory options with duplicate category names allowed.
pub fn lenient_options() -> StoreOptions {
    StoreOptions {
        unique_category_names: false,
        ..test_options()
    }
}

/// Two categories and four products, mirroring the shipped config.toml.
pub fn sample_config() -> InventoryConfig {
    InventoryConfig::from_toml(SAMPLE_CONFIG).expect("sample config parses")
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    setup_test_db_with(&test_options()).await
}

/// Like [`setup_test_db`] but with custom options (e.g. no unique index).
pub async fn setup_test_db_with(options: &StoreOptions) -> Result<DatabaseConnection> {
    let db = database::connect("sqlite::memory:").await?;
    database::create_tables(&db, options).await?;
    Ok(db)
}

/// An empty in-memory store with default options.
pub async fn setup_test_store() -> Result<InventoryStore> {
    setup_test_store_with(test_options()).await
}

/// An empty in-memory store with custom options.
pub async fn setup_test_store_with(options: StoreOptions) -> Result<InventoryStore> {
    InventoryStore::open(options).await
}

/// A store seeded from [`sample_config`].
pub async fn setup_seeded_store() -> Result<InventoryStore> {
    let store = setup_test_store().await?;
    seed::seed_if_empty(&store, &sample_config()).await?;
    Ok(store)
}

/// Creates a test category with no description.
pub async fn create_test_category(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::category::Model> {
    category::create_category(db, name.to_string(), None, true).await
}

/// Creates a test product.
///
/// # Defaults
/// * `unit_price`: 10.0
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    quantity: i64,
    category_id: Option<i64>,
) -> Result<entities::product::Model> {
    product::create_product(db, name.to_string(), quantity, 10.0, category_id, false).await
}

/// Sets up a complete test environment with one category.
/// Returns (db, category) for common test scenarios.
pub async fn setup_with_category() -> Result<(DatabaseConnection, entities::category::Model)> {
    let db = setup_test_db().await?;
    let category = create_test_category(&db, "Test Category").await?;
    Ok((db, category))
}
