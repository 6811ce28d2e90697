//! Store and reporter handles.
//!
//! [`InventoryStore`] owns the database connection and the store options, and is
//! the only thing that mutates categories and products. [`InventoryReporter`]
//! borrows a store and derives read-only views from a fresh listing on every call.

use crate::config::{StoreOptions, database};
use crate::core::product::ProductListing;
use crate::core::report::{self, InventorySummary};
use crate::core::{category, product};
use crate::entities::{category::Model as CategoryModel, product::Model as ProductModel};
use crate::errors::Result;
use sea_orm::DatabaseConnection;
use std::collections::BTreeMap;

/// Authority over the category and product tables.
#[derive(Debug)]
pub struct InventoryStore {
    db: DatabaseConnection,
    options: StoreOptions,
}

impl InventoryStore {
    /// Wraps an existing connection. The schema must already exist.
    #[must_use]
    pub const fn new(db: DatabaseConnection, options: StoreOptions) -> Self {
        Self { db, options }
    }

    /// Connects to `options.database_url` and ensures the schema exists.
    pub async fn open(options: StoreOptions) -> Result<Self> {
        let db = database::open(&options).await?;
        Ok(Self::new(db, options))
    }

    /// The underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// The options this store enforces.
    #[must_use]
    pub const fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// A reporter reading from this store.
    #[must_use]
    pub const fn reporter(&self) -> InventoryReporter<'_> {
        InventoryReporter { store: self }
    }

    /// Adds a category and returns its id.
    pub async fn add_category(&self, name: &str, description: Option<&str>) -> Result<i64> {
        category::create_category(
            &self.db,
            name.to_string(),
            description.map(str::to_string),
            self.options.unique_category_names,
        )
        .await
        .map(|c| c.id)
    }

    /// Deletes a category no product references.
    pub async fn delete_category(&self, category_id: i64) -> Result<()> {
        category::delete_category(&self.db, category_id).await
    }

    /// Adds a product and returns its id.
    pub async fn add_product(
        &self,
        name: &str,
        quantity: i64,
        unit_price: f64,
        category_id: Option<i64>,
    ) -> Result<i64> {
        product::create_product(
            &self.db,
            name.to_string(),
            quantity,
            unit_price,
            category_id,
            self.options.check_category_on_insert,
        )
        .await
        .map(|p| p.id)
    }

    /// Deletes a product by id.
    pub async fn delete_product(&self, product_id: i64) -> Result<()> {
        product::delete_product(&self.db, product_id).await
    }

    /// All products with their category names, ordered by id.
    pub async fn list_products(&self) -> Result<Vec<ProductListing>> {
        product::get_all_product_listings(&self.db).await
    }

    /// All categories, ordered by id.
    pub async fn list_categories(&self) -> Result<Vec<CategoryModel>> {
        category::get_all_categories(&self.db).await
    }

    /// The category with `category_id`, if it exists.
    pub async fn get_category(&self, category_id: i64) -> Result<Option<CategoryModel>> {
        category::get_category_by_id(&self.db, category_id).await
    }

    /// The oldest category named `name` (trimmed), if any.
    pub async fn get_category_by_name(&self, name: &str) -> Result<Option<CategoryModel>> {
        category::get_category_by_name(&self.db, name).await
    }

    /// The product with `product_id`, if it exists.
    pub async fn get_product(&self, product_id: i64) -> Result<Option<ProductModel>> {
        product::get_product_by_id(&self.db, product_id).await
    }

    /// Number of products pointing at `category_id`; the figure the delete guard checks.
    pub async fn count_products_in_category(&self, category_id: i64) -> Result<u64> {
        category::count_products_in_category(&self.db, category_id).await
    }

    /// Number of categories.
    pub async fn count_categories(&self) -> Result<u64> {
        category::count_categories(&self.db).await
    }
}

/// Read-only views over an [`InventoryStore`]. Every call reloads the product listing.
#[derive(Debug, Clone, Copy)]
pub struct InventoryReporter<'a> {
    store: &'a InventoryStore,
}

impl InventoryReporter<'_> {
    /// Products with `quantity < threshold`, in listing order.
    pub async fn low_stock(&self, threshold: u32) -> Result<Vec<ProductListing>> {
        let listings = self.store.list_products().await?;
        Ok(report::filter_low_stock(listings, threshold))
    }

    /// Summed quantity per category name; categories without products are absent.
    pub async fn totals_by_category(&self) -> Result<BTreeMap<String, i64>> {
        let listings = self.store.list_products().await?;
        Ok(report::sum_quantities_by_category(&listings))
    }

    /// Sum of `quantity * unit_price` over all products.
    pub async fn inventory_value(&self) -> Result<f64> {
        let listings = self.store.list_products().await?;
        Ok(report::total_value(&listings))
    }

    /// Summed `quantity * unit_price` per category name.
    pub async fn value_by_category(&self) -> Result<BTreeMap<String, f64>> {
        let listings = self.store.list_products().await?;
        Ok(report::sum_values_by_category(&listings))
    }

    /// Counts, units, value and low-stock count in one pass.
    pub async fn summary(&self, threshold: u32) -> Result<InventorySummary> {
        let listings = self.store.list_products().await?;
        let categories = self.store.list_categories().await?;
        Ok(report::summarize(&listings, categories.len(), threshold))
    }
}
