//! Database configuration module.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the schema always matches the Rust structs without hand-written SQL. The optional
//! unique index on category names is added on top when the store options ask for it.

use crate::config::StoreOptions;
use crate::entities::{Category, CategoryColumn, Product};
use crate::errors::Result;
use sea_orm::sea_query::Index;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info, instrument};

/// Name of the unique index guarding category names.
pub const CATEGORY_NAME_INDEX: &str = "idx_categories_name_unique";

/// Opens a connection to the database at `database_url`.
///
/// `sqlite::memory:` gives a private in-memory database, which is what the tests use.
#[instrument]
pub async fn connect(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Opening database connection");
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates the category and product tables if they do not exist yet.
///
/// When `options.unique_category_names` is set a unique index on `categories.name`
/// is created as well, so the engine backs up the store's own duplicate check.
/// When it is not set, an index left behind by an earlier run is dropped, so the
/// option always reflects the current configuration. Turning it on over a table
/// that already holds duplicate names fails with a conflict.
pub async fn create_tables(db: &DatabaseConnection, options: &StoreOptions) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut category_table = schema.create_table_from_entity(Category);
    category_table.if_not_exists();
    let mut product_table = schema.create_table_from_entity(Product);
    product_table.if_not_exists();

    db.execute(builder.build(&category_table)).await?;
    db.execute(builder.build(&product_table)).await?;

    if options.unique_category_names {
        let index = Index::create()
            .name(CATEGORY_NAME_INDEX)
            .table(Category)
            .col(CategoryColumn::Name)
            .unique()
            .if_not_exists()
            .to_owned();
        db.execute(builder.build(&index)).await?;
    } else {
        db.execute_unprepared(&format!("DROP INDEX IF EXISTS {CATEGORY_NAME_INDEX}"))
            .await?;
    }

    info!(
        unique_category_names = options.unique_category_names,
        "Database tables ensured"
    );
    Ok(())
}

/// Connects to `options.database_url` and ensures the schema exists.
pub async fn open(options: &StoreOptions) -> Result<DatabaseConnection> {
    let db = connect(&options.database_url).await?;
    create_tables(&db, options).await?;
    Ok(db)
}
