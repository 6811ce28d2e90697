use stockroom::config::inventory::load_default_config;
use stockroom::core::{report, seed};
use stockroom::{InventoryStore, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load config.toml from the working directory
    let config = load_default_config()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;
    let threshold = config.store.low_stock_threshold;

    // 3. Open the store (creates tables if needed)
    let store = InventoryStore::open(config.store.clone())
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 4. Seed an empty store
    seed::seed_if_empty(&store, &config)
        .await
        .inspect_err(|e| error!("Failed to seed inventory: {}", e))?;

    // 5. Log the current state
    let reporter = store.reporter();
    let summary = reporter.summary(threshold).await?;
    info!(
        products = summary.product_count,
        categories = summary.category_count,
        units = summary.total_units,
        value = %report::format_value(summary.total_value),
        low_stock = summary.low_stock_count,
        "Inventory loaded"
    );

    for listing in store.list_products().await? {
        info!("{}", report::format_listing(&listing, threshold));
    }
    for (category, value) in reporter.value_by_category().await? {
        info!(category = %category, value = %report::format_value(value), "Category value");
    }

    Ok(())
}
