//! First-run seeding of an empty store from configuration.
//!
//! Seeding only happens while the store has no categories at all, so restarting
//! with the same config.toml never duplicates rows. Every seed row is checked
//! before anything is written, so a bad entry aborts the seed untouched and a
//! corrected config still seeds on the next run.

use crate::config::InventoryConfig;
use crate::core::{category, product};
use crate::errors::{Error, Result};
use crate::store::InventoryStore;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, instrument};

/// How many rows a seed run added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    /// Categories added
    pub categories: usize,
    /// Products added
    pub products: usize,
}

impl SeedOutcome {
    /// True when the store already held data and nothing was written.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        self.categories == 0 && self.products == 0
    }
}

/// Seeds `store` with the categories and products from `config` if it has no categories yet.
///
/// # Errors
/// Returns an error if any seed row fails validation, if category names repeat
/// while names must be unique, if a product names a category absent from the
/// seed list, or if the database rejects an insert.
#[instrument(skip_all)]
pub async fn seed_if_empty(store: &InventoryStore, config: &InventoryConfig) -> Result<SeedOutcome> {
    if store.count_categories().await? > 0 {
        debug!("Store already has categories, skipping seed");
        return Ok(SeedOutcome::default());
    }

    validate_seed(config, store.options().unique_category_names)?;

    let mut ids = HashMap::new();
    for seed_category in &config.categories {
        let id = store
            .add_category(&seed_category.name, seed_category.description.as_deref())
            .await?;
        // With duplicate names allowed the first one wins, like name lookups
        ids.entry(seed_category.name.trim().to_string()).or_insert(id);
    }

    for seed_product in &config.products {
        let category_id = seed_product
            .category
            .as_ref()
            .and_then(|label| ids.get(label.trim()).copied());
        store
            .add_product(
                &seed_product.name,
                seed_product.quantity,
                seed_product.unit_price,
                category_id,
            )
            .await?;
    }

    let outcome = SeedOutcome {
        categories: config.categories.len(),
        products: config.products.len(),
    };
    info!(
        categories = outcome.categories,
        products = outcome.products,
        "Seeded empty inventory"
    );
    Ok(outcome)
}

fn validate_seed(config: &InventoryConfig, unique_names: bool) -> Result<()> {
    let mut names = HashSet::new();
    for seed_category in &config.categories {
        let name = category::validate_category_name(&seed_category.name)?;
        if !names.insert(name) && unique_names {
            return Err(Error::Config {
                message: format!("Seed category '{name}' is listed more than once"),
            });
        }
    }

    for seed_product in &config.products {
        product::validate_product(
            &seed_product.name,
            seed_product.quantity,
            seed_product.unit_price,
        )?;
        if let Some(label) = &seed_product.category {
            if !names.contains(label.trim()) {
                return Err(Error::Config {
                    message: format!(
                        "Seed product '{}' refers to unknown category '{label}'",
                        seed_product.name
                    ),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::config::{SeedCategory, SeedProduct};
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_seed_empty_store() -> Result<()> {
        let store = setup_test_store().await?;

        let outcome = seed_if_empty(&store, &sample_config()).await?;
        assert_eq!(
            outcome,
            SeedOutcome {
                categories: 2,
                products: 4
            }
        );

        let listings = store.list_products().await?;
        assert_eq!(listings.len(), 4);
        assert_eq!(listings[0].product.name, "Laptop Pro");
        assert_eq!(listings[0].category_name, "Electronics");
        assert_eq!(listings[3].category_name, "Furniture");
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_skips_populated_store() -> Result<()> {
        let store = setup_seeded_store().await?;

        let outcome = seed_if_empty(&store, &sample_config()).await?;
        assert!(outcome.is_skipped());
        assert_eq!(store.list_categories().await?.len(), 2);
        assert_eq!(store.list_products().await?.len(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_unknown_category_writes_nothing() -> Result<()> {
        let store = setup_test_store().await?;
        let config = InventoryConfig {
            categories: vec![SeedCategory {
                name: "Electronics".to_string(),
                description: None,
            }],
            products: vec![SeedProduct {
                name: "Desk".to_string(),
                quantity: 1,
                unit_price: 100.0,
                category: Some("Furniture".to_string()),
            }],
            ..InventoryConfig::default()
        };

        let result = seed_if_empty(&store, &config).await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
        assert!(store.list_categories().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_seed_product_writes_nothing_and_retry_succeeds() -> Result<()> {
        let store = setup_test_store().await?;
        let mut config = sample_config();
        config.products[2].quantity = -1;

        let result = seed_if_empty(&store, &config).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { message: _ }));
        assert!(store.list_categories().await?.is_empty());
        assert!(store.list_products().await?.is_empty());

        // Fixing the config lets the next run seed everything
        config.products[2].quantity = 3;
        let outcome = seed_if_empty(&store, &config).await?;
        assert_eq!(
            outcome,
            SeedOutcome {
                categories: 2,
                products: 4
            }
        );
        assert_eq!(store.list_products().await?.len(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_seed_rows_rejected_up_front() -> Result<()> {
        let store = setup_test_store().await?;

        let mut blank_name = sample_config();
        blank_name.products[0].name = "  ".to_string();
        let mut bad_price = sample_config();
        bad_price.products[1].unit_price = f64::NAN;
        let mut blank_category = sample_config();
        blank_category.categories[1].name = String::new();

        for config in [blank_name, bad_price, blank_category] {
            assert!(seed_if_empty(&store, &config).await.is_err());
            assert_eq!(store.count_categories().await?, 0);
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_seed_categories_rejected_when_unique() -> Result<()> {
        let store = setup_test_store().await?;
        let mut config = sample_config();
        config.categories[1].name = "Electronics".to_string();

        let result = seed_if_empty(&store, &config).await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
        assert_eq!(store.count_categories().await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_uncategorised_product() -> Result<()> {
        let store = setup_test_store().await?;
        let config = InventoryConfig {
            products: vec![SeedProduct {
                name: "Screws".to_string(),
                quantity: 100,
                unit_price: 0.05,
                category: None,
            }],
            ..InventoryConfig::default()
        };

        seed_if_empty(&store, &config).await?;

        let listings = store.list_products().await?;
        assert_eq!(listings.len(), 1);
        assert!(listings[0].product.category_id.is_none());
        Ok(())
    }
}
