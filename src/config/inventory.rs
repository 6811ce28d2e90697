//! Inventory configuration loading from config.toml
//!
//! The `[store]` table carries the store options; `[[categories]]` and
//! `[[products]]` carry the seed data written into an empty store on first run.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Highest low-stock threshold accepted from configuration.
pub const MAX_LOW_STOCK_THRESHOLD: u32 = 50;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Default)]
pub struct InventoryConfig {
    /// Store behaviour and database location
    #[serde(default)]
    pub store: StoreOptions,
    /// Categories to seed into an empty store
    #[serde(default)]
    pub categories: Vec<SeedCategory>,
    /// Products to seed into an empty store
    #[serde(default)]
    pub products: Vec<SeedProduct>,
}

/// Options controlling how the store enforces its rules.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StoreOptions {
    /// Database URL passed to `SeaORM`
    pub database_url: String,
    /// Reject a second category with the same name. Also decides whether the
    /// unique index on category names exists; it is dropped when this is off.
    pub unique_category_names: bool,
    /// Reject products whose `category_id` names no existing category
    pub check_category_on_insert: bool,
    /// Quantity below which a product counts as low stock
    pub low_stock_threshold: u32,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            database_url: "sqlite://stockroom.sqlite?mode=rwc".to_string(),
            unique_category_names: true,
            check_category_on_insert: false,
            low_stock_threshold: 5,
        }
    }
}

/// A category to seed
#[derive(Debug, Deserialize, Clone)]
pub struct SeedCategory {
    /// Category name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
}

/// A product to seed
#[derive(Debug, Deserialize, Clone)]
pub struct SeedProduct {
    /// Product name
    pub name: String,
    /// Units in stock
    #[serde(default)]
    pub quantity: i64,
    /// Price per unit
    #[serde(default)]
    pub unit_price: f64,
    /// Name of a seeded category, or none for an uncategorised product
    pub category: Option<String>,
}

impl InventoryConfig {
    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed or the low-stock threshold
    /// is above [`MAX_LOW_STOCK_THRESHOLD`].
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(|e| Error::Config {
            message: format!("Failed to parse config.toml: {e}"),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.store.low_stock_threshold > MAX_LOW_STOCK_THRESHOLD {
            return Err(Error::Config {
                message: format!(
                    "low_stock_threshold must be between 0 and {MAX_LOW_STOCK_THRESHOLD}, got {}",
                    self.store.low_stock_threshold
                ),
            });
        }
        Ok(())
    }
}

/// Loads inventory configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A value is out of range
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<InventoryConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    InventoryConfig::from_toml(&contents)
}

/// Loads inventory configuration from the default location (./config.toml)
pub fn load_default_config() -> Result<InventoryConfig> {
    load_config("config.toml")
}
