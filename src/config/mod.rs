/// Database connection and schema creation
pub mod database;

/// Store options and seed data loading from config.toml
pub mod inventory;

pub use inventory::{InventoryConfig, SeedCategory, SeedProduct, StoreOptions};
