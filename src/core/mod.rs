//! Core business logic - framework-agnostic category, product, reporting and seeding operations.

/// Category creation, lookup and guarded deletion
pub mod category;
/// Product creation, lookup, listing and deletion
pub mod product;
/// Read-only inventory reports
pub mod report;
/// First-run seeding from configuration
pub mod seed;
