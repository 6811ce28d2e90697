//! Report generation business logic.
//!
//! Pure functions over a product listing (low-stock filtering, per-category
//! totals, valuation) plus formatting helpers. Nothing here touches the
//! database; [`crate::store::InventoryReporter`] feeds these from a fresh
//! listing on every call.

use crate::core::product::ProductListing;
use serde::Serialize;
use std::collections::BTreeMap;

/// Stock classification of a single product against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StockLevel {
    /// Quantity strictly below the threshold
    Low,
    /// Quantity at or above the threshold
    Sufficient,
}

/// Aggregate snapshot of the whole inventory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventorySummary {
    /// Number of products
    pub product_count: usize,
    /// Number of categories
    pub category_count: usize,
    /// Sum of all quantities
    pub total_units: i64,
    /// Sum of `quantity * unit_price` over all products
    pub total_value: f64,
    /// Threshold the low-stock count was taken against
    pub low_stock_threshold: u32,
    /// Number of products below the threshold
    pub low_stock_count: usize,
}

/// Classifies `quantity` against `threshold`. Equal to the threshold is not low.
#[must_use]
pub fn stock_level(quantity: i64, threshold: u32) -> StockLevel {
    if quantity < i64::from(threshold) {
        StockLevel::Low
    } else {
        StockLevel::Sufficient
    }
}

/// Keeps the listings whose quantity is below `threshold`, preserving order.
#[must_use]
pub fn filter_low_stock(listings: Vec<ProductListing>, threshold: u32) -> Vec<ProductListing> {
    listings
        .into_iter()
        .filter(|l| stock_level(l.product.quantity, threshold) == StockLevel::Low)
        .collect()
}

/// Sums quantities per category label. Only labels that occur in `listings` appear.
///
/// Totals saturate at `i64::MAX` instead of overflowing.
#[must_use]
pub fn sum_quantities_by_category(listings: &[ProductListing]) -> BTreeMap<String, i64> {
    let mut totals = BTreeMap::new();
    for listing in listings {
        let total = totals.entry(listing.category_name.clone()).or_insert(0_i64);
        *total = total.saturating_add(listing.product.quantity);
    }
    totals
}

/// Sum of all quantities, saturating at `i64::MAX`.
#[must_use]
pub fn total_units(listings: &[ProductListing]) -> i64 {
    listings
        .iter()
        .fold(0_i64, |acc, l| acc.saturating_add(l.product.quantity))
}

/// Sums `quantity * unit_price` per category label.
#[must_use]
pub fn sum_values_by_category(listings: &[ProductListing]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for listing in listings {
        *totals.entry(listing.category_name.clone()).or_insert(0.0) += listing.product.value();
    }
    totals
}

/// Sums `quantity * unit_price` over all listings; 0 for an empty slice.
#[must_use]
pub fn total_value(listings: &[ProductListing]) -> f64 {
    listings.iter().fold(0.0, |acc, l| acc + l.product.value())
}

/// Builds an [`InventorySummary`] from a listing and the category count.
#[must_use]
pub fn summarize(
    listings: &[ProductListing],
    category_count: usize,
    threshold: u32,
) -> InventorySummary {
    InventorySummary {
        product_count: listings.len(),
        category_count,
        total_units: total_units(listings),
        total_value: total_value(listings),
        low_stock_threshold: threshold,
        low_stock_count: listings
            .iter()
            .filter(|l| stock_level(l.product.quantity, threshold) == StockLevel::Low)
            .count(),
    }
}

/// Formats a monetary amount with two decimals, e.g. `24750.00`.
#[must_use]
pub fn format_value(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Formats one listing as a table row, marking low stock with `!`.
///
/// Example: `#2 Desk [Furniture] qty 3 @ 850.00 !`
#[must_use]
pub fn format_listing(listing: &ProductListing, threshold: u32) -> String {
    let product = &listing.product;
    let marker = match stock_level(product.quantity, threshold) {
        StockLevel::Low => " !",
        StockLevel::Sufficient => "",
    };
    let category = if listing.category_name.is_empty() {
        "-"
    } else {
        listing.category_name.as_str()
    };
    format!(
        "#{} {} [{category}] qty {} @ {}{marker}",
        product.id,
        product.name,
        product.quantity,
        format_value(product.unit_price)
    )
}
