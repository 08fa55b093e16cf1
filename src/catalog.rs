// ABOUTME: Read-only food catalog with case-insensitive name/brand search
// ABOUTME: Ships a small bundled reference dataset for demos and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

//! # Food Catalog
//!
//! The catalog is a static, externally supplied, ordered sequence of
//! [`FoodItem`]. The core never mutates it; selection copies items by value
//! into the ledger. Search is the one catalog concern the core exposes:
//! case-insensitive substring match against name or brand.

use crate::models::{FoodItem, ServingSize};

/// Read-only ordered collection of catalog food items
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    items: Vec<FoodItem>,
}

impl FoodCatalog {
    /// Wrap an externally supplied item list, preserving its order
    #[must_use]
    pub fn new(items: Vec<FoodItem>) -> Self {
        Self { items }
    }

    /// The bundled sample reference dataset (eight everyday foods). Real
    /// deployments supply their own catalog; this one backs demos and tests.
    #[must_use]
    pub fn reference() -> Self {
        Self::new(vec![
            FoodItem::new(
                "1",
                "Apple",
                "Nature's Harvest",
                95.0,
                0.5,
                2.0,
                ServingSize::new(150.0, "grams"),
            ),
            FoodItem::new(
                "2",
                "Banana",
                "Tropical Fresh",
                105.0,
                1.3,
                1.0,
                ServingSize::new(118.0, "grams"),
            ),
            FoodItem::new(
                "3",
                "Chicken Breast",
                "Premium Poultry Co.",
                165.0,
                31.0,
                74.0,
                ServingSize::new(4.0, "oz"),
            ),
            FoodItem::new(
                "4",
                "Brown Rice",
                "Golden Grains",
                110.0,
                2.5,
                5.0,
                ServingSize::new(0.5, "cup"),
            ),
            FoodItem::new(
                "5",
                "Broccoli",
                "Green Valley Farms",
                55.0,
                3.7,
                33.0,
                ServingSize::new(91.0, "grams"),
            ),
            FoodItem::new(
                "6",
                "Salmon",
                "Ocean Fresh Seafood",
                208.0,
                25.0,
                59.0,
                ServingSize::new(3.0, "oz"),
            ),
            FoodItem::new(
                "7",
                "Sweet Potato",
                "Root Harvest",
                103.0,
                2.0,
                41.0,
                ServingSize::new(130.0, "grams"),
            ),
            FoodItem::new(
                "8",
                "Greek Yogurt",
                "Mediterranean Dairy",
                130.0,
                23.0,
                36.0,
                ServingSize::new(0.75, "cup"),
            ),
        ])
    }

    /// All items in catalog order
    #[must_use]
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Look up an item by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FoodItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Case-insensitive substring search against name or brand. An empty
    /// query matches everything, preserving catalog order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&FoodItem> {
        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                item.name.to_lowercase().contains(&needle)
                    || item.brand.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Number of items in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let catalog = FoodCatalog::reference();
        let hits = catalog.search("aPpLe");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Apple");
    }

    #[test]
    fn test_search_matches_brand_substring() {
        let catalog = FoodCatalog::reference();
        let hits = catalog.search("fresh");
        let names: Vec<&str> = hits.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, ["Banana", "Salmon"]);
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let catalog = FoodCatalog::reference();
        assert_eq!(catalog.search("").len(), catalog.len());
        assert_eq!(catalog.items()[0].id, "1");
    }

    #[test]
    fn test_no_match_returns_empty() {
        let catalog = FoodCatalog::reference();
        assert!(catalog.search("pizza").is_empty());
        assert!(catalog.get("99").is_none());
    }
}
