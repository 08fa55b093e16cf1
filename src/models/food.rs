// ABOUTME: Catalog food item types with per-serving nutrition values
// ABOUTME: FoodItem and ServingSize definitions, immutable once constructed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

use serde::{Deserialize, Serialize};

/// Serving size descriptor for a catalog item.
///
/// The unit is an opaque display string ("grams", "oz", "cup"); no unit
/// conversion or normalization happens anywhere in the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServingSize {
    /// Amount per serving, in `unit`
    pub value: f64,
    /// Display unit, never interpreted
    pub unit: String,
}

impl ServingSize {
    /// Create a serving size descriptor
    #[must_use]
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

/// A single catalog food item with nutrition per serving.
///
/// Invariants (upheld by the catalog supplier): nutrition fields are
/// non-negative and `id` is unique within the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Unique identifier within the catalog
    pub id: String,
    /// Food name
    pub name: String,
    /// Brand name
    pub brand: String,
    /// Calories per serving (kcal)
    pub calories: f64,
    /// Protein per serving (grams)
    pub protein_g: f64,
    /// Sodium per serving (mg)
    pub sodium_mg: f64,
    /// Serving size descriptor
    pub serving_size: ServingSize,
}

impl FoodItem {
    /// Create a catalog item
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        brand: impl Into<String>,
        calories: f64,
        protein_g: f64,
        sodium_mg: f64,
        serving_size: ServingSize,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            calories,
            protein_g,
            sodium_mg,
            serving_size,
        }
    }
}
