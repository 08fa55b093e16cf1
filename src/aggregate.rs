// ABOUTME: Daily macro aggregation over a day's meals and logged entries
// ABOUTME: Sums raw contributions and rounds once at the total
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

//! # Daily Aggregator
//!
//! Sums the macro contributions of every logged entry across a day's meals.
//! Contributions are accumulated *unrounded* and rounded exactly once at the
//! total, so totals never accumulate per-entry rounding drift. Pure and
//! idempotent: the same meal slice always produces the same totals.

use serde::{Deserialize, Serialize};

use crate::models::Meal;
use crate::serving::{round_tenth, scaled_macros};

/// Macro totals for one day. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyMacroTotals {
    /// Total calories (kcal), nearest integer
    pub calories: u32,
    /// Total protein (grams), one decimal place
    pub protein_g: f64,
    /// Total sodium (mg), nearest integer
    pub sodium_mg: u32,
}

/// Sum effective macros across all meals and entries of a day.
///
/// An empty slice (absent date key) yields all-zero totals.
#[must_use]
pub fn daily_totals(meals: &[Meal]) -> DailyMacroTotals {
    let mut calories = 0.0_f64;
    let mut protein_g = 0.0_f64;
    let mut sodium_mg = 0.0_f64;

    for meal in meals {
        for entry in &meal.entries {
            let raw = scaled_macros(&entry.food, entry.servings);
            calories += raw.calories;
            protein_g += raw.protein_g;
            sodium_mg += raw.sodium_mg;
        }
    }

    DailyMacroTotals {
        calories: calories.round() as u32,
        protein_g: round_tenth(protein_g),
        sodium_mg: sodium_mg.round() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_day_is_all_zeros() {
        let totals = daily_totals(&[]);
        assert_eq!(totals, DailyMacroTotals::default());
        assert_eq!(totals.calories, 0);
        assert_eq!(totals.protein_g, 0.0);
        assert_eq!(totals.sodium_mg, 0);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let meals = [Meal::numbered(1)];
        assert_eq!(daily_totals(&meals), daily_totals(&meals));
    }
}
