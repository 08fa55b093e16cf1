// ABOUTME: Serving calculator scaling per-serving nutrition by a multiplier
// ABOUTME: Validates servings and applies the crate-wide rounding rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

//! # Serving Calculator
//!
//! Pure functions scaling a food's per-serving nutrition by a serving
//! multiplier. Rounding policy, held consistent everywhere: calories and
//! sodium to the nearest integer (ties away from zero), protein to one
//! decimal place. The unrounded contributions stay available to the
//! aggregator so daily totals are rounded once at the end, never compounded
//! from already-rounded per-entry values.

use serde::Serialize;

use crate::errors::MealtrackError;
use crate::models::FoodItem;

/// Unrounded macro contributions of one entry. Aggregation input only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScaledMacros {
    pub calories: f64,
    pub protein_g: f64,
    pub sodium_mg: f64,
}

/// Display-rounded effective values for a single entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EffectiveMacros {
    /// Effective calories (kcal), nearest integer
    pub calories: u32,
    /// Effective protein (grams), one decimal place
    pub protein_g: f64,
    /// Effective sodium (mg), nearest integer
    pub sodium_mg: u32,
    /// Raw serving amount, `servings × serving_size.value`
    pub total_amount: f64,
}

impl EffectiveMacros {
    /// Serving amount formatted to one decimal place, display only; the raw
    /// value in `total_amount` is the one to compute with
    #[must_use]
    pub fn total_amount_display(&self) -> String {
        format!("{:.1}", self.total_amount)
    }
}

/// Reject non-finite, zero, and negative multipliers before anything is
/// stored.
///
/// # Errors
///
/// Returns [`MealtrackError::InvalidServings`] when `servings` is not a
/// finite number greater than zero.
pub fn validate_servings(servings: f64) -> Result<(), MealtrackError> {
    if servings.is_finite() && servings > 0.0 {
        Ok(())
    } else {
        Err(MealtrackError::invalid_servings(servings))
    }
}

/// Raw contributions, no rounding. Callers validate servings first.
pub(crate) fn scaled_macros(food: &FoodItem, servings: f64) -> ScaledMacros {
    ScaledMacros {
        calories: food.calories * servings,
        protein_g: food.protein_g * servings,
        sodium_mg: food.sodium_mg * servings,
    }
}

/// Round to one decimal place, ties away from zero
pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute the effective (display-rounded) macros for one food at a given
/// serving multiplier. Pure; no side effects.
///
/// # Errors
///
/// Returns [`MealtrackError::InvalidServings`] when `servings` is not a
/// finite number greater than zero.
pub fn effective_macros(food: &FoodItem, servings: f64) -> Result<EffectiveMacros, MealtrackError> {
    validate_servings(servings)?;
    let raw = scaled_macros(food, servings);
    Ok(EffectiveMacros {
        calories: raw.calories.round() as u32,
        protein_g: round_tenth(raw.protein_g),
        sodium_mg: raw.sodium_mg.round() as u32,
        total_amount: servings * food.serving_size.value,
    })
}
