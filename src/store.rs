// ABOUTME: MealStore, the single owner of the date-keyed daily ledger
// ABOUTME: Structural mutations with positional renumbering invariant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

//! # Meal Store
//!
//! `MealStore` owns the `DailyLedger`, a map from [`DateKey`] to that day's
//! ordered meal list, and is the only place structural mutation happens.
//! Every mutation takes `&mut self`, so the borrow checker enforces the
//! single-writer discipline: a reader always observes pre- or post-mutation
//! state, never a partial one. Consumers that need shared mutation wrap the
//! store in their own cell or lock; the core stays synchronous and
//! lock-free.
//!
//! Invariant: after any structural change, the meal at 0-based position `i`
//! of a day is named `"Meal {i+1}"`.

use std::collections::HashMap;

use tracing::debug;

use crate::aggregate::{daily_totals, DailyMacroTotals};
use crate::errors::MealtrackError;
use crate::models::{DateKey, FoodItem, LoggedFoodEntry, Meal};
use crate::serving::validate_servings;

/// Session-scoped owner of the daily meal ledger.
///
/// Created empty at session start, discarded at session end; nothing here
/// persists. Absent date keys mean an empty day, never an error.
#[derive(Debug, Clone, Default)]
pub struct MealStore {
    ledger: HashMap<DateKey, Vec<Meal>>,
}

impl MealStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new empty meal to the given day, creating the day's list if
    /// absent. The meal gets a fresh unique id and the next positional name.
    pub fn add_meal(&mut self, date: DateKey) {
        let day = self.ledger.entry(date).or_default();
        let meal = Meal::numbered(day.len() + 1);
        debug!(%date, meal_id = %meal.id, name = %meal.name, "adding meal");
        day.push(meal);
    }

    /// Delete the meal with the given id from the day, then renumber the
    /// remaining meals in their existing order. Deleting an absent meal (or
    /// from an absent day) is a no-op, keeping deletion idempotent.
    pub fn delete_meal(&mut self, date: DateKey, meal_id: &str) {
        let Some(day) = self.ledger.get_mut(&date) else {
            return;
        };
        let before = day.len();
        day.retain(|meal| meal.id != meal_id);
        if day.len() == before {
            return;
        }
        for (index, meal) in day.iter_mut().enumerate() {
            meal.name = Meal::display_name(index + 1);
        }
        debug!(%date, meal_id, remaining = day.len(), "deleted meal, renumbered day");
    }

    /// Replace the meal with the matching id in place, preserving its
    /// position. No-op if the id is not found.
    pub fn update_meal(&mut self, date: DateKey, meal_id: &str, meal: Meal) {
        let Some(slot) = self
            .ledger
            .get_mut(&date)
            .and_then(|day| day.iter_mut().find(|existing| existing.id == meal_id))
        else {
            return;
        };
        debug!(%date, meal_id, "replacing meal in place");
        *slot = meal;
    }

    /// Snapshot the food by value and append it to the identified meal with
    /// the given serving multiplier. Servings are validated before anything
    /// is touched; a vanished meal is a benign no-op, like delete/update.
    ///
    /// # Errors
    ///
    /// Returns [`MealtrackError::InvalidServings`] when `servings` is not a
    /// finite number greater than zero. Nothing is stored in that case.
    pub fn add_food_entry(
        &mut self,
        date: DateKey,
        meal_id: &str,
        food: &FoodItem,
        servings: f64,
    ) -> Result<(), MealtrackError> {
        validate_servings(servings)?;
        if let Some(meal) = self
            .ledger
            .get_mut(&date)
            .and_then(|day| day.iter_mut().find(|meal| meal.id == meal_id))
        {
            debug!(%date, meal_id, food_id = %food.id, servings, "logging food entry");
            meal.entries.push(LoggedFoodEntry {
                food: food.clone(),
                servings,
            });
        }
        Ok(())
    }

    /// Read-only view of the day's meals, in order. Empty for absent days.
    #[must_use]
    pub fn meals(&self, date: DateKey) -> &[Meal] {
        self.ledger.get(&date).map_or(&[], Vec::as_slice)
    }

    /// Aggregate the day's macro totals. Pure over the current ledger state;
    /// same state, same result.
    #[must_use]
    pub fn daily_totals(&self, date: DateKey) -> DailyMacroTotals {
        daily_totals(self.meals(date))
    }

    /// Number of days with at least one recorded meal list
    #[must_use]
    pub fn day_count(&self) -> usize {
        self.ledger.len()
    }
}
