// ABOUTME: Meal and LoggedFoodEntry, the mutable half of the data model
// ABOUTME: Positional meal naming and by-value food snapshots live here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::food::FoodItem;

/// A food logged into a meal: a by-value snapshot of the catalog item plus
/// the serving multiplier chosen at selection time.
///
/// Because the snapshot is owned, mutating or replacing the catalog later
/// never retroactively changes logged entries. The multiplier is validated
/// (finite, > 0) before an entry is ever constructed; see
/// [`crate::serving`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedFoodEntry {
    /// Snapshot of the selected food
    pub food: FoodItem,
    /// Serving multiplier, always finite and positive
    pub servings: f64,
}

/// One meal within a day: a generated id, a positional display name, and an
/// ordered list of logged entries (insertion order significant, append-only
/// except for deletion).
///
/// The name is not independent state. It is a function of the meal's
/// current 1-based position in the day's list and is recomputed by the
/// store on every structural change, so it never drifts from position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Unique id, generated at creation
    pub id: String,
    /// Positional display name, `"Meal N"`
    pub name: String,
    /// Logged entries in insertion order
    pub entries: Vec<LoggedFoodEntry>,
}

impl Meal {
    /// Create an empty meal at the given 1-based position
    #[must_use]
    pub fn numbered(position: usize) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: Self::display_name(position),
            entries: Vec::new(),
        }
    }

    /// The display name for a 1-based position
    #[must_use]
    pub fn display_name(position: usize) -> String {
        format!("Meal {position}")
    }
}
