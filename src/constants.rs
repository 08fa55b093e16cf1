// ABOUTME: Named defaults for the meal tracking core, organized by domain
// ABOUTME: Goal defaults, servings defaulting rule, and environment keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

//! Constants module
//!
//! Pure data constants grouped by domain rather than scattered through the
//! code. Goal defaults are documented app-level targets, configurable
//! through [`crate::config::MacroGoals`] rather than hardwired at use sites.

/// Daily macro goal defaults
pub mod goals {
    /// Default daily calorie goal (kcal)
    pub const DEFAULT_CALORIES_GOAL_KCAL: f64 = 2200.0;
    /// Default daily protein goal (grams)
    pub const DEFAULT_PROTEIN_GOAL_G: f64 = 120.0;
    /// Default daily sodium goal (mg)
    pub const DEFAULT_SODIUM_GOAL_MG: f64 = 2300.0;
}

/// Serving multiplier rules
pub mod servings {
    /// Multiplier applied when the user leaves the servings field blank.
    /// Defaulting happens at the entry-creation boundary, never ad hoc at
    /// aggregation time.
    pub const DEFAULT_SERVINGS: f64 = 1.0;
}

/// Environment variable keys for configuration overrides
pub mod env_keys {
    /// Override for the daily calorie goal
    pub const CALORIES_GOAL: &str = "MEALTRACK_CALORIES_GOAL_KCAL";
    /// Override for the daily protein goal
    pub const PROTEIN_GOAL: &str = "MEALTRACK_PROTEIN_GOAL_G";
    /// Override for the daily sodium goal
    pub const SODIUM_GOAL: &str = "MEALTRACK_SODIUM_GOAL_MG";
}
