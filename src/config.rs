// ABOUTME: Macro goal configuration with defaults and environment overrides
// ABOUTME: Goals are validated at load time, never during aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

use std::env;

use serde::{Deserialize, Serialize};

use crate::constants::{env_keys, goals};
use crate::errors::MealtrackError;

/// Daily macro goals the progress evaluator compares against.
///
/// Defaults are the documented app targets (2200 kcal, 120 g protein,
/// 2300 mg sodium); deployments override them via environment variables.
/// A goal that is zero, negative, or non-finite is a configuration error
/// and is rejected by [`Self::validate`] at load time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroGoals {
    /// Daily calorie goal (kcal)
    pub calories_kcal: f64,
    /// Daily protein goal (grams)
    pub protein_g: f64,
    /// Daily sodium goal (mg)
    pub sodium_mg: f64,
}

impl Default for MacroGoals {
    fn default() -> Self {
        Self {
            calories_kcal: goals::DEFAULT_CALORIES_GOAL_KCAL,
            protein_g: goals::DEFAULT_PROTEIN_GOAL_G,
            sodium_mg: goals::DEFAULT_SODIUM_GOAL_MG,
        }
    }
}

impl MacroGoals {
    /// Load goals from the environment, falling back to defaults for keys
    /// that are absent or unparseable
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            calories_kcal: env::var(env_keys::CALORIES_GOAL)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(goals::DEFAULT_CALORIES_GOAL_KCAL),
            protein_g: env::var(env_keys::PROTEIN_GOAL)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(goals::DEFAULT_PROTEIN_GOAL_G),
            sodium_mg: env::var(env_keys::SODIUM_GOAL)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(goals::DEFAULT_SODIUM_GOAL_MG),
        }
    }

    /// Reject non-positive or non-finite goals.
    ///
    /// # Errors
    ///
    /// Returns [`MealtrackError::InvalidGoal`] naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), MealtrackError> {
        for (name, value) in [
            ("calories_kcal", self.calories_kcal),
            ("protein_g", self.protein_g),
            ("sodium_mg", self.sodium_mg),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MealtrackError::invalid_goal(name, value));
            }
        }
        Ok(())
    }

    /// Load from the environment and validate in one step, the form callers
    /// should use at startup.
    ///
    /// # Errors
    ///
    /// Returns [`MealtrackError::InvalidGoal`] when an override makes any
    /// goal non-positive or non-finite.
    pub fn load_from_env() -> Result<Self, MealtrackError> {
        let goals = Self::from_env();
        goals.validate()?;
        Ok(goals)
    }
}
