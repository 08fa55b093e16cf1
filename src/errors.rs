// ABOUTME: Error taxonomy for the meal tracking core
// ABOUTME: Defines MealtrackError with structured context for invalid input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

//! # Error Types
//!
//! The core performs no I/O, so every failure here is a deterministic
//! function of input validity. Absent meal or date ids are deliberately
//! *not* errors: deletes and updates against missing ids are benign no-ops
//! so that deletion stays idempotent.

/// Errors produced by the meal tracking core
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum MealtrackError {
    /// Serving multiplier was non-finite, zero, or negative at entry
    /// creation time. Recovered locally by re-prompting; never persisted.
    #[error("invalid servings multiplier {value}: must be a finite number greater than zero")]
    InvalidServings {
        /// The rejected multiplier
        value: f64,
    },

    /// A macro goal was zero, negative, or non-finite. Configuration error,
    /// rejected at load time so progress evaluation never divides by zero.
    #[error("invalid macro goal '{name}' = {value}: goals must be greater than zero")]
    InvalidGoal {
        /// Name of the offending goal field
        name: &'static str,
        /// The rejected goal value
        value: f64,
    },
}

impl MealtrackError {
    /// Create an invalid-servings error
    #[must_use]
    pub fn invalid_servings(value: f64) -> Self {
        Self::InvalidServings { value }
    }

    /// Create an invalid-goal error
    #[must_use]
    pub fn invalid_goal(name: &'static str, value: f64) -> Self {
        Self::InvalidGoal { name, value }
    }
}
