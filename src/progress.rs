// ABOUTME: Goal progress evaluation comparing daily totals to macro goals
// ABOUTME: Produces clamped display percentages, never above 100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

//! # Goal Progress Evaluator
//!
//! Compares aggregated daily totals against the configured macro goals.
//! The display percentage is `min(100, round(current / goal × 100))`:
//! over-goal days stay representable in `current`/`goal`, but the percent
//! is clamped for display. Goals are validated here as well as at
//! configuration load, so division never silently produces Inf or NaN.

use serde::Serialize;

use crate::aggregate::DailyMacroTotals;
use crate::config::MacroGoals;
use crate::errors::MealtrackError;

/// Progress toward a single macro goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroProgress {
    /// Aggregated current value for the day
    pub current: f64,
    /// Configured daily goal
    pub goal: f64,
    /// Clamped display percentage, 0..=100
    pub percent: u8,
}

/// Progress toward all three macro goals for one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgress {
    /// Calorie progress (kcal)
    pub calories: MacroProgress,
    /// Protein progress (grams)
    pub protein: MacroProgress,
    /// Sodium progress (mg)
    pub sodium: MacroProgress,
}

fn macro_progress(
    current: f64,
    goal: f64,
    name: &'static str,
) -> Result<MacroProgress, MealtrackError> {
    if !goal.is_finite() || goal <= 0.0 {
        return Err(MealtrackError::invalid_goal(name, goal));
    }
    let percent = ((current / goal) * 100.0).round().min(100.0) as u8;
    Ok(MacroProgress {
        current,
        goal,
        percent,
    })
}

/// Evaluate daily totals against the configured goals.
///
/// # Errors
///
/// Returns [`MealtrackError::InvalidGoal`] if any goal is zero, negative,
/// or non-finite. [`MacroGoals::validate`] rejects such configurations at
/// load time already; this is the last line of defense.
pub fn evaluate(
    totals: &DailyMacroTotals,
    goals: &MacroGoals,
) -> Result<GoalProgress, MealtrackError> {
    Ok(GoalProgress {
        calories: macro_progress(
            f64::from(totals.calories),
            goals.calories_kcal,
            "calories_kcal",
        )?,
        protein: macro_progress(totals.protein_g, goals.protein_g, "protein_g")?,
        sodium: macro_progress(f64::from(totals.sodium_mg), goals.sodium_mg, "sodium_mg")?,
    })
}
