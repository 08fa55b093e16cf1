// ABOUTME: Session-scoped meal ledger and daily macro tracking core
// ABOUTME: Library entry point re-exporting models, store, aggregation, and goal progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

#![deny(unsafe_code)]

//! # Mealtrack
//!
//! In-memory core of a food/macro-tracking app: a date-keyed meal ledger,
//! serving-scaled macro computation, daily aggregation, and goal-progress
//! evaluation. All state is session-scoped; there is no persistence, no
//! server, and no background work. The presentation layer consumes this
//! crate as a library and owns everything visual.
//!
//! ## Modules
//!
//! - **models**: Domain types (`FoodItem`, `Meal`, `LoggedFoodEntry`, `DateKey`)
//! - **catalog**: Read-only food catalog with name/brand substring search
//! - **serving**: Serving multiplier validation and effective macro scaling
//! - **store**: `MealStore`, the single owner of the daily ledger
//! - **aggregate**: Daily macro totals, summed raw and rounded once
//! - **progress**: Clamped per-macro goal percentages
//! - **config**: `MacroGoals` with defaults and environment overrides
//! - **errors**: Crate error taxonomy (`MealtrackError`)
//!
//! ## Design principles
//!
//! - **Single writer**: every ledger mutation goes through `&mut MealStore`,
//!   so readers always observe pre- or post-mutation state
//! - **Derived, never stored**: totals and progress are pure functions over
//!   the ledger snapshot and are recomputed on demand
//! - **Snapshot ownership**: logged entries copy their food by value, so
//!   later catalog changes never rewrite history

/// Daily macro totals summed across a day's meals
pub mod aggregate;
/// Read-only food catalog and search
pub mod catalog;
/// Macro goal configuration with environment overrides
pub mod config;
/// Named defaults organized by domain
pub mod constants;
/// Crate error taxonomy
pub mod errors;
/// Core domain types
pub mod models;
/// Goal progress evaluation with clamped percentages
pub mod progress;
/// Serving multiplier validation and macro scaling
pub mod serving;
/// The meal store owning the date-keyed ledger
pub mod store;

pub use aggregate::{daily_totals, DailyMacroTotals};
pub use catalog::FoodCatalog;
pub use config::MacroGoals;
pub use errors::MealtrackError;
pub use models::{DateKey, FoodItem, LoggedFoodEntry, Meal, ServingSize};
pub use progress::{evaluate, GoalProgress, MacroProgress};
pub use serving::{effective_macros, EffectiveMacros};
pub use store::MealStore;
