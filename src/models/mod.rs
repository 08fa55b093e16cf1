// ABOUTME: Core domain types for the meal tracking ledger
// ABOUTME: Re-exports FoodItem, Meal, LoggedFoodEntry, DateKey and friends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

//! # Data Models
//!
//! Domain types shared across the crate. Catalog items are immutable and
//! externally supplied; logged entries snapshot their food by value at
//! selection time, so the ledger never aliases the catalog.

mod date;
mod food;
mod meal;

pub use date::DateKey;
pub use food::{FoodItem, ServingSize};
pub use meal::{LoggedFoodEntry, Meal};
