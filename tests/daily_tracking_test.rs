// ABOUTME: End-to-end integration tests for the daily tracking flow
// ABOUTME: Catalog selection through store mutation, aggregation, and progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

#![allow(clippy::unwrap_used)]

mod common;

use mealtrack::{
    daily_totals, effective_macros, evaluate, DailyMacroTotals, DateKey, FoodCatalog, MacroGoals,
    MealStore, MealtrackError,
};

fn day() -> DateKey {
    "2024-01-01".parse().unwrap()
}

#[test]
fn test_single_apple_day_end_to_end() {
    common::init_test_logging();

    let catalog = FoodCatalog::reference();
    let apple = catalog.get("1").unwrap();
    let mut store = MealStore::new();

    store.add_meal(day());
    let meals = store.meals(day());
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0].name, "Meal 1");

    let meal_id = meals[0].id.clone();
    store.add_food_entry(day(), &meal_id, apple, 2.0).unwrap();

    // per-entry effective values
    let effective = effective_macros(apple, 2.0).unwrap();
    assert_eq!(effective.calories, 190);
    assert_eq!(effective.protein_g, 1.0);
    assert_eq!(effective.sodium_mg, 4);

    // day totals agree with the single entry
    let totals = store.daily_totals(day());
    assert_eq!(
        totals,
        DailyMacroTotals {
            calories: 190,
            protein_g: 1.0,
            sodium_mg: 4,
        }
    );

    // progress against the documented default goals
    let progress = evaluate(&totals, &MacroGoals::default()).unwrap();
    assert_eq!(progress.calories.percent, 9); // 190 / 2200
    assert_eq!(progress.protein.percent, 1); // 1.0 / 120
    assert_eq!(progress.sodium.percent, 0); // 4 / 2300
}

#[test]
fn test_delete_first_of_two_meals_renames_survivor() {
    common::init_test_logging();

    let mut store = MealStore::new();
    store.add_meal(day());
    store.add_meal(day());

    let first_id = store.meals(day())[0].id.clone();
    let second_id = store.meals(day())[1].id.clone();
    assert_eq!(store.meals(day())[1].name, "Meal 2");

    store.delete_meal(day(), &first_id);

    let remaining = store.meals(day());
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second_id);
    assert_eq!(remaining[0].name, "Meal 1");
}

#[test]
fn test_absent_day_aggregates_to_zero_and_stays_idempotent() {
    common::init_test_logging();

    let store = MealStore::new();
    let nothing: DateKey = "2030-12-25".parse().unwrap();

    let first = store.daily_totals(nothing);
    let second = store.daily_totals(nothing);
    assert_eq!(first, DailyMacroTotals::default());
    assert_eq!(first, second);
}

#[test]
fn test_totals_round_once_not_per_entry() {
    common::init_test_logging();

    let catalog = FoodCatalog::reference();
    let apple = catalog.get("1").unwrap();
    let mut store = MealStore::new();

    store.add_meal(day());
    let meal_id = store.meals(day())[0].id.clone();

    // two entries at 0.27 servings: raw 25.65 kcal each, 51.3 total.
    // Per-entry rounding would give 26 + 26 = 52; the total must be 51.
    store.add_food_entry(day(), &meal_id, apple, 0.27).unwrap();
    store.add_food_entry(day(), &meal_id, apple, 0.27).unwrap();

    assert_eq!(effective_macros(apple, 0.27).unwrap().calories, 26);
    assert_eq!(store.daily_totals(day()).calories, 51);
}

#[test]
fn test_totals_span_multiple_meals() {
    common::init_test_logging();

    let catalog = FoodCatalog::reference();
    let chicken = catalog.get("3").unwrap();
    let rice = catalog.get("4").unwrap();
    let mut store = MealStore::new();

    store.add_meal(day());
    store.add_meal(day());
    let lunch_id = store.meals(day())[0].id.clone();
    let dinner_id = store.meals(day())[1].id.clone();

    store.add_food_entry(day(), &lunch_id, chicken, 1.0).unwrap();
    store.add_food_entry(day(), &dinner_id, rice, 2.0).unwrap();

    let totals = store.daily_totals(day());
    assert_eq!(totals.calories, 165 + 220);
    assert_eq!(totals.protein_g, 31.0 + 5.0);
    assert_eq!(totals.sodium_mg, 74 + 10);

    // the free function agrees with the store method
    assert_eq!(daily_totals(store.meals(day())), totals);
}

#[test]
fn test_invalid_servings_never_reaches_the_ledger() {
    common::init_test_logging();

    let catalog = FoodCatalog::reference();
    let banana = catalog.get("2").unwrap();
    let mut store = MealStore::new();

    store.add_meal(day());
    let meal_id = store.meals(day())[0].id.clone();

    let result = store.add_food_entry(day(), &meal_id, banana, -1.0);
    assert_eq!(result, Err(MealtrackError::invalid_servings(-1.0)));
    assert!(store.meals(day())[0].entries.is_empty());
    assert_eq!(store.daily_totals(day()), DailyMacroTotals::default());
}

#[test]
fn test_progress_clamps_over_goal_days() {
    common::init_test_logging();

    let totals = DailyMacroTotals {
        calories: 5000,
        protein_g: 0.0,
        sodium_mg: 0,
    };
    let progress = evaluate(&totals, &MacroGoals::default()).unwrap();
    assert_eq!(progress.calories.percent, 100);
    assert_eq!(progress.calories.current, 5000.0);
    assert_eq!(progress.protein.percent, 0);
}
