use assert_float_eq::*;

use pizza_order_rs::state::OrderManager;

fn order() -> OrderManager {
    OrderManager::with_standard_menu()
}

#[test]
fn test_base_formula_without_offers() {
    // Small never qualifies for an offer: subtotal = (base + toppings) * qty
    let mut manager = order();
    manager.set_quantity("Small", 3).unwrap();
    manager.toggle_topping("Small", "Tomatoes").unwrap();
    manager.toggle_topping("Small", "Onions").unwrap();
    manager.recompute_totals();

    assert_float_absolute_eq!(manager.subtotal("Small"), (5.0 + 1.50) * 3.0);
    assert!(manager.applied_offers().is_empty());
}

#[test]
fn test_medium_single_offer_scenario() {
    // 1 Medium with Tomatoes + Onions: 7 + 1.00 + 0.50 = 8.50, then -5
    let mut manager = order();
    manager.set_quantity("Medium", 1).unwrap();
    manager.toggle_topping("Medium", "Tomatoes").unwrap();
    manager.toggle_topping("Medium", "Onions").unwrap();
    manager.recompute_totals();

    assert_float_absolute_eq!(manager.subtotal("Medium"), 3.50);
    assert_float_absolute_eq!(manager.grand_total(), 3.50);
    assert_eq!(manager.applied_offers().len(), 1);
    assert_eq!(manager.applied_offers()[0].offer, "Medium single");
}

#[test]
fn test_medium_pair_offer_scenario() {
    // 2 Mediums, 4 toppings summing $4.00 per pizza: 14 + 8 = 22, then -9.
    // The single-pizza offer must not also fire (quantity is 2, not 1).
    let mut manager = order();
    manager.set_quantity("Medium", 2).unwrap();
    for topping in ["Tomatoes", "Onions", "Pineapple", "Sausage"] {
        manager.toggle_topping("Medium", topping).unwrap();
    }
    manager.recompute_totals();

    assert_float_absolute_eq!(manager.subtotal("Medium"), 13.00);
    assert_eq!(manager.applied_offers().len(), 1);
    assert_eq!(manager.applied_offers()[0].offer, "Medium pair");
}

#[test]
fn test_large_loaded_via_double_weight_meats() {
    // Pepperoni + Sausage weigh 2 each, so two toppings reach the threshold.
    let mut manager = order();
    manager.set_quantity("Large", 1).unwrap();
    manager.toggle_topping("Large", "Pepperoni").unwrap();
    manager.toggle_topping("Large", "Sausage").unwrap();
    manager.recompute_totals();

    // (8 + 1.50 + 1.75) * 0.5
    assert_float_absolute_eq!(manager.subtotal("Large"), 5.625);
    assert_eq!(manager.applied_offers().len(), 1);
    assert_eq!(manager.applied_offers()[0].offer, "Large loaded");
}

#[test]
fn test_large_loaded_via_four_standard_toppings() {
    let mut manager = order();
    manager.set_quantity("Large", 1).unwrap();
    for topping in ["Tomatoes", "Onions", "Bell Pepper", "Mushrooms"] {
        manager.toggle_topping("Large", topping).unwrap();
    }
    manager.recompute_totals();

    // (8 + 3.70) * 0.5
    assert_float_absolute_eq!(manager.subtotal("Large"), 5.85);
    assert_eq!(manager.applied_offers().len(), 1);
}

#[test]
fn test_large_three_weight_misses_offer() {
    // Bacon is premium but not double weight: 1 + 1 + 1 < 4.
    let mut manager = order();
    manager.set_quantity("Large", 1).unwrap();
    for topping in ["Bacon", "Onions", "Mushrooms"] {
        manager.toggle_topping("Large", topping).unwrap();
    }
    manager.recompute_totals();

    assert_float_absolute_eq!(manager.subtotal("Large"), 8.0 + 3.70);
    assert!(manager.applied_offers().is_empty());
}

#[test]
fn test_zero_quantity_zeroes_subtotal() {
    let mut manager = order();
    manager.toggle_topping("Extra Large", "Bacon").unwrap();
    manager.toggle_topping("Extra Large", "Pepperoni").unwrap();
    manager.recompute_totals();

    assert_eq!(manager.subtotal("Extra Large"), 0.0);
    assert_eq!(manager.grand_total(), 0.0);
}

#[test]
fn test_selection_isolation_across_sizes() {
    let mut manager = order();
    manager.set_quantity("Small", 1).unwrap();
    manager.set_quantity("Medium", 1).unwrap();
    manager.toggle_topping("Medium", "Mushrooms").unwrap();
    manager.recompute_totals();

    assert_eq!(manager.selected_count("Small"), 0);
    assert_float_absolute_eq!(manager.subtotal("Small"), 5.0);
    assert_float_absolute_eq!(manager.subtotal("Medium"), 8.20);
}

#[test]
fn test_recompute_is_idempotent_with_offers() {
    let mut manager = order();
    manager.set_quantity("Medium", 1).unwrap();
    manager.toggle_topping("Medium", "Tomatoes").unwrap();
    manager.toggle_topping("Medium", "Onions").unwrap();
    manager.set_quantity("Large", 1).unwrap();
    manager.toggle_topping("Large", "Pepperoni").unwrap();
    manager.toggle_topping("Large", "Sausage").unwrap();

    manager.recompute_totals();
    let first = (
        manager.subtotal("Medium"),
        manager.subtotal("Large"),
        manager.grand_total(),
    );

    // Repeated recomputes must not discount again.
    manager.recompute_totals();
    manager.recompute_totals();
    let last = (
        manager.subtotal("Medium"),
        manager.subtotal("Large"),
        manager.grand_total(),
    );

    assert_eq!(first, last);
    assert_float_absolute_eq!(manager.subtotal("Medium"), 3.50);
    assert_float_absolute_eq!(manager.subtotal("Large"), 5.625);
}

#[test]
fn test_grand_total_spans_all_sizes() {
    let mut manager = order();
    manager.set_quantity("Small", 1).unwrap();
    manager.set_quantity("Medium", 1).unwrap();
    manager.toggle_topping("Medium", "Tomatoes").unwrap();
    manager.toggle_topping("Medium", "Onions").unwrap();
    manager.set_quantity("Extra Large", 2).unwrap();
    manager.recompute_totals();

    // 5 + 3.50 (after offer) + 0 + 18
    assert_float_absolute_eq!(manager.grand_total(), 26.50);
}
