use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pizza_order_rs::state::OrderManager;

const SIZES: [&str; 4] = ["Small", "Medium", "Large", "Extra Large"];
const TOPPINGS: [&str; 8] = [
    "Tomatoes",
    "Onions",
    "Bell Pepper",
    "Mushrooms",
    "Pineapple",
    "Pepperoni",
    "Sausage",
    "Bacon",
];

fn random_order(rng: &mut StdRng) -> OrderManager {
    let mut manager = OrderManager::with_standard_menu();

    for size in SIZES {
        manager.set_quantity(size, rng.gen_range(0..5)).unwrap();
        for topping in TOPPINGS {
            if rng.gen_bool(0.4) {
                manager.toggle_topping(size, topping).unwrap();
            }
        }
    }

    manager
}

#[test]
fn test_grand_total_is_sum_of_subtotals() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let mut manager = random_order(&mut rng);
        manager.recompute_totals();

        let sum: f64 = SIZES.iter().map(|s| manager.subtotal(s)).sum();
        assert!(
            (sum - manager.grand_total()).abs() < 1e-9,
            "grand total {} != sum of subtotals {}",
            manager.grand_total(),
            sum
        );
    }
}

#[test]
fn test_zero_quantity_sizes_contribute_nothing() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let mut manager = random_order(&mut rng);
        manager.recompute_totals();

        for size in SIZES {
            if manager.quantity(size) == 0 {
                assert_eq!(manager.subtotal(size), 0.0);
            }
        }
    }
}

#[test]
fn test_recompute_idempotent_under_random_state() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..200 {
        let mut manager = random_order(&mut rng);

        manager.recompute_totals();
        let before: Vec<f64> = SIZES.iter().map(|s| manager.subtotal(s)).collect();
        let grand_before = manager.grand_total();

        manager.recompute_totals();
        let after: Vec<f64> = SIZES.iter().map(|s| manager.subtotal(s)).collect();

        assert_eq!(before, after);
        assert_eq!(grand_before, manager.grand_total());
    }
}

#[test]
fn test_toggle_never_leaks_across_sizes() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..200 {
        let mut manager = OrderManager::with_standard_menu();
        let size = SIZES[rng.gen_range(0..SIZES.len())];
        let topping = TOPPINGS[rng.gen_range(0..TOPPINGS.len())];

        manager.toggle_topping(size, topping).unwrap();

        for other in SIZES.iter().filter(|s| **s != size) {
            assert_eq!(manager.selected_count(other), 0);
        }
        assert_eq!(manager.selected_count(size), 1);
    }
}
