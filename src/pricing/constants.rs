use crate::models::{PizzaSize, Topping, ToppingCategory};

/// Flat discount for one Medium pizza with at least 2 toppings.
pub const MEDIUM_SINGLE_DISCOUNT: f64 = 5.0;

/// Minimum selected toppings for the Medium single offer.
pub const MEDIUM_SINGLE_MIN_TOPPINGS: usize = 2;

/// Flat discount for two or more Medium pizzas with at least 4 toppings.
pub const MEDIUM_PAIR_DISCOUNT: f64 = 9.0;

/// Minimum selected toppings for the Medium pair offer.
pub const MEDIUM_PAIR_MIN_TOPPINGS: usize = 4;

/// Subtotal multiplier for the Large loaded offer (50% off).
pub const LARGE_LOADED_FACTOR: f64 = 0.5;

/// Minimum weighted topping count for the Large loaded offer.
pub const LARGE_LOADED_MIN_WEIGHT: u32 = 4;

/// Toppings that count double toward the Large loaded threshold.
///
/// Threshold weight only; their price is still charged once in the base pass.
pub const DOUBLE_WEIGHT_TOPPINGS: [&str; 2] = ["Pepperoni", "Sausage"];

/// Whether a topping counts double toward the weighted threshold.
pub fn is_double_weight(topping_name: &str) -> bool {
    DOUBLE_WEIGHT_TOPPINGS
        .iter()
        .any(|name| name.eq_ignore_ascii_case(topping_name))
}

/// The fixed size catalog.
pub fn standard_sizes() -> Vec<PizzaSize> {
    vec![
        PizzaSize::new("Small", 5.0),
        PizzaSize::new("Medium", 7.0),
        PizzaSize::new("Large", 8.0),
        PizzaSize::new("Extra Large", 9.0),
    ]
}

/// The fixed topping catalog (5 standard, 3 premium), all unselected.
pub fn standard_toppings() -> Vec<Topping> {
    vec![
        Topping::new("Tomatoes", 1.00, ToppingCategory::Standard),
        Topping::new("Onions", 0.50, ToppingCategory::Standard),
        Topping::new("Bell Pepper", 1.00, ToppingCategory::Standard),
        Topping::new("Mushrooms", 1.20, ToppingCategory::Standard),
        Topping::new("Pineapple", 0.75, ToppingCategory::Standard),
        Topping::new("Pepperoni", 1.50, ToppingCategory::Premium),
        Topping::new("Sausage", 1.75, ToppingCategory::Premium),
        Topping::new("Bacon", 2.00, ToppingCategory::Premium),
    ]
}
