use crate::models::Topping;
use crate::pricing::constants::is_double_weight;

/// Base subtotal for one size before offers.
///
/// Each selected topping is charged once per pizza ordered, so its price is
/// multiplied by the quantity just like the base price. A quantity of zero
/// yields zero regardless of selections.
pub fn base_subtotal(base_price: f64, quantity: u32, toppings: &[Topping]) -> f64 {
    let qty = quantity as f64;
    let topping_sum: f64 = toppings
        .iter()
        .filter(|t| t.selected)
        .map(|t| t.price)
        .sum();

    base_price * qty + topping_sum * qty
}

/// Number of selected toppings.
pub fn count_selected(toppings: &[Topping]) -> usize {
    toppings.iter().filter(|t| t.selected).count()
}

/// Weighted selected-topping count for the Large loaded offer.
///
/// Each selected topping contributes 1; Pepperoni and Sausage contribute 2.
/// The double weight applies to the offer threshold only, never to pricing.
pub fn weighted_count(toppings: &[Topping]) -> u32 {
    toppings
        .iter()
        .filter(|t| t.selected)
        .map(|t| if is_double_weight(&t.name) { 2 } else { 1 })
        .sum()
}
