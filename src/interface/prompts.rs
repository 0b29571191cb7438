use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PizzaError, Result};
use crate::models::{PizzaSize, Topping};

/// Action chosen from the main order loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    SetQuantity,
    ToggleTopping,
    ViewReceipt,
    Checkout,
}

/// Prompt for the next order action.
pub fn prompt_action() -> Result<OrderAction> {
    let options = [
        "Set a quantity",
        "Toggle a topping",
        "View receipt",
        "Checkout",
    ];

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => OrderAction::SetQuantity,
        1 => OrderAction::ToggleTopping,
        2 => OrderAction::ViewReceipt,
        _ => OrderAction::Checkout,
    })
}

/// Prompt to pick a size from the menu.
pub fn prompt_size(sizes: &[PizzaSize]) -> Result<String> {
    let labels: Vec<String> = sizes
        .iter()
        .map(|s| format!("{} (${:.2})", s.name, s.price))
        .collect();

    let selection = Select::new()
        .with_prompt("Which size?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(sizes[selection].name.clone())
}

/// Prompt for a quantity. Negative input is rejected, not clamped.
pub fn prompt_quantity(size_name: &str, current: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(format!("How many {} pizzas?", size_name))
        .default(current.to_string())
        .interact_text()?;

    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| PizzaError::InvalidInput("Invalid number".to_string()))?;

    if value < 0 {
        return Err(PizzaError::InvalidQuantity(value));
    }

    Ok(value as u32)
}

/// Prompt for a topping name to toggle, with fuzzy matching.
///
/// Returns `None` if the user enters nothing or rejects every candidate.
pub fn prompt_topping(toppings: &[Topping]) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("Topping to toggle (or press Enter to cancel)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    // Try exact match first (case-insensitive)
    if let Some(topping) = toppings
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(input))
    {
        return Ok(Some(topping.name.clone()));
    }

    // Try fuzzy matching
    let mut candidates: Vec<(&Topping, f64)> = toppings
        .iter()
        .map(|t| (t, jaro_winkler(&t.name.to_lowercase(), &input.to_lowercase())))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        println!("No matching topping found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let topping = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", topping.name))
            .default(true)
            .interact()?;

        return Ok(confirm.then(|| topping.name.clone()));
    }

    // Multiple matches - let user select
    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(t, _)| t.name.clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(Some(options[selection].clone()))
    } else {
        Ok(None)
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
