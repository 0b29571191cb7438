use clap::Parser;
use serde::Serialize;

use pizza_order_rs::cli::{Cli, Command};
use pizza_order_rs::error::{PizzaError, Result};
use pizza_order_rs::interface::{
    display_menu, display_receipt, display_toppings, prompt_action, prompt_quantity, prompt_size,
    prompt_topping, prompt_yes_no, OrderAction,
};
use pizza_order_rs::models::{PizzaSize, Topping};
use pizza_order_rs::pricing::{standard_sizes, standard_toppings};
use pizza_order_rs::state::OrderManager;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Order => cmd_order(),
        Command::Menu { json } => cmd_menu(json),
    }
}

/// Build an order interactively and print the receipt.
fn cmd_order() -> Result<()> {
    let mut manager = OrderManager::with_standard_menu();

    display_menu(manager.sizes(), &standard_toppings());

    loop {
        match prompt_action()? {
            OrderAction::SetQuantity => {
                let size = prompt_size(manager.sizes())?;
                let current = manager.quantity(&size);

                match prompt_quantity(&size, current) {
                    Ok(qty) => manager.set_quantity(&size, qty)?,
                    Err(e @ (PizzaError::InvalidQuantity(_) | PizzaError::InvalidInput(_))) => {
                        eprintln!("{}", e);
                        continue;
                    }
                    Err(e) => return Err(e),
                }

                manager.recompute_totals();
                println!("Running total: ${:.2}", manager.grand_total());
            }
            OrderAction::ToggleTopping => {
                let size = prompt_size(manager.sizes())?;
                let toppings = manager.toppings_for(&size)?;
                display_toppings(&size, toppings);

                let choice = prompt_topping(toppings)?;
                if let Some(name) = choice {
                    manager.toggle_topping(&size, &name)?;
                    manager.recompute_totals();
                    println!("Running total: ${:.2}", manager.grand_total());
                }
            }
            OrderAction::ViewReceipt => display_receipt(&manager.receipt()),
            OrderAction::Checkout => break,
        }
    }

    manager.recompute_totals();
    let receipt = manager.receipt();
    display_receipt(&receipt);

    if !receipt.is_empty() {
        let as_json = prompt_yes_no("Print receipt as JSON?", false)?;
        if as_json {
            println!("{}", serde_json::to_string_pretty(&receipt)?);
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct MenuView {
    sizes: Vec<PizzaSize>,
    toppings: Vec<Topping>,
}

/// Print the size and topping catalogs.
fn cmd_menu(json: bool) -> Result<()> {
    let sizes = standard_sizes();
    let toppings = standard_toppings();

    if json {
        let view = MenuView { sizes, toppings };
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        display_menu(&sizes, &toppings);
    }

    Ok(())
}
