use clap::{Parser, Subcommand};

/// PizzaOrder — an ordering CLI that prices sizes, toppings, and offers.
#[derive(Parser, Debug)]
#[command(name = "pizza_order")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build an order interactively and print the receipt.
    Order,

    /// Print the size and topping catalogs.
    Menu {
        /// Print the menu as JSON instead of formatted text.
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Order
    }
}
