pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod pricing;
pub mod state;

pub use error::{PizzaError, Result};
pub use models::{PizzaSize, Receipt, ReceiptLine, Topping, ToppingCategory};
pub use state::OrderManager;
