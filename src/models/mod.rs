mod menu;
mod receipt;

pub use menu::{PizzaSize, Topping, ToppingCategory};
pub use receipt::{Receipt, ReceiptLine};
