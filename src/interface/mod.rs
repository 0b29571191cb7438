pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_action, prompt_quantity, prompt_size, prompt_topping, prompt_yes_no, OrderAction,
};
pub use render::{display_menu, display_receipt, display_toppings};
