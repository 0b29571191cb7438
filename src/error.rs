use thiserror::Error;

#[derive(Debug, Error)]
pub enum PizzaError {
    #[error("Unknown size: {0}")]
    UnknownSize(String),

    #[error("Unknown topping: {0}")]
    UnknownTopping(String),

    #[error("Invalid quantity: {0} (must be non-negative)")]
    InvalidQuantity(i64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, PizzaError>;
