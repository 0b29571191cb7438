use serde::{Deserialize, Serialize};

/// A purchasable pizza size with a fixed base price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PizzaSize {
    pub name: String,
    pub price: f64,
}

impl PizzaSize {
    pub fn new(name: &str, price: f64) -> Self {
        Self {
            name: name.to_string(),
            price,
        }
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Topping category: standard (vegetable) or premium (meat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToppingCategory {
    Standard,
    Premium,
}

/// An add-on ingredient with a fixed price and category.
///
/// `selected` is the only mutable field; it lives in per-size copies of the
/// catalog, never in the catalog template itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topping {
    pub name: String,
    pub price: f64,
    pub category: ToppingCategory,

    #[serde(default)]
    pub selected: bool,
}

impl Topping {
    pub fn new(name: &str, price: f64, category: ToppingCategory) -> Self {
        Self {
            name: name.to_string(),
            price,
            category,
            selected: false,
        }
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn is_standard(&self) -> bool {
        self.category == ToppingCategory::Standard
    }

    pub fn is_premium(&self) -> bool {
        self.category == ToppingCategory::Premium
    }
}

impl PartialEq for Topping {
    fn eq(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }
}

impl Eq for Topping {}
