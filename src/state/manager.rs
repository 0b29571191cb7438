use std::collections::HashMap;

use crate::error::{PizzaError, Result};
use crate::models::{PizzaSize, Receipt, ReceiptLine, Topping};
use crate::pricing::{
    self, apply_offers, default_offers, AppliedOffer, Offer, SizeSnapshot,
};

/// Owns the size/topping catalogs, per-size selections, quantities, and the
/// derived totals of a single order session.
///
/// Mutations never touch the derived totals; callers invoke
/// [`recompute_totals`](OrderManager::recompute_totals) after every change.
pub struct OrderManager {
    /// Size catalog in menu order.
    sizes: Vec<PizzaSize>,

    /// Per-size topping selections keyed by lowercase size name.
    ///
    /// Each entry is an independently owned copy of the catalog; toggling a
    /// topping under one size never affects another size.
    toppings: HashMap<String, Vec<Topping>>,

    /// Order quantities keyed by lowercase size name.
    quantities: HashMap<String, u32>,

    /// Subtotals from the last recompute, keyed by lowercase size name.
    subtotals: HashMap<String, f64>,

    /// Offers applied in the last recompute.
    applied: Vec<AppliedOffer>,

    grand_total: f64,

    offers: Vec<Offer>,
}

impl OrderManager {
    /// Create a manager from explicit catalogs and offer rules.
    ///
    /// Every size gets a fresh copy of the topping catalog with all flags
    /// cleared; quantities and totals start at zero.
    pub fn new(sizes: Vec<PizzaSize>, catalog: Vec<Topping>, offers: Vec<Offer>) -> Self {
        let mut toppings = HashMap::new();
        let mut quantities = HashMap::new();
        let mut subtotals = HashMap::new();

        for size in &sizes {
            let copies: Vec<Topping> = catalog
                .iter()
                .map(|t| {
                    let mut t = t.clone();
                    t.selected = false;
                    t
                })
                .collect();
            toppings.insert(size.key(), copies);
            quantities.insert(size.key(), 0);
            subtotals.insert(size.key(), 0.0);
        }

        Self {
            sizes,
            toppings,
            quantities,
            subtotals,
            applied: Vec::new(),
            grand_total: 0.0,
            offers,
        }
    }

    /// Create a manager with the fixed menu and default offer rules.
    pub fn with_standard_menu() -> Self {
        Self::new(
            pricing::standard_sizes(),
            pricing::standard_toppings(),
            default_offers(),
        )
    }

    /// Size catalog in menu order.
    pub fn sizes(&self) -> &[PizzaSize] {
        &self.sizes
    }

    /// Get a size by name (case-insensitive).
    pub fn size(&self, name: &str) -> Option<&PizzaSize> {
        self.sizes.iter().find(|s| s.key() == name.to_lowercase())
    }

    /// Set the order quantity for one size; other sizes are untouched.
    pub fn set_quantity(&mut self, size: &str, quantity: u32) -> Result<()> {
        let qty = self
            .quantities
            .get_mut(&size.to_lowercase())
            .ok_or_else(|| PizzaError::UnknownSize(size.to_string()))?;
        *qty = quantity;
        Ok(())
    }

    /// Current quantity for a size; 0 for unknown names.
    pub fn quantity(&self, size: &str) -> u32 {
        self.quantities
            .get(&size.to_lowercase())
            .copied()
            .unwrap_or(0)
    }

    /// Flip one topping's selection flag under one size only.
    pub fn toggle_topping(&mut self, size: &str, topping: &str) -> Result<()> {
        let toppings = self
            .toppings
            .get_mut(&size.to_lowercase())
            .ok_or_else(|| PizzaError::UnknownSize(size.to_string()))?;

        let entry = toppings
            .iter_mut()
            .find(|t| t.name.eq_ignore_ascii_case(topping))
            .ok_or_else(|| PizzaError::UnknownTopping(topping.to_string()))?;

        entry.selected = !entry.selected;
        Ok(())
    }

    /// Full topping list for a size, with selection flags.
    pub fn toppings_for(&self, size: &str) -> Result<&[Topping]> {
        self.toppings
            .get(&size.to_lowercase())
            .map(|v| v.as_slice())
            .ok_or_else(|| PizzaError::UnknownSize(size.to_string()))
    }

    /// Standard-category toppings for a size.
    pub fn standard_toppings_for(&self, size: &str) -> Result<Vec<&Topping>> {
        Ok(self
            .toppings_for(size)?
            .iter()
            .filter(|t| t.is_standard())
            .collect())
    }

    /// Premium-category toppings for a size.
    pub fn premium_toppings_for(&self, size: &str) -> Result<Vec<&Topping>> {
        Ok(self
            .toppings_for(size)?
            .iter()
            .filter(|t| t.is_premium())
            .collect())
    }

    /// Number of selected toppings under a size; 0 for unknown names.
    pub fn selected_count(&self, size: &str) -> usize {
        self.toppings
            .get(&size.to_lowercase())
            .map(|v| pricing::count_selected(v))
            .unwrap_or(0)
    }

    /// Recompute all derived totals from the current state.
    ///
    /// Pass 1 prices every size from scratch (base price and selected
    /// toppings, each scaled by quantity); pass 2 applies the offer rules to
    /// those fresh subtotals. Nothing carries over between calls, so repeated
    /// recomputes without intervening mutation yield identical results.
    pub fn recompute_totals(&mut self) {
        let mut subtotals = HashMap::new();
        let mut snapshots = HashMap::new();

        for size in &self.sizes {
            let key = size.key();
            let quantity = self.quantities.get(&key).copied().unwrap_or(0);
            let toppings = &self.toppings[&key];

            subtotals.insert(
                key.clone(),
                pricing::base_subtotal(size.price, quantity, toppings),
            );
            snapshots.insert(
                key,
                SizeSnapshot {
                    quantity,
                    selected: pricing::count_selected(toppings),
                    weighted: pricing::weighted_count(toppings),
                },
            );
        }

        self.applied = apply_offers(&self.offers, &snapshots, &mut subtotals);
        self.grand_total = self.sizes.iter().map(|s| subtotals[&s.key()]).sum();
        self.subtotals = subtotals;
    }

    /// Subtotal from the last recompute; 0 for unknown names.
    pub fn subtotal(&self, size: &str) -> f64 {
        self.subtotals
            .get(&size.to_lowercase())
            .copied()
            .unwrap_or(0.0)
    }

    /// Grand total from the last recompute.
    pub fn grand_total(&self) -> f64 {
        self.grand_total
    }

    /// Offers applied in the last recompute.
    pub fn applied_offers(&self) -> &[AppliedOffer] {
        &self.applied
    }

    /// Snapshot of the order for rendering or JSON output.
    pub fn receipt(&self) -> Receipt {
        let lines = self
            .sizes
            .iter()
            .map(|size| {
                let key = size.key();
                ReceiptLine {
                    size: size.name.clone(),
                    quantity: self.quantities[&key],
                    base_price: size.price,
                    toppings: self.toppings[&key]
                        .iter()
                        .filter(|t| t.selected)
                        .map(|t| t.name.clone())
                        .collect(),
                    subtotal: self.subtotals[&key],
                }
            })
            .collect();

        Receipt {
            lines,
            offers: self.applied.clone(),
            grand_total: self.grand_total,
        }
    }
}

impl Default for OrderManager {
    fn default() -> Self {
        Self::with_standard_menu()
    }
}
