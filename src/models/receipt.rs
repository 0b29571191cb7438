use serde::Serialize;

use crate::pricing::AppliedOffer;

/// One size's line on the receipt.
#[derive(Debug, Clone, Serialize)]
pub struct ReceiptLine {
    /// Size name as shown on the menu.
    pub size: String,

    /// Ordered quantity for this size.
    pub quantity: u32,

    /// Base price per pizza of this size.
    pub base_price: f64,

    /// Names of the toppings selected under this size.
    pub toppings: Vec<String>,

    /// Subtotal after quantity scaling, topping charges, and offers.
    pub subtotal: f64,
}

/// Snapshot of the order totals after the last recompute.
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub offers: Vec<AppliedOffer>,
    pub grand_total: f64,
}

impl Receipt {
    /// True when no size has a positive quantity.
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|l| l.quantity == 0)
    }
}
