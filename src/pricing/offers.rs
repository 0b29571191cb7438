use std::collections::HashMap;

use serde::Serialize;

use crate::pricing::constants::*;

/// Per-size inputs an offer condition is evaluated against.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeSnapshot {
    pub quantity: u32,
    pub selected: usize,
    pub weighted: u32,
}

#[derive(Debug, Clone)]
pub enum OfferCondition {
    QuantityExactly(u32),
    QuantityAtLeast(u32),
    SelectedAtLeast(usize),
    WeightedAtLeast(u32),
}

impl OfferCondition {
    fn holds(&self, snap: &SizeSnapshot) -> bool {
        match self {
            OfferCondition::QuantityExactly(n) => snap.quantity == *n,
            OfferCondition::QuantityAtLeast(n) => snap.quantity >= *n,
            OfferCondition::SelectedAtLeast(n) => snap.selected >= *n,
            OfferCondition::WeightedAtLeast(n) => snap.weighted >= *n,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum OfferAction {
    FlatDiscount(f64),
    Multiplier(f64),
}

/// A promotional rule: all conditions must hold for the targeted size.
///
/// Offers are evaluated in list order against the base-pass subtotals and are
/// stackable; nothing marks a size as already discounted.
#[derive(Debug, Clone)]
pub struct Offer {
    pub name: String,
    pub size: String,
    pub conditions: Vec<OfferCondition>,
    pub action: OfferAction,
}

impl Offer {
    fn matches(&self, snap: &SizeSnapshot) -> bool {
        self.conditions.iter().all(|c| c.holds(snap))
    }
}

/// Record of one offer application in the last recompute.
#[derive(Debug, Clone, Serialize)]
pub struct AppliedOffer {
    pub offer: String,
    pub size: String,
    pub saved: f64,
}

/// The fixed promotional rules, in application order.
pub fn default_offers() -> Vec<Offer> {
    vec![
        Offer {
            name: "Medium single".to_string(),
            size: "Medium".to_string(),
            conditions: vec![
                OfferCondition::QuantityExactly(1),
                OfferCondition::SelectedAtLeast(MEDIUM_SINGLE_MIN_TOPPINGS),
            ],
            action: OfferAction::FlatDiscount(MEDIUM_SINGLE_DISCOUNT),
        },
        Offer {
            name: "Medium pair".to_string(),
            size: "Medium".to_string(),
            conditions: vec![
                OfferCondition::QuantityAtLeast(2),
                OfferCondition::SelectedAtLeast(MEDIUM_PAIR_MIN_TOPPINGS),
            ],
            action: OfferAction::FlatDiscount(MEDIUM_PAIR_DISCOUNT),
        },
        Offer {
            name: "Large loaded".to_string(),
            size: "Large".to_string(),
            conditions: vec![
                OfferCondition::QuantityAtLeast(1),
                OfferCondition::WeightedAtLeast(LARGE_LOADED_MIN_WEIGHT),
            ],
            action: OfferAction::Multiplier(LARGE_LOADED_FACTOR),
        },
    ]
}

/// Apply offers in order to base-pass subtotals keyed by lowercase size name.
///
/// Returns the applications made. Subtotals for sizes with no matching offer
/// are left untouched; a multiplier's saving is the pre/post difference.
pub fn apply_offers(
    offers: &[Offer],
    snapshots: &HashMap<String, SizeSnapshot>,
    subtotals: &mut HashMap<String, f64>,
) -> Vec<AppliedOffer> {
    let mut applied = Vec::new();

    for offer in offers {
        let key = offer.size.to_lowercase();

        let Some(snap) = snapshots.get(&key) else {
            continue;
        };
        if !offer.matches(snap) {
            continue;
        }
        let Some(subtotal) = subtotals.get_mut(&key) else {
            continue;
        };

        let saved = match offer.action {
            OfferAction::FlatDiscount(amount) => {
                *subtotal -= amount;
                amount
            }
            OfferAction::Multiplier(factor) => {
                let before = *subtotal;
                *subtotal *= factor;
                before - *subtotal
            }
        };

        applied.push(AppliedOffer {
            offer: offer.name.clone(),
            size: offer.size.clone(),
            saved,
        });
    }

    applied
}
