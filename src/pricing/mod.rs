pub mod calculations;
pub mod constants;
pub mod offers;

pub use calculations::{base_subtotal, count_selected, weighted_count};
pub use constants::*;
pub use offers::{
    apply_offers, default_offers, AppliedOffer, Offer, OfferAction, OfferCondition, SizeSnapshot,
};
