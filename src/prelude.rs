//! Cartview prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    fixtures::{FixtureError, ShopFixture, load_shop},
    intents::CartIntent,
    items::{CartLineItem, ItemId, Product},
    pricing::{
        PricingError, format_amount, parse_unit_cost, total_amount, total_cost, total_quantity,
    },
    state::CartState,
    store::{CartDispatch, CartStore, apply},
    view::{
        CHECKOUT_NOTICE, CartHost, CartLineView, CartView, CartViewModel, EMPTY_CART_MESSAGE,
        UNAVAILABLE,
    },
};
