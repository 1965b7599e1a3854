//! Store
//!
//! The cart is owned by a single writer. Views never touch [`CartState`]
//! directly; they hand a [`CartIntent`] to a [`CartDispatch`] implementation,
//! which feeds it through [`apply`].

use std::{
    cell::{Ref, RefCell},
    num::NonZeroU32,
};

use tracing::{debug, warn};

use crate::{intents::CartIntent, items::CartLineItem, state::CartState};

/// Receives intents on behalf of whoever owns the cart state.
#[cfg_attr(test, mockall::automock)]
pub trait CartDispatch {
    /// Dispatch a single intent.
    fn dispatch(&self, intent: CartIntent);
}

impl<T: CartDispatch + ?Sized> CartDispatch for &T {
    fn dispatch(&self, intent: CartIntent) {
        (**self).dispatch(intent);
    }
}

/// Apply an intent to the cart. Returns `true` if the state changed.
///
/// Intents naming an unknown line are ignored.
pub fn apply(state: &mut CartState, intent: CartIntent) -> bool {
    match intent {
        CartIntent::UpdateQuantity { id, quantity } => {
            let Some(quantity) = NonZeroU32::new(quantity) else {
                let removed = state.remove(&id).is_some();

                debug!(item = %id, removed, "quantity set to zero");

                return removed;
            };

            let Some(item) = state.get_mut(&id) else {
                debug!(item = %id, "ignoring quantity update for unknown item");

                return false;
            };

            item.quantity = quantity;

            debug!(item = %id, quantity = quantity.get(), "updated quantity");

            true
        }
        CartIntent::RemoveItem { id } => {
            let removed = state.remove(&id).is_some();

            if removed {
                debug!(item = %id, "removed item");
            } else {
                debug!(item = %id, "ignoring removal of unknown item");
            }

            removed
        }
        CartIntent::AddItem { product } => {
            if let Some(item) = state.get_mut(&product.id) {
                let Some(quantity) = item.quantity.checked_add(1) else {
                    warn!(item = %product.id, "quantity at maximum, ignoring add");

                    return false;
                };

                item.quantity = quantity;

                debug!(item = %product.id, quantity = quantity.get(), "added another unit");
            } else {
                debug!(item = %product.id, "added item");

                state.push(CartLineItem::from_product(&product));
            }

            true
        }
    }
}

/// In-memory cart store.
#[derive(Debug, Default)]
pub struct CartStore {
    state: RefCell<CartState>,
}

impl CartStore {
    /// Create a store holding the given state.
    pub fn new(state: CartState) -> Self {
        Self {
            state: RefCell::new(state),
        }
    }

    /// Borrow the current state.
    pub fn state(&self) -> Ref<'_, CartState> {
        self.state.borrow()
    }

    /// Consume the store, returning the current state.
    pub fn into_state(self) -> CartState {
        self.state.into_inner()
    }
}

impl CartDispatch for CartStore {
    /// Apply `intent` to the store.
    ///
    /// If the state is still borrowed through [`CartStore::state`], the intent
    /// is dropped with a warning.
    fn dispatch(&self, intent: CartIntent) {
        let Ok(mut state) = self.state.try_borrow_mut() else {
            warn!(item = %intent.item_id(), "cart state is borrowed, dropping intent");

            return;
        };

        apply(&mut state, intent);
    }
}
