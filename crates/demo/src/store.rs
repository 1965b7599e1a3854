use leptos::prelude::*;

use cartview::{
    intents::CartIntent,
    state::CartState,
    store::{CartDispatch, apply},
};

/// Reactive single-writer cart store.
///
/// Components read through [`SignalStore::with`] and write only by
/// dispatching intents; subscribers are notified when an intent changes the
/// cart.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SignalStore {
    state: RwSignal<CartState>,
}

impl SignalStore {
    pub(crate) fn new(state: CartState) -> Self {
        Self {
            state: RwSignal::new(state),
        }
    }

    /// Read the cart, subscribing the current reactive scope to changes.
    pub(crate) fn with<R>(&self, read: impl FnOnce(&CartState) -> R) -> R {
        self.state.with(read)
    }

    /// Read the cart without subscribing, for event handlers.
    pub(crate) fn with_untracked<R>(&self, read: impl FnOnce(&CartState) -> R) -> R {
        self.state.with_untracked(read)
    }
}

impl CartDispatch for SignalStore {
    fn dispatch(&self, intent: CartIntent) {
        self.state.maybe_update(|state| apply(state, intent));
    }
}

#[cfg(test)]
mod tests {
    use cartview::items::{CartLineItem, ItemId, Product};

    use super::*;

    fn fern() -> Product {
        Product {
            id: ItemId::from("boston-fern"),
            name: "Boston Fern".to_string(),
            image: String::new(),
            cost: "$20.00".to_string(),
        }
    }

    #[test]
    fn dispatch_updates_signal() {
        let store = SignalStore::new(CartState::new());

        store.dispatch(CartIntent::AddItem { product: fern() });
        store.dispatch(CartIntent::AddItem { product: fern() });

        let quantities: Vec<u32> = store
            .state
            .get_untracked()
            .iter()
            .map(|item| item.quantity.get())
            .collect();

        assert_eq!(quantities, vec![2]);
    }

    #[test]
    fn dispatch_remove_empties_cart() {
        let store = SignalStore::new(CartState::with_items([CartLineItem::from_product(&fern())]));

        store.dispatch(CartIntent::UpdateQuantity {
            id: ItemId::from("boston-fern"),
            quantity: 0,
        });

        assert!(store.with_untracked(CartState::is_empty));
    }
}
