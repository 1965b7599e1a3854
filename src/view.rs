//! Cart View
//!
//! [`CartView`] turns user actions into intents and host callbacks.
//! [`CartViewModel`] is what a renderer draws: one [`CartLineView`] per line
//! plus the formatted total, rebuilt from the current state after every change.

use rusty_money::iso::Currency;
use tracing::warn;

use crate::{
    intents::CartIntent,
    items::CartLineItem,
    pricing::{format_amount, total_amount, total_cost, total_quantity},
    state::CartState,
    store::CartDispatch,
};

/// Shown in place of the cart when it has no lines.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty!";

/// Shown when the user asks to check out.
pub const CHECKOUT_NOTICE: &str = "Checkout functionality will be added later.";

/// Shown in place of an amount that could not be computed.
pub const UNAVAILABLE: &str = "N/A";

/// Callbacks the embedding application provides to the cart view.
#[cfg_attr(test, mockall::automock)]
pub trait CartHost {
    /// Navigate back to the catalog.
    fn continue_shopping(&self);

    /// Show a blocking, user-visible notice.
    fn notify(&self, message: &str);
}

impl<T: CartHost + ?Sized> CartHost for &T {
    fn continue_shopping(&self) {
        (**self).continue_shopping();
    }

    fn notify(&self, message: &str) {
        (**self).notify(message);
    }
}

/// Cart view controller.
///
/// Holds no cart state of its own: every action is either an intent sent to
/// the dispatcher or a call into the host.
#[derive(Debug, Clone, Copy)]
pub struct CartView<D, H> {
    dispatcher: D,
    host: H,
}

impl<D: CartDispatch, H: CartHost> CartView<D, H> {
    /// Create a view dispatching to `dispatcher` and calling back into `host`.
    pub fn new(dispatcher: D, host: H) -> Self {
        Self { dispatcher, host }
    }

    /// Request one more unit of `item`.
    ///
    /// A line already at `u32::MAX` units cannot grow; nothing is dispatched.
    pub fn increment(&self, item: &CartLineItem) {
        let Some(quantity) = item.quantity.get().checked_add(1) else {
            warn!(item = %item.id, "quantity at maximum, ignoring increment");

            return;
        };

        self.dispatcher.dispatch(CartIntent::UpdateQuantity {
            id: item.id.clone(),
            quantity,
        });
    }

    /// Request one fewer unit of `item`, removing the line at one unit.
    pub fn decrement(&self, item: &CartLineItem) {
        let intent = if item.quantity.get() > 1 {
            CartIntent::UpdateQuantity {
                id: item.id.clone(),
                quantity: item.quantity.get() - 1,
            }
        } else {
            CartIntent::RemoveItem {
                id: item.id.clone(),
            }
        };

        self.dispatcher.dispatch(intent);
    }

    /// Request removal of `item` whatever its quantity.
    pub fn remove(&self, item: &CartLineItem) {
        self.dispatcher.dispatch(CartIntent::RemoveItem {
            id: item.id.clone(),
        });
    }

    /// Hand control back to the host's catalog.
    pub fn continue_shopping(&self) {
        self.host.continue_shopping();
    }

    /// Checkout is not available yet; tell the user so.
    pub fn checkout(&self) {
        self.host.notify(CHECKOUT_NOTICE);
    }
}

/// Render model for a line in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    /// The line as held in the store.
    pub item: CartLineItem,

    /// Formatted subtotal, or [`UNAVAILABLE`].
    pub subtotal: String,
}

/// Render model for the whole cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartViewModel {
    /// Lines in display order.
    pub lines: Vec<CartLineView>,

    /// Formatted total amount, or [`UNAVAILABLE`].
    pub total: String,

    /// Number of units across all lines.
    pub item_count: u64,
}

impl CartViewModel {
    /// Build the render model from the current state.
    pub fn build(state: &CartState, currency: &'static Currency) -> Self {
        let lines = state
            .iter()
            .map(|item| CartLineView {
                item: item.clone(),
                subtotal: total_cost(item, currency)
                    .map_or_else(|_| UNAVAILABLE.to_string(), |money| format_amount(&money)),
            })
            .collect();

        let total = total_amount(state, currency)
            .map_or_else(|_| UNAVAILABLE.to_string(), |money| format_amount(&money));

        Self {
            lines,
            total,
            item_count: total_quantity(state),
        }
    }

    /// Check if there is nothing to list.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Message to show instead of the lines, if there are none.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_CART_MESSAGE)
    }

    /// Heading shown above the lines.
    pub fn total_heading(&self) -> String {
        format!("Total Cart Amount: {}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use mockall::predicate::eq;
    use rusty_money::iso;
    use testresult::TestResult;

    use crate::{items::ItemId, store::MockCartDispatch};

    use super::*;

    fn line(id: &str, cost: &str, quantity: u32) -> TestResult<CartLineItem> {
        let quantity = NonZeroU32::new(quantity).ok_or("quantity must be positive")?;

        Ok(CartLineItem::new(id, id, format!("https://example.com/{id}.jpg"), cost, quantity))
    }

    fn view_expecting(intent: CartIntent) -> CartView<MockCartDispatch, MockCartHost> {
        let mut dispatcher = MockCartDispatch::new();

        dispatcher
            .expect_dispatch()
            .with(eq(intent))
            .times(1)
            .return_const(());

        CartView::new(dispatcher, MockCartHost::new())
    }

    #[test]
    fn increment_requests_one_more() -> TestResult {
        let item = line("fern", "$10.00", 7)?;

        let view = view_expecting(CartIntent::UpdateQuantity {
            id: ItemId::from("fern"),
            quantity: 8,
        });

        view.increment(&item);

        Ok(())
    }

    #[test]
    fn increment_at_maximum_dispatches_nothing() -> TestResult {
        let item = line("fern", "$10.00", u32::MAX)?;

        let mut dispatcher = MockCartDispatch::new();

        dispatcher.expect_dispatch().never();

        CartView::new(dispatcher, MockCartHost::new()).increment(&item);

        Ok(())
    }

    #[test]
    fn decrement_above_one_requests_one_fewer() -> TestResult {
        let item = line("fern", "$10.00", 3)?;

        let view = view_expecting(CartIntent::UpdateQuantity {
            id: ItemId::from("fern"),
            quantity: 2,
        });

        view.decrement(&item);

        Ok(())
    }

    #[test]
    fn decrement_at_one_requests_removal() -> TestResult {
        let item = line("fern", "$10.00", 1)?;

        let view = view_expecting(CartIntent::RemoveItem {
            id: ItemId::from("fern"),
        });

        view.decrement(&item);

        Ok(())
    }

    #[test]
    fn remove_requests_removal_regardless_of_quantity() -> TestResult {
        let item = line("fern", "$10.00", 9)?;

        let view = view_expecting(CartIntent::RemoveItem {
            id: ItemId::from("fern"),
        });

        view.remove(&item);

        Ok(())
    }

    #[test]
    fn continue_shopping_calls_host_without_dispatching() {
        let mut dispatcher = MockCartDispatch::new();
        let mut host = MockCartHost::new();

        dispatcher.expect_dispatch().never();
        host.expect_continue_shopping().times(1).return_const(());
        host.expect_notify().never();

        CartView::new(dispatcher, host).continue_shopping();
    }

    #[test]
    fn checkout_shows_notice() {
        let mut dispatcher = MockCartDispatch::new();
        let mut host = MockCartHost::new();

        dispatcher.expect_dispatch().never();
        host.expect_continue_shopping().never();
        host.expect_notify()
            .withf(|message| message == CHECKOUT_NOTICE)
            .times(1)
            .return_const(());

        CartView::new(dispatcher, host).checkout();
    }

    #[test]
    fn view_model_for_empty_cart() {
        let model = CartViewModel::build(&CartState::new(), iso::USD);

        assert!(model.is_empty());
        assert_eq!(model.total, "$0.00");
        assert_eq!(model.item_count, 0);
    }

    #[test]
    fn view_model_formats_lines_and_total() -> TestResult {
        let state = CartState::with_items([line("fern", "$10.00", 3)?, line("ivy", "$4.50", 2)?]);

        let model = CartViewModel::build(&state, iso::USD);

        let subtotals: Vec<&str> = model.lines.iter().map(|line| line.subtotal.as_str()).collect();

        assert_eq!(subtotals, vec!["$30.00", "$9.00"]);
        assert_eq!(model.total, "$39.00");
        assert_eq!(model.total_heading(), "Total Cart Amount: $39.00");
        assert_eq!(model.item_count, 5);

        Ok(())
    }

    #[test]
    fn view_model_marks_malformed_cost_unavailable() -> TestResult {
        let state = CartState::with_items([line("fern", "$10.00", 1)?, line("odd", "ten", 1)?]);

        let model = CartViewModel::build(&state, iso::USD);

        let subtotals: Vec<&str> = model.lines.iter().map(|line| line.subtotal.as_str()).collect();

        assert_eq!(subtotals, vec!["$10.00", UNAVAILABLE]);
        assert_eq!(model.total, UNAVAILABLE);

        Ok(())
    }
}
