use leptos::prelude::*;
use rusty_money::iso::Currency;

use cartview::view::{CartView, CartViewModel};

use crate::{announce, host::PanelHost, store::SignalStore};

pub(super) mod line_item;
pub(super) mod summary;

use line_item::CartLine;
use summary::{CartFooter, CartHeading};

/// Cart view as wired into the demo app.
pub(crate) type ShopCartView = CartView<SignalStore, PanelHost>;

#[component]
fn CartBody(
    cart: CartViewModel,
    cart_view: ShopCartView,
    action_message: RwSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div>
            <ul class="cart-lines">
                {cart
                    .lines
                    .into_iter()
                    .map(|line| {
                        view! {
                            <CartLine
                                line=line
                                cart_view=cart_view
                                action_message=action_message
                            />
                        }
                    })
                    .collect_view()}
            </ul>
            <CartFooter cart_view=cart_view />
        </div>
    }
}

/// Announce the action that triggered this render, now that the new total is known.
fn announce_pending_action(
    live_message: RwSignal<(u64, String)>,
    action_message: RwSignal<Option<String>>,
    total: &str,
) {
    if let Some(action) = action_message.get_untracked() {
        announce(live_message, format!("{action}, total {total}."));
        action_message.set(None);
    }
}

fn render_cart_panel_content(
    store: SignalStore,
    currency: &'static Currency,
    cart_view: ShopCartView,
    live_message: RwSignal<(u64, String)>,
    action_message: RwSignal<Option<String>>,
) -> AnyView {
    let cart = store.with(|state| CartViewModel::build(state, currency));

    announce_pending_action(live_message, action_message, &cart.total);

    if let Some(message) = cart.empty_message() {
        return view! {
            <div class="panel-card">
                <p class="cart-empty">{message}</p>
            </div>
        }
        .into_any();
    }

    let item_count = cart.item_count;
    let total_heading = cart.total_heading();

    view! {
        <CartHeading item_count=item_count total_heading=total_heading />
        <div class="panel-card">
            <CartBody cart=cart cart_view=cart_view action_message=action_message />
        </div>
    }
    .into_any()
}

/// Cart panel component.
#[component]
pub(crate) fn CartPanel(
    /// Shared cart store.
    store: SignalStore,
    /// Currency the cart is priced in.
    currency: &'static Currency,
    /// Called when the user asks to keep shopping.
    on_continue_shopping: Callback<()>,
    /// Live-region announcement signal.
    live_message: RwSignal<(u64, String)>,
    /// Ephemeral action message shown to the user.
    action_message: RwSignal<Option<String>>,
) -> impl IntoView {
    let cart_view = CartView::new(store, PanelHost::new(on_continue_shopping, live_message));

    view! {
        <section id="cart-panel" class="cart-panel">
            {move || {
                render_cart_panel_content(
                    store,
                    currency,
                    cart_view,
                    live_message,
                    action_message,
                )
            }}
        </section>
    }
}
