//! Leptos Cart View Demo Application

use std::sync::Arc;

use leptos::prelude::*;
use rusty_money::iso::Currency;
use tracing::{info, warn};

use cartview::{fixtures::load_shop, items::Product, pricing::total_quantity, state::CartState};

mod cart;
mod catalog;
mod host;
mod logging;
mod store;

use store::SignalStore;

const SHOP_FIXTURE_YAML: &str = include_str!("../../../fixtures/shop/demo.yml");

/// Log filter directive, set at build time through `CARTVIEW_LOG`.
const LOG_LEVEL: &str = match option_env!("CARTVIEW_LOG") {
    Some(level) => level,
    None => "info",
};

/// Which panel the host is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    /// Product catalog.
    Catalog,

    /// Cart view.
    Cart,
}

/// Parsed application fixtures/state used by the UI.
#[derive(Debug)]
struct AppData {
    /// Products shown in the catalog.
    products: Arc<Vec<Product>>,

    /// Currency the cart is priced in.
    currency: &'static Currency,

    /// Cart contents at start-up.
    cart: CartState,
}

impl AppData {
    fn load() -> Result<Self, String> {
        let shop = load_shop(SHOP_FIXTURE_YAML)
            .map_err(|error| format!("Failed to load shop fixture: {error}"))?;

        info!(
            products = shop.products.len(),
            cart_lines = shop.cart.len(),
            currency = shop.currency.iso_alpha_code,
            "loaded shop fixture"
        );

        Ok(Self {
            products: Arc::new(shop.products),
            currency: shop.currency,
            cart: shop.cart,
        })
    }
}

#[component]
fn NavButton(label: Signal<String>, target: Page, page: RwSignal<Page>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="nav-button"
            class:nav-button-active=move || page.get() == target
            aria-current=move || (page.get() == target).then_some("page")
            on:click=move |_| page.set(target)
        >
            {move || label.get()}
        </button>
    }
}

/// Main demo app shell.
#[component]
fn App() -> impl IntoView {
    match AppData::load() {
        Ok(app_data) => {
            let store = SignalStore::new(app_data.cart);
            let currency = app_data.currency;
            let products = app_data.products;
            let page = RwSignal::new(Page::Cart);
            let live_message = RwSignal::new((0_u64, String::new()));
            let action_message = RwSignal::new(None::<String>);

            let on_continue_shopping = Callback::new(move |()| {
                info!("continuing shopping");

                page.set(Page::Catalog);
            });

            let cart_label = Signal::derive(move || {
                format!("Cart ({})", store.with(total_quantity))
            });

            view! {
                <main class="min-h-screen bg-slate-50 px-4 py-6 text-slate-900">
                    <p class="sr-only" role="status" aria-live="polite" aria-atomic="true">
                        {move || live_message.get().1}
                    </p>
                    <div class="mx-auto mb-6 flex max-w-5xl items-center justify-between">
                        <h1 class="text-2xl font-semibold tracking-tight">"Paradise Nursery"</h1>
                        <nav class="flex gap-2">
                            <NavButton
                                label=Signal::derive(|| "Plants".to_string())
                                target=Page::Catalog
                                page=page
                            />
                            <NavButton label=cart_label target=Page::Cart page=page />
                        </nav>
                    </div>
                    <div class="mx-auto max-w-5xl">
                        {move || match page.get() {
                            Page::Catalog => view! {
                                <catalog::CatalogPanel
                                    products=Arc::clone(&products)
                                    store=store
                                    live_message=live_message
                                />
                            }
                            .into_any(),
                            Page::Cart => view! {
                                <cart::CartPanel
                                    store=store
                                    currency=currency
                                    on_continue_shopping=on_continue_shopping
                                    live_message=live_message
                                    action_message=action_message
                                />
                            }
                            .into_any(),
                        }}
                    </div>
                </main>
            }
            .into_any()
        }
        Err(error_message) => {
            warn!(error = %error_message, "failed to start");

            view! {
                <main class="min-h-screen bg-slate-50 px-4 py-6 text-slate-900">
                    <div class="mx-auto mb-6 max-w-5xl">
                        <h1 class="text-2xl font-semibold tracking-tight">"Paradise Nursery"</h1>
                    </div>
                    <div class="mx-auto max-w-3xl rounded-lg border border-red-200 bg-red-50 p-4">
                        <p class="text-sm text-red-700">{error_message}</p>
                    </div>
                </main>
            }
            .into_any()
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(error) = logging::init(LOG_LEVEL) {
        leptos::logging::warn!("Logging unavailable: {error}");
    }

    leptos::mount::mount_to_body(App);
}

fn announce(live_message: RwSignal<(u64, String)>, message: String) {
    live_message.update(|(id, text)| {
        *id = id.saturating_add(1);
        *text = message;
    });
}
