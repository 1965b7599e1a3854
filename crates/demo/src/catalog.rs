use std::sync::Arc;

use leptos::prelude::*;
use tracing::info;

use cartview::{
    intents::CartIntent,
    items::{ItemId, Product},
    state::CartState,
    store::CartDispatch,
};

use crate::{announce, store::SignalStore};

fn quantity_in_cart(state: &CartState, id: &ItemId) -> u32 {
    state.get(id).map_or(0, |item| item.quantity.get())
}

fn add_button_text(in_cart: u32) -> String {
    if in_cart == 0 {
        "Add to Cart".to_string()
    } else {
        format!("Add to Cart ({in_cart} in cart)")
    }
}

#[component]
fn ProductRow(
    product: Product,
    store: SignalStore,
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    let id_for_text = product.id.clone();
    let product_for_add = product.clone();
    let add_button_label = format!("Add {} ({}) to cart", product.name, product.cost);

    view! {
        <li class="product-row">
            <img class="product-image" src=product.image.clone() alt=product.name.clone() />
            <div>
                <p class="product-name">{product.name.clone()}</p>
                <p class="product-price">{product.cost.clone()}</p>
            </div>
            <button
                type="button"
                aria-label=add_button_label
                class="product-button"
                on:click=move |_| {
                    store.dispatch(CartIntent::AddItem {
                        product: product_for_add.clone(),
                    });

                    let in_cart = store
                        .with_untracked(|state| quantity_in_cart(state, &product_for_add.id));

                    info!(item = %product_for_add.id, in_cart, "added to cart");

                    announce(
                        live_message,
                        format!("Added {} to cart, {in_cart} in cart.", product_for_add.name),
                    );
                }
            >
                {move || add_button_text(store.with(|state| quantity_in_cart(state, &id_for_text)))}
            </button>
        </li>
    }
}

/// Product catalog the cart view returns to on "Continue Shopping".
#[component]
pub(crate) fn CatalogPanel(
    /// Products on sale.
    products: Arc<Vec<Product>>,
    /// Shared cart store.
    store: SignalStore,
    /// Live-region announcement signal.
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    let products = Arc::unwrap_or_clone(products);

    view! {
        <section class="products-panel">
            <div class="panel-header">
                <h2 class="panel-title">"Plants"</h2>
            </div>
            <ul class="products-list">
                {products
                    .into_iter()
                    .map(|product| {
                        view! { <ProductRow product=product store=store live_message=live_message /> }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
