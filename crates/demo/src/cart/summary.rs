use leptos::prelude::*;

use super::ShopCartView;

pub(super) fn format_item_count(item_count: u64) -> String {
    let label = if item_count == 1 { "item" } else { "items" };

    format!("{item_count} {label}")
}

#[component]
pub(super) fn CartHeading(item_count: u64, total_heading: String) -> impl IntoView {
    view! {
        <h2 class="panel-title panel-title-spaced">
            <div class="panel-title-row">
                <span class="panel-title-leading">{total_heading}</span>
                <span class="panel-title-trailing">{format_item_count(item_count)}</span>
            </div>
        </h2>
    }
}

#[component]
pub(super) fn CartFooter(cart_view: ShopCartView) -> impl IntoView {
    view! {
        <div class="continue-shopping-actions">
            <button
                type="button"
                class="get-started-button"
                on:click=move |_| cart_view.continue_shopping()
            >
                "Continue Shopping"
            </button>
            <button
                type="button"
                class="get-started-button checkout-button"
                on:click=move |_| cart_view.checkout()
            >
                "Checkout"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_item_count_singular() {
        assert_eq!(format_item_count(1), "1 item");
    }

    #[test]
    fn format_item_count_plural() {
        assert_eq!(format_item_count(0), "0 items");
        assert_eq!(format_item_count(4), "4 items");
    }
}
