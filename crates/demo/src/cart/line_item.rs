use leptos::prelude::*;

use cartview::{items::CartLineItem, view::CartLineView};

use super::ShopCartView;

pub(super) fn decrement_message(item: &CartLineItem) -> String {
    if item.quantity.get() > 1 {
        format!("Removed one {} from cart", item.name)
    } else {
        format!("Removed {} from cart", item.name)
    }
}

#[component]
fn QuantityControls(
    item: CartLineItem,
    cart_view: ShopCartView,
    action_message: RwSignal<Option<String>>,
) -> impl IntoView {
    let quantity = item.quantity.get();
    let decrement_label = format!("Remove one {}", item.name);
    let increment_label = format!("Add one more {}", item.name);

    let item_for_decrement = item.clone();
    let item_for_increment = item;

    view! {
        <div class="cart-item-quantity">
            <button
                type="button"
                aria-label=decrement_label
                class="cart-item-button cart-item-button-dec"
                on:click=move |_| {
                    action_message.set(Some(decrement_message(&item_for_decrement)));
                    cart_view.decrement(&item_for_decrement);
                }
            >
                "-"
            </button>
            <span class="cart-item-quantity-value">{quantity}</span>
            <button
                type="button"
                aria-label=increment_label
                class="cart-item-button cart-item-button-inc"
                on:click=move |_| {
                    action_message.set(Some(format!("Added another {} to cart", item_for_increment.name)));
                    cart_view.increment(&item_for_increment);
                }
            >
                "+"
            </button>
        </div>
    }
}

#[component]
pub(super) fn CartLine(
    line: CartLineView,
    cart_view: ShopCartView,
    action_message: RwSignal<Option<String>>,
) -> impl IntoView {
    let item = line.item;
    let item_for_remove = item.clone();
    let delete_label = format!("Delete {} ({}) from cart", item.name, line.subtotal);
    let subtotal_text = format!("Subtotal: {}", line.subtotal);

    let name = item.name.clone();
    let image = item.image.clone();
    let unit_cost = item.unit_cost_text.clone();

    view! {
        <li class="cart-item">
            <img class="cart-item-image" src=image alt=name.clone() />
            <div class="cart-item-details">
                <p class="cart-item-name">{name}</p>
                <p class="cart-item-cost">{unit_cost}</p>
                <QuantityControls
                    item=item
                    cart_view=cart_view
                    action_message=action_message
                />
                <p class="cart-item-total">{subtotal_text}</p>
                <button
                    type="button"
                    aria-label=delete_label
                    class="cart-item-delete"
                    on:click=move |_| {
                        action_message.set(Some(format!("Removed {} from cart", item_for_remove.name)));
                        cart_view.remove(&item_for_remove);
                    }
                >
                    "Delete"
                </button>
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use testresult::TestResult;

    use super::*;

    fn lily(quantity: u32) -> TestResult<CartLineItem> {
        let quantity = NonZeroU32::new(quantity).ok_or("quantity must be positive")?;

        Ok(CartLineItem::new("peace-lily", "Peace Lily", "", "$18.00", quantity))
    }

    #[test]
    fn decrement_message_above_one() -> TestResult {
        assert_eq!(decrement_message(&lily(3)?), "Removed one Peace Lily from cart");

        Ok(())
    }

    #[test]
    fn decrement_message_at_one() -> TestResult {
        assert_eq!(decrement_message(&lily(1)?), "Removed Peace Lily from cart");

        Ok(())
    }
}
