//! Cart Line Component
//!
//! One cart line with quantity stepper and a remove button that asks for
//! confirmation first.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_notify::ConfirmOptions;

use crate::context::AppContext;
use crate::models::CartItem;

#[component]
pub fn CartLine(item: CartItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let cart_id = item.cart_id;
    let quantity = item.quantity;
    let name = item.name.clone();
    let (busy, set_busy) = signal(false);

    let remove = move || {
        let name = name.clone();
        spawn_local(async move {
            let options = ConfirmOptions::default()
                .title("Remove item")
                .confirm_label("Remove")
                .danger();
            if !ctx.notifications.confirm(format!("Remove {} from your cart?", name), options).await {
                return;
            }
            set_busy.set(true);
            if ctx.cart().remove(cart_id).await {
                ctx.reload();
            }
            set_busy.set(false);
        });
    };

    let set_quantity = move |new_quantity: u32| {
        set_busy.set(true);
        spawn_local(async move {
            if ctx.cart().update(cart_id, new_quantity).await {
                ctx.reload();
            }
            set_busy.set(false);
        });
    };

    let remove_on_zero = remove.clone();
    let decrement = move |_| match quantity_below(quantity) {
        Some(lower) => set_quantity(lower),
        None => remove_on_zero(),
    };

    view! {
        <div class="cart-item" class:busy=move || busy.get()>
            {item.image_url.clone().map(|src| view! { <img class="cart-thumb" src=src alt="" /> })}
            <div class="cart-item-left">
                <div class="cart-title">{item.name.clone()}</div>
                {item.variant_label().map(|label| view! { <div class="cart-variant muted">{label}</div> })}
                <div class="cart-price muted">{ctx.format_price(item.price)}</div>
            </div>
            <div class="cart-item-right">
                <div class="qty">
                    <button disabled=move || busy.get() on:click=decrement>"-"</button>
                    <span class="q">{quantity}</span>
                    <button disabled=move || busy.get() on:click=move |_| set_quantity(quantity_above(quantity))>"+"</button>
                </div>
                <div class="cart-line-total">{ctx.format_price(item.line_total())}</div>
                <button class="secondary" disabled=move || busy.get() on:click=move |_| remove()>
                    "Remove"
                </button>
            </div>
        </div>
    }
}

fn quantity_above(quantity: u32) -> u32 {
    quantity.saturating_add(1)
}

/// `None` means the line should go instead
fn quantity_below(quantity: u32) -> Option<u32> {
    if quantity <= 1 {
        None
    } else {
        Some(quantity - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_above_saturates() {
        assert_eq!(quantity_above(1), 2);
        assert_eq!(quantity_above(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_quantity_below_one_removes() {
        assert_eq!(quantity_below(3), Some(2));
        assert_eq!(quantity_below(1), None);
        assert_eq!(quantity_below(0), None);
    }
}
