//! Cart Panel Component
//!
//! Floating cart toggle with the badge count, and a slide-out panel listing
//! the current lines, the total, and a clear button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_notify::ConfirmOptions;

use crate::cart::cart_total;
use crate::components::CartLine;
use crate::context::AppContext;
use crate::store::{store_set_items, store_toggle_open, use_cart_panel, CartPanelStateStoreFields};

#[component]
pub fn CartPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_cart_panel();

    // Refetch while open, and whenever a mutation bumps the trigger
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        if !store.open().get() {
            return;
        }
        log::debug!("loading cart panel, trigger={}", trigger);
        store.loading().set(true);
        spawn_local(async move {
            let items = ctx.cart().get().await;
            store_set_items(&store, items);
        });
    });

    let clear = move |_| {
        spawn_local(async move {
            let options = ConfirmOptions::default()
                .title("Clear cart")
                .confirm_label("Clear")
                .danger();
            if ctx.notifications.confirm("Remove every item from your cart?", options).await
                && ctx.cart().clear().await
            {
                ctx.reload();
            }
        });
    };

    let total = move || ctx.format_price(store.items().with(|items| cart_total(items)));
    let is_empty = move || store.items().with(|items| items.is_empty());

    view! {
        <button class="cart-toggle" on:click=move |_| store_toggle_open(&store)>
            "Cart "
            <span class="cart-toggle-count">{move || ctx.cart_count.get()}</span>
        </button>

        <Show when=move || store.open().get()>
            <aside class="cart-panel">
                <header class="cart-panel-header">
                    <h2>"Your cart"</h2>
                    <button class="cart-panel-close" on:click=move |_| store.open().set(false)>"×"</button>
                </header>

                <Show when=move || store.loading().get()>
                    <p class="muted">"Loading…"</p>
                </Show>

                <div id="cartList" class="cart-list">
                    <For
                        each=move || store.items().get()
                        key=|item| (item.cart_id, item.quantity)
                        children=move |item| view! { <CartLine item=item /> }
                    />
                </div>

                <Show
                    when=move || !is_empty()
                    fallback=|| view! { <p class="cart-empty muted">"Your cart is empty."</p> }
                >
                    <footer class="cart-panel-footer">
                        <div class="cart-total">
                            "Total: " <strong id="cartTotal">{total}</strong>
                        </div>
                        <button id="clearCart" class="secondary" on:click=clear>"Clear cart"</button>
                    </footer>
                </Show>
            </aside>
        </Show>
    }
}
