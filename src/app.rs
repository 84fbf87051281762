//! Storefront App
//!
//! Root component: wires the notification center, cart client and page
//! bindings, then renders the cart panel and notification host.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_notify::{install_alert_shim, NotificationHost};
use reactive_stores::Store;

use crate::bindings::bind_add_to_cart_buttons;
use crate::components::CartPanel;
use crate::config::StorefrontConfig;
use crate::context::AppContext;
use crate::store::CartPanelState;

#[component]
pub fn App(config: StorefrontConfig) -> impl IntoView {
    let ctx = AppContext::new(config);

    // Provide context to all children
    provide_context(ctx);
    provide_context(ctx.notifications);
    provide_context(Store::new(CartPanelState::default()));

    match install_alert_shim(ctx.notifications) {
        Ok(Some(shim)) => on_cleanup(move || {
            if let Err(e) = shim.restore() {
                log::warn!("could not restore window.alert: {:?}", e);
            }
        }),
        Ok(None) => log::debug!("alert shim already installed"),
        Err(e) => log::warn!("could not install alert shim: {:?}", e),
    }
    bind_add_to_cart_buttons(ctx);

    // Badge reflects the server cart from first paint
    spawn_local(async move {
        if let Some(count) = ctx.cart().update_badge().await {
            log::info!("cart badge initialised to {}", count);
        }
    });

    view! {
        <CartPanel />
        <NotificationHost />
    }
}
