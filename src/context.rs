//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_notify::NotificationCenter;

use crate::api::FetchTransport;
use crate::badge::DomBadges;
use crate::cart::CartClient;
use crate::config::StorefrontConfig;

/// Cart client as wired in the browser: fetch transport, toast notifier,
/// and the page badges plus the in-app counter
pub type StorefrontCart = CartClient<FetchTransport, NotificationCenter, (DomBadges, RwSignal<u32>)>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    cart: StoredValue<Arc<StorefrontCart>>,
    config: StoredValue<StorefrontConfig>,
    pub notifications: NotificationCenter,
    /// Last badge value written by the cart client
    pub cart_count: ReadSignal<u32>,
    /// Bumped after cart mutations so open views refetch - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped after cart mutations so open views refetch - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    /// Build the notification center and cart client from config
    pub fn new(config: StorefrontConfig) -> Self {
        let notifications = NotificationCenter::browser(config.notifications.clone());
        let cart_count = RwSignal::new(0u32);
        let badges = (DomBadges::new(config.badge_ids.clone()), cart_count);
        let cart = CartClient::new(FetchTransport::new(config.api_base.clone()), notifications, badges);
        let (reload_trigger, set_reload_trigger) = signal(0u32);

        Self {
            cart: StoredValue::new(Arc::new(cart)),
            config: StoredValue::new(config),
            notifications,
            cart_count: cart_count.read_only(),
            reload_trigger,
            set_reload_trigger,
        }
    }

    pub fn cart(&self) -> Arc<StorefrontCart> {
        self.cart.get_value()
    }

    /// "£12.50"
    pub fn format_price(&self, amount: f64) -> String {
        self.config.with_value(|c| format!("{}{:.2}", c.currency_symbol, amount))
    }

    /// Trigger a refetch in cart views
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
