//! Cart Panel State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::CartItem;

/// State of the slide-out cart panel
#[derive(Clone, Debug, Default, Store)]
pub struct CartPanelState {
    pub open: bool,
    /// A fetch is in flight
    pub loading: bool,
    /// Lines from the most recent fetch
    pub items: Vec<CartItem>,
}

pub type CartPanelStore = Store<CartPanelState>;

pub fn use_cart_panel() -> CartPanelStore {
    expect_context::<CartPanelStore>()
}

/// Replace the lines after a fetch
pub fn store_set_items(store: &CartPanelStore, items: Vec<CartItem>) {
    *store.items().write() = items;
    store.loading().set(false);
}

pub fn store_toggle_open(store: &CartPanelStore) {
    store.open().update(|open| *open = !*open);
}
