//! Page Bindings
//!
//! Hooks the server-rendered "add to cart" buttons into the cart client
//! through one delegated document click listener.
//!
//! ```html
//! <button data-add-to-cart data-product-id="12" data-variant-id="40"
//!         data-color="Black" data-size="M" data-quantity="1">Add to cart</button>
//! ```

use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::models::AddToCart;

const BUTTON_SELECTOR: &str = "[data-add-to-cart]";

/// Build the add request from a button's data attributes. `None` when the
/// product id is missing or not a number.
pub fn add_request_from_attributes(attribute: impl Fn(&str) -> Option<String>) -> Option<AddToCart> {
    let product_id = attribute("data-product-id")?.trim().parse().ok()?;
    let quantity = attribute("data-quantity")
        .and_then(|q| q.trim().parse::<u32>().ok())
        .filter(|q| *q > 0)
        .unwrap_or(1);
    let variant_id = attribute("data-variant-id").and_then(|v| v.trim().parse().ok());
    let text = |name: &str| attribute(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    Some(AddToCart::new(product_id, quantity).variant(variant_id, text("data-color"), text("data-size")))
}

/// Listen for clicks on add-to-cart buttons anywhere in the document
pub fn bind_add_to_cart_buttons(ctx: AppContext) {
    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(button) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(BUTTON_SELECTOR).ok().flatten())
        else {
            return;
        };
        ev.prevent_default();

        let Some(request) = add_request_from_attributes(|name| button.get_attribute(name)) else {
            log::warn!("add-to-cart button without a valid data-product-id");
            return;
        };
        spawn_local(async move {
            if ctx.cart().add(&request).await {
                ctx.reload();
            }
        });
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    }
    on_click.forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_full_button() {
        let map = attrs(&[
            ("data-product-id", "12"),
            ("data-variant-id", "40"),
            ("data-color", "Black"),
            ("data-size", " M "),
            ("data-quantity", "3"),
        ]);
        let request = add_request_from_attributes(|n| map.get(n).cloned()).unwrap();
        assert_eq!(
            request,
            AddToCart::new(12, 3).variant(Some(40), Some("Black".into()), Some("M".into()))
        );
    }

    #[test]
    fn test_defaults_and_blank_values() {
        let map = attrs(&[("data-product-id", "7"), ("data-quantity", "0"), ("data-color", "")]);
        let request = add_request_from_attributes(|n| map.get(n).cloned()).unwrap();
        assert_eq!(request, AddToCart::new(7, 1));
    }

    #[test]
    fn test_missing_product_id() {
        let map = attrs(&[("data-product-id", "abc")]);
        assert_eq!(add_request_from_attributes(|n| map.get(n).cloned()), None);
        assert_eq!(add_request_from_attributes(|_| None), None);
    }
}
