//! Cart Badge
//!
//! The badge shows the summed quantity of all cart lines, recomputed from
//! a fresh fetch.

use leptos::prelude::*;

use crate::models::CartItem;

/// Element IDs rendered by the server-side templates
pub const DEFAULT_BADGE_IDS: &[&str] = &["cartCount", "cartCountSidebar"];

/// Anything that displays the cart count
pub trait BadgeSink {
    fn set_count(&self, count: u32);
}

/// Summed quantity over all lines
pub fn badge_count(items: &[CartItem]) -> u32 {
    items.iter().fold(0u32, |sum, item| sum.saturating_add(item.quantity))
}

/// Writes the count into DOM elements by ID; missing elements are skipped
#[derive(Clone, Debug)]
pub struct DomBadges {
    ids: Vec<String>,
}

impl DomBadges {
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids }
    }
}

impl BadgeSink for DomBadges {
    fn set_count(&self, count: u32) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let text = count.to_string();
        for id in &self.ids {
            if let Some(element) = document.get_element_by_id(id) {
                element.set_text_content(Some(&text));
            }
        }
    }
}

/// In-app badge (cart panel toggle)
impl BadgeSink for RwSignal<u32> {
    fn set_count(&self, count: u32) {
        self.set(count);
    }
}

impl<A: BadgeSink, B: BadgeSink> BadgeSink for (A, B) {
    fn set_count(&self, count: u32) {
        self.0.set_count(count);
        self.1.set_count(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(cart_id: u32, quantity: u32) -> CartItem {
        CartItem {
            cart_id,
            product_id: cart_id,
            variant_id: None,
            color: None,
            size: None,
            quantity,
            price: 1.0,
            name: format!("Item {}", cart_id),
            image_url: None,
        }
    }

    #[test]
    fn test_badge_sums_quantities() {
        assert_eq!(badge_count(&[item(1, 2), item(2, 3)]), 5);
        assert_eq!(badge_count(&[]), 0);
    }

    #[test]
    fn test_zero_quantity_lines_do_not_count() {
        assert_eq!(badge_count(&[item(1, 0), item(2, 1)]), 1);
    }
}
