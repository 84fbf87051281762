//! UI Components
//!
//! Leptos components for the cart.

mod cart_line;
mod cart_panel;

pub use cart_line::CartLine;
pub use cart_panel::CartPanel;
