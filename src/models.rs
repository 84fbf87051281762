//! Cart Models
//!
//! Data structures matching the cart API payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Line item returned by `GET /api/cart/get`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub cart_id: u32,
    pub product_id: u32,
    #[serde(default)]
    pub variant_id: Option<u32>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(deserialize_with = "quantity_from_json")]
    pub quantity: u32,
    /// Decimal prices arrive as strings ("12.50") from the server
    #[serde(deserialize_with = "price_from_json")]
    pub price: f64,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// "Red / M" style variant label
    pub fn variant_label(&self) -> Option<String> {
        let parts: Vec<&str> = [self.color.as_deref(), self.size.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" / "))
        }
    }
}

/// Envelope shared by every cart endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub items: Option<Vec<CartItem>>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// ========================
// Request Bodies
// ========================

/// Body of `POST /api/cart/add`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddToCart {
    pub product_id: u32,
    pub quantity: u32,
    pub variant_id: Option<u32>,
    pub color: Option<String>,
    pub size: Option<String>,
}

impl AddToCart {
    pub fn new(product_id: u32, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
            variant_id: None,
            color: None,
            size: None,
        }
    }

    pub fn variant(mut self, variant_id: Option<u32>, color: Option<String>, size: Option<String>) -> Self {
        self.variant_id = variant_id;
        self.color = color;
        self.size = size;
        self
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateCartArgs {
    pub cart_id: u32,
    pub quantity: u32,
}

#[derive(Debug, Serialize)]
pub struct CartIdArgs {
    pub cart_id: u32,
}

// ========================
// Lenient numbers
// ========================

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    fn into_f64(self) -> Result<f64, String> {
        match self {
            Self::Number(n) => Ok(n),
            Self::Text(s) => s.trim().parse::<f64>().map_err(|e| format!("{:?}: {}", s, e)),
        }
    }
}

fn price_from_json<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let raw = NumberOrString::deserialize(deserializer)?;
    raw.into_f64().map_err(serde::de::Error::custom)
}

fn quantity_from_json<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = NumberOrString::deserialize(deserializer)?
        .into_f64()
        .map_err(serde::de::Error::custom)?;
    if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(serde::de::Error::custom(format!("invalid quantity {}", value)));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_accepts_string_numbers() {
        let json = r#"{"cart_id": 7, "product_id": 3, "variant_id": 12, "color": "Red",
                       "size": "M", "quantity": "2", "price": "19.99", "name": "Linen Shirt"}"#;
        let item: CartItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.quantity, 2);
        assert!((item.price - 19.99).abs() < 1e-9);
        assert_eq!(item.variant_label().as_deref(), Some("Red / M"));
    }

    #[test]
    fn test_item_optional_fields_default() {
        let json = r#"{"cart_id": 1, "product_id": 2, "quantity": 1, "price": 5, "name": "Socks"}"#;
        let item: CartItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.variant_id, None);
        assert_eq!(item.variant_label(), None);
        assert_eq!(item.line_total(), 5.0);
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let json = r#"{"cart_id": 1, "product_id": 2, "quantity": -1, "price": 5, "name": "Socks"}"#;
        assert!(serde_json::from_str::<CartItem>(json).is_err());
    }

    #[test]
    fn test_add_body_keeps_null_variant_fields() {
        let body = serde_json::to_value(AddToCart::new(4, 1)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"product_id": 4, "quantity": 1, "variant_id": null, "color": null, "size": null})
        );
    }
}
