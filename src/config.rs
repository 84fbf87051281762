//! Storefront Configuration
//!
//! Page templates may set `window.__VARON_CONFIG__` before the bundle loads;
//! every field is optional.

use leptos_notify::NotifyConfig;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::badge::DEFAULT_BADGE_IDS;
use crate::error::ConfigError;

const CONFIG_GLOBAL: &str = "__VARON_CONFIG__";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Prefix for cart API paths; empty means same origin
    pub api_base: String,
    /// DOM element IDs that display the cart count
    pub badge_ids: Vec<String>,
    /// Prefix for displayed prices
    pub currency_symbol: String,
    /// `log` level name
    pub log_level: String,
    pub notifications: NotifyConfig,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            badge_ids: DEFAULT_BADGE_IDS.iter().map(|id| id.to_string()).collect(),
            currency_symbol: "£".to_string(),
            log_level: "info".to_string(),
            notifications: NotifyConfig::default(),
        }
    }
}

impl StorefrontConfig {
    /// Read the page global; absent means defaults
    pub fn from_window() -> Result<Self, ConfigError> {
        let window = web_sys::window().ok_or(ConfigError::NoWindow)?;
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|e| ConfigError::Invalid(format!("{:?}", e)))?;
        if raw.is_undefined() || raw.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(raw).map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}
