//! Legacy Alert Shim
//!
//! Routes `window.alert(...)` calls from legacy page scripts into toasts.
//! Installed explicitly at bootstrap; the kind is guessed from keywords in
//! the message.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::kind::NotificationKind;
use crate::notifier::Notifier;

const PATCHED_FLAG: &str = "__varonAlertsPatched";
const NATIVE_ALERT: &str = "__varonNativeAlert";

/// Keyword heuristic for legacy alert text
pub fn classify_alert(message: &str) -> NotificationKind {
    let text = message.trim().to_lowercase();
    if text.is_empty() {
        NotificationKind::Info
    } else if text.starts_with('✅') || text.contains("success") {
        NotificationKind::Success
    } else if text.starts_with('❌') || text.contains("error") || text.contains("failed") {
        NotificationKind::Error
    } else if text.starts_with('⚠') || text.contains("warning") {
        NotificationKind::Warning
    } else {
        NotificationKind::Info
    }
}

/// Argument passed to `window.alert`
#[derive(Clone, Debug, PartialEq)]
pub enum AlertArg {
    Text(String),
    Undefined,
    Value(serde_json::Value),
}

impl AlertArg {
    pub fn from_js(value: &JsValue) -> Self {
        if let Some(text) = value.as_string() {
            return AlertArg::Text(text);
        }
        if value.is_undefined() {
            return AlertArg::Undefined;
        }
        match serde_wasm_bindgen::from_value(value.clone()) {
            Ok(json) => AlertArg::Value(json),
            Err(_) => AlertArg::Text(
                js_sys::JSON::stringify(value)
                    .ok()
                    .and_then(|json| json.as_string())
                    .unwrap_or_else(|| format!("{:?}", value)),
            ),
        }
    }

    /// Strings as-is, anything else as JSON
    pub fn text(&self) -> String {
        match self {
            AlertArg::Text(text) => text.clone(),
            AlertArg::Undefined => String::new(),
            AlertArg::Value(json) => json.to_string(),
        }
    }
}

impl From<&str> for AlertArg {
    fn from(text: &str) -> Self {
        AlertArg::Text(text.to_string())
    }
}

impl From<serde_json::Value> for AlertArg {
    fn from(json: serde_json::Value) -> Self {
        AlertArg::Value(json)
    }
}

/// Show one alert argument as a toast of the guessed kind
pub fn route_alert<N: Notifier + ?Sized>(notifier: &N, arg: &AlertArg) -> NotificationKind {
    let text = arg.text();
    let kind = classify_alert(&text);
    notifier.notify(kind, &text);
    kind
}

/// Handle for an installed shim
#[derive(Debug)]
pub struct AlertShim {
    _installed: (),
}

impl AlertShim {
    /// Put the native `window.alert` back
    pub fn restore(self) -> Result<(), JsValue> {
        let window = window_value()?;
        let native = js_sys::Reflect::get(&window, &JsValue::from_str(NATIVE_ALERT))?;
        if native.is_function() {
            js_sys::Reflect::set(&window, &JsValue::from_str("alert"), &native)?;
        }
        js_sys::Reflect::delete_property(window.unchecked_ref::<js_sys::Object>(), &JsValue::from_str(PATCHED_FLAG))?;
        log::info!("native window.alert restored");
        Ok(())
    }
}

fn window_value() -> Result<JsValue, JsValue> {
    web_sys::window()
        .map(JsValue::from)
        .ok_or_else(|| JsValue::from_str("no window"))
}

/// Replace `window.alert`. `Ok(None)` when a shim is already installed.
pub fn install_alert_shim<N: Notifier + 'static>(notifier: N) -> Result<Option<AlertShim>, JsValue> {
    let window = window_value()?;
    let patched = js_sys::Reflect::get(&window, &JsValue::from_str(PATCHED_FLAG))?;
    if patched.is_truthy() {
        return Ok(None);
    }

    let native = js_sys::Reflect::get(&window, &JsValue::from_str("alert"))?;
    js_sys::Reflect::set(&window, &JsValue::from_str(NATIVE_ALERT), &native)?;

    let shim = Closure::<dyn Fn(JsValue)>::new(move |value: JsValue| {
        route_alert(&notifier, &AlertArg::from_js(&value));
    });
    js_sys::Reflect::set(&window, &JsValue::from_str("alert"), shim.as_ref())?;
    js_sys::Reflect::set(&window, &JsValue::from_str(PATCHED_FLAG), &JsValue::TRUE)?;
    shim.forget();

    log::info!("window.alert routed to notifications");
    Ok(Some(AlertShim { _installed: () }))
}
