//! Leptos Notify
//!
//! In-page replacements for the browser's blocking dialogs: stacked toasts,
//! future-based confirm/prompt modals, and an opt-in `window.alert` shim.
//!
//! Build one [`NotificationCenter`] at startup, `provide_context` it, and
//! mount [`NotificationHost`] once.

mod alert;
mod center;
mod config;
mod dialog;
mod host;
mod kind;
mod notifier;
mod scheduler;
mod toast;

pub use alert::{classify_alert, install_alert_shim, route_alert, AlertArg, AlertShim};
pub use center::NotificationCenter;
pub use config::NotifyConfig;
pub use dialog::{ConfirmOptions, Dialog, DialogAction, DialogId, DialogPhase, PromptField, PromptOptions};
pub use host::{DialogHost, NotificationHost, ToastHost};
pub use kind::{ConfirmStyle, DialogKind, NotificationKind};
pub use notifier::Notifier;
pub use scheduler::{BrowserScheduler, Scheduler};
pub use toast::{Toast, ToastId, ToastStage};
