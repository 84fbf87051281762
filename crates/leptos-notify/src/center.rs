//! Notification Center
//!
//! Owns the toast stack and the open dialogs. Constructed once at bootstrap
//! and handed to components through context; it is `Copy`, like the other
//! signal bundles in the app.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::channel::oneshot;
use leptos::prelude::*;

use crate::config::NotifyConfig;
use crate::dialog::{ConfirmOptions, Dialog, DialogAction, DialogId, DialogPhase, PromptOptions, Resolution};
use crate::kind::NotificationKind;
use crate::scheduler::{BrowserScheduler, Scheduler};
use crate::toast::{Toast, ToastId, ToastStage};

#[derive(Clone, Copy)]
pub struct NotificationCenter {
    toasts: RwSignal<Vec<Toast>>,
    dialogs: RwSignal<Vec<Dialog>>,
    /// Answer channels of unresolved dialogs
    pending: StoredValue<HashMap<DialogId, oneshot::Sender<Resolution>>>,
    next_id: StoredValue<u64>,
    config: StoredValue<NotifyConfig>,
    scheduler: StoredValue<Arc<dyn Scheduler>>,
}

impl NotificationCenter {
    pub fn new(config: NotifyConfig, scheduler: impl Scheduler + 'static) -> Self {
        let scheduler: Arc<dyn Scheduler> = Arc::new(scheduler);
        Self {
            toasts: RwSignal::new(Vec::new()),
            dialogs: RwSignal::new(Vec::new()),
            pending: StoredValue::new(HashMap::new()),
            next_id: StoredValue::new(0),
            config: StoredValue::new(config),
            scheduler: StoredValue::new(scheduler),
        }
    }

    /// Center driven by `setTimeout`
    pub fn browser(config: NotifyConfig) -> Self {
        Self::new(config, BrowserScheduler)
    }

    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }

    pub fn dialogs(&self) -> ReadSignal<Vec<Dialog>> {
        self.dialogs.read_only()
    }

    /// Tracked lookup of a single toast
    pub fn toast(&self, id: ToastId) -> Option<Toast> {
        self.toasts.with(|toasts| toasts.iter().find(|t| t.id == id).cloned())
    }

    /// Tracked lookup of a single dialog
    pub fn dialog(&self, id: DialogId) -> Option<Dialog> {
        self.dialogs.with(|dialogs| dialogs.iter().find(|d| d.id == id).cloned())
    }

    // ========================
    // Toasts
    // ========================

    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.show(NotificationKind::Success, message, None)
    }

    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.show(NotificationKind::Error, message, None)
    }

    pub fn warning(&self, message: impl Into<String>) -> ToastId {
        self.show(NotificationKind::Warning, message, None)
    }

    pub fn info(&self, message: impl Into<String>) -> ToastId {
        self.show(NotificationKind::Info, message, None)
    }

    /// Push a toast. `None` uses the configured duration for `kind`; a zero
    /// duration keeps the toast until it is closed.
    pub fn show(&self, kind: NotificationKind, message: impl Into<String>, duration: Option<Duration>) -> ToastId {
        let duration = duration.unwrap_or_else(|| self.config.with_value(|c| c.duration_for(kind)));
        let show_delay = self.config.with_value(|c| c.show_delay());
        let id = self.next_id();
        let message = message.into();
        log::debug!("toast #{} [{}] {}", id, kind.as_str(), message);

        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                kind,
                message,
                duration,
                stage: ToastStage::Entering,
            })
        });

        let center = *self;
        self.after(show_delay, move || {
            center.toasts.try_update(|toasts| {
                if let Some(toast) = toasts.iter_mut().find(|t| t.id == id && t.stage == ToastStage::Entering) {
                    toast.stage = ToastStage::Visible;
                }
            });
        });
        if !duration.is_zero() {
            self.after(duration, move || center.leave(id));
        }
        id
    }

    /// Remove a toast right away (close button)
    pub fn dismiss(&self, id: ToastId) -> bool {
        self.toasts
            .try_update(|toasts| {
                let before = toasts.len();
                toasts.retain(|t| t.id != id);
                toasts.len() != before
            })
            .unwrap_or(false)
    }

    fn leave(&self, id: ToastId) {
        let started = self
            .toasts
            .try_update(|toasts| match toasts.iter_mut().find(|t| t.id == id) {
                Some(toast) if toast.stage != ToastStage::Leaving => {
                    toast.stage = ToastStage::Leaving;
                    true
                }
                _ => false,
            })
            .unwrap_or(false);
        if started {
            let center = *self;
            let exit_delay = self.config.with_value(|c| c.exit_delay());
            self.after(exit_delay, move || {
                center.dismiss(id);
            });
        }
    }

    // ========================
    // Dialogs
    // ========================

    /// Open a confirm dialog; resolves `true` only on the confirm button
    pub fn confirm(&self, message: impl Into<String>, options: ConfirmOptions) -> impl Future<Output = bool> + 'static {
        let id = self.next_id();
        let answer = self.open(Dialog::confirm(id, message.into(), options));
        async move { matches!(answer.await, Ok(Resolution::Accepted(_))) }
    }

    /// Open a prompt dialog; resolves with the input value, or `None` when dismissed
    pub fn prompt(
        &self,
        message: impl Into<String>,
        options: PromptOptions,
    ) -> impl Future<Output = Option<String>> + 'static {
        let id = self.next_id();
        let answer = self.open(Dialog::prompt(id, message.into(), options));
        async move {
            match answer.await {
                Ok(Resolution::Accepted(value)) => value,
                _ => None,
            }
        }
    }

    /// Apply a user action. Returns false when the dialog is gone or the
    /// action does not resolve it.
    pub fn respond(&self, id: DialogId, action: DialogAction) -> bool {
        let resolution = self.dialogs.with_untracked(|dialogs| {
            dialogs
                .iter()
                .find(|d| d.id == id)
                .and_then(|d| d.resolution_for(action))
        });
        let Some(resolution) = resolution else {
            return false;
        };
        log::debug!("dialog #{} resolved by {:?}", id, action);

        self.dialogs.update(|dialogs| {
            if let Some(dialog) = dialogs.iter_mut().find(|d| d.id == id) {
                dialog.phase = DialogPhase::Resolved;
            }
        });
        if let Some(sender) = self.pending.try_update_value(|pending| pending.remove(&id)).flatten() {
            // Caller may have dropped the future
            let _ = sender.send(resolution);
        }

        let center = *self;
        let exit_delay = self.config.with_value(|c| c.exit_delay());
        self.after(exit_delay, move || {
            center.dialogs.try_update(|dialogs| dialogs.retain(|d| d.id != id));
        });
        true
    }

    /// Mirror the prompt input's current text
    pub fn set_prompt_value(&self, id: DialogId, value: String) {
        self.dialogs.update(|dialogs| {
            if let Some(field) = dialogs
                .iter_mut()
                .find(|d| d.id == id && d.is_open())
                .and_then(|d| d.prompt.as_mut())
            {
                field.value = value;
            }
        });
    }

    fn open(&self, dialog: Dialog) -> oneshot::Receiver<Resolution> {
        let (sender, receiver) = oneshot::channel();
        let id = dialog.id;
        self.pending.update_value(|pending| {
            pending.insert(id, sender);
        });
        self.dialogs.update(|dialogs| dialogs.push(dialog));

        let center = *self;
        let show_delay = self.config.with_value(|c| c.show_delay());
        self.after(show_delay, move || {
            center.dialogs.try_update(|dialogs| {
                if let Some(dialog) = dialogs.iter_mut().find(|d| d.id == id && d.phase == DialogPhase::Created) {
                    dialog.phase = DialogPhase::Shown;
                }
            });
        });
        receiver
    }

    fn next_id(&self) -> u64 {
        self.next_id
            .try_update_value(|next| {
                *next += 1;
                *next
            })
            .unwrap_or_default()
    }

    fn after(&self, delay: Duration, task: impl FnOnce() + Send + 'static) {
        if let Some(scheduler) = self.scheduler.try_with_value(Arc::clone) {
            scheduler.schedule(delay, Box::new(task));
        }
    }
}
