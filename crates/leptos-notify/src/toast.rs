//! Toast Model

use std::time::Duration;

use crate::kind::NotificationKind;

pub type ToastId = u64;

/// Render stage of a toast; drives the `show` class for CSS transitions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastStage {
    /// Mounted, waiting for the first tick
    Entering,
    Visible,
    /// Exit animation running, removed afterwards
    Leaving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: NotificationKind,
    pub message: String,
    /// Zero keeps the toast until it is closed
    pub duration: Duration,
    pub stage: ToastStage,
}

impl Toast {
    pub fn class(&self) -> String {
        let base = format!("varon-notification varon-notification-{}", self.kind.as_str());
        if self.stage == ToastStage::Visible {
            format!("{base} show")
        } else {
            base
        }
    }

    pub fn is_sticky(&self) -> bool {
        self.duration.is_zero()
    }
}
