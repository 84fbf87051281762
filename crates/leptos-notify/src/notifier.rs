//! Notifier Port
//!
//! What callers outside this crate depend on to surface messages. The
//! cart client talks to this trait so tests can swap in a recorder.

use crate::center::NotificationCenter;
use crate::kind::NotificationKind;

pub trait Notifier {
    fn notify(&self, kind: NotificationKind, message: &str);

    fn notify_success(&self, message: &str) {
        self.notify(NotificationKind::Success, message);
    }

    fn notify_error(&self, message: &str) {
        self.notify(NotificationKind::Error, message);
    }

    fn notify_warning(&self, message: &str) {
        self.notify(NotificationKind::Warning, message);
    }

    fn notify_info(&self, message: &str) {
        self.notify(NotificationKind::Info, message);
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, kind: NotificationKind, message: &str) {
        self.show(kind, message, None);
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, kind: NotificationKind, message: &str) {
        (**self).notify(kind, message);
    }
}
