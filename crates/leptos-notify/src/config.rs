//! Notification Timing Configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::kind::NotificationKind;

/// Toast and dialog timings, in milliseconds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Lifetime of success, warning and info toasts
    pub default_duration_ms: u32,
    /// Lifetime of error toasts
    pub error_duration_ms: u32,
    /// Delay between mounting an element and adding its `show` class
    pub show_delay_ms: u32,
    /// Exit animation length before an element leaves the DOM
    pub exit_delay_ms: u32,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: 3000,
            error_duration_ms: 4000,
            show_delay_ms: 10,
            exit_delay_ms: 300,
        }
    }
}

impl NotifyConfig {
    pub fn duration_for(&self, kind: NotificationKind) -> Duration {
        let ms = match kind {
            NotificationKind::Error => self.error_duration_ms,
            _ => self.default_duration_ms,
        };
        Duration::from_millis(ms.into())
    }

    pub fn show_delay(&self) -> Duration {
        Duration::from_millis(self.show_delay_ms.into())
    }

    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_toasts_last_longer() {
        let config = NotifyConfig::default();
        assert_eq!(config.duration_for(NotificationKind::Error), Duration::from_millis(4000));
        assert_eq!(config.duration_for(NotificationKind::Info), Duration::from_millis(3000));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: NotifyConfig = serde_json::from_str(r#"{"error_duration_ms": 6000}"#).unwrap();
        assert_eq!(config.error_duration_ms, 6000);
        assert_eq!(config.default_duration_ms, 3000);
        assert_eq!(config.exit_delay_ms, 300);
    }
}
