use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::config::NotificationConfig;

/// Desktop notification sender with cooldown to prevent spam.
pub struct Notifier {
    enabled: bool,
    cooldown: Duration,
    last_sent: Mutex<Option<Instant>>,
}

impl Notifier {
    pub fn new(config: &NotificationConfig) -> Self {
        Self {
            enabled: config.enabled,
            cooldown: Duration::from_secs(config.cooldown_seconds),
            last_sent: Mutex::new(None),
        }
    }

    /// Try to send a desktop notification confirming the feedback copy.
    /// Returns true if a notification was sent, false if skipped.
    pub fn notify_copied(&self, total: f64) -> bool {
        if !self.enabled {
            return false;
        }
        if !self.check_cooldown() {
            return false;
        }

        self.send_notification(total);
        true
    }

    /// Check and update cooldown. Returns true if enough time has passed.
    fn check_cooldown(&self) -> bool {
        let mut last = self.last_sent.lock().unwrap();
        let now = Instant::now();
        if let Some(prev) = *last {
            if now.duration_since(prev) < self.cooldown {
                return false;
            }
        }
        *last = Some(now);
        true
    }

    /// Fire-and-forget: send the actual desktop notification.
    fn send_notification(&self, total: f64) {
        let body = format!("Feedback copied to clipboard | Total Score: {total:.2}%");

        // Fire-and-forget in a background thread to never block the UI
        std::thread::spawn(move || {
            if let Err(e) = notify_rust::Notification::new()
                .summary("📋 GradePad")
                .body(&body)
                .show()
            {
                tracing::debug!("Desktop notification failed: {e}");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NotificationConfig;

    #[test]
    fn cooldown_blocks_rapid_notifications() {
        let config = NotificationConfig {
            enabled: true,
            cooldown_seconds: 30,
        };
        let notifier = Notifier::new(&config);

        // First call should pass cooldown
        assert!(notifier.check_cooldown());
        // Second call immediately should be blocked
        assert!(!notifier.check_cooldown());
    }

    #[test]
    fn cooldown_zero_allows_all() {
        let config = NotificationConfig {
            enabled: true,
            cooldown_seconds: 0,
        };
        let notifier = Notifier::new(&config);
        assert!(notifier.check_cooldown());
        assert!(notifier.check_cooldown());
    }

    #[test]
    fn disabled_notifier_skips() {
        let config = NotificationConfig {
            enabled: false,
            cooldown_seconds: 0,
        };
        let notifier = Notifier::new(&config);
        assert!(!notifier.notify_copied(87.5));
    }
}
