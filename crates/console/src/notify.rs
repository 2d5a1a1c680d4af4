//! Уведомления об итогах операций: fire-and-forget, последнее
//! побеждает

use contracts::shared::{Notification, NotificationKind};

/// Держатель текущего уведомления одной сессии страницы.
///
/// Очереди нет: перекрывающиеся вызовы просто заменяют текущее
/// уведомление. Ничего не персистится и не ретраится.
#[derive(Debug, Clone, Default)]
pub struct NotificationHub {
    current: Option<Notification>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, notification: Notification) {
        match notification.kind {
            NotificationKind::Error => {
                log::error!("notification: {}", notification.message)
            }
            _ => log::info!("notification: {}", notification.message),
        }
        log::debug!("notification payload: {}", notification.payload());
        self.current = Some(notification);
    }

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.push(Notification::new(kind, message));
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Notification::success(message));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Notification::info(message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Notification::error(message));
    }

    /// Текущее уведомление, если его ещё не забрали
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Забрать уведомление для показа (баннер отображается один раз)
    pub fn take(&mut self) -> Option<Notification> {
        self.current.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_notification_wins() {
        let mut hub = NotificationHub::new();
        hub.success("Order status updated");
        hub.error("record 'X' not found");

        let current = hub.current().unwrap();
        assert_eq!(current.kind, NotificationKind::Error);
        assert_eq!(current.message, "record 'X' not found");
    }

    #[test]
    fn test_take_clears_current() {
        let mut hub = NotificationHub::new();
        hub.info("Opening navigation to 123 Main St");
        assert!(hub.take().is_some());
        assert!(hub.current().is_none());
        assert!(hub.take().is_none());
    }
}
