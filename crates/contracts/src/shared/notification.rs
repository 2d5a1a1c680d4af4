use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Вид транзиентного уведомления
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

/// Транзиентное уведомление об итоге операции.
///
/// Не персистится и не доставляется повторно: потребитель показывает
/// последнее и забывает его.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    /// JSON-представление для структурного лога
    pub fn payload(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_is_json() {
        let notification = Notification::success("Order status updated");
        let value: serde_json::Value =
            serde_json::from_str(&notification.payload()).expect("payload parses");
        assert_eq!(value["kind"], "success");
        assert_eq!(value["message"], "Order status updated");
    }

    #[test]
    fn test_unique_ids() {
        let a = Notification::info("a");
        let b = Notification::info("b");
        assert_ne!(a.id, b.id);
    }
}
