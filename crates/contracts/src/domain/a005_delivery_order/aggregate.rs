use serde::{Deserialize, Serialize};

use crate::domain::common::{Record, Searchable, StatusFlow, StatusRecord};

/// Статус доставки заказа курьером
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Pending,
    PickedUp,
    InTransit,
    Delivered,
}

impl DeliveryStatus {
    pub fn code(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "pending",
            DeliveryStatus::PickedUp => "picked_up",
            DeliveryStatus::InTransit => "in_transit",
            DeliveryStatus::Delivered => "delivered",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "Pending",
            DeliveryStatus::PickedUp => "Picked Up",
            DeliveryStatus::InTransit => "In Transit",
            DeliveryStatus::Delivered => "Delivered",
        }
    }

    pub fn all() -> Vec<DeliveryStatus> {
        vec![
            DeliveryStatus::Pending,
            DeliveryStatus::PickedUp,
            DeliveryStatus::InTransit,
            DeliveryStatus::Delivered,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    /// Надпись кнопки перевода в следующий статус
    pub fn advance_label(&self) -> Option<&'static str> {
        match self {
            DeliveryStatus::Pending => Some("Mark Picked Up"),
            DeliveryStatus::PickedUp => Some("Start Delivery"),
            DeliveryStatus::InTransit => Some("Mark Delivered"),
            DeliveryStatus::Delivered => None,
        }
    }
}

impl StatusFlow for DeliveryStatus {
    fn next(self) -> Option<Self> {
        match self {
            DeliveryStatus::Pending => Some(DeliveryStatus::PickedUp),
            DeliveryStatus::PickedUp => Some(DeliveryStatus::InTransit),
            DeliveryStatus::InTransit => Some(DeliveryStatus::Delivered),
            DeliveryStatus::Delivered => None,
        }
    }
}

/// Назначенный курьеру заказ (страница "My Orders" роли delivery)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryOrder {
    pub id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub address: String,
    pub items: u32,
    pub amount: f64,
    pub status: DeliveryStatus,
    pub distance_km: f64,
    pub estimated_minutes: u32,
}

impl Record for DeliveryOrder {
    fn id(&self) -> &str {
        &self.id
    }
}

impl StatusRecord for DeliveryOrder {
    type Status = DeliveryStatus;

    fn status(&self) -> DeliveryStatus {
        self.status
    }

    fn set_status(&mut self, status: DeliveryStatus) {
        self.status = status;
    }

    fn status_code(&self) -> &'static str {
        self.status.code()
    }
}

impl Searchable for DeliveryOrder {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.customer_name.clone(),
            self.address.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_chain() {
        assert_eq!(
            DeliveryStatus::Pending.chain(),
            vec![
                DeliveryStatus::Pending,
                DeliveryStatus::PickedUp,
                DeliveryStatus::InTransit,
                DeliveryStatus::Delivered,
            ]
        );
    }

    #[test]
    fn test_advance_label_matches_flow() {
        for status in DeliveryStatus::all() {
            assert_eq!(status.advance_label().is_some(), !status.is_terminal());
        }
    }
}
