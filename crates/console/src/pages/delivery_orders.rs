//! Страница "My Orders" (роль delivery)

use contracts::domain::a005_delivery_order::fixtures::demo_delivery_orders;
use contracts::domain::a005_delivery_order::{DeliveryOrder, DeliveryStatus};
use contracts::shared::CommandResult;
use serde::Serialize;

use crate::flow::apply_transition;
use crate::session::ListSession;
use crate::stats::count;

/// Сводные карточки страницы назначений курьера
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryOrdersSummary {
    pub pending: usize,
    pub picked_up: usize,
    pub in_transit: usize,
    pub delivered: usize,
}

pub struct DeliveryOrdersPage {
    pub session: ListSession<DeliveryOrder>,
}

impl DeliveryOrdersPage {
    pub fn new() -> Self {
        Self::with_orders(demo_delivery_orders())
    }

    pub fn with_orders(orders: Vec<DeliveryOrder>) -> Self {
        Self {
            session: ListSession::seed(orders).expect("delivery fixtures have unique ids"),
        }
    }

    /// Перевести заказ по цепочке pending → picked_up → in_transit →
    /// delivered. Для доставленного заказа кнопки нет, а прямой вызов
    /// возвращает ошибку.
    pub fn advance(&mut self, id: &str) -> CommandResult<DeliveryOrder> {
        match apply_transition(self.session.store_mut(), id) {
            Ok(order) => {
                self.session.notifications.success(format!(
                    "Order status updated to {}",
                    order.status.code().replace('_', " ")
                ));
                Ok(order)
            }
            Err(err) => {
                self.session.notifications.error(err.to_string());
                Err(err.into())
            }
        }
    }

    pub fn summary(&self) -> DeliveryOrdersSummary {
        let orders = self.session.all();
        let by_status =
            |status: DeliveryStatus| count(orders, |o: &DeliveryOrder| o.status == status);
        DeliveryOrdersSummary {
            pending: by_status(DeliveryStatus::Pending),
            picked_up: by_status(DeliveryStatus::PickedUp),
            in_transit: by_status(DeliveryStatus::InTransit),
            delivered: by_status(DeliveryStatus::Delivered),
        }
    }
}

impl Default for DeliveryOrdersPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::NotificationKind;

    #[test]
    fn test_fixture_summary() {
        let summary = DeliveryOrdersPage::new().summary();
        assert_eq!(
            (summary.pending, summary.picked_up, summary.in_transit, summary.delivered),
            (1, 1, 1, 0)
        );
    }

    #[test]
    fn test_advance_walks_the_chain() {
        let mut page = DeliveryOrdersPage::new();

        let order = page.advance("DEL001").unwrap();
        assert_eq!(order.status, DeliveryStatus::PickedUp);
        assert_eq!(
            page.session.notifications.current().unwrap().message,
            "Order status updated to picked up"
        );

        page.advance("DEL001").unwrap();
        let order = page.advance("DEL001").unwrap();
        assert_eq!(order.status, DeliveryStatus::Delivered);

        // Терминал: дальше некуда
        let err = page.advance("DEL001").unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(
            page.session.notifications.current().unwrap().kind,
            NotificationKind::Error
        );
    }
}
