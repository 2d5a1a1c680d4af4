//! Страница "Orders & Payments" (роль admin)

use contracts::domain::a001_order::fixtures::demo_orders;
use contracts::domain::a001_order::{Order, OrderStatus, PaymentStatus};
use contracts::shared::CommandResult;
use serde::Serialize;

use crate::flow::set_status;
use crate::session::ListSession;
use crate::stats::{count, sum_where};

/// Сводные карточки страницы заказов
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrdersSummary {
    pub total_orders: usize,
    /// Выручка только по оплаченным заказам
    pub total_revenue: f64,
    pub pending: usize,
    pub delivered: usize,
}

pub struct OrdersPage {
    pub session: ListSession<Order>,
}

impl OrdersPage {
    pub fn new() -> Self {
        Self::with_orders(demo_orders())
    }

    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            session: ListSession::seed(orders).expect("order fixtures have unique ids"),
        }
    }

    /// Смена статуса из выпадающего списка: любой член набора валиден
    pub fn set_status(&mut self, id: &str, status: OrderStatus) -> CommandResult<Order> {
        match set_status(self.session.store_mut(), id, status) {
            Ok(order) => {
                self.session.notifications.success("Order status updated");
                Ok(order)
            }
            Err(err) => {
                self.session.notifications.error(err.to_string());
                Err(err.into())
            }
        }
    }

    pub fn export(&mut self) {
        self.session
            .notifications
            .success("Orders exported successfully");
    }

    pub fn summary(&self) -> OrdersSummary {
        let orders = self.session.all();
        OrdersSummary {
            total_orders: orders.len(),
            total_revenue: sum_where(
                orders,
                |o: &Order| o.payment_status == PaymentStatus::Paid,
                |o| o.amount,
            ),
            pending: count(orders, |o| o.status == OrderStatus::Pending),
            delivered: count(orders, |o| o.status == OrderStatus::Delivered),
        }
    }
}

impl Default for OrdersPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::NotificationKind;

    #[test]
    fn test_summary_over_fixtures() {
        let page = OrdersPage::new();
        let summary = page.summary();
        assert_eq!(summary.total_orders, 3);
        assert!((summary.total_revenue - 909.97).abs() < 1e-9);
        assert_eq!(summary.pending, 0);
        assert_eq!(summary.delivered, 1);
    }

    #[test]
    fn test_set_status_notifies_success() {
        let mut page = OrdersPage::new();
        let order = page.set_status("ORD003", OrderStatus::Shipped).unwrap();
        assert_eq!(order.status, OrderStatus::Shipped);

        let notification = page.session.notifications.current().unwrap();
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(notification.message, "Order status updated");
    }

    #[test]
    fn test_set_status_on_missing_order_fails() {
        let mut page = OrdersPage::new();
        let err = page.set_status("ORD999", OrderStatus::Shipped).unwrap_err();
        assert_eq!(err.code, "NOT_FOUND");
        assert_eq!(
            page.session.notifications.current().unwrap().kind,
            NotificationKind::Error
        );
    }
}
