//! Перевод статусов: табличный (линейная цепочка) и прямое назначение

use contracts::domain::common::{Record, StatusFlow, StatusRecord};
use contracts::shared::CommandError;
use thiserror::Error;

use crate::store::{RecordStore, StoreError};

/// Ошибки перевода статуса
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("no transition available for record '{id}' in status '{status}'")]
    NoTransitionAvailable { id: String, status: &'static str },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<TransitionError> for CommandError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::NoTransitionAvailable { .. } => {
                CommandError::validation(err.to_string())
            }
            TransitionError::Store(store_err) => store_err.into(),
        }
    }
}

/// Перевести запись в следующий статус по таблице переходов домена.
///
/// Для терминального статуса возвращает `NoTransitionAvailable`;
/// ошибка локальна и показывается пользователю, никогда не фатальна.
pub fn apply_transition<T>(
    store: &mut RecordStore<T>,
    id: &str,
) -> Result<T, TransitionError>
where
    T: StatusRecord + Clone,
    T::Status: StatusFlow,
{
    let record = store
        .get(id)
        .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
    let next = record
        .status()
        .next()
        .ok_or_else(|| TransitionError::NoTransitionAvailable {
            id: id.to_string(),
            status: record.status_code(),
        })?;

    let updated = store.replace(id, |r| {
        r.set_status(next);
        r.touch();
    })?;
    Ok(updated.clone())
}

/// Назначить статус напрямую, минуя таблицу переходов.
///
/// Тикеты и KYC-заявки допускают любой член доменного набора из
/// любого текущего статуса; легальность здесь сознательно не
/// проверяется, поведение исходной консоли сохранено.
pub fn set_status<T>(
    store: &mut RecordStore<T>,
    id: &str,
    status: T::Status,
) -> Result<T, StoreError>
where
    T: StatusRecord + Clone,
{
    let updated = store.replace(id, |r| {
        r.set_status(status);
        r.touch();
    })?;
    Ok(updated.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_order::fixtures::demo_orders;
    use contracts::domain::a001_order::{Order, OrderStatus, PaymentStatus};
    use contracts::domain::a004_support_ticket::fixtures::demo_tickets;
    use contracts::domain::a004_support_ticket::TicketStatus;
    use chrono::{NaiveDate, Utc};

    fn order(id: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            customer: "Customer".to_string(),
            seller: "Seller".to_string(),
            amount: 100.0,
            status,
            payment_status: PaymentStatus::Paid,
            date: NaiveDate::from_ymd_opt(2024, 11, 15).unwrap(),
        }
    }

    #[test]
    fn test_pending_order_advances_to_processing() {
        let mut store = RecordStore::seed(vec![
            order("A", OrderStatus::Pending),
            order("B", OrderStatus::Shipped),
            order("C", OrderStatus::Delivered),
        ])
        .unwrap();

        let updated = apply_transition(&mut store, "A").unwrap();
        assert_eq!(updated.status, OrderStatus::Processing);
    }

    #[test]
    fn test_delivered_order_is_terminal() {
        let mut store = RecordStore::seed(vec![order("C", OrderStatus::Delivered)]).unwrap();
        let err = apply_transition(&mut store, "C").unwrap_err();
        assert_eq!(
            err,
            TransitionError::NoTransitionAvailable {
                id: "C".to_string(),
                status: "delivered",
            }
        );
        // Запись не изменилась
        assert_eq!(store.get("C").unwrap().status, OrderStatus::Delivered);
    }

    #[test]
    fn test_missing_record_is_store_error() {
        let mut store = RecordStore::seed(demo_orders()).unwrap();
        let err = apply_transition(&mut store, "ORD999").unwrap_err();
        assert_eq!(
            err,
            TransitionError::Store(StoreError::NotFound("ORD999".to_string()))
        );
    }

    #[test]
    fn test_set_status_bypasses_flow_and_touches() {
        let mut store = RecordStore::seed(demo_tickets()).unwrap();
        let before = Utc::now().date_naive();
        // Закрытый набор не мешает "обратному" переводу
        let updated = set_status(&mut store, "TKT003", TicketStatus::Open).unwrap();
        assert_eq!(updated.status, TicketStatus::Open);
        assert!(updated.last_update >= before);
    }
}
