//! Сводные показатели: счётчики и суммы по текущему снимку хранилища.
//!
//! Никакого кеширования — наборы маленькие, показатели пересчитываются
//! на каждое изменение.

use contracts::shared::CommandError;
use thiserror::Error;

/// Ошибки вычисления показателей
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("average over an empty selection")]
    EmptySelection,
}

impl From<StatsError> for CommandError {
    fn from(err: StatsError) -> Self {
        CommandError::validation(err.to_string())
    }
}

/// Число записей, удовлетворяющих предикату
pub fn count<T>(records: &[T], predicate: impl Fn(&T) -> bool) -> usize {
    records.iter().filter(|record| predicate(record)).count()
}

/// Сумма числового поля по всем записям
pub fn sum<T>(records: &[T], field: impl Fn(&T) -> f64) -> f64 {
    records.iter().map(field).sum()
}

/// Сумма числового поля по записям, удовлетворяющим предикату
pub fn sum_where<T>(
    records: &[T],
    predicate: impl Fn(&T) -> bool,
    field: impl Fn(&T) -> f64,
) -> f64 {
    records
        .iter()
        .filter(|record| predicate(record))
        .map(field)
        .sum()
}

/// Среднее числового поля; пустой набор — явная ошибка, а не NaN
pub fn average<T>(records: &[T], field: impl Fn(&T) -> f64) -> Result<f64, StatsError> {
    if records.is_empty() {
        return Err(StatsError::EmptySelection);
    }
    Ok(sum(records, field) / records.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_invoice::fixtures::demo_invoices;
    use contracts::domain::a002_invoice::{Invoice, InvoiceStatus};

    #[test]
    fn test_invoice_sums_by_status() {
        let invoices = demo_invoices();
        let by_status = |status: InvoiceStatus| {
            sum_where(&invoices, |i: &Invoice| i.status == status, |i| i.total)
        };
        assert_eq!(by_status(InvoiceStatus::Paid), 14300.0);
        assert_eq!(by_status(InvoiceStatus::Pending), 3850.0);
        assert_eq!(by_status(InvoiceStatus::Overdue), 2200.0);
    }

    #[test]
    fn test_count_partitions_by_disjoint_predicates() {
        let invoices = demo_invoices();
        let paid = count(&invoices, |i| i.status == InvoiceStatus::Paid);
        let not_paid = count(&invoices, |i| i.status != InvoiceStatus::Paid);
        assert_eq!(paid + not_paid, invoices.len());
    }

    #[test]
    fn test_average() {
        let invoices = demo_invoices();
        let avg = average(&invoices, |i| i.total).unwrap();
        assert_eq!(avg, (5500.0 + 8800.0 + 3850.0 + 2200.0) / 4.0);
    }

    #[test]
    fn test_average_of_empty_selection_fails() {
        let empty: Vec<Invoice> = Vec::new();
        assert_eq!(
            average(&empty, |i| i.total).unwrap_err(),
            StatsError::EmptySelection
        );
    }
}
