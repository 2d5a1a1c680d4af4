//! Страница "Earnings" (роль delivery)

use contracts::domain::a007_earning::fixtures::demo_earnings;
use contracts::domain::a007_earning::{Earning, PayoutStatus};
use serde::Serialize;

use crate::session::ListSession;
use crate::stats::{average, sum, sum_where, StatsError};

/// Сводные карточки заработков
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarningsSummary {
    pub total_earnings: f64,
    pub pending_earnings: f64,
    pub paid_earnings: f64,
    pub total_orders: u32,
}

/// Блок "Earnings Summary": разбивка по составляющим
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarningsBreakdown {
    pub base_earnings: f64,
    pub tips: f64,
    pub bonuses: f64,
    pub total: f64,
}

/// Блок "Statistics"
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarningsStatistics {
    pub total_orders: u32,
    pub total_distance_km: f64,
    pub working_days: usize,
}

pub struct EarningsPage {
    pub session: ListSession<Earning>,
    /// Фильтр периода ("today" | "week" | "month" | "year")
    pub period_filter: String,
}

impl EarningsPage {
    pub fn new() -> Self {
        Self::with_earnings(demo_earnings())
    }

    pub fn with_earnings(earnings: Vec<Earning>) -> Self {
        Self {
            session: ListSession::seed(earnings).expect("earning fixtures have unique ids"),
            period_filter: "week".to_string(),
        }
    }

    pub fn set_period_filter(&mut self, period: impl Into<String>) {
        self.period_filter = period.into();
    }

    pub fn export(&mut self) {
        self.session
            .notifications
            .success("Earnings report exported");
    }

    pub fn request_payout(&mut self) {
        self.session
            .notifications
            .success("Payout request submitted");
    }

    pub fn summary(&self) -> EarningsSummary {
        let earnings = self.session.all();
        let total_by = |status: PayoutStatus| {
            sum_where(earnings, |e: &Earning| e.status == status, |e| e.total)
        };
        EarningsSummary {
            total_earnings: sum(earnings, |e| e.total),
            pending_earnings: total_by(PayoutStatus::Pending),
            paid_earnings: total_by(PayoutStatus::Paid),
            total_orders: earnings.iter().map(|e| e.orders).sum(),
        }
    }

    /// Средний заработок на доставку; ошибка при нуле доставок
    pub fn avg_per_delivery(&self) -> Result<f64, StatsError> {
        let summary = self.summary();
        if summary.total_orders == 0 {
            return Err(StatsError::EmptySelection);
        }
        Ok(summary.total_earnings / f64::from(summary.total_orders))
    }

    /// Средние чаевые за смену; ошибка при пустом списке смен
    pub fn avg_tip(&self) -> Result<f64, StatsError> {
        average(self.session.all(), |e| e.tips)
    }

    pub fn breakdown(&self) -> EarningsBreakdown {
        let earnings = self.session.all();
        EarningsBreakdown {
            base_earnings: sum(earnings, |e| e.base_earnings),
            tips: sum(earnings, |e| e.tips),
            bonuses: sum(earnings, |e| e.bonus),
            total: sum(earnings, |e| e.total),
        }
    }

    pub fn statistics(&self) -> EarningsStatistics {
        let earnings = self.session.all();
        EarningsStatistics {
            total_orders: earnings.iter().map(|e| e.orders).sum(),
            total_distance_km: sum(earnings, |e| e.distance_km),
            working_days: earnings.len(),
        }
    }
}

impl Default for EarningsPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_summary() {
        let summary = EarningsPage::new().summary();
        assert!((summary.total_earnings - 641.0).abs() < 1e-9);
        assert!((summary.pending_earnings - 155.50).abs() < 1e-9);
        assert!((summary.paid_earnings - 485.50).abs() < 1e-9);
        assert_eq!(summary.total_orders, 50);
    }

    #[test]
    fn test_avg_per_delivery() {
        let page = EarningsPage::new();
        let avg = page.avg_per_delivery().unwrap();
        assert!((avg - 641.0 / 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_avg_per_delivery_without_orders_fails() {
        let page = EarningsPage::with_earnings(Vec::new());
        assert_eq!(page.avg_per_delivery().unwrap_err(), StatsError::EmptySelection);
        assert_eq!(page.avg_tip().unwrap_err(), StatsError::EmptySelection);
    }

    #[test]
    fn test_breakdown_components_add_up() {
        let breakdown = EarningsPage::new().breakdown();
        let parts = breakdown.base_earnings + breakdown.tips + breakdown.bonuses;
        assert!((breakdown.total - parts).abs() < 1e-9);
    }

    #[test]
    fn test_statistics() {
        let stats = EarningsPage::new().statistics();
        assert_eq!(stats.working_days, 4);
        assert!((stats.total_distance_km - 184.8).abs() < 1e-9);
    }
}
