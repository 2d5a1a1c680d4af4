use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Record, Searchable, StatusRecord};

/// Статус выплаты за смену
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatus {
    Paid,
    Pending,
}

impl PayoutStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PayoutStatus::Paid => "paid",
            PayoutStatus::Pending => "pending",
        }
    }

    pub fn all() -> Vec<PayoutStatus> {
        vec![PayoutStatus::Paid, PayoutStatus::Pending]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

/// Дневной заработок курьера (страница "Earnings")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Earning {
    pub id: String,
    pub date: NaiveDate,
    pub orders: u32,
    pub distance_km: f64,
    pub base_earnings: f64,
    pub tips: f64,
    pub bonus: f64,
    pub total: f64,
    pub status: PayoutStatus,
}

impl Record for Earning {
    fn id(&self) -> &str {
        &self.id
    }
}

impl StatusRecord for Earning {
    type Status = PayoutStatus;

    fn status(&self) -> PayoutStatus {
        self.status
    }

    fn set_status(&mut self, status: PayoutStatus) {
        self.status = status;
    }

    fn status_code(&self) -> &'static str {
        self.status.code()
    }
}

impl Searchable for Earning {
    fn search_fields(&self) -> Vec<String> {
        vec![self.id.clone(), self.date.to_string()]
    }
}
