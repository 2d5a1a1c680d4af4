use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Record, Searchable, StatusRecord};

/// Статус счёта продавца
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    pub fn code(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Overdue => "Overdue",
            InvoiceStatus::Cancelled => "Cancelled",
        }
    }

    pub fn all() -> Vec<InvoiceStatus> {
        vec![
            InvoiceStatus::Paid,
            InvoiceStatus::Pending,
            InvoiceStatus::Overdue,
            InvoiceStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

/// Счёт продавца (страница "Payments & Invoices" финансовой роли).
///
/// Линейной цепочки статусов у счетов нет: консоль их не переводит,
/// а лишь рассылает напоминания и формирует PDF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub seller: String,
    pub amount: f64,
    pub tax: f64,
    pub total: f64,
    pub status: InvoiceStatus,
    pub due_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<NaiveDate>,
}

impl Invoice {
    /// Напоминание уместно только для неоплаченных счетов
    pub fn awaits_payment(&self) -> bool {
        matches!(self.status, InvoiceStatus::Pending | InvoiceStatus::Overdue)
    }
}

impl Record for Invoice {
    fn id(&self) -> &str {
        &self.id
    }
}

impl StatusRecord for Invoice {
    type Status = InvoiceStatus;

    fn status(&self) -> InvoiceStatus {
        self.status
    }

    fn set_status(&mut self, status: InvoiceStatus) {
        self.status = status;
    }

    fn status_code(&self) -> &'static str {
        self.status.code()
    }
}

impl Searchable for Invoice {
    fn search_fields(&self) -> Vec<String> {
        vec![self.id.clone(), self.seller.clone()]
    }
}
