use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{Record, Searchable, StatusRecord};

/// Статус тикета поддержки.
///
/// Назначается напрямую из выпадающего списка консоли, без таблицы
/// переходов: оператор может вернуть закрытый тикет в работу.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn code(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in_progress",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
        }
    }

    pub fn all() -> Vec<TicketStatus> {
        vec![
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::Resolved,
            TicketStatus::Closed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

/// Категория обращения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketCategory {
    Order,
    Product,
    Payment,
    Delivery,
    Other,
}

impl TicketCategory {
    pub fn code(&self) -> &'static str {
        match self {
            TicketCategory::Order => "order",
            TicketCategory::Product => "product",
            TicketCategory::Payment => "payment",
            TicketCategory::Delivery => "delivery",
            TicketCategory::Other => "other",
        }
    }
}

/// Приоритет обращения
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    pub fn code(&self) -> &'static str {
        match self {
            TicketPriority::Low => "low",
            TicketPriority::Medium => "medium",
            TicketPriority::High => "high",
            TicketPriority::Urgent => "urgent",
        }
    }
}

/// Тикет поддержки (страница "Support Tickets")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub customer: String,
    pub email: String,
    pub subject: String,
    pub category: TicketCategory,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub created_date: NaiveDate,
    pub last_update: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

impl Record for Ticket {
    fn id(&self) -> &str {
        &self.id
    }

    // Любая запись статуса сдвигает дату последнего обновления
    fn touch(&mut self) {
        self.last_update = Utc::now().date_naive();
    }
}

impl StatusRecord for Ticket {
    type Status = TicketStatus;

    fn status(&self) -> TicketStatus {
        self.status
    }

    fn set_status(&mut self, status: TicketStatus) {
        self.status = status;
    }

    fn status_code(&self) -> &'static str {
        self.status.code()
    }
}

impl Searchable for Ticket {
    fn search_fields(&self) -> Vec<String> {
        vec![self.id.clone(), self.customer.clone(), self.subject.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_moves_last_update() {
        let mut ticket = crate::domain::a004_support_ticket::fixtures::demo_tickets()
            .into_iter()
            .next()
            .unwrap();
        let before = Utc::now().date_naive();
        ticket.touch();
        assert!(ticket.last_update >= before);
    }

    #[test]
    fn test_priority_ordering() {
        assert!(TicketPriority::Urgent > TicketPriority::High);
        assert!(TicketPriority::Medium > TicketPriority::Low);
    }
}
