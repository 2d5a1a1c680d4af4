use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Record, Searchable, StatusFlow, StatusRecord};

/// Статус точки маршрута
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopStatus {
    Pending,
    Completed,
}

impl StopStatus {
    pub fn code(&self) -> &'static str {
        match self {
            StopStatus::Pending => "pending",
            StopStatus::Completed => "completed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StopStatus::Pending => "Pending",
            StopStatus::Completed => "Completed",
        }
    }

    pub fn all() -> Vec<StopStatus> {
        vec![StopStatus::Pending, StopStatus::Completed]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

impl StatusFlow for StopStatus {
    fn next(self) -> Option<Self> {
        match self {
            StopStatus::Pending => Some(StopStatus::Completed),
            StopStatus::Completed => None,
        }
    }
}

/// Точка оптимизированного маршрута (страница "Route View")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStop {
    pub id: String,
    pub order_number: String,
    pub customer_name: String,
    pub address: String,
    pub status: StopStatus,
    pub estimated_time: NaiveTime,
    /// Порядковый номер точки в маршруте, начиная с 1
    pub sequence: u32,
}

impl Record for RouteStop {
    fn id(&self) -> &str {
        &self.id
    }
}

impl StatusRecord for RouteStop {
    type Status = StopStatus;

    fn status(&self) -> StopStatus {
        self.status
    }

    fn set_status(&mut self, status: StopStatus) {
        self.status = status;
    }

    fn status_code(&self) -> &'static str {
        self.status.code()
    }
}

impl Searchable for RouteStop {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.order_number.clone(),
            self.customer_name.clone(),
            self.address.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_flow_is_two_step() {
        assert_eq!(StopStatus::Pending.next(), Some(StopStatus::Completed));
        assert!(StopStatus::Completed.is_terminal());
        assert_eq!(
            StopStatus::Pending.chain(),
            vec![StopStatus::Pending, StopStatus::Completed]
        );
    }
}
