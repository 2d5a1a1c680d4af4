//! Страница "Route View" (роль delivery)

use contracts::domain::a006_route_stop::fixtures::demo_route_stops;
use contracts::domain::a006_route_stop::{RouteStop, StopStatus};
use contracts::shared::CommandResult;
use serde::Serialize;

use crate::flow::apply_transition;
use crate::session::ListSession;
use crate::stats::count;

/// Сводные карточки маршрута
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub total_stops: usize,
    pub completed: usize,
    pub remaining: usize,
}

pub struct RoutePage {
    pub session: ListSession<RouteStop>,
}

impl RoutePage {
    pub fn new() -> Self {
        Self::with_stops(demo_route_stops())
    }

    /// Точки хранятся в порядке следования по маршруту
    pub fn with_stops(mut stops: Vec<RouteStop>) -> Self {
        stops.sort_by_key(|stop| stop.sequence);
        Self {
            session: ListSession::seed(stops).expect("route fixtures have unique ids"),
        }
    }

    /// Отметить точку пройденной (pending → completed)
    pub fn complete_stop(&mut self, id: &str) -> CommandResult<RouteStop> {
        match apply_transition(self.session.store_mut(), id) {
            Ok(stop) => {
                self.session
                    .notifications
                    .success(format!("Stop {} completed", stop.order_number));
                Ok(stop)
            }
            Err(err) => {
                self.session.notifications.error(err.to_string());
                Err(err.into())
            }
        }
    }

    pub fn optimize(&mut self) {
        self.session
            .notifications
            .success("Route optimized successfully");
    }

    pub fn navigate(&mut self, address: &str) {
        self.session
            .notifications
            .info(format!("Opening navigation to {}", address));
    }

    pub fn summary(&self) -> RouteSummary {
        let stops = self.session.all();
        RouteSummary {
            total_stops: stops.len(),
            completed: count(stops, |s| s.status == StopStatus::Completed),
            remaining: count(stops, |s| s.status == StopStatus::Pending),
        }
    }
}

impl Default for RoutePage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::NotificationKind;

    #[test]
    fn test_stops_ordered_by_sequence() {
        let mut stops = demo_route_stops();
        stops.reverse();
        let page = RoutePage::with_stops(stops);
        let sequences: Vec<u32> = page.session.all().iter().map(|s| s.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3]);
    }

    #[test]
    fn test_complete_stop() {
        let mut page = RoutePage::new();
        let stop = page.complete_stop("2").unwrap();
        assert_eq!(stop.status, StopStatus::Completed);

        let summary = page.summary();
        assert_eq!((summary.completed, summary.remaining), (2, 1));

        // Повторное завершение — терминал
        assert_eq!(page.complete_stop("2").unwrap_err().code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_navigate_is_info_notification() {
        let mut page = RoutePage::new();
        page.navigate("456 Oak Ave, Uptown");
        let notification = page.session.notifications.current().unwrap();
        assert_eq!(notification.kind, NotificationKind::Info);
        assert_eq!(
            notification.message,
            "Opening navigation to 456 Oak Ave, Uptown"
        );
    }
}
