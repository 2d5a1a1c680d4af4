//! Демонстрационный маршрут страницы "Route View"

use chrono::NaiveTime;

use super::aggregate::{RouteStop, StopStatus};

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid fixture time")
}

pub fn demo_route_stops() -> Vec<RouteStop> {
    vec![
        RouteStop {
            id: "1".to_string(),
            order_number: "DEL001".to_string(),
            customer_name: "John Doe".to_string(),
            address: "123 Main St, Downtown".to_string(),
            status: StopStatus::Completed,
            estimated_time: time(10, 0),
            sequence: 1,
        },
        RouteStop {
            id: "2".to_string(),
            order_number: "DEL002".to_string(),
            customer_name: "Jane Smith".to_string(),
            address: "456 Oak Ave, Uptown".to_string(),
            status: StopStatus::Pending,
            estimated_time: time(10, 30),
            sequence: 2,
        },
        RouteStop {
            id: "3".to_string(),
            order_number: "DEL003".to_string(),
            customer_name: "Bob Johnson".to_string(),
            address: "789 Pine Rd, Midtown".to_string(),
            status: StopStatus::Pending,
            estimated_time: time(11, 0),
            sequence: 3,
        },
    ]
}
