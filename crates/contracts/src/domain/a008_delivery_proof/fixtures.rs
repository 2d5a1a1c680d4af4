//! Демонстрационные подтверждения страницы "Delivery Proof"

use chrono::{NaiveDate, NaiveTime};

use super::aggregate::DeliveryProof;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid fixture time")
}

pub fn demo_proofs() -> Vec<DeliveryProof> {
    vec![
        DeliveryProof {
            id: "DP001".to_string(),
            order_number: "DEL001".to_string(),
            customer_name: "John Doe".to_string(),
            address: "123 Main St, Downtown".to_string(),
            delivered_date: date(2024, 11, 15),
            delivered_time: time(10, 30),
            signature: true,
            photo: true,
            notes: "Package left at front door as requested".to_string(),
        },
        DeliveryProof {
            id: "DP002".to_string(),
            order_number: "DEL002".to_string(),
            customer_name: "Jane Smith".to_string(),
            address: "456 Oak Ave, Uptown".to_string(),
            delivered_date: date(2024, 11, 15),
            delivered_time: time(11, 15),
            signature: true,
            photo: true,
            notes: "Delivered to recipient in person".to_string(),
        },
        DeliveryProof {
            id: "DP003".to_string(),
            order_number: "DEL003".to_string(),
            customer_name: "Bob Johnson".to_string(),
            address: "789 Pine Rd, Midtown".to_string(),
            delivered_date: date(2024, 11, 14),
            delivered_time: time(14, 45),
            signature: false,
            photo: true,
            notes: "Left with building security".to_string(),
        },
    ]
}
