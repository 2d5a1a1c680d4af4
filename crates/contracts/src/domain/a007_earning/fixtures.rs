//! Демонстрационные заработки страницы "Earnings"

use chrono::NaiveDate;

use super::aggregate::{Earning, PayoutStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

pub fn demo_earnings() -> Vec<Earning> {
    vec![
        Earning {
            id: "E001".to_string(),
            date: date(2024, 11, 15),
            orders: 12,
            distance_km: 45.2,
            base_earnings: 120.00,
            tips: 25.50,
            bonus: 10.00,
            total: 155.50,
            status: PayoutStatus::Pending,
        },
        Earning {
            id: "E002".to_string(),
            date: date(2024, 11, 14),
            orders: 15,
            distance_km: 52.8,
            base_earnings: 150.00,
            tips: 32.00,
            bonus: 15.00,
            total: 197.00,
            status: PayoutStatus::Paid,
        },
        Earning {
            id: "E003".to_string(),
            date: date(2024, 11, 13),
            orders: 10,
            distance_km: 38.5,
            base_earnings: 100.00,
            tips: 18.50,
            bonus: 0.0,
            total: 118.50,
            status: PayoutStatus::Paid,
        },
        Earning {
            id: "E004".to_string(),
            date: date(2024, 11, 12),
            orders: 13,
            distance_km: 48.3,
            base_earnings: 130.00,
            tips: 28.00,
            bonus: 12.00,
            total: 170.00,
            status: PayoutStatus::Paid,
        },
    ]
}
