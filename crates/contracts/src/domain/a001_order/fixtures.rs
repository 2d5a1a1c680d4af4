//! Демонстрационные заказы страницы "Orders & Payments"

use chrono::NaiveDate;

use super::aggregate::{Order, OrderStatus, PaymentStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

pub fn demo_orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD001".to_string(),
            customer: "John Doe".to_string(),
            seller: "Tech Store".to_string(),
            amount: 299.99,
            status: OrderStatus::Delivered,
            payment_status: PaymentStatus::Paid,
            date: date(2024, 11, 10),
        },
        Order {
            id: "ORD002".to_string(),
            customer: "Jane Smith".to_string(),
            seller: "Fashion Hub".to_string(),
            amount: 159.99,
            status: OrderStatus::Shipped,
            payment_status: PaymentStatus::Paid,
            date: date(2024, 11, 13),
        },
        Order {
            id: "ORD003".to_string(),
            customer: "Bob Johnson".to_string(),
            seller: "Home Goods".to_string(),
            amount: 449.99,
            status: OrderStatus::Processing,
            payment_status: PaymentStatus::Paid,
            date: date(2024, 11, 15),
        },
    ]
}
