//! Демонстрационные счета страницы "Payments & Invoices"

use chrono::NaiveDate;

use super::aggregate::{Invoice, InvoiceStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

pub fn demo_invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: "INV001".to_string(),
            seller: "Tech Store".to_string(),
            amount: 5000.00,
            tax: 500.00,
            total: 5500.00,
            status: InvoiceStatus::Paid,
            due_date: date(2024, 11, 10),
            paid_date: Some(date(2024, 11, 8)),
        },
        Invoice {
            id: "INV002".to_string(),
            seller: "Fashion Hub".to_string(),
            amount: 8000.00,
            tax: 800.00,
            total: 8800.00,
            status: InvoiceStatus::Paid,
            due_date: date(2024, 11, 15),
            paid_date: Some(date(2024, 11, 14)),
        },
        Invoice {
            id: "INV003".to_string(),
            seller: "Home Goods".to_string(),
            amount: 3500.00,
            tax: 350.00,
            total: 3850.00,
            status: InvoiceStatus::Pending,
            due_date: date(2024, 11, 20),
            paid_date: None,
        },
        Invoice {
            id: "INV004".to_string(),
            seller: "Sports Store".to_string(),
            amount: 2000.00,
            tax: 200.00,
            total: 2200.00,
            status: InvoiceStatus::Overdue,
            due_date: date(2024, 11, 5),
            paid_date: None,
        },
    ]
}
