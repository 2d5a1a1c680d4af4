//! Демонстрационные тикеты страницы "Support Tickets"

use chrono::NaiveDate;

use super::aggregate::{Ticket, TicketCategory, TicketPriority, TicketStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

pub fn demo_tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            id: "TKT001".to_string(),
            customer: "John Doe".to_string(),
            email: "john@email.com".to_string(),
            subject: "Order not received".to_string(),
            category: TicketCategory::Delivery,
            priority: TicketPriority::High,
            status: TicketStatus::InProgress,
            created_date: date(2024, 11, 14),
            last_update: date(2024, 11, 15),
            assigned_to: Some("Carol White".to_string()),
        },
        Ticket {
            id: "TKT002".to_string(),
            customer: "Jane Smith".to_string(),
            email: "jane@email.com".to_string(),
            subject: "Product damaged".to_string(),
            category: TicketCategory::Product,
            priority: TicketPriority::Urgent,
            status: TicketStatus::Open,
            created_date: date(2024, 11, 15),
            last_update: date(2024, 11, 15),
            assigned_to: None,
        },
        Ticket {
            id: "TKT003".to_string(),
            customer: "Bob Johnson".to_string(),
            email: "bob@email.com".to_string(),
            subject: "Refund inquiry".to_string(),
            category: TicketCategory::Payment,
            priority: TicketPriority::Medium,
            status: TicketStatus::Resolved,
            created_date: date(2024, 11, 12),
            last_update: date(2024, 11, 14),
            assigned_to: Some("Carol White".to_string()),
        },
        Ticket {
            id: "TKT004".to_string(),
            customer: "Sarah Wilson".to_string(),
            email: "sarah@email.com".to_string(),
            subject: "Wrong item delivered".to_string(),
            category: TicketCategory::Order,
            priority: TicketPriority::High,
            status: TicketStatus::InProgress,
            created_date: date(2024, 11, 13),
            last_update: date(2024, 11, 15),
            assigned_to: Some("Carol White".to_string()),
        },
    ]
}
