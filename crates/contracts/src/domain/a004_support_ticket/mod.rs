pub mod aggregate;
pub mod fixtures;

pub use aggregate::{Ticket, TicketCategory, TicketPriority, TicketStatus};
