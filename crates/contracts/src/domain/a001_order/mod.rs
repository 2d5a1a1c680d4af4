pub mod aggregate;
pub mod fixtures;

pub use aggregate::{Order, OrderStatus, PaymentStatus};
