pub mod aggregate;
pub mod fixtures;

pub use aggregate::{DeliveryOrder, DeliveryStatus};
