pub mod aggregate;
pub mod fixtures;

pub use aggregate::{Earning, PayoutStatus};
