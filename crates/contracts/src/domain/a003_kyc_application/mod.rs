pub mod aggregate;
pub mod fixtures;

pub use aggregate::{DocumentSet, KycApplication, KycStatus};
