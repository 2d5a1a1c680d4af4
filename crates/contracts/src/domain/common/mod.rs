//! Common types and traits for all record domains

pub mod record;
pub mod searchable;
pub mod status_flow;

// Re-exports
pub use record::{Record, StatusRecord};
pub use searchable::Searchable;
pub use status_flow::StatusFlow;
