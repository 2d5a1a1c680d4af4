//! Состояние административной консоли: in-memory хранилище записей,
//! фильтрация, переводы статусов, сводные показатели и уведомления.
//!
//! Рендеринг и роутинг живут в отдельном UI-слое; этот crate отдаёт
//! ему готовые срезы (`visible`), сводки страниц и текущее
//! уведомление.

pub mod filter;
pub mod flow;
pub mod notify;
pub mod pages;
pub mod session;
pub mod stats;
pub mod store;

pub use filter::{filter_records, search_records, STATUS_FILTER_ALL};
pub use flow::{apply_transition, set_status, TransitionError};
pub use notify::NotificationHub;
pub use session::ListSession;
pub use stats::{average, count, sum, sum_where, StatsError};
pub use store::{RecordStore, StoreError};
