//! Страницы консоли: фикстуры + команды + сводные карточки.
//!
//! Каждый модуль соответствует одной странице исходной консоли и
//! одной роли из `contracts::enums::ConsoleRole`.

pub mod delivery_orders;
pub mod earnings;
pub mod invoices;
pub mod kyc;
pub mod orders;
pub mod proofs;
pub mod route;
pub mod tickets;

pub use delivery_orders::DeliveryOrdersPage;
pub use earnings::EarningsPage;
pub use invoices::InvoicesPage;
pub use kyc::KycPage;
pub use orders::OrdersPage;
pub use proofs::ProofsPage;
pub use route::RoutePage;
pub use tickets::TicketsPage;
