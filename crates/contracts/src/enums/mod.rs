pub mod console_role;

pub use console_role::ConsoleRole;
