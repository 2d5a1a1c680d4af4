pub mod command_result;
pub mod notification;

pub use command_result::{CommandError, CommandResult};
pub use notification::{Notification, NotificationKind};
