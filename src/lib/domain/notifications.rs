//! Identity lifecycle notifications

mod adapter;
mod errors;
mod template;

pub mod messages;
pub mod phrases;

pub use adapter::{IdentityCreatedHook, IdentityNotifications, NotificationAdapter};
pub use errors::{MessageError, NotificationError};
pub use template::{Action, NotificationTemplate, Paragraph};

