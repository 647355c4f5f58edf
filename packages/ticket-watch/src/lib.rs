//! Watches HYROX event pages for ticket sales.
//!
//! Each cycle fetches every configured event page, classifies it by two
//! marker phrases and decides whether to push a single ntfy notification
//! for the whole cycle.

pub mod checker;
pub mod classifier;
pub mod config;
pub mod error;
pub mod formatter;
pub mod kernel;
pub mod policy;
pub mod status;

pub use checker::{CycleReport, Delivery, TicketChecker};
pub use classifier::{classify, classify_page};
pub use config::{Config, EventSource};
pub use error::{CheckError, CheckResult};
pub use formatter::{
    build_notification, format_message, format_priority, format_tag, format_title, Notification,
    NotificationPriority, NotificationTag,
};
pub use policy::{send_reason, should_send, SendReason};
pub use status::{EventStatusMap, Status};
