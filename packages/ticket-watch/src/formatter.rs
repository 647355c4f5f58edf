//! Notification text derived from a cycle's statuses.

use std::fmt;

use crate::status::EventStatusMap;

const TITLE_AVAILABLE: &str = "HYROX: Events available!";
const TITLE_NONE_AVAILABLE: &str = "HYROX: No events available!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPriority {
    Urgent,
    Low,
}

impl NotificationPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationPriority::Urgent => "urgent",
            NotificationPriority::Low => "low",
        }
    }
}

impl fmt::Display for NotificationPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<NotificationPriority> for ntfy_client::Priority {
    fn from(priority: NotificationPriority) -> Self {
        match priority {
            NotificationPriority::Urgent => ntfy_client::Priority::Urgent,
            NotificationPriority::Low => ntfy_client::Priority::Low,
        }
    }
}

/// Emoji shortcode shown next to the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationTag {
    RotatingLight,
    InformationSource,
}

impl NotificationTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationTag::RotatingLight => "rotating_light",
            NotificationTag::InformationSource => "information_source",
        }
    }
}

impl fmt::Display for NotificationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything handed to the notifier for one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub title: String,
    pub priority: NotificationPriority,
    pub tag: NotificationTag,
}

/// One `<event>: <STATUS>` line per event, in map order.
pub fn format_message(statuses: &EventStatusMap) -> String {
    statuses
        .iter()
        .map(|(event, status)| format!("{}: {}", event, status.name()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_title(statuses: &EventStatusMap) -> String {
    if statuses.any_available() {
        TITLE_AVAILABLE.to_string()
    } else {
        TITLE_NONE_AVAILABLE.to_string()
    }
}

pub fn format_priority(statuses: &EventStatusMap) -> NotificationPriority {
    if statuses.any_available() {
        NotificationPriority::Urgent
    } else {
        NotificationPriority::Low
    }
}

pub fn format_tag(statuses: &EventStatusMap) -> NotificationTag {
    if statuses.any_available() {
        NotificationTag::RotatingLight
    } else {
        NotificationTag::InformationSource
    }
}

pub fn build_notification(statuses: &EventStatusMap) -> Notification {
    Notification {
        message: format_message(statuses),
        title: format_title(statuses),
        priority: format_priority(statuses),
        tag: format_tag(statuses),
    }
}
