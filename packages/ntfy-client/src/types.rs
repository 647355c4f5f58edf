use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NtfyError;

/// Message priority as understood by ntfy.
///
/// Sent as the `Priority` header; ntfy accepts both names and the numbers 1-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Min,
    Low,
    #[default]
    Default,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Min => "min",
            Priority::Low => "low",
            Priority::Default => "default",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = NtfyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "min" => Ok(Priority::Min),
            "2" | "low" => Ok(Priority::Low),
            "3" | "default" => Ok(Priority::Default),
            "4" | "high" => Ok(Priority::High),
            "5" | "urgent" | "max" => Ok(Priority::Urgent),
            other => Err(NtfyError::Config(format!("unknown priority: {}", other))),
        }
    }
}

/// A message to publish to a topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub body: String,
    pub title: Option<String>,
    pub priority: Priority,
    pub tags: Vec<String>,
}

impl Message {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            title: None,
            priority: Priority::Default,
            tags: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Header name/value pairs carrying the message metadata.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = Vec::with_capacity(3);
        if let Some(title) = &self.title {
            headers.push(("Title", title.clone()));
        }
        headers.push(("Priority", self.priority.as_str().to_string()));
        if !self.tags.is_empty() {
            headers.push(("Tags", self.tags.join(",")));
        }
        headers
    }
}

/// Response returned by ntfy after a successful publish.
#[derive(Debug, Clone, Deserialize)]
pub struct PublishResponse {
    pub id: String,
    pub time: i64,
    pub topic: String,
    #[serde(default)]
    pub event: Option<String>,
}
