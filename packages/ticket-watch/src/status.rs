use std::fmt;

use indexmap::IndexMap;

/// Ticket-buying state of one event page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Available,
    Unclear,
    NotAvailable,
}

impl Status {
    /// Name used in notification bodies.
    pub fn name(&self) -> &'static str {
        match self {
            Status::Available => "AVAILABLE",
            Status::Unclear => "UNCLEAR",
            Status::NotAvailable => "NOT_AVAILABLE",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Event name -> status for one check cycle, in configured event order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventStatusMap {
    statuses: IndexMap<String, Status>,
}

impl EventStatusMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a status. A repeated name keeps its original position.
    pub fn insert(&mut self, event: impl Into<String>, status: Status) -> Option<Status> {
        self.statuses.insert(event.into(), status)
    }

    pub fn get(&self, event: &str) -> Option<Status> {
        self.statuses.get(event).copied()
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Status)> {
        self.statuses.iter().map(|(name, status)| (name.as_str(), *status))
    }

    pub fn any(&self, status: Status) -> bool {
        self.statuses.values().any(|s| *s == status)
    }

    pub fn any_available(&self) -> bool {
        self.any(Status::Available)
    }

    pub fn any_unclear(&self) -> bool {
        self.any(Status::Unclear)
    }
}

impl<S: Into<String>> FromIterator<(S, Status)> for EventStatusMap {
    fn from_iter<I: IntoIterator<Item = (S, Status)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (event, status) in iter {
            map.insert(event, status);
        }
        map
    }
}
