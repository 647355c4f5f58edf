//! When a cycle sends a notification.
//!
//! A cycle sends when any event is available, when any event is unclear, or
//! at the daily heartbeat hour.

use std::fmt;

/// Why a cycle decided to send. Checked in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendReason {
    Available,
    Unclear,
    Heartbeat,
}

impl fmt::Display for SendReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SendReason::Available => "available",
            SendReason::Unclear => "unclear",
            SendReason::Heartbeat => "heartbeat",
        })
    }
}

pub fn send_reason(
    any_available: bool,
    any_unclear: bool,
    current_hour: u32,
    daily_hour: u32,
) -> Option<SendReason> {
    if any_available {
        Some(SendReason::Available)
    } else if any_unclear {
        Some(SendReason::Unclear)
    } else if current_hour == daily_hour {
        Some(SendReason::Heartbeat)
    } else {
        None
    }
}

pub fn should_send(any_available: bool, any_unclear: bool, current_hour: u32, daily_hour: u32) -> bool {
    send_reason(any_available, any_unclear, current_hour, daily_hour).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAILY_HOUR: u32 = 12;

    #[test]
    fn test_heartbeat_hour_always_sends() {
        for (available, unclear) in [(false, false), (true, false), (false, true), (true, true)] {
            assert!(should_send(available, unclear, DAILY_HOUR, DAILY_HOUR));
        }
        assert_eq!(
            send_reason(false, false, DAILY_HOUR, DAILY_HOUR),
            Some(SendReason::Heartbeat)
        );
    }

    #[test]
    fn test_available_sends_outside_heartbeat_hour() {
        for hour in (0..24).filter(|h| *h != DAILY_HOUR) {
            assert!(should_send(true, false, hour, DAILY_HOUR));
        }
        assert_eq!(send_reason(true, true, 3, DAILY_HOUR), Some(SendReason::Available));
    }

    // Unclear alone forces a send. An earlier revision of the watcher only
    // sent on availability.
    #[test]
    fn test_unclear_alone_sends() {
        assert!(should_send(false, true, 3, DAILY_HOUR));
        assert_eq!(send_reason(false, true, 3, DAILY_HOUR), Some(SendReason::Unclear));
    }

    #[test]
    fn test_all_not_available_outside_heartbeat_is_silent() {
        for hour in (0..24).filter(|h| *h != DAILY_HOUR) {
            assert!(!should_send(false, false, hour, DAILY_HOUR));
        }
    }

    #[test]
    fn test_midnight_heartbeat() {
        assert!(should_send(false, false, 0, 0));
        assert!(!should_send(false, false, 23, 0));
    }
}
