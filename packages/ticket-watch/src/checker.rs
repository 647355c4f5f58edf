//! One check cycle: fetch, classify, decide, notify.
//!
//! ```text
//! for each event (sequential)
//!     fetch ──► classify_page ──► Status      (any error ──► Unclear, logged)
//!                                    │
//!                              EventStatusMap
//!                                    │
//!                   send_reason(available, unclear, hour)
//!                                    │
//!                      build_notification ──► notifier (at most once)
//! ```

use anyhow::Result;
use chrono::{Local, Timelike};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::classifier::classify_page;
use crate::config::{Config, EventSource};
use crate::error::CheckResult;
use crate::formatter::{build_notification, Notification};
use crate::kernel::{BaseNotifier, BasePageFetcher, HttpPageFetcher, NtfyNotifier};
use crate::policy::{send_reason, SendReason};
use crate::status::{EventStatusMap, Status};

/// What happened to the notification of a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Policy said not to send
    Skipped,
    Sent,
    /// Policy said to send but dry-run was on
    DryRun,
    /// The notifier returned an error; not retried
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct CycleReport {
    pub statuses: EventStatusMap,
    pub hour: u32,
    pub reason: Option<SendReason>,
    pub notification: Option<Notification>,
    pub delivery: Delivery,
}

pub struct TicketChecker {
    events: Vec<EventSource>,
    daily_hour: u32,
    fetcher: Arc<dyn BasePageFetcher>,
    notifier: Arc<dyn BaseNotifier>,
    dry_run: bool,
}

impl TicketChecker {
    pub fn new(
        events: Vec<EventSource>,
        daily_hour: u32,
        fetcher: Arc<dyn BasePageFetcher>,
        notifier: Arc<dyn BaseNotifier>,
    ) -> Self {
        Self {
            events,
            daily_hour,
            fetcher,
            notifier,
            dry_run: false,
        }
    }

    /// Wire the HTTP fetcher and ntfy notifier from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            config.events.clone(),
            config.daily_hour,
            Arc::new(HttpPageFetcher::new()?),
            Arc::new(NtfyNotifier::from_config(config)),
        ))
    }

    /// Build and log the notification but never deliver it.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    async fn check_event(&self, event: &EventSource) -> CheckResult<Status> {
        let html = self.fetcher.fetch(&event.url).await?;
        classify_page(&event.url, &html)
    }

    /// Classify every configured event. Failures degrade to `Unclear`.
    pub async fn check_events(&self) -> EventStatusMap {
        let mut statuses = EventStatusMap::new();

        for event in &self.events {
            let status = match self.check_event(event).await {
                Ok(status) => status,
                Err(e) => {
                    error!(event = %event.name, url = %event.url, error = %e, "Event check failed");
                    Status::Unclear
                }
            };

            debug!(event = %event.name, status = %status, "Event checked");
            statuses.insert(event.name.clone(), status);
        }

        statuses
    }

    /// Run one cycle as if the wall clock read `current_hour`.
    pub async fn run_cycle(&self, current_hour: u32) -> CycleReport {
        let statuses = self.check_events().await;

        let any_available = statuses.any_available();
        let any_unclear = statuses.any_unclear();
        info!(
            run_hour = current_hour,
            any_available, any_unclear, "Checked {} events",
            statuses.len()
        );

        let reason = send_reason(any_available, any_unclear, current_hour, self.daily_hour);
        let Some(reason) = reason else {
            info!("Nothing to report, not sending");
            return CycleReport {
                statuses,
                hour: current_hour,
                reason: None,
                notification: None,
                delivery: Delivery::Skipped,
            };
        };

        let notification = build_notification(&statuses);
        let delivery = if self.dry_run {
            info!(
                reason = %reason,
                title = %notification.title,
                priority = %notification.priority,
                tag = %notification.tag,
                "Dry run, not sending:\n{}",
                notification.message
            );
            Delivery::DryRun
        } else {
            match self.notifier.send(&notification).await {
                Ok(()) => {
                    info!(reason = %reason, "Notification sent");
                    Delivery::Sent
                }
                Err(e) => {
                    warn!(reason = %reason, error = %e, "Notification failed");
                    Delivery::Failed(e.to_string())
                }
            }
        };

        CycleReport {
            statuses,
            hour: current_hour,
            reason: Some(reason),
            notification: Some(notification),
            delivery,
        }
    }

    /// Run one cycle at the current local hour.
    pub async fn run_once(&self) -> CycleReport {
        self.run_cycle(Local::now().hour()).await
    }
}
