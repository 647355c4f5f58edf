//! Watch mode: run check cycles on a cron schedule using tokio-cron-scheduler.
//!
//! ```text
//! Scheduler (TICKET_WATCH_SCHEDULE)
//!     │
//!     └─► fresh TicketChecker (new HTTP client, empty cookie jar)
//!             └─► run_once()
//! ```
//!
//! Nothing is carried between firings.

use anyhow::Result;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::checker::TicketChecker;
use crate::config::Config;

/// Start the ticket check job
pub async fn start_scheduler(config: Arc<Config>, dry_run: bool) -> Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;

    let job_config = config.clone();
    let check_job = Job::new_async(config.schedule.as_str(), move |_uuid, _lock| {
        let config = job_config.clone();
        Box::pin(async move {
            if let Err(e) = run_scheduled_check(&config, dry_run).await {
                tracing::error!("Scheduled ticket check failed: {}", e);
            }
        })
    })?;

    scheduler.add(check_job).await?;
    scheduler.start().await?;

    tracing::info!(
        schedule = %config.schedule,
        events = config.events.len(),
        "Scheduled ticket checks started"
    );
    Ok(scheduler)
}

async fn run_scheduled_check(config: &Config, dry_run: bool) -> Result<()> {
    tracing::info!("Running scheduled ticket check");

    let checker = TicketChecker::from_config(config)?.with_dry_run(dry_run);
    let report = checker.run_once().await;

    tracing::info!(delivery = ?report.delivery, "Scheduled ticket check complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_schedule_is_rejected() {
        let config = Arc::new(Config {
            schedule: "every fifteen minutes".to_string(),
            ..Config::default()
        });

        assert!(start_scheduler(config, true).await.is_err());
    }
}
