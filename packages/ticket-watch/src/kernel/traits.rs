// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no classification or policy.
//
// Naming convention: Base* for trait names (e.g., BasePageFetcher, BaseNotifier)

use anyhow::Result;
use async_trait::async_trait;

use crate::error::CheckResult;
use crate::formatter::Notification;

// =============================================================================
// Page Fetcher Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BasePageFetcher: Send + Sync {
    /// Fetch the raw markup of a page
    async fn fetch(&self, url: &str) -> CheckResult<String>;
}

// =============================================================================
// Notifier Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseNotifier: Send + Sync {
    /// Deliver one notification. Single attempt.
    async fn send(&self, notification: &Notification) -> Result<()>;
}
