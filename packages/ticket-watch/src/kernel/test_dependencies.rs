// Test doubles for the kernel traits
//
// Injected into TicketChecker by unit and integration tests.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{BaseNotifier, BasePageFetcher};
use crate::error::{CheckError, CheckResult};
use crate::formatter::Notification;

// =============================================================================
// Mock Page Fetcher
// =============================================================================

#[derive(Debug, Clone)]
enum MockPage {
    Html(String),
    Failure(String),
}

#[derive(Default)]
pub struct MockPageFetcher {
    pages: Arc<Mutex<HashMap<String, MockPage>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockPageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for `url`
    pub fn with_page(self, url: &str, html: &str) -> Self {
        self.pages
            .lock()
            .unwrap()
            .insert(url.to_string(), MockPage::Html(html.to_string()));
        self
    }

    /// Fail every fetch of `url` with a transport error
    pub fn with_failure(self, url: &str, reason: &str) -> Self {
        self.pages
            .lock()
            .unwrap()
            .insert(url.to_string(), MockPage::Failure(reason.to_string()));
        self
    }

    /// Get all URLs that were fetched, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn was_fetched(&self, url: &str) -> bool {
        self.calls.lock().unwrap().iter().any(|u| u == url)
    }
}

#[async_trait]
impl BasePageFetcher for MockPageFetcher {
    async fn fetch(&self, url: &str) -> CheckResult<String> {
        self.calls.lock().unwrap().push(url.to_string());

        match self.pages.lock().unwrap().get(url).cloned() {
            Some(MockPage::Html(html)) => Ok(html),
            Some(MockPage::Failure(reason)) => Err(CheckError::fetch(url, reason)),
            None => Err(CheckError::HttpStatus {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

// =============================================================================
// Mock Notifier
// =============================================================================

#[derive(Default)]
pub struct MockNotifier {
    sent: Arc<Mutex<Vec<Notification>>>,
    attempts: Arc<Mutex<usize>>,
    fail: bool,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every send attempt fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Notifications delivered successfully
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }

    /// Send attempts, including failed ones
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl BaseNotifier for MockNotifier {
    async fn send(&self, notification: &Notification) -> Result<()> {
        *self.attempts.lock().unwrap() += 1;

        if self.fail {
            anyhow::bail!("mock notifier configured to fail");
        }

        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }
}
