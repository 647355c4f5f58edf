use anyhow::{bail, Context, Result};
use cron::Schedule;
use dotenvy::dotenv;
use ntfy_client::NtfyClient;
use std::collections::HashSet;
use std::env;
use std::str::FromStr;

pub const DEFAULT_DAILY_HOUR: u32 = 12;
pub const DEFAULT_NTFY_TOPIC: &str = "hyrox-sale-is-live";
/// Hourly, so the heartbeat hour is hit exactly once a day. A sub-hourly
/// schedule sends one heartbeat per firing inside `daily_hour`.
pub const DEFAULT_SCHEDULE: &str = "0 0 * * * *";

const DEFAULT_EVENTS: [(&str, &str); 3] = [
    ("Anaheim", "https://hyrox.com/event/hyrox-anaheim/"),
    ("Chicago", "https://hyrox.com/event/hyrox-chicago/"),
    ("Dallas", "https://hyrox.com/event/hyrox-dallas/"),
];

/// One watched event page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSource {
    pub name: String,
    pub url: String,
}

impl EventSource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub events: Vec<EventSource>,
    pub daily_hour: u32,
    pub ntfy_base_url: String,
    pub ntfy_topic: String,
    pub ntfy_access_token: Option<String>,
    pub schedule: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            events: default_events(),
            daily_hour: DEFAULT_DAILY_HOUR,
            ntfy_base_url: ntfy_client::DEFAULT_BASE_URL.to_string(),
            ntfy_topic: DEFAULT_NTFY_TOPIC.to_string(),
            ntfy_access_token: None,
            schedule: DEFAULT_SCHEDULE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup; unset keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let events = match lookup("TICKET_WATCH_EVENTS") {
            Some(raw) => parse_events(&raw).context("TICKET_WATCH_EVENTS must be Name=URL pairs")?,
            None => default_events(),
        };

        let daily_hour = match lookup("TICKET_WATCH_DAILY_HOUR") {
            Some(raw) => {
                parse_daily_hour(&raw).context("TICKET_WATCH_DAILY_HOUR must be an hour 0-23")?
            }
            None => DEFAULT_DAILY_HOUR,
        };

        let ntfy_base_url = lookup("NTFY_BASE_URL")
            .unwrap_or_else(|| ntfy_client::DEFAULT_BASE_URL.to_string());
        let ntfy_topic = lookup("NTFY_TOPIC").unwrap_or_else(|| DEFAULT_NTFY_TOPIC.to_string());
        validate_ntfy_target(&ntfy_base_url, &ntfy_topic)?;

        let schedule = lookup("TICKET_WATCH_SCHEDULE")
            .unwrap_or_else(|| DEFAULT_SCHEDULE.to_string());
        parse_schedule(&schedule)
            .context("TICKET_WATCH_SCHEDULE must be a six-field cron expression")?;

        Ok(Self {
            events,
            daily_hour,
            ntfy_base_url,
            ntfy_topic,
            ntfy_access_token: lookup("NTFY_ACCESS_TOKEN").filter(|t| !t.is_empty()),
            schedule,
        })
    }
}

pub fn default_events() -> Vec<EventSource> {
    DEFAULT_EVENTS
        .iter()
        .map(|(name, url)| EventSource::new(*name, *url))
        .collect()
}

/// Parse `Name=URL,Name=URL`. Names must be unique.
pub fn parse_events(raw: &str) -> Result<Vec<EventSource>> {
    let mut events = Vec::new();
    let mut seen = HashSet::new();

    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (name, url) = entry
            .split_once('=')
            .with_context(|| format!("missing '=' in event entry: {}", entry))?;
        let (name, url) = (name.trim(), url.trim());

        if name.is_empty() || url.is_empty() {
            bail!("empty name or URL in event entry: {}", entry);
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            bail!("event URL must be http(s): {}", url);
        }
        if !seen.insert(name.to_string()) {
            bail!("duplicate event name: {}", name);
        }

        events.push(EventSource::new(name, url));
    }

    if events.is_empty() {
        bail!("no events configured");
    }

    Ok(events)
}

/// Parse a cron expression (seconds first) the way the watch scheduler does.
pub fn parse_schedule(raw: &str) -> Result<Schedule> {
    Schedule::from_str(raw.trim()).with_context(|| format!("invalid cron expression: {}", raw))
}

fn validate_ntfy_target(base_url: &str, topic: &str) -> Result<()> {
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        bail!("NTFY_BASE_URL must be an http(s) URL, got {:?}", base_url);
    }
    NtfyClient::new(base_url)
        .topic_url(topic)
        .context("NTFY_TOPIC must be a non-empty topic name without '/'")?;
    Ok(())
}

fn parse_daily_hour(raw: &str) -> Result<u32> {
    let hour: u32 = raw.trim().parse().context("not a number")?;
    if hour > 23 {
        bail!("hour out of range: {}", hour);
    }
    Ok(hour)
}
