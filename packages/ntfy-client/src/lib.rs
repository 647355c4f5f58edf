//! Pure ntfy REST API client.
//!
//! A minimal client for publishing push notifications to an ntfy server
//! (ntfy.sh or self-hosted). Metadata travels as headers, the body is the
//! plain-text message.
//!
//! # Example
//!
//! ```rust,ignore
//! use ntfy_client::{Message, NtfyClient, Priority};
//!
//! let client = NtfyClient::new("https://ntfy.sh");
//!
//! let message = Message::new("Anaheim: AVAILABLE")
//!     .with_title("HYROX: Events available!")
//!     .with_priority(Priority::Urgent)
//!     .with_tag("rotating_light");
//!
//! client.publish("hyrox-sale-is-live", &message).await?;
//! ```

pub mod error;
pub mod types;

pub use error::{NtfyError, Result};
pub use types::{Message, Priority, PublishResponse};

pub const DEFAULT_BASE_URL: &str = "https://ntfy.sh";

#[derive(Debug, Clone)]
pub struct NtfyClient {
    client: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
}

impl Default for NtfyClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl NtfyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: None,
        }
    }

    /// Authenticate with a bearer token (access-controlled topics).
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full publish URL for a topic.
    pub fn topic_url(&self, topic: &str) -> Result<String> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(NtfyError::Config("topic must not be empty".to_string()));
        }
        if topic.contains('/') {
            return Err(NtfyError::Config(format!(
                "topic must not contain '/': {}",
                topic
            )));
        }
        if self.base_url.is_empty() {
            return Err(NtfyError::Config("base URL must not be empty".to_string()));
        }
        Ok(format!("{}/{}", self.base_url, topic))
    }

    /// Publish a message to a topic. Single attempt, no retry.
    ///
    /// A 2xx answer means ntfy accepted the message. `None` is returned when
    /// that answer's body cannot be read as a publish response.
    pub async fn publish(&self, topic: &str, message: &Message) -> Result<Option<PublishResponse>> {
        let url = self.topic_url(topic)?;

        let mut request = self.client.post(&url).body(message.body.clone());
        for (name, value) in message.headers() {
            request = request.header(name, value);
        }
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        tracing::debug!(topic, priority = %message.priority, "Publishing ntfy message");

        let resp = request.send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(topic, status = status.as_u16(), "ntfy publish failed");
            return Err(NtfyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let published = match resp.text().await {
            Ok(body) => decode_publish_response(&body),
            Err(e) => {
                tracing::warn!(topic, error = %e, "Published ntfy message but could not read response body");
                None
            }
        };

        match &published {
            Some(published) => tracing::info!(topic, id = %published.id, "Published ntfy message"),
            None => tracing::info!(topic, "Published ntfy message"),
        }

        Ok(published)
    }
}

/// Decode the body of a successful publish. Undecodable bodies are logged and
/// yield `None`; the message itself was still accepted.
pub fn decode_publish_response(body: &str) -> Option<PublishResponse> {
    match serde_json::from_str::<PublishResponse>(body) {
        Ok(published) => Some(published),
        Err(e) => {
            tracing::warn!(error = %e, "Unexpected ntfy publish response body");
            None
        }
    }
}
