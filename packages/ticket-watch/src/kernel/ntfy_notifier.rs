use anyhow::Result;
use async_trait::async_trait;
use ntfy_client::{Message, NtfyClient};
use tracing::info;

use super::BaseNotifier;
use crate::config::Config;
use crate::formatter::Notification;

/// Delivers cycle notifications to one ntfy topic
pub struct NtfyNotifier {
    client: NtfyClient,
    topic: String,
}

impl NtfyNotifier {
    pub fn new(client: NtfyClient, topic: impl Into<String>) -> Self {
        Self {
            client,
            topic: topic.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut client = NtfyClient::new(config.ntfy_base_url.clone());
        if let Some(token) = &config.ntfy_access_token {
            client = client.with_access_token(token.clone());
        }
        Self::new(client, config.ntfy_topic.clone())
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }
}

/// ntfy wire form of a notification
pub fn to_message(notification: &Notification) -> Message {
    Message::new(notification.message.clone())
        .with_title(notification.title.clone())
        .with_priority(notification.priority.into())
        .with_tag(notification.tag.as_str())
}

#[async_trait]
impl BaseNotifier for NtfyNotifier {
    async fn send(&self, notification: &Notification) -> Result<()> {
        self.client
            .publish(&self.topic, &to_message(notification))
            .await?;
        info!(topic = %self.topic, "Sent message");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::{NotificationPriority, NotificationTag};

    #[test]
    fn test_to_message() {
        let notification = Notification {
            message: "Anaheim: AVAILABLE".to_string(),
            title: "HYROX: Events available!".to_string(),
            priority: NotificationPriority::Urgent,
            tag: NotificationTag::RotatingLight,
        };

        let message = to_message(&notification);
        assert_eq!(message.body, "Anaheim: AVAILABLE");
        assert_eq!(
            message.headers(),
            vec![
                ("Title", "HYROX: Events available!".to_string()),
                ("Priority", "urgent".to_string()),
                ("Tags", "rotating_light".to_string()),
            ]
        );
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            ntfy_topic: "my-topic".to_string(),
            ..Config::default()
        };
        let notifier = NtfyNotifier::from_config(&config);
        assert_eq!(notifier.topic(), "my-topic");
    }

    #[tokio::test]
    async fn test_send_failure_is_error() {
        let notifier = NtfyNotifier::new(NtfyClient::new("http://127.0.0.1:9"), "topic");
        let notification = Notification {
            message: "A: UNCLEAR".to_string(),
            title: "HYROX: No events available!".to_string(),
            priority: NotificationPriority::Low,
            tag: NotificationTag::InformationSource,
        };
        assert!(notifier.send(&notification).await.is_err());
    }
}
