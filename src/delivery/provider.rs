use crate::types::{AppError, Result};
use crate::utils::config::DeliveryConfig;
use async_trait::async_trait;
use serde_json::json;

/// One rendered report ready to leave the system.
#[derive(Debug, Clone)]
pub struct OutboundMessage {
    pub subject: String,
    pub html_body: String,
    /// Overrides the provider's configured default recipient.
    pub recipient: Option<String>,
}

/// Outbound transport seam. Implementations return the provider's raw
/// status code; classifying it is the dispatcher's job.
#[async_trait]
pub trait DeliveryProvider: Send + Sync {
    /// Send one message; returns the provider's status code.
    async fn send(&self, message: &OutboundMessage) -> Result<u16>;
}

/// Delivers reports through an HTTP mail API.
pub struct HttpMailProvider {
    client: reqwest::Client,
    api_base: String,
    api_key: Option<String>,
    from_address: String,
    default_recipient: String,
}

impl HttpMailProvider {
    pub fn new(config: &DeliveryConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            from_address: config.from_address.clone(),
            default_recipient: config.default_recipient.clone(),
        }
    }
}

#[async_trait]
impl DeliveryProvider for HttpMailProvider {
    async fn send(&self, message: &OutboundMessage) -> Result<u16> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Delivery("MAIL_API_KEY is not configured".to_string()))?;

        let recipient = message
            .recipient
            .as_deref()
            .unwrap_or(&self.default_recipient);

        let body = json!({
            "personalizations": [{"to": [{"email": recipient}]}],
            "from": {"email": self.from_address},
            "subject": message.subject,
            "content": [{"type": "text/html", "value": message.html_body}],
        });

        let response = self
            .client
            .post(format!("{}/v3/mail/send", self.api_base))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Delivery(format!("Mail API request failed: {}", e)))?;

        Ok(response.status().as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> DeliveryConfig {
        DeliveryConfig {
            api_base: "https://mail.invalid/".to_string(),
            api_key: api_key.map(String::from),
            from_address: "research@example.com".to_string(),
            default_recipient: "recipient@example.com".to_string(),
        }
    }

    #[test]
    fn test_api_base_trailing_slash_is_normalized() {
        let provider = HttpMailProvider::new(&config(Some("key")));
        assert_eq!(provider.api_base, "https://mail.invalid");
    }

    #[tokio::test]
    async fn test_missing_api_key_is_a_delivery_error() {
        let provider = HttpMailProvider::new(&config(None));
        let message = OutboundMessage {
            subject: "s".to_string(),
            html_body: "<p>b</p>".to_string(),
            recipient: None,
        };

        let err = provider.send(&message).await.unwrap_err();
        assert!(matches!(err, AppError::Delivery(_)));
    }
}
