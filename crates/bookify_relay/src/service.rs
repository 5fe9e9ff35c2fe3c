// --- File: crates/bookify_relay/src/service.rs ---
use crate::error::RelayError;
use bookify_common::http::client::{create_client, post_json, DEFAULT_TIMEOUT_SECS, HTTP_CLIENT};
use bookify_common::is_mail_relay_enabled;
use bookify_common::services::{BoxFuture, MailRelayService, RelayMessage, RelayReceipt};
use bookify_config::{AppConfig, MailRelayConfig, SECRET_FROM_ENV};
use reqwest::Client;
use tracing::{error, info, warn};

/// Mail relay client posting JSON to a form-relay endpoint.
pub struct MailRelayClient {
    client: Client,
    endpoint: String,
    subject: String,
}

impl MailRelayClient {
    /// Create a new client with the configured endpoint and timeout
    pub fn new(config: &MailRelayConfig) -> Result<Self, RelayError> {
        let endpoint = config.endpoint.trim();
        if endpoint.is_empty() || endpoint == SECRET_FROM_ENV {
            return Err(RelayError::ConfigError(
                "mail_relay.endpoint is not set (MAIL_RELAY_ENDPOINT)".to_string(),
            ));
        }
        let client = if config.timeout_secs == DEFAULT_TIMEOUT_SECS {
            HTTP_CLIENT.clone()
        } else {
            create_client(config.timeout_secs, true)?
        };
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            subject: config.subject.clone(),
        })
    }

    /// `None` when the relay is switched off or not configured.
    pub fn from_app_config(config: &AppConfig) -> Result<Option<Self>, RelayError> {
        if !is_mail_relay_enabled(config) {
            if config.use_mail_relay {
                warn!("use_mail_relay is set but [mail_relay] is missing");
            } else {
                info!("Mail relay disabled by configuration");
            }
            return Ok(None);
        }
        match &config.mail_relay {
            Some(relay_config) => Ok(Some(Self::new(relay_config)?)),
            None => Ok(None),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Subject prefix for outgoing messages.
    pub fn subject(&self) -> &str {
        &self.subject
    }
}

impl MailRelayService for MailRelayClient {
    type Error = RelayError;

    fn send(&self, message: RelayMessage) -> BoxFuture<'_, RelayReceipt, Self::Error> {
        Box::pin(async move {
            info!("Posting booking for {} to mail relay", message.reply_to);
            let resp = post_json(&self.client, &self.endpoint, &message).await?;

            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                error!("Mail relay returned {}: {}", status, body);
                return Err(RelayError::ApiError {
                    status_code: status.as_u16(),
                    message: body,
                });
            }

            info!("Mail relay accepted booking ({})", status);
            Ok(RelayReceipt {
                status: status.as_u16(),
            })
        })
    }
}
