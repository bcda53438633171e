// src/integrations/mail_relay.rs

use crate::config::MailRelayConfig;
use crate::domain::LeadMessage;
use reqwest::blocking::Client;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("mail relay is not configured")]
    NotConfigured,
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("API error: {0}")]
    ApiError(String),
}

impl From<RelayError> for crate::errors::ServerError {
    fn from(e: RelayError) -> Self {
        crate::errors::ServerError::Upstream(format!("mail relay: {e}"))
    }
}

/// Forwards contact/lead form submissions to whoever answers them.
pub trait MailRelay: Send + Sync {
    fn send(&self, lead: &LeadMessage) -> Result<(), RelayError>;
}

pub struct HttpMailRelay {
    url: String,
    api_key: Option<String>,
    client: Client,
}

impl HttpMailRelay {
    pub fn new(cfg: &MailRelayConfig) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| RelayError::RequestFailed(e.to_string()))?;

        Ok(Self {
            url: cfg.url.clone(),
            api_key: cfg.api_key.clone(),
            client,
        })
    }
}

impl MailRelay for HttpMailRelay {
    fn send(&self, lead: &LeadMessage) -> Result<(), RelayError> {
        let mut req = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(lead);
        if let Some(key) = &self.api_key {
            req = req.header("api-key", key);
        }

        let resp = req
            .send()
            .map_err(|e| RelayError::RequestFailed(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(RelayError::ApiError(format!("{status} - {error_body}")));
        }

        Ok(())
    }
}

/// Send through the relay if there is one. No retries.
pub fn relay_lead(relay: Option<&dyn MailRelay>, lead: &LeadMessage) -> Result<(), RelayError> {
    let relay = relay.ok_or(RelayError::NotConfigured)?;
    relay.send(lead).inspect_err(|e| {
        log::warn!("mail relay failed for lead from {}: {e}", lead.source);
    })
}
