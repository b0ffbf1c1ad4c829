//! Remote delivery through the EmailJS REST API.
//!
//! This module provides a synchronous HTTP client that is used from async
//! contexts via `tokio::task::spawn_blocking`, plus the [`ContactDelivery`]
//! wrapper the controller talks to.

use super::ContactDelivery;
use crate::config::{Config, EmailJsSettings};
use crate::domain::ContactSubmission;
use crate::error::{DeliveryError, DeliveryResult};
use crate::metrics::Metrics;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Send endpoint of the EmailJS REST API.
const SEND_PATH: &str = "/api/v1.0/email/send";

/// Synchronous HTTP client for the EmailJS send API.
#[derive(Clone)]
pub struct EmailJsClient {
    /// Base URL for the EmailJS API
    base_url: String,

    /// Service id, template id, and public key
    settings: EmailJsSettings,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl EmailJsClient {
    /// Create a new client from configuration and the resolved settings.
    pub fn new(config: &Config, settings: EmailJsSettings, metrics: Metrics) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.emailjs_api_url.clone(),
            settings,
            agent: Arc::new(agent),
            metrics,
        }
    }

    /// Create a client with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, settings: EmailJsSettings) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            settings,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn send_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), SEND_PATH)
    }

    /// The JSON body the send endpoint expects. Template parameter names
    /// (`from_name`, `reply_to`) are fixed by the mail template.
    fn payload(&self, submission: &ContactSubmission) -> serde_json::Value {
        serde_json::json!({
            "service_id": self.settings.service_id,
            "template_id": self.settings.template_id,
            "user_id": self.settings.public_key,
            "template_params": {
                "from_name": submission.name,
                "reply_to": submission.email,
                "phone": submission.phone,
                "message": submission.message,
            }
        })
    }

    /// Dispatch a submission to the send endpoint.
    pub fn send_form(&self, submission: &ContactSubmission) -> DeliveryResult<()> {
        let start = Instant::now();
        let url = self.send_url();
        let body = self.payload(submission);

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_json(&body)
            .map_err(map_error);

        let duration = start.elapsed();
        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
                self.metrics.record_email_sent();
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                self.metrics.record_http_error();
            }
        }
        self.metrics.record_http_request(duration);

        result.map(|_| ())
    }
}

/// Map a ureq error to a DeliveryError.
fn map_error(error: ureq::Error) -> DeliveryError {
    match error {
        ureq::Error::Status(code, response) => {
            let message = response
                .into_string()
                .unwrap_or_else(|_| "Unknown error".to_string());

            DeliveryError::ApiError {
                status: code,
                message,
            }
        }
        ureq::Error::Transport(transport) => {
            if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                DeliveryError::HttpError("Connection failed".to_string())
            } else if transport.kind() == ureq::ErrorKind::Io {
                DeliveryError::Timeout
            } else {
                DeliveryError::HttpError(transport.to_string())
            }
        }
    }
}

/// Async delivery strategy backed by [`EmailJsClient`].
///
/// Runs the blocking HTTP call on the blocking thread pool so the runtime
/// stays responsive while a submission is in flight.
#[derive(Clone)]
pub struct EmailJsDelivery {
    client: Arc<EmailJsClient>,
}

impl EmailJsDelivery {
    pub fn new(client: EmailJsClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl ContactDelivery for EmailJsDelivery {
    async fn send(&self, submission: &ContactSubmission) -> DeliveryResult<()> {
        let client = self.client.clone();
        let submission = submission.clone();

        tokio::task::spawn_blocking(move || client.send_form(&submission))
            .await
            .map_err(|e| DeliveryError::HttpError(format!("Task join error: {}", e)))?
    }

    fn confirmation(&self) -> &'static str {
        "Thank you! Your message has been sent successfully."
    }
}
