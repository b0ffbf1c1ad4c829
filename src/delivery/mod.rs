//! Delivery strategies for contact submissions.
//!
//! A submission leaves the system through exactly one of two paths: the
//! EmailJS REST API when the remote triple is configured, or a `mailto:`
//! handoff to the host environment's default mail client otherwise. The
//! strategy is chosen once per process from configuration, never hardwired,
//! so tests can substitute a fake collaborator.

mod emailjs;
mod mailto;

pub use emailjs::{EmailJsClient, EmailJsDelivery};
pub use mailto::{mailto_uri, ExternalHandler, MailtoDelivery, SystemMailHandler};

use crate::config::Config;
use crate::domain::ContactSubmission;
use crate::error::DeliveryResult;
use crate::metrics::Metrics;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// An outbound channel for contact submissions.
///
/// Contract: `send` resolves on success and rejects on failure, nothing more.
/// The per-path success banner comes from `confirmation`.
#[async_trait]
pub trait ContactDelivery: Send + Sync {
    /// Dispatch a validated submission.
    async fn send(&self, submission: &ContactSubmission) -> DeliveryResult<()>;

    /// User-facing message shown when `send` succeeds.
    fn confirmation(&self) -> &'static str;
}

/// Choose the delivery strategy for this configuration.
pub fn select(config: &Config, metrics: Metrics) -> Arc<dyn ContactDelivery> {
    match config.emailjs() {
        Some(settings) => {
            info!(service_id = %settings.service_id, "Using remote email delivery");
            let client = EmailJsClient::new(config, settings, metrics);
            Arc::new(EmailJsDelivery::new(client))
        }
        None => {
            info!(
                recipient = %config.contact_recipient,
                "EmailJS not configured, using mailto fallback"
            );
            Arc::new(MailtoDelivery::new(
                config.contact_recipient.clone(),
                Arc::new(SystemMailHandler),
                metrics,
            ))
        }
    }
}
