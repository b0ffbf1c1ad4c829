//! Local fallback delivery through a `mailto:` link.
//!
//! When the remote API is not configured, the submission is encoded into a
//! `mailto:` URI and handed to the host environment's default mail client.
//! The handoff is fire-and-forget: no delivery confirmation is obtainable,
//! so this path always succeeds from the controller's perspective.

use super::ContactDelivery;
use crate::domain::ContactSubmission;
use crate::error::DeliveryResult;
use crate::metrics::Metrics;
use async_trait::async_trait;
use std::io;
use std::process::Command;
use std::sync::Arc;
use tracing::warn;

/// Hands a URI to the operating environment's default handler.
pub trait ExternalHandler: Send + Sync {
    fn open(&self, uri: &str) -> io::Result<()>;
}

/// Opens URIs with the platform's default opener.
pub struct SystemMailHandler;

impl ExternalHandler for SystemMailHandler {
    fn open(&self, uri: &str) -> io::Result<()> {
        #[cfg(target_os = "macos")]
        let mut command = Command::new("open");

        #[cfg(target_os = "windows")]
        let mut command = {
            let mut c = Command::new("cmd");
            c.args(["/C", "start", ""]);
            c
        };

        #[cfg(all(unix, not(target_os = "macos")))]
        let mut command = Command::new("xdg-open");

        command.arg(uri).spawn().map(|_| ())
    }
}

/// Build the `mailto:` deep link for a submission.
///
/// Subject and body are percent-encoded; the body carries labeled
/// Name/Email/Phone/Message lines so the mail arrives self-describing.
pub fn mailto_uri(recipient: &str, submission: &ContactSubmission) -> String {
    let subject = format!("Portfolio Contact from {}", submission.name);
    let body = format!(
        "Name: {}\nEmail: {}\nPhone: {}\n\nMessage:\n{}",
        submission.name, submission.email, submission.phone, submission.message
    );

    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

/// Fallback delivery strategy: encode and hand off, never wait.
pub struct MailtoDelivery {
    recipient: String,
    handler: Arc<dyn ExternalHandler>,
    metrics: Metrics,
}

impl MailtoDelivery {
    pub fn new(recipient: String, handler: Arc<dyn ExternalHandler>, metrics: Metrics) -> Self {
        Self {
            recipient,
            handler,
            metrics,
        }
    }
}

#[async_trait]
impl ContactDelivery for MailtoDelivery {
    async fn send(&self, submission: &ContactSubmission) -> DeliveryResult<()> {
        let uri = mailto_uri(&self.recipient, submission);

        // Fire-and-forget: the host environment owns the outcome from here,
        // so handler failures are logged but never surfaced.
        if let Err(e) = self.handler.open(&uri) {
            warn!("Failed to hand off mailto link: {}", e);
        }
        self.metrics.record_mailto_handoff();

        Ok(())
    }

    fn confirmation(&self) -> &'static str {
        "Email client opened! Please send the email manually."
    }
}
