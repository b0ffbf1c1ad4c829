use async_trait::async_trait;
use portfolio_core::delivery::ContactDelivery;
use portfolio_core::domain::ContactSubmission;
use portfolio_core::error::{DeliveryError, DeliveryResult};
use std::sync::{Arc, Mutex};

/// Mock delivery strategy for controller tests.
///
/// Records every submission it receives and can be configured to reject,
/// standing in for the remote email collaborator.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockDelivery {
    sent: Arc<Mutex<Vec<ContactSubmission>>>,
    fail: Arc<Mutex<bool>>,
    confirmation: &'static str,
}

#[allow(dead_code)]
impl MockDelivery {
    /// Create a mock that accepts every submission.
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail: Arc::new(Mutex::new(false)),
            confirmation: "Thank you! Your message has been sent successfully.",
        }
    }

    /// Switch the mock between accepting and rejecting.
    pub fn set_fail(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    /// Every submission passed to `send`, in order.
    pub fn sent(&self) -> Vec<ContactSubmission> {
        self.sent.lock().unwrap().clone()
    }

    /// Number of delivery attempts observed.
    pub fn send_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl Default for MockDelivery {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactDelivery for MockDelivery {
    async fn send(&self, submission: &ContactSubmission) -> DeliveryResult<()> {
        self.sent.lock().unwrap().push(submission.clone());
        if *self.fail.lock().unwrap() {
            Err(DeliveryError::HttpError("simulated outage".to_string()))
        } else {
            Ok(())
        }
    }

    fn confirmation(&self) -> &'static str {
        self.confirmation
    }
}
