//! Contact submission controller.
//!
//! Owns the form fields, the validation error set, and the submission state
//! machine. Delivery is delegated to the configured [`ContactDelivery`]
//! strategy; no error is allowed to escape `submit` uncaught.

use crate::delivery::ContactDelivery;
use crate::domain::{normalize_phone, validate, ContactSubmission, FormField, ValidationErrors};
use crate::metrics::Metrics;
use std::sync::Arc;
use tracing::warn;

/// Banner shown when the delivery attempt is rejected. The form contents are
/// kept so the user can retry without re-typing.
pub const DELIVERY_FAILED_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again.";

/// Where a submission currently is in its lifecycle.
///
/// `Succeeded` and `Failed` are not terminal: a later edit and resubmit
/// restarts the cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    /// Nothing in flight; may hold validation errors.
    Idle,
    /// A delivery attempt is in flight; submit is suppressed.
    Submitting,
    /// Delivery resolved, with the strategy's confirmation banner.
    Succeeded(String),
    /// Delivery rejected, with the retry banner.
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// The one stateful component of the contact form.
pub struct ContactController {
    submission: ContactSubmission,
    errors: ValidationErrors,
    state: SubmissionState,
    delivery: Arc<dyn ContactDelivery>,
    metrics: Metrics,
}

impl ContactController {
    /// Create a controller in the `Idle` state with an empty form.
    pub fn new(delivery: Arc<dyn ContactDelivery>, metrics: Metrics) -> Self {
        Self {
            submission: ContactSubmission::new(),
            errors: ValidationErrors::new(),
            state: SubmissionState::Idle,
            delivery,
            metrics,
        }
    }

    /// Current form contents.
    pub fn submission(&self) -> &ContactSubmission {
        &self.submission
    }

    /// Current validation errors.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Store a field edit.
    ///
    /// Phone input is normalized to digits before storing; every other field
    /// keeps the raw input. Editing a field clears that field's existing
    /// error, and only that one (optimistic clearing, not re-validation).
    pub fn edit(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Name => self.submission.name = value.to_string(),
            FormField::Email => self.submission.email = value.to_string(),
            FormField::Phone => self.submission.phone = normalize_phone(value),
            FormField::Message => self.submission.message = value.to_string(),
        }
        self.errors.clear_field(field);
    }

    /// Validate and, if clean, dispatch the submission.
    ///
    /// On validation failure the errors are stored, the state stays `Idle`,
    /// and no side effect is performed. On delivery success the form and
    /// errors are cleared; on delivery failure the form is preserved for a
    /// retry. A call while already `Submitting` is a no-op.
    pub async fn submit(&mut self) -> &SubmissionState {
        if self.state.is_submitting() {
            return &self.state;
        }

        let errors = validate(&self.submission);
        if !errors.is_empty() {
            self.metrics.record_validation_failure();
            self.errors = errors;
            self.state = SubmissionState::Idle;
            return &self.state;
        }

        self.errors = errors;
        self.state = SubmissionState::Submitting;

        match self.delivery.send(&self.submission).await {
            Ok(()) => {
                self.submission.clear();
                self.errors.clear();
                self.state = SubmissionState::Succeeded(self.delivery.confirmation().to_string());
            }
            Err(e) => {
                warn!("Delivery failed: {}", e);
                self.state = SubmissionState::Failed(DELIVERY_FAILED_MESSAGE.to_string());
            }
        }

        &self.state
    }
}
