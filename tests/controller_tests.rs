//! Integration tests for the contact submission controller.
//!
//! Covers the full submit lifecycle against a mock remote collaborator and
//! the real mailto fallback with a recording handler.

mod mocks;

use mocks::MockDelivery;
use portfolio_core::delivery::{ExternalHandler, MailtoDelivery};
use portfolio_core::{
    ContactController, FormField, Metrics, SubmissionState, DELIVERY_FAILED_MESSAGE,
};
use std::io;
use std::sync::{Arc, Mutex};

/// Recording stand-in for the host environment's URI handler.
struct RecordingHandler {
    opened: Mutex<Vec<String>>,
}

impl RecordingHandler {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            opened: Mutex::new(Vec::new()),
        })
    }

    fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl ExternalHandler for RecordingHandler {
    fn open(&self, uri: &str) -> io::Result<()> {
        self.opened.lock().unwrap().push(uri.to_string());
        Ok(())
    }
}

fn fill_valid(controller: &mut ContactController) {
    controller.edit(FormField::Name, "Al");
    controller.edit(FormField::Email, "al@x.com");
    controller.edit(FormField::Phone, "");
    controller.edit(FormField::Message, "Hello there!");
}

#[tokio::test]
async fn test_required_field_errors_block_delivery() {
    let delivery = Arc::new(MockDelivery::new());
    let mut controller = ContactController::new(delivery.clone(), Metrics::new());

    controller.submit().await;

    assert_eq!(controller.state(), &SubmissionState::Idle);
    assert_eq!(
        controller.errors().get(FormField::Name),
        Some("Name is required")
    );
    assert_eq!(
        controller.errors().get(FormField::Email),
        Some("Email is required")
    );
    assert_eq!(
        controller.errors().get(FormField::Message),
        Some("Message is required")
    );
    assert_eq!(delivery.send_count(), 0);
}

#[tokio::test]
async fn test_multiple_simultaneous_errors_no_delivery() {
    let delivery = Arc::new(MockDelivery::new());
    let mut controller = ContactController::new(delivery.clone(), Metrics::new());

    controller.edit(FormField::Name, "A");
    controller.edit(FormField::Email, "bad");
    controller.edit(FormField::Message, "hi");
    controller.edit(FormField::Phone, "12a3");

    controller.submit().await;

    assert_eq!(controller.state(), &SubmissionState::Idle);
    // "12a3" was normalized to "123" on edit, so the phone rule cannot fire
    // through the controller; the other three rules all do.
    assert_eq!(
        controller.errors().get(FormField::Name),
        Some("Name must be at least 2 characters")
    );
    assert_eq!(
        controller.errors().get(FormField::Email),
        Some("Please enter a valid email address")
    );
    assert_eq!(controller.errors().get(FormField::Phone), None);
    assert_eq!(
        controller.errors().get(FormField::Message),
        Some("Message must be at least 10 characters")
    );
    assert_eq!(delivery.send_count(), 0);
}

#[tokio::test]
async fn test_remote_success_transitions_to_succeeded() {
    let delivery = Arc::new(MockDelivery::new());
    let mut controller = ContactController::new(delivery.clone(), Metrics::new());
    fill_valid(&mut controller);

    let state = controller.submit().await.clone();

    assert_eq!(
        state,
        SubmissionState::Succeeded(
            "Thank you! Your message has been sent successfully.".to_string()
        )
    );
    assert!(controller.submission().is_empty());
    assert!(controller.errors().is_empty());
    assert_eq!(delivery.send_count(), 1);
    assert_eq!(delivery.sent()[0].name, "Al");
}

#[tokio::test]
async fn test_remote_failure_preserves_form() {
    let delivery = Arc::new(MockDelivery::new());
    delivery.set_fail(true);
    let mut controller = ContactController::new(delivery.clone(), Metrics::new());
    fill_valid(&mut controller);

    let state = controller.submit().await.clone();

    assert_eq!(
        state,
        SubmissionState::Failed(DELIVERY_FAILED_MESSAGE.to_string())
    );
    assert_eq!(controller.submission().name, "Al");
    assert_eq!(controller.submission().email, "al@x.com");
    assert_eq!(controller.submission().message, "Hello there!");
    assert_eq!(delivery.send_count(), 1);
}

#[tokio::test]
async fn test_retry_after_failure_succeeds() {
    let delivery = Arc::new(MockDelivery::new());
    delivery.set_fail(true);
    let mut controller = ContactController::new(delivery.clone(), Metrics::new());
    fill_valid(&mut controller);

    controller.submit().await;
    delivery.set_fail(false);
    let state = controller.submit().await.clone();

    assert!(matches!(state, SubmissionState::Succeeded(_)));
    assert!(controller.submission().is_empty());
    assert_eq!(delivery.send_count(), 2);
}

#[tokio::test]
async fn test_fallback_path_succeeds_and_clears_form() {
    let handler = RecordingHandler::new();
    let delivery = Arc::new(MailtoDelivery::new(
        "jigneshnakum16@gmail.com".to_string(),
        handler.clone(),
        Metrics::new(),
    ));
    let mut controller = ContactController::new(delivery, Metrics::new());
    fill_valid(&mut controller);

    let state = controller.submit().await.clone();

    assert_eq!(
        state,
        SubmissionState::Succeeded("Email client opened! Please send the email manually.".to_string())
    );
    assert!(controller.submission().is_empty());
    assert!(controller.errors().is_empty());

    let opened = handler.opened();
    assert_eq!(opened.len(), 1);
    assert!(opened[0].starts_with("mailto:jigneshnakum16@gmail.com?subject="));
    assert!(opened[0].contains("Portfolio%20Contact%20from%20Al"));
}

#[tokio::test]
async fn test_fallback_path_skipped_on_validation_errors() {
    let handler = RecordingHandler::new();
    let delivery = Arc::new(MailtoDelivery::new(
        "jigneshnakum16@gmail.com".to_string(),
        handler.clone(),
        Metrics::new(),
    ));
    let mut controller = ContactController::new(delivery, Metrics::new());

    controller.submit().await;

    assert_eq!(controller.state(), &SubmissionState::Idle);
    assert!(handler.opened().is_empty());
}

#[tokio::test]
async fn test_edit_after_error_clears_only_that_field() {
    let delivery = Arc::new(MockDelivery::new());
    let mut controller = ContactController::new(delivery, Metrics::new());

    controller.submit().await;
    let before = controller.errors().len();
    assert_eq!(before, 3);

    controller.edit(FormField::Name, "A");

    assert_eq!(controller.errors().len(), before - 1);
    assert_eq!(controller.errors().get(FormField::Name), None);
    assert_eq!(
        controller.errors().get(FormField::Email),
        Some("Email is required")
    );
}

#[tokio::test]
async fn test_phone_normalized_before_storage() {
    let delivery = Arc::new(MockDelivery::new());
    let mut controller = ContactController::new(delivery.clone(), Metrics::new());
    fill_valid(&mut controller);
    controller.edit(FormField::Phone, "+91 97121-57194");

    controller.submit().await;

    // The delivered payload saw the normalized value.
    assert_eq!(delivery.sent()[0].phone, "9712157194");
}

#[tokio::test]
async fn test_resubmit_after_success_restarts_cycle() {
    let delivery = Arc::new(MockDelivery::new());
    let mut controller = ContactController::new(delivery.clone(), Metrics::new());
    fill_valid(&mut controller);

    controller.submit().await;
    assert!(matches!(controller.state(), SubmissionState::Succeeded(_)));

    // The cleared form fails validation on an immediate resubmit.
    controller.submit().await;
    assert_eq!(controller.state(), &SubmissionState::Idle);
    assert_eq!(controller.errors().len(), 3);
    assert_eq!(delivery.send_count(), 1);
}
