//! Portfolio Core - the contact-form engine behind a single-page personal
//! portfolio.
//!
//! The page itself is inert content; the one component with real behavior is
//! the contact form, and this library implements it end to end: field
//! validation, phone-input normalization, the submission state machine, and
//! a two-path delivery strategy (remote email API when configured, `mailto:`
//! handoff otherwise).
//!
//! # Architecture
//!
//! - **site**: inert content for the page sections (hero, about, education,
//!   skills, projects, contact channels)
//! - **domain**: the submission entity, input normalizer, and field validator
//! - **controller**: form state and the Idle/Submitting/Succeeded/Failed
//!   lifecycle
//! - **delivery**: the delivery strategy trait with EmailJS and mailto
//!   implementations
//! - **config**: configuration from environment variables
//! - **error**: custom error types for precise error handling
//! - **metrics**: counters for delivery instrumentation

pub mod config;
pub mod controller;
pub mod delivery;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod site;

pub use config::{Config, EmailJsSettings, PLACEHOLDER_SERVICE_ID};
pub use controller::{ContactController, SubmissionState, DELIVERY_FAILED_MESSAGE};
pub use delivery::{
    ContactDelivery, EmailJsClient, EmailJsDelivery, ExternalHandler, MailtoDelivery,
    SystemMailHandler,
};
pub use domain::{normalize_phone, validate, ContactSubmission, FormField, ValidationErrors};
pub use error::{ConfigError, DeliveryError};
pub use metrics::{Metrics, MetricsSummary};
pub use site::Profile;
