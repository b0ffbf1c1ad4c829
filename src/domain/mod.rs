//! Domain types for the contact form.
//!
//! This module contains the contact submission entity, the input normalizer,
//! and the field validator. Validation never raises: it produces an error set
//! that is empty exactly when the submission is deliverable.

pub mod submission;
pub mod validation;

pub use submission::{normalize_phone, ContactSubmission};
pub use validation::{validate, FormField, ValidationErrors};
