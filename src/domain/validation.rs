//! Field validation for contact submissions.
//!
//! [`validate`] is a total function: it maps a submission to an error set,
//! collecting every rule violation instead of short-circuiting on the first.
//! An empty error set means the submission may be delivered.

use super::submission::ContactSubmission;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

/// Basic `local@domain.tld` shape: no whitespace or extra `@`, one dot after
/// the `@`.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// The four inputs of the contact form.
///
/// Ordered so error sets iterate in form order (top to bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Message,
}

impl FormField {
    /// Stable key for the field, matching the form input names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from field to a human-readable error message.
///
/// Recomputed wholesale on every validation pass. Editing a field clears only
/// that field's entry (optimistic clearing, not re-validation).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FormField, String>);

impl ValidationErrors {
    /// Create an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the submission passed every rule.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields currently in error.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The message for a field, if it failed validation.
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Record an error for a field, replacing any previous message.
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Drop the error for one field, leaving the others untouched.
    pub fn clear_field(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    /// Drop every error.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterate errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Run every field rule and collect the failures.
pub fn validate(submission: &ContactSubmission) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let name = submission.name.trim();
    if name.is_empty() {
        errors.insert(FormField::Name, "Name is required");
    } else if name.chars().count() < 2 {
        errors.insert(FormField::Name, "Name must be at least 2 characters");
    }

    let email = submission.email.trim();
    if email.is_empty() {
        errors.insert(FormField::Email, "Email is required");
    } else if !EMAIL_PATTERN.is_match(email) {
        errors.insert(FormField::Email, "Please enter a valid email address");
    }

    // Redundant for normalized input, kept as a defensive check on the
    // stored value.
    if !submission.phone.is_empty() && !submission.phone.chars().all(|c| c.is_ascii_digit()) {
        errors.insert(FormField::Phone, "Phone number can only contain digits");
    }

    let message = submission.message.trim();
    if message.is_empty() {
        errors.insert(FormField::Message, "Message is required");
    } else if message.chars().count() < 10 {
        errors.insert(FormField::Message, "Message must be at least 10 characters");
    }

    errors
}
