//! Contact submission entity.

/// One filled-in contact form.
///
/// Field values are stored as the user typed them, with one exception: the
/// phone field only ever holds decimal digits because every edit goes through
/// [`normalize_phone`] before being stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    /// Sender's display name. Required, at least 2 characters after trimming.
    pub name: String,

    /// Reply address. Required, must look like `local@domain.tld`.
    pub email: String,

    /// Optional callback number, digits only.
    pub phone: String,

    /// Message body. Required, at least 10 characters after trimming.
    pub message: String,
}

impl ContactSubmission {
    /// Create an empty submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every field to empty, as after a successful send.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.message.clear();
    }

    /// True when no field holds any input.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.message.is_empty()
    }
}

/// Strip everything that is not a decimal digit from raw phone input.
///
/// Applied on every phone-field edit, so the stored value is digits-only by
/// construction. The digit rule in the validator is therefore redundant for
/// normalized input but still enforced.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_strips_non_digits() {
        assert_eq!(normalize_phone("+1 (555) 123-4567"), "15551234567");
        assert_eq!(normalize_phone("12a3"), "123");
        assert_eq!(normalize_phone("abc"), "");
        assert_eq!(normalize_phone(""), "");
    }

    #[test]
    fn test_normalize_phone_keeps_digits() {
        assert_eq!(normalize_phone("9712157194"), "9712157194");
    }

    #[test]
    fn test_normalize_phone_is_digits_only() {
        for raw in ["+1-555", "½²³", "phone: 555?", "५५५ 12"] {
            let normalized = normalize_phone(raw);
            assert!(normalized.chars().all(|c| c.is_ascii_digit()), "{raw:?}");
        }
    }

    #[test]
    fn test_clear_resets_all_fields() {
        let mut submission = ContactSubmission {
            name: "Al".to_string(),
            email: "al@x.com".to_string(),
            phone: "123".to_string(),
            message: "Hello there!".to_string(),
        };
        assert!(!submission.is_empty());

        submission.clear();
        assert!(submission.is_empty());
        assert_eq!(submission, ContactSubmission::new());
    }
}
