//! Configuration management for the portfolio contact core.
//!
//! This module handles loading configuration from environment variables.
//! The EmailJS triple (service id, template id, public key) is optional:
//! its presence decides whether submissions go to the remote delivery API
//! or fall back to a local `mailto:` handoff.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Sentinel value shipped in configuration templates. A service id equal to
/// this string means "not configured", and forces the mailto fallback. Any
/// other malformed value is treated as configured and left for the delivery
/// API to reject.
pub const PLACEHOLDER_SERVICE_ID: &str = "your_service_id_here";

/// Default base URL of the EmailJS REST API.
pub const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com";

/// Default mailto recipient for the fallback path.
pub const DEFAULT_CONTACT_RECIPIENT: &str = "jigneshnakum16@gmail.com";

/// Configuration for the portfolio contact core.
#[derive(Debug, Clone)]
pub struct Config {
    /// EmailJS service id (optional, drives path selection)
    pub emailjs_service_id: Option<String>,

    /// EmailJS template id (optional, drives path selection)
    pub emailjs_template_id: Option<String>,

    /// EmailJS public key (optional, drives path selection)
    pub emailjs_public_key: Option<String>,

    /// Base URL for the EmailJS API (overridable for tests)
    pub emailjs_api_url: String,

    /// Recipient address for the mailto fallback
    pub contact_recipient: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

/// The complete remote-delivery triple, present only when configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsSettings {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`, `EMAILJS_PUBLIC_KEY`:
    ///   remote delivery credentials; all three must be set (and the service
    ///   id must not be the placeholder) for the remote path to be chosen
    /// - `EMAILJS_API_BASE_URL`: EmailJS endpoint (default: `https://api.emailjs.com`)
    /// - `CONTACT_RECIPIENT`: mailto fallback recipient
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let emailjs_service_id = Self::optional_var("EMAILJS_SERVICE_ID");
        let emailjs_template_id = Self::optional_var("EMAILJS_TEMPLATE_ID");
        let emailjs_public_key = Self::optional_var("EMAILJS_PUBLIC_KEY");

        let emailjs_api_url = Self::optional_var("EMAILJS_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_EMAILJS_API_URL.to_string());
        if !emailjs_api_url.starts_with("http://") && !emailjs_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "EMAILJS_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let contact_recipient = match env::var("CONTACT_RECIPIENT") {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_RECIPIENT".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(value) => value.trim().to_string(),
            Err(_) => DEFAULT_CONTACT_RECIPIENT.to_string(),
        };

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            emailjs_service_id,
            emailjs_template_id,
            emailjs_public_key,
            emailjs_api_url,
            contact_recipient,
            request_timeout,
            log_level,
        })
    }

    /// The remote-delivery settings, if the triple is fully configured and
    /// the service id is not the placeholder sentinel.
    pub fn emailjs(&self) -> Option<EmailJsSettings> {
        let service_id = self.emailjs_service_id.as_deref()?;
        let template_id = self.emailjs_template_id.as_deref()?;
        let public_key = self.emailjs_public_key.as_deref()?;

        if service_id == PLACEHOLDER_SERVICE_ID {
            return None;
        }

        Some(EmailJsSettings {
            service_id: service_id.to_string(),
            template_id: template_id.to_string(),
            public_key: public_key.to_string(),
        })
    }

    /// Read an environment variable, treating unset and blank as absent.
    fn optional_var(var_name: &str) -> Option<String> {
        match env::var(var_name) {
            Ok(value) if value.trim().is_empty() => None,
            Ok(value) => Some(value.trim().to_string()),
            Err(_) => None,
        }
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            emailjs_service_id: None,
            emailjs_template_id: None,
            emailjs_public_key: None,
            emailjs_api_url: DEFAULT_EMAILJS_API_URL.to_string(),
            contact_recipient: DEFAULT_CONTACT_RECIPIENT.to_string(),
            request_timeout: 10,
            log_level: "error".to_string(),
        }
    }
}
