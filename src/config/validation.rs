//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check redirect targets are absolute http(s) URLs
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LabConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;
use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;
use url::Url;

use crate::config::schema::LabConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &LabConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(addr) = &config.listener.bind_address {
        if addr.parse::<SocketAddr>().is_err() {
            errors.push(ValidationError::new(
                "listener.bind_address",
                format!("'{}' is not a socket address", addr),
            ));
        }
    }

    if let Some(tls) = &config.listener.tls {
        if tls.cert_path.trim().is_empty() {
            errors.push(ValidationError::new("listener.tls.cert_path", "must not be empty"));
        }
        if tls.key_path.trim().is_empty() {
            errors.push(ValidationError::new("listener.tls.key_path", "must not be empty"));
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::new("timeouts.request_secs", "must be greater than 0"));
    }

    if config.http.max_body_size == 0 {
        errors.push(ValidationError::new("http.max_body_size", "must be greater than 0"));
    }

    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!("'{}' is not a valid filter directive", config.observability.log_level),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("'{}' is not a socket address", config.observability.metrics_address),
        ));
    }

    match Url::parse(&config.redirect.target_base) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
        Ok(url) => errors.push(ValidationError::new(
            "redirect.target_base",
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new(
            "redirect.target_base",
            format!("invalid URL: {}", e),
        )),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::TlsConfig;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&LabConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = LabConfig::default();
        config.listener.bind_address = Some("not-an-address".into());
        config.timeouts.request_secs = 0;
        config.redirect.target_base = "ftp://example.com".into();

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["listener.bind_address", "timeouts.request_secs", "redirect.target_base"]
        );
    }

    #[test]
    fn test_relative_redirect_target_rejected() {
        let mut config = LabConfig::default();
        config.redirect.target_base = "/items".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "redirect.target_base");
    }

    #[test]
    fn test_metrics_address_only_checked_when_enabled() {
        let mut config = LabConfig::default();
        config.observability.metrics_address = "nowhere".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_tls_paths_rejected() {
        let mut config = LabConfig::default();
        config.listener.tls = Some(TlsConfig {
            cert_path: " ".into(),
            key_path: String::new(),
        });
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
