//! Configuration validation.
//!
//! Checks endpoint shape and timeout ranges, collecting all problems
//! into a single `ConfigError`.

use nexus_common::ConfigError;

use crate::schema::NexusConfig;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &NexusConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    let endpoint = config.backend.endpoint.trim();
    if endpoint.is_empty() {
        errors.push("backend.endpoint must not be empty".into());
    } else if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        errors.push(format!("backend.endpoint = {endpoint} is not an http(s) URL"));
    }

    validate_nonzero(
        &mut errors,
        "backend.connect_timeout_secs",
        config.backend.connect_timeout_secs,
    );
    validate_nonzero(
        &mut errors,
        "backend.request_timeout_secs",
        config.backend.request_timeout_secs,
    );

    if config.chat.greeting.trim().is_empty() {
        errors.push("chat.greeting must not be empty".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Push an error if `value` is zero.
fn validate_nonzero(errors: &mut Vec<String>, name: &str, value: u64) {
    if value == 0 {
        errors.push(format!("{name} must be greater than zero"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&NexusConfig::default()).is_ok());
    }

    #[test]
    fn empty_endpoint_is_rejected() {
        let mut config = NexusConfig::default();
        config.backend.endpoint = "  ".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("backend.endpoint"));
    }

    #[test]
    fn non_http_endpoint_is_rejected() {
        let mut config = NexusConfig::default();
        config.backend.endpoint = "ftp://example.com/ask".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("not an http(s) URL"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = NexusConfig::default();
        config.backend.request_timeout_secs = 0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("request_timeout_secs"));
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = NexusConfig::default();
        config.backend.endpoint = String::new();
        config.backend.connect_timeout_secs = 0;
        config.chat.greeting = String::new();
        let err = validate(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("backend.endpoint"));
        assert!(msg.contains("connect_timeout_secs"));
        assert!(msg.contains("chat.greeting"));
    }
}
