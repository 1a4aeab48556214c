use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum NexusError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal error: {0}")]
    Terminal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("endpoint must not be empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: endpoint must not be empty"
        );
    }

    #[test]
    fn nexus_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let nexus_err: NexusError = config_err.into();
        assert!(matches!(nexus_err, NexusError::Config(_)));
        assert!(nexus_err.to_string().contains("bad toml"));
    }

    #[test]
    fn nexus_error_terminal_display() {
        let err = NexusError::Terminal("readline closed".into());
        assert_eq!(err.to_string(), "terminal error: readline closed");
    }
}
