//! Nexus configuration system.
//!
//! TOML-based configuration with serde defaults on every section, so
//! partial config files work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use nexus_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("endpoint: {}", config.backend.endpoint);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::NexusConfig;

use nexus_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a commented
/// default file if none exists, and validates the result.
pub fn load_config() -> Result<NexusConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
