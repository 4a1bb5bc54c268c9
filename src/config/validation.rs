//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts positive, amounts sane)
//! - Check endpoint URLs parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MinterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::str::FromStr;

use url::Url;

use crate::chain::types::Cluster;
use crate::config::schema::MinterConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &MinterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = Cluster::from_str(&config.rpc.cluster) {
        errors.push(ValidationError::new("rpc.cluster", e.to_string()));
    }
    if let Some(url) = &config.rpc.url {
        if Url::parse(url).is_err() {
            errors.push(ValidationError::new(
                "rpc.url",
                format!("'{}' is not a URL", url),
            ));
        }
    }
    if config.rpc.timeout_secs == 0 {
        errors.push(ValidationError::new("rpc.timeout_secs", "must be positive"));
    }
    if config.rpc.confirm_timeout_secs < config.rpc.timeout_secs {
        errors.push(ValidationError::new(
            "rpc.confirm_timeout_secs",
            "must be at least rpc.timeout_secs",
        ));
    }

    if Url::parse(&config.storage.address).is_err() {
        errors.push(ValidationError::new(
            "storage.address",
            format!("'{}' is not a URL", config.storage.address),
        ));
    }
    if Url::parse(&config.storage.gateway).is_err() {
        errors.push(ValidationError::new(
            "storage.gateway",
            format!("'{}' is not a URL", config.storage.gateway),
        ));
    }
    if config.storage.timeout_ms == 0 {
        errors.push(ValidationError::new(
            "storage.timeout_ms",
            "must be positive",
        ));
    }

    if config.wallet.keypair_path.is_empty() {
        errors.push(ValidationError::new(
            "wallet.keypair_path",
            "must not be empty",
        ));
    }
    if config.wallet.airdrop && config.wallet.airdrop_sol <= 0.0 {
        errors.push(ValidationError::new(
            "wallet.airdrop_sol",
            "must be positive when airdrop is enabled",
        ));
    }
    if config.wallet.min_balance_sol < 0.0 {
        errors.push(ValidationError::new(
            "wallet.min_balance_sol",
            "must not be negative",
        ));
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

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&MinterConfig::default()).is_ok());
    }

    #[test]
    fn test_all_errors_collected() {
        let mut config = MinterConfig::default();
        config.rpc.cluster = "nonsense".to_string();
        config.rpc.timeout_secs = 0;
        config.storage.address = "not a url".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"rpc.cluster"));
        assert!(fields.contains(&"rpc.timeout_secs"));
        assert!(fields.contains(&"storage.address"));
    }

    #[test]
    fn test_airdrop_amount_checked_only_when_enabled() {
        let mut config = MinterConfig::default();
        config.wallet.airdrop_sol = 0.0;

        assert!(validate_config(&config).is_err());
        config.wallet.airdrop = false;
        assert!(validate_config(&config).is_ok());
    }
}
