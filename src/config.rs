//! Configuration management for the form server.
//!
//! This module handles loading and validating configuration from environment variables,
//! reading a `.env` file first when one is present.

use crate::domain::{FormField, FormPatterns};
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Default limit on POST body size in bytes.
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;

/// Configuration for the form server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address to listen on (default: 127.0.0.1:8080)
    pub bind_addr: SocketAddr,

    /// Compiled field patterns (default: match everything)
    pub patterns: FormPatterns,

    /// Maximum accepted POST body size in bytes (default: 16384)
    pub max_body_bytes: usize,

    /// Log level used when RUST_LOG is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `FORM_BIND_ADDR`: Listen address (default: 127.0.0.1:8080)
    /// - `FORM_TITLE_PATTERN`: Regex for the title field (default: empty, matches all)
    /// - `FORM_PHONE_PATTERN`: Regex for the phone field (default: empty, matches all)
    /// - `FORM_MAIL_PATTERN`: Regex for the mail field (default: empty, matches all)
    /// - `FORM_MAX_BODY_BYTES`: POST body limit in bytes (default: 16384)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let bind_addr_raw =
            env::var("FORM_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                var: "FORM_BIND_ADDR".to_string(),
                reason: format!("Must be a socket address like 127.0.0.1:8080, got: {}", bind_addr_raw),
            })?;

        let patterns = FormPatterns::new(
            &Self::pattern_var(FormField::Title),
            &Self::pattern_var(FormField::Phone),
            &Self::pattern_var(FormField::Mail),
        )?;

        let max_body_bytes = Self::parse_env_usize("FORM_MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?;
        if max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                var: "FORM_MAX_BODY_BYTES".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            bind_addr,
            patterns,
            max_body_bytes,
            log_level,
        })
    }

    /// Name of the environment variable holding a field's pattern.
    pub fn pattern_var_name(field: FormField) -> &'static str {
        match field {
            FormField::Title => "FORM_TITLE_PATTERN",
            FormField::Phone => "FORM_PHONE_PATTERN",
            FormField::Mail => "FORM_MAIL_PATTERN",
        }
    }

    /// Read a field's pattern, empty when unset.
    fn pattern_var(field: FormField) -> String {
        env::var(Self::pattern_var_name(field)).unwrap_or_default()
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
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
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            patterns: FormPatterns::default(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 6] = [
        "FORM_BIND_ADDR",
        "FORM_TITLE_PATTERN",
        "FORM_PHONE_PATTERN",
        "FORM_MAIL_PATTERN",
        "FORM_MAX_BODY_BYTES",
        "LOG_LEVEL",
    ];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        /// Start from a clean slate so a local .env cannot leak into tests.
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.max_body_bytes, 16384);
        assert_eq!(config.log_level, "info");
        assert!(config.patterns.is_match(FormField::Phone, "anything"));
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("FORM_BIND_ADDR", "0.0.0.0:9000");
        guard.set("FORM_PHONE_PATTERN", "^[0-9]+$");
        guard.set("FORM_MAX_BODY_BYTES", "1024");

        let config = Config::from_env().expect("config should load");
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.max_body_bytes, 1024);
        assert!(config.patterns.is_match(FormField::Phone, "123"));
        assert!(!config.patterns.is_match(FormField::Phone, "abc"));
        assert!(config.patterns.is_match(FormField::Title, ""));
    }

    #[test]
    #[serial]
    fn test_config_invalid_bind_addr() {
        let mut guard = EnvGuard::new();
        guard.set("FORM_BIND_ADDR", "localhost");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "FORM_BIND_ADDR"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_pattern() {
        let mut guard = EnvGuard::new();
        guard.set("FORM_MAIL_PATTERN", "(unclosed");

        match Config::from_env() {
            Err(ConfigError::InvalidPattern(err)) => assert_eq!(err.field, FormField::Mail),
            other => panic!("Expected InvalidPattern error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_zero_body_limit() {
        let mut guard = EnvGuard::new();
        guard.set("FORM_MAX_BODY_BYTES", "0");

        let result = Config::from_env();
        assert!(
            matches!(result, Err(ConfigError::InvalidValue { ref var, .. }) if var == "FORM_MAX_BODY_BYTES"),
            "Config should reject a zero body limit"
        );
    }

    #[test]
    #[serial]
    fn test_parse_env_usize_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_USIZE_INVALID", "not-a-number");

        let result = Config::parse_env_usize("TEST_USIZE_INVALID", 10);
        assert!(result.is_err());

        let result = Config::parse_env_usize("NONEXISTENT_FORM_VAR", 10);
        assert_eq!(result.unwrap(), 10);
    }
}
