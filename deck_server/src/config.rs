//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use std::{fmt::Display, net::SocketAddr, str::FromStr};

/// Default bind address when neither `--bind` nor `SERVER_BIND` is given
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Fixed shuffle seed; `None` shuffles from the thread RNG
    pub shuffle_seed: Option<u64>,
    /// Prometheus exporter address; `None` disables the exporter
    pub metrics_bind: Option<SocketAddr>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// CLI overrides win over the environment.
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Bind address from `--bind`
    /// * `shuffle_seed_override` - Seed from `--shuffle-seed`
    /// * `metrics_bind_override` - Exporter address from `--metrics-bind`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a variable is set but does not parse
    pub fn from_env(
        bind_override: Option<SocketAddr>,
        shuffle_seed_override: Option<u64>,
        metrics_bind_override: Option<SocketAddr>,
    ) -> Result<Self, ConfigError> {
        let bind = match bind_override {
            Some(bind) => bind,
            None => parse_optional("SERVER_BIND", std::env::var("SERVER_BIND").ok())?
                .unwrap_or_else(default_bind),
        };

        let shuffle_seed = match shuffle_seed_override {
            Some(seed) => Some(seed),
            None => parse_optional(
                "DECK_SHUFFLE_SEED",
                std::env::var("DECK_SHUFFLE_SEED").ok(),
            )?,
        };

        let metrics_bind = match metrics_bind_override {
            Some(addr) => Some(addr),
            None => parse_optional("METRICS_BIND", std::env::var("METRICS_BIND").ok())?,
        };

        Ok(ServerConfig {
            bind,
            shuffle_seed,
            metrics_bind,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(metrics_bind) = self.metrics_bind {
            if metrics_bind == self.bind {
                return Err(ConfigError::Invalid {
                    var: "METRICS_BIND".to_string(),
                    reason: format!("Must differ from the server bind address ({})", self.bind),
                });
            }

            if metrics_bind.port() == 0 {
                return Err(ConfigError::Invalid {
                    var: "METRICS_BIND".to_string(),
                    reason: "Must use a fixed port so it can be scraped".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

/// Parse an optional raw value; empty strings count as unset.
fn parse_optional<T>(var: &str, raw: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::Invalid {
                var: var.to_string(),
                reason: format!("{value:?} is not valid: {e}"),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(metrics_bind: Option<&str>) -> ServerConfig {
        ServerConfig {
            bind: "127.0.0.1:8080".parse().unwrap(),
            shuffle_seed: None,
            metrics_bind: metrics_bind.map(|addr| addr.parse().unwrap()),
        }
    }

    #[test]
    fn test_default_bind_matches_constant() {
        assert_eq!(default_bind(), DEFAULT_BIND.parse().unwrap());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Invalid {
            var: "SERVER_BIND".to_string(),
            reason: "bad".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("SERVER_BIND"));
        assert!(msg.contains("bad"));
    }

    #[test]
    fn test_parse_optional_unset_and_empty() {
        assert_eq!(parse_optional::<u64>("X", None).unwrap(), None);
        assert_eq!(parse_optional::<u64>("X", Some("  ".to_string())).unwrap(), None);
    }

    #[test]
    fn test_parse_optional_values() {
        assert_eq!(
            parse_optional::<u64>("DECK_SHUFFLE_SEED", Some("42".to_string())).unwrap(),
            Some(42)
        );
        assert_eq!(
            parse_optional::<SocketAddr>("SERVER_BIND", Some("0.0.0.0:9000".to_string()))
                .unwrap(),
            Some("0.0.0.0:9000".parse().unwrap())
        );
    }

    #[test]
    fn test_parse_optional_rejects_garbage() {
        let err = parse_optional::<u64>("DECK_SHUFFLE_SEED", Some("abc".to_string())).unwrap_err();
        assert!(err.to_string().contains("DECK_SHUFFLE_SEED"));
    }

    #[test]
    fn test_from_env_overrides_win() {
        let bind: SocketAddr = "10.0.0.1:1234".parse().unwrap();
        let metrics: SocketAddr = "10.0.0.1:9090".parse().unwrap();
        let config = ServerConfig::from_env(Some(bind), Some(7), Some(metrics)).unwrap();

        assert_eq!(
            config,
            ServerConfig {
                bind,
                shuffle_seed: Some(7),
                metrics_bind: Some(metrics),
            }
        );
    }

    #[test]
    fn test_validate_without_metrics() {
        assert!(config(None).validate().is_ok());
        assert!(config(Some("127.0.0.1:9090")).validate().is_ok());
    }

    #[test]
    fn test_validate_metrics_bind_collision() {
        let err = config(Some("127.0.0.1:8080")).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_validate_metrics_port_zero() {
        let err = config(Some("127.0.0.1:0")).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}
