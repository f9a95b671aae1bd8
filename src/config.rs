//! Application configuration loaded from environment variables.

use serde::Deserialize;
use url::Url;

/// Default downstream endpoint, matching service-b's hello route.
const DEFAULT_SERVICE_B_URL: &str = "http://localhost:8081/service-b/hello";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Downstream Service ===
    /// Full URL of the service-b hello endpoint.
    #[serde(default = "default_service_b_url")]
    pub service_b_url: String,

    // === Server Configuration ===
    /// HTTP server port for the passthrough/health/metrics endpoints.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_service_b_url() -> String {
    DEFAULT_SERVICE_B_URL.to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.service_b_url.is_empty() {
            return Err("SERVICE_B_URL must not be empty".to_string());
        }

        let url = Url::parse(&self.service_b_url)
            .map_err(|e| format!("SERVICE_B_URL is not a valid URL: {e}"))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(format!(
                "SERVICE_B_URL must use http or https, got {}",
                url.scheme()
            ));
        }

        if self.port == 0 {
            return Err("PORT must be non-zero".to_string());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_b_url: default_service_b_url(),
            port: default_port(),
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_values_are_sensible() {
        let config = Config::default();
        assert_eq!(config.service_b_url, "http://localhost:8081/service-b/hello");
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(!config.verbose);
    }

    #[test]
    fn defaults_pass_validation() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_url() {
        let config = Config {
            service_b_url: String::new(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_unparseable_url() {
        let config = Config {
            service_b_url: "not a url".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_http_scheme() {
        let config = Config {
            service_b_url: "ftp://localhost:8081/service-b/hello".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_port() {
        let config = Config {
            port: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
