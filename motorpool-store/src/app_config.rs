use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub business_rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Backend REST API that owns ride requests.
#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// Endpoint listing pending reservations. Without it the service starts
    /// with an empty in-memory source.
    pub pending_url: Option<String>,
    pub api_token: Option<String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            pending_url: None,
            api_token: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

fn default_timeout_seconds() -> u64 { 10 }

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    /// Hours a vehicle stays blocked after a pending reservation ends.
    #[serde(default = "default_return_buffer_hours")]
    pub return_buffer_hours: i64,
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            return_buffer_hours: default_return_buffer_hours(),
        }
    }
}

fn default_return_buffer_hours() -> i64 { motorpool_core::RETURN_BUFFER_HOURS }

pub const MAX_RETURN_BUFFER_HOURS: i64 = 24;

impl BusinessRules {
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if !(0..=MAX_RETURN_BUFFER_HOURS).contains(&self.return_buffer_hours) {
            return Err(config::ConfigError::Message(format!(
                "business_rules.return_buffer_hours must be between 0 and {}, got {}",
                MAX_RETURN_BUFFER_HOURS, self.return_buffer_hours
            )));
        }
        Ok(())
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Optional per-environment overrides
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `MOTORPOOL__SERVER__PORT=8081`
            .add_source(config::Environment::with_prefix("MOTORPOOL").separator("__"))
            .build()?;

        let config: Self = s.try_deserialize()?;
        config.business_rules.validate()?;
        Ok(config)
    }

    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        let config: Self = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.business_rules.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply() {
        let config = Config::from_toml("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.upstream.pending_url, None);
        assert_eq!(config.upstream.timeout_seconds, 10);
        assert_eq!(config.business_rules.return_buffer_hours, 2);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            r#"
            [server]
            port = 9000

            [upstream]
            pending_url = "http://backend.local/api/rides/pending"
            api_token = "secret"
            timeout_seconds = 3

            [business_rules]
            return_buffer_hours = 3
            "#,
        )
        .unwrap();
        assert_eq!(
            config.upstream.pending_url.as_deref(),
            Some("http://backend.local/api/rides/pending")
        );
        assert_eq!(config.upstream.timeout_seconds, 3);
        assert_eq!(config.business_rules.return_buffer_hours, 3);
    }

    #[test]
    fn test_out_of_range_buffer_is_rejected() {
        for hours in ["-2", "25", "922337203685477580"] {
            let source = format!("[server]\nport = 8080\n[business_rules]\nreturn_buffer_hours = {}\n", hours);
            assert!(matches!(
                Config::from_toml(&source),
                Err(config::ConfigError::Message(_))
            ));
        }

        let edge = Config::from_toml("[server]\nport = 8080\n[business_rules]\nreturn_buffer_hours = 24\n").unwrap();
        assert_eq!(edge.business_rules.return_buffer_hours, 24);
    }
}
