use crate::server::error::config::ConfigError;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SITE_NAME: &str = "mimir";

#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub site_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("SERVER_PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvValue {
                var: "SERVER_PORT".to_string(),
                reason: format!("expected a port number, got {:?}", value),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            host: std::env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
            site_name: std::env::var("SITE_NAME").unwrap_or_else(|_| DEFAULT_SITE_NAME.to_string()),
        })
    }
}
