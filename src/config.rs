// src/config.rs
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not a valid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Where the comps provider lives and how long we wait for it.
#[derive(Debug, Clone)]
pub struct CompsApiConfig {
    pub url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct MailRelayConfig {
    pub url: String,
    pub api_key: Option<String>,
}

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub db_path: String,
    pub schema_path: String,
    pub max_workers: usize,
    pub comps: Option<CompsApiConfig>,
    pub mail_relay: Option<MailRelayConfig>,
    /// Admin dashboard is disabled when unset.
    pub admin_token: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            db_path: "rent_tools.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            max_workers: 8,
            comps: None,
            mail_relay: None,
            admin_token: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let addr = match get("RENT_TOOLS_ADDR") {
            Some(v) => parse_value("RENT_TOOLS_ADDR", &v)?,
            None => defaults.addr,
        };

        let max_workers = match get("RENT_TOOLS_WORKERS") {
            Some(v) => parse_value::<usize>("RENT_TOOLS_WORKERS", &v)?,
            None => defaults.max_workers,
        };
        if max_workers == 0 {
            return Err(ConfigError::Invalid {
                name: "RENT_TOOLS_WORKERS",
                value: "0".into(),
            });
        }

        let comps = match get("COMPS_API_URL") {
            Some(url) => {
                let secs = match get("COMPS_TIMEOUT_SECS") {
                    Some(v) => parse_value::<u64>("COMPS_TIMEOUT_SECS", &v)?,
                    None => 8,
                };
                Some(CompsApiConfig {
                    url,
                    api_key: get("COMPS_API_KEY"),
                    timeout: Duration::from_secs(secs),
                })
            }
            None => None,
        };

        let mail_relay = get("MAIL_RELAY_URL").map(|url| MailRelayConfig {
            url,
            api_key: get("MAIL_RELAY_KEY"),
        });

        Ok(Self {
            addr,
            db_path: get("RENT_TOOLS_DB").unwrap_or(defaults.db_path),
            schema_path: get("RENT_TOOLS_SCHEMA").unwrap_or(defaults.schema_path),
            max_workers,
            comps,
            mail_relay,
            admin_token: get("ADMIN_TOKEN"),
        })
    }
}

fn parse_value<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid {
        name,
        value: value.to_string(),
    })
}
