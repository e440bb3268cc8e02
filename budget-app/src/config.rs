//! Configuration loading from environment.

use std::env;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE_URL: &str = "sqlite://budget.db?mode=rwc";
const DEFAULT_MONTHLY_BUDGET_LIMIT: f64 = 6000.0;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub log_format: LogFormat,
    /// Monthly expense limit reported by the summary endpoint; an empty
    /// `MONTHLY_BUDGET_LIMIT` turns it off.
    pub monthly_budget_limit: Option<f64>,
    /// OTLP collector endpoint; span export is off when unset.
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("Invalid PORT {:?}: {}", port, e))?,
            None => DEFAULT_PORT,
        };

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => anyhow::bail!("Invalid LOG_FORMAT {:?}: expected text or json", other),
        };

        let monthly_budget_limit = match lookup("MONTHLY_BUDGET_LIMIT") {
            None => Some(DEFAULT_MONTHLY_BUDGET_LIMIT),
            Some(limit) if limit.trim().is_empty() => None,
            Some(limit) => Some(limit.trim().parse::<f64>().map_err(|e| {
                anyhow::anyhow!("Invalid MONTHLY_BUDGET_LIMIT {:?}: {}", limit, e)
            })?),
        };

        let otlp_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|s| !s.is_empty());

        Ok(Self {
            port,
            database_url,
            log_format,
            monthly_budget_limit,
            otlp_endpoint,
        })
    }
}
