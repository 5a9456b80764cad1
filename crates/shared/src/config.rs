//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Municipal restriction table and allowance rates.
    #[serde(default)]
    pub restrictions: RestrictionConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Town classification by restriction level, plus the daily allowance per m².
///
/// Defaults to the Hessequa municipality table.
#[derive(Debug, Clone, Deserialize)]
pub struct RestrictionConfig {
    /// Towns under Level 2 restrictions.
    #[serde(default = "default_level_2_towns")]
    pub level_2_towns: Vec<String>,
    /// Towns under Level 3 restrictions.
    #[serde(default = "default_level_3_towns")]
    pub level_3_towns: Vec<String>,
    /// Litres per m² per day allowed under Level 2.
    #[serde(default = "default_level_2_rate")]
    pub level_2_rate: Decimal,
    /// Litres per m² per day allowed under Level 3.
    #[serde(default = "default_level_3_rate")]
    pub level_3_rate: Decimal,
}

impl Default for RestrictionConfig {
    fn default() -> Self {
        Self {
            level_2_towns: default_level_2_towns(),
            level_3_towns: default_level_3_towns(),
            level_2_rate: default_level_2_rate(),
            level_3_rate: default_level_3_rate(),
        }
    }
}

fn default_level_2_towns() -> Vec<String> {
    ["GOURITSMOND", "STILL BAY", "MELKHOUTFONTEIN", "RIVERSDALE"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_level_3_towns() -> Vec<String> {
    [
        "ALBERTINIA",
        "HEIDELBERG",
        "SLANGRIVIER",
        "JONGENSFONTEIN",
        "WITSAND",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_level_2_rate() -> Decimal {
    Decimal::from(5)
}

fn default_level_3_rate() -> Decimal {
    Decimal::from(3)
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("WATERSAVER")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}
