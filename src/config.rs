use config::{Config, Environment, File};
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Base URL the console falls back to when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3334";

const DEFAULT_API_PORT: u16 = 3334;

/// Loads configuration from a given config file or environment variables.
///
/// Sources are layered: built-in defaults, then the file (if given), then
/// environment variables with the `CANOPY` prefix.
pub fn load_config(config_file_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    // Load .env file if it exists, ignore if not present
    dotenv().ok();

    let mut settings = Config::builder().add_source(Config::try_from(&AppConfig::default())?);

    if let Some(path) = config_file_path {
        settings = settings.add_source(File::from(path).required(true));
    }

    settings = settings.add_source(Environment::with_prefix("CANOPY").separator("__"));

    let app_config = settings.build()?.try_deserialize::<AppConfig>()?;

    Ok(app_config)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub server: ServerConfig,
    pub wallet: WalletConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the provider wallet API the console talks to.
    pub base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_API_PORT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConfig {
    pub address: String,
    pub chain_id: String,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            address: "jkl1devwallet".to_string(),
            chain_id: "lupulella-2".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Git commit the binary was built from, stamped in at build time.
pub fn commit() -> &'static str {
    option_env!("CANOPY_COMMIT").unwrap_or("N/A")
}
