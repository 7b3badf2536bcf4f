use serde::Deserialize;
use sendero_catalog::PricingConfig;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    pub agent: AgentConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// JSON file holding every reservation made so far
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

fn default_store_path() -> PathBuf { PathBuf::from("trip.json") }

impl Default for StoreConfig {
    fn default() -> Self {
        Self { path: default_store_path() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AgentConfig {
    pub url: String,
    pub api_key: Option<String>,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_timeout() -> u64 { 120 }
fn default_country() -> String { "Bolivia".to_string() }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides are optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `SENDERO__STORE__PATH=/var/lib/sendero/trip.json`
            .add_source(config::Environment::with_prefix("SENDERO").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
