//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Engine configuration.
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Points engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Prefix for discount adjustment source tags
    /// (the full tag is `<prefix>_<points_type>`).
    #[serde(default = "default_source_tag_prefix")]
    pub source_tag_prefix: String,
    /// Upper bound on points a single redemption request may ask for.
    /// `None` means only the balance and order subtotal cap requests.
    #[serde(default)]
    pub max_points_per_request: Option<u64>,
}

fn default_source_tag_prefix() -> String {
    "userpoints".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            source_tag_prefix: default_source_tag_prefix(),
            max_points_per_request: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("POINTEX").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
        }
    }
}
