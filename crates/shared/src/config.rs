//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Demo data configuration.
    #[serde(default)]
    pub demo: DemoConfig,
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

/// Demo data configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DemoConfig {
    /// When true, the server seeds a small sample data set at startup.
    #[serde(default)]
    pub seed: bool,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Layering order: `config/default`, then `config/{RUN_MODE}`, then
    /// `DIVVY`-prefixed environment variables (e.g. `DIVVY__SERVER__PORT`).
    /// Every field has a default, so a bare environment still boots.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("DIVVY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
