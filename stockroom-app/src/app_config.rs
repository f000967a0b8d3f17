use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use stockroom_catalog::DEFAULT_DISCOUNT;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Shared discount rate for the inventory
    #[serde(default = "default_discount")]
    pub discount: f64,
    /// CSV file to bulk-load at startup
    #[serde(default)]
    pub items_csv: Option<PathBuf>,
}

fn default_discount() -> f64 { DEFAULT_DISCOUNT }

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            discount: default_discount(),
            items_csv: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = config::Config::builder()
            // Shipped defaults
            .add_source(config::File::with_name("config/default").required(false))
            // Per-environment overrides, e.g. config/test.toml
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `STOCKROOM__CATALOG__DISCOUNT=0.3`
            .add_source(config::Environment::with_prefix("STOCKROOM").separator("__"));

        Self::from_builder(builder)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, config::ConfigError> {
        builder
            .set_default("catalog.discount", DEFAULT_DISCOUNT)?
            .build()?
            .try_deserialize()
    }
}
