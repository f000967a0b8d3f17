pub mod app_config;
pub mod demo;

pub use app_config::{CatalogConfig, Config};
