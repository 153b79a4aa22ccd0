//! Core of the horticultural operations tool: the product catalog, the
//! tank-mix and granular dosage calculators, and their result formatters.

pub mod app_config;
pub mod catalog;
pub mod config;
pub mod dosage;
pub mod error;
pub mod products;

pub use app_config::{AppConfig, Environment};
pub use catalog::{load_catalog, Catalog, ChemicalProduct, ProductCategory};
pub use config::{load_app_config, load_app_config_from_env};
pub use dosage::{
    calculate_granular, calculate_mix, format_granular_results_html,
    format_granular_results_text, format_mix_results_html, format_mix_results_text,
    GranularRate, GranularResult, MixItem, MixResult, MixSettings,
};
pub use error::{CalcError, ConfigError};
pub use products::ProductRate;
