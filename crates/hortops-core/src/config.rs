use crate::app_config::{AppConfig, Environment};
use crate::dosage::MixSettings;
use crate::ConfigError;

const SPRAY_VOLUME_VAR: &str = "HORTOPS_SPRAY_VOLUME_GAL_PER_1000_SQFT";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// development config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("HORTOPS_ENV", "development"))?;

    let bind_addr = or_default("HORTOPS_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("HORTOPS_BIND_ADDR", e.to_string()))?;

    let log_level = or_default("HORTOPS_LOG_LEVEL", "info");
    let catalog_path = PathBuf::from(or_default(
        "HORTOPS_CATALOG_PATH",
        "./config/products.yaml",
    ));

    let mix_settings = match lookup(SPRAY_VOLUME_VAR) {
        Ok(raw) => {
            let volume = raw
                .trim()
                .parse::<f64>()
                .map_err(|e| invalid(SPRAY_VOLUME_VAR, e.to_string()))?;
            MixSettings::new(volume).map_err(|e| invalid(SPRAY_VOLUME_VAR, e.to_string()))?
        }
        Err(_) => MixSettings::default(),
    };

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        catalog_path,
        mix_settings,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "HORTOPS_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
