use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::info;
use validator::{Validate, ValidationError};

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const DEFAULT_PORT: u16 = 8080;
const CONFIG_DIR: &str = "config";
const DEFAULT_SEED_AREAS: usize = 5;
const DEFAULT_SEED_ZONES_PER_AREA: usize = 4;
const DEFAULT_SEED_BINS_PER_ZONE: usize = 50;

/// Parameters for the startup seed generator.
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SeedConfig {
    /// Number of areas to generate (area types cycle when above five)
    #[serde(default = "default_seed_areas")]
    pub areas: usize,

    /// Zones generated per area
    #[serde(default = "default_seed_zones_per_area")]
    pub zones_per_area: usize,

    /// Approximate bins generated per zone (actual counts jitter slightly)
    #[serde(default = "default_seed_bins_per_zone")]
    pub bins_per_zone: usize,

    /// Fixed RNG seed for a reproducible topology; random when unset
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            areas: DEFAULT_SEED_AREAS,
            zones_per_area: DEFAULT_SEED_ZONES_PER_AREA,
            bins_per_zone: DEFAULT_SEED_BINS_PER_ZONE,
            rng_seed: None,
        }
    }
}

/// Application configuration with validation.
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Server host address
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Application environment
    pub environment: String,

    /// Logging level
    #[serde(default = "default_log_level")]
    #[validate(custom = "validate_log_level")]
    pub log_level: String,

    /// Log in JSON format (structured logging)
    #[serde(default)]
    pub log_json: bool,

    /// CORS: comma-separated list of allowed origins (production)
    #[serde(default)]
    pub cors_allowed_origins: Option<String>,

    /// Allow permissive CORS fallback outside development
    #[serde(default)]
    pub cors_allow_any_origin: bool,

    /// Seed generator parameters
    #[serde(default)]
    #[validate]
    pub seed: SeedConfig,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_seed_areas() -> usize {
    DEFAULT_SEED_AREAS
}

fn default_seed_zones_per_area() -> usize {
    DEFAULT_SEED_ZONES_PER_AREA
}

fn default_seed_bins_per_zone() -> usize {
    DEFAULT_SEED_BINS_PER_ZONE
}

fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    match level.to_ascii_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ValidationError::new("invalid_log_level")),
    }
}

impl AppConfig {
    /// Minimal constructor used by tests.
    pub fn new(host: String, port: u16, environment: String) -> Self {
        Self {
            host,
            port,
            environment,
            log_level: default_log_level(),
            log_json: false,
            cors_allowed_origins: None,
            cors_allow_any_origin: false,
            seed: SeedConfig::default(),
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
            || self.environment.eq_ignore_ascii_case("test")
    }

    pub fn should_allow_permissive_cors(&self) -> bool {
        self.is_development() || self.cors_allow_any_origin
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }
}

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ConfigError),

    #[error("configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Load configuration from defaults, `config/` files, and `APP__`-prefixed
/// environment variables (e.g. `APP__PORT=9090`, `APP__SEED__RNG_SEED=7`).
pub fn load_config() -> Result<AppConfig, AppConfigError> {
    let run_env = env::var("RUN_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENV.to_string());
    info!("Loading configuration for environment: {}", run_env);

    if !Path::new(CONFIG_DIR).exists() {
        info!(
            "Config directory '{}' not found; relying on built-in defaults and environment variables",
            CONFIG_DIR
        );
    }

    let config = Config::builder()
        .set_default("host", "0.0.0.0")?
        .set_default("port", DEFAULT_PORT as i64)?
        .set_default("environment", DEFAULT_ENV)?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("log_json", false)?
        .add_source(File::with_name(&format!("{CONFIG_DIR}/default")).required(false))
        .add_source(File::with_name(&format!("{CONFIG_DIR}/{run_env}")).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;
    app_config.validate()?;
    Ok(app_config)
}

/// Initialize the tracing subscriber. `RUST_LOG` overrides the configured
/// level when set and non-empty.
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::fmt;

    let default_directive = format!("binview_api={level},tower_http=debug");
    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    if json {
        let _ = fmt().with_env_filter(filter_directive).json().try_init();
    } else {
        let _ = fmt().with_env_filter(filter_directive).try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_runnable() {
        let cfg = AppConfig::new("127.0.0.1".into(), 8080, "test".into());
        assert!(cfg.is_development());
        assert!(cfg.should_allow_permissive_cors());
        assert_eq!(cfg.seed.areas, 5);
        assert_eq!(cfg.seed.zones_per_area, 4);
        assert_eq!(cfg.seed.bins_per_zone, 50);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn production_without_origins_is_not_permissive() {
        let cfg = AppConfig::new("0.0.0.0".into(), 8080, "production".into());
        assert!(!cfg.should_allow_permissive_cors());
    }

    #[test]
    fn bogus_log_level_fails_validation() {
        let mut cfg = AppConfig::new("127.0.0.1".into(), 8080, "test".into());
        cfg.log_level = "verbose".into();
        assert!(cfg.validate().is_err());
    }
}
