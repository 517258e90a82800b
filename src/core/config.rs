//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars. (The only CLI flag, `--config`,
//! picks the file; it never overrides a value.)
//!
//! Config lives at `~/.naiken/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::record::{AGE_RANGE, FLOOR_RANGE, RATING_RANGE};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NaikenConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub form: FormConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Currency symbol shown before rent amounts.
    pub currency: Option<String>,
}

/// Default field values the entry form resets to after a successful add.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FormConfig {
    pub rent: Option<u32>,
    pub station_min: Option<u32>,
    pub floor: Option<i64>,
    pub age: Option<i64>,
    pub sunlight: Option<i64>,
    pub noise: Option<i64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CURRENCY: &str = "¥";
pub const DEFAULT_RENT: u32 = 80_000;
pub const DEFAULT_STATION_MIN: u32 = 5;
pub const DEFAULT_FLOOR: i32 = 3;
pub const DEFAULT_AGE: u32 = 10;
pub const DEFAULT_SUNLIGHT: u8 = 7;
pub const DEFAULT_NOISE: u8 = 3;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Concrete form defaults after resolution, clamped to the field ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormDefaults {
    pub rent: u32,
    pub station_min: u32,
    pub floor: i32,
    pub age: u32,
    pub sunlight: u8,
    pub noise: u8,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            rent: DEFAULT_RENT,
            station_min: DEFAULT_STATION_MIN,
            floor: DEFAULT_FLOOR,
            age: DEFAULT_AGE,
            sunlight: DEFAULT_SUNLIGHT,
            noise: DEFAULT_NOISE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub currency: String,
    pub defaults: FormDefaults,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            defaults: FormDefaults::default(),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.naiken/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".naiken").join("config.toml"))
}

/// Load config from `path_override`, or from `~/.naiken/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NaikenConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(path_override: Option<&Path>) -> Result<NaikenConfig, ConfigError> {
    let path = match path_override.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(NaikenConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(NaikenConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: NaikenConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# naiken Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars.

# [general]
# currency = "¥"                # Symbol shown before rent amounts

# Default field values the form resets to after each successful add.
# [form]
# rent = 80000
# station_min = 5
# floor = 3                     # 1-20
# age = 10                      # 0-50
# sunlight = 7                  # 1-10
# noise = 3                     # 1-10, higher = noisier
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
///
/// Configured form defaults are clamped to the field ranges so a stray
/// value in the file can never seed the form with out-of-range input.
pub fn resolve(config: &NaikenConfig) -> ResolvedConfig {
    // Currency: env → config → default
    let currency = std::env::var("NAIKEN_CURRENCY")
        .ok()
        .or_else(|| config.general.currency.clone())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    let defaults = FormDefaults {
        rent: config.form.rent.unwrap_or(DEFAULT_RENT),
        station_min: config.form.station_min.unwrap_or(DEFAULT_STATION_MIN),
        floor: clamp_to(config.form.floor, FLOOR_RANGE, DEFAULT_FLOOR.into()) as i32,
        age: clamp_to(config.form.age, AGE_RANGE, DEFAULT_AGE.into()) as u32,
        sunlight: clamp_to(config.form.sunlight, RATING_RANGE, DEFAULT_SUNLIGHT.into()) as u8,
        noise: clamp_to(config.form.noise, RATING_RANGE, DEFAULT_NOISE.into()) as u8,
    };

    ResolvedConfig { currency, defaults }
}

fn clamp_to(value: Option<i64>, range: std::ops::RangeInclusive<i64>, default: i64) -> i64 {
    value.unwrap_or(default).clamp(*range.start(), *range.end())
}
