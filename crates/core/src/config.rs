use std::env;
use std::fs;
use std::path::PathBuf;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::suggestions::{DEFAULT_COMPLEMENTARY_COUNT, NEGLECT_THRESHOLD_DAYS};
use crate::weather::WeatherRules;

const DEFAULT_CONFIG_FILE: &str = "rewear.toml";
const DEFAULT_INFERENCE_URL: &str = "http://localhost:8575";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub suggestion: SuggestionConfig,
    pub weather: WeatherRules,
    pub inference: InferenceConfig,
    pub logging: LoggingConfig,
}

/// Engine tuning knobs. Defaults mirror the module constants in
/// `suggestions`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    pub neglect_threshold_days: i64,
    pub complementary_count: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            neglect_threshold_days: NEGLECT_THRESHOLD_DAYS,
            complementary_count: DEFAULT_COMPLEMENTARY_COUNT,
        }
    }
}

#[derive(Clone, Debug)]
pub struct InferenceConfig {
    pub base_url: String,
    pub api_key: Option<SecretString>,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    suggestion: SuggestionConfig,
    weather: WeatherRules,
    inference: RawInferenceConfig,
    logging: RawLoggingConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
struct RawInferenceConfig {
    base_url: String,
    api_key: Option<String>,
    timeout_secs: u64,
}

impl Default for RawInferenceConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_INFERENCE_URL.to_owned(), api_key: None, timeout_secs: 20 }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
struct RawLoggingConfig {
    level: String,
    format: LogFormat,
}

impl Default for RawLoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), format: LogFormat::Compact }
    }
}

impl AppConfig {
    /// Loads configuration from an optional TOML file plus `REWEAR_*`
    /// environment overrides. Every field has a working default: no file and
    /// no environment yields a valid configuration.
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let path = options
            .config_path
            .or_else(|| env::var("REWEAR_CONFIG").ok().map(PathBuf::from))
            .or_else(|| {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                default.exists().then_some(default)
            });

        let mut raw = match path {
            Some(path) if path.exists() => {
                let contents = fs::read_to_string(&path)
                    .map_err(|source| ConfigError::ReadFile { path: path.clone(), source })?;
                toml::from_str(&contents)
                    .map_err(|source| ConfigError::ParseFile { path, source })?
            }
            Some(path) if options.require_file => return Err(ConfigError::MissingConfigFile(path)),
            _ => RawConfig::default(),
        };

        apply_env_overrides(&mut raw)?;
        Self::from_raw(raw)
    }

    /// Parses a TOML document directly; used by tests and the config
    /// inspection command.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let mut raw: RawConfig = toml::from_str(contents).map_err(|source| {
            ConfigError::ParseFile { path: PathBuf::from("<inline>"), source }
        })?;
        apply_env_overrides(&mut raw)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let config = Self {
            suggestion: raw.suggestion,
            weather: raw.weather,
            inference: InferenceConfig {
                base_url: raw.inference.base_url,
                api_key: raw.inference.api_key.map(SecretString::from),
                timeout_secs: raw.inference.timeout_secs,
            },
            logging: LoggingConfig { level: raw.logging.level, format: raw.logging.format },
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.suggestion.neglect_threshold_days < 1 {
            return Err(ConfigError::Validation(
                "suggestion.neglect_threshold_days must be at least 1".to_owned(),
            ));
        }
        if self.suggestion.complementary_count < 1 {
            return Err(ConfigError::Validation(
                "suggestion.complementary_count must be at least 1".to_owned(),
            ));
        }
        if self.weather.cold_below >= self.weather.warm_above
            || self.weather.warm_above >= self.weather.hot_above
        {
            return Err(ConfigError::Validation(
                "weather thresholds must be ordered: cold_below < warm_above < hot_above"
                    .to_owned(),
            ));
        }
        if self.inference.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "inference.timeout_secs must be at least 1".to_owned(),
            ));
        }
        if self.inference.base_url.trim().is_empty() {
            return Err(ConfigError::Validation("inference.base_url must not be empty".to_owned()));
        }
        Ok(())
    }
}

fn apply_env_overrides(raw: &mut RawConfig) -> Result<(), ConfigError> {
    if let Some(value) = env_override("REWEAR_NEGLECT_THRESHOLD_DAYS") {
        raw.suggestion.neglect_threshold_days =
            value.parse().map_err(|_| ConfigError::InvalidEnvOverride {
                key: "REWEAR_NEGLECT_THRESHOLD_DAYS".to_owned(),
                value,
            })?;
    }
    if let Some(value) = env_override("REWEAR_COMPLEMENTARY_COUNT") {
        raw.suggestion.complementary_count =
            value.parse().map_err(|_| ConfigError::InvalidEnvOverride {
                key: "REWEAR_COMPLEMENTARY_COUNT".to_owned(),
                value,
            })?;
    }
    if let Some(value) = env_override("REWEAR_INFERENCE_URL") {
        raw.inference.base_url = value;
    }
    if let Some(value) = env_override("REWEAR_INFERENCE_API_KEY") {
        raw.inference.api_key = Some(value);
    }
    if let Some(value) = env_override("REWEAR_INFERENCE_TIMEOUT_SECS") {
        raw.inference.timeout_secs =
            value.parse().map_err(|_| ConfigError::InvalidEnvOverride {
                key: "REWEAR_INFERENCE_TIMEOUT_SECS".to_owned(),
                value,
            })?;
    }
    if let Some(value) = env_override("REWEAR_LOG_LEVEL") {
        raw.logging.level = value;
    }
    if let Some(value) = env_override("REWEAR_LOG_FORMAT") {
        raw.logging.format = match value.as_str() {
            "compact" => LogFormat::Compact,
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            _ => {
                return Err(ConfigError::InvalidEnvOverride {
                    key: "REWEAR_LOG_FORMAT".to_owned(),
                    value,
                })
            }
        };
    }
    Ok(())
}

fn env_override(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
