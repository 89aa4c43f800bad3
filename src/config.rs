use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            match_threshold: default_match_threshold(),
        }
    }
}

fn default_match_threshold() -> f64 { 70.0 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_same_category_weight")]
    pub same_category: f64,
    #[serde(default = "default_related_category_weight")]
    pub related_category: f64,
    #[serde(default = "default_level_scale")]
    pub level_scale: f64,
    #[serde(default = "default_complementary_type_weight")]
    pub complementary_type: f64,
    #[serde(default = "default_recency_weight")]
    pub recency: f64,
    #[serde(default = "default_preferred_category_weight")]
    pub preferred_category: f64,
    #[serde(default = "default_preferred_level_weight")]
    pub preferred_level: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            same_category: default_same_category_weight(),
            related_category: default_related_category_weight(),
            level_scale: default_level_scale(),
            complementary_type: default_complementary_type_weight(),
            recency: default_recency_weight(),
            preferred_category: default_preferred_category_weight(),
            preferred_level: default_preferred_level_weight(),
        }
    }
}

impl From<WeightsConfig> for ScoringWeights {
    fn from(cfg: WeightsConfig) -> Self {
        Self {
            same_category: cfg.same_category,
            related_category: cfg.related_category,
            level_scale: cfg.level_scale,
            complementary_type: cfg.complementary_type,
            recency: cfg.recency,
            preferred_category: cfg.preferred_category,
            preferred_level: cfg.preferred_level,
        }
    }
}

fn default_same_category_weight() -> f64 { 40.0 }
fn default_related_category_weight() -> f64 { 25.0 }
fn default_level_scale() -> f64 { 0.3 }
fn default_complementary_type_weight() -> f64 { 20.0 }
fn default_recency_weight() -> f64 { 10.0 }
fn default_preferred_category_weight() -> f64 { 15.0 }
fn default_preferred_level_weight() -> f64 { 10.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SKILLSWAP__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g. SKILLSWAP__MATCHING__MATCH_THRESHOLD -> matching.match_threshold
            .add_source(
                Environment::with_prefix("SKILLSWAP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SKILLSWAP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
