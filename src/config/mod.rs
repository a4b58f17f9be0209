#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::report::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use std::time::Duration;
use self::toml_config::TomlConfig;

pub const DEFAULT_CONFIG_PATH: &str = "pet-report.toml";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Resolved, read-only settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_endpoint: String,
    pub timeout_seconds: u64,
    pub default_pet_type_filter: Option<String>,
    pub output_format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_endpoint: String::new(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            default_pet_type_filter: None,
            output_format: OutputFormat::Text,
        }
    }
}

impl From<TomlConfig> for Settings {
    fn from(config: TomlConfig) -> Self {
        Self {
            api_endpoint: config.source.endpoint,
            timeout_seconds: config
                .source
                .timeout_seconds
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            default_pet_type_filter: config.settings.default_pet_type_filter,
            output_format: config.output.format.unwrap_or_default(),
        }
    }
}

impl ConfigProvider for Settings {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn default_pet_type_filter(&self) -> Option<&str> {
        self.default_pet_type_filter.as_deref()
    }
}

impl Validate for Settings {
    // 空端點留給 fetcher 回報 ConfigError
    fn validate(&self) -> Result<()> {
        if !self.api_endpoint.trim().is_empty() {
            validate_url("source.endpoint", &self.api_endpoint)?;
        }

        validate_range(
            "source.timeout_seconds",
            self.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;

        Ok(())
    }
}
