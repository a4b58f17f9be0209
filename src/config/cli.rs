use crate::config::toml_config::TomlConfig;
use crate::config::{Settings, DEFAULT_CONFIG_PATH};
use crate::core::{ConfigProvider, PetFilter};
use crate::report::OutputFormat;
use crate::utils::error::Result;
use clap::Parser;
use std::path::Path;

#[derive(Debug, Clone, Parser)]
#[command(name = "pet-report")]
#[command(about = "Lists pets grouped by their owner's gender")]
pub struct CliConfig {
    /// Pet type to report on (Cat, Dog or Fish); anything else falls back to the configured default
    #[arg(value_name = "PET_TYPE")]
    pub pet_type: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override source.endpoint from the configuration file
    #[arg(long)]
    pub api_endpoint: Option<String>,

    /// Override source.timeout_seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// Loads the configuration file and applies command-line overrides.
    ///
    /// A missing file at the default path is not an error; a missing file the user named is.
    pub fn load_settings(&self) -> Result<Settings> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                tracing::info!("📁 Loading configuration from: {}", DEFAULT_CONFIG_PATH);
                TomlConfig::from_file(DEFAULT_CONFIG_PATH)?
            }
            None => {
                tracing::debug!("No configuration file, using built-in defaults");
                TomlConfig::default()
            }
        };

        Ok(self.apply_overrides(Settings::from(file_config)))
    }

    // 命令列參數優先於設定檔
    fn apply_overrides(&self, mut settings: Settings) -> Settings {
        if let Some(endpoint) = &self.api_endpoint {
            settings.api_endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_seconds = timeout;
        }
        if let Some(format) = self.format {
            settings.output_format = format;
        }
        settings
    }

    pub fn pet_filter<C: ConfigProvider>(&self, config: &C) -> PetFilter {
        PetFilter::resolve(self.pet_type.as_deref(), config.default_pet_type_filter())
    }
}
