pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
pub use crate::config::{toml_config::TomlConfig, Settings};

pub use crate::core::{
    aggregator::{aggregate_by_gender, GenderReportService},
    engine::ReportEngine,
    fetcher::ApiOwnerSource,
};
pub use crate::domain::model::{Owner, Pet, PetFilter, PetType, ReportEntry};
pub use crate::domain::ports::{ConfigProvider, OwnerSource, ReportProducer, ReportSink};
pub use crate::report::{ConsoleRenderer, OutputFormat};
pub use crate::utils::error::{PetReportError, Result};
