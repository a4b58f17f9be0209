pub mod aggregator;
pub mod engine;
pub mod fetcher;

pub use crate::domain::model::{Owner, Pet, PetFilter, PetType, ReportEntry};
pub use crate::domain::ports::{ConfigProvider, OwnerSource, ReportProducer, ReportSink};
pub use crate::utils::error::Result;
