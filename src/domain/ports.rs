use crate::domain::model::{Owner, PetFilter, ReportEntry};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn default_pet_type_filter(&self) -> Option<&str>;
}

/// Where owner records come from.
#[async_trait]
pub trait OwnerSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Owner>>;
}

#[async_trait]
pub trait ReportProducer: Send + Sync {
    async fn produce(&self, filter: &PetFilter) -> Result<Vec<ReportEntry>>;
}

pub trait ReportSink {
    fn render(&mut self, report: &[ReportEntry]) -> Result<()>;
}
