use crate::core::{PetFilter, ReportProducer, ReportSink};
use crate::utils::error::Result;

pub struct ReportEngine<P: ReportProducer, K: ReportSink> {
    producer: P,
    sink: K,
}

impl<P: ReportProducer, K: ReportSink> ReportEngine<P, K> {
    pub fn new(producer: P, sink: K) -> Self {
        Self { producer, sink }
    }

    /// Produces the report and renders it. Returns the number of gender groups rendered.
    pub async fn run(&mut self, filter: &PetFilter) -> Result<usize> {
        tracing::info!("🚀 Building pet report (filter: {})", filter);

        let report = self.producer.produce(filter).await?;
        tracing::info!("📊 Report contains {} gender groups", report.len());

        self.sink.render(&report)?;
        tracing::debug!("Report rendered");

        Ok(report.len())
    }

    pub fn into_sink(self) -> K {
        self.sink
    }
}
