use crate::core::{Owner, OwnerSource, Pet, PetFilter, ReportEntry, ReportProducer};
use crate::utils::error::{PetReportError, Result};
use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::panic::{self, AssertUnwindSafe};

/// Groups owners by gender and collects their pets.
///
/// The steps run in a fixed order: owners with a blank gender are dropped, the rest are
/// grouped by the exact gender string, and each group's pets are flattened, narrowed by
/// `filter`, deduplicated on (name, type) and sorted by name. A group whose pets were all
/// filtered out is still reported, with no pets. Entries come back ordered by gender.
pub fn aggregate_by_gender(owners: &[Owner], filter: &PetFilter) -> Vec<ReportEntry> {
    let mut groups: HashMap<&str, Vec<&Owner>> = HashMap::new();
    for owner in owners.iter().filter(|o| !o.gender.trim().is_empty()) {
        groups.entry(owner.gender.as_str()).or_default().push(owner);
    }

    let mut report: Vec<ReportEntry> = groups
        .into_iter()
        .map(|(gender, members)| ReportEntry {
            gender: gender.to_string(),
            pets: collect_pets(&members, filter),
        })
        .collect();

    report.sort_by(|a, b| a.gender.cmp(&b.gender));
    report
}

fn collect_pets(members: &[&Owner], filter: &PetFilter) -> Vec<Pet> {
    let mut seen: HashSet<&Pet> = HashSet::new();
    let mut pets: Vec<Pet> = members
        .iter()
        .flat_map(|owner| owner.pets.iter())
        .filter(|pet| filter.matches(pet))
        .filter(|pet| seen.insert(*pet))
        .cloned()
        .collect();

    // 依名稱排序（序數比較）
    pets.sort_by(|a, b| a.name.cmp(&b.name));
    pets
}

/// Runs `transform` on an already fetched snapshot. A fault inside the transform is
/// logged together with the payload and the filter, and yields an empty report.
fn run_transform<F>(owners: &[Owner], filter: &PetFilter, transform: F) -> Vec<ReportEntry>
where
    F: FnOnce(&[Owner], &PetFilter) -> Vec<ReportEntry>,
{
    match panic::catch_unwind(AssertUnwindSafe(|| transform(owners, filter))) {
        Ok(report) => report,
        Err(payload) => {
            let err = PetReportError::TransformError {
                message: panic_message(payload.as_ref()),
            };
            let snapshot = serde_json::to_string(owners)
                .unwrap_or_else(|e| format!("<unserializable payload: {}>", e));

            tracing::error!(
                error = %err,
                filter = %filter,
                payload = %snapshot,
                "❌ Error grouping and filtering pet owners"
            );
            Vec::new()
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown fault".to_string()
    }
}

/// Produces the gender report from an [`OwnerSource`].
///
/// Fetch failures are returned untouched; transform faults degrade to an empty report.
pub struct GenderReportService<S: OwnerSource> {
    source: S,
}

impl<S: OwnerSource> GenderReportService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The fail-soft transform on a snapshot that was already fetched.
    pub fn produce_from(&self, owners: &[Owner], filter: &PetFilter) -> Vec<ReportEntry> {
        run_transform(owners, filter, aggregate_by_gender)
    }
}

#[async_trait::async_trait]
impl<S: OwnerSource> ReportProducer for GenderReportService<S> {
    async fn produce(&self, filter: &PetFilter) -> Result<Vec<ReportEntry>> {
        let owners = self.source.fetch_all().await?;
        tracing::debug!("Grouping {} owners (filter: {})", owners.len(), filter);

        Ok(self.produce_from(&owners, filter))
    }
}
