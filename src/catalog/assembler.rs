//! Building catalogs from synthetic and decoded data.
//!
//! Sources are fetched and decoded one after another. The decoded catalog is
//! built completely before it is published, and only if at least one entry was
//! decoded; otherwise the current catalog stays in place.

use super::handle::CatalogHandle;
use super::model::{FloatCatalog, FloatEntry, FloatStatus, FloatType, Measurement};
use super::source::{SourceFetcher, SourceSpec};
use super::synthetic;
use crate::data::{ProfileDecode, ProfileRecord};
use crate::geo;
use rand::Rng;

/// Result of one ingestion pass.
#[derive(Debug, Clone, PartialEq)]
pub enum IngestOutcome {
    /// A complete decoded catalog to publish.
    Replaced(FloatCatalog),
    /// Nothing usable was decoded.
    Unchanged,
}

/// Per-source accounting for an ingestion pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Sources tried.
    pub attempted: usize,
    /// Sources that produced at least one entry.
    pub succeeded: usize,
    /// Sources that could not be fetched or yielded nothing.
    pub failed: usize,
    /// Decoded entries across all sources.
    pub entries: usize,
    /// One message per failed source.
    pub failures: Vec<String>,
}

impl IngestReport {
    fn add_failure(&mut self, message: String) {
        self.failed += 1;
        self.failures.push(message);
    }

    /// One-line summary for logs and the status bar.
    pub fn summary(&self) -> String {
        format!(
            "{} of {} sources decoded, {} profiles, {} failed",
            self.succeeded, self.attempted, self.entries, self.failed
        )
    }
}

/// The catalog a session starts with.
pub fn initial_catalog<R: Rng>(target: usize, rng: &mut R) -> FloatCatalog {
    FloatCatalog::synthetic(synthetic::generate(target, rng))
}

/// Turn decoded profile `index` of `float_id` into a catalog entry.
///
/// Missing positions are replaced with random ones inside the basin.
pub fn entry_from_record<R: Rng>(
    float_id: &str,
    index: usize,
    record: ProfileRecord,
    rng: &mut R,
) -> FloatEntry {
    let (random_lat, random_lon) = geo::random_position(rng);
    let lat = record.latitude.unwrap_or(random_lat);
    let lon = record.longitude.unwrap_or(random_lon);

    FloatEntry {
        id: format!("ARGO_{}_{}", float_id, index),
        float_id: float_id.to_string(),
        profile_index: Some(index),
        lat,
        lon,
        last_profile: record.timestamp,
        temperature: Measurement::Series(record.temperature),
        salinity: Measurement::Series(record.salinity),
        pressure: Measurement::Series(record.pressure),
        depth: Measurement::Series(record.depth),
        status: FloatStatus::Active,
        float_type: FloatType::Core,
        bgc: None,
        region: geo::region_name(lat, lon),
        profile_variation: rng.gen::<f64>(),
    }
}

/// Fetch and decode every source in order.
///
/// Per-source failures are logged and counted, never propagated.
pub async fn ingest<F, D, R>(
    sources: &[SourceSpec],
    fetcher: &F,
    decoder: &D,
    rng: &mut R,
) -> (IngestOutcome, IngestReport)
where
    F: SourceFetcher,
    D: ProfileDecode,
    R: Rng + Send,
{
    let mut report = IngestReport::default();
    let mut entries = Vec::new();
    let mut loaded_floats = Vec::new();

    for source in sources {
        report.attempted += 1;

        let buffer = match fetcher.fetch(&source.location).await {
            Ok(buffer) => buffer,
            Err(e) => {
                tracing::warn!(float_id = %source.float_id, error = %e, "skipping source");
                report.add_failure(format!("{}: {}", source.location.display(), e));
                continue;
            },
        };

        let records = decoder.decode(&buffer, &source.float_id);
        if records.is_empty() {
            tracing::warn!(float_id = %source.float_id, "no usable profiles");
            report.add_failure(format!(
                "{}: no usable profiles",
                source.location.display()
            ));
            continue;
        }

        tracing::debug!(
            float_id = %source.float_id,
            profiles = records.len(),
            "decoded source"
        );
        report.succeeded += 1;
        report.entries += records.len();
        loaded_floats.push(source.float_id.clone());
        entries.extend(
            records
                .into_iter()
                .enumerate()
                .map(|(k, record)| entry_from_record(&source.float_id, k, record, rng)),
        );
    }

    if entries.is_empty() {
        (IngestOutcome::Unchanged, report)
    } else {
        (
            IngestOutcome::Replaced(FloatCatalog::decoded(entries, loaded_floats)),
            report,
        )
    }
}

/// Ingest `sources` and publish the result to `handle` if anything decoded.
pub async fn run_ingest<F, D, R>(
    handle: &CatalogHandle,
    sources: &[SourceSpec],
    fetcher: &F,
    decoder: &D,
    rng: &mut R,
) -> IngestReport
where
    F: SourceFetcher,
    D: ProfileDecode,
    R: Rng + Send,
{
    let (outcome, report) = ingest(sources, fetcher, decoder, rng).await;
    match outcome {
        IngestOutcome::Replaced(catalog) => {
            let version = handle.publish(catalog);
            tracing::info!(version, "{}", report.summary());
        },
        IngestOutcome::Unchanged => {
            tracing::info!("keeping synthetic catalog: {}", report.summary());
        },
    }
    report
}
