//! Summary statistics over a catalog snapshot.

use super::model::{FloatCatalog, FloatType, Measurement, Provenance};
use crate::data::sentinel::PlausibleBand;
use std::collections::BTreeMap;
use std::fmt;

/// Reported when no entry has a plausible temperature.
pub const DEFAULT_TEMPERATURE_RANGE: ValueRange = ValueRange { min: 2.0, max: 29.0 };

/// Reported when no entry has a plausible salinity.
pub const DEFAULT_SALINITY_RANGE: ValueRange = ValueRange {
    min: 34.5,
    max: 35.5,
};

/// A closed, finite value range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} to {:.1}", self.min, self.max)
    }
}

/// Catalog-wide counts and ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSummary {
    /// Entries whose float is reporting.
    pub active_count: usize,
    /// All entries.
    pub total_count: usize,
    /// Profiles represented, one per entry.
    pub total_profiles: usize,
    /// Entries of BGC floats.
    pub bgc_count: usize,
    /// Plausible temperature range (°C).
    pub temperature_range: ValueRange,
    /// Plausible salinity range (PSU).
    pub salinity_range: ValueRange,
    /// Entry count per region name.
    pub regions: BTreeMap<&'static str, usize>,
    /// Origin of the catalog.
    pub provenance: Provenance,
    /// Float ids whose files were decoded.
    pub loaded_floats: Vec<String>,
}

impl CatalogSummary {
    /// Plain-text status block.
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Source: {}", self.provenance),
            format!(
                "Floats: {} active of {} ({} BGC)",
                self.active_count, self.total_count, self.bgc_count
            ),
            format!("Profiles: {}", self.total_profiles),
            format!("Temperature: {} °C", self.temperature_range),
            format!("Salinity: {} PSU", self.salinity_range),
        ];
        if !self.loaded_floats.is_empty() {
            lines.push(format!("Loaded floats: {}", self.loaded_floats.join(", ")));
        }
        lines.extend(
            self.regions
                .iter()
                .map(|(region, count)| format!("  {}: {}", region, count)),
        );
        lines
    }
}

/// Running extrema of one quantity, each side accepted only inside a band.
#[derive(Debug, Clone, Copy)]
struct BandedExtent {
    band: PlausibleBand,
    min: Option<f64>,
    max: Option<f64>,
}

impl BandedExtent {
    fn new(band: PlausibleBand) -> Self {
        Self {
            band,
            min: None,
            max: None,
        }
    }

    fn observe(&mut self, measurement: &Measurement) {
        let Some((lo, hi)) = measurement.extent() else {
            return;
        };
        if self.band.contains(lo) {
            self.min = Some(self.min.map_or(lo, |m| m.min(lo)));
        }
        if self.band.contains(hi) {
            self.max = Some(self.max.map_or(hi, |m| m.max(hi)));
        }
    }

    fn range_or(self, default: ValueRange) -> ValueRange {
        match (self.min, self.max) {
            (Some(min), Some(max)) => ValueRange { min, max },
            (Some(v), None) | (None, Some(v)) => ValueRange { min: v, max: v },
            (None, None) => default,
        }
    }
}

/// Count entries and compute plausible sensor ranges.
///
/// Series contribute their minimum and maximum, each only when it falls
/// inside the plausible band; scalars are checked the same way. Ranges are
/// always finite.
pub fn summarize(catalog: &FloatCatalog) -> CatalogSummary {
    let mut temperature = BandedExtent::new(PlausibleBand::TEMPERATURE);
    let mut salinity = BandedExtent::new(PlausibleBand::SALINITY);
    let mut regions = BTreeMap::new();
    let mut active_count = 0;
    let mut bgc_count = 0;

    for entry in catalog.entries() {
        if entry.is_active() {
            active_count += 1;
        }
        if entry.float_type == FloatType::Bgc {
            bgc_count += 1;
        }
        *regions.entry(entry.region).or_insert(0) += 1;
        temperature.observe(&entry.temperature);
        salinity.observe(&entry.salinity);
    }

    CatalogSummary {
        active_count,
        total_count: catalog.len(),
        total_profiles: catalog.len(),
        bgc_count,
        temperature_range: temperature.range_or(DEFAULT_TEMPERATURE_RANGE),
        salinity_range: salinity.range_or(DEFAULT_SALINITY_RANGE),
        regions,
        provenance: catalog.provenance(),
        loaded_floats: catalog.loaded_floats().to_vec(),
    }
}
