//! Unified float model shared by decoded and synthetic data.

use crate::data::sentinel::finite_extent;
use chrono::{DateTime, Utc};
use std::fmt;

/// A sensor field that is a single surface value or a per-level sequence.
///
/// Synthetic floats carry scalars; decoded profiles carry series.
#[derive(Debug, Clone, PartialEq)]
pub enum Measurement {
    /// One surface value.
    Scalar(f64),
    /// One value per measurement level, surface first.
    Series(Vec<f64>),
}

impl Measurement {
    /// Surface (first) value.
    pub fn surface(&self) -> Option<f64> {
        match self {
            Measurement::Scalar(v) => Some(*v),
            Measurement::Series(values) => values.first().copied(),
        }
    }

    /// Smallest and largest finite value.
    pub fn extent(&self) -> Option<(f64, f64)> {
        match self {
            Measurement::Scalar(v) if v.is_finite() => Some((*v, *v)),
            Measurement::Scalar(_) => None,
            Measurement::Series(values) => finite_extent(values),
        }
    }

    /// The per-level values, if this is a series.
    pub fn as_series(&self) -> Option<&[f64]> {
        match self {
            Measurement::Scalar(_) => None,
            Measurement::Series(values) => Some(values),
        }
    }

    /// Number of levels for a series, `None` for a scalar.
    pub fn level_count(&self) -> Option<usize> {
        self.as_series().map(<[f64]>::len)
    }
}

/// Operational status of a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatStatus {
    /// Currently reporting.
    Active,
    /// No longer reporting.
    Inactive,
}

impl fmt::Display for FloatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloatStatus::Active => write!(f, "active"),
            FloatStatus::Inactive => write!(f, "inactive"),
        }
    }
}

/// Sensor package of a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatType {
    /// Temperature, salinity and pressure only.
    Core,
    /// Core sensors plus biogeochemical ones.
    Bgc,
}

impl fmt::Display for FloatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloatType::Core => write!(f, "Core"),
            FloatType::Bgc => write!(f, "BGC"),
        }
    }
}

/// Biogeochemical surface values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BgcReadings {
    /// Chlorophyll-a (mg/m³).
    pub chlorophyll: f64,
    /// Dissolved oxygen (mg/L).
    pub dissolved_oxygen: f64,
    /// Nitrate (µmol/L).
    pub nitrate: f64,
    /// pH.
    pub ph: f64,
}

/// Where the current catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Generated in-process.
    Synthetic,
    /// Decoded from profile files.
    Decoded,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Synthetic => write!(f, "synthetic"),
            Provenance::Decoded => write!(f, "decoded"),
        }
    }
}

/// One float (or one decoded profile of a float) as shown to consumers.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatEntry {
    /// Unique entry id.
    pub id: String,
    /// Source float identifier.
    pub float_id: String,
    /// Profile index within the source file, decoded entries only.
    pub profile_index: Option<usize>,
    /// Latitude (degrees north).
    pub lat: f64,
    /// Longitude (degrees east).
    pub lon: f64,
    /// Time of the most recent profile.
    pub last_profile: DateTime<Utc>,
    /// Temperature (°C).
    pub temperature: Measurement,
    /// Salinity (PSU).
    pub salinity: Measurement,
    /// Pressure (dbar).
    pub pressure: Measurement,
    /// Depth (m).
    pub depth: Measurement,
    /// Operational status.
    pub status: FloatStatus,
    /// Sensor package.
    pub float_type: FloatType,
    /// Biogeochemical values, present for synthetic entries of either type.
    pub bgc: Option<BgcReadings>,
    /// Region derived from the position.
    pub region: &'static str,
    /// Per-entry seed in `[0, 1)` for varying generated profiles.
    pub profile_variation: f64,
}

impl FloatEntry {
    /// Whether the float is reporting.
    pub fn is_active(&self) -> bool {
        self.status == FloatStatus::Active
    }

    /// Biogeochemical values that should be shown for this float type.
    pub fn displayed_bgc(&self) -> Option<&BgcReadings> {
        match self.float_type {
            FloatType::Bgc => self.bgc.as_ref(),
            FloatType::Core => None,
        }
    }

    /// Deepest level reached, in metres.
    pub fn max_depth(&self) -> Option<f64> {
        self.depth.extent().map(|(_, max)| max)
    }
}

/// An immutable snapshot of all floats in a session.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatCatalog {
    entries: Vec<FloatEntry>,
    provenance: Provenance,
    loaded_floats: Vec<String>,
    version: u64,
}

impl FloatCatalog {
    /// Catalog of generated floats.
    pub fn synthetic(entries: Vec<FloatEntry>) -> Self {
        Self {
            entries,
            provenance: Provenance::Synthetic,
            loaded_floats: Vec::new(),
            version: 0,
        }
    }

    /// Catalog of decoded profiles from the given floats.
    pub fn decoded(entries: Vec<FloatEntry>, loaded_floats: Vec<String>) -> Self {
        Self {
            entries,
            provenance: Provenance::Decoded,
            loaded_floats,
            version: 0,
        }
    }

    pub(crate) fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[FloatEntry] {
        &self.entries
    }

    /// Entry at `index`.
    pub fn get(&self, index: usize) -> Option<&FloatEntry> {
        self.entries.get(index)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Origin of the entries.
    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    /// Whether the entries came from decoded files.
    pub fn data_loaded(&self) -> bool {
        self.provenance == Provenance::Decoded
    }

    /// Float ids whose files contributed entries.
    pub fn loaded_floats(&self) -> &[String] {
        &self.loaded_floats
    }

    /// Publication counter, bumped on every replacement.
    pub fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_and_series_surface() {
        assert_eq!(Measurement::Scalar(24.5).surface(), Some(24.5));
        assert_eq!(Measurement::Series(vec![28.0, 12.0]).surface(), Some(28.0));
        assert_eq!(Measurement::Series(vec![]).surface(), None);
    }

    #[test]
    fn extent_by_shape() {
        assert_eq!(Measurement::Scalar(3.0).extent(), Some((3.0, 3.0)));
        assert_eq!(Measurement::Scalar(f64::NAN).extent(), None);
        assert_eq!(
            Measurement::Series(vec![4.0, 27.5, 11.0]).extent(),
            Some((4.0, 27.5))
        );
        assert_eq!(Measurement::Series(vec![1.0, 2.0]).level_count(), Some(2));
        assert_eq!(Measurement::Scalar(1.0).level_count(), None);
    }

    #[test]
    fn labels() {
        assert_eq!(FloatType::Bgc.to_string(), "BGC");
        assert_eq!(FloatStatus::Inactive.to_string(), "inactive");
        assert_eq!(Provenance::Decoded.to_string(), "decoded");
    }
}
