//! Decoded profile records.

use chrono::{DateTime, Utc};

/// One vertical cast from one float at one time.
///
/// The four level sequences are index-aligned: element `k` of each belongs to
/// the same measurement level.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRecord {
    /// Latitude in degrees north, if the file had a usable position.
    pub latitude: Option<f64>,
    /// Longitude in degrees east, if the file had a usable position.
    pub longitude: Option<f64>,
    /// Profile time.
    pub timestamp: DateTime<Utc>,
    /// Temperature per level (°C).
    pub temperature: Vec<f64>,
    /// Practical salinity per level (PSU).
    pub salinity: Vec<f64>,
    /// Pressure per level (dbar).
    pub pressure: Vec<f64>,
    /// Depth per level (m).
    pub depth: Vec<f64>,
}

impl ProfileRecord {
    /// Create an empty record at a position and time.
    pub fn new(latitude: Option<f64>, longitude: Option<f64>, timestamp: DateTime<Utc>) -> Self {
        Self {
            latitude,
            longitude,
            timestamp,
            temperature: Vec::new(),
            salinity: Vec::new(),
            pressure: Vec::new(),
            depth: Vec::new(),
        }
    }

    /// Append one level to every sequence.
    pub fn push_level(&mut self, temperature: f64, salinity: f64, pressure: f64) {
        self.temperature.push(temperature);
        self.salinity.push(salinity);
        self.pressure.push(pressure);
        // Pressure in dbar stands in for depth in metres.
        self.depth.push(pressure);
    }

    /// Whether no level was accepted.
    pub fn is_empty(&self) -> bool {
        self.temperature.is_empty()
    }
}
