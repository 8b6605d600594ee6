//! Depth profiles for charting a single float.
//!
//! Decoded entries chart their observed levels. Synthetic entries only carry
//! surface values, so a plausible profile is shaped from the surface value and
//! the entry's `profile_variation`.

use crate::catalog::{FloatEntry, Measurement};
use rand::Rng;
use std::fmt;

/// Quantity plotted against depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChartKind {
    /// Temperature (°C).
    #[default]
    Temperature,
    /// Salinity (PSU).
    Salinity,
    /// Pressure (dbar).
    Pressure,
    /// Chlorophyll-a (mg/m³).
    Chlorophyll,
    /// Dissolved oxygen (mg/L).
    Oxygen,
    /// Nitrate (µmol/L).
    Nitrate,
}

impl ChartKind {
    /// Every kind, in cycling order.
    pub const ALL: [ChartKind; 6] = [
        ChartKind::Temperature,
        ChartKind::Salinity,
        ChartKind::Pressure,
        ChartKind::Chlorophyll,
        ChartKind::Oxygen,
        ChartKind::Nitrate,
    ];

    /// The kind after this one, wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Unit label.
    pub fn unit(self) -> &'static str {
        match self {
            ChartKind::Temperature => "°C",
            ChartKind::Salinity => "PSU",
            ChartKind::Pressure => "dbar",
            ChartKind::Chlorophyll => "mg/m³",
            ChartKind::Oxygen => "mg/L",
            ChartKind::Nitrate => "µmol/L",
        }
    }

    /// Whether the quantity needs a BGC sensor package.
    pub fn is_biogeochemical(self) -> bool {
        matches!(
            self,
            ChartKind::Chlorophyll | ChartKind::Oxygen | ChartKind::Nitrate
        )
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::Temperature => "Temperature",
            ChartKind::Salinity => "Salinity",
            ChartKind::Pressure => "Pressure",
            ChartKind::Chlorophyll => "Chlorophyll-a",
            ChartKind::Oxygen => "Dissolved oxygen",
            ChartKind::Nitrate => "Nitrate",
        };
        write!(f, "{}", name)
    }
}

/// One charted level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    /// Depth in metres, positive down.
    pub depth: f64,
    /// Value in the chart kind's unit.
    pub value: f64,
}

/// What can be charted for an entry.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesOutcome {
    /// Measured levels from a decoded profile.
    Observed(Vec<ProfilePoint>),
    /// Illustrative levels shaped from surface values.
    Generated(Vec<ProfilePoint>),
    /// The float has no sensor for this quantity.
    NoSensor,
}

impl SeriesOutcome {
    /// The charted points, empty when there is no sensor.
    pub fn points(&self) -> &[ProfilePoint] {
        match self {
            SeriesOutcome::Observed(points) | SeriesOutcome::Generated(points) => points,
            SeriesOutcome::NoSensor => &[],
        }
    }

    /// Short provenance label.
    pub fn source_label(&self) -> &'static str {
        match self {
            SeriesOutcome::Observed(_) => "observed",
            SeriesOutcome::Generated(_) => "generated",
            SeriesOutcome::NoSensor => "no sensor",
        }
    }
}

const DEFAULT_SURFACE_TEMPERATURE: f64 = 25.0;

/// Build the `kind` profile for `entry`.
pub fn series<R: Rng>(entry: &FloatEntry, kind: ChartKind, rng: &mut R) -> SeriesOutcome {
    if kind.is_biogeochemical() && entry.displayed_bgc().is_none() {
        return SeriesOutcome::NoSensor;
    }

    let observed = match kind {
        ChartKind::Temperature => observed_points(&entry.depth, &entry.temperature),
        ChartKind::Salinity => observed_points(&entry.depth, &entry.salinity),
        ChartKind::Pressure => observed_points(&entry.depth, &entry.pressure),
        _ => None,
    };
    if let Some(points) = observed {
        return SeriesOutcome::Observed(points);
    }

    let v = entry.profile_variation;
    let points = match (kind, entry.displayed_bgc()) {
        (ChartKind::Temperature, _) => {
            let surface = match entry.temperature {
                Measurement::Scalar(t) => t,
                Measurement::Series(_) => DEFAULT_SURFACE_TEMPERATURE,
            };
            temperature_profile(surface, v)
        },
        (ChartKind::Salinity, _) => levels(0, 2000, 50, |d| {
            34.5 + 0.5 * (d / 300.0).sin() + rng.gen::<f64>() * 0.2
        }),
        (ChartKind::Pressure, _) => levels(0, 2000, 100, |d| d / 10.0 + rng.gen::<f64>() * 2.0),
        (ChartKind::Chlorophyll, Some(bgc)) => {
            let peak_depth = 60.0 + v * 40.0;
            let width = 25.0 + v * 15.0;
            let peak = bgc.chlorophyll * 3.0;
            let factor = chlorophyll_factor(entry.region);
            levels(0, 200, 10, |d| {
                let chla = (-(d - peak_depth).powi(2) / (2.0 * width * width)).exp() * peak + 0.05;
                (chla * factor + (rng.gen::<f64>() - 0.5) * 0.1).max(0.05)
            })
        },
        (ChartKind::Oxygen, Some(_)) => levels(0, 1000, 25, |d| {
            let o2 = if d < 100.0 {
                7.0 - d * 0.02
            } else if d < 800.0 {
                3.0 + ((d - 100.0) / 200.0).sin() * 1.5
            } else {
                4.0 + (d - 800.0) * 0.001
            };
            (o2 + rng.gen::<f64>() * 0.5).max(1.0)
        }),
        (ChartKind::Nitrate, Some(bgc)) => {
            let nutricline = 100.0 + v * 100.0;
            let factor = nitrate_factor(entry.region);
            levels(0, 1500, 50, |d| {
                let base = if d < nutricline {
                    bgc.nitrate + (d / nutricline) * 15.0
                } else {
                    15.0 + (d - nutricline) * 0.015
                };
                let no3 = base * factor + (v - 0.5) * 8.0;
                (no3 + (rng.gen::<f64>() - 0.5) * 2.0).max(0.0)
            })
        },
        (_, None) => return SeriesOutcome::NoSensor,
    };
    SeriesOutcome::Generated(points)
}

/// Pair a decoded series with depths; `None` for scalars or empty series.
fn observed_points(depth: &Measurement, values: &Measurement) -> Option<Vec<ProfilePoint>> {
    let (Some(depths), Some(values)) = (depth.as_series(), values.as_series()) else {
        return None;
    };
    if values.is_empty() {
        return None;
    }
    Some(
        depths
            .iter()
            .zip(values)
            .map(|(&depth, &value)| ProfilePoint { depth, value })
            .collect(),
    )
}

fn levels(
    top: u32,
    bottom: u32,
    step: usize,
    mut value_at: impl FnMut(f64) -> f64,
) -> Vec<ProfilePoint> {
    (top..=bottom)
        .step_by(step)
        .map(|d| {
            let depth = f64::from(d);
            ProfilePoint {
                depth,
                value: value_at(depth),
            }
        })
        .collect()
}

/// Mixed layer cooling to a thermocline, then exponential decay, floor 1 °C.
fn temperature_profile(surface: f64, variation: f64) -> Vec<ProfilePoint> {
    let thermocline = 200.0 + (variation - 0.5) * 100.0;
    let strength = 0.8 + variation * 0.4;
    levels(0, 2000, 50, |d| {
        let t = if d < thermocline {
            surface - (d / thermocline) * (surface * 0.3) * strength
        } else {
            surface * 0.7 * (-(d - thermocline) / 800.0).exp() + 2.0
        };
        (t + (variation - 0.5) * 2.0).max(1.0)
    })
}

fn chlorophyll_factor(region: &str) -> f64 {
    if region.contains("Arabian Sea") {
        1.2
    } else if region.contains("Southern") {
        0.8
    } else {
        1.0
    }
}

fn nitrate_factor(region: &str) -> f64 {
    if region.contains("Arabian Sea") {
        1.3
    } else if region.contains("Bay of Bengal") {
        0.8
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BgcReadings, FloatStatus, FloatType};
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn synthetic(float_type: FloatType) -> FloatEntry {
        FloatEntry {
            id: "ARGO_4900000".into(),
            float_id: "4900000".into(),
            profile_index: None,
            lat: 15.0,
            lon: 65.0,
            last_profile: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            temperature: Measurement::Scalar(27.0),
            salinity: Measurement::Scalar(35.1),
            pressure: Measurement::Scalar(1800.0),
            depth: Measurement::Scalar(1800.0),
            status: FloatStatus::Active,
            float_type,
            bgc: Some(BgcReadings {
                chlorophyll: 0.4,
                dissolved_oxygen: 6.0,
                nitrate: 1.2,
                ph: 8.05,
            }),
            region: "Arabian Sea",
            profile_variation: 0.5,
        }
    }

    fn decoded() -> FloatEntry {
        FloatEntry {
            id: "ARGO_1901766_0".into(),
            float_id: "1901766".into(),
            profile_index: Some(0),
            temperature: Measurement::Series(vec![28.1, 26.4, 14.0]),
            salinity: Measurement::Series(vec![35.0, 35.2, 34.9]),
            pressure: Measurement::Series(vec![5.0, 50.0, 300.0]),
            depth: Measurement::Series(vec![5.0, 50.0, 300.0]),
            bgc: None,
            float_type: FloatType::Core,
            ..synthetic(FloatType::Core)
        }
    }

    #[test]
    fn chart_kinds_cycle() {
        let mut kind = ChartKind::default();
        for _ in 0..ChartKind::ALL.len() {
            kind = kind.next();
        }
        assert_eq!(kind, ChartKind::Temperature);
        assert_eq!(ChartKind::Salinity.next(), ChartKind::Pressure);
    }

    #[test]
    fn decoded_entries_chart_observed_levels() {
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = series(&decoded(), ChartKind::Temperature, &mut rng);
        assert_eq!(outcome.source_label(), "observed");
        assert_eq!(
            outcome.points()[2],
            ProfilePoint {
                depth: 300.0,
                value: 14.0
            }
        );
    }

    #[test]
    fn core_floats_have_no_bgc_profiles() {
        let mut rng = StdRng::seed_from_u64(1);
        for kind in [ChartKind::Chlorophyll, ChartKind::Oxygen, ChartKind::Nitrate] {
            assert_eq!(series(&decoded(), kind, &mut rng), SeriesOutcome::NoSensor);
            assert_eq!(
                series(&synthetic(FloatType::Core), kind, &mut rng),
                SeriesOutcome::NoSensor
            );
        }
    }

    #[test]
    fn generated_temperature_has_a_thermocline() {
        let mut rng = StdRng::seed_from_u64(2);
        let outcome = series(&synthetic(FloatType::Core), ChartKind::Temperature, &mut rng);
        let points = outcome.points();
        assert_eq!(outcome.source_label(), "generated");
        assert_eq!(points.len(), 41);
        assert_eq!(points[0].value, 27.0);
        assert!(points.last().unwrap().value < points[0].value);
        assert!(points.iter().all(|p| p.value >= 1.0));
    }

    #[test]
    fn generated_bgc_profiles_respect_floors() {
        let mut rng = StdRng::seed_from_u64(3);
        let entry = synthetic(FloatType::Bgc);

        let chla = series(&entry, ChartKind::Chlorophyll, &mut rng);
        assert_eq!(chla.points().len(), 21);
        assert!(chla.points().iter().all(|p| p.value >= 0.05));

        let oxygen = series(&entry, ChartKind::Oxygen, &mut rng);
        assert_eq!(oxygen.points().len(), 41);
        assert!(oxygen.points().iter().all(|p| p.value >= 1.0));

        let nitrate = series(&entry, ChartKind::Nitrate, &mut rng);
        assert_eq!(nitrate.points().last().map(|p| p.depth), Some(1500.0));
        assert!(nitrate.points().iter().all(|p| p.value >= 0.0));
    }
}
