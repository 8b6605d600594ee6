//! Synthetic float population.
//!
//! Floats are spread over six sub-basin sampling boxes. Each position is
//! rejection-sampled against the land zones a bounded number of times before
//! falling back to a known open-ocean coordinate.

use super::model::{BgcReadings, FloatEntry, FloatStatus, FloatType, Measurement};
use crate::geo::{self, GeoBox};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use std::f64::consts::PI;

/// Default population size.
pub const DEFAULT_FLOAT_COUNT: usize = 50;

/// First synthetic float number.
pub const SYNTHETIC_ID_BASE: u64 = 4_900_000;

/// Rejection-sampling attempts per float.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 20;

/// Sampling boxes: Arabian Sea, Bay of Bengal, central, southern, western and
/// eastern Indian Ocean.
pub const SAMPLING_BOXES: [GeoBox; 6] = [
    GeoBox::new(10.0, 25.0, 55.0, 75.0),
    GeoBox::new(5.0, 22.0, 80.0, 95.0),
    GeoBox::new(-20.0, 5.0, 60.0, 90.0),
    GeoBox::new(-40.0, -20.0, 30.0, 110.0),
    GeoBox::new(-30.0, 10.0, 40.0, 60.0),
    GeoBox::new(-35.0, -5.0, 90.0, 115.0),
];

const PROFILE_WINDOW_DAYS: f64 = 30.0;
const ACTIVE_PROBABILITY: f64 = 0.85;
const BGC_PROBABILITY: f64 = 0.30;
const YEAR_MILLIS: f64 = 31_536_000_000.0;

/// A sampled float position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Latitude (degrees north).
    pub lat: f64,
    /// Longitude (degrees east).
    pub lon: f64,
    /// Whether the known-location table was used.
    pub fallback: bool,
}

/// Split `target` floats over the sampling boxes, remainder to the first ones.
pub fn floats_per_box(target: usize) -> [usize; SAMPLING_BOXES.len()] {
    let boxes = SAMPLING_BOXES.len();
    let mut counts = [target / boxes; SAMPLING_BOXES.len()];
    for count in counts.iter_mut().take(target % boxes) {
        *count += 1;
    }
    counts
}

/// Sample an ocean position inside `area`.
pub fn place_float<R: Rng>(area: &GeoBox, rng: &mut R) -> Placement {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let (lat, lon) = area.sample(rng);
        if geo::is_ocean(lat, lon) {
            return Placement {
                lat,
                lon,
                fallback: false,
            };
        }
    }
    let (lat, lon) = geo::known_ocean_location(rng);
    Placement {
        lat,
        lon,
        fallback: true,
    }
}

/// Generate about `target` synthetic floats (at least one).
pub fn generate<R: Rng>(target: usize, rng: &mut R) -> Vec<FloatEntry> {
    generate_at(target, Utc::now(), rng)
}

/// [`generate`] relative to an explicit current time.
pub fn generate_at<R: Rng>(target: usize, now: DateTime<Utc>, rng: &mut R) -> Vec<FloatEntry> {
    let target = target.max(1);
    let mut floats = Vec::with_capacity(target);
    let mut fallbacks = 0usize;

    for (area, count) in SAMPLING_BOXES.iter().zip(floats_per_box(target)) {
        for _ in 0..count {
            let placement = place_float(area, rng);
            if placement.fallback {
                fallbacks += 1;
            }
            let number = SYNTHETIC_ID_BASE + floats.len() as u64;
            floats.push(synthetic_entry(number, placement, now, rng));
        }
    }

    tracing::debug!(
        floats = floats.len(),
        fallbacks,
        "generated synthetic population"
    );
    floats
}

fn synthetic_entry<R: Rng>(
    number: u64,
    placement: Placement,
    now: DateTime<Utc>,
    rng: &mut R,
) -> FloatEntry {
    let Placement { lat, lon, .. } = placement;
    let float_id = number.to_string();

    let age_secs = (rng.gen::<f64>() * PROFILE_WINDOW_DAYS * 86_400.0) as i64;
    let temperature = surface_temperature(lat, rng);
    let depth = 1500.0 + rng.gen::<f64>() * 500.0;
    let bgc = BgcReadings {
        chlorophyll: chlorophyll(lat, now, rng),
        dissolved_oxygen: dissolved_oxygen(temperature, rng),
        nitrate: nitrate(lat, rng),
        ph: ph(lat, rng),
    };

    FloatEntry {
        id: format!("ARGO_{}", float_id),
        float_id,
        profile_index: None,
        lat,
        lon,
        last_profile: now - Duration::seconds(age_secs),
        temperature: Measurement::Scalar(temperature),
        salinity: Measurement::Scalar(surface_salinity(lat, rng)),
        pressure: Measurement::Scalar(depth),
        depth: Measurement::Scalar(depth),
        status: if rng.gen_bool(ACTIVE_PROBABILITY) {
            FloatStatus::Active
        } else {
            FloatStatus::Inactive
        },
        float_type: if rng.gen_bool(BGC_PROBABILITY) {
            FloatType::Bgc
        } else {
            FloatType::Core
        },
        bgc: Some(bgc),
        region: geo::region_name(lat, lon),
        profile_variation: rng.gen::<f64>(),
    }
}

/// Surface temperature falling off with latitude, at least 2 °C.
fn surface_temperature<R: Rng>(lat: f64, rng: &mut R) -> f64 {
    (28.0 - lat.abs() * 0.4 + (rng.gen::<f64>() - 0.5) * 4.0).max(2.0)
}

/// Salinity near 34.5 PSU, within [33, 37].
fn surface_salinity<R: Rng>(lat: f64, rng: &mut R) -> f64 {
    (34.5 + (lat - 15.0).abs() * 0.02 + (rng.gen::<f64>() - 0.5) * 0.5).clamp(33.0, 37.0)
}

/// Chlorophyll-a with a seasonal cycle, at least 0.1 mg/m³.
fn chlorophyll<R: Rng>(lat: f64, now: DateTime<Utc>, rng: &mut R) -> f64 {
    let base = if lat.abs() > 20.0 { 0.8 } else { 0.3 };
    let year_phase = now.timestamp_millis() as f64 / YEAR_MILLIS;
    let seasonal = (year_phase * 2.0 * PI).sin() * 0.2;
    (base + seasonal + rng.gen::<f64>() * 0.4).max(0.1)
}

/// Oxygen solubility falls with temperature; within [2, 9] mg/L.
fn dissolved_oxygen<R: Rng>(temperature: f64, rng: &mut R) -> f64 {
    (8.5 - (temperature - 2.0) * 0.15 + (rng.gen::<f64>() - 0.5) * 1.5).clamp(2.0, 9.0)
}

/// Nitrate, higher at upwelling latitudes; within [0, 45] µmol/L.
fn nitrate<R: Rng>(lat: f64, rng: &mut R) -> f64 {
    let upwelling = if lat.abs() > 15.0 { 1.5 } else { 0.5 };
    (upwelling + rng.gen::<f64>() * 2.0).clamp(0.0, 45.0)
}

/// pH within [7.8, 8.3].
fn ph<R: Rng>(lat: f64, rng: &mut R) -> f64 {
    (8.1 - lat.abs() * 0.002 + (rng.gen::<f64>() - 0.5) * 0.1).clamp(7.8, 8.3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::KNOWN_OCEAN_LOCATIONS;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 15, 6, 0, 0).unwrap()
    }

    #[test]
    fn remainder_goes_to_first_boxes() {
        assert_eq!(floats_per_box(50), [9, 9, 8, 8, 8, 8]);
        assert_eq!(floats_per_box(6), [1; 6]);
        assert_eq!(floats_per_box(4), [1, 1, 1, 1, 0, 0]);
    }

    #[test]
    fn default_population_size() {
        let mut rng = StdRng::seed_from_u64(42);
        let floats = generate_at(DEFAULT_FLOAT_COUNT, now(), &mut rng);
        assert_eq!(floats.len(), 50);
    }

    #[test]
    fn never_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_at(0, now(), &mut rng).len(), 1);
    }

    #[test]
    fn positions_are_ocean_or_known_locations() {
        let mut rng = StdRng::seed_from_u64(9);
        for entry in generate_at(300, now(), &mut rng) {
            assert!(
                geo::is_ocean(entry.lat, entry.lon)
                    || KNOWN_OCEAN_LOCATIONS.contains(&(entry.lat, entry.lon)),
                "{} placed on land at ({}, {})",
                entry.id,
                entry.lat,
                entry.lon
            );
        }
    }

    #[test]
    fn land_only_box_falls_back() {
        let mut rng = StdRng::seed_from_u64(5);
        // Entirely inside the subcontinent zone.
        let inland = GeoBox::new(15.0, 30.0, 75.0, 90.0);
        let placement = place_float(&inland, &mut rng);
        assert!(placement.fallback);
        assert!(KNOWN_OCEAN_LOCATIONS.contains(&(placement.lat, placement.lon)));
    }

    #[test]
    fn ids_are_sequential() {
        let mut rng = StdRng::seed_from_u64(11);
        let floats = generate_at(12, now(), &mut rng);
        for (i, entry) in floats.iter().enumerate() {
            assert_eq!(entry.float_id, (SYNTHETIC_ID_BASE + i as u64).to_string());
            assert_eq!(entry.id, format!("ARGO_{}", entry.float_id));
            assert_eq!(entry.profile_index, None);
        }
    }

    #[test]
    fn values_stay_within_physical_bounds() {
        let mut rng = StdRng::seed_from_u64(21);
        for entry in generate_at(500, now(), &mut rng) {
            let bgc = entry.bgc.expect("synthetic floats carry BGC values");
            assert!((7.8..=8.3).contains(&bgc.ph));
            assert!((2.0..=9.0).contains(&bgc.dissolved_oxygen));
            assert!((0.0..=45.0).contains(&bgc.nitrate));
            assert!(bgc.chlorophyll >= 0.1);

            let Measurement::Scalar(t) = entry.temperature else {
                panic!("synthetic temperature should be scalar");
            };
            assert!((2.0..=30.0).contains(&t));
            let Measurement::Scalar(s) = entry.salinity else {
                panic!("synthetic salinity should be scalar");
            };
            assert!((33.0..=37.0).contains(&s));

            assert!((0.0..1.0).contains(&entry.profile_variation));
            assert!(entry.last_profile <= now());
            assert!(entry.last_profile >= now() - Duration::days(30));
            assert_eq!(entry.region, geo::region_name(entry.lat, entry.lon));
        }
    }

    #[test]
    fn status_and_type_mix() {
        let mut rng = StdRng::seed_from_u64(8);
        let floats = generate_at(2000, now(), &mut rng);
        let active = floats.iter().filter(|f| f.is_active()).count() as f64 / 2000.0;
        let bgc = floats
            .iter()
            .filter(|f| f.float_type == FloatType::Bgc)
            .count() as f64
            / 2000.0;
        assert!((0.80..0.90).contains(&active), "active share {active}");
        assert!((0.25..0.35).contains(&bgc), "BGC share {bgc}");
    }

    #[test]
    fn same_seed_same_population() {
        let a = generate_at(20, now(), &mut StdRng::seed_from_u64(99));
        let b = generate_at(20, now(), &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
