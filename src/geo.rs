//! Land exclusion and region lookup for the Indian Ocean basin.
//!
//! Both lookups walk an ordered table of rectangles and stop at the first
//! match. The rectangles overlap, so table order is significant.

use rand::Rng;

/// Catch-all region name.
pub const DEFAULT_REGION: &str = "Indian Ocean";

/// A latitude/longitude rectangle with exclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBox {
    /// Southern edge (degrees north).
    pub lat_min: f64,
    /// Northern edge (degrees north).
    pub lat_max: f64,
    /// Western edge (degrees east).
    pub lon_min: f64,
    /// Eastern edge (degrees east).
    pub lon_max: f64,
}

impl GeoBox {
    /// Create a box from its edges.
    pub const fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Self {
        Self {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        }
    }

    /// Whether the point lies strictly inside the box.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat > self.lat_min && lat < self.lat_max && lon > self.lon_min && lon < self.lon_max
    }

    /// Draw a point uniformly from the box.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> (f64, f64) {
        let lat = self.lat_min + rng.gen::<f64>() * (self.lat_max - self.lat_min);
        let lon = self.lon_min + rng.gen::<f64>() * (self.lon_max - self.lon_min);
        (lat, lon)
    }
}

const OPEN: f64 = f64::INFINITY;

/// Landmasses, islands and enclosed seas floats must avoid.
pub const LAND_ZONES: [(GeoBox, &str); 10] = [
    (GeoBox::new(8.0, 37.0, 68.0, 97.0), "Indian subcontinent"),
    (GeoBox::new(12.0, 30.0, 34.0, 60.0), "Arabian Peninsula"),
    (GeoBox::new(-35.0, 15.0, 32.0, 52.0), "East African coast"),
    (GeoBox::new(-26.0, -12.0, 43.0, 51.0), "Madagascar"),
    (GeoBox::new(5.0, 10.0, 79.0, 82.0), "Sri Lanka"),
    (GeoBox::new(0.0, 7.0, 72.0, 74.0), "Maldives"),
    (GeoBox::new(-11.0, 6.0, 95.0, 141.0), "Indonesian archipelago"),
    (GeoBox::new(-44.0, -10.0, 110.0, 155.0), "Australian coast"),
    (GeoBox::new(24.0, 30.0, 48.0, 57.0), "Persian Gulf"),
    (GeoBox::new(12.0, 28.0, 32.0, 43.0), "Red Sea"),
];

/// Named sub-basins, first match wins.
pub const REGIONS: [(GeoBox, &str); 6] = [
    (GeoBox::new(10.0, OPEN, 55.0, 75.0), "Arabian Sea"),
    (GeoBox::new(5.0, 22.0, 80.0, 95.0), "Bay of Bengal"),
    (GeoBox::new(-20.0, 5.0, 60.0, 90.0), "Central Indian Ocean"),
    (GeoBox::new(-OPEN, -20.0, 30.0, 110.0), "Southern Indian Ocean"),
    (GeoBox::new(-30.0, 10.0, 40.0, 60.0), "Western Indian Ocean"),
    (GeoBox::new(-35.0, -5.0, 90.0, 115.0), "Eastern Indian Ocean"),
];

/// Open-ocean coordinates used when rejection sampling gives up.
pub const KNOWN_OCEAN_LOCATIONS: [(f64, f64); 18] = [
    (15.5, 65.0),
    (18.2, 67.5),
    (20.1, 63.8),
    (12.5, 87.0),
    (15.8, 89.2),
    (18.0, 85.5),
    (-5.0, 75.0),
    (-8.5, 82.0),
    (-12.0, 78.5),
    (-25.0, 70.0),
    (-30.5, 85.0),
    (-35.2, 95.0),
    (-15.0, 55.0),
    (-20.5, 58.0),
    (-10.0, 52.0),
    (-25.0, 105.0),
    (-30.0, 100.0),
    (-20.0, 108.0),
];

/// Area positions are drawn from when a decoded profile has none.
pub const FALLBACK_AREA: GeoBox = GeoBox::new(-40.0, 25.0, 30.0, 155.0);

/// The land zone containing the point, if any.
pub fn land_zone(lat: f64, lon: f64) -> Option<&'static str> {
    LAND_ZONES
        .iter()
        .find(|(zone, _)| zone.contains(lat, lon))
        .map(|(_, name)| *name)
}

/// Whether the point is outside every land zone.
pub fn is_ocean(lat: f64, lon: f64) -> bool {
    land_zone(lat, lon).is_none()
}

/// Name of the first region containing the point.
pub fn region_name(lat: f64, lon: f64) -> &'static str {
    REGIONS
        .iter()
        .find(|(region, _)| region.contains(lat, lon))
        .map_or(DEFAULT_REGION, |(_, name)| *name)
}

/// Pick one of the known open-ocean coordinates.
pub fn known_ocean_location<R: Rng>(rng: &mut R) -> (f64, f64) {
    KNOWN_OCEAN_LOCATIONS[rng.gen_range(0..KNOWN_OCEAN_LOCATIONS.len())]
}

/// Random position inside [`FALLBACK_AREA`].
pub fn random_position<R: Rng>(rng: &mut R) -> (f64, f64) {
    FALLBACK_AREA.sample(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn subcontinent_is_land() {
        assert!(!is_ocean(20.0, 75.0));
        assert_eq!(land_zone(20.0, 75.0), Some("Indian subcontinent"));
    }

    #[test]
    fn southern_indian_ocean_is_open() {
        assert!(is_ocean(-20.0, 70.0));
        assert_eq!(land_zone(-20.0, 70.0), None);
    }

    #[test]
    fn zone_edges_are_exclusive() {
        // On the southern edge of the subcontinent box, east of the other zones.
        assert!(is_ocean(8.0, 90.0));
        assert!(!is_ocean(8.01, 90.0));
    }

    #[test]
    fn first_matching_zone_wins() {
        // Inside both the Arabian Peninsula and Red Sea boxes.
        assert_eq!(land_zone(20.0, 40.0), Some("Arabian Peninsula"));
    }

    #[test]
    fn regions_resolve_in_order() {
        assert_eq!(region_name(15.0, 65.0), "Arabian Sea");
        assert_eq!(region_name(40.0, 65.0), "Arabian Sea");
        assert_eq!(region_name(15.0, 85.0), "Bay of Bengal");
        assert_eq!(region_name(-10.0, 75.0), "Central Indian Ocean");
        // Southern and Eastern overlap here; Southern is listed first.
        assert_eq!(region_name(-25.0, 100.0), "Southern Indian Ocean");
        assert_eq!(region_name(0.0, 55.0), "Western Indian Ocean");
        assert_eq!(region_name(-10.0, 100.0), "Eastern Indian Ocean");
        assert_eq!(region_name(8.0, 70.0), DEFAULT_REGION);
    }

    #[test]
    fn known_location_comes_from_table() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let point = known_ocean_location(&mut rng);
            assert!(KNOWN_OCEAN_LOCATIONS.contains(&point));
        }
    }

    #[test]
    fn random_position_stays_in_fallback_area() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let (lat, lon) = random_position(&mut rng);
            assert!((-40.0..25.0).contains(&lat));
            assert!((30.0..155.0).contains(&lon));
        }
    }
}
