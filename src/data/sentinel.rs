//! Fill-value and range predicates shared by the decoder and the aggregator.

/// Values at or above this are ARGO fill values, not measurements.
pub const FILL_THRESHOLD: f64 = 99999.0;

/// Check whether a raw reading is a usable measurement.
///
/// Absent, non-finite and fill-valued readings are all rejected.
pub fn is_valid_reading(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v.is_finite() && v < FILL_THRESHOLD)
}

/// Return the reading if it is usable, otherwise `None`.
pub fn valid_reading(value: Option<f64>) -> Option<f64> {
    value.filter(|v| is_valid_reading(Some(*v)))
}

/// An open interval of physically plausible values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlausibleBand {
    /// Exclusive lower bound.
    pub lower: f64,
    /// Exclusive upper bound.
    pub upper: f64,
}

impl PlausibleBand {
    /// Ocean temperature in degrees Celsius.
    pub const TEMPERATURE: Self = Self {
        lower: -5.0,
        upper: 100.0,
    };

    /// Practical salinity.
    pub const SALINITY: Self = Self {
        lower: 20.0,
        upper: 50.0,
    };

    /// Check whether `value` lies strictly inside the band.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value > self.lower && value < self.upper
    }
}

/// Minimum and maximum over the finite values of a slice.
///
/// Returns `None` when the slice has no finite values.
pub fn finite_extent(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_values_are_invalid() {
        assert!(!is_valid_reading(Some(99999.0)));
        assert!(!is_valid_reading(Some(1.0e10)));
        assert!(!is_valid_reading(Some(f64::NAN)));
        assert!(!is_valid_reading(Some(f64::INFINITY)));
        assert!(!is_valid_reading(None));
    }

    #[test]
    fn zero_and_negative_readings_are_valid() {
        assert!(is_valid_reading(Some(0.0)));
        assert!(is_valid_reading(Some(-1.8)));
        assert_eq!(valid_reading(Some(99998.9)), Some(99998.9));
    }

    #[test]
    fn band_is_exclusive() {
        assert!(PlausibleBand::TEMPERATURE.contains(-4.9));
        assert!(!PlausibleBand::TEMPERATURE.contains(-5.0));
        assert!(!PlausibleBand::TEMPERATURE.contains(100.0));
        assert!(PlausibleBand::SALINITY.contains(35.0));
        assert!(!PlausibleBand::SALINITY.contains(f64::NAN));
    }

    #[test]
    fn extent_skips_non_finite() {
        assert_eq!(finite_extent(&[3.0, f64::NAN, -1.0, 7.5]), Some((-1.0, 7.5)));
        assert_eq!(finite_extent(&[f64::NAN]), None);
        assert_eq!(finite_extent(&[]), None);
    }
}
