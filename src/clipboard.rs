//! Clipboard integration.

use crate::catalog::{FloatEntry, Measurement};
use crate::error::Result;
use arboard::Clipboard;
use std::fmt;

/// Copy text to clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Copy a float's details to the clipboard.
pub fn copy_float_info(entry: &FloatEntry) -> Result<()> {
    copy_to_clipboard(&float_info(entry))
}

/// Plain-text description of a float.
pub fn float_info(entry: &FloatEntry) -> String {
    FloatInfo(entry).to_string()
}

/// Displays a float as the multi-line text copied to the clipboard.
#[derive(Debug, Clone, Copy)]
pub struct FloatInfo<'a>(pub &'a FloatEntry);

impl fmt::Display for FloatInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = self.0;
        writeln!(f, "Float: {}", entry.id)?;
        writeln!(f, "Float ID: {}", entry.float_id)?;
        if let Some(index) = entry.profile_index {
            writeln!(f, "Profile: {}", index)?;
        }
        writeln!(f, "Position: {:.3}, {:.3}", entry.lat, entry.lon)?;
        writeln!(f, "Region: {}", entry.region)?;
        writeln!(
            f,
            "Last profile: {}",
            entry.last_profile.format("%Y-%m-%d %H:%M UTC")
        )?;
        writeln!(f, "Status: {}", entry.status)?;
        writeln!(f, "Type: {}", entry.float_type)?;
        writeln!(f, "Temperature: {} °C", measurement_text(&entry.temperature))?;
        writeln!(f, "Salinity: {} PSU", measurement_text(&entry.salinity))?;
        writeln!(f, "Pressure: {} dbar", measurement_text(&entry.pressure))?;

        if let Some(bgc) = entry.displayed_bgc() {
            writeln!(f, "\nBiogeochemistry:")?;
            writeln!(f, "  Chlorophyll-a: {:.2} mg/m³", bgc.chlorophyll)?;
            writeln!(f, "  Dissolved oxygen: {:.2} mg/L", bgc.dissolved_oxygen)?;
            writeln!(f, "  Nitrate: {:.2} µmol/L", bgc.nitrate)?;
            writeln!(f, "  pH: {:.3}", bgc.ph)?;
        }
        Ok(())
    }
}

fn measurement_text(measurement: &Measurement) -> String {
    match measurement {
        Measurement::Scalar(v) => format!("{:.2}", v),
        Measurement::Series(values) => match (measurement.surface(), measurement.extent()) {
            (Some(surface), Some((min, max))) => format!(
                "{:.2} at surface, {:.2} to {:.2} over {} levels",
                surface,
                min,
                max,
                values.len()
            ),
            _ => "no levels".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BgcReadings, FloatStatus, FloatType};
    use chrono::{TimeZone, Utc};

    fn entry(float_type: FloatType) -> FloatEntry {
        FloatEntry {
            id: "ARGO_1901766_2".into(),
            float_id: "1901766".into(),
            profile_index: Some(2),
            lat: -12.5,
            lon: 80.25,
            last_profile: Utc.with_ymd_and_hms(2023, 11, 4, 6, 30, 0).unwrap(),
            temperature: Measurement::Series(vec![28.0, 20.0, 9.5]),
            salinity: Measurement::Scalar(34.9),
            pressure: Measurement::Series(vec![]),
            depth: Measurement::Series(vec![]),
            status: FloatStatus::Active,
            float_type,
            bgc: Some(BgcReadings {
                chlorophyll: 0.31,
                dissolved_oxygen: 6.2,
                nitrate: 1.4,
                ph: 8.06,
            }),
            region: "Central Indian Ocean",
            profile_variation: 0.1,
        }
    }

    #[test]
    fn core_float_text() {
        let text = float_info(&entry(FloatType::Core));
        assert!(text.starts_with("Float: ARGO_1901766_2\n"));
        assert!(text.contains("Profile: 2\n"));
        assert!(text.contains("Last profile: 2023-11-04 06:30 UTC\n"));
        assert!(text.contains("Temperature: 28.00 at surface, 9.50 to 28.00 over 3 levels °C"));
        assert!(text.contains("Salinity: 34.90 PSU"));
        assert!(text.contains("Pressure: no levels dbar"));
        assert!(!text.contains("Biogeochemistry"));
    }

    #[test]
    fn bgc_float_lists_sensors() {
        let text = float_info(&entry(FloatType::Bgc));
        assert!(text.contains("Type: BGC\n"));
        assert!(text.contains("  pH: 8.060\n"));
    }

    #[test]
    fn display_matches_copied_text() {
        let entry = entry(FloatType::Bgc);
        let mut shown = String::new();
        fmt::write(&mut shown, format_args!("{}", FloatInfo(&entry))).unwrap();
        assert_eq!(shown, float_info(&entry));
        assert!(shown.ends_with("Pressure: no levels dbar\n\nBiogeochemistry:\n  Chlorophyll-a: 0.31 mg/m³\n  Dissolved oxygen: 6.20 mg/L\n  Nitrate: 1.40 µmol/L\n  pH: 8.060\n"));
    }
}
