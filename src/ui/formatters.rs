//! Shared formatting utilities for UI components.

use chrono::{DateTime, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Pad or truncate `text` to exactly `width` terminal columns.
///
/// Truncated text ends with `…`.
pub fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return format!("{}{}", text, " ".repeat(width - text.width()));
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Format a coordinate pair as `12.34°S 56.78°E`.
pub fn format_position(lat: f64, lon: f64) -> String {
    let ns = if lat < 0.0 { 'S' } else { 'N' };
    let ew = if lon < 0.0 { 'W' } else { 'E' };
    format!("{:.2}°{} {:.2}°{}", lat.abs(), ns, lon.abs(), ew)
}

/// Format how long ago `then` was, relative to `now`.
pub fn format_age(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age = now.signed_duration_since(then);
    if age.num_days() >= 1 {
        format!("{}d ago", age.num_days())
    } else if age.num_hours() >= 1 {
        format!("{}h ago", age.num_hours())
    } else if age.num_minutes() >= 0 {
        format!("{}m ago", age.num_minutes())
    } else {
        "in the future".to_string()
    }
}

/// Format a reading with smart precision.
pub fn format_reading(val: f64) -> String {
    if !val.is_finite() {
        return "n/a".to_string();
    }
    let abs_val = val.abs();
    if abs_val >= 100.0 {
        format!("{:.1}", val)
    } else if abs_val >= 1.0 {
        format!("{:.2}", val)
    } else {
        format!("{:.3}", val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fit_width_pads_and_truncates() {
        assert_eq!(fit_width("BGC", 5), "BGC  ");
        assert_eq!(fit_width("Central Indian Ocean", 10), "Central I…");
        assert_eq!(fit_width("°C", 2), "°C");
    }

    #[test]
    fn fit_width_zero_columns_is_empty() {
        assert_eq!(fit_width("BGC", 0), "");
        assert_eq!(fit_width("", 0), "");
        assert_eq!(fit_width("BGC", 1), "…");
    }

    #[test]
    fn positions() {
        assert_eq!(format_position(-12.5, 80.25), "12.50°S 80.25°E");
        assert_eq!(format_position(15.0, 65.0), "15.00°N 65.00°E");
    }

    #[test]
    fn ages() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        assert_eq!(format_age(now - chrono::Duration::days(3), now), "3d ago");
        assert_eq!(format_age(now - chrono::Duration::hours(5), now), "5h ago");
        assert_eq!(format_age(now, now), "0m ago");
        assert_eq!(format_age(now + chrono::Duration::hours(1), now), "in the future");
    }

    #[test]
    fn readings() {
        assert_eq!(format_reading(1523.44), "1523.4");
        assert_eq!(format_reading(27.456), "27.46");
        assert_eq!(format_reading(0.3127), "0.313");
        assert_eq!(format_reading(f64::NAN), "n/a");
    }
}
