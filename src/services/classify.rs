// src/services/classify.rs

//! Record classifier.
//!
//! Turns raw earthquake records into display rows: UTC timestamps, two-decimal
//! magnitudes colored by severity band, and PAGER alert labels.

use chrono::DateTime;

use crate::error::{AppError, Result};
use crate::models::{DisplayRow, QuakeProperties, Styled};

/// Magnitude bands as (inclusive lower bound, 256-color index), most severe first.
const MAGNITUDE_BANDS: [(f64, u8); 8] = [
    (8.5, 201),
    (7.5, 1),
    (6.5, 196),
    (5.5, 202),
    (4.5, 226),
    (3.5, 216),
    (2.5, 33),
    (1.5, 6),
];

/// PAGER alert levels as (feed value, label, 256-color index).
const ALERT_LEVELS: [(&str, &str, u8); 4] = [
    ("red", "RED", 9),
    ("orange", "ORANGE", 208),
    ("yellow", "YELLOW", 11),
    ("green", "GREEN", 46),
];

/// Label shown when the alert level is missing or unrecognized.
const NO_ALERT: &str = "-";

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Classify one record.
pub fn classify(record: &QuakeProperties) -> Result<DisplayRow> {
    Ok(DisplayRow {
        time: format_time(record.time)?,
        mag: classify_magnitude(record.mag),
        place: record.place.clone(),
        alert: classify_alert(record.alert.as_deref()),
        url: record.url.clone(),
    })
}

/// Classify records in order. The first malformed record fails the batch.
pub fn classify_all<'a>(
    records: impl IntoIterator<Item = &'a QuakeProperties>,
) -> Result<Vec<DisplayRow>> {
    records.into_iter().map(classify).collect()
}

/// Format a millisecond epoch as `YYYY-MM-DD HH:MM:SS` in UTC.
pub fn format_time(epoch_ms: i64) -> Result<String> {
    let time = DateTime::from_timestamp_millis(epoch_ms)
        .ok_or_else(|| AppError::malformed("time", format!("out of range: {epoch_ms}")))?;
    Ok(time.format(TIME_FORMAT).to_string())
}

/// Color index for a magnitude, or `None` below the lowest band.
pub fn magnitude_color(mag: f64) -> Option<u8> {
    MAGNITUDE_BANDS
        .iter()
        .find(|(floor, _)| mag >= *floor)
        .map(|(_, color)| *color)
}

/// Two-decimal magnitude with its band color.
pub fn classify_magnitude(mag: f64) -> Styled {
    Styled {
        text: format!("{mag:.2}"),
        color: magnitude_color(mag),
    }
}

/// PAGER label and color; anything but the four known levels becomes "-".
pub fn classify_alert(alert: Option<&str>) -> Styled {
    alert
        .and_then(|value| ALERT_LEVELS.iter().find(|(level, _, _)| *level == value))
        .map(|(_, label, color)| Styled::colored(*label, *color))
        .unwrap_or_else(|| Styled::plain(NO_ALERT))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(time: i64, mag: f64, alert: Option<&str>) -> QuakeProperties {
        QuakeProperties {
            time,
            mag,
            place: "10km N of Testville".to_string(),
            alert: alert.map(str::to_string),
            url: "https://example.test/x".to_string(),
        }
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0).unwrap(), "1970-01-01 00:00:00");
        assert_eq!(
            format_time(1_700_000_000_000).unwrap(),
            "2023-11-14 22:13:20"
        );
        // Sub-second precision is truncated.
        assert_eq!(
            format_time(1_700_000_000_999).unwrap(),
            "2023-11-14 22:13:20"
        );
        assert_eq!(format_time(-1_000).unwrap(), "1969-12-31 23:59:59");
    }

    #[test]
    fn test_format_time_out_of_range() {
        assert!(matches!(
            format_time(i64::MAX),
            Err(AppError::Malformed { .. })
        ));
    }

    #[test]
    fn test_band_boundaries_select_higher_band() {
        let expected = [
            (8.5, Some(201)),
            (7.5, Some(1)),
            (6.5, Some(196)),
            (5.5, Some(202)),
            (4.5, Some(226)),
            (3.5, Some(216)),
            (2.5, Some(33)),
            (1.5, Some(6)),
        ];
        for (mag, color) in expected {
            assert_eq!(magnitude_color(mag), color, "mag {mag}");
        }
    }

    #[test]
    fn test_band_interiors() {
        assert_eq!(magnitude_color(9.6), Some(201));
        assert_eq!(magnitude_color(8.49), Some(1));
        assert_eq!(magnitude_color(6.7), Some(196));
        assert_eq!(magnitude_color(4.49), Some(216));
        assert_eq!(magnitude_color(1.49), None);
        assert_eq!(magnitude_color(0.0), None);
        assert_eq!(magnitude_color(-0.8), None);
    }

    #[test]
    fn test_severity_non_increasing_as_magnitude_drops() {
        let rank = |mag: f64| {
            magnitude_color(mag)
                .and_then(|c| MAGNITUDE_BANDS.iter().position(|(_, color)| *color == c))
                .unwrap_or(MAGNITUDE_BANDS.len())
        };
        let mut previous = rank(10.0);
        let mut mag = 10.0;
        while mag > -1.0 {
            let current = rank(mag);
            assert!(current >= previous, "mag {mag}");
            previous = current;
            mag -= 0.05;
        }
    }

    #[test]
    fn test_magnitude_two_decimals() {
        assert_eq!(classify_magnitude(6.7).text, "6.70");
        assert_eq!(classify_magnitude(0.9).text, "0.90");
        assert_eq!(classify_magnitude(4.567).text, "4.57");
        assert_eq!(classify_magnitude(5.0).text, "5.00");
    }

    #[test]
    fn test_known_alerts() {
        assert_eq!(classify_alert(Some("red")), Styled::colored("RED", 9));
        assert_eq!(classify_alert(Some("orange")), Styled::colored("ORANGE", 208));
        assert_eq!(classify_alert(Some("yellow")), Styled::colored("YELLOW", 11));
        assert_eq!(classify_alert(Some("green")), Styled::colored("GREEN", 46));
    }

    #[test]
    fn test_unknown_alerts_are_dash() {
        for alert in [None, Some(""), Some("RED"), Some("purple"), Some(" green")] {
            assert_eq!(classify_alert(alert), Styled::plain("-"), "{alert:?}");
        }
    }

    #[test]
    fn test_classify_orange_scenario() {
        let row = classify(&record(1_700_000_000_000, 6.7, Some("orange"))).unwrap();
        assert_eq!(
            row,
            DisplayRow {
                time: "2023-11-14 22:13:20".to_string(),
                mag: Styled::colored("6.70", 196),
                place: "10km N of Testville".to_string(),
                alert: Styled::colored("ORANGE", 208),
                url: "https://example.test/x".to_string(),
            }
        );
    }

    #[test]
    fn test_classify_small_quake_without_alert() {
        let row = classify(&record(0, 0.9, None)).unwrap();
        assert_eq!(row.time, "1970-01-01 00:00:00");
        assert_eq!(row.mag, Styled::plain("0.90"));
        assert_eq!(row.alert, Styled::plain("-"));
        assert_eq!(row.url, "https://example.test/x");
    }

    #[test]
    fn test_classify_is_idempotent() {
        let input = record(1_700_000_000_000, 7.9, Some("red"));
        assert_eq!(classify(&input).unwrap(), classify(&input).unwrap());
    }

    #[test]
    fn test_classify_all_preserves_order() {
        let records: Vec<_> = (0..5)
            .map(|i| {
                let mut r = record(i * 60_000, 5.0 - i as f64, None);
                r.place = format!("place {i}");
                r
            })
            .collect();

        let rows = classify_all(&records).unwrap();
        let places: Vec<_> = rows.iter().map(|r| r.place.as_str()).collect();
        assert_eq!(places, ["place 0", "place 1", "place 2", "place 3", "place 4"]);
    }

    #[test]
    fn test_classify_all_fails_on_malformed_record() {
        let records = vec![record(0, 3.0, None), record(i64::MIN, 3.0, None)];
        assert!(classify_all(&records).is_err());
    }
}
