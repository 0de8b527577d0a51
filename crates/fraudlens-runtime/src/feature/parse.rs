//! Field parsers used by the normalizer

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use fraudlens_core::Value;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M", "%I:%M %p", "%I:%M:%S %p"];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y", "%m/%d/%Y"];

/// Hour of day (0-23) of a timestamp string.
///
/// Date-only strings resolve to hour 0. Returns `None` when no known format
/// matches.
pub fn hour_of_day(raw: &str) -> Option<u32> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.hour());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.hour())
        .or_else(|| {
            TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())
                .map(|t| t.hour())
        })
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                .map(|_| 0)
        })
}

/// Result of collapsing a dotted address into a single number
#[derive(Debug, Clone, PartialEq)]
pub struct IpChecksum {
    /// Sum of all numeric octets
    pub value: f64,
    /// Octets that were not purely digits
    pub skipped: Vec<String>,
}

/// Sum the dot-separated numeric octets of an address.
///
/// Non-numeric parts are skipped. The result is a lossy checksum: distinct
/// addresses can share a value (`10.0.0.1` and `1.0.0.10`).
pub fn ip_checksum(raw: &str) -> IpChecksum {
    let mut sum: u64 = 0;
    let mut skipped = Vec::new();

    for part in raw.split('.') {
        let numeric = !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        match part.parse::<u64>() {
            Ok(octet) if numeric => sum = sum.saturating_add(octet),
            _ => skipped.push(part.to_string()),
        }
    }

    IpChecksum {
        value: sum as f64,
        skipped,
    }
}

/// Coerce a yes/no style value to 0 or 1; missing values are 0
pub fn flag(value: Option<&Value>) -> f64 {
    let set = match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => *n != 0.0,
        Some(Value::String(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "y" | "1" | "t"
        ),
        Some(Value::Null) | None => false,
    };
    if set {
        1.0
    } else {
        0.0
    }
}
