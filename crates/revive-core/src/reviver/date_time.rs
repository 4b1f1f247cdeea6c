//! Date-time reviver
//!
//! Converts strings of the shape `YYYY-MM-DDTHH:MM:SS(.f{1,3})?Z` into UTC
//! instants. Anything else, including other offsets, more than three
//! fractional digits, or strings that only look like a date but name no real
//! instant, is returned untouched.

use super::{KeySet, Reviver};
use crate::value::Revived;
use chrono::{DateTime, Timelike, Utc};
use regex::Regex;
use std::sync::OnceLock;

static DATE_TIME_REGEX: OnceLock<Regex> = OnceLock::new();

// ASCII classes only; `\d` would also accept non-ASCII digits
fn date_time_regex() -> &'static Regex {
    DATE_TIME_REGEX.get_or_init(|| {
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(\.[0-9]{1,3})?Z$")
            .expect("date-time pattern is valid")
    })
}

/// Whether `s` has the exact UTC date-time shape this reviver converts
pub fn is_date_time(s: &str) -> bool {
    date_time_regex().is_match(s)
}

/// Create a date-time reviver bound to `keys`.
///
/// With no keys, every string value in the document is tested against the
/// pattern. That is convenient but costs a regex match per string, which adds
/// up on large documents; name the keys when they are known.
pub fn date_time<I, K>(keys: I) -> DateTimeReviver
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    DateTimeReviver::new(KeySet::new(keys))
}

/// Reviver turning ISO-8601 UTC strings into [`Revived::DateTime`]
#[derive(Debug, Clone, Default)]
pub struct DateTimeReviver {
    keys: KeySet,
}

impl DateTimeReviver {
    pub fn new(keys: KeySet) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &KeySet {
        &self.keys
    }

    /// True when every key is scanned
    pub fn scans_all_keys(&self) -> bool {
        self.keys.is_empty()
    }

    fn applies_to(&self, key: &str) -> bool {
        self.keys.is_empty() || self.keys.contains(key)
    }
}

impl Reviver for DateTimeReviver {
    fn revive(&self, key: &str, value: Revived) -> Revived {
        if self.applies_to(key) {
            if let Revived::String(s) = &value {
                if is_date_time(s) {
                    match parse_utc(s) {
                        Some(dt) => {
                            log::trace!("revived date-time at key '{}': {}", key, s);
                            return Revived::DateTime(dt);
                        }
                        None => log::warn!(
                            "value at key '{}' looks like a date-time but is not a valid instant: {}",
                            key,
                            s
                        ),
                    }
                }
            }
        }
        value
    }
}

fn parse_utc(s: &str) -> Option<DateTime<Utc>> {
    let dt = DateTime::parse_from_rfc3339(s).ok()?.with_timezone(&Utc);
    // chrono encodes a leap second as nanosecond >= 1e9
    if dt.nanosecond() >= 1_000_000_000 {
        return None;
    }
    Some(dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_pattern_accepts_fraction_lengths() {
        assert!(is_date_time("2025-01-22T09:37:40Z"));
        assert!(is_date_time("2025-01-22T09:37:40.9Z"));
        assert!(is_date_time("2025-01-22T09:37:40.99Z"));
        assert!(is_date_time("2025-01-22T09:37:40.994Z"));
    }

    #[test]
    fn test_pattern_rejects_near_misses() {
        let rejected = [
            "2025-01-22T09:37:40.9941Z",
            "2025-01-22T09:37:40.Z",
            "2025-01-22T09:37:40",
            "2025-01-22T09:37:40+00:00",
            "2025-01-22t09:37:40Z",
            "2025-01-22T09:37:40z",
            "2025-01-22 09:37:40Z",
            "2025-01-22T09:37Z",
            "25-01-22T09:37:40Z",
            " 2025-01-22T09:37:40Z",
            "2025-01-22T09:37:40Z ",
            "2025-01-22",
            "",
            "２０２５-01-22T09:37:40Z",
        ];
        for s in rejected {
            assert!(!is_date_time(s), "accepted {s:?}");
        }
    }

    #[test]
    fn test_parse_millis() {
        let dt = parse_utc("2025-01-22T09:37:40.994Z").unwrap();
        let expected = Utc.with_ymd_and_hms(2025, 1, 22, 9, 37, 40).unwrap()
            + chrono::Duration::milliseconds(994);
        assert_eq!(dt, expected);
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(parse_utc("2025-13-01T00:00:00Z").is_none());
        assert!(parse_utc("2025-01-32T00:00:00Z").is_none());
        assert!(parse_utc("2025-02-29T00:00:00Z").is_none());
        assert!(parse_utc("2025-01-01T25:00:00Z").is_none());
        assert!(parse_utc("2016-12-31T23:59:60Z").is_none());
    }

    #[test]
    fn test_parse_leap_day() {
        assert!(parse_utc("2024-02-29T00:00:00Z").is_some());
    }

    #[test]
    fn test_scans_all_keys() {
        assert!(date_time(Vec::<String>::new()).scans_all_keys());
        assert!(!date_time(["created"]).scans_all_keys());
    }
}
