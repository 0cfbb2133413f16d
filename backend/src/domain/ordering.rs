//! Chronological ordering for the derived views.
//!
//! Timestamps are the ISO-8601 strings stored on the records. Both sorts are
//! stable and work on an owned copy, so reading a view never reorders the
//! backing collection. Values that cannot be parsed go last in either
//! direction, keeping their relative order.
//!
//! Reading rules, all resolved to a UTC instant:
//! - with an offset (`Z`, `-03:00`): that instant
//! - date and time without an offset: wall-clock time in the local zone
//! - bare date (`2025-10-25`): midnight UTC

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::cmp::Ordering;

use super::models::Scheduled;

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parse a stored `dateTime`, reading offset-less values in the local zone
pub fn parse_date_time(value: &str) -> Option<DateTime<Utc>> {
    parse_date_time_in(value, &Local)
}

/// Parse a stored `dateTime`, reading offset-less values in `zone`
pub fn parse_date_time_in<Tz: TimeZone>(value: &str, zone: &Tz) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return local_to_utc(&naive, zone);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Utc.from_utc_datetime(&midnight))
}

/// Resolve a wall-clock time in `zone`. A time skipped by a DST jump is
/// moved forward past the gap; a repeated one takes its first occurrence.
pub(crate) fn local_to_utc<Tz: TimeZone>(naive: &NaiveDateTime, zone: &Tz) -> Option<DateTime<Utc>> {
    zone.from_local_datetime(naive)
        .earliest()
        .or_else(|| zone.from_local_datetime(&(*naive + Duration::hours(1))).earliest())
        .map(|resolved| resolved.with_timezone(&Utc))
}

/// Soonest first
pub fn sort_soonest_first<T: Scheduled>(records: Vec<T>) -> Vec<T> {
    sort_soonest_first_in(records, &Local)
}

/// Most recent first
pub fn sort_most_recent_first<T: Scheduled>(records: Vec<T>) -> Vec<T> {
    sort_most_recent_first_in(records, &Local)
}

pub fn sort_soonest_first_in<T: Scheduled, Tz: TimeZone>(mut records: Vec<T>, zone: &Tz) -> Vec<T> {
    records.sort_by_cached_key(|r| SortKey::new(parse_date_time_in(r.date_time(), zone), false));
    records
}

pub fn sort_most_recent_first_in<T: Scheduled, Tz: TimeZone>(
    mut records: Vec<T>,
    zone: &Tz,
) -> Vec<T> {
    records.sort_by_cached_key(|r| SortKey::new(parse_date_time_in(r.date_time(), zone), true));
    records
}

/// Orders parseable timestamps before unparseable ones, then by time
#[derive(Debug, PartialEq, Eq)]
struct SortKey {
    unparseable: bool,
    time: Option<DateTime<Utc>>,
    descending: bool,
}

impl SortKey {
    fn new(time: Option<DateTime<Utc>>, descending: bool) -> Self {
        Self {
            unparseable: time.is_none(),
            time,
            descending,
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.unparseable
            .cmp(&other.unparseable)
            .then_with(|| {
                let by_time = self.time.cmp(&other.time);
                if self.descending {
                    by_time.reverse()
                } else {
                    by_time
                }
            })
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
