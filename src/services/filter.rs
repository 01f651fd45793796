//! Time-window filtering and ordering of entries.

use chrono::{NaiveDateTime, TimeZone};

use super::timestamp::parse_timestamp;
use crate::models::Entry;

/// Parsed timestamp of an entry, if it has a usable one.
pub fn entry_time<Tz: TimeZone>(entry: &Entry, tz: &Tz) -> Option<NaiveDateTime> {
    entry
        .timestamp
        .as_deref()
        .and_then(|ts| parse_timestamp(ts, tz).ok())
}

/// Keep entries whose timestamp falls within `[start, end]`.
///
/// Entries without a parseable timestamp are dropped.
pub fn filter_entries_by_timestamp<Tz: TimeZone>(
    entries: Vec<Entry>,
    start: NaiveDateTime,
    end: NaiveDateTime,
    tz: &Tz,
) -> Vec<Entry> {
    entries
        .into_iter()
        .filter(|entry| {
            entry_time(entry, tz).is_some_and(|time| start <= time && time <= end)
        })
        .collect()
}

/// Stable ascending sort by timestamp; untimed entries go first.
pub fn sort_entries_by_timestamp<Tz: TimeZone>(entries: &mut [Entry], tz: &Tz) {
    entries.sort_by_cached_key(|entry| entry_time(entry, tz).unwrap_or(NaiveDateTime::MIN));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};
    use serde_json::json;

    fn est() -> FixedOffset {
        FixedOffset::west_opt(5 * 3600).unwrap()
    }

    fn local(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 19)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn entry(ts: serde_json::Value, text: &str) -> Entry {
        Entry::from_value(json!({
            "type": "user",
            "timestamp": ts,
            "message": {"content": text}
        }))
    }

    fn texts(entries: &[Entry]) -> Vec<String> {
        entries
            .iter()
            .map(|e| e.raw["message"]["content"].as_str().unwrap_or("").to_string())
            .collect()
    }

    #[test]
    fn test_window_is_inclusive() {
        let entries = vec![
            entry(json!("2025-11-19T16:28:59Z"), "before"),
            entry(json!("2025-11-19T16:29:00Z"), "start"),
            entry(json!("2025-11-19T16:29:15Z"), "inside"),
            entry(json!("2025-11-19T16:30:00Z"), "end"),
            entry(json!("2025-11-19T16:30:01Z"), "after"),
        ];
        let kept = filter_entries_by_timestamp(entries, local(11, 29, 0), local(11, 30, 0), &est());
        assert_eq!(texts(&kept), vec!["start", "inside", "end"]);
    }

    #[test]
    fn test_bad_timestamps_are_dropped() {
        let entries = vec![
            entry(json!(null), "null"),
            entry(json!(""), "empty"),
            entry(json!("not a time"), "garbage"),
            entry(json!(1732033755), "number"),
            Entry::from_value(json!({"type": "summary"})),
            entry(json!("11/19/2025, 11:29:30 AM"), "display"),
        ];
        let kept = filter_entries_by_timestamp(entries, local(11, 29, 0), local(11, 30, 0), &est());
        assert_eq!(texts(&kept), vec!["display"]);
    }

    #[test]
    fn test_offset_timestamps_are_dropped() {
        let entries = vec![entry(json!("2025-11-19T16:29:15+00:00"), "offset")];
        let kept = filter_entries_by_timestamp(entries, local(0, 0, 0), local(23, 59, 59), &est());
        assert!(kept.is_empty());
    }

    #[test]
    fn test_sort_orders_ascending_and_is_stable() {
        let mut entries = vec![
            entry(json!("2025-11-19T16:29:30Z"), "c"),
            entry(json!("2025-11-19T16:29:10Z"), "a"),
            entry(json!("2025-11-19T16:29:20Z"), "b1"),
            entry(json!("2025-11-19T16:29:20Z"), "b2"),
        ];
        sort_entries_by_timestamp(&mut entries, &est());
        assert_eq!(texts(&entries), vec!["a", "b1", "b2", "c"]);
    }

    #[test]
    fn test_sort_puts_untimed_first() {
        let mut entries = vec![
            entry(json!("2025-11-19T16:29:10Z"), "timed"),
            Entry::from_value(json!({"type": "user", "message": {"content": "untimed"}})),
        ];
        sort_entries_by_timestamp(&mut entries, &est());
        assert_eq!(texts(&entries), vec!["untimed", "timed"]);
    }
}
