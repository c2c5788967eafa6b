//! Tolerant parsing of memory-store search responses.
//!
//! Known shapes:
//!
//! ```text
//! { "content": { "episodic_memory": [[], [ {..}, {..} ], [""]] } }
//! { "content": { "profile_memory": [ {..} ] } }
//! { "data": [ {..} ] }   { "memories": [..] }   { "results": [..] }
//! [ {..}, {..} ]
//! ```
//!
//! Nested arrays are flattened in order. Entries that are not objects or
//! carry no content are skipped.

use chrono::DateTime;
use serde_json::{Map, Value};

use crate::types::MemoryRecord;

const CONTAINER_KEYS: [&str; 5] = [
    "episodic_memory",
    "profile_memory",
    "data",
    "memories",
    "results",
];
const CONTENT_KEYS: [&str; 3] = ["content", "episode_content", "value"];
const ID_KEYS: [&str; 3] = ["uuid", "mem_id", "id"];
const TIMESTAMP_KEYS: [&str; 2] = ["timestamp", "created_at"];

/// Extract every usable record from a search response body.
pub fn parse_records(body: &Value) -> Vec<MemoryRecord> {
    let mut records = Vec::new();

    match body {
        Value::Array(_) => collect(body, &mut records),
        Value::Object(map) => {
            let root = match map.get("content") {
                Some(inner @ Value::Object(_)) => inner,
                _ => body,
            };
            for key in CONTAINER_KEYS {
                if let Some(entries) = root.get(key) {
                    collect(entries, &mut records);
                }
            }
        }
        _ => {}
    }

    records
}

fn collect(value: &Value, out: &mut Vec<MemoryRecord>) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect(item, out);
            }
        }
        Value::Object(map) => {
            if let Some(record) = parse_entry(map) {
                out.push(record);
            }
        }
        _ => {}
    }
}

fn parse_entry(map: &Map<String, Value>) -> Option<MemoryRecord> {
    let content = CONTENT_KEYS.iter().find_map(|key| {
        map.get(*key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    })?;

    let id = ID_KEYS
        .iter()
        .find_map(|key| match map.get(*key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
        .unwrap_or_default();

    let timestamp = TIMESTAMP_KEYS
        .iter()
        .find_map(|key| map.get(*key).and_then(parse_timestamp))
        .unwrap_or(0);

    Some(MemoryRecord {
        id,
        content: content.to_string(),
        timestamp,
    })
}

/// Milliseconds since the epoch from a number, numeric string or RFC 3339 string.
fn parse_timestamp(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s
            .parse::<i64>()
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.timestamp_millis())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_episodic_memory() {
        let body = json!({
            "status": 0,
            "content": {
                "episodic_memory": [
                    [],
                    [
                        { "uuid": "a1", "content": "likes wool, size M", "timestamp": 1700000000000i64 },
                        { "uuid": "a2", "content": "prefers light gray", "timestamp": 1700000001000i64 }
                    ],
                    [""]
                ]
            }
        });
        let records = parse_records(&body);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], MemoryRecord::new("a1", "likes wool, size M", 1700000000000));
        assert_eq!(records[1].id, "a2");
    }

    #[test]
    fn test_profile_memory() {
        let body = json!({
            "content": {
                "profile_memory": [
                    { "episode_content": "I usually wear a 40 Regular jacket." }
                ]
            }
        });
        let records = parse_records(&body);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].content, "I usually wear a 40 Regular jacket.");
        assert_eq!(records[0].id, "");
        assert_eq!(records[0].timestamp, 0);
    }

    #[test]
    fn test_flat_array_and_data_wrapper() {
        let flat = json!([{ "mem_id": "m1", "episode_content": "brunch look" }]);
        assert_eq!(parse_records(&flat)[0].id, "m1");

        let wrapped = json!({ "data": [{ "id": 7, "content": "work look" }] });
        let records = parse_records(&wrapped);
        assert_eq!(records[0].id, "7");
        assert_eq!(records[0].content, "work look");
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let body = json!({
            "content": {
                "episodic_memory": [
                    "",
                    null,
                    42,
                    { "uuid": "no-content" },
                    { "uuid": "blank", "content": "   " },
                    { "uuid": "ok", "content": "keep me" }
                ]
            }
        });
        let records = parse_records(&body);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "ok");
    }

    #[test]
    fn test_unrecognised_bodies_yield_nothing() {
        assert!(parse_records(&json!("hello")).is_empty());
        assert!(parse_records(&json!({ "status": "ok" })).is_empty());
        assert!(parse_records(&json!({ "content": "plain text" })).is_empty());
    }

    #[test]
    fn test_timestamp_formats() {
        let body = json!([
            { "content": "a", "timestamp": "2025-01-01T00:00:00Z" },
            { "content": "b", "timestamp": "1700000000000" },
            { "content": "c", "created_at": 1.5e12 },
            { "content": "d", "timestamp": "yesterday" }
        ]);
        let records = parse_records(&body);
        assert_eq!(records[0].timestamp, 1735689600000);
        assert_eq!(records[1].timestamp, 1700000000000);
        assert_eq!(records[2].timestamp, 1500000000000);
        assert_eq!(records[3].timestamp, 0);
    }
}
