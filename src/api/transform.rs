//! Trip record transformation
//!
//! Attaches the derived `trip_time` field to each record and orders the
//! result by it.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

use crate::upstream::TripRecord;

/// A trip record with its derived duration attached.
#[derive(Debug, Clone, Serialize)]
pub struct TimedTripRecord {
    #[serde(flatten)]
    pub record: TripRecord,
    /// `dropoff_datetime - pickup_datetime` in milliseconds. Negative when
    /// dropoff precedes pickup; no clamping.
    pub trip_time: i64,
}

/// A record carried a timestamp in neither accepted form.
#[derive(Debug, PartialEq, Eq)]
pub struct TimestampError {
    pub value: String,
}

impl fmt::Display for TimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unparseable trip timestamp: {}", self.value)
    }
}

impl std::error::Error for TimestampError {}

/// Compute `trip_time` for every record and stable-sort ascending by it.
///
/// Each duration is computed from that record's timestamps alone; records
/// with equal durations keep their original relative order.
pub fn process_records(records: Vec<TripRecord>) -> Result<Vec<TimedTripRecord>, TimestampError> {
    let mut timed = Vec::with_capacity(records.len());
    for record in records {
        let pickup = parse_timestamp(&record.pickup_datetime)?;
        let dropoff = parse_timestamp(&record.dropoff_datetime)?;
        let trip_time = (dropoff - pickup).num_milliseconds();
        timed.push(TimedTripRecord { record, trip_time });
    }

    timed.sort_by_key(|t| t.trip_time);
    Ok(timed)
}

/// Parse an upstream timestamp, accepting RFC 3339 and the zone-less
/// floating form the upstream emits (`2024-01-01T00:00:00.000`).
fn parse_timestamp(value: &str) -> Result<NaiveDateTime, TimestampError> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_utc());
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").map_err(|_| TimestampError {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn record(pickup: &str, dropoff: &str, vendor: &str) -> TripRecord {
        let mut extra = serde_json::Map::new();
        extra.insert(
            "vendor_id".to_string(),
            Value::String(vendor.to_string()),
        );
        TripRecord {
            pickup_datetime: pickup.to_string(),
            dropoff_datetime: dropoff.to_string(),
            extra,
        }
    }

    fn vendor(timed: &TimedTripRecord) -> &str {
        timed.record.extra["vendor_id"].as_str().unwrap()
    }

    #[test]
    fn test_trip_time_signs() {
        let timed = process_records(vec![
            record("2024-01-01T00:00:00Z", "2024-01-01T00:10:00Z", "a"),
            record("2024-01-01T00:00:00Z", "2024-01-01T00:00:00Z", "b"),
            record("2024-01-01T00:10:00Z", "2024-01-01T00:00:00Z", "c"),
        ])
        .unwrap();

        // Ascending: negative, zero, positive
        assert_eq!(timed[0].trip_time, -600_000);
        assert_eq!(vendor(&timed[0]), "c");
        assert_eq!(timed[1].trip_time, 0);
        assert_eq!(timed[2].trip_time, 600_000);
    }

    #[test]
    fn test_shorter_trip_sorts_first() {
        let timed = process_records(vec![
            record("2024-01-01T00:00:00Z", "2024-01-01T00:10:00Z", "long"),
            record("2024-01-01T00:00:00Z", "2024-01-01T00:05:00Z", "short"),
        ])
        .unwrap();

        assert_eq!(vendor(&timed[0]), "short");
        assert_eq!(timed[0].trip_time, 300_000);
        assert_eq!(vendor(&timed[1]), "long");
        assert_eq!(timed[1].trip_time, 600_000);
    }

    #[test]
    fn test_equal_durations_keep_original_order() {
        let timed = process_records(vec![
            record("2024-01-01T01:00:00Z", "2024-01-01T01:05:00Z", "first"),
            record("2024-01-01T00:00:00Z", "2024-01-01T00:10:00Z", "longer"),
            record("2024-01-01T02:00:00Z", "2024-01-01T02:05:00Z", "second"),
            record("2024-01-01T03:00:00Z", "2024-01-01T03:05:00Z", "third"),
        ])
        .unwrap();

        let order: Vec<&str> = timed.iter().map(vendor).collect();
        assert_eq!(order, vec!["first", "second", "third", "longer"]);
    }

    #[test]
    fn test_zoneless_upstream_timestamps() {
        let timed = process_records(vec![record(
            "2024-01-01T00:00:00.000",
            "2024-01-01T00:07:30.500",
            "a",
        )])
        .unwrap();

        assert_eq!(timed[0].trip_time, 450_500);
    }

    #[test]
    fn test_unparseable_timestamp_is_an_error() {
        let err = process_records(vec![record("yesterday", "2024-01-01T00:10:00Z", "a")])
            .unwrap_err();
        assert_eq!(err.value, "yesterday");
    }

    #[test]
    fn test_serialized_record_carries_trip_time_and_passthrough() {
        let timed = process_records(vec![record(
            "2024-01-01T00:00:00Z",
            "2024-01-01T00:10:00Z",
            "a",
        )])
        .unwrap();

        let value = serde_json::to_value(&timed[0]).unwrap();
        assert_eq!(value["trip_time"], 600_000);
        assert_eq!(value["vendor_id"], "a");
        assert_eq!(value["pickup_datetime"], "2024-01-01T00:00:00Z");
    }
}
