//! Booking, consumption catalog and summary types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Missing or `null` both decode to the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single reservation event as served by the bookings endpoint.
///
/// Only `participants` and the consumption names feed the summary; the
/// descriptive fields tolerate being absent or `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default, deserialize_with = "null_as_default")]
    pub booking_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub office_name: String,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub list_consumption: Vec<Consumption>,
    pub participants: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub room_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
}

/// Consumption item referenced by a booking (join key against the catalog)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Consumption {
    pub name: String,
}

/// Catalog entry mapping a consumption name to its max unit price
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionType {
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    pub name: String,
    /// Smallest currency unit
    pub max_price: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
}

/// Aggregate result of one run
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Summary {
    pub total_bookings: u64,
    pub total_participants: i64,
    /// Occurrences per consumption name across all bookings
    pub consumption_counts: HashMap<String, u64>,
    pub total_consumption_cost: i64,
}

impl Summary {
    /// Consumption counts sorted by name
    pub fn sorted_counts(&self) -> Vec<(&str, u64)> {
        let mut counts: Vec<(&str, u64)> = self
            .consumption_counts
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        counts.sort_by(|a, b| a.0.cmp(b.0));
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOKING_JSON: &str = r#"{
        "bookingDate": "2024-01-02T00:00:00.000Z",
        "officeName": "UID JAKARTA",
        "startTime": "2024-01-02T02:00:00.000Z",
        "endTime": "2024-01-02T05:00:00.000Z",
        "listConsumption": [{"name": "Snack Siang"}, {"name": "Makan Siang"}],
        "participants": 12,
        "roomName": "Ruang Prambanan",
        "id": "1"
    }"#;

    #[test]
    fn test_booking_deserialize_camel_case() {
        let booking: Booking = serde_json::from_str(BOOKING_JSON).unwrap();

        assert_eq!(booking.office_name, "UID JAKARTA");
        assert_eq!(booking.room_name, "Ruang Prambanan");
        assert_eq!(booking.participants, 12);
        assert_eq!(booking.list_consumption.len(), 2);
        assert_eq!(booking.list_consumption[0].name, "Snack Siang");
        assert_eq!(
            booking.start_time.map(|t| t.to_rfc3339()).as_deref(),
            Some("2024-01-02T02:00:00+00:00")
        );
    }

    #[test]
    fn test_booking_missing_consumption_list_defaults_empty() {
        let json = r#"{
            "bookingDate": "2024-01-02",
            "officeName": "UID",
            "startTime": "2024-01-02T02:00:00Z",
            "endTime": "2024-01-02T03:00:00Z",
            "participants": 0,
            "roomName": "A",
            "id": "7"
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert!(booking.list_consumption.is_empty());
    }

    #[test]
    fn test_booking_null_consumption_list_defaults_empty() {
        let json = r#"{"participants": 5, "listConsumption": null, "officeName": null}"#;
        let booking: Booking = serde_json::from_str(json).unwrap();

        assert!(booking.list_consumption.is_empty());
        assert_eq!(booking.office_name, "");
        assert_eq!(booking.participants, 5);
    }

    #[test]
    fn test_booking_only_participants_present() {
        let booking: Booking = serde_json::from_str(r#"{"participants": 2}"#).unwrap();

        assert_eq!(booking.participants, 2);
        assert!(booking.start_time.is_none());
        assert!(booking.end_time.is_none());
        assert!(booking.id.is_empty());
    }

    #[test]
    fn test_booking_participants_still_type_checked() {
        let result: serde_json::Result<Booking> =
            serde_json::from_str(r#"{"participants": "many"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_consumption_type_without_metadata() {
        let json = r#"{"name": "Coffee", "maxPrice": 10, "id": "1"}"#;
        let ct: ConsumptionType = serde_json::from_str(json).unwrap();

        assert_eq!(ct.created_at, "");
        assert_eq!(ct.name, "Coffee");
        assert_eq!(ct.max_price, 10);
    }

    #[test]
    fn test_consumption_type_deserialize() {
        let json = r#"{"createdAt":"2024-07-04T10:00:00.000Z","name":"Snack Siang","maxPrice":20000,"id":"1"}"#;
        let ct: ConsumptionType = serde_json::from_str(json).unwrap();

        assert_eq!(ct.name, "Snack Siang");
        assert_eq!(ct.max_price, 20000);
    }

    #[test]
    fn test_summary_sorted_counts() {
        let mut summary = Summary::default();
        summary.consumption_counts.insert("Tea".into(), 2);
        summary.consumption_counts.insert("Coffee".into(), 5);

        assert_eq!(summary.sorted_counts(), vec![("Coffee", 5), ("Tea", 2)]);
    }
}
