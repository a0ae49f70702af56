//! Aggregator service for computing the booking summary

use crate::types::{Booking, ConsumptionType, Summary};
use std::collections::HashSet;

/// Fold bookings into totals and per-name counts, then price the counts
/// against the consumption type catalog.
///
/// Catalog entries are applied one by one: a name that appears twice in the
/// catalog is priced twice, and a counted name with no catalog entry costs 0
/// but keeps its count.
pub fn generate_summary(bookings: &[Booking], catalog: &[ConsumptionType]) -> Summary {
    let mut summary = Summary::default();

    for booking in bookings {
        summary.total_bookings = summary.total_bookings.saturating_add(1);
        summary.total_participants = summary
            .total_participants
            .saturating_add(booking.participants);

        for consumption in &booking.list_consumption {
            let count = summary
                .consumption_counts
                .entry(consumption.name.clone())
                .or_insert(0);
            *count = count.saturating_add(1);
        }
    }

    for consumption_type in catalog {
        let count = summary
            .consumption_counts
            .get(&consumption_type.name)
            .copied()
            .unwrap_or(0);
        let cost = i64::try_from(count)
            .unwrap_or(i64::MAX)
            .saturating_mul(consumption_type.max_price);
        summary.total_consumption_cost = summary.total_consumption_cost.saturating_add(cost);
    }

    summary
}

/// Counted names with no catalog entry, sorted
pub fn unpriced_consumptions(summary: &Summary, catalog: &[ConsumptionType]) -> Vec<String> {
    let priced: HashSet<&str> = catalog.iter().map(|c| c.name.as_str()).collect();

    let mut unpriced: Vec<String> = summary
        .consumption_counts
        .keys()
        .filter(|name| !priced.contains(name.as_str()))
        .cloned()
        .collect();
    unpriced.sort();
    unpriced
}
