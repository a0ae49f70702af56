//! Text and JSON rendering of a summary

use crate::types::{BookdashError, Result, Summary};

/// Currency label printed before the total cost
const CURRENCY_LABEL: &str = "Rp";

/// Render the dashboard summary as plain text (names in ascending order)
pub fn render_text(summary: &Summary) -> String {
    let mut output = String::new();

    output.push_str("Dashboard Summary:\n");
    output.push_str(&format!("Total Bookings: {}\n", summary.total_bookings));
    output.push_str(&format!(
        "Total Participants: {}\n",
        summary.total_participants
    ));

    output.push_str("Consumption Counts:\n");
    for (name, count) in summary.sorted_counts() {
        output.push_str(&format!("  {}: {}\n", name, count));
    }

    output.push_str(&format!(
        "Total Consumption Cost: {} {}\n",
        CURRENCY_LABEL, summary.total_consumption_cost
    ));

    output
}

/// Render the summary as pretty-printed JSON
pub fn render_json(summary: &Summary) -> Result<String> {
    serde_json::to_string_pretty(summary).map_err(|e| BookdashError::Render(e.to_string()))
}
