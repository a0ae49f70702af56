//! Source endpoint configuration

/// Bookings endpoint
pub const DEFAULT_BOOKINGS_URL: &str =
    "https://66876cc30bc7155dc017a662.mockapi.io/api/dummy-data/bookingList";

/// Consumption type catalog endpoint
pub const DEFAULT_CONSUMPTION_TYPES_URL: &str =
    "https://6686cb5583c983911b03a7f3.mockapi.io/api/dummy-data/masterJenisKonsumsi";

/// Where and how the two sources are fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub bookings_url: String,
    pub consumption_types_url: String,
    /// Request timeout in seconds (None = transport default)
    pub timeout_secs: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            bookings_url: DEFAULT_BOOKINGS_URL.to_string(),
            consumption_types_url: DEFAULT_CONSUMPTION_TYPES_URL.to_string(),
            timeout_secs: None,
        }
    }
}
