//! Fetcher service for the booking and consumption type sources
//!
//! Each fetch is one unconditional GET followed by a JSON array decode.
//! Failures are all-or-nothing: a source either yields every record or an error.

use crate::types::{Booking, BookdashError, ConsumptionType, Result, SourceConfig};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// Source name used in diagnostics for the bookings endpoint
pub const BOOKINGS_SOURCE: &str = "bookings";

/// Source name used in diagnostics for the consumption type catalog
pub const CONSUMPTION_TYPES_SOURCE: &str = "consumption types";

/// Raw byte transport for a single GET
pub trait Transport {
    fn get(&self, url: &str) -> std::result::Result<Vec<u8>, String>;
}

/// Blocking HTTP transport
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Build a client; `timeout_secs = None` keeps the client's default timeout
    pub fn new(timeout_secs: Option<u64>) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| BookdashError::Config(format!("HTTP client error: {}", e)))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> std::result::Result<Vec<u8>, String> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| format!("HTTP request failed: {}", e))?
            .error_for_status()
            .map_err(|e| format!("HTTP status error: {}", e))?;

        let body = response
            .bytes()
            .map_err(|e| format!("HTTP body read failed: {}", e))?;

        Ok(body.to_vec())
    }
}

/// Decode a JSON array payload into typed records
pub fn decode_records<R: DeserializeOwned>(
    source_name: &'static str,
    mut bytes: Vec<u8>,
) -> Result<Vec<R>> {
    simd_json::from_slice(&mut bytes).map_err(|e| BookdashError::Decode {
        source_name,
        message: e.to_string(),
    })
}

/// Fetches both sources through a transport
pub struct Fetcher<T: Transport> {
    transport: T,
    config: SourceConfig,
}

impl Fetcher<HttpTransport> {
    /// Create a fetcher backed by HTTP
    pub fn from_config(config: SourceConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout_secs)?;
        Ok(Self::with_transport(transport, config))
    }
}

impl<T: Transport> Fetcher<T> {
    /// Create a fetcher with a custom transport
    pub fn with_transport(transport: T, config: SourceConfig) -> Self {
        Self { transport, config }
    }

    pub fn fetch_bookings(&self) -> Result<Vec<Booking>> {
        self.fetch(BOOKINGS_SOURCE, &self.config.bookings_url)
    }

    pub fn fetch_consumption_types(&self) -> Result<Vec<ConsumptionType>> {
        self.fetch(CONSUMPTION_TYPES_SOURCE, &self.config.consumption_types_url)
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    fn fetch<R: DeserializeOwned>(&self, source_name: &'static str, url: &str) -> Result<Vec<R>> {
        debug!(source = source_name, url, "fetching");

        let bytes = self
            .transport
            .get(url)
            .map_err(|message| BookdashError::Transport {
                source_name,
                message,
            })?;

        let records: Vec<R> = decode_records(source_name, bytes)?;
        info!(source = source_name, count = records.len(), "fetched records");
        Ok(records)
    }
}
