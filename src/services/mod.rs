//! Services for fetching, aggregation and reporting

pub mod aggregator;
pub mod fetcher;
pub mod reporter;

pub use aggregator::{generate_summary, unpriced_consumptions};
pub use fetcher::{Fetcher, HttpTransport, Transport};
pub use reporter::{render_json, render_text};
