//! Type definitions for bookdash

mod booking;
mod config;
mod error;

pub use booking::*;
pub use config::*;
pub use error::*;
