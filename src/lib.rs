//! bookdash: booking dashboard summary
//!
//! Fetches bookings and the consumption type catalog, folds them into a
//! [`types::Summary`] and renders it.

pub mod cli;
pub mod services;
pub mod types;
