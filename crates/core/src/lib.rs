//! # Timekeeper core
//!
//! Domain types, shift arithmetic and report aggregation for the
//! time-tracking bot. Nothing in here talks to a network or a database;
//! storage is reached through the [`store::TimeStore`] trait.

pub mod aggregator;
pub mod clock;
pub mod errors;
pub mod models;
pub mod store;
pub mod time;
