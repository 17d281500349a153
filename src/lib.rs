//! Cockpit crew allowance engine.
//!
//! This crate classifies a pilot's monthly duty timeline into allowance
//! events (tail swaps, transits, layovers, deadheads and night flying) and
//! aggregates them into a monetary report using rank-specific rate tables.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
