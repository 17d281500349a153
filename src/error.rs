//! Error types for the allowance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that aborts a calculation run. Conditions that only
//! degrade accuracy are reported as warnings on the report instead.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::Rank;

/// The main error type for the allowance engine.
///
/// # Example
///
/// ```
/// use allowance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/agreement.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/agreement.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No rate table is effective for the rank on the given date.
    #[error("Rate table not found for rank '{rank}' on date {date}")]
    RateNotFound {
        /// The pilot rank.
        rank: Rank,
        /// The date for which the rates were requested.
        date: NaiveDate,
    },

    /// The duty timeline is out of order or contains an impossible leg.
    #[error("Malformed timeline at leg '{leg_id}': {message}")]
    MalformedTimeline {
        /// The identifier of the offending leg.
        leg_id: String,
        /// A description of what is wrong with the leg.
        message: String,
    },

    /// Required input, such as the schedule itself, was not supplied.
    #[error("Missing required input: {message}")]
    MissingRequiredInput {
        /// What was missing.
        message: String,
    },

    /// A date string could not be understood.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate {
        /// The text that failed to parse.
        value: String,
        /// Why it failed.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
