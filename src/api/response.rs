//! Response types for the allowance engine API.
//!
//! This module defines the success payloads, the error response structures,
//! and the mapping from engine errors to HTTP statuses.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{
    LAYOVER_THRESHOLD_SECS, NIGHT_WINDOW_END_HOUR, NIGHT_WINDOW_START_HOUR,
    TRANSIT_THRESHOLD_SECS,
};
use crate::config::RateTable;
use crate::error::EngineError;
use crate::models::{AllowanceReport, Rank};

/// Response body for a successful `/calculate` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Identifier of this calculation, also used as the log correlation id.
    pub calculation_id: Uuid,
    /// The allowance report.
    pub report: AllowanceReport,
}

/// Classification thresholds, as published by `/rates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Ground time above which a halt is a transit, in seconds.
    pub transit_threshold_secs: i64,
    /// Ground time above which a halt is a layover, in seconds.
    pub layover_threshold_secs: i64,
    /// Hour the night window opens.
    pub night_window_start_hour: u32,
    /// Hour the night window closes.
    pub night_window_end_hour: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            transit_threshold_secs: TRANSIT_THRESHOLD_SECS,
            layover_threshold_secs: LAYOVER_THRESHOLD_SECS,
            night_window_start_hour: NIGHT_WINDOW_START_HOUR,
            night_window_end_hour: NIGHT_WINDOW_END_HOUR,
        }
    }
}

/// Response body for `/rates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesResponse {
    /// Agreement code.
    pub agreement: String,
    /// Date the returned tables took effect.
    pub effective_date: NaiveDate,
    /// Rate table per rank.
    pub rates: BTreeMap<Rank, RateTable>,
    /// Classification thresholds.
    pub thresholds: Thresholds,
}

/// Response body for `/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `healthy` when the service answers.
    pub status: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::RateNotFound { rank, date } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "RATE_NOT_FOUND",
                    format!("Rate table not found for rank '{}' on date {}", rank, date),
                    "No allowance rates are in force for the requested month",
                ),
            },
            EngineError::MalformedTimeline { leg_id, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MALFORMED_TIMELINE",
                    format!("Malformed timeline at leg '{}'", leg_id),
                    message,
                ),
            },
            EngineError::MissingRequiredInput { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("MISSING_REQUIRED_INPUT", message),
            },
            EngineError::InvalidDate { value, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE",
                    format!("Invalid date '{}'", value),
                    message,
                ),
            },
        }
    }
}
