//! HTTP request handlers for the allowance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_with_config;
use crate::error::EngineError;
use crate::models::CompactDate;

use super::request::{CalculationRequest, RatesQuery};
use super::response::{
    ApiError, ApiErrorResponse, CalculationResponse, HealthResponse, RatesResponse, Thresholds,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/rates", get(rates_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

fn engine_error_response(error: EngineError) -> Response {
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a pilot-month and returns the allowance report.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let config = state.config();
    let (pilot, timeline, logbook) =
        request.into_inputs(config.stations(), config.agreement().reference_offset);

    let start_time = Instant::now();
    match calculate_with_config(&pilot, &timeline, logbook.as_ref(), config) {
        Ok(report) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                employee_id = %pilot.employee_id,
                legs = timeline.leg_count(),
                total_amount = %report.allowances.total_amount,
                warnings = report.warnings.len(),
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(CalculationResponse {
                    calculation_id: correlation_id,
                    report,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            engine_error_response(err)
        }
    }
}

/// Handler for GET /rates endpoint.
///
/// Returns the rate tables in force on `date` (default today) for every rank.
async fn rates_handler(
    State(state): State<AppState>,
    Query(query): Query<RatesQuery>,
) -> impl IntoResponse {
    let date = match query.date.as_deref() {
        Some(text) => match CompactDate::parse(text, None) {
            Ok(date) => date.to_naive_date(),
            Err(err) => {
                warn!(date = %text, "Invalid rates date");
                return engine_error_response(err);
            }
        },
        None => Utc::now().date_naive(),
    };

    let config = state.config();
    match config.active_rates(date) {
        Ok((effective_date, rates)) => {
            info!(date = %date, effective_date = %effective_date, "Serving rate tables");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(RatesResponse {
                    agreement: config.agreement().code.clone(),
                    effective_date,
                    rates,
                    thresholds: Thresholds::default(),
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(date = %date, error = %err, "Rate lookup failed");
            engine_error_response(err)
        }
    }
}

/// Handler for GET /health endpoint.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
