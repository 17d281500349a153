//! HTTP API module for the allowance engine.
//!
//! This module provides the REST API endpoints for calculating a pilot's
//! monthly allowances and inspecting the rates in force.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CalculationRequest, DutyPeriodRequest, FlightLegRequest, LogbookEntryRequest, PilotRequest,
    RatesQuery,
};
pub use response::{
    ApiError, CalculationResponse, HealthResponse, RatesResponse, Thresholds,
};
pub use state::AppState;
