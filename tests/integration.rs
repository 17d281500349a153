//! Integration tests for the allowance engine HTTP API.
//!
//! This test suite covers:
//! - A full month with every allowance category
//! - Transit and layover threshold boundaries
//! - Tail swaps, including registrations filled from the logbook
//! - Domestic resolution from the station directory
//! - Missing logbook handling
//! - Rank-specific rates
//! - Rate lookup and health endpoints
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use allowance_engine::api::{AppState, create_router};
use allowance_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/cockpit_crew").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

fn assert_decimal(value: &Value, expected: &str) {
    let actual = value
        .as_str()
        .unwrap_or_else(|| panic!("Expected decimal string, got {}", value));
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {}, got {}",
        expected,
        actual
    );
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri("/calculate")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    send(router, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

fn pilot(rank: &str) -> Value {
    json!({
        "employee_id": "10234",
        "name": "R. Menon",
        "rank": rank,
        "base": "DEL",
        "aircraft_type": "A320"
    })
}

fn leg(id: &str, date: &str, route: (&str, &str), dep: &str, arr: &str, tail: Option<&str>) -> Value {
    json!({
        "id": id,
        "date": date,
        "departure_station": route.0,
        "arrival_station": route.1,
        "departure_time": dep,
        "arrival_time": arr,
        "tail_number": tail
    })
}

fn deadhead(id: &str, date: &str, route: (&str, &str), dep: &str, arr: &str) -> Value {
    let mut value = leg(id, date, route, dep, arr, None);
    value["operating"] = json!(false);
    value
}

fn logbook_entry(date: &str, route: (&str, &str), tail: Option<&str>) -> Value {
    json!({
        "date": date,
        "departure_station": route.0,
        "arrival_station": route.1,
        "tail_number": tail
    })
}

fn create_request(rank: &str, periods: Vec<Vec<Value>>, logbook: Option<Vec<Value>>) -> Value {
    let mut request = json!({
        "pilot": pilot(rank),
        "duty_periods": periods
            .into_iter()
            .map(|legs| json!({ "legs": legs }))
            .collect::<Vec<_>>()
    });
    if let Some(entries) = logbook {
        request["logbook"] = json!(entries);
    }
    request
}

/// Two connected same-aircraft legs; the second departs at `second_departure`
/// from BOM where the first arrived at 08:00.
fn two_leg_request(second_departure: &str, second_arrival: &str) -> Value {
    let legs = vec![
        leg("AI-665", "2026-03-05", ("DEL", "BOM"), "2026-03-05T06:00:00", "2026-03-05T08:00:00", Some("VT-IWN")),
        leg("AI-676", "2026-03-05", ("BOM", "CCU"), second_departure, second_arrival, Some("VT-IWN")),
    ];
    let logbook = vec![
        logbook_entry("2026-03-05", ("DEL", "BOM"), Some("VT-IWN")),
        logbook_entry("2026-03-05", ("BOM", "CCU"), Some("VT-IWN")),
    ];
    create_request("CP", vec![legs], Some(logbook))
}

fn warning_codes(report: &Value) -> Vec<String> {
    report["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["code"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Full month
// =============================================================================

fn month_request() -> Value {
    let periods = vec![
        vec![
            leg("AI-101", "01/03/26", ("DEL", "BOM"), "2026-03-01T06:00:00", "2026-03-01T08:00:00", Some("VT-IWN")),
            leg("AI-102", "01/03/26", ("BOM", "CCU"), "2026-03-01T10:00:00", "2026-03-01T12:30:00", Some("VT-IWP")),
            leg("AI-103", "01/03/26", ("CCU", "DEL"), "2026-03-01T13:30:00", "2026-03-01T16:00:00", Some("VT-IWP")),
        ],
        vec![
            leg("AI-201", "05/03/26", ("DEL", "MAA"), "2026-03-05T20:00:00", "2026-03-05T23:00:00", Some("VT-IWN")),
            leg("AI-202", "06/03/26", ("MAA", "DEL"), "2026-03-06T23:30:00", "2026-03-07T02:30:00", Some("VT-IWN")),
        ],
        vec![deadhead("AI-301", "10/03/2026", ("DEL", "BOM"), "2026-03-10T04:00:00", "2026-03-10T06:00:00")],
    ];
    let logbook = vec![
        logbook_entry("01/03/26", ("DEL", "BOM"), Some("VT-IWN")),
        logbook_entry("01/03/26", ("BOM", "CCU"), Some("VT-IWP")),
        logbook_entry("01/03/26", ("CCU", "DEL"), Some("VT-IWP")),
        logbook_entry("05/03/26", ("DEL", "MAA"), Some("VT-IWN")),
        logbook_entry("06/03/26", ("MAA", "DEL"), Some("VT-IWN")),
    ];
    create_request("CP", periods, Some(logbook))
}

#[tokio::test]
async fn test_full_month_category_totals() {
    let (status, body) = post_calculate(create_router_for_test(), month_request()).await;
    assert_eq!(status, StatusCode::OK);

    let allowances = &body["report"]["allowances"];
    assert_eq!(allowances["tail_swap"]["count"], 1);
    assert_decimal(&allowances["tail_swap"]["amount"], "1500");
    assert_decimal(&allowances["transit"]["hours"], "2");
    assert_decimal(&allowances["transit"]["amount"], "2000");
    assert_eq!(allowances["layover"]["count"], 1);
    assert_decimal(&allowances["layover"]["extra_hours"], "0.5");
    assert_decimal(&allowances["layover"]["extra_amount"], "75");
    assert_decimal(&allowances["layover"]["total"], "3075");
    assert_decimal(&allowances["deadhead"]["hours"], "2");
    assert_decimal(&allowances["deadhead"]["amount"], "8000");
    assert_decimal(&allowances["night"]["hours"], "4.5");
    assert_decimal(&allowances["night"]["amount"], "9000");
    assert_decimal(&allowances["total_amount"], "23575");

    assert!(body["report"]["warnings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_full_month_summary() {
    let (_, body) = post_calculate(create_router_for_test(), month_request()).await;
    let summary = &body["report"]["summary"];

    assert_eq!(summary["block_hours"], "13:00");
    assert_eq!(summary["duty_hours"], "18:00");
    assert_eq!(summary["operating_flights"], 5);
    assert_eq!(summary["deadhead_flights"], 1);
    assert_eq!(summary["layover_count"], 1);

    let pilot_info = &body["report"]["pilot_info"];
    assert_eq!(pilot_info["rank"], "CP");
    assert_eq!(pilot_info["rank_full"], "Captain");
}

#[tokio::test]
async fn test_full_month_details() {
    let (_, body) = post_calculate(create_router_for_test(), month_request()).await;
    let allowances = &body["report"]["allowances"];

    assert_eq!(
        allowances["tail_swap"]["details"][0]["description"],
        "VT-IWN → VT-IWP (DEL-BOM → BOM-CCU)"
    );
    assert_eq!(allowances["tail_swap"]["details"][0]["date"], "01/03/2026");
    assert_eq!(
        allowances["transit"]["details"][0]["description"],
        "BOM | arr 08:00 → dep 10:00 | Halt: 2.00h → Eligible: 2.00h"
    );
    assert_eq!(
        allowances["layover"]["details"][0]["description"],
        "MAA: 24.50 hrs (05/03 23:00 → 06/03 23:30) = 3000.00 + 75.00"
    );
    assert_eq!(
        allowances["deadhead"]["details"][0]["description"],
        "DEL-BOM (Deadhead) | 02:00 block"
    );
    assert_eq!(
        allowances["night"]["details"][0]["description"],
        "MAA-DEL | 23:30-02:30 | Night: 2.50 hrs"
    );
}

#[tokio::test]
async fn test_full_month_ledger_grouped_by_date() {
    let (_, body) = post_calculate(create_router_for_test(), month_request()).await;
    let ledger = body["report"]["ledger"].as_array().unwrap();

    let dates: Vec<&str> = ledger.iter().map(|g| g["date"].as_str().unwrap()).collect();
    assert_eq!(dates, vec!["01/03/2026", "05/03/2026", "06/03/2026", "10/03/2026"]);

    let first_day: Vec<&str> = ledger[0]["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["type"].as_str().unwrap())
        .collect();
    assert_eq!(first_day, vec!["tail_swap", "transit"]);

    let last_day: Vec<&str> = ledger[3]["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["type"].as_str().unwrap())
        .collect();
    assert_eq!(last_day, vec!["deadhead", "night"]);
    assert_decimal(&ledger[3]["entries"][0]["amount"], "8000");
}

#[tokio::test]
async fn test_repeated_requests_produce_identical_reports() {
    let (_, first) = post_calculate(create_router_for_test(), month_request()).await;
    let (_, second) = post_calculate(create_router_for_test(), month_request()).await;

    assert_eq!(first["report"], second["report"]);
    assert_ne!(first["calculation_id"], second["calculation_id"]);
}

// =============================================================================
// Threshold boundaries
// =============================================================================

#[tokio::test]
async fn test_exactly_90_minutes_is_not_transit() {
    let request = two_leg_request("2026-03-05T09:30:00", "2026-03-05T11:30:00");
    let (_, body) = post_calculate(create_router_for_test(), request).await;

    let transit = &body["report"]["allowances"]["transit"];
    assert_decimal(&transit["amount"], "0");
    assert!(transit["details"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_one_second_over_90_minutes_is_transit() {
    let request = two_leg_request("2026-03-05T09:30:01", "2026-03-05T11:30:01");
    let (_, body) = post_calculate(create_router_for_test(), request).await;

    let transit = &body["report"]["allowances"]["transit"];
    assert_decimal(&transit["hours"], "1.50");
    assert_decimal(&transit["amount"], "1500.28");
    assert_eq!(transit["details"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_91_minutes_is_transit() {
    let request = two_leg_request("2026-03-05T09:31:00", "2026-03-05T11:31:00");
    let (_, body) = post_calculate(create_router_for_test(), request).await;

    let transit = &body["report"]["allowances"]["transit"];
    assert_decimal(&transit["hours"], "1.52");
    assert_decimal(&transit["amount"], "1516.67");
}

#[tokio::test]
async fn test_exactly_10_hours_is_capped_transit() {
    let request = two_leg_request("2026-03-05T18:00:00", "2026-03-05T20:00:00");
    let (_, body) = post_calculate(create_router_for_test(), request).await;

    let allowances = &body["report"]["allowances"];
    assert_decimal(&allowances["transit"]["hours"], "4");
    assert_decimal(&allowances["transit"]["amount"], "4000");
    assert_eq!(allowances["layover"]["count"], 0);
}

#[tokio::test]
async fn test_just_over_10_hours_is_layover() {
    let request = two_leg_request("2026-03-05T18:01:00", "2026-03-05T20:01:00");
    let (_, body) = post_calculate(create_router_for_test(), request).await;

    let allowances = &body["report"]["allowances"];
    assert_eq!(allowances["layover"]["count"], 1);
    assert_decimal(&allowances["layover"]["total"], "3000");
    assert_decimal(&allowances["transit"]["amount"], "0");
    // Layover rest is not duty
    assert_eq!(body["report"]["summary"]["duty_hours"], "04:00");
}

// =============================================================================
// Time zones
// =============================================================================

#[tokio::test]
async fn test_utc_leg_night_is_counted_in_reference_time() {
    let legs = vec![leg("AI-101", "2026-03-05", ("DEL", "BOM"), "2026-03-04T20:00:00Z", "2026-03-04T22:00:00Z", Some("VT-IWN"))];
    let logbook = vec![logbook_entry("2026-03-05", ("DEL", "BOM"), Some("VT-IWN"))];
    let (status, body) =
        post_calculate(create_router_for_test(), create_request("CP", vec![legs], Some(logbook))).await;
    assert_eq!(status, StatusCode::OK);

    let night = &body["report"]["allowances"]["night"];
    assert_decimal(&night["hours"], "1.5");
    assert_decimal(&night["amount"], "3000");
    assert_eq!(night["details"][0]["description"], "DEL-BOM | 01:30-03:30 | Night: 1.50 hrs");
}

#[tokio::test]
async fn test_mixed_offsets_share_one_timeline() {
    let legs = vec![
        leg("AI-101", "2026-03-05", ("DEL", "BOM"), "2026-03-04T20:00:00Z", "2026-03-04T22:00:00Z", Some("VT-IWN")),
        leg("AI-102", "2026-03-05", ("BOM", "CCU"), "2026-03-05T05:30:00", "2026-03-05T07:30:00+05:30", Some("VT-IWN")),
    ];
    let logbook = vec![
        logbook_entry("2026-03-05", ("DEL", "BOM"), Some("VT-IWN")),
        logbook_entry("2026-03-05", ("BOM", "CCU"), Some("VT-IWN")),
    ];
    let (status, body) =
        post_calculate(create_router_for_test(), create_request("CP", vec![legs], Some(logbook))).await;
    assert_eq!(status, StatusCode::OK);

    let allowances = &body["report"]["allowances"];
    // 03:30 IST arrival to 05:30 IST departure
    assert_decimal(&allowances["transit"]["hours"], "2");
    assert_decimal(&allowances["night"]["hours"], "2");
    assert_eq!(body["report"]["summary"]["block_hours"], "04:00");
}

// =============================================================================
// Tail swaps and domestic resolution
// =============================================================================

#[tokio::test]
async fn test_tail_comparison_ignores_case_and_spacing() {
    let legs = vec![
        leg("AI-665", "2026-03-05", ("DEL", "BOM"), "2026-03-05T06:00:00", "2026-03-05T08:00:00", Some("VT-IWN")),
        leg("AI-676", "2026-03-05", ("BOM", "CCU"), "2026-03-05T08:30:00", "2026-03-05T10:30:00", Some(" vt-iwn ")),
    ];
    let (_, body) = post_calculate(create_router_for_test(), create_request("CP", vec![legs], None)).await;

    assert_eq!(body["report"]["allowances"]["tail_swap"]["count"], 0);
}

#[tokio::test]
async fn test_logbook_fills_missing_tails() {
    let legs = vec![
        leg("AI-665", "2026-03-05", ("DEL", "BOM"), "2026-03-05T06:00:00", "2026-03-05T08:00:00", None),
        leg("AI-676", "2026-03-05", ("BOM", "CCU"), "2026-03-05T08:30:00", "2026-03-05T10:30:00", None),
    ];
    let logbook = vec![
        logbook_entry("05/03/2026", ("DEL", "BOM"), Some("VT-IWN")),
        logbook_entry("05/03/2026", ("BOM", "CCU"), Some("VT-IWP")),
    ];
    let (_, body) =
        post_calculate(create_router_for_test(), create_request("CP", vec![legs], Some(logbook))).await;

    let tail_swap = &body["report"]["allowances"]["tail_swap"];
    assert_eq!(tail_swap["count"], 1);
    assert_eq!(
        tail_swap["details"][0]["description"],
        "VT-IWN → VT-IWP (DEL-BOM → BOM-CCU)"
    );
    assert!(warning_codes(&body["report"]).is_empty());
}

#[tokio::test]
async fn test_international_halt_earns_nothing() {
    let legs = vec![
        leg("AI-983", "2026-03-05", ("BOM", "DXB"), "2026-03-05T06:00:00", "2026-03-05T09:00:00", Some("VT-IWN")),
        leg("AI-984", "2026-03-05", ("DXB", "BOM"), "2026-03-05T12:00:00", "2026-03-05T15:00:00", Some("VT-IWP")),
    ];
    let (_, body) = post_calculate(create_router_for_test(), create_request("CP", vec![legs], None)).await;

    let allowances = &body["report"]["allowances"];
    assert_eq!(allowances["tail_swap"]["count"], 0);
    assert_decimal(&allowances["transit"]["amount"], "0");
    assert_decimal(&allowances["total_amount"], "0");
}

// =============================================================================
// Logbook handling
// =============================================================================

#[tokio::test]
async fn test_missing_logbook_is_low_confidence() {
    let legs = vec![
        leg("AI-805", "2026-03-05", ("DEL", "BOM"), "2026-03-05T01:00:00", "2026-03-05T03:00:00", Some("VT-IWN")),
        leg("AI-806", "2026-03-05", ("BOM", "DEL"), "2026-03-05T03:30:00", "2026-03-05T05:30:00", Some("VT-IWP")),
    ];
    let (status, body) =
        post_calculate(create_router_for_test(), create_request("CP", vec![legs], None)).await;
    assert_eq!(status, StatusCode::OK);

    let report = &body["report"];
    assert_eq!(warning_codes(report), vec!["LOGBOOK_ABSENT"]);

    let description = report["allowances"]["tail_swap"]["details"][0]["description"]
        .as_str()
        .unwrap();
    assert!(description.ends_with(" [low confidence]"));
    assert_decimal(&report["allowances"]["night"]["hours"], "4");
}

#[tokio::test]
async fn test_deadhead_found_in_logbook_is_operating() {
    let legs = vec![deadhead(
        "AI-301",
        "2026-03-10",
        ("DEL", "BOM"),
        "2026-03-10T09:00:00",
        "2026-03-10T11:00:00",
    )];
    let logbook = vec![logbook_entry("10/03/26", ("DEL", "BOM"), Some("VT-IWN"))];
    let (_, body) =
        post_calculate(create_router_for_test(), create_request("CP", vec![legs], Some(logbook))).await;

    let report = &body["report"];
    assert_eq!(warning_codes(report), vec!["DEADHEAD_CONTRADICTED"]);
    assert_eq!(report["summary"]["deadhead_flights"], 0);
    assert_eq!(report["summary"]["operating_flights"], 1);
}

// =============================================================================
// Rank rates
// =============================================================================

#[tokio::test]
async fn test_first_officer_gets_half_rates() {
    let mut request = month_request();
    request["pilot"]["rank"] = json!("FO");

    let (_, body) = post_calculate(create_router_for_test(), request).await;
    let allowances = &body["report"]["allowances"];

    assert_decimal(&allowances["tail_swap"]["amount"], "750");
    assert_decimal(&allowances["transit"]["rate"], "500");
    assert_decimal(&allowances["total_amount"], "11787.5");
    assert_eq!(body["report"]["pilot_info"]["rank_full"], "First Officer");
}

// =============================================================================
// Rates and health
// =============================================================================

#[tokio::test]
async fn test_rates_endpoint() {
    let (status, body) = get(create_router_for_test(), "/rates?date=2026-03-15").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["agreement"], "CCA-2026");
    assert_eq!(body["effective_date"], "2026-01-01");
    assert_decimal(&body["rates"]["CP"]["tail_swap_amount"], "1500");
    assert_decimal(&body["rates"]["FO"]["night_hourly_rate"], "1000");
    assert_eq!(body["thresholds"]["transit_threshold_secs"], 5400);
    assert_eq!(body["thresholds"]["layover_threshold_secs"], 36000);
}

#[tokio::test]
async fn test_rates_accept_compact_date() {
    let (status, body) = get(create_router_for_test(), "/rates?date=15/03/26").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["effective_date"], "2026-01-01");
}

#[tokio::test]
async fn test_rates_before_agreement_returns_400() {
    let (status, body) = get(create_router_for_test(), "/rates?date=2025-06-01").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "RATE_NOT_FOUND");
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = get(create_router_for_test(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy"}));
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_no_legs_returns_400() {
    let (status, body) =
        post_calculate(create_router_for_test(), create_request("CP", vec![], None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_REQUIRED_INPUT");
}

#[tokio::test]
async fn test_leg_arriving_before_departure_returns_400() {
    let legs = vec![
        leg("AI-665", "2026-03-05", ("DEL", "BOM"), "2026-03-05T06:00:00", "2026-03-05T08:00:00", Some("VT-IWN")),
        leg("AI-676", "2026-03-05", ("BOM", "CCU"), "2026-03-05T10:00:00", "2026-03-05T09:00:00", Some("VT-IWN")),
    ];
    let (status, body) =
        post_calculate(create_router_for_test(), create_request("CP", vec![legs], None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_TIMELINE");
    assert!(body["message"].as_str().unwrap().contains("AI-676"));
}

#[tokio::test]
async fn test_out_of_order_legs_return_400() {
    let periods = vec![
        vec![leg("AI-202", "2026-03-06", ("BOM", "DEL"), "2026-03-06T06:00:00", "2026-03-06T08:00:00", Some("VT-IWN"))],
        vec![leg("AI-201", "2026-03-05", ("DEL", "BOM"), "2026-03-05T06:00:00", "2026-03-05T08:00:00", Some("VT-IWN"))],
    ];
    let (status, body) =
        post_calculate(create_router_for_test(), create_request("CP", periods, None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_TIMELINE");
}

#[tokio::test]
async fn test_invalid_leg_date_returns_400() {
    let legs = vec![leg(
        "AI-665",
        "31/02/26",
        ("DEL", "BOM"),
        "2026-03-05T06:00:00",
        "2026-03-05T08:00:00",
        None,
    )];
    let (status, body) =
        post_calculate(create_router_for_test(), create_request("CP", vec![legs], None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_unknown_rank_returns_400() {
    let request = create_request("SFO", vec![], None);
    let (status, _) = post_calculate(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_pilot_returns_validation_error() {
    let (status, body) =
        post_calculate(create_router_for_test(), json!({ "duty_periods": [] })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let (status, body) = send(
        create_router_for_test(),
        Request::builder()
            .method("POST")
            .uri("/calculate")
            .header("Content-Type", "application/json")
            .body(Body::from("{not json"))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}
