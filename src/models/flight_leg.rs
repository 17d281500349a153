//! Flight leg model.
//!
//! A [`FlightLeg`] is one sector of the pilot's month, either flown as
//! operating crew or ridden as a deadheading passenger. All times are wall-clock
//! times in the agreement's reference civil zone.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of seconds in an hour, as a Decimal divisor.
pub(crate) const SECONDS_PER_HOUR: i64 = 3600;

/// Converts a duration in seconds into decimal hours.
pub(crate) fn seconds_to_hours(seconds: i64) -> Decimal {
    Decimal::from(seconds) / Decimal::from(SECONDS_PER_HOUR)
}

/// Represents a single flight sector in the duty timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightLeg {
    /// Identifier for the leg, usually the flight number.
    pub id: String,
    /// The roster date of the leg.
    pub date: NaiveDate,
    /// Departure station code.
    pub departure_station: String,
    /// Arrival station code.
    pub arrival_station: String,
    /// Off-block time in the reference zone.
    pub departure_time: NaiveDateTime,
    /// On-block time in the reference zone, after midnight rollover.
    pub arrival_time: NaiveDateTime,
    /// Aircraft registration, if known.
    #[serde(default)]
    pub tail_number: Option<String>,
    /// True when flown as operating crew, false when deadheading.
    pub operating: bool,
    /// True when both stations are domestic.
    pub domestic: bool,
}

impl FlightLeg {
    /// Returns the block time of the leg in whole seconds.
    pub fn block_seconds(&self) -> i64 {
        (self.arrival_time - self.departure_time).num_seconds()
    }

    /// Returns the block time of the leg in decimal hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use allowance_engine::models::FlightLeg;
    /// use chrono::{NaiveDate, NaiveDateTime};
    /// use rust_decimal::Decimal;
    ///
    /// let leg = FlightLeg {
    ///     id: "AI-601".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
    ///     departure_station: "DEL".to_string(),
    ///     arrival_station: "BOM".to_string(),
    ///     departure_time: NaiveDateTime::parse_from_str("2026-03-01 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     arrival_time: NaiveDateTime::parse_from_str("2026-03-01 11:15:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     tail_number: Some("VT-IWN".to_string()),
    ///     operating: true,
    ///     domestic: true,
    /// };
    /// assert_eq!(leg.block_hours(), Decimal::new(225, 2)); // 2.25 hours
    /// ```
    pub fn block_hours(&self) -> Decimal {
        seconds_to_hours(self.block_seconds())
    }

    /// Returns the route as `DEP-ARR`.
    pub fn route(&self) -> String {
        format!(
            "{}-{}",
            self.departure_station.trim(),
            self.arrival_station.trim()
        )
    }

    /// Returns the registration trimmed and upper-cased, or `None` when it is
    /// absent or blank.
    pub fn normalized_tail(&self) -> Option<String> {
        self.tail_number
            .as_deref()
            .map(|t| t.trim().to_uppercase())
            .filter(|t| !t.is_empty())
    }
}
