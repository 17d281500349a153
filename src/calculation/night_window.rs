//! Night flying calculation.
//!
//! The night window is 00:00 to 06:00 on every calendar day. A leg's night
//! time is the overlap of its block time with the window of each day the leg
//! touches, so a leg that crosses midnight is split at the day boundary.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::{FlightLeg, seconds_to_hours};

use super::precision::format_two_places;

/// Hour the night window opens (inclusive).
pub const NIGHT_WINDOW_START_HOUR: u32 = 0;

/// Hour the night window closes (exclusive).
pub const NIGHT_WINDOW_END_HOUR: u32 = 6;

/// Night time earned by one leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NightFlight {
    /// Route of the leg.
    pub route: String,
    /// Off-block time.
    pub departure: NaiveDateTime,
    /// On-block time.
    pub arrival: NaiveDateTime,
    /// Seconds of block time inside the window.
    pub night_seconds: i64,
    /// Night hours times the hourly rate, unrounded.
    pub amount: Decimal,
}

impl NightFlight {
    /// Night time in decimal hours.
    pub fn hours(&self) -> Decimal {
        seconds_to_hours(self.night_seconds)
    }

    /// Describes the leg as `ROUTE | HH:MM-HH:MM | Night: H hrs`.
    pub fn describe(&self) -> String {
        format!(
            "{} | {}-{} | Night: {} hrs",
            self.route,
            self.departure.format("%H:%M"),
            self.arrival.format("%H:%M"),
            format_two_places(self.hours()),
        )
    }
}

/// Returns the night window `[start, end)` for one calendar day.
fn window_for(day: NaiveDate) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let start = day.and_hms_opt(NIGHT_WINDOW_START_HOUR, 0, 0)?;
    let end = day.and_hms_opt(NIGHT_WINDOW_END_HOUR, 0, 0)?;
    Some((start, end))
}

/// Counts the seconds of `[departure, arrival)` that fall in a night window.
///
/// Every calendar day from the departure day to the arrival day contributes
/// its own window, so multi-day spans are handled.
///
/// # Examples
///
/// ```
/// use allowance_engine::calculation::night_seconds;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
///
/// // 23:00 to 01:00 overlaps the window for one hour
/// assert_eq!(night_seconds(at("2026-03-01 23:00"), at("2026-03-02 01:00")), 3600);
///
/// // 05:30 to 07:00 overlaps for thirty minutes
/// assert_eq!(night_seconds(at("2026-03-01 05:30"), at("2026-03-01 07:00")), 1800);
/// ```
pub fn night_seconds(departure: NaiveDateTime, arrival: NaiveDateTime) -> i64 {
    if arrival <= departure {
        return 0;
    }

    let mut total = 0;
    let mut day = departure.date();
    let last_day = arrival.date();

    while day <= last_day {
        if let Some((window_start, window_end)) = window_for(day) {
            let start = departure.max(window_start);
            let end = arrival.min(window_end);
            if end > start {
                total += (end - start).num_seconds();
            }
        }

        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    total
}

/// Calculates the night allowance for one leg.
///
/// Applies to every leg, operating or deadhead. Returns `None` when the leg
/// has no block time inside the window.
pub fn calculate_night(leg: &FlightLeg, rates: &RateTable) -> Option<NightFlight> {
    let seconds = night_seconds(leg.departure_time, leg.arrival_time);
    if seconds == 0 {
        return None;
    }

    Some(NightFlight {
        route: leg.route(),
        departure: leg.departure_time,
        arrival: leg.arrival_time,
        night_seconds: seconds,
        amount: seconds_to_hours(seconds) * rates.night_hourly_rate,
    })
}
