//! Ground-interval and aircraft-change classification.
//!
//! Between two consecutive legs of a duty period the pilot is on the ground.
//! This module decides whether that interval earns a transit or a layover
//! allowance, and whether the aircraft changed (a tail swap).

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::{DutyPeriod, FlightLeg, format_hhmm, seconds_to_hours};

use super::precision::format_two_places;

/// Ground intervals longer than this (in seconds) are transits.
pub const TRANSIT_THRESHOLD_SECS: i64 = 90 * 60;

/// Ground intervals longer than this (in seconds) are layovers.
pub const LAYOVER_THRESHOLD_SECS: i64 = 10 * 3600;

/// Suffix appended to descriptions built on unconfirmed data.
pub const LOW_CONFIDENCE_MARKER: &str = " [low confidence]";

/// An aircraft change between two consecutive operating legs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailSwap {
    /// Registration of the aircraft the pilot left.
    pub from_tail: String,
    /// Registration of the aircraft the pilot joined.
    pub to_tail: String,
    /// Route of the earlier leg.
    pub from_route: String,
    /// Route of the later leg.
    pub to_route: String,
    /// The flat tail-swap amount.
    pub amount: Decimal,
}

impl TailSwap {
    /// Describes the swap as `FROM → TO (ROUTE → ROUTE)`.
    pub fn describe(&self) -> String {
        format!(
            "{} → {} ({} → {})",
            self.from_tail, self.to_tail, self.from_route, self.to_route
        )
    }
}

/// A short domestic ground stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transit {
    /// Station of the halt.
    pub station: String,
    /// On-block time of the inbound leg.
    pub arrived: NaiveDateTime,
    /// Off-block time of the outbound leg.
    pub departs: NaiveDateTime,
    /// Length of the halt in seconds.
    pub gap_seconds: i64,
    /// Halt hours after the cap.
    pub billable_hours: Decimal,
    /// Billable hours times the hourly rate, unrounded.
    pub amount: Decimal,
}

impl Transit {
    /// Describes the halt with its raw and eligible hours.
    pub fn describe(&self) -> String {
        format!(
            "{} | arr {} → dep {} | Halt: {}h → Eligible: {}h",
            self.station,
            self.arrived.format("%H:%M"),
            self.departs.format("%H:%M"),
            format_two_places(seconds_to_hours(self.gap_seconds)),
            format_two_places(self.billable_hours),
        )
    }
}

/// A long domestic ground stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layover {
    /// Station of the layover.
    pub station: String,
    /// On-block time of the inbound leg.
    pub arrived: NaiveDateTime,
    /// Off-block time of the outbound leg.
    pub departs: NaiveDateTime,
    /// Length of the layover in seconds.
    pub gap_seconds: i64,
    /// Hours beyond the free period, never negative.
    pub extra_hours: Decimal,
    /// The base amount.
    pub base_amount: Decimal,
    /// Extra hours times the hourly rate, unrounded.
    pub extra_amount: Decimal,
}

impl Layover {
    /// Base plus extra.
    pub fn amount(&self) -> Decimal {
        self.base_amount + self.extra_amount
    }

    /// Describes the layover as `STN: H hrs (from → to) = base [+ extra]`.
    pub fn describe(&self) -> String {
        let mut description = format!(
            "{}: {} hrs ({} → {}) = {}",
            self.station,
            format_two_places(seconds_to_hours(self.gap_seconds)),
            self.arrived.format("%d/%m %H:%M"),
            self.departs.format("%d/%m %H:%M"),
            format_two_places(self.base_amount),
        );
        if self.extra_amount > Decimal::ZERO {
            description.push_str(&format!(" + {}", format_two_places(self.extra_amount)));
        }
        description
    }
}

/// What a ground interval is worth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroundInterval {
    /// Too short, international, or the stations do not line up.
    NoAllowance,
    /// Strictly more than 90 minutes and at most 10 hours.
    Transit(Transit),
    /// Strictly more than 10 hours.
    Layover(Layover),
    /// The next leg departs before the previous one arrives.
    Negative {
        /// The (negative) interval length in seconds.
        gap_seconds: i64,
    },
}

/// The classification of one adjacent leg pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapClassification {
    /// Set when the aircraft changed between two operating domestic legs.
    pub tail_swap: Option<TailSwap>,
    /// The ground interval between the legs.
    pub interval: GroundInterval,
}

/// Returns true when `next` departs from the station `prev` arrived at.
fn stations_connect(prev: &FlightLeg, next: &FlightLeg) -> bool {
    prev.arrival_station
        .trim()
        .eq_ignore_ascii_case(next.departure_station.trim())
}

/// Detects an aircraft change between two consecutive legs.
///
/// Both legs must be operating and domestic, and both registrations must be
/// known. Registrations are compared trimmed and upper-cased.
pub fn detect_tail_swap(prev: &FlightLeg, next: &FlightLeg, rates: &RateTable) -> Option<TailSwap> {
    if !(prev.operating && next.operating && prev.domestic && next.domestic) {
        return None;
    }

    let from_tail = prev.normalized_tail()?;
    let to_tail = next.normalized_tail()?;
    if from_tail == to_tail {
        return None;
    }

    Some(TailSwap {
        from_tail,
        to_tail,
        from_route: prev.route(),
        to_route: next.route(),
        amount: rates.tail_swap_amount,
    })
}

/// Classifies the ground interval between two consecutive legs.
///
/// Thresholds are strict: exactly 90 minutes is no allowance and exactly 10
/// hours is a transit. Transit hours are capped at the configured maximum.
/// Layovers pay the base amount plus the hourly rate for every hour beyond
/// the free period.
///
/// # Examples
///
/// ```
/// use allowance_engine::calculation::{GroundInterval, classify_interval};
/// use allowance_engine::config::RateTable;
/// use allowance_engine::models::FlightLeg;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let leg = |dep: &str, arr: &str, from: &str, to: &str| FlightLeg {
///     id: format!("{}-{}", from, to),
///     date: at(dep).date(),
///     departure_station: from.to_string(),
///     arrival_station: to.to_string(),
///     departure_time: at(dep),
///     arrival_time: at(arr),
///     tail_number: None,
///     operating: true,
///     domestic: true,
/// };
/// let rates = RateTable {
///     tail_swap_amount: Decimal::from(1500),
///     transit_hourly_rate: Decimal::from(1000),
///     transit_cap_hours: Decimal::from(4),
///     layover_base_amount: Decimal::from(3000),
///     layover_free_hours: Decimal::from(24),
///     layover_hourly_rate: Decimal::from(150),
///     deadhead_hourly_rate: Decimal::from(4000),
///     night_hourly_rate: Decimal::from(2000),
/// };
///
/// let first = leg("2026-03-01 06:00", "2026-03-01 08:00", "DEL", "BOM");
/// let second = leg("2026-03-01 10:15", "2026-03-01 12:30", "BOM", "CCU");
///
/// match classify_interval(&first, &second, &rates) {
///     GroundInterval::Transit(transit) => {
///         assert_eq!(transit.billable_hours, Decimal::new(225, 2));
///         assert_eq!(transit.amount, Decimal::from(2250));
///     }
///     other => panic!("expected a transit, got {:?}", other),
/// }
/// ```
pub fn classify_interval(prev: &FlightLeg, next: &FlightLeg, rates: &RateTable) -> GroundInterval {
    let gap_seconds = (next.departure_time - prev.arrival_time).num_seconds();

    if gap_seconds < 0 {
        return GroundInterval::Negative { gap_seconds };
    }

    if !(prev.domestic && next.domestic) || !stations_connect(prev, next) {
        return GroundInterval::NoAllowance;
    }

    let hours = seconds_to_hours(gap_seconds);
    let station = prev.arrival_station.trim().to_uppercase();

    if gap_seconds > LAYOVER_THRESHOLD_SECS {
        let extra_hours = (hours - rates.layover_free_hours).max(Decimal::ZERO);
        return GroundInterval::Layover(Layover {
            station,
            arrived: prev.arrival_time,
            departs: next.departure_time,
            gap_seconds,
            extra_hours,
            base_amount: rates.layover_base_amount,
            extra_amount: extra_hours * rates.layover_hourly_rate,
        });
    }

    if gap_seconds > TRANSIT_THRESHOLD_SECS {
        let billable_hours = hours.min(rates.transit_cap_hours);
        return GroundInterval::Transit(Transit {
            station,
            arrived: prev.arrival_time,
            departs: next.departure_time,
            gap_seconds,
            billable_hours,
            amount: billable_hours * rates.transit_hourly_rate,
        });
    }

    GroundInterval::NoAllowance
}

/// Classifies one adjacent leg pair: aircraft change and ground interval.
///
/// A negative interval does not stop tail-swap detection; the aircraft
/// still changed even if the times overlap.
pub fn classify_gap(prev: &FlightLeg, next: &FlightLeg, rates: &RateTable) -> GapClassification {
    GapClassification {
        tail_swap: detect_tail_swap(prev, next, rates),
        interval: classify_interval(prev, next, rates),
    }
}

/// Classifies every adjacent pair of a duty period, in leg order.
///
/// Element `i` describes the gap between legs `i` and `i + 1`.
pub fn classify_duty_period(period: &DutyPeriod, rates: &RateTable) -> Vec<GapClassification> {
    period
        .adjacent_pairs()
        .map(|(prev, next)| classify_gap(prev, next, rates))
        .collect()
}

/// Formats a ground interval as `HH:MM`, for log output.
pub(crate) fn format_gap(gap_seconds: i64) -> String {
    if gap_seconds < 0 {
        format!("-{}", format_hhmm(-gap_seconds))
    } else {
        format_hhmm(gap_seconds)
    }
}
