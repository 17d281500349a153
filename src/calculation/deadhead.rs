//! Deadhead accumulation.
//!
//! A deadhead leg is a sector ridden as a passenger on duty. Its block time
//! is paid at the deadhead hourly rate.

use rust_decimal::Decimal;

use crate::models::{FlightLeg, format_hhmm, seconds_to_hours};

/// One deadhead sector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadheadSector {
    /// Route of the leg.
    pub route: String,
    /// Block time in seconds.
    pub block_seconds: i64,
    /// Block hours times the hourly rate, unrounded.
    pub amount: Decimal,
}

impl DeadheadSector {
    /// Describes the sector as `ROUTE (Deadhead) | HH:MM block`.
    pub fn describe(&self) -> String {
        format!(
            "{} (Deadhead) | {} block",
            self.route,
            format_hhmm(self.block_seconds)
        )
    }
}

/// Running total of deadhead block time.
///
/// # Example
///
/// ```
/// use allowance_engine::calculation::DeadheadAccumulator;
/// use rust_decimal::Decimal;
///
/// let accumulator = DeadheadAccumulator::new(Decimal::from(4000));
/// assert_eq!(accumulator.total_hours(), Decimal::ZERO);
/// assert_eq!(accumulator.sectors(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct DeadheadAccumulator {
    hourly_rate: Decimal,
    total_seconds: i64,
    sectors: u32,
}

impl DeadheadAccumulator {
    /// Creates an empty accumulator paying `hourly_rate`.
    pub fn new(hourly_rate: Decimal) -> Self {
        Self {
            hourly_rate,
            total_seconds: 0,
            sectors: 0,
        }
    }

    /// Adds a leg. Operating legs are ignored and return `None`.
    pub fn add(&mut self, leg: &FlightLeg) -> Option<DeadheadSector> {
        if leg.operating {
            return None;
        }

        let block_seconds = leg.block_seconds();
        self.total_seconds += block_seconds;
        self.sectors += 1;

        Some(DeadheadSector {
            route: leg.route(),
            block_seconds,
            amount: seconds_to_hours(block_seconds) * self.hourly_rate,
        })
    }

    /// Number of deadhead legs seen.
    pub fn sectors(&self) -> u32 {
        self.sectors
    }

    /// Total deadhead block time in decimal hours.
    pub fn total_hours(&self) -> Decimal {
        seconds_to_hours(self.total_seconds)
    }

    /// Total hours times the hourly rate, unrounded.
    pub fn amount(&self) -> Decimal {
        self.total_hours() * self.hourly_rate
    }
}
