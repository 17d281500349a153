//! Logbook cross-reference model.
//!
//! The logbook lists the sectors the pilot actually flew, with the aircraft
//! registration of each. It is optional input used to fill in missing tail
//! numbers and to confirm which schedule legs were deadheads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::FlightLeg;

/// One flown sector from the pilot's logbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogbookEntry {
    /// The date of the flight.
    pub date: NaiveDate,
    /// Departure station code.
    pub departure_station: String,
    /// Arrival station code.
    pub arrival_station: String,
    /// Aircraft registration (e.g., "VT-IWN").
    #[serde(default)]
    pub tail_number: Option<String>,
}

impl LogbookEntry {
    /// Returns true when this entry records the same sector as `leg`.
    ///
    /// Sectors match on date and route; station codes are compared
    /// case-insensitively.
    pub fn matches(&self, leg: &FlightLeg) -> bool {
        self.date == leg.date
            && self
                .departure_station
                .trim()
                .eq_ignore_ascii_case(leg.departure_station.trim())
            && self
                .arrival_station
                .trim()
                .eq_ignore_ascii_case(leg.arrival_station.trim())
    }
}

/// The pilot's logbook for the month.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Logbook {
    /// Flown sectors, in any order.
    pub entries: Vec<LogbookEntry>,
}

impl Logbook {
    /// Creates a logbook from its entries.
    pub fn new(entries: Vec<LogbookEntry>) -> Self {
        Self { entries }
    }
}
