//! Core data models for the allowance engine.
//!
//! This module contains the input timeline (pilot, legs, duty periods,
//! logbook) and the report produced from it.

mod allowance_report;
mod calendar;
mod duty_period;
mod flight_leg;
mod logbook;
mod pilot;

pub use allowance_report::{
    AllowanceBreakdown, AllowanceCategory, AllowanceDetail, AllowanceReport, AuditWarning,
    CategorySummary, CountedAllowance, DateGroup, DutySummary, HourlyAllowance, LayoverAllowance,
    LedgerEntry, PilotInfo, Quantity,
};
pub use calendar::{
    CompactDate, deserialize_roster_date, format_hhmm, format_roster_date, serialize_roster_date,
};
pub use duty_period::{DutyPeriod, DutyTimeline};
pub use flight_leg::FlightLeg;
pub(crate) use flight_leg::seconds_to_hours;
pub use logbook::{Logbook, LogbookEntry};
pub use pilot::{Pilot, Rank};
