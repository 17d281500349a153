//! Allowance report models.
//!
//! This module contains the [`AllowanceReport`] type and its associated
//! structures: the per-category breakdown, the dated detail ledger, the
//! pilot summary and the warnings collected during the run.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calendar::{deserialize_roster_date, serialize_roster_date};
use super::{Pilot, Rank};

/// The five allowance categories.
///
/// # Example
///
/// ```
/// use allowance_engine::models::AllowanceCategory;
///
/// let json = serde_json::to_string(&AllowanceCategory::TailSwap).unwrap();
/// assert_eq!(json, "\"tail_swap\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowanceCategory {
    /// Aircraft change between consecutive operating legs.
    TailSwap,
    /// Short domestic ground stop, billed hourly up to a cap.
    Transit,
    /// Long domestic ground stop, base amount plus hourly beyond a free period.
    Layover,
    /// Non-operating (passenger) sector.
    Deadhead,
    /// Block time inside the night window.
    Night,
}

impl AllowanceCategory {
    /// All categories in report order.
    pub const ALL: [AllowanceCategory; 5] = [
        AllowanceCategory::TailSwap,
        AllowanceCategory::Transit,
        AllowanceCategory::Layover,
        AllowanceCategory::Deadhead,
        AllowanceCategory::Night,
    ];
}

/// A dated, human-readable line supporting a category total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceDetail {
    /// The date the detail applies to.
    #[serde(
        serialize_with = "serialize_roster_date",
        deserialize_with = "deserialize_roster_date"
    )]
    pub date: NaiveDate,
    /// Human-readable description of the event.
    pub description: String,
}

/// One classified event in the flat ledger, tagged with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// The allowance category that produced this entry.
    #[serde(rename = "type")]
    pub category: AllowanceCategory,
    /// The date the entry applies to.
    #[serde(
        serialize_with = "serialize_roster_date",
        deserialize_with = "deserialize_roster_date"
    )]
    pub date: NaiveDate,
    /// Human-readable description of the event.
    pub description: String,
    /// The amount earned by this event, rounded to currency precision.
    pub amount: Decimal,
}

/// Ledger entries sharing one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateGroup {
    /// The date of every entry in the group.
    #[serde(
        serialize_with = "serialize_roster_date",
        deserialize_with = "deserialize_roster_date"
    )]
    pub date: NaiveDate,
    /// Entries in the order they were classified.
    pub entries: Vec<LedgerEntry>,
}

/// A category paid per occurrence (tail swaps).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CountedAllowance {
    /// Number of qualifying events.
    pub count: u32,
    /// Amount per event.
    pub rate: Decimal,
    /// Total amount.
    pub amount: Decimal,
    /// Supporting details.
    pub details: Vec<AllowanceDetail>,
}

/// A category paid per hour (transit, deadhead, night).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HourlyAllowance {
    /// Billable hours, rounded to two places.
    pub hours: Decimal,
    /// Amount per hour.
    pub rate: Decimal,
    /// Total amount.
    pub amount: Decimal,
    /// Supporting details.
    pub details: Vec<AllowanceDetail>,
}

/// The layover category: a base amount per layover plus hourly extra.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoverAllowance {
    /// Number of qualifying layovers.
    pub count: u32,
    /// Base amount per layover.
    pub base_rate: Decimal,
    /// Sum of base amounts.
    pub base_amount: Decimal,
    /// Hours beyond the free period, summed over all layovers.
    pub extra_hours: Decimal,
    /// Amount per extra hour.
    pub extra_rate: Decimal,
    /// Sum of extra amounts.
    pub extra_amount: Decimal,
    /// Base plus extra.
    pub total: Decimal,
    /// Supporting details.
    pub details: Vec<AllowanceDetail>,
}

/// How a category measures what it pays for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Number of events.
    Count(u32),
    /// Decimal hours.
    Hours(Decimal),
}

/// Uniform view of one category, for presentation layers that iterate the
/// categories instead of naming each field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary<'a> {
    /// Which category this is.
    pub category: AllowanceCategory,
    /// Count or hours.
    pub quantity: Quantity,
    /// The headline rate (per event, per hour, or layover base).
    pub rate: Decimal,
    /// The category total.
    pub amount: Decimal,
    /// Supporting details.
    pub details: &'a [AllowanceDetail],
}

/// Totals for every category plus the grand total.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AllowanceBreakdown {
    /// Tail-swap allowance.
    pub tail_swap: CountedAllowance,
    /// Transit allowance.
    pub transit: HourlyAllowance,
    /// Domestic layover allowance.
    pub layover: LayoverAllowance,
    /// Deadhead allowance.
    pub deadhead: HourlyAllowance,
    /// Night flying allowance.
    pub night: HourlyAllowance,
    /// Sum of the five category amounts.
    pub total_amount: Decimal,
}

impl AllowanceBreakdown {
    /// Returns the five categories in report order with a uniform shape.
    pub fn categories(&self) -> [CategorySummary<'_>; 5] {
        [
            CategorySummary {
                category: AllowanceCategory::TailSwap,
                quantity: Quantity::Count(self.tail_swap.count),
                rate: self.tail_swap.rate,
                amount: self.tail_swap.amount,
                details: &self.tail_swap.details,
            },
            CategorySummary {
                category: AllowanceCategory::Transit,
                quantity: Quantity::Hours(self.transit.hours),
                rate: self.transit.rate,
                amount: self.transit.amount,
                details: &self.transit.details,
            },
            CategorySummary {
                category: AllowanceCategory::Layover,
                quantity: Quantity::Count(self.layover.count),
                rate: self.layover.base_rate,
                amount: self.layover.total,
                details: &self.layover.details,
            },
            CategorySummary {
                category: AllowanceCategory::Deadhead,
                quantity: Quantity::Hours(self.deadhead.hours),
                rate: self.deadhead.rate,
                amount: self.deadhead.amount,
                details: &self.deadhead.details,
            },
            CategorySummary {
                category: AllowanceCategory::Night,
                quantity: Quantity::Hours(self.night.hours),
                rate: self.night.rate,
                amount: self.night.amount,
                details: &self.night.details,
            },
        ]
    }
}

/// Pilot details echoed back in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PilotInfo {
    /// Staff number.
    pub employee_id: String,
    /// Full name.
    pub name: String,
    /// Home base.
    pub base: String,
    /// Rank code (`CP` / `FO`).
    pub rank: Rank,
    /// Rank title.
    pub rank_full: String,
    /// Aircraft type.
    pub aircraft_type: String,
}

impl From<&Pilot> for PilotInfo {
    fn from(pilot: &Pilot) -> Self {
        Self {
            employee_id: pilot.employee_id.clone(),
            name: pilot.name.clone(),
            base: pilot.base.clone(),
            rank: pilot.rank,
            rank_full: pilot.rank.full_name().to_string(),
            aircraft_type: pilot.aircraft_type.clone(),
        }
    }
}

/// Month-level statistics for the pilot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutySummary {
    /// Operating block time as `HH:MM`.
    pub block_hours: String,
    /// Duty time as `HH:MM`, excluding layover rest.
    pub duty_hours: String,
    /// Number of legs flown as operating crew.
    pub operating_flights: u32,
    /// Number of deadhead legs.
    pub deadhead_flights: u32,
    /// Number of qualifying layovers.
    pub layover_count: u32,
}

/// A warning generated during calculation.
///
/// Warnings indicate problems that did not stop the run but reduce the
/// confidence of some of its output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a new warning.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: severity.into(),
        }
    }
}

/// The complete result of an allowance calculation.
///
/// The report is a pure function of its inputs: it carries no identifiers
/// or timestamps, so identical inputs serialize to identical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceReport {
    /// Pilot details.
    pub pilot_info: PilotInfo,
    /// Month statistics.
    pub summary: DutySummary,
    /// Category totals and details.
    pub allowances: AllowanceBreakdown,
    /// Ledger entries grouped by date, earliest first.
    pub ledger: Vec<DateGroup>,
    /// Non-fatal problems found during the run.
    pub warnings: Vec<AuditWarning>,
}
