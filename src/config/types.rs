//! Configuration types for allowance calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, FixedOffset, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::Rank;

/// Metadata about the allowance agreement.
#[derive(Debug, Clone, Deserialize)]
pub struct AgreementMetadata {
    /// Short code for the agreement.
    pub code: String,
    /// The human-readable name of the agreement.
    pub name: String,
    /// The version or effective date of the agreement.
    pub version: String,
    /// Where the agreement was published.
    pub source: String,
    /// UTC offset of the civil time every leg is normalized to, e.g. `+05:30`.
    #[serde(deserialize_with = "deserialize_utc_offset")]
    pub reference_offset: FixedOffset,
}

/// Parses `Z` or `±HH:MM` into a fixed offset.
fn deserialize_utc_offset<'de, D>(deserializer: D) -> Result<FixedOffset, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&format!("2000-01-01T00:00:00{}", text.trim()))
        .map(|anchor| *anchor.offset())
        .map_err(|e| serde::de::Error::custom(format!("invalid UTC offset '{}': {}", text, e)))
}

/// The allowance rates for one rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// Amount paid per tail swap.
    pub tail_swap_amount: Decimal,
    /// Amount per billable transit hour.
    pub transit_hourly_rate: Decimal,
    /// Maximum billable hours for one transit halt.
    pub transit_cap_hours: Decimal,
    /// Amount paid per qualifying layover.
    pub layover_base_amount: Decimal,
    /// Layover hours covered by the base amount.
    pub layover_free_hours: Decimal,
    /// Amount per layover hour beyond the free hours.
    pub layover_hourly_rate: Decimal,
    /// Amount per deadhead block hour.
    pub deadhead_hourly_rate: Decimal,
    /// Amount per block hour inside the night window.
    pub night_hourly_rate: Decimal,
}

/// Rate configuration for a specific effective date.
#[derive(Debug, Clone, Deserialize)]
pub struct RateConfig {
    /// The effective date for these rates.
    pub effective_date: NaiveDate,
    /// Rate table per rank.
    pub rates: HashMap<Rank, RateTable>,
}

/// Station configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct StationsConfig {
    /// Codes of stations outside the domestic network.
    pub international: Vec<String>,
}

/// Decides whether a station is domestic.
///
/// Any station not listed as international is domestic.
///
/// # Example
///
/// ```
/// use allowance_engine::config::StationDirectory;
///
/// let stations = StationDirectory::new(["DXB", "SIN"]);
/// assert!(stations.is_domestic("DEL"));
/// assert!(!stations.is_domestic(" dxb "));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    international: HashSet<String>,
}

impl StationDirectory {
    /// Creates a directory from the international station codes.
    pub fn new<I, S>(international: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            international: international
                .into_iter()
                .map(|code| code.as_ref().trim().to_uppercase())
                .collect(),
        }
    }

    /// Returns true when the station is domestic.
    pub fn is_domestic(&self, code: &str) -> bool {
        !self.international.contains(&code.trim().to_uppercase())
    }

    /// Returns true when both ends of a route are domestic.
    pub fn is_domestic_route(&self, departure: &str, arrival: &str) -> bool {
        self.is_domestic(departure) && self.is_domestic(arrival)
    }
}

/// The complete allowance configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct AllowanceConfig {
    /// Agreement metadata.
    metadata: AgreementMetadata,
    /// Station directory.
    stations: StationDirectory,
    /// Rate configurations by effective date (sorted oldest first).
    rates: Vec<RateConfig>,
}

impl AllowanceConfig {
    /// Creates a new AllowanceConfig from its component parts.
    pub fn new(
        metadata: AgreementMetadata,
        stations: StationDirectory,
        rates: Vec<RateConfig>,
    ) -> Self {
        let mut sorted_rates = rates;
        sorted_rates.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            stations,
            rates: sorted_rates,
        }
    }

    /// Returns the agreement metadata.
    pub fn agreement(&self) -> &AgreementMetadata {
        &self.metadata
    }

    /// Returns the station directory.
    pub fn stations(&self) -> &StationDirectory {
        &self.stations
    }

    /// Returns the rate configuration in force on `date`.
    pub fn rates_effective_on(&self, date: NaiveDate) -> Option<&RateConfig> {
        self.rates.iter().rev().find(|rc| rc.effective_date <= date)
    }
}
