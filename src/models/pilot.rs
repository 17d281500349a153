//! Pilot model and rank.
//!
//! This module defines the [`Pilot`] struct and [`Rank`] enum. A pilot is
//! immutable for the duration of one calculation; the rank selects which
//! rate table applies.

use serde::{Deserialize, Serialize};

/// The cockpit rank of a pilot.
///
/// Serialized using the short roster codes `CP` and `FO`.
///
/// # Example
///
/// ```
/// use allowance_engine::models::Rank;
///
/// assert_eq!(Rank::Captain.code(), "CP");
/// assert_eq!(Rank::FirstOfficer.full_name(), "First Officer");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    /// Captain (pilot in command).
    #[serde(rename = "CP")]
    Captain,
    /// First Officer (co-pilot).
    #[serde(rename = "FO")]
    FirstOfficer,
}

impl Rank {
    /// All ranks, in rate table order.
    pub const ALL: [Rank; 2] = [Rank::Captain, Rank::FirstOfficer];

    /// Returns the short roster code for the rank.
    pub fn code(&self) -> &'static str {
        match self {
            Rank::Captain => "CP",
            Rank::FirstOfficer => "FO",
        }
    }

    /// Returns the human-readable rank title.
    pub fn full_name(&self) -> &'static str {
        match self {
            Rank::Captain => "Captain",
            Rank::FirstOfficer => "First Officer",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Represents the pilot whose duty timeline is being costed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pilot {
    /// Staff number.
    pub employee_id: String,
    /// Full name as printed on the roster.
    pub name: String,
    /// Cockpit rank.
    pub rank: Rank,
    /// Home base station code (e.g., "DEL").
    pub base: String,
    /// Aircraft type the pilot is rated on (e.g., "A320").
    pub aircraft_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_serializes_as_roster_code() {
        assert_eq!(serde_json::to_string(&Rank::Captain).unwrap(), "\"CP\"");
        assert_eq!(serde_json::to_string(&Rank::FirstOfficer).unwrap(), "\"FO\"");
    }

    #[test]
    fn test_rank_deserializes_from_roster_code() {
        let rank: Rank = serde_json::from_str("\"FO\"").unwrap();
        assert_eq!(rank, Rank::FirstOfficer);
        assert!(serde_json::from_str::<Rank>("\"Captain\"").is_err());
    }

    #[test]
    fn test_rank_display_uses_code() {
        assert_eq!(Rank::Captain.to_string(), "CP");
        assert_eq!(Rank::Captain.full_name(), "Captain");
    }

    #[test]
    fn test_pilot_deserialization() {
        let json = r#"{
            "employee_id": "12345",
            "name": "A. Sharma",
            "rank": "CP",
            "base": "DEL",
            "aircraft_type": "A320"
        }"#;

        let pilot: Pilot = serde_json::from_str(json).unwrap();
        assert_eq!(pilot.employee_id, "12345");
        assert_eq!(pilot.rank, Rank::Captain);
        assert_eq!(pilot.base, "DEL");
    }
}
