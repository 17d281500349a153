//! Request types for the allowance engine API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/rates` endpoints.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::config::StationDirectory;
use crate::models::{
    DutyPeriod, DutyTimeline, FlightLeg, Logbook, LogbookEntry, Pilot, Rank,
    deserialize_roster_date, serialize_roster_date,
};

/// Request body for the `/calculate` endpoint.
///
/// Contains the pilot, the month's duty periods, and optionally the pilot's
/// logbook for the same month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The pilot information.
    pub pilot: PilotRequest,
    /// Duty periods in chronological order.
    pub duty_periods: Vec<DutyPeriodRequest>,
    /// Flown sectors from the logbook, if available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logbook: Option<Vec<LogbookEntryRequest>>,
}

/// Pilot information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PilotRequest {
    /// Staff number.
    pub employee_id: String,
    /// Full name.
    pub name: String,
    /// Rank code (`CP` or `FO`).
    pub rank: Rank,
    /// Home base station code.
    #[serde(default)]
    pub base: String,
    /// Aircraft type.
    #[serde(default)]
    pub aircraft_type: String,
}

/// One duty period in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DutyPeriodRequest {
    /// Legs in departure order.
    pub legs: Vec<FlightLegRequest>,
}

/// One flight leg in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightLegRequest {
    /// Flight number or other identifier.
    pub id: String,
    /// Roster date, ISO or `DD/MM/YY[YY]`.
    #[serde(
        serialize_with = "serialize_roster_date",
        deserialize_with = "deserialize_roster_date"
    )]
    pub date: NaiveDate,
    /// Departure station code.
    pub departure_station: String,
    /// Arrival station code.
    pub arrival_station: String,
    /// Off-block time.
    pub departure_time: LegTime,
    /// On-block time.
    pub arrival_time: LegTime,
    /// Aircraft registration, if known.
    #[serde(default)]
    pub tail_number: Option<String>,
    /// False for deadhead legs. Defaults to operating.
    #[serde(default = "default_operating")]
    pub operating: bool,
    /// Whether both stations are domestic. Resolved from the station
    /// directory when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domestic: Option<bool>,
}

fn default_operating() -> bool {
    true
}

/// A block time as supplied by the caller.
///
/// Offset-qualified times are converted into the agreement's reference
/// civil time; times without an offset are taken to be in it already.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LegTime {
    /// RFC 3339 time with a UTC offset, e.g. `2026-03-04T20:00:00Z`.
    Zoned(DateTime<FixedOffset>),
    /// Time without an offset.
    Local(NaiveDateTime),
}

impl LegTime {
    /// Returns the wall-clock time at `reference`.
    pub fn to_reference(self, reference: FixedOffset) -> NaiveDateTime {
        match self {
            LegTime::Zoned(time) => time.with_timezone(&reference).naive_local(),
            LegTime::Local(time) => time,
        }
    }
}

impl From<NaiveDateTime> for LegTime {
    fn from(time: NaiveDateTime) -> Self {
        LegTime::Local(time)
    }
}

/// One logbook line in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogbookEntryRequest {
    /// Flight date, ISO or `DD/MM/YY[YY]`.
    #[serde(
        serialize_with = "serialize_roster_date",
        deserialize_with = "deserialize_roster_date"
    )]
    pub date: NaiveDate,
    /// Departure station code.
    pub departure_station: String,
    /// Arrival station code.
    pub arrival_station: String,
    /// Aircraft registration.
    #[serde(default)]
    pub tail_number: Option<String>,
}

/// Query parameters for the `/rates` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatesQuery {
    /// Date to look up, ISO or `DD/MM/YY[YY]`. Defaults to today.
    pub date: Option<String>,
}

impl From<PilotRequest> for Pilot {
    fn from(req: PilotRequest) -> Self {
        Pilot {
            employee_id: req.employee_id,
            name: req.name,
            rank: req.rank,
            base: req.base,
            aircraft_type: req.aircraft_type,
        }
    }
}

impl From<LogbookEntryRequest> for LogbookEntry {
    fn from(req: LogbookEntryRequest) -> Self {
        LogbookEntry {
            date: req.date,
            departure_station: req.departure_station,
            arrival_station: req.arrival_station,
            tail_number: req.tail_number,
        }
    }
}

impl FlightLegRequest {
    /// Converts to the engine model, resolving `domestic` when omitted and
    /// moving both block times into the `reference` civil zone.
    pub fn into_leg(self, stations: &StationDirectory, reference: FixedOffset) -> FlightLeg {
        let domestic = self.domestic.unwrap_or_else(|| {
            stations.is_domestic_route(&self.departure_station, &self.arrival_station)
        });

        FlightLeg {
            id: self.id,
            date: self.date,
            departure_station: self.departure_station,
            arrival_station: self.arrival_station,
            departure_time: self.departure_time.to_reference(reference),
            arrival_time: self.arrival_time.to_reference(reference),
            tail_number: self.tail_number,
            operating: self.operating,
            domestic,
        }
    }
}

impl CalculationRequest {
    /// Splits the request into the engine inputs, with leg times in the
    /// `reference` civil zone.
    pub fn into_inputs(
        self,
        stations: &StationDirectory,
        reference: FixedOffset,
    ) -> (Pilot, DutyTimeline, Option<Logbook>) {
        let timeline = DutyTimeline::new(
            self.duty_periods
                .into_iter()
                .map(|period| {
                    DutyPeriod::new(
                        period
                            .legs
                            .into_iter()
                            .map(|leg| leg.into_leg(stations, reference))
                            .collect(),
                    )
                })
                .collect(),
        );

        let logbook = self
            .logbook
            .map(|entries| Logbook::new(entries.into_iter().map(Into::into).collect()));

        (self.pilot.into(), timeline, logbook)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stations() -> StationDirectory {
        StationDirectory::new(["DXB", "SIN"])
    }

    fn ist() -> FixedOffset {
        FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap()
    }

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "pilot": {
                "employee_id": "10234",
                "name": "R. Menon",
                "rank": "CP",
                "base": "DEL",
                "aircraft_type": "A320"
            },
            "duty_periods": [
                {
                    "legs": [
                        {
                            "id": "AI-665",
                            "date": "05/03/26",
                            "departure_station": "DEL",
                            "arrival_station": "BOM",
                            "departure_time": "2026-03-05T06:00:00",
                            "arrival_time": "2026-03-05T08:00:00",
                            "tail_number": "VT-IWN"
                        }
                    ]
                }
            ]
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.pilot.rank, Rank::Captain);
        assert!(request.logbook.is_none());

        let leg = &request.duty_periods[0].legs[0];
        assert_eq!(leg.date, NaiveDate::from_ymd_opt(2026, 3, 5).unwrap());
        assert!(leg.operating);
        assert_eq!(leg.domestic, None);
    }

    #[test]
    fn test_domestic_resolved_from_stations() {
        let json = r#"{
            "id": "AI-995",
            "date": "2026-03-05",
            "departure_station": "BOM",
            "arrival_station": "DXB",
            "departure_time": "2026-03-05T06:00:00",
            "arrival_time": "2026-03-05T09:00:00"
        }"#;

        let leg: FlightLegRequest = serde_json::from_str(json).unwrap();
        assert!(!leg.into_leg(&stations(), ist()).domestic);
    }

    #[test]
    fn test_explicit_domestic_wins() {
        let json = r#"{
            "id": "AI-995",
            "date": "2026-03-05",
            "departure_station": "BOM",
            "arrival_station": "DXB",
            "departure_time": "2026-03-05T06:00:00",
            "arrival_time": "2026-03-05T09:00:00",
            "domestic": true,
            "operating": false
        }"#;

        let leg: FlightLegRequest = serde_json::from_str(json).unwrap();
        let leg = leg.into_leg(&stations(), ist());
        assert!(leg.domestic);
        assert!(!leg.operating);
    }

    #[test]
    fn test_into_inputs_with_logbook() {
        let json = r#"{
            "pilot": {"employee_id": "10234", "name": "R. Menon", "rank": "FO"},
            "duty_periods": [{"legs": []}, {"legs": []}],
            "logbook": [
                {"date": "05/03/2026", "departure_station": "DEL", "arrival_station": "BOM", "tail_number": "VT-IWN"}
            ]
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        let (pilot, timeline, logbook) = request.into_inputs(&stations(), ist());

        assert_eq!(pilot.rank, Rank::FirstOfficer);
        assert_eq!(pilot.base, "");
        assert_eq!(timeline.periods.len(), 2);
        assert_eq!(logbook.unwrap().entries.len(), 1);
    }

    #[test]
    fn test_utc_times_move_to_reference_zone() {
        let json = r#"{
            "id": "AI-101",
            "date": "2026-03-05",
            "departure_station": "DEL",
            "arrival_station": "BOM",
            "departure_time": "2026-03-04T20:00:00Z",
            "arrival_time": "2026-03-04T22:00:00Z"
        }"#;

        let leg: FlightLegRequest = serde_json::from_str(json).unwrap();
        assert!(matches!(leg.departure_time, LegTime::Zoned(_)));

        let leg = leg.into_leg(&stations(), ist());
        assert_eq!(leg.departure_time, at("2026-03-05 01:30"));
        assert_eq!(leg.arrival_time, at("2026-03-05 03:30"));
    }

    #[test]
    fn test_offset_times_keep_their_instant() {
        let json = r#"{
            "id": "AI-101",
            "date": "2026-03-05",
            "departure_station": "DEL",
            "arrival_station": "BOM",
            "departure_time": "2026-03-05T09:00:00+09:00",
            "arrival_time": "2026-03-05T06:30:00+05:30"
        }"#;

        let leg: FlightLegRequest = serde_json::from_str(json).unwrap();
        let leg = leg.into_leg(&stations(), ist());
        assert_eq!(leg.departure_time, at("2026-03-05 05:30"));
        assert_eq!(leg.arrival_time, at("2026-03-05 06:30"));
        assert_eq!(leg.block_seconds(), 3600);
    }

    #[test]
    fn test_times_without_offset_are_reference_time() {
        let local = LegTime::Local(at("2026-03-05 01:30"));
        assert_eq!(local.to_reference(ist()), at("2026-03-05 01:30"));

        let leg: LegTime = serde_json::from_str(r#""2026-03-05T01:30:00""#).unwrap();
        assert_eq!(leg, local);
    }

    #[test]
    fn test_unparseable_time_is_rejected() {
        let result: Result<LegTime, _> = serde_json::from_str(r#""05/03 01:30""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_pilot_is_rejected() {
        let json = r#"{"duty_periods": []}"#;
        let result: Result<CalculationRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
