//! Duty period and timeline models.
//!
//! A [`DutyTimeline`] is the month as handed over by the schedule parser:
//! an ordered list of [`DutyPeriod`]s, each a contiguous run of legs. Ground
//! intervals are only classified between legs of the same period.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::FlightLeg;

/// A maximal run of legs with no duty-ending rest between them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DutyPeriod {
    /// Legs in departure order.
    pub legs: Vec<FlightLeg>,
}

impl DutyPeriod {
    /// Creates a duty period from its legs.
    pub fn new(legs: Vec<FlightLeg>) -> Self {
        Self { legs }
    }

    /// Returns the time-adjacent leg pairs of this period.
    pub fn adjacent_pairs(&self) -> impl Iterator<Item = (&FlightLeg, &FlightLeg)> {
        self.legs.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Seconds from the first departure to the last arrival.
    pub fn span_seconds(&self) -> i64 {
        match (self.legs.first(), self.legs.last()) {
            (Some(first), Some(last)) => (last.arrival_time - first.departure_time).num_seconds(),
            _ => 0,
        }
    }
}

/// The full duty timeline for one pilot-month.
///
/// # Example
///
/// ```
/// use allowance_engine::models::{DutyPeriod, DutyTimeline};
///
/// let timeline = DutyTimeline::new(vec![DutyPeriod::default()]);
/// assert!(timeline.validate().is_err()); // no legs at all
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DutyTimeline {
    /// Duty periods in chronological order.
    pub periods: Vec<DutyPeriod>,
}

impl DutyTimeline {
    /// Creates a timeline from its duty periods.
    pub fn new(periods: Vec<DutyPeriod>) -> Self {
        Self { periods }
    }

    /// Iterates every leg of the timeline in order.
    pub fn legs(&self) -> impl Iterator<Item = &FlightLeg> {
        self.periods.iter().flat_map(|p| p.legs.iter())
    }

    /// Returns the total number of legs.
    pub fn leg_count(&self) -> usize {
        self.periods.iter().map(|p| p.legs.len()).sum()
    }

    /// Returns the roster date of the first leg, if any.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.legs().next().map(|leg| leg.date)
    }

    /// Checks the timeline invariants.
    ///
    /// Fails with [`EngineError::MissingRequiredInput`] when there are no legs,
    /// and with [`EngineError::MalformedTimeline`] when a leg does not arrive
    /// after it departs or legs are not strictly ordered by departure time.
    /// Nothing is repaired.
    pub fn validate(&self) -> EngineResult<()> {
        if self.leg_count() == 0 {
            return Err(EngineError::MissingRequiredInput {
                message: "no schedule legs supplied".to_string(),
            });
        }

        let mut previous: Option<&FlightLeg> = None;
        for leg in self.legs() {
            if leg.arrival_time <= leg.departure_time {
                return Err(EngineError::MalformedTimeline {
                    leg_id: leg.id.clone(),
                    message: format!(
                        "arrival {} is not after departure {}",
                        leg.arrival_time, leg.departure_time
                    ),
                });
            }
            if let Some(prev) = previous {
                if leg.departure_time <= prev.departure_time {
                    return Err(EngineError::MalformedTimeline {
                        leg_id: leg.id.clone(),
                        message: format!(
                            "departure {} does not follow leg '{}' departing {}",
                            leg.departure_time, prev.id, prev.departure_time
                        ),
                    });
                }
            }
            previous = Some(leg);
        }

        Ok(())
    }
}
