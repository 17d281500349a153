//! Logbook reconciliation.
//!
//! The schedule says what the pilot was rostered for; the logbook says what
//! was actually flown and on which aircraft. Reconciliation fills missing
//! registrations from the logbook and records every disagreement as a
//! warning. Without a logbook the run continues on schedule data alone and
//! the results that depend on registrations are marked low confidence.

use tracing::debug;

use crate::models::{AuditWarning, DutyTimeline, Logbook};

/// Warning code: no logbook was supplied.
pub const LOGBOOK_ABSENT: &str = "LOGBOOK_ABSENT";

/// Warning code: an operating leg has no registration after reconciliation.
pub const TAIL_NUMBER_UNRESOLVED: &str = "TAIL_NUMBER_UNRESOLVED";

/// Warning code: an operating leg has no matching logbook entry.
pub const LEG_NOT_IN_LOGBOOK: &str = "LEG_NOT_IN_LOGBOOK";

/// Warning code: a leg rostered as deadhead appears in the logbook.
pub const DEADHEAD_CONTRADICTED: &str = "DEADHEAD_CONTRADICTED";

/// The timeline after reconciliation.
#[derive(Debug, Clone)]
pub struct Reconciliation {
    /// The timeline with registrations and operating status corrected.
    pub timeline: DutyTimeline,
    /// Per leg, in timeline order: true when results built on it are
    /// low confidence.
    pub low_confidence: Vec<bool>,
    /// Disagreements found.
    pub warnings: Vec<AuditWarning>,
}

impl Reconciliation {
    /// Returns true when the leg at flat index `index` is low confidence.
    pub fn is_low_confidence(&self, index: usize) -> bool {
        self.low_confidence.get(index).copied().unwrap_or(true)
    }
}

/// Reconciles the schedule against the logbook.
///
/// Each leg is matched to the first unused logbook entry with the same date
/// and route. A match fills a missing registration and marks the leg as
/// operating. Operating legs left without a registration are low confidence,
/// and so is every leg when there is no logbook at all.
pub fn reconcile_logbook(timeline: &DutyTimeline, logbook: Option<&Logbook>) -> Reconciliation {
    let mut reconciled = timeline.clone();
    let mut warnings = Vec::new();
    let mut low_confidence = Vec::with_capacity(timeline.leg_count());

    if logbook.is_none() {
        warnings.push(AuditWarning::new(
            LOGBOOK_ABSENT,
            "No logbook supplied; tail swaps and night hours are based on schedule data only",
            "medium",
        ));
    }

    let mut used = vec![false; logbook.map_or(0, |lb| lb.entries.len())];

    for leg in reconciled.periods.iter_mut().flat_map(|p| p.legs.iter_mut()) {
        if let Some(logbook) = logbook {
            let matched = logbook
                .entries
                .iter()
                .enumerate()
                .find(|(i, entry)| !used[*i] && entry.matches(&*leg));

            match matched {
                Some((i, entry)) => {
                    used[i] = true;

                    if leg.normalized_tail().is_none() {
                        if let Some(tail) = entry.tail_number.as_deref() {
                            debug!(leg_id = %leg.id, tail = %tail, "Registration filled from logbook");
                            leg.tail_number = Some(tail.trim().to_uppercase());
                        }
                    }

                    if !leg.operating {
                        warnings.push(AuditWarning::new(
                            DEADHEAD_CONTRADICTED,
                            format!(
                                "Leg {} ({}) is rostered as deadhead but appears in the logbook; treated as operating",
                                leg.id,
                                leg.route()
                            ),
                            "medium",
                        ));
                        leg.operating = true;
                    }
                }
                None if leg.operating => {
                    warnings.push(AuditWarning::new(
                        LEG_NOT_IN_LOGBOOK,
                        format!(
                            "Operating leg {} ({}) on {} has no logbook entry",
                            leg.id,
                            leg.route(),
                            leg.date
                        ),
                        "low",
                    ));
                }
                None => {}
            }
        }

        let unresolved = leg.operating && leg.normalized_tail().is_none();
        if unresolved {
            warnings.push(AuditWarning::new(
                TAIL_NUMBER_UNRESOLVED,
                format!(
                    "Operating leg {} ({}) on {} has no aircraft registration",
                    leg.id,
                    leg.route(),
                    leg.date
                ),
                "low",
            ));
        }

        low_confidence.push(logbook.is_none() || unresolved);
    }

    Reconciliation {
        timeline: reconciled,
        low_confidence,
        warnings,
    }
}
