//! Allowance aggregation.
//!
//! Walks the reconciled timeline once, in leg order, feeding each adjacent
//! pair to the gap classifier and each leg to the deadhead and night
//! calculators. Every classified event becomes a detail line under its
//! category and an entry in the flat ledger. Category totals are computed at
//! full precision and rounded once at the end.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{ConfigLoader, RateTable};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AllowanceBreakdown, AllowanceCategory, AllowanceDetail, AllowanceReport, AuditWarning,
    CountedAllowance, DutySummary, DutyTimeline, HourlyAllowance, LayoverAllowance, LedgerEntry,
    Logbook, Pilot, PilotInfo, format_hhmm, seconds_to_hours,
};

use super::deadhead::DeadheadAccumulator;
use super::gap_classifier::{GroundInterval, LOW_CONFIDENCE_MARKER, classify_duty_period, format_gap};
use super::ledger::group_by_date;
use super::logbook_reconciliation::reconcile_logbook;
use super::night_window::calculate_night;
use super::precision::round_currency;

/// Warning code: a leg departs before the previous leg arrives.
pub const NEGATIVE_INTERVAL: &str = "NEGATIVE_INTERVAL";

/// Details and ledger entries collected during the walk.
#[derive(Default)]
struct EventLog {
    ledger: Vec<LedgerEntry>,
    tail_swap: Vec<AllowanceDetail>,
    transit: Vec<AllowanceDetail>,
    layover: Vec<AllowanceDetail>,
    deadhead: Vec<AllowanceDetail>,
    night: Vec<AllowanceDetail>,
}

impl EventLog {
    fn record(
        &mut self,
        category: AllowanceCategory,
        date: chrono::NaiveDate,
        description: String,
        amount: Decimal,
    ) {
        let details = match category {
            AllowanceCategory::TailSwap => &mut self.tail_swap,
            AllowanceCategory::Transit => &mut self.transit,
            AllowanceCategory::Layover => &mut self.layover,
            AllowanceCategory::Deadhead => &mut self.deadhead,
            AllowanceCategory::Night => &mut self.night,
        };
        details.push(AllowanceDetail {
            date,
            description: description.clone(),
        });
        self.ledger.push(LedgerEntry {
            category,
            date,
            description,
            amount: round_currency(amount),
        });
    }
}

fn mark_confidence(description: String, low_confidence: bool) -> String {
    if low_confidence {
        description + LOW_CONFIDENCE_MARKER
    } else {
        description
    }
}

/// Calculates every allowance for one pilot-month.
///
/// The timeline is validated first and nothing is repaired: a malformed
/// timeline fails the whole run. The logbook is optional; without it the
/// run completes with a warning and low-confidence markers.
///
/// The result depends only on the inputs, so repeated calls return equal
/// reports.
///
/// # Errors
///
/// - [`EngineError::MissingRequiredInput`] when the timeline has no legs.
/// - [`EngineError::MalformedTimeline`] when a leg arrives before it departs
///   or the legs are out of order.
pub fn calculate_allowances(
    pilot: &Pilot,
    timeline: &DutyTimeline,
    logbook: Option<&Logbook>,
    rates: &RateTable,
) -> EngineResult<AllowanceReport> {
    timeline.validate()?;

    let mut reconciliation = reconcile_logbook(timeline, logbook);
    let mut warnings = std::mem::take(&mut reconciliation.warnings);

    let mut events = EventLog::default();
    let mut tail_swap_count: u32 = 0;
    let mut transit_hours = Decimal::ZERO;
    let mut layover_count: u32 = 0;
    let mut layover_extra_hours = Decimal::ZERO;
    let mut deadhead = DeadheadAccumulator::new(rates.deadhead_hourly_rate);
    let mut night_seconds: i64 = 0;

    let mut block_seconds: i64 = 0;
    let mut duty_seconds: i64 = 0;
    let mut operating_flights: u32 = 0;
    let mut leg_index: usize = 0;

    for period in &reconciliation.timeline.periods {
        let gaps = classify_duty_period(period, rates);
        let mut period_duty = period.span_seconds();

        for (position, leg) in period.legs.iter().enumerate() {
            let low_confidence = reconciliation.is_low_confidence(leg_index);

            if let Some(gap) = position.checked_sub(1).and_then(|i| gaps.get(i)) {
                let prev = &period.legs[position - 1];

                if let Some(swap) = &gap.tail_swap {
                    let pair_low_confidence =
                        low_confidence || reconciliation.is_low_confidence(leg_index - 1);
                    debug!(from = %swap.from_tail, to = %swap.to_tail, leg_id = %leg.id, "Tail swap");
                    tail_swap_count += 1;
                    events.record(
                        AllowanceCategory::TailSwap,
                        leg.date,
                        mark_confidence(swap.describe(), pair_low_confidence),
                        swap.amount,
                    );
                }

                match &gap.interval {
                    GroundInterval::Transit(transit) => {
                        debug!(station = %transit.station, gap = %format_gap(transit.gap_seconds), "Transit");
                        transit_hours += transit.billable_hours;
                        events.record(
                            AllowanceCategory::Transit,
                            prev.date,
                            transit.describe(),
                            transit.amount,
                        );
                    }
                    GroundInterval::Layover(layover) => {
                        debug!(station = %layover.station, gap = %format_gap(layover.gap_seconds), "Layover");
                        layover_count += 1;
                        layover_extra_hours += layover.extra_hours;
                        period_duty -= layover.gap_seconds;
                        events.record(
                            AllowanceCategory::Layover,
                            prev.date,
                            layover.describe(),
                            layover.amount(),
                        );
                    }
                    GroundInterval::Negative { gap_seconds } => {
                        debug!(gap = %format_gap(*gap_seconds), leg_id = %leg.id, "Negative ground interval skipped");
                        warnings.push(AuditWarning::new(
                            NEGATIVE_INTERVAL,
                            format!(
                                "Leg {} departs {} before leg {} arrives {}; interval skipped",
                                leg.id, leg.departure_time, prev.id, prev.arrival_time
                            ),
                            "high",
                        ));
                    }
                    GroundInterval::NoAllowance => {}
                }
            }

            if let Some(sector) = deadhead.add(leg) {
                debug!(leg_id = %leg.id, block = %format_hhmm(sector.block_seconds), "Deadhead");
                events.record(
                    AllowanceCategory::Deadhead,
                    leg.date,
                    sector.describe(),
                    sector.amount,
                );
            }

            if let Some(night) = calculate_night(leg, rates) {
                debug!(leg_id = %leg.id, night = %format_hhmm(night.night_seconds), "Night time");
                night_seconds += night.night_seconds;
                events.record(
                    AllowanceCategory::Night,
                    leg.date,
                    mark_confidence(night.describe(), low_confidence),
                    night.amount,
                );
            }

            if leg.operating {
                operating_flights += 1;
                block_seconds += leg.block_seconds();
            }

            leg_index += 1;
        }

        duty_seconds += period_duty;
    }

    let night_hours = seconds_to_hours(night_seconds);

    let tail_swap = CountedAllowance {
        count: tail_swap_count,
        rate: rates.tail_swap_amount,
        amount: round_currency(Decimal::from(tail_swap_count) * rates.tail_swap_amount),
        details: events.tail_swap,
    };

    let transit = HourlyAllowance {
        hours: round_currency(transit_hours),
        rate: rates.transit_hourly_rate,
        amount: round_currency(transit_hours * rates.transit_hourly_rate),
        details: events.transit,
    };

    let layover_base_amount =
        round_currency(Decimal::from(layover_count) * rates.layover_base_amount);
    let layover_extra_amount = round_currency(layover_extra_hours * rates.layover_hourly_rate);
    let layover = LayoverAllowance {
        count: layover_count,
        base_rate: rates.layover_base_amount,
        base_amount: layover_base_amount,
        extra_hours: round_currency(layover_extra_hours),
        extra_rate: rates.layover_hourly_rate,
        extra_amount: layover_extra_amount,
        total: layover_base_amount + layover_extra_amount,
        details: events.layover,
    };

    let deadhead_allowance = HourlyAllowance {
        hours: round_currency(deadhead.total_hours()),
        rate: rates.deadhead_hourly_rate,
        amount: round_currency(deadhead.amount()),
        details: events.deadhead,
    };

    let night = HourlyAllowance {
        hours: round_currency(night_hours),
        rate: rates.night_hourly_rate,
        amount: round_currency(night_hours * rates.night_hourly_rate),
        details: events.night,
    };

    let total_amount = tail_swap.amount
        + transit.amount
        + layover.total
        + deadhead_allowance.amount
        + night.amount;

    debug!(
        employee_id = %pilot.employee_id,
        legs = leg_index,
        total = %total_amount,
        warnings = warnings.len(),
        "Allowance calculation complete"
    );

    Ok(AllowanceReport {
        pilot_info: PilotInfo::from(pilot),
        summary: DutySummary {
            block_hours: format_hhmm(block_seconds),
            duty_hours: format_hhmm(duty_seconds),
            operating_flights,
            deadhead_flights: deadhead.sectors(),
            layover_count,
        },
        allowances: AllowanceBreakdown {
            tail_swap,
            transit,
            layover,
            deadhead: deadhead_allowance,
            night,
            total_amount,
        },
        ledger: group_by_date(events.ledger),
        warnings,
    })
}

/// Calculates allowances using the rate table in force on the first leg's
/// date for the pilot's rank.
///
/// # Errors
///
/// Everything [`calculate_allowances`] returns, plus
/// [`EngineError::RateNotFound`] when no rate table covers the month.
pub fn calculate_with_config(
    pilot: &Pilot,
    timeline: &DutyTimeline,
    logbook: Option<&Logbook>,
    config: &ConfigLoader,
) -> EngineResult<AllowanceReport> {
    timeline.validate()?;

    let date = timeline
        .first_date()
        .ok_or_else(|| EngineError::MissingRequiredInput {
            message: "no schedule legs supplied".to_string(),
        })?;
    let rates = config.rate_table(pilot.rank, date)?;

    calculate_allowances(pilot, timeline, logbook, rates)
}
