//! Calculation logic for the allowance engine.
//!
//! This module contains the classifiers and calculators that turn a duty
//! timeline into allowances: ground-interval and tail-swap classification,
//! night window overlap, deadhead accumulation, logbook reconciliation, the
//! date-grouped ledger, and the aggregator that runs them in one pass.

mod aggregator;
mod deadhead;
mod gap_classifier;
mod ledger;
mod logbook_reconciliation;
mod night_window;
mod precision;

pub use aggregator::{NEGATIVE_INTERVAL, calculate_allowances, calculate_with_config};
pub use deadhead::{DeadheadAccumulator, DeadheadSector};
pub use gap_classifier::{
    GapClassification, GroundInterval, LAYOVER_THRESHOLD_SECS, LOW_CONFIDENCE_MARKER, Layover,
    TRANSIT_THRESHOLD_SECS, TailSwap, Transit, classify_duty_period, classify_gap,
    classify_interval, detect_tail_swap,
};
pub use ledger::group_by_date;
pub use logbook_reconciliation::{
    DEADHEAD_CONTRADICTED, LEG_NOT_IN_LOGBOOK, LOGBOOK_ABSENT, Reconciliation,
    TAIL_NUMBER_UNRESOLVED, reconcile_logbook,
};
pub use night_window::{
    NIGHT_WINDOW_END_HOUR, NIGHT_WINDOW_START_HOUR, NightFlight, calculate_night, night_seconds,
};
pub use precision::{CURRENCY_DECIMAL_PLACES, round_currency};
