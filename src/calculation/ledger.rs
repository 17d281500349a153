//! Date-grouped ledger.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{DateGroup, LedgerEntry};

/// Groups ledger entries by calendar date, earliest date first.
///
/// Entries keep their classification order within a date.
pub fn group_by_date(entries: Vec<LedgerEntry>) -> Vec<DateGroup> {
    let mut groups: BTreeMap<NaiveDate, Vec<LedgerEntry>> = BTreeMap::new();
    for entry in entries {
        groups.entry(entry.date).or_default().push(entry);
    }

    groups
        .into_iter()
        .map(|(date, entries)| DateGroup { date, entries })
        .collect()
}
