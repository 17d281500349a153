//! Calendar values for roster dates.
//!
//! Rosters and logbooks print dates in a compact `DD/MM[/YY[YY]]` form.
//! Comparing those strings lexically puts `05/03` after `01/04`, so every
//! date is parsed into a [`CompactDate`] (and from there a [`NaiveDate`])
//! before it is sorted or grouped.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::{EngineError, EngineResult};

/// A calendar day parsed from roster text.
///
/// Field order is year, month, day so the derived ordering is calendar
/// ordering.
///
/// # Example
///
/// ```
/// use allowance_engine::models::CompactDate;
///
/// let a = CompactDate::parse("05/03", Some(2026)).unwrap();
/// let b = CompactDate::parse("20/02/26", None).unwrap();
/// assert!(b < a);
/// assert_eq!(a.to_string(), "05/03/2026");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompactDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CompactDate {
    /// Parses `DD/MM`, `DD/MM/YY`, `DD/MM/YYYY` or ISO `YYYY-MM-DD`.
    ///
    /// `default_year` is used when the text carries no year; two-digit years
    /// are taken to be in the 2000s.
    pub fn parse(value: &str, default_year: Option<i32>) -> EngineResult<Self> {
        let text = value.trim();
        let invalid = |message: &str| EngineError::InvalidDate {
            value: value.to_string(),
            message: message.to_string(),
        };

        if text.contains('-') {
            let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map_err(|e| invalid(&e.to_string()))?;
            return Ok(date.into());
        }

        let parts: Vec<&str> = text.split('/').map(str::trim).collect();
        if parts.len() < 2 || parts.len() > 3 {
            return Err(invalid("expected DD/MM, DD/MM/YY or DD/MM/YYYY"));
        }

        let day: u32 = parts[0].parse().map_err(|_| invalid("day is not a number"))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|_| invalid("month is not a number"))?;
        let year = match parts.get(2) {
            Some(y) => {
                let year: i32 = y.parse().map_err(|_| invalid("year is not a number"))?;
                if y.len() <= 2 { year + 2000 } else { year }
            }
            None => default_year.ok_or_else(|| invalid("no year given and no default year"))?,
        };

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Into::into)
            .ok_or_else(|| invalid("not a valid calendar day"))
    }

    /// Converts to a chrono date.
    pub fn to_naive_date(self) -> NaiveDate {
        // Only constructed from valid dates.
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).unwrap_or(NaiveDate::MIN)
    }
}

impl From<NaiveDate> for CompactDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl FromStr for CompactDate {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, None)
    }
}

impl fmt::Display for CompactDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

/// Formats a date the way rosters print it (`DD/MM/YYYY`).
pub fn format_roster_date(date: NaiveDate) -> String {
    CompactDate::from(date).to_string()
}

/// Formats a number of seconds as `HH:MM`. Hours are not wrapped at 24.
///
/// ```
/// use allowance_engine::models::format_hhmm;
///
/// assert_eq!(format_hhmm(5 * 3600 + 7 * 60), "05:07");
/// assert_eq!(format_hhmm(85 * 3600 + 30 * 60), "85:30");
/// ```
pub fn format_hhmm(seconds: i64) -> String {
    let minutes = seconds.max(0) / 60;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Serde helper accepting ISO or compact roster dates.
pub fn deserialize_roster_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    CompactDate::parse(&text, None)
        .map(CompactDate::to_naive_date)
        .map_err(serde::de::Error::custom)
}

/// Serde helper writing dates as `DD/MM/YYYY`.
pub fn serialize_roster_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_roster_date(*date))
}
