use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::ValidationError;

/// The archival sentinel for "date unknown". Accepted on input as the
/// absence of a value, never as a value itself.
pub(crate) const UNKNOWN_DATE_VALUE: &str = "99999999";

/// A single proleptic-Gregorian calendar day.
///
/// Construction is checked: `1798-02-31` is rejected, BCE years are
/// allowed. Renders as an ISO 8601 date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarDate)
            .ok_or(ValidationError::InvalidCalendarDate { year, month, day })
    }

    /// Parse an ISO 8601 date string such as `1307-02-22`.
    pub fn parse_iso(value: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(CalendarDate)
            .map_err(|_| ValidationError::InvalidDateValue(value.to_string()))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// ISO 8601 rendering, zero-padded to four year digits; BCE years keep
    /// a leading minus.
    pub fn iso(&self) -> String {
        let year = self.0.year();
        if year < 0 {
            format!("-{:04}-{:02}-{:02}", -year, self.0.month(), self.0.day())
        } else {
            format!("{:04}-{:02}-{:02}", year, self.0.month(), self.0.day())
        }
    }

    fn last_of_month(year: i32, month: u32) -> Result<Self, ValidationError> {
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|first| first.pred_opt())
            .map(CalendarDate)
            .ok_or(ValidationError::InvalidCalendarDate {
                year,
                month,
                day: 31,
            })
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.iso())
    }
}

/// A machine-readable date value before it is wrapped into a [`DateValue`]:
/// either one day or a span of days.
enum MachineDate {
    Single(CalendarDate),
    Span(CalendarDate, CalendarDate),
}

/// A structured charter date. Exactly one representation is active: a
/// single day, a bounded range, or an unparsed text phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateValue {
    Exact(CalendarDate),
    Range { from: CalendarDate, to: CalendarDate },
    Text(String),
}

impl DateValue {
    pub fn exact(date: CalendarDate) -> Self {
        DateValue::Exact(date)
    }

    pub fn range(from: CalendarDate, to: CalendarDate) -> Self {
        DateValue::Range { from, to }
    }

    /// An unparsed date phrase such as `Sine dato`. Must be non-empty.
    pub fn text(phrase: impl Into<String>) -> Result<Self, ValidationError> {
        let phrase = phrase.into();
        if phrase.is_empty() {
            return Err(ValidationError::EmptyDate);
        }
        Ok(DateValue::Text(phrase))
    }

    /// Parse a machine-readable date string.
    ///
    /// Accepts ISO 8601 (`1307-02-22`) and the compact archival form
    /// (`13070222`, optionally sign-prefixed for BCE years, three or four
    /// year digits). Compact values with month `99` expand to a whole-year
    /// range, day `99` to a whole-month range. The all-unknown sentinel
    /// `99999999` is rejected: absence is not a value.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Ok(match parse_machine(value)? {
            MachineDate::Single(date) => DateValue::Exact(date),
            MachineDate::Span(from, to) => DateValue::Range { from, to },
        })
    }

    /// Parse a pair of machine-readable bounds into a range. A bound that
    /// itself expands to a span collapses to its first day.
    pub fn parse_range(from: &str, to: &str) -> Result<Self, ValidationError> {
        let from = parse_machine(from)?.first_day();
        let to = parse_machine(to)?.first_day();
        Ok(DateValue::Range { from, to })
    }

    /// Loose-input gate for callers holding a possible machine value and a
    /// possible text phrase.
    ///
    /// Empty strings and the `99999999` sentinel count as absent. Both
    /// present is [`ValidationError::AmbiguousDate`], neither is
    /// [`ValidationError::EmptyDate`].
    pub fn from_parts(
        machine: Option<&str>,
        text: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let machine = machine.filter(|v| !v.is_empty() && *v != UNKNOWN_DATE_VALUE);
        let text = text.filter(|v| !v.is_empty());
        match (machine, text) {
            (None, None) => Err(ValidationError::EmptyDate),
            (Some(_), Some(_)) => Err(ValidationError::AmbiguousDate),
            (Some(value), None) => Self::parse(value),
            (None, Some(phrase)) => Ok(DateValue::Text(phrase.to_string())),
        }
    }
}

impl MachineDate {
    fn first_day(&self) -> CalendarDate {
        match self {
            MachineDate::Single(date) => *date,
            MachineDate::Span(from, _) => *from,
        }
    }
}

fn parse_machine(value: &str) -> Result<MachineDate, ValidationError> {
    if value == UNKNOWN_DATE_VALUE {
        return Err(ValidationError::InvalidDateValue(value.to_string()));
    }
    if let Ok(date) = CalendarDate::parse_iso(value) {
        return Ok(MachineDate::Single(date));
    }
    parse_compact(value)
}

/// Compact archival date strings: an optional `-`, three or four year
/// digits, two month digits, two day digits.
fn parse_compact(value: &str) -> Result<MachineDate, ValidationError> {
    let invalid = || ValidationError::InvalidDateValue(value.to_string());

    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };
    if !matches!(digits.len(), 7 | 8) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let split = digits.len() - 4;
    let year: i32 = digits[..split].parse().map_err(|_| invalid())?;
    let year = if negative { -year } else { year };
    let month: u32 = digits[split..split + 2].parse().map_err(|_| invalid())?;
    let day: u32 = digits[split + 2..].parse().map_err(|_| invalid())?;

    // Month 99 means the whole year is unclear; any day digits after it
    // carry no information. Day 99 means the day within the month is.
    if month == 99 {
        return Ok(MachineDate::Span(
            CalendarDate::new(year, 1, 1)?,
            CalendarDate::new(year, 12, 31)?,
        ));
    }
    if day == 99 {
        return Ok(MachineDate::Span(
            CalendarDate::new(year, month, 1)?,
            CalendarDate::last_of_month(year, month)?,
        ));
    }
    Ok(MachineDate::Single(CalendarDate::new(year, month, day)?))
}
