pub mod date;
pub mod identifiers;

pub use date::{CalendarDate, DateValue};
pub use identifiers::CharterId;

use thiserror::Error;

/// Errors raised while constructing model values.
///
/// Always recoverable: fix the input and construct again. The same input
/// reproduces the same error.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("charter identifier is not allowed to be empty")]
    EmptyIdentifier,

    #[error("charter group name is not allowed to be empty")]
    EmptyGroupName,

    #[error("duplicate charter identifier in group: '{0}'")]
    DuplicateCharterId(String),

    #[error("duplicate witness key: '{0}'")]
    DuplicateWitnessKey(String),

    #[error("a structured date takes either a machine-readable value or a text phrase, not both")]
    AmbiguousDate,

    #[error("a structured date needs a machine-readable value or a text phrase")]
    EmptyDate,

    #[error("no such calendar day: {year:04}-{month:02}-{day:02}")]
    InvalidCalendarDate { year: i32, month: u32, day: u32 },

    #[error("cannot interpret '{0}' as a date value")]
    InvalidDateValue(String),

    #[error("'{0}' does not look like an external URL")]
    InvalidExternalLink(String),
}
