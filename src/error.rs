use chrono::NaiveDate;
use thiserror::Error;

use crate::models::Granularity;

/// Calendar arithmetic failures.
///
/// These never escape the aggregation API: callers degrade to the start of the
/// requested instant and log the error instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Date out of range: {date} shifted by {amount} {granularity}(s)")]
    OutOfRange {
        date: NaiveDate,
        granularity: Granularity,
        amount: i64,
    },
    #[error("Cannot align {date} to the start of its {granularity}")]
    Alignment {
        date: NaiveDate,
        granularity: Granularity,
    },
    #[error("Local midnight does not exist on {0}")]
    NonexistentMidnight(NaiveDate),
}
