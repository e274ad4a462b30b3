use chrono::{DateTime, NaiveDate, TimeZone};

/// One calendar-aligned interval with its sum and the running total up to it
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket<Tz: TimeZone> {
    pub start: DateTime<Tz>,
    pub sum: f64,
    pub cumulative_sum: f64,
}

impl<Tz: TimeZone> Bucket<Tz> {
    /// Local calendar date the bucket starts on
    pub fn start_date(&self) -> NaiveDate {
        self.start.date_naive()
    }
}
