//! Calendar alignment and stepping.
//!
//! All bucket arithmetic happens on local `NaiveDate`s: an instant is first
//! moved into the calendar's time zone, truncated to the start of its period,
//! and only converted back to a `DateTime` (local midnight) for display. This
//! keeps day/month stepping independent of DST offsets.

use chrono::{DateTime, Datelike, Days, Local, Months, NaiveDate, Offset, TimeZone, Utc, Weekday};
use tracing::warn;

use crate::error::CalendarError;
use crate::models::Granularity;

/// Time zone plus first-day-of-week convention
#[derive(Debug, Clone)]
pub struct Calendar<Tz: TimeZone> {
    tz: Tz,
    week_start: Weekday,
}

impl Calendar<Utc> {
    pub fn utc(week_starts_on_monday: bool) -> Self {
        Self::new(Utc, week_starts_on_monday)
    }
}

impl Calendar<Local> {
    pub fn local(week_starts_on_monday: bool) -> Self {
        Self::new(Local, week_starts_on_monday)
    }
}

impl<Tz: TimeZone> Calendar<Tz> {
    pub fn new(tz: Tz, week_starts_on_monday: bool) -> Self {
        let week_start = if week_starts_on_monday {
            Weekday::Mon
        } else {
            Weekday::Sun
        };
        Self { tz, week_start }
    }

    pub fn timezone(&self) -> &Tz {
        &self.tz
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn week_starts_on_monday(&self) -> bool {
        self.week_start == Weekday::Mon
    }

    /// Local calendar date of an instant.
    ///
    /// At the edges of the representable range the zone offset can push the
    /// local time out of bounds; the UTC date is used then.
    pub fn local_date(&self, at: &DateTime<Utc>) -> NaiveDate {
        let utc = at.naive_utc();
        let offset = self.tz.offset_from_utc_datetime(&utc).fix();

        match utc.checked_add_offset(offset) {
            Some(local) => local.date(),
            None => {
                warn!(%at, %offset, "local time out of range, using UTC date");
                utc.date()
            }
        }
    }

    /// First date of the period containing `date`
    pub fn try_align(
        &self,
        date: NaiveDate,
        granularity: Granularity,
    ) -> Result<NaiveDate, CalendarError> {
        let aligned = match granularity {
            Granularity::Day => Some(date),
            Granularity::Week => {
                let offset = days_since_week_start(date.weekday(), self.week_start);
                date.checked_sub_days(Days::new(u64::from(offset)))
            }
            Granularity::Month => date.with_day(1),
            Granularity::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1),
        };

        aligned.ok_or(CalendarError::Alignment { date, granularity })
    }

    /// Like [`Calendar::try_align`], degrading to `date` itself on failure
    pub fn align(&self, date: NaiveDate, granularity: Granularity) -> NaiveDate {
        self.try_align(date, granularity).unwrap_or_else(|err| {
            warn!(%err, "calendar alignment failed, using day start");
            date
        })
    }

    /// Move `date` by `amount` units of `granularity` (negative goes back)
    pub fn try_step(
        &self,
        date: NaiveDate,
        granularity: Granularity,
        amount: i64,
    ) -> Result<NaiveDate, CalendarError> {
        let shifted = match granularity {
            Granularity::Day => shift_days(date, amount),
            Granularity::Week => amount.checked_mul(7).and_then(|days| shift_days(date, days)),
            Granularity::Month => shift_months(date, amount),
            Granularity::Year => amount
                .checked_mul(12)
                .and_then(|months| shift_months(date, months)),
        };

        shifted.ok_or(CalendarError::OutOfRange {
            date,
            granularity,
            amount,
        })
    }

    /// Like [`Calendar::try_step`], degrading to `date` itself on failure
    pub fn step(&self, date: NaiveDate, granularity: Granularity, amount: i64) -> NaiveDate {
        self.try_step(date, granularity, amount).unwrap_or_else(|err| {
            warn!(%err, "calendar step failed, keeping original date");
            date
        })
    }

    /// Local midnight of `date`; the earlier instant when midnight is ambiguous
    pub fn try_start_of_day(&self, date: NaiveDate) -> Result<DateTime<Tz>, CalendarError> {
        date.and_hms_opt(0, 0, 0)
            .and_then(|midnight| self.tz.from_local_datetime(&midnight).earliest())
            .ok_or(CalendarError::NonexistentMidnight(date))
    }

    /// Display timestamp for a bucket starting on `date`.
    ///
    /// Where local midnight is skipped by a DST gap, midnight UTC of the same
    /// date is used instead.
    pub fn bucket_start(&self, date: NaiveDate) -> DateTime<Tz> {
        self.try_start_of_day(date).unwrap_or_else(|err| {
            warn!(%err, "using UTC midnight for bucket start");
            let midnight = date.and_time(chrono::NaiveTime::MIN);
            self.tz.from_utc_datetime(&midnight)
        })
    }

    /// Start of the period containing `at`.
    ///
    /// Falls back to the start of `at`'s own day when alignment fails, and to
    /// `at` itself when that midnight cannot be represented.
    pub fn period_start(&self, at: &DateTime<Utc>, granularity: Granularity) -> DateTime<Tz> {
        let aligned = self.align(self.local_date(at), granularity);
        self.try_start_of_day(aligned).unwrap_or_else(|err| {
            warn!(%err, "falling back to requested instant");
            at.with_timezone(&self.tz)
        })
    }

    pub fn day_start(&self, at: &DateTime<Utc>) -> DateTime<Tz> {
        self.period_start(at, Granularity::Day)
    }

    pub fn week_start_of(&self, at: &DateTime<Utc>) -> DateTime<Tz> {
        self.period_start(at, Granularity::Week)
    }

    pub fn month_start(&self, at: &DateTime<Utc>) -> DateTime<Tz> {
        self.period_start(at, Granularity::Month)
    }

    pub fn year_start(&self, at: &DateTime<Utc>) -> DateTime<Tz> {
        self.period_start(at, Granularity::Year)
    }
}

fn days_since_week_start(day: Weekday, week_start: Weekday) -> u32 {
    (7 + day.num_days_from_monday() - week_start.num_days_from_monday()) % 7
}

fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    }
}

fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    }
}
