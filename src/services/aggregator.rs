use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use std::collections::HashMap;
use tracing::{debug, trace};

use crate::calendar::Calendar;
use crate::models::{Bucket, ChartRange, Event, Granularity, Window};

/// Groups events into calendar-aligned buckets over a trailing window
#[derive(Debug, Clone)]
pub struct TemporalAggregator<Tz: TimeZone> {
    calendar: Calendar<Tz>,
}

impl<Tz: TimeZone> TemporalAggregator<Tz> {
    pub fn new(calendar: Calendar<Tz>) -> Self {
        Self { calendar }
    }

    pub fn calendar(&self) -> &Calendar<Tz> {
        &self.calendar
    }

    /// Aggregate against the current time
    pub fn aggregate(&self, events: &[Event], range: ChartRange) -> Vec<Bucket<Tz>> {
        self.aggregate_at(events, range, Utc::now())
    }

    /// Aggregate `events` into the window ending at the period containing `now`.
    ///
    /// Every bucket in the window is emitted, empty ones with a zero sum.
    /// Events with non-positive values or whose period falls outside the
    /// window are dropped. Near the earliest representable date the window
    /// shrinks to the current period alone (see [`Self::bucket_dates`]).
    pub fn aggregate_at(
        &self,
        events: &[Event],
        window: impl Into<Window>,
        now: DateTime<Utc>,
    ) -> Vec<Bucket<Tz>> {
        let window = window.into();
        let dates = self.bucket_dates(window, &now);
        let (Some(&begin), Some(&end)) = (dates.first(), dates.last()) else {
            return Vec::new();
        };

        let index: HashMap<NaiveDate, usize> = dates
            .iter()
            .enumerate()
            .map(|(idx, date)| (*date, idx))
            .collect();
        let mut sums = vec![0.0; dates.len()];
        let mut dropped = 0usize;

        for event in events.iter().filter(|event| event.counts()) {
            let key = self
                .calendar
                .align(self.calendar.local_date(&event.at), window.granularity);

            if key < begin || key > end {
                trace!(at = %event.at, value = event.value, "event outside window");
                dropped += 1;
                continue;
            }

            match index.get(&key) {
                Some(&idx) => sums[idx] += event.value,
                None => dropped += 1,
            }
        }

        debug!(
            granularity = %window.granularity,
            buckets = dates.len(),
            events = events.len(),
            dropped,
            "aggregated events"
        );

        let mut running = 0.0;
        dates
            .into_iter()
            .zip(sums)
            .map(|(date, sum)| {
                running += sum;
                Bucket {
                    start: self.calendar.bucket_start(date),
                    sum,
                    cumulative_sum: running,
                }
            })
            .collect()
    }

    /// Start dates of every bucket in the window, oldest first.
    ///
    /// The last entry is the start of the current period. When the window
    /// start lies before the earliest representable date, stepping back fails
    /// and only the current period is returned.
    pub fn bucket_dates(&self, window: Window, now: &DateTime<Utc>) -> Vec<NaiveDate> {
        let granularity = window.granularity;
        let count = window.bucket_count.max(1) as usize;

        let end = self.current_period(granularity, now);
        let begin = self.calendar.step(end, granularity, 1 - count as i64);

        let mut dates = Vec::with_capacity(count);
        let mut cursor = begin;
        while dates.len() < count && cursor <= end {
            dates.push(cursor);
            let next = self.calendar.step(cursor, granularity, 1);
            if next <= cursor {
                break;
            }
            cursor = next;
        }

        dates
    }

    /// Start date of the period containing `now`
    pub fn current_period(&self, granularity: Granularity, now: &DateTime<Utc>) -> NaiveDate {
        self.calendar.align(self.calendar.local_date(now), granularity)
    }
}

/// Bucket `events` for `range` in the local time zone, ending at today.
pub fn aggregate(
    events: &[Event],
    range: ChartRange,
    week_starts_on_monday: bool,
) -> Vec<Bucket<Local>> {
    TemporalAggregator::new(Calendar::local(week_starts_on_monday)).aggregate(events, range)
}
