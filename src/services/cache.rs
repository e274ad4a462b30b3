use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::collections::HashMap;
use tracing::debug;

use crate::calendar::Calendar;
use crate::models::{Bucket, ChartRange, Event};

use super::TemporalAggregator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    range: ChartRange,
    week_starts_on_monday: bool,
    data_version: u64,
    period: NaiveDate,
}

/// Memoizes aggregator output per range, week-start convention, data version
/// and current period.
///
/// The caller bumps `data_version` whenever its session snapshot changes.
/// Entries for older versions are discarded on the first miss at a new one.
#[derive(Debug)]
pub struct AggregationCache<Tz: TimeZone> {
    aggregator: TemporalAggregator<Tz>,
    entries: HashMap<CacheKey, Vec<Bucket<Tz>>>,
    hits: u64,
    misses: u64,
}

impl<Tz: TimeZone> AggregationCache<Tz> {
    pub fn new(calendar: Calendar<Tz>) -> Self {
        Self {
            aggregator: TemporalAggregator::new(calendar),
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn calendar(&self) -> &Calendar<Tz> {
        self.aggregator.calendar()
    }

    /// Swap the calendar; entries for the previous week-start convention
    /// stay valid for when it is switched back.
    pub fn set_calendar(&mut self, calendar: Calendar<Tz>) {
        self.aggregator = TemporalAggregator::new(calendar);
    }

    pub fn buckets(
        &mut self,
        events: &[Event],
        data_version: u64,
        range: ChartRange,
    ) -> &[Bucket<Tz>] {
        self.buckets_at(events, data_version, range, Utc::now())
    }

    /// Buckets for `range` ending at the period containing `now`
    pub fn buckets_at(
        &mut self,
        events: &[Event],
        data_version: u64,
        range: ChartRange,
        now: DateTime<Utc>,
    ) -> &[Bucket<Tz>] {
        let key = CacheKey {
            range,
            week_starts_on_monday: self.aggregator.calendar().week_starts_on_monday(),
            data_version,
            period: self.aggregator.current_period(range.granularity(), &now),
        };

        if self.entries.contains_key(&key) {
            self.hits += 1;
            debug!(%range, data_version, "aggregation cache hit");
        } else {
            self.misses += 1;
            debug!(%range, data_version, "aggregation cache miss");
            self.entries.retain(|cached, _| cached.data_version == data_version);
            let buckets = self.aggregator.aggregate_at(events, range, now);
            self.entries.insert(key, buckets);
        }

        &self.entries[&key]
    }

    pub fn invalidate(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
