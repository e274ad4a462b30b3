use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::calendar::Calendar;
use crate::config::LoadSettings;
use crate::models::{distance_events, Bucket, ChartRange, Granularity, WorkoutSession};

use super::{SessionLoadCalculator, TemporalAggregator, WeeklyLoad, WeeklyLoadCalculator};

/// Direction of the week-over-week load change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Increase,
    Decrease,
    Flat,
}

impl TrendDirection {
    /// Flat when the change rounds to 0%
    pub fn from_percent(percent: f64) -> Self {
        let rounded = percent.round();
        if rounded > 0.0 {
            TrendDirection::Increase
        } else if rounded < 0.0 {
            TrendDirection::Decrease
        } else {
            TrendDirection::Flat
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            TrendDirection::Increase => "↑",
            TrendDirection::Decrease => "↓",
            TrendDirection::Flat => "→",
        }
    }
}

/// Week-over-week change ready for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadDelta {
    pub percent: f64,
    pub direction: TrendDirection,
}

impl LoadDelta {
    pub fn new(percent: f64) -> Self {
        Self {
            percent,
            direction: TrendDirection::from_percent(percent),
        }
    }

    pub fn rounded(&self) -> i64 {
        self.percent.round() as i64
    }

    /// "+12%", "-8%" or "0%"
    pub fn label(&self) -> String {
        match self.direction {
            TrendDirection::Increase => format!("+{}%", self.rounded()),
            TrendDirection::Decrease => format!("{}%", self.rounded()),
            TrendDirection::Flat => "0%".to_string(),
        }
    }
}

/// One labelled point of a chart series
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// Short axis label for a bucket starting on `date`
pub fn bucket_label(date: NaiveDate, granularity: Granularity) -> String {
    let pattern = match granularity {
        Granularity::Day | Granularity::Week => "%b %-d",
        Granularity::Month => "%b %Y",
        Granularity::Year => "%Y",
    };
    date.format(pattern).to_string()
}

/// Cumulative series for a distance chart
pub fn cumulative_points<Tz: TimeZone>(
    buckets: &[Bucket<Tz>],
    granularity: Granularity,
) -> Vec<ChartPoint> {
    buckets
        .iter()
        .map(|bucket| ChartPoint {
            label: bucket_label(bucket.start_date(), granularity),
            value: bucket.cumulative_sum,
        })
        .collect()
}

/// Everything the training overview shows, computed from one snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSummary {
    pub this_week: WeeklyLoad,
    pub last_week: WeeklyLoad,
    pub delta: Option<LoadDelta>,
    pub range: ChartRange,
    pub distance: Vec<ChartPoint>,
    pub total_distance: f64,
}

impl TrainingSummary {
    pub fn build<Tz: TimeZone>(
        sessions: &[WorkoutSession],
        calendar: &Calendar<Tz>,
        range: ChartRange,
        settings: LoadSettings,
        now: DateTime<Utc>,
    ) -> Self {
        let today = calendar.local_date(&now);

        let calculator = SessionLoadCalculator::new(sessions, calendar.clone(), settings);
        let this_week = calculator.weekly_load(today);
        let last_week = calculator.previous_week_load(today);
        let delta = calculator
            .week_over_week_delta_percent(&this_week, &last_week)
            .map(LoadDelta::new);

        let aggregator = TemporalAggregator::new(calendar.clone());
        let buckets = aggregator.aggregate_at(&distance_events(sessions), range, now);
        let total_distance = buckets.last().map_or(0.0, |bucket| bucket.cumulative_sum);

        Self {
            this_week,
            last_week,
            delta,
            range,
            distance: cumulative_points(&buckets, range.granularity()),
            total_distance,
        }
    }
}
