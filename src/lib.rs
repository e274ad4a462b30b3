// Library exports for trainlog
// Calendar-aligned distance buckets and weekly training load

pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use calendar::Calendar;
pub use config::LoadSettings;
pub use error::CalendarError;
pub use models::{
    distance_events, Bucket, ChartRange, Event, Granularity, LiftSet, LiftingRecord, RunRecord,
    Window, WorkoutSession,
};
pub use services::{
    aggregate, week_over_week_delta_percent, AggregationCache, ChartPoint, LoadDelta,
    SessionLoadCalculator, TemporalAggregator, TrainingSummary, TrendDirection, WeeklyLoad,
    WeeklyLoadCalculator,
};
