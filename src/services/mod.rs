// Aggregation and load services

pub mod aggregator;
pub mod cache;
pub mod training_summary;
pub mod weekly_load;

pub use aggregator::{aggregate, TemporalAggregator};
pub use cache::AggregationCache;
pub use training_summary::{
    bucket_label, cumulative_points, ChartPoint, LoadDelta, TrainingSummary, TrendDirection,
};
pub use weekly_load::{
    week_over_week_delta_percent, SessionLoadCalculator, WeeklyLoad, WeeklyLoadCalculator,
};
