// Domain models for sessions, events and buckets

pub mod bucket;
pub mod event;
pub mod range;
pub mod workout;

pub use bucket::Bucket;
pub use event::Event;
pub use range::{ChartRange, Granularity, ParseRangeError, Window};
pub use workout::{distance_events, LiftSet, LiftingRecord, RunRecord, WorkoutSession};
