// Plain-text rendering of computed summaries

use chrono::TimeZone;
use colored::Colorize;
use std::fmt::Write;
use trainlog::services::bucket_label;
use trainlog::{Bucket, ChartRange, LoadDelta, TrainingSummary, TrendDirection, WeeklyLoad};

const RULE: &str = "────────────────────────────────";

/// Bucket table: start label, per-bucket distance and running total
pub fn distance_table<Tz: TimeZone>(
    buckets: &[Bucket<Tz>],
    range: ChartRange,
    week_starts_on_monday: bool,
) -> String {
    let mut out = String::new();
    let week_note = if week_starts_on_monday { "Monday" } else { "Sunday" };

    let _ = writeln!(out, "Cumulative Distance ({range}, weeks start {week_note})");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{:<10} {:>10} {:>12}", "Period", "Miles", "Cumulative");

    for bucket in buckets {
        let _ = writeln!(
            out,
            "{:<10} {:>10.2} {:>12.2}",
            bucket_label(bucket.start_date(), range.granularity()),
            bucket.sum,
            bucket.cumulative_sum
        );
    }

    let total = buckets.last().map_or(0.0, |bucket| bucket.cumulative_sum);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Total: {total:.2} mi");
    out
}

/// Weekly load card with last week's total and the change between them
pub fn load_report(
    this_week: &WeeklyLoad,
    last_week: &WeeklyLoad,
    delta: Option<LoadDelta>,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Weekly Load (week of {})", this_week.week_start.format("%b %-d"));
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Total load:    {:>8.1}", this_week.total_load);
    let _ = writeln!(out, "Running load:  {:>8.1}", this_week.running_load);
    let _ = writeln!(out, "Lifting load:  {:>8.1}", this_week.lifting_load);
    let _ = writeln!(out, "Sessions:      {:>8}", this_week.session_count);
    let _ = writeln!(out, "Last week:     {:>8.1}", last_week.total_load);
    let _ = writeln!(out, "Change:        {}", delta_label(delta));
    out
}

pub fn delta_label(delta: Option<LoadDelta>) -> String {
    let Some(delta) = delta else {
        return "n/a".dimmed().to_string();
    };

    let text = format!("{} {}", delta.direction.arrow(), delta.label());
    match delta.direction {
        TrendDirection::Increase => text.green().to_string(),
        TrendDirection::Decrease => text.red().to_string(),
        TrendDirection::Flat => text.yellow().to_string(),
    }
}

/// Load card followed by the cumulative chart series
pub fn summary_report(summary: &TrainingSummary) -> String {
    let mut out = load_report(&summary.this_week, &summary.last_week, summary.delta);

    let _ = writeln!(out);
    let _ = writeln!(out, "Distance ({})", summary.range);
    let _ = writeln!(out, "{RULE}");
    for point in &summary.distance {
        let _ = writeln!(out, "{:<10} {:>12.2}", point.label, point.value);
    }
    let _ = writeln!(out, "Total: {:.2} mi", summary.total_distance);
    out
}
