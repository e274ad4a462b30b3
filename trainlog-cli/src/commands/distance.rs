use anyhow::Result;
use chrono::TimeZone;
use clap::Args;
use trainlog::{distance_events, Calendar, ChartRange, TemporalAggregator};

use super::AppContext;
use crate::render;

#[derive(Args)]
pub struct DistanceCommand {
    /// Chart range: days, weeks, months or years
    #[arg(short, long)]
    range: Option<ChartRange>,

    /// Start weeks on Monday instead of Sunday
    #[arg(long)]
    monday: bool,
}

impl DistanceCommand {
    pub fn execute(self, ctx: &AppContext) -> Result<()> {
        let monday = ctx.week_starts_on_monday(self.monday);

        let output = if ctx.config.calendar.utc {
            self.render(ctx, Calendar::utc(monday))
        } else {
            self.render(ctx, Calendar::local(monday))
        };

        print!("{}", output);
        Ok(())
    }

    fn render<Tz: TimeZone>(&self, ctx: &AppContext, calendar: Calendar<Tz>) -> String {
        let range = self.range.unwrap_or(ctx.config.chart.default_range);
        let monday = calendar.week_starts_on_monday();

        let aggregator = TemporalAggregator::new(calendar);
        let buckets = aggregator.aggregate(&distance_events(&ctx.sessions), range);

        render::distance_table(&buckets, range, monday)
    }
}
