use anyhow::Result;
use chrono::{TimeZone, Utc};
use clap::Args;
use trainlog::{Calendar, ChartRange, TrainingSummary};

use super::AppContext;
use crate::render;

#[derive(Args)]
pub struct SummaryCommand {
    /// Chart range: days, weeks, months or years
    #[arg(short, long)]
    range: Option<ChartRange>,

    /// Start weeks on Monday instead of Sunday
    #[arg(long)]
    monday: bool,
}

impl SummaryCommand {
    pub fn execute(self, ctx: &AppContext) -> Result<()> {
        let monday = ctx.week_starts_on_monday(self.monday);

        let output = if ctx.config.calendar.utc {
            self.render(ctx, &Calendar::utc(monday))
        } else {
            self.render(ctx, &Calendar::local(monday))
        };

        print!("{}", output);
        Ok(())
    }

    fn render<Tz: TimeZone>(&self, ctx: &AppContext, calendar: &Calendar<Tz>) -> String {
        let range = self.range.unwrap_or(ctx.config.chart.default_range);
        let summary = TrainingSummary::build(
            &ctx.sessions,
            calendar,
            range,
            ctx.config.load,
            Utc::now(),
        );

        render::summary_report(&summary)
    }
}
