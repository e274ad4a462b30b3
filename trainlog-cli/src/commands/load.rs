use anyhow::Result;
use chrono::{NaiveDate, TimeZone, Utc};
use clap::Args;
use trainlog::{Calendar, LoadDelta, SessionLoadCalculator, WeeklyLoadCalculator};

use super::AppContext;
use crate::render;

#[derive(Args)]
pub struct LoadCommand {
    /// Any date inside the week to report (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Start weeks on Monday instead of Sunday
    #[arg(long)]
    monday: bool,
}

impl LoadCommand {
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
        let reference = self
            .date
            .unwrap_or_else(|| calendar.local_date(&Utc::now()));

        let calculator = SessionLoadCalculator::new(&ctx.sessions, calendar, ctx.config.load);
        let this_week = calculator.weekly_load(reference);
        let last_week = calculator.previous_week_load(reference);
        let delta = calculator
            .week_over_week_delta_percent(&this_week, &last_week)
            .map(LoadDelta::new);

        render::load_report(&this_week, &last_week, delta)
    }
}
