use chrono::{NaiveDate, TimeZone};

use crate::calendar::Calendar;
use crate::config::LoadSettings;
use crate::models::{Granularity, WorkoutSession};

/// Load totals for one calendar week
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyLoad {
    pub total_load: f64,
    pub lifting_load: f64,
    pub running_load: f64,
    pub session_count: usize,
    pub week_start: NaiveDate,
}

impl WeeklyLoad {
    pub fn empty(week_start: NaiveDate) -> Self {
        Self {
            total_load: 0.0,
            lifting_load: 0.0,
            running_load: 0.0,
            session_count: 0,
            week_start,
        }
    }
}

/// Source of per-week training load numbers
pub trait WeeklyLoadCalculator {
    /// Load for the week containing `reference_date`
    fn weekly_load(&self, reference_date: NaiveDate) -> WeeklyLoad;

    /// Load for the week before the one containing `reference_date`
    fn previous_week_load(&self, reference_date: NaiveDate) -> WeeklyLoad {
        let last_week = reference_date
            .checked_sub_days(chrono::Days::new(7))
            .unwrap_or(reference_date);
        self.weekly_load(last_week)
    }

    fn week_over_week_delta_percent(
        &self,
        this_week: &WeeklyLoad,
        last_week: &WeeklyLoad,
    ) -> Option<f64> {
        week_over_week_delta_percent(this_week, last_week)
    }
}

/// Percentage change from `last_week` to `this_week`, sign preserved.
///
/// `None` when neither week has any sessions, even if older history exists;
/// the two weeks compared are the only input. When last week's load is zero
/// the change is reported as 0% (both zero) or +100% (this week positive).
pub fn week_over_week_delta_percent(this_week: &WeeklyLoad, last_week: &WeeklyLoad) -> Option<f64> {
    if this_week.session_count == 0 && last_week.session_count == 0 {
        return None;
    }

    let current = this_week.total_load;
    let previous = last_week.total_load;

    if previous <= 0.0 {
        return Some(if current > 0.0 { 100.0 } else { 0.0 });
    }

    Some((current - previous) / previous * 100.0)
}

/// Computes weekly load directly from a session snapshot
#[derive(Debug, Clone)]
pub struct SessionLoadCalculator<'a, Tz: TimeZone> {
    sessions: &'a [WorkoutSession],
    calendar: Calendar<Tz>,
    settings: LoadSettings,
}

impl<'a, Tz: TimeZone> SessionLoadCalculator<'a, Tz> {
    pub fn new(
        sessions: &'a [WorkoutSession],
        calendar: Calendar<Tz>,
        settings: LoadSettings,
    ) -> Self {
        Self {
            sessions,
            calendar,
            settings,
        }
    }

    pub fn settings(&self) -> &LoadSettings {
        &self.settings
    }
}

impl<Tz: TimeZone> WeeklyLoadCalculator for SessionLoadCalculator<'_, Tz> {
    fn weekly_load(&self, reference_date: NaiveDate) -> WeeklyLoad {
        let week_start = self.calendar.align(reference_date, Granularity::Week);
        let mut load = WeeklyLoad::empty(week_start);

        for session in self.sessions {
            let session_week = self
                .calendar
                .align(self.calendar.local_date(&session.completed_at), Granularity::Week);
            if session_week != week_start {
                continue;
            }

            load.session_count += 1;
            load.running_load += self.settings.running_load(session);
            load.lifting_load += self.settings.lifting_load(session);
        }

        load.total_load = load.running_load + load.lifting_load;

        tracing::debug!(
            week_start = %week_start,
            sessions = load.session_count,
            total = load.total_load,
            "computed weekly load"
        );

        load
    }
}
