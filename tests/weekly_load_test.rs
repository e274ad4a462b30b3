use chrono::{Duration, NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;
use trainlog::{
    week_over_week_delta_percent, Calendar, ChartRange, LiftSet, LoadSettings,
    SessionLoadCalculator, TrainingSummary, TrendDirection, WeeklyLoad, WeeklyLoadCalculator,
    WorkoutSession,
};

fn week(total: f64, sessions: usize) -> WeeklyLoad {
    WeeklyLoad {
        total_load: total,
        lifting_load: 0.0,
        running_load: total,
        session_count: sessions,
        week_start: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
    }
}

#[test]
fn test_delta_is_absent_without_any_sessions() {
    assert_eq!(week_over_week_delta_percent(&week(0.0, 0), &week(0.0, 0)), None);
}

#[test]
fn test_delta_is_zero_for_equal_weeks() {
    assert_eq!(week_over_week_delta_percent(&week(80.0, 4), &week(80.0, 3)), Some(0.0));
}

#[test]
fn test_delta_is_negative_when_load_drops() {
    let delta = week_over_week_delta_percent(&week(60.0, 2), &week(80.0, 3)).unwrap();
    assert!(delta < 0.0);
    assert_eq!(delta, -25.0);
}

#[test]
fn test_monday_weeks_with_mixed_sessions() {
    // Monday Oct 19 2026 opens the current Monday-start week
    let now = Utc.with_ymd_and_hms(2026, 10, 22, 20, 0, 0).unwrap();
    let sessions = vec![
        WorkoutSession::new(Utc.with_ymd_and_hms(2026, 10, 19, 6, 0, 0).unwrap()).with_run(3.0),
        WorkoutSession::new(Utc.with_ymd_and_hms(2026, 10, 20, 18, 0, 0).unwrap())
            .with_lifting(vec![
                LiftSet {
                    reps: 5,
                    weight_lbs: 200.0,
                },
                LiftSet {
                    reps: 5,
                    weight_lbs: 200.0,
                },
            ]),
        // Sunday belongs to the previous Monday-start week
        WorkoutSession::new(Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap()).with_run(8.0),
    ];
    let calculator =
        SessionLoadCalculator::new(&sessions, Calendar::utc(true), LoadSettings::default());

    let this_week = calculator.weekly_load(now.date_naive());
    assert_eq!(
        this_week,
        WeeklyLoad {
            total_load: 50.0,
            lifting_load: 20.0,
            running_load: 30.0,
            session_count: 2,
            week_start: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        }
    );

    let last_week = calculator.previous_week_load(now.date_naive());
    assert_eq!(last_week.week_start, NaiveDate::from_ymd_opt(2026, 10, 12).unwrap());
    assert_eq!(last_week.total_load, 80.0);

    let delta = calculator.week_over_week_delta_percent(&this_week, &last_week);
    assert_eq!(delta, Some(-37.5));
}

#[test]
fn test_summary_classifies_trend() {
    let now = Utc.with_ymd_and_hms(2026, 10, 22, 20, 0, 0).unwrap();
    let settings = LoadSettings {
        running_load_per_mile: 1.0,
        ..LoadSettings::default()
    };

    let cases = [
        (10.0, 8.0, TrendDirection::Increase),
        (8.0, 10.0, TrendDirection::Decrease),
        (200.1, 200.0, TrendDirection::Flat),
    ];

    for (this_miles, last_miles, expected) in cases {
        let sessions = vec![
            WorkoutSession::new(now).with_run(this_miles),
            WorkoutSession::new(now - Duration::days(7)).with_run(last_miles),
        ];
        let summary = TrainingSummary::build(
            &sessions,
            &Calendar::utc(false),
            ChartRange::Months,
            settings,
            now,
        );

        assert_eq!(summary.delta.map(|d| d.direction), Some(expected));
    }
}
