use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use trainlog::{Calendar, ChartRange, Event, Granularity, TemporalAggregator, Window};

fn fixed_now() -> DateTime<Utc> {
    // Monday
    Utc.with_ymd_and_hms(2026, 10, 19, 15, 30, 0).unwrap()
}

fn utc_aggregator(week_starts_on_monday: bool) -> TemporalAggregator<Utc> {
    TemporalAggregator::new(Calendar::utc(week_starts_on_monday))
}

#[test]
fn test_thirty_day_example() {
    let now = fixed_now();
    let events = vec![
        Event::new(now, 5.0),
        Event::new(now - Duration::days(1), 3.0),
        Event::new(now - Duration::days(40), 100.0),
    ];

    let buckets = utc_aggregator(false).aggregate_at(&events, ChartRange::Days, now);

    assert_eq!(buckets.len(), 30);
    assert_eq!(buckets[29].sum, 5.0);
    assert_eq!(buckets[28].sum, 3.0);
    assert_eq!(buckets[29].cumulative_sum, 8.0);
    assert_eq!(buckets[0].start_date(), NaiveDate::from_ymd_opt(2026, 9, 20).unwrap());
}

#[test]
fn test_non_positive_values_never_contribute() {
    let now = fixed_now();
    let events = vec![
        Event::new(now, 0.0),
        Event::new(now, -4.0),
        Event::new(now, f64::NAN),
        Event::new(now - Duration::days(2), 1.5),
    ];

    let buckets = utc_aggregator(false).aggregate_at(&events, ChartRange::Days, now);

    assert_eq!(buckets[29].sum, 0.0);
    assert_eq!(buckets[27].sum, 1.5);
    assert_eq!(buckets[29].cumulative_sum, 1.5);
}

#[test]
fn test_events_outside_window_are_dropped() {
    let now = fixed_now();
    // 12 Sunday-start weeks ending Oct 18 begin on Aug 2
    let events = vec![
        Event::new(Utc.with_ymd_and_hms(2026, 8, 1, 23, 0, 0).unwrap(), 50.0),
        Event::new(Utc.with_ymd_and_hms(2026, 8, 2, 0, 0, 0).unwrap(), 7.0),
    ];

    let buckets = utc_aggregator(false).aggregate_at(&events, ChartRange::Weeks, now);

    assert_eq!(buckets[0].start_date(), NaiveDate::from_ymd_opt(2026, 8, 2).unwrap());
    assert_eq!(buckets[0].sum, 7.0);
    assert_eq!(buckets.last().unwrap().cumulative_sum, 7.0);
}

#[test]
fn test_week_start_shifts_boundaries() {
    let now = fixed_now();
    let sunday = utc_aggregator(false).bucket_dates(ChartRange::Weeks.window(), &now);
    let monday = utc_aggregator(true).bucket_dates(ChartRange::Weeks.window(), &now);

    assert_eq!(sunday.len(), monday.len());
    assert_eq!(sunday.last(), NaiveDate::from_ymd_opt(2026, 10, 18).as_ref());
    assert_eq!(monday.last(), NaiveDate::from_ymd_opt(2026, 10, 19).as_ref());
    for (s, m) in sunday.iter().zip(&monday) {
        assert_eq!((*m - *s).num_days(), 1);
    }
}

#[test]
fn test_week_start_on_sunday_moves_monday_weeks_back() {
    // On a Sunday, Monday-start weeks began six days earlier
    let sunday_now = Utc.with_ymd_and_hms(2026, 10, 18, 10, 0, 0).unwrap();
    let sunday = utc_aggregator(false).bucket_dates(ChartRange::Weeks.window(), &sunday_now);
    let monday = utc_aggregator(true).bucket_dates(ChartRange::Weeks.window(), &sunday_now);

    for (s, m) in sunday.iter().zip(&monday) {
        assert_eq!((*m - *s).num_days(), -6);
    }
}

#[test]
fn test_month_buckets_follow_calendar_months() {
    let now = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
    let events = vec![
        Event::new(Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap(), 2.0),
        Event::new(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(), 3.0),
    ];

    let buckets = utc_aggregator(false).aggregate_at(&events, ChartRange::Months, now);
    let starts: Vec<NaiveDate> = buckets.iter().map(|b| b.start_date()).collect();

    assert_eq!(starts.first(), NaiveDate::from_ymd_opt(2023, 4, 1).as_ref());
    assert_eq!(starts.last(), NaiveDate::from_ymd_opt(2024, 3, 1).as_ref());
    assert_eq!(buckets[10].sum, 2.0);
    assert_eq!(buckets[11].sum, 3.0);
}

#[test]
fn test_local_time_zone_decides_the_day() {
    // 03:00 UTC on Oct 19 is Oct 18 evening in UTC-7
    let offset = FixedOffset::west_opt(7 * 3600).unwrap();
    let aggregator = TemporalAggregator::new(Calendar::new(offset, false));
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 3, 0, 0).unwrap();
    let events = vec![Event::new(now, 4.0)];

    let buckets = aggregator.aggregate_at(&events, ChartRange::Days, now);
    let last = buckets.last().unwrap();

    assert_eq!(last.start_date(), NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
    assert_eq!(last.start, offset.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap());
    assert_eq!(last.sum, 4.0);
}

#[test]
fn test_custom_window_sizes() {
    let window = Window::new(Granularity::Week, 3);
    let buckets = utc_aggregator(true).aggregate_at(&[], window, fixed_now());
    let starts: Vec<NaiveDate> = buckets.iter().map(|b| b.start_date()).collect();

    assert_eq!(
        starts,
        vec![
            NaiveDate::from_ymd_opt(2026, 10, 5).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 12).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        ]
    );
}

#[test]
fn test_extreme_instants_with_offsets_do_not_panic() {
    let west = FixedOffset::west_opt(5 * 3600).unwrap();
    let east = FixedOffset::east_opt(5 * 3600).unwrap();

    for range in ChartRange::ALL {
        for offset in [west, east] {
            for monday in [false, true] {
                let aggregator = TemporalAggregator::new(Calendar::new(offset, monday));

                // Nothing fits before the earliest date: the current period only
                let min = DateTime::<Utc>::MIN_UTC;
                let earliest = aggregator.aggregate_at(&[Event::new(min, 1.0)], range, min);
                assert!(!earliest.is_empty());
                assert_eq!(earliest.last().unwrap().cumulative_sum, 1.0);

                let max = DateTime::<Utc>::MAX_UTC;
                let latest = aggregator.aggregate_at(&[Event::new(max, 1.0)], range, max);
                assert_eq!(latest.len(), range.bucket_count() as usize);
                assert_eq!(
                    latest.last().unwrap().start_date(),
                    calendar_period(offset, monday, range)
                );
                assert_eq!(latest.last().unwrap().cumulative_sum, 1.0);
            }
        }
    }
}

fn calendar_period(offset: FixedOffset, monday: bool, range: ChartRange) -> NaiveDate {
    Calendar::new(offset, monday).align(NaiveDate::MAX, range.granularity())
}

fn range_strategy() -> impl Strategy<Value = ChartRange> {
    prop_oneof![
        Just(ChartRange::Days),
        Just(ChartRange::Weeks),
        Just(ChartRange::Months),
        Just(ChartRange::Years),
    ]
}

fn events_strategy() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((0i64..3000 * 24, -20.0f64..60.0), 0..60).prop_map(|raw| {
        raw.into_iter()
            .map(|(hours_back, value)| Event::new(fixed_now() - Duration::hours(hours_back), value))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_buckets_are_contiguous(
        range in range_strategy(),
        monday in any::<bool>(),
        events in events_strategy(),
    ) {
        let calendar = Calendar::utc(monday);
        let aggregator = TemporalAggregator::new(calendar.clone());
        let buckets = aggregator.aggregate_at(&events, range, fixed_now());

        prop_assert_eq!(buckets.len(), range.bucket_count() as usize);
        for pair in buckets.windows(2) {
            prop_assert!(pair[0].start < pair[1].start);
            prop_assert_eq!(
                calendar.step(pair[0].start_date(), range.granularity(), 1),
                pair[1].start_date()
            );
        }
        prop_assert_eq!(
            buckets.last().unwrap().start_date(),
            calendar.align(fixed_now().date_naive(), range.granularity())
        );
    }

    #[test]
    fn prop_cumulative_sums_match_in_window_total(
        range in range_strategy(),
        monday in any::<bool>(),
        events in events_strategy(),
    ) {
        let calendar = Calendar::utc(monday);
        let aggregator = TemporalAggregator::new(calendar.clone());
        let buckets = aggregator.aggregate_at(&events, range, fixed_now());

        let per_bucket: f64 = buckets.iter().map(|b| b.sum).sum();
        let last = buckets.last().unwrap().cumulative_sum;
        prop_assert!((last - per_bucket).abs() < 1e-6);

        for pair in buckets.windows(2) {
            prop_assert!(pair[1].cumulative_sum >= pair[0].cumulative_sum);
        }

        let begin = buckets.first().unwrap().start_date();
        let expected: f64 = events
            .iter()
            .filter(|e| e.value > 0.0)
            .filter(|e| calendar.align(e.at.date_naive(), range.granularity()) >= begin)
            .map(|e| e.value)
            .sum();
        prop_assert!((last - expected).abs() < 1e-6);
    }
}
