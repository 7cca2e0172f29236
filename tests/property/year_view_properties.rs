// Property-based tests for the year view
// Checks grid shape, enablement, sentinels and the day-overflow rule with random inputs

#[path = "../fixtures/mod.rs"]
mod fixtures;

use calendar_year_view::services::year_view::{
    compute_selected_months, is_month_enabled, month_in_displayed_year, Constraints,
};
use calendar_year_view::utils::date::days_in_month;
use calendar_year_view::{ChronoAdapter, DateTimeAdapter, SelectMode, SelectedMonth};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use fixtures::dates;
use proptest::prelude::*;
use std::rc::Rc;

fn date_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (1990..2060i32, 1..=12u32, 1..=31u32, 0..24u32, 0..60u32).prop_map(|(y, m, d, h, mi)| {
        let day = d.min(days_in_month(y, m));
        NaiveDate::from_ymd_opt(y, m, day)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    })
}

/// Brute-force reference: does any day of the month pass?
fn any_day_passes(
    year: i32,
    month0: u32,
    min: Option<NaiveDateTime>,
    max: Option<NaiveDateTime>,
    modulus: u32,
) -> bool {
    (1..=days_in_month(year, month0 + 1)).any(|day| {
        let date = dates::ymd(year, month0 + 1, day);
        date.ordinal() % modulus == 0
            && min.map_or(true, |min| date >= min)
            && max.map_or(true, |max| date <= max)
    })
}

proptest! {
    /// Property: every month appears exactly once, at row m/3, column m%3
    #[test]
    fn prop_grid_is_row_major(moment in date_strategy()) {
        let view = fixtures::initiated_view_at(moment);
        let rows = view.months().rows();
        prop_assert_eq!(rows.len(), 4);
        for month in 0..12u32 {
            let cell = &rows[(month / 3) as usize][(month % 3) as usize];
            prop_assert_eq!(cell.value, month);
        }
    }

    /// Property: enablement matches a brute-force scan of the month
    #[test]
    fn prop_enablement_matches_day_scan(
        moment in date_strategy(),
        min in proptest::option::of(date_strategy()),
        max in proptest::option::of(date_strategy()),
        modulus in 1..40u32,
        month in 0..12u32,
    ) {
        let adapter = ChronoAdapter::default();
        let constraints = Constraints {
            filter: Some(Rc::new(move |d: &NaiveDateTime| d.ordinal() % modulus == 0)),
            min_date: min,
            max_date: max,
        };
        let enabled = is_month_enabled(&adapter, month, &moment, &constraints).unwrap();
        prop_assert_eq!(enabled, any_day_passes(moment.year(), month, min, max, modulus));
    }

    /// Property: the sentinel law relative to the displayed year
    #[test]
    fn prop_month_in_displayed_year_sentinels(
        moment in date_strategy(),
        candidate in date_strategy(),
    ) {
        let adapter = ChronoAdapter::default();
        let result = month_in_displayed_year(&adapter, Some(&candidate), Some(&moment));
        let expected = match candidate.year().cmp(&moment.year()) {
            std::cmp::Ordering::Less => SelectedMonth::BeforeYear,
            std::cmp::Ordering::Greater => SelectedMonth::AfterYear,
            std::cmp::Ordering::Equal => SelectedMonth::InYear(candidate.month0()),
        };
        prop_assert_eq!(result, Some(expected));
    }

    /// Property: computing the selected months twice gives the same answer
    #[test]
    fn prop_selected_months_idempotent(
        moment in date_strategy(),
        from in proptest::option::of(date_strategy()),
        to in proptest::option::of(date_strategy()),
        range in any::<bool>(),
    ) {
        let adapter = ChronoAdapter::default();
        let mode = if range { SelectMode::Range } else { SelectMode::Single };
        let selecteds = [from, to];
        let first = compute_selected_months(&adapter, mode, from.as_ref(), &selecteds, Some(&moment));
        let second = compute_selected_months(&adapter, mode, from.as_ref(), &selecteds, Some(&moment));
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), if range { 2 } else { usize::from(from.is_some()) });
    }

    /// Property: a picked month keeps the day unless the month is shorter
    #[test]
    fn prop_select_month_day_overflow(moment in date_strategy(), month in 0..12u32) {
        let mut view = fixtures::view_at(moment);
        let picked = view.select_month(month).unwrap().unwrap();
        let adapter = view.adapter();

        prop_assert_eq!(adapter.year(&picked), moment.year());
        prop_assert_eq!(adapter.month(&picked), month);
        prop_assert_eq!(picked.day(), moment.day().min(days_in_month(moment.year(), month + 1)));
        prop_assert_eq!(picked.time(), moment.time());
    }
}
