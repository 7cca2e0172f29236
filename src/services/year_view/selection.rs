use crate::models::select_mode::SelectMode;
use crate::models::selected_month::SelectedMonth;
use crate::services::adapter::DateTimeAdapter;
use std::cmp::Ordering;

/// Locate `date` relative to the picker moment's year.
///
/// `None` when either date is missing or invalid.
pub fn month_in_displayed_year<A>(
    adapter: &A,
    date: Option<&A::Date>,
    picker_moment: Option<&A::Date>,
) -> Option<SelectedMonth>
where
    A: DateTimeAdapter + ?Sized,
{
    let date = date.filter(|d| adapter.is_valid(d))?;
    let moment = picker_moment.filter(|d| adapter.is_valid(d))?;

    Some(match adapter.compare_year(date, moment) {
        Ordering::Less => SelectedMonth::BeforeYear,
        Ordering::Greater => SelectedMonth::AfterYear,
        Ordering::Equal => SelectedMonth::InYear(adapter.month(date)),
    })
}

/// Selected-months index for the current selection.
///
/// Single mode yields zero or one entry. Range-like modes always yield two
/// entries (from, to), even when a side is unset.
pub fn compute_selected_months<A>(
    adapter: &A,
    mode: SelectMode,
    selected: Option<&A::Date>,
    selecteds: &[Option<A::Date>],
    picker_moment: Option<&A::Date>,
) -> Vec<Option<SelectedMonth>>
where
    A: DateTimeAdapter + ?Sized,
{
    if mode.is_range() {
        let from = selecteds.first().and_then(Option::as_ref);
        let to = selecteds.get(1).and_then(Option::as_ref);
        return vec![
            month_in_displayed_year(adapter, from, picker_moment),
            month_in_displayed_year(adapter, to, picker_moment),
        ];
    }

    match selected {
        Some(date) => vec![month_in_displayed_year(adapter, Some(date), picker_moment)],
        None => Vec::new(),
    }
}
