use super::enablement::{is_month_enabled, Constraints};
use crate::models::month_cell::{MonthCell, MonthGrid, MONTHS_PER_YEAR};
use crate::services::adapter::DateTimeAdapter;
use crate::services::error::{Result, YearViewError};

/// Build the cell for one month of the picker moment's year.
pub fn create_month_cell<A>(
    adapter: &A,
    month: u32,
    picker_moment: &A::Date,
    constraints: &Constraints<A::Date>,
    month_names: &[String],
    a11y_pattern: &str,
) -> Result<MonthCell>
where
    A: DateTimeAdapter + ?Sized,
{
    let label = month_names
        .get(month as usize)
        .ok_or(YearViewError::InvalidMonth(month))?;
    let start_of_month = adapter.create_date(adapter.year(picker_moment), month, 1)?;
    let aria_label = adapter.format(&start_of_month, a11y_pattern)?;
    let enabled = is_month_enabled(adapter, month, picker_moment, constraints)?;

    Ok(MonthCell::new(month, label.as_str(), aria_label, enabled))
}

/// Build all twelve cells for the picker moment's year, four rows of three.
pub fn build_grid<A>(
    adapter: &A,
    picker_moment: &A::Date,
    constraints: &Constraints<A::Date>,
    month_names: &[String],
    a11y_pattern: &str,
) -> Result<MonthGrid>
where
    A: DateTimeAdapter + ?Sized,
{
    let cells = (0..MONTHS_PER_YEAR)
        .map(|month| {
            create_month_cell(
                adapter,
                month,
                picker_moment,
                constraints,
                month_names,
                a11y_pattern,
            )
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(MonthGrid::from_cells(cells))
}
