use crate::services::adapter::DateTimeAdapter;
use crate::services::error::Result;
use std::rc::Rc;

/// Caller-supplied predicate deciding whether a single date can be picked.
pub type DateFilter<D> = Rc<dyn Fn(&D) -> bool>;

/// Everything that restricts which dates are selectable.
pub struct Constraints<D> {
    pub filter: Option<DateFilter<D>>,
    /// Inclusive lower bound
    pub min_date: Option<D>,
    /// Inclusive upper bound
    pub max_date: Option<D>,
}

impl<D> Default for Constraints<D> {
    fn default() -> Self {
        Self {
            filter: None,
            min_date: None,
            max_date: None,
        }
    }
}

impl<D: Clone> Clone for Constraints<D> {
    fn clone(&self) -> Self {
        Self {
            filter: self.filter.clone(),
            min_date: self.min_date.clone(),
            max_date: self.max_date.clone(),
        }
    }
}

impl<D: std::fmt::Debug> std::fmt::Debug for Constraints<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Constraints")
            .field("filter", &self.filter.as_ref().map(|_| "<fn>"))
            .field("min_date", &self.min_date)
            .field("max_date", &self.max_date)
            .finish()
    }
}

impl<D> Constraints<D> {
    /// True if `date` passes the filter and lies within the bounds.
    pub fn allows<A>(&self, adapter: &A, date: &D) -> bool
    where
        A: DateTimeAdapter<Date = D> + ?Sized,
    {
        if let Some(filter) = &self.filter {
            if !filter(date) {
                return false;
            }
        }
        if let Some(min) = &self.min_date {
            if adapter.compare(date, min).is_lt() {
                return false;
            }
        }
        if let Some(max) = &self.max_date {
            if adapter.compare(date, max).is_gt() {
                return false;
            }
        }
        true
    }
}

/// Whether any day of `month` (0-based) in the picker moment's year is selectable.
///
/// Walks the month one calendar day at a time and stops at the first day
/// that passes the constraints.
pub fn is_month_enabled<A>(
    adapter: &A,
    month: u32,
    picker_moment: &A::Date,
    constraints: &Constraints<A::Date>,
) -> Result<bool>
where
    A: DateTimeAdapter + ?Sized,
{
    let year = adapter.year(picker_moment);
    let mut date = adapter.create_date(year, month, 1)?;

    while adapter.month(&date) == month {
        if adapter.is_valid(&date) && constraints.allows(adapter, &date) {
            return Ok(true);
        }
        date = match adapter.add_calendar_days(&date, 1) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(false)
}
