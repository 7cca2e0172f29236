//! Year view of the date picker.
//!
//! Holds the picker inputs (picker moment, selection, bounds, filter) and the
//! state derived from them: the month grid and the selected-months index.
//! Hosts render from [`YearView::months`] and [`YearView::selected_months`]
//! and listen on [`YearView::selected_change`] for the month the user picks.

mod enablement;
mod grid;
mod selection;

pub use enablement::{is_month_enabled, Constraints, DateFilter};
pub use grid::{build_grid, create_month_cell};
pub use selection::{compute_selected_months, month_in_displayed_year};

use crate::models::month_cell::{MonthGrid, MONTHS_PER_YEAR};
use crate::models::select_mode::SelectMode;
use crate::models::selected_month::SelectedMonth;
use crate::models::settings::YearViewFormats;
use crate::services::adapter::{DateInput, DateTimeAdapter};
use crate::services::channel::{Channel, Subscription};
use crate::services::error::{Result, YearViewError};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Lifecycle of a [`YearView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Inputs are stored but the grid is not rebuilt.
    #[default]
    Uninitialized,
    /// Grid-affecting changes rebuild immediately.
    Initiated,
    /// Torn down; the locale subscription is released.
    Destroyed,
}

pub struct YearView<A: DateTimeAdapter> {
    adapter: Rc<A>,
    formats: YearViewFormats,
    select_mode: SelectMode,
    selected: Option<A::Date>,
    selecteds: Vec<Option<A::Date>>,
    picker_moment: Option<A::Date>,
    constraints: Constraints<A::Date>,
    month_names: Vec<String>,
    months: MonthGrid,
    today_month: Option<SelectedMonth>,
    selected_months: Vec<Option<SelectedMonth>>,
    state: ViewState,
    locale_sub: Subscription,
    locale_pending: Rc<Cell<bool>>,
    selected_change: Channel<A::Date>,
}

impl<A: DateTimeAdapter> std::fmt::Debug for YearView<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YearView")
            .field("select_mode", &self.select_mode)
            .field("picker_moment", &self.picker_moment)
            .field("selected", &self.selected)
            .field("selecteds", &self.selecteds)
            .field("constraints", &self.constraints)
            .field("selected_months", &self.selected_months)
            .field("state", &self.state)
            .finish()
    }
}

impl<A: DateTimeAdapter + 'static> YearView<A> {
    pub fn new(adapter: Rc<A>, formats: YearViewFormats) -> Self {
        let month_names = adapter.month_names(formats.month_label_style);
        Self {
            adapter,
            formats,
            select_mode: SelectMode::default(),
            selected: None,
            selecteds: Vec::new(),
            picker_moment: None,
            constraints: Constraints::default(),
            month_names,
            months: MonthGrid::default(),
            today_month: None,
            selected_months: Vec::new(),
            state: ViewState::Uninitialized,
            locale_sub: Subscription::empty(),
            locale_pending: Rc::new(Cell::new(false)),
            selected_change: Channel::new(),
        }
    }

    /// Subscribe the view to the adapter's locale changes.
    ///
    /// The subscription holds only a weak reference; it is released by
    /// [`YearView::destroy`] or when the view is dropped. A notification that
    /// arrives while the view is already borrowed is recorded and applied by
    /// the next `&mut self` call, or by [`YearView::flush_pending`].
    pub fn init(view: &Rc<RefCell<Self>>) {
        let weak = Rc::downgrade(view);
        let pending = Rc::clone(&view.borrow().locale_pending);
        let sub = view.borrow().adapter.locale_changes().subscribe(move |_| {
            let Some(view) = weak.upgrade() else {
                return;
            };
            let Ok(mut view) = view.try_borrow_mut() else {
                log::debug!("Year view busy, deferring locale change");
                pending.set(true);
                return;
            };
            if let Err(err) = view.handle_locale_change() {
                log::error!("Failed to rebuild year view after locale change: {}", err);
            }
        });
        view.borrow_mut().locale_sub = sub;
    }

    /// Build the grid for the first time and start reacting to input changes.
    pub fn after_content_init(&mut self) -> Result<()> {
        self.locale_pending.set(false);
        self.month_names = self.adapter.month_names(self.formats.month_label_style);
        self.generate_month_list()?;
        self.state = ViewState::Initiated;
        log::debug!("Year view initiated");
        Ok(())
    }

    /// Release the locale subscription. No rebuild happens afterwards.
    pub fn destroy(&mut self) {
        self.locale_sub.unsubscribe();
        self.locale_pending.set(false);
        self.state = ViewState::Destroyed;
        log::debug!("Year view destroyed");
    }

    /// Whether a locale change arrived while the view was borrowed.
    pub fn has_pending_locale_change(&self) -> bool {
        self.locale_pending.get()
    }

    /// Apply a locale change that arrived while the view was borrowed.
    ///
    /// Returns `true` when a rebuild happened.
    pub fn flush_pending(&mut self) -> Result<bool> {
        if !self.locale_pending.get() {
            return Ok(false);
        }
        self.handle_locale_change()?;
        Ok(true)
    }

    /// Flush from setters that cannot return the rebuild error.
    fn flush_pending_or_log(&mut self) {
        if let Err(err) = self.flush_pending() {
            log::error!("Failed to rebuild year view after locale change: {}", err);
        }
    }

    fn handle_locale_change(&mut self) -> Result<()> {
        self.locale_pending.set(false);
        if self.state == ViewState::Destroyed {
            return Ok(());
        }
        self.month_names = self.adapter.month_names(self.formats.month_label_style);
        self.generate_month_list()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn is_initiated(&self) -> bool {
        self.state == ViewState::Initiated
    }

    pub fn adapter(&self) -> &Rc<A> {
        &self.adapter
    }

    pub fn formats(&self) -> &YearViewFormats {
        &self.formats
    }

    pub fn select_mode(&self) -> SelectMode {
        self.select_mode
    }

    pub fn set_select_mode(&mut self, mode: SelectMode) {
        self.flush_pending_or_log();
        self.select_mode = mode;
        self.set_selected_months();
    }

    pub fn is_in_single_mode(&self) -> bool {
        self.select_mode.is_single()
    }

    pub fn is_in_range_mode(&self) -> bool {
        self.select_mode.is_range()
    }

    pub fn selected(&self) -> Option<&A::Date> {
        self.selected.as_ref()
    }

    pub fn set_selected(&mut self, value: impl Into<DateInput<A::Date>>) {
        self.flush_pending_or_log();
        self.selected = self.adapter.valid_date(value.into());
        self.set_selected_months();
    }

    pub fn selecteds(&self) -> &[Option<A::Date>] {
        &self.selecteds
    }

    pub fn set_selecteds<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<DateInput<A::Date>>,
    {
        self.flush_pending_or_log();
        self.selecteds = values
            .into_iter()
            .map(|v| self.adapter.valid_date(v.into()))
            .collect();
        self.set_selected_months();
    }

    pub fn picker_moment(&self) -> Option<&A::Date> {
        self.picker_moment.as_ref()
    }

    /// Move the displayed moment. Invalid input falls back to "now".
    pub fn set_picker_moment(&mut self, value: impl Into<DateInput<A::Date>>) -> Result<()> {
        self.flush_pending()?;
        let old = self.picker_moment.take();
        let moment = self
            .adapter
            .valid_date(value.into())
            .unwrap_or_else(|| self.adapter.now());
        let same_year = self.has_same_year(old.as_ref(), &moment);
        self.picker_moment = Some(moment);

        if !same_year && self.is_initiated() {
            self.generate_month_list()?;
        }
        Ok(())
    }

    pub fn date_filter(&self) -> Option<&DateFilter<A::Date>> {
        self.constraints.filter.as_ref()
    }

    pub fn set_date_filter(&mut self, filter: Option<DateFilter<A::Date>>) -> Result<()> {
        self.flush_pending()?;
        self.constraints.filter = filter;
        if self.is_initiated() {
            self.generate_month_list()?;
        }
        Ok(())
    }

    pub fn min_date(&self) -> Option<&A::Date> {
        self.constraints.min_date.as_ref()
    }

    pub fn set_min_date(&mut self, value: impl Into<DateInput<A::Date>>) -> Result<()> {
        self.flush_pending()?;
        self.constraints.min_date = self.adapter.valid_date(value.into());
        if self.is_initiated() {
            self.generate_month_list()?;
        }
        Ok(())
    }

    pub fn max_date(&self) -> Option<&A::Date> {
        self.constraints.max_date.as_ref()
    }

    pub fn set_max_date(&mut self, value: impl Into<DateInput<A::Date>>) -> Result<()> {
        self.flush_pending()?;
        self.constraints.max_date = self.adapter.valid_date(value.into());
        if self.is_initiated() {
            self.generate_month_list()?;
        }
        Ok(())
    }

    pub fn months(&self) -> &MonthGrid {
        &self.months
    }

    /// Month of the picker moment, the cell that has keyboard focus.
    pub fn active_cell(&self) -> Option<u32> {
        self.picker_moment
            .as_ref()
            .map(|moment| self.adapter.month(moment))
    }

    /// Where today falls relative to the displayed year, as of the last rebuild.
    pub fn today_month(&self) -> Option<SelectedMonth> {
        self.today_month
    }

    pub fn selected_months(&self) -> &[Option<SelectedMonth>] {
        &self.selected_months
    }

    /// The selected-months index in its integer form (-1, 0..=11, 12).
    pub fn selected_month_indices(&self) -> Vec<Option<i32>> {
        self.selected_months
            .iter()
            .map(|m| m.map(|m| m.as_index()))
            .collect()
    }

    /// Channel that receives the date built by [`YearView::select_month`].
    pub fn selected_change(&self) -> &Channel<A::Date> {
        &self.selected_change
    }

    /// Handle a month picked by the user.
    ///
    /// Builds a date in the displayed year and `month`, keeping the picker
    /// moment's day (clamped to the month length) and time of day. The date
    /// is emitted and returned; the selection itself is left untouched.
    /// Listeners run while the view is borrowed and must not borrow it. A
    /// locale change made by a listener is applied before returning.
    pub fn select_month(&mut self, month: u32) -> Result<Option<A::Date>> {
        self.flush_pending()?;
        if month >= MONTHS_PER_YEAR {
            return Err(YearViewError::InvalidMonth(month));
        }
        let Some(moment) = self.picker_moment.as_ref() else {
            log::debug!("Ignoring month selection without a picker moment");
            return Ok(None);
        };

        let adapter = &self.adapter;
        let year = adapter.year(moment);
        let first_of_month = adapter.create_date(year, month, 1)?;
        let day = adapter
            .day(moment)
            .min(adapter.num_days_in_month(&first_of_month));
        let selected = adapter.create_date_time(
            year,
            month,
            day,
            adapter.hours(moment),
            adapter.minutes(moment),
            adapter.seconds(moment),
        )?;

        log::debug!("Month {} selected: {:?}", month, selected);
        self.selected_change.emit(&selected);
        self.flush_pending()?;
        Ok(Some(selected))
    }

    /// Rebuild the month grid and everything derived alongside it.
    fn generate_month_list(&mut self) -> Result<()> {
        let Some(moment) = self.picker_moment.as_ref() else {
            return Ok(());
        };

        let months = build_grid(
            self.adapter.as_ref(),
            moment,
            &self.constraints,
            &self.month_names,
            &self.formats.month_year_a11y_label,
        )?;
        let now = self.adapter.now();
        let today_month = month_in_displayed_year(self.adapter.as_ref(), Some(&now), Some(moment));
        let year = self.adapter.year(moment);

        self.months = months;
        self.today_month = today_month;
        self.set_selected_months();
        log::debug!(
            "Rebuilt year grid for {}: {} months enabled",
            year,
            self.months.enabled_months().len()
        );
        Ok(())
    }

    fn set_selected_months(&mut self) {
        self.selected_months = compute_selected_months(
            self.adapter.as_ref(),
            self.select_mode,
            self.selected.as_ref(),
            &self.selecteds,
            self.picker_moment.as_ref(),
        );
    }

    fn has_same_year(&self, left: Option<&A::Date>, right: &A::Date) -> bool {
        left.is_some_and(|left| self.adapter.year(left) == self.adapter.year(right))
    }
}
