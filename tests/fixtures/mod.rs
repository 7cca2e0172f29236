// Test fixtures - reusable test data
// Provides consistent dates and views across all test files

#![allow(dead_code)]

use calendar_year_view::{ChronoAdapter, Clock, Locale, YearView, YearViewFormats};
use chrono::{NaiveDate, NaiveDateTime};
use std::rc::Rc;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Midnight of the given day
    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    /// Returns Jan 1, 2025 at midnight
    pub fn jan_1_2025() -> NaiveDateTime {
        ymd(2025, 1, 1)
    }

    /// Returns Mar 15, 2025 at midnight
    pub fn ides_of_march_2025() -> NaiveDateTime {
        ymd(2025, 3, 15)
    }

    /// Returns Jun 10, 2025 at midnight
    pub fn jun_10_2025() -> NaiveDateTime {
        ymd(2025, 6, 10)
    }

    /// Returns Jan 31, 2025 at 14:45:10 (end of a 31-day month)
    pub fn jan_31_2025_afternoon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 31)
            .unwrap()
            .and_hms_opt(14, 45, 10)
            .unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    /// The frozen "today" used by fixture adapters
    pub fn today() -> NaiveDateTime {
        ymd(2025, 10, 18)
    }
}

/// Adapter with a fixed clock so "now" is deterministic.
pub fn adapter() -> Rc<ChronoAdapter> {
    Rc::new(ChronoAdapter::new(Locale::EnUs).with_clock(Clock::Fixed(dates::today())))
}

/// A view anchored at `moment`, not yet initiated.
pub fn view_at(moment: NaiveDateTime) -> YearView<ChronoAdapter> {
    let mut view = YearView::new(adapter(), YearViewFormats::default());
    view.set_picker_moment(moment)
        .expect("Failed to set picker moment");
    view
}

/// A view anchored at `moment` with its grid built.
pub fn initiated_view_at(moment: NaiveDateTime) -> YearView<ChronoAdapter> {
    let mut view = view_at(moment);
    view.after_content_init().expect("Failed to initialize view");
    view
}
