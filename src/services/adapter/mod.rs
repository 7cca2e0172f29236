//! Date/locale adapter abstraction.
//!
//! The year view never touches a concrete date type. Everything it needs to
//! know about dates, calendars and locales goes through [`DateTimeAdapter`],
//! so hosts can plug in their own date representation.

mod chrono_adapter;
mod locale;

pub use chrono_adapter::{ChronoAdapter, Clock};
pub use locale::Locale;

use crate::models::settings::NameStyle;
use crate::services::channel::Channel;
use crate::services::error::Result;
use std::cmp::Ordering;

/// A raw value handed to the picker before it is normalized.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput<D> {
    /// Already a date of the adapter's type.
    Date(D),
    /// Textual form, parsed by [`DateTimeAdapter::deserialize`].
    Text(String),
    /// Seconds since the unix epoch.
    Timestamp(i64),
    /// No value.
    Empty,
}

impl<D> Default for DateInput<D> {
    fn default() -> Self {
        DateInput::Empty
    }
}

impl<D> From<Option<D>> for DateInput<D> {
    fn from(value: Option<D>) -> Self {
        value.map_or(DateInput::Empty, DateInput::Date)
    }
}

impl<D> From<&str> for DateInput<D> {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl<D> From<String> for DateInput<D> {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

impl From<chrono::NaiveDateTime> for DateInput<chrono::NaiveDateTime> {
    fn from(value: chrono::NaiveDateTime) -> Self {
        DateInput::Date(value)
    }
}

/// Capabilities the year view consumes from the host's date library.
///
/// Months are 0-based (January = 0) at this boundary.
pub trait DateTimeAdapter {
    type Date: Clone + std::fmt::Debug + 'static;

    /// Turn a raw input into the adapter's representation where possible.
    /// Inputs that cannot be understood are returned unchanged.
    fn deserialize(&self, value: DateInput<Self::Date>) -> DateInput<Self::Date>;

    fn is_date_instance(&self, value: &DateInput<Self::Date>) -> bool {
        matches!(value, DateInput::Date(_))
    }

    fn is_valid(&self, date: &Self::Date) -> bool;

    fn now(&self) -> Self::Date;

    fn year(&self, date: &Self::Date) -> i32;
    fn month(&self, date: &Self::Date) -> u32;
    fn day(&self, date: &Self::Date) -> u32;
    fn hours(&self, date: &Self::Date) -> u32;
    fn minutes(&self, date: &Self::Date) -> u32;
    fn seconds(&self, date: &Self::Date) -> u32;

    /// Midnight of the given day.
    fn create_date(&self, year: i32, month: u32, day: u32) -> Result<Self::Date>;

    fn create_date_time(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hours: u32,
        minutes: u32,
        seconds: u32,
    ) -> Result<Self::Date>;

    fn num_days_in_month(&self, date: &Self::Date) -> u32;

    /// Shift by whole calendar days; `None` when the result is unrepresentable.
    fn add_calendar_days(&self, date: &Self::Date, days: i64) -> Option<Self::Date>;

    fn compare(&self, first: &Self::Date, second: &Self::Date) -> Ordering;

    fn compare_year(&self, first: &Self::Date, second: &Self::Date) -> Ordering {
        self.year(first).cmp(&self.year(second))
    }

    fn format(&self, date: &Self::Date, pattern: &str) -> Result<String>;

    /// Twelve month names for the active locale, January first.
    fn month_names(&self, style: NameStyle) -> Vec<String>;

    /// Fires after the active locale has changed.
    fn locale_changes(&self) -> &Channel<()>;

    /// Deserialize `value` and keep it only if it is a valid date instance.
    fn valid_date(&self, value: DateInput<Self::Date>) -> Option<Self::Date> {
        match self.deserialize(value) {
            DateInput::Date(date) if self.is_valid(&date) => Some(date),
            _ => None,
        }
    }
}
