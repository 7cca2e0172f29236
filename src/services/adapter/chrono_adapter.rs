//! [`DateTimeAdapter`] backed by `chrono::NaiveDateTime`.
//!
//! Naive values are used throughout: the picker does not convert between
//! timezones, it only reasons about calendar fields.

use super::{DateInput, DateTimeAdapter, Locale};
use crate::models::settings::NameStyle;
use crate::services::channel::Channel;
use crate::services::error::{Result, YearViewError};
use crate::utils::date::days_in_month;
use chrono::format::{Fixed, Item, StrftimeItems};
use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt::Write;

/// Years outside this range are treated as invalid dates.
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

const TEXT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Source of "now" for the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// Local wall-clock time.
    #[default]
    System,
    /// A frozen moment, for deterministic rendering.
    Fixed(NaiveDateTime),
}

#[derive(Debug, Default)]
pub struct ChronoAdapter {
    locale: Cell<Locale>,
    clock: Clock,
    locale_changes: Channel<()>,
}

impl ChronoAdapter {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale: Cell::new(locale),
            clock: Clock::System,
            locale_changes: Channel::new(),
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    /// Switch locale and notify subscribers.
    pub fn set_locale(&self, locale: Locale) {
        log::info!("Switching picker locale {} -> {}", self.locale.get(), locale);
        self.locale.set(locale);
        self.locale_changes.emit(&());
    }

    fn parse_text(text: &str) -> Option<NaiveDateTime> {
        for fmt in TEXT_FORMATS {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(text, fmt) {
                return Some(parsed);
            }
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .map(|d| d.and_time(NaiveTime::MIN))
    }
}

impl DateTimeAdapter for ChronoAdapter {
    type Date = NaiveDateTime;

    fn deserialize(&self, value: DateInput<NaiveDateTime>) -> DateInput<NaiveDateTime> {
        match value {
            DateInput::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return DateInput::Empty;
                }
                match Self::parse_text(trimmed) {
                    Some(date) => DateInput::Date(date),
                    None => {
                        log::debug!("Could not parse '{}' as a date", trimmed);
                        DateInput::Text(text)
                    }
                }
            }
            DateInput::Timestamp(secs) => match DateTime::from_timestamp(secs, 0) {
                Some(dt) => DateInput::Date(dt.naive_utc()),
                None => {
                    log::debug!("Timestamp {} is out of range", secs);
                    DateInput::Timestamp(secs)
                }
            },
            other => other,
        }
    }

    fn is_valid(&self, date: &NaiveDateTime) -> bool {
        (MIN_YEAR..=MAX_YEAR).contains(&date.year())
    }

    fn now(&self) -> NaiveDateTime {
        match self.clock {
            Clock::System => Local::now().naive_local(),
            Clock::Fixed(moment) => moment,
        }
    }

    fn year(&self, date: &NaiveDateTime) -> i32 {
        date.year()
    }

    fn month(&self, date: &NaiveDateTime) -> u32 {
        date.month0()
    }

    fn day(&self, date: &NaiveDateTime) -> u32 {
        date.day()
    }

    fn hours(&self, date: &NaiveDateTime) -> u32 {
        date.hour()
    }

    fn minutes(&self, date: &NaiveDateTime) -> u32 {
        date.minute()
    }

    fn seconds(&self, date: &NaiveDateTime) -> u32 {
        date.second()
    }

    fn create_date(&self, year: i32, month: u32, day: u32) -> Result<NaiveDateTime> {
        self.create_date_time(year, month, day, 0, 0, 0)
    }

    fn create_date_time(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hours: u32,
        minutes: u32,
        seconds: u32,
    ) -> Result<NaiveDateTime> {
        let invalid = || YearViewError::InvalidDate { year, month, day };
        if month > 11 {
            return Err(YearViewError::InvalidMonth(month));
        }
        let date = NaiveDate::from_ymd_opt(year, month + 1, day).ok_or_else(invalid)?;
        date.and_hms_opt(hours, minutes, seconds).ok_or_else(invalid)
    }

    fn num_days_in_month(&self, date: &NaiveDateTime) -> u32 {
        days_in_month(date.year(), date.month())
    }

    fn add_calendar_days(&self, date: &NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
        if days >= 0 {
            date.checked_add_days(Days::new(days as u64))
        } else {
            date.checked_sub_days(Days::new(days.unsigned_abs()))
        }
    }

    fn compare(&self, first: &NaiveDateTime, second: &NaiveDateTime) -> Ordering {
        first.cmp(second)
    }

    fn format(&self, date: &NaiveDateTime, pattern: &str) -> Result<String> {
        let locale = self.locale.get();
        let month = date.month0();
        let mut items = Vec::new();
        for item in StrftimeItems::new(pattern) {
            match item {
                Item::Error => return Err(YearViewError::InvalidFormat(pattern.to_string())),
                Item::Fixed(Fixed::LongMonthName) => items.push(Item::Literal(locale.long_month(month))),
                Item::Fixed(Fixed::ShortMonthName) => {
                    items.push(Item::Literal(locale.short_month(month)))
                }
                other => items.push(other),
            }
        }

        let mut out = String::new();
        write!(out, "{}", date.format_with_items(items.iter()))
            .map_err(|_| YearViewError::UnformattableDate(pattern.to_string()))?;
        Ok(out)
    }

    fn month_names(&self, style: NameStyle) -> Vec<String> {
        self.locale.get().month_names(style)
    }

    fn locale_changes(&self) -> &Channel<()> {
        &self.locale_changes
    }
}
