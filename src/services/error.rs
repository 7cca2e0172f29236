//! Errors surfaced by the date adapter and the year view.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum YearViewError {
    #[error("Invalid format pattern '{0}'")]
    InvalidFormat(String),

    #[error("Pattern '{0}' cannot be applied to a date without a timezone")]
    UnformattableDate(String),

    #[error("Invalid date {year}-{month}-{day} (0-based month)")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Month index {0} is out of range (expected 0-11)")]
    InvalidMonth(u32),

    #[error("Unknown locale '{0}'")]
    UnknownLocale(String),
}

pub type Result<T> = std::result::Result<T, YearViewError>;
