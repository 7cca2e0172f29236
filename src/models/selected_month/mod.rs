//! Position of a selected date relative to the displayed year.

use serde::{Deserialize, Serialize};

/// Sentinel used when the selected date falls in an earlier year.
pub const BEFORE_YEAR: i32 = -1;
/// Sentinel used when the selected date falls in a later year.
pub const AFTER_YEAR: i32 = 12;

/// Where a selected date lies with respect to the year on screen.
///
/// Serializes to the integer form renderers expect: `-1`, `0..=11` or `12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum SelectedMonth {
    /// The date is in a year before the displayed one.
    BeforeYear,
    /// The date is in the displayed year, in this 0-based month.
    InYear(u32),
    /// The date is in a year after the displayed one.
    AfterYear,
}

impl SelectedMonth {
    pub fn as_index(&self) -> i32 {
        match self {
            SelectedMonth::BeforeYear => BEFORE_YEAR,
            SelectedMonth::InYear(month) => *month as i32,
            SelectedMonth::AfterYear => AFTER_YEAR,
        }
    }

    /// The grid month this selection maps onto, if it is in the displayed year.
    pub fn month(&self) -> Option<u32> {
        match self {
            SelectedMonth::InYear(month) => Some(*month),
            _ => None,
        }
    }
}

impl From<SelectedMonth> for i32 {
    fn from(value: SelectedMonth) -> Self {
        value.as_index()
    }
}

impl TryFrom<i32> for SelectedMonth {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            BEFORE_YEAR => Ok(SelectedMonth::BeforeYear),
            AFTER_YEAR => Ok(SelectedMonth::AfterYear),
            0..=11 => Ok(SelectedMonth::InYear(value as u32)),
            other => Err(format!("Selected month out of range: {}", other)),
        }
    }
}
