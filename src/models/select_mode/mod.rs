//! Select mode of the picker.
//!
//! Governs whether the year view tracks one selected date or a from/to pair.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How many dates the picker tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectMode {
    /// One optional date.
    #[default]
    Single,
    /// A from/to pair, both editable.
    Range,
    /// A from/to pair where only "from" is being picked.
    RangeFrom,
    /// A from/to pair where only "to" is being picked.
    RangeTo,
}

impl SelectMode {
    pub fn is_single(&self) -> bool {
        matches!(self, SelectMode::Single)
    }

    /// True for every mode that tracks a from/to pair.
    pub fn is_range(&self) -> bool {
        matches!(
            self,
            SelectMode::Range | SelectMode::RangeFrom | SelectMode::RangeTo
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SelectMode::Single => "single",
            SelectMode::Range => "range",
            SelectMode::RangeFrom => "rangeFrom",
            SelectMode::RangeTo => "rangeTo",
        }
    }
}

impl FromStr for SelectMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "single" => Ok(SelectMode::Single),
            "range" => Ok(SelectMode::Range),
            "rangeFrom" | "range-from" => Ok(SelectMode::RangeFrom),
            "rangeTo" | "range-to" => Ok(SelectMode::RangeTo),
            other => Err(format!("Unknown select mode: {}", other)),
        }
    }
}

impl std::fmt::Display for SelectMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
