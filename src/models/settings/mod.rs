// Settings module
// Picker configuration: locale, select mode and display formats

use crate::models::select_mode::SelectMode;
use serde::{Deserialize, Serialize};

/// Style of the month names returned by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameStyle {
    /// "January"
    Long,
    /// "Jan"
    #[default]
    Short,
    /// "J"
    Narrow,
}

/// Display patterns used by the picker views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YearViewFormats {
    /// strftime pattern for a month cell's accessibility label
    pub month_year_a11y_label: String,
    /// Style of the month cell labels
    pub month_label_style: NameStyle,
    /// strftime pattern for the period header above the grid
    pub month_year_label: String,
    /// strftime pattern used when echoing a chosen date
    pub date_a11y_label: String,
}

impl Default for YearViewFormats {
    fn default() -> Self {
        Self {
            month_year_a11y_label: "%B %Y".to_string(),
            month_label_style: NameStyle::Short,
            month_year_label: "%b %Y".to_string(),
            date_a11y_label: "%B %-d, %Y".to_string(),
        }
    }
}

/// Top-level picker configuration, read from `year-view.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// BCP-47 style locale tag, e.g. "en-US"
    pub locale: String,
    pub select_mode: SelectMode,
    pub formats: YearViewFormats,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            select_mode: SelectMode::Single,
            formats: YearViewFormats::default(),
        }
    }
}

impl PickerConfig {
    /// Validate the configuration values that can be checked without an adapter.
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        if self.locale.trim().is_empty() {
            return Err(SettingsValidationError::EmptyLocale);
        }
        if self.formats.month_year_a11y_label.trim().is_empty() {
            return Err(SettingsValidationError::EmptyPattern("month_year_a11y_label"));
        }
        if self.formats.month_year_label.trim().is_empty() {
            return Err(SettingsValidationError::EmptyPattern("month_year_label"));
        }
        if self.formats.date_a11y_label.trim().is_empty() {
            return Err(SettingsValidationError::EmptyPattern("date_a11y_label"));
        }
        Ok(())
    }
}

/// Validation errors for PickerConfig.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsValidationError {
    EmptyLocale,
    EmptyPattern(&'static str),
}

impl std::fmt::Display for SettingsValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLocale => write!(f, "Locale cannot be empty"),
            Self::EmptyPattern(name) => write!(f, "Format pattern '{}' cannot be empty", name),
        }
    }
}

impl std::error::Error for SettingsValidationError {}
