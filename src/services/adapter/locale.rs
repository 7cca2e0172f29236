use crate::models::settings::NameStyle;
use crate::services::error::YearViewError;
use std::str::FromStr;

const EN_LONG: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const EN_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const FR_LONG: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];
const FR_SHORT: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];
const DE_LONG: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
    "Oktober", "November", "Dezember",
];
const DE_SHORT: [&str; 12] = [
    "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
    "Dez.",
];
const ES_LONG: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
    "octubre", "noviembre", "diciembre",
];
const ES_SHORT: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

/// Locales with built-in month name tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
    FrFr,
    DeDe,
    EsEs,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::FrFr => "fr-FR",
            Locale::DeDe => "de-DE",
            Locale::EsEs => "es-ES",
        }
    }

    fn long_names(&self) -> &'static [&'static str; 12] {
        match self {
            Locale::EnUs | Locale::EnGb => &EN_LONG,
            Locale::FrFr => &FR_LONG,
            Locale::DeDe => &DE_LONG,
            Locale::EsEs => &ES_LONG,
        }
    }

    fn short_names(&self) -> &'static [&'static str; 12] {
        match self {
            Locale::EnUs | Locale::EnGb => &EN_SHORT,
            Locale::FrFr => &FR_SHORT,
            Locale::DeDe => &DE_SHORT,
            Locale::EsEs => &ES_SHORT,
        }
    }

    /// Long name of a 0-based month.
    pub fn long_month(&self, month: u32) -> &'static str {
        self.long_names()[(month % 12) as usize]
    }

    /// Short name of a 0-based month.
    pub fn short_month(&self, month: u32) -> &'static str {
        self.short_names()[(month % 12) as usize]
    }

    pub fn month_names(&self, style: NameStyle) -> Vec<String> {
        match style {
            NameStyle::Long => self.long_names().iter().map(|s| s.to_string()).collect(),
            NameStyle::Short => self.short_names().iter().map(|s| s.to_string()).collect(),
            NameStyle::Narrow => self
                .long_names()
                .iter()
                .map(|s| s.chars().take(1).flat_map(char::to_uppercase).collect())
                .collect(),
        }
    }
}

impl FromStr for Locale {
    type Err = YearViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-").to_ascii_lowercase();
        match normalized.as_str() {
            "en" | "en-us" => Ok(Locale::EnUs),
            "en-gb" => Ok(Locale::EnGb),
            "fr" | "fr-fr" => Ok(Locale::FrFr),
            "de" | "de-de" => Ok(Locale::DeDe),
            "es" | "es-es" => Ok(Locale::EsEs),
            _ => Err(YearViewError::UnknownLocale(s.to_string())),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
