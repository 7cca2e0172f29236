// Calendar Year View Library
// Year grid engine for a date picker: month cells, selection tracking and
// month enablement under min/max bounds and a date filter.

pub mod models;
pub mod services;
pub mod utils;

pub use models::month_cell::{MonthCell, MonthGrid};
pub use models::select_mode::SelectMode;
pub use models::selected_month::SelectedMonth;
pub use models::settings::{NameStyle, PickerConfig, YearViewFormats};
pub use services::adapter::{ChronoAdapter, Clock, DateInput, DateTimeAdapter, Locale};
pub use services::error::YearViewError;
pub use services::year_view::{DateFilter, ViewState, YearView};
