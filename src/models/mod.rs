// Module exports for models

pub mod month_cell;
pub mod select_mode;
pub mod selected_month;
pub mod settings;
