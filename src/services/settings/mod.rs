mod service;

pub use service::{default_config_path, SettingsService};
