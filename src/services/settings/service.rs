use crate::models::settings::PickerConfig;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "year-view.toml";

/// Loads and stores the picker configuration as TOML.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for the platform config directory, falling back to the
    /// working directory when no home directory is known.
    pub fn from_default_location() -> Self {
        Self::new(default_config_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings. A missing file yields defaults.
    pub fn get(&self) -> Result<PickerConfig> {
        if !self.path.exists() {
            log::info!(
                "No config at {}, using default picker settings",
                self.path.display()
            );
            return Ok(PickerConfig::default());
        }

        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let config: PickerConfig = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        config
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        Ok(config)
    }

    /// Update settings
    pub fn update(&self, config: &PickerConfig) -> Result<()> {
        config
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let raw = toml::to_string_pretty(config).context("Failed to serialize settings")?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        log::info!("Saved picker settings to {}", self.path.display());
        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        self.update(&PickerConfig::default())
    }
}

pub fn default_config_path() -> PathBuf {
    match ProjectDirs::from("com", "KenBoyle", "CalendarYearView") {
        Some(proj_dirs) => proj_dirs.config_dir().join(CONFIG_FILE),
        None => PathBuf::from(CONFIG_FILE),
    }
}
