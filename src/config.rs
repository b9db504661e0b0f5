use crate::column::{ColumnProps, FieldError};
use crate::error::{FormError, Result, ResultExt as _};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = "new-column-form";
pub const CONFIG_FILE: &str = "config.json";

/// Inline messages shown under the fields.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FormMessages {
    pub name_required: String,
    pub name_pattern: String,
    pub label_required: String,
}

impl Default for FormMessages {
    fn default() -> Self {
        Self {
            name_required: FieldError::Required.name_message().to_owned(),
            name_pattern: FieldError::Pattern.name_message().to_owned(),
            label_required: FieldError::Required.label_message().to_owned(),
        }
    }
}

impl FormMessages {
    pub fn for_name(&self, error: FieldError) -> &str {
        match error {
            FieldError::Required => &self.name_required,
            FieldError::Pattern => &self.name_pattern,
        }
    }

    pub fn for_label(&self, error: FieldError) -> &str {
        match error {
            FieldError::Required | FieldError::Pattern => &self.label_required,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FormConfig {
    /// Initial `columnName` prop
    pub initial_name: String,
    /// Initial `columnLabel` prop
    pub initial_label: String,
    /// How long the pulse highlight takes to fade in and out (seconds)
    pub pulse_seconds: f32,
    pub window_width: f32,
    pub window_height: f32,
    pub messages: FormMessages,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            initial_name: String::new(),
            initial_label: String::new(),
            pulse_seconds: 0.6,
            window_width: 720.0,
            window_height: 520.0,
            messages: FormMessages::default(),
        }
    }
}

impl FormConfig {
    pub fn props(&self) -> ColumnProps {
        ColumnProps::new(self.initial_name.clone(), self.initial_label.clone())
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)?;
        config.check()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns an error if the parent directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn check(&self) -> Result<()> {
        if !self.pulse_seconds.is_finite() || self.pulse_seconds < 0.0 {
            return Err(FormError::Config(format!(
                "pulse_seconds must be a non-negative number, got {}",
                self.pulse_seconds
            )));
        }
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.window_width) || !positive(self.window_height) {
            return Err(FormError::Config("window size must be positive".to_owned()));
        }
        Ok(())
    }
}

/// `<config dir>/new-column-form/config.json`, or the working directory when
/// the platform has no config dir.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILE)
}

/// Loads the user config, falling back to defaults.
pub fn load_form_config() -> FormConfig {
    let path = config_path();
    if !path.exists() {
        return FormConfig::default();
    }
    match FormConfig::load_from(&path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring config at {}: {e}", path.display());
            FormConfig::default()
        }
    }
}

/// # Errors
///
/// See [`FormConfig::save_to`].
pub fn save_form_config(config: &FormConfig) -> Result<()> {
    config.save_to(&config_path())
}
