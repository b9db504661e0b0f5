//! Error handling for the application shell.
//!
//! The column editor itself never fails: an invalid name or label is UI
//! state, reported through [`crate::column::FieldError`]. The errors here
//! come from the things around it (loading config, starting the window).
//!
//! ```
//! use new_column_form::error::FormError;
//!
//! fn describe(err: &FormError) -> &'static str {
//!     match err {
//!         FormError::Io(_) => "disk",
//!         FormError::Config(_) => "config",
//!         FormError::Gui(_) => "window",
//!         FormError::Other(_) => "other",
//!     }
//! }
//! ```
//!
//! `ResultExt` adds context to any convertible error:
//!
//! ```no_run
//! use new_column_form::error::ResultExt as _;
//!
//! fn read_settings() -> new_column_form::error::Result<String> {
//!     std::fs::read_to_string("config.json").context("Failed to read settings")
//! }
//! ```

use std::fmt;

#[derive(Debug)]
pub enum FormError {
    /// I/O errors (reading or writing the config file)
    Io(std::io::Error),

    /// Malformed or unwritable configuration
    Config(String),

    /// The native window could not be started
    Gui(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Gui(msg) => write!(f, "GUI error: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Config(_) | Self::Gui(_) | Self::Other(_) => None,
        }
    }
}

impl From<std::io::Error> for FormError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<anyhow::Error> for FormError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<eframe::Error> for FormError {
    fn from(err: eframe::Error) -> Self {
        Self::Gui(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FormError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Lazy variant of [`ResultExt::context`].
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<FormError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: FormError = e.into();
            FormError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: FormError = e.into();
            FormError::Other(format!("{}: {}", f(), err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FormError::Config("missing messages".to_owned());
        assert_eq!(err.to_string(), "Configuration error: missing messages");
    }

    #[test]
    fn test_json_error_is_config() {
        let err: FormError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, FormError::Config(_)));
    }

    #[test]
    fn test_result_context() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "config.json",
        ));

        let result: Result<()> = result.context("Failed to read config");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Failed to read config"));
        assert!(message.contains("config.json"));
    }
}
