//! Logging setup.
//!
//! Everything logs through the `log` facade; the binary installs
//! `env_logger` once at startup. The default level is `info` and `RUST_LOG`
//! overrides it:
//!
//! ```bash
//! RUST_LOG=new_column_form=debug new-column-form
//! ```

use crate::error::{FormError, Result};

pub const DEFAULT_FILTER: &str = "info";

fn builder() -> env_logger::Builder {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER))
}

/// Installs the global logger.
///
/// # Errors
///
/// Returns an error if a logger has already been installed.
pub fn init() -> Result<()> {
    builder()
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| FormError::Other(format!("Failed to initialize logging: {e}")))?;
    log::debug!("Logging initialized");
    Ok(())
}

/// Test-friendly variant: captured by the test harness, never fails.
#[cfg(test)]
pub fn init_for_tests() {
    let _ = builder().is_test(true).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        init_for_tests();
        assert!(init().is_err(), "logger was already installed");
    }
}
