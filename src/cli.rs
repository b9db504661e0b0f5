use anyhow::Result;
use clap::{Parser, Subcommand};
use new_column_form::column::{normalize_column_name, validate_name};
use new_column_form::config::{self, FormConfig, FormMessages};

#[derive(Parser)]
#[command(name = "new-column-form", about = "Name and label a new data column")]
pub struct Cli {
    /// Initial column name (overrides the config file)
    #[arg(long)]
    pub name: Option<String>,

    /// Initial column label (overrides the config file)
    #[arg(long)]
    pub label: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a column name and print the suggested correction
    Check {
        /// Column name to check
        name: String,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the config file location
    Path,
    /// Write the default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Outcome of `check`, kept separate from printing so it can be tested.
#[derive(Debug, PartialEq, Eq)]
pub struct CheckReport {
    pub name: String,
    pub error: Option<String>,
    pub suggestion: Option<String>,
}

impl CheckReport {
    pub fn new(name: &str, messages: &FormMessages) -> Self {
        let error = validate_name(name);
        let suggestion = error
            .map(|_| normalize_column_name(name))
            .filter(|s| !s.is_empty());
        Self {
            name: name.to_owned(),
            error: error.map(|e| messages.for_name(e).to_owned()),
            suggestion,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Runs a subcommand. Returns `false` when the command reports a failure
/// that should become a non-zero exit status.
pub fn run_command(command: Commands, config: &FormConfig) -> Result<bool> {
    match command {
        Commands::Check { name } => {
            let report = CheckReport::new(&name, &config.messages);
            if report.is_valid() {
                println!("{name:?} is a valid column name");
            } else {
                println!(
                    "{name:?} is not a valid column name: {}",
                    report.error.as_deref().unwrap_or_default()
                );
                match &report.suggestion {
                    Some(suggestion) => println!("Suggested: {suggestion}"),
                    None => println!("No usable name can be derived from it"),
                }
            }
            Ok(report.is_valid())
        }
        Commands::Config { action } => {
            run_config(&action)?;
            Ok(true)
        }
    }
}

fn run_config(action: &ConfigAction) -> Result<()> {
    let path = config::config_path();
    match action {
        ConfigAction::Path => println!("{}", path.display()),
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            config::save_form_config(&FormConfig::default())?;
            log::info!("Wrote default config to {}", path.display());
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_valid_name() {
        let report = CheckReport::new("order_id", &FormMessages::default());
        assert!(report.is_valid());
        assert_eq!(report.suggestion, None);
    }

    #[test]
    fn test_check_suggests_correction() {
        let report = CheckReport::new("My Col 1!", &FormMessages::default());
        assert!(!report.is_valid());
        assert_eq!(report.suggestion.as_deref(), Some("my_col_1"));
    }

    #[test]
    fn test_check_empty_name_is_required() {
        let messages = FormMessages::default();
        let report = CheckReport::new("", &messages);
        assert_eq!(report.error.as_deref(), Some(messages.name_required.as_str()));
        assert_eq!(report.suggestion, None);
    }

    #[test]
    fn test_cli_parses_overrides() {
        let cli = Cli::parse_from(["new-column-form", "--name", "orders", "--label", "Orders"]);
        assert_eq!(cli.name.as_deref(), Some("orders"));
        assert_eq!(cli.label.as_deref(), Some("Orders"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parses_check() {
        let cli = Cli::parse_from(["new-column-form", "check", "Bad Name"]);
        assert!(matches!(cli.command, Some(Commands::Check { name }) if name == "Bad Name"));
    }
}
