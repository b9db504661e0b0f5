//! # New Column Form
//!
//! Desktop entry point. Without a subcommand it opens the form window;
//! with one it runs as a small CLI:
//!
//! ```bash
//! new-column-form --name orders --label Orders
//! new-column-form check "My Col 1!"
//! new-column-form config init
//! ```

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)] // The CLI prints its results

mod cli;

use clap::Parser as _;
use new_column_form::config;
use new_column_form::error::FormError;
use new_column_form::gui::ColumnFormApp;
use std::process::ExitCode;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    new_column_form::logging::init()?;

    let cli = cli::Cli::parse();
    let mut form_config = config::load_form_config();

    if let Some(command) = cli.command {
        let ok = cli::run_command(command, &form_config)?;
        return Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    if let Some(name) = cli.name {
        form_config.initial_name = name;
    }
    if let Some(label) = cli.label {
        form_config.initial_label = label;
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("New Column")
            .with_inner_size([form_config.window_width, form_config.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "new-column-form",
        native_options,
        Box::new(move |cc| Ok(Box::new(ColumnFormApp::new(cc, form_config)))),
    )
    .map_err(FormError::from)?;
    Ok(ExitCode::SUCCESS)
}
