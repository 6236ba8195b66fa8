//! drawbom CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use drawbom_cli::{Args, error_adapter::to_reportables};

fn main() {
    // Panics render through miette like every other report
    miette::set_panic_hook();

    // Arguments come first so the log level is known
    let args = Args::parse();

    // Logs go to stderr; stdout carries only the table
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting drawbom");
    debug!(args:?; "Parsed arguments");

    // Extract and write the BOM
    if let Err(err) = drawbom_cli::run(&args) {
        let reporter = miette::GraphicalReportHandler::new();

        // One report per diagnostic, each with its own snippet
        for reportable in to_reportables(&err) {
            let mut writer = String::new();
            reporter
                .render_report(&mut writer, &reportable)
                .expect("Writing to String buffer is infallible");

            error!("{writer}");
        }

        process::exit(1);
    }

    info!("Completed successfully");
}
