//! CLI logic for the drawbom tool.
//!
//! This module contains the core CLI logic: configuration loading, BOM
//! extraction and writing the resulting table.

pub mod config;
pub mod error_adapter;

mod args;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use drawbom::{BomBuilder, DrawBomError};

/// Run the drawbom CLI application
///
/// Extracts the BOM of the input diagram and writes it as a table to the
/// output file, or to stdout if no output file was given.
///
/// # Errors
///
/// Returns `DrawBomError` for:
/// - Configuration loading and validation errors
/// - Unsupported input formats
/// - File I/O errors
/// - Malformed documents or BOM shapes
/// - Table export errors
pub fn run(args: &Args) -> Result<(), DrawBomError> {
    run_with_stdout(args, io::stdout().lock())
}

/// Like [`run`], writing the table to `stdout` when no output file is given.
///
/// The table is rendered in full before anything is written, so a failed
/// run leaves no partial output behind.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_stdout<W: Write>(args: &Args, mut stdout: W) -> Result<(), DrawBomError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let app_config = config::apply_overrides(app_config, args)?;

    let builder = BomBuilder::new(app_config);
    let bom = builder.read(&args.input)?;
    let table = builder.render_table(&bom)?;

    match &args.output {
        Some(output) => {
            fs::write(output, &table)?;
            info!(output_file = output, items_count = bom.len(); "BOM exported successfully");
        }
        None => {
            stdout.write_all(table.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
