//! Command-line argument definitions for the drawbom CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the input and output paths, the BOM
//! attribute names, configuration file selection, and logging verbosity.

use clap::Parser;

/// Generates a BOM list from a draw.io diagram.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input diagram
    #[arg(help = "Input file in one of the draw.io formats")]
    pub input: String,

    /// Write the table to this file instead of printing it to stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Name of the attribute with the BOM part reference (e.g. a part number)
    #[arg(long)]
    pub id_key: Option<String>,

    /// Name of the attribute with the BOM part count
    #[arg(long)]
    pub amount_key: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["drawbom", "board.drawio"]);

        assert_eq!(args.input, "board.drawio");
        assert!(args.output.is_none());
        assert!(args.id_key.is_none());
        assert!(args.amount_key.is_none());
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_key_overrides() {
        let args = Args::parse_from([
            "drawbom",
            "board.drawio",
            "--id-key",
            "PART",
            "--amount-key",
            "QTY",
            "-o",
            "bom.csv",
        ]);

        assert_eq!(args.id_key.as_deref(), Some("PART"));
        assert_eq!(args.amount_key.as_deref(), Some("QTY"));
        assert_eq!(args.output.as_deref(), Some("bom.csv"));
    }
}
