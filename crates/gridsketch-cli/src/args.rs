//! Command-line argument definitions for the Gridsketch CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. A subcommand selects what to do; the configuration file
//! and logging verbosity apply to every subcommand.

use clap::{Parser, Subcommand};

/// Command-line arguments for the Gridsketch diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Settings file (TOML); overrides `GRIDSKETCH_CONFIG` and `gridsketch.toml`
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a JSON scene file to text
    Render {
        /// Path to the scene file, or `-` for standard input
        input: String,

        /// Write the diagram to this file instead of standard output
        #[arg(short, long)]
        output: Option<String>,

        /// Viewport width, overriding the scene file
        #[arg(long)]
        width: Option<i32>,

        /// Viewport height, overriding the scene file
        #[arg(long)]
        height: Option<i32>,
    },

    /// List the built-in stroke, fill, anchor and border styles
    Styles {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Word-wrap text and report its size in cells
    Measure {
        /// The text to measure
        text: String,

        /// Maximum line width in cells
        #[arg(short, long, default_value_t = 80)]
        max_width: usize,

        /// Print the wrapped lines and metrics as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_arguments() {
        let args = Args::parse_from([
            "gridsketch",
            "render",
            "scene.json",
            "-o",
            "out.txt",
            "--width",
            "40",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.log_level, "debug");
        match args.command {
            Command::Render {
                input,
                output,
                width,
                height,
            } => {
                assert_eq!(input, "scene.json");
                assert_eq!(output.as_deref(), Some("out.txt"));
                assert_eq!((width, height), (Some(40), None));
            }
            other => panic!("Expected render, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["gridsketch", "measure", "some text"]);
        assert_eq!(args.log_level, "warn");
        assert!(args.config.is_none());
        assert!(matches!(
            args.command,
            Command::Measure {
                max_width: 80,
                json: false,
                ..
            }
        ));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["gridsketch"]).is_err());
    }
}
