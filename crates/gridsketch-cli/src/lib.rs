//! Gridsketch CLI library
//!
//! This module contains the command logic for the `gridsketch` binary.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};
pub use config::CONFIG_ENV;
pub use error_adapter::ErrorAdapter;

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use log::{debug, info};

use gridsketch::{
    GridsketchError, SketchBuilder, listing::StyleListing, style::Catalog, text,
};

/// Exit status for a rejected scene or settings file
pub const EXIT_INVALID_INPUT: u8 = 2;

/// Exit status for every other failure
pub const EXIT_FAILURE: u8 = 1;

/// Maps an error to the process exit status of the `gridsketch` command
pub fn exit_status(err: &GridsketchError) -> u8 {
    match err {
        GridsketchError::Json { .. } | GridsketchError::Config(_) => EXIT_INVALID_INPUT,
        GridsketchError::Io(_)
        | GridsketchError::WorkspaceNotFound(_)
        | GridsketchError::ShapeNotFound { .. } => EXIT_FAILURE,
    }
}

/// Run the Gridsketch CLI application, printing results to standard output
///
/// # Errors
///
/// Returns `GridsketchError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Invalid scene files
pub fn run(args: &Args) -> Result<(), GridsketchError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(args, &mut out)
}

/// Run the command selected by `args`, writing its output to `out`
///
/// `render` with `--output` writes the diagram to that file instead.
///
/// # Errors
///
/// Same as [`run`].
pub fn execute(args: &Args, out: &mut impl Write) -> Result<(), GridsketchError> {
    match &args.command {
        Command::Render {
            input,
            output,
            width,
            height,
        } => {
            info!(input_path = input, output_path:? = output; "Rendering scene");
            let app_config = config::load_config(args.config.as_deref().map(Path::new))?;

            let source = if input == "-" {
                io::read_to_string(io::stdin())?
            } else {
                fs::read_to_string(input)?
            };

            let builder = SketchBuilder::new(app_config);
            let scene = builder.parse_scene(&source)?;
            let mut options = scene.options();
            if let Some(width) = *width {
                options = options.with_width(width);
            }
            if let Some(height) = *height {
                options = options.with_height(height);
            }
            debug!(options:?; "Viewport options");

            let diagram = builder.render(scene.shapes(), options);
            match output {
                Some(path) => {
                    fs::write(path, format!("{diagram}\n"))?;
                    info!(output_file = path; "Diagram written successfully");
                }
                None => writeln!(out, "{diagram}")?,
            }
        }
        Command::Styles { json } => {
            let listing = StyleListing::from_catalog(Catalog::builtin());
            if *json {
                let rendered = serde_json::to_string_pretty(&listing).map_err(io::Error::from)?;
                writeln!(out, "{rendered}")?;
            } else {
                writeln!(out, "{listing}")?;
            }
        }
        Command::Measure {
            text: content,
            max_width,
            json,
        } => {
            let lines = text::wrap(content, *max_width);
            let metrics = text::measure(content, *max_width);
            debug!(width = metrics.width, height = metrics.height; "Measured text");
            if *json {
                let value = serde_json::json!({
                    "lines": lines,
                    "width": metrics.width,
                    "height": metrics.height,
                });
                writeln!(out, "{value:#}")?;
            } else {
                writeln!(out, "{}x{}", metrics.width, metrics.height)?;
                for line in &lines {
                    writeln!(out, "{line}")?;
                }
            }
        }
    }
    Ok(())
}
