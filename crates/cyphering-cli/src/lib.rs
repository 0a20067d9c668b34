//! CLI logic for the Cyphering model compiler.
//!
//! This module contains the core CLI logic: configuration loading, model
//! parsing and template rendering.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use cyphering::{CypheringError, ModelBuilder};

/// Run the Cyphering CLI application
///
/// This function compiles the model file with the selected template and
/// writes the Cypher text to the output file, or to stdout when no output
/// file is given. With `--list-templates` it prints the template names
/// instead.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CypheringError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Model errors
/// - Template errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), CypheringError> {
    // Load configuration
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(search_path) = &args.search_path {
        app_config = app_config.with_search_path(search_path);
    }

    let builder = ModelBuilder::new(app_config)?;

    if args.list_templates {
        let mut stdout = io::stdout().lock();
        for name in builder.template_names() {
            writeln!(stdout, "{name}")?;
        }
        return Ok(());
    }

    let (Some(model_path), Some(template)) = (&args.model, &args.template) else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "a model file and a template name are required",
        )
        .into());
    };

    info!(
        model_path,
        template,
        output_path:? = args.output;
        "Processing model"
    );

    // Read input file
    let source = fs::read_to_string(model_path)?;

    let model = builder.parse(&source)?;
    let cypher = builder.render(&model, template)?;

    match &args.output {
        Some(output_path) => {
            fs::write(output_path, cypher)?;
            info!(output_file = output_path; "Cypher exported successfully");
        }
        None => io::stdout().lock().write_all(cypher.as_bytes())?,
    }

    Ok(())
}
