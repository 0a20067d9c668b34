//! Command-line argument definitions for the Cyphering CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the model and template, control output
//! and template locations, configuration file selection, and logging
//! verbosity.

use clap::Parser;

/// Command-line arguments for the Cyphering model compiler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input model file (YAML)
    #[arg(required_unless_present = "list_templates")]
    pub model: Option<String>,

    /// Name of the template to render, e.g. `nodes.create`
    #[arg(short, long, required_unless_present = "list_templates")]
    pub template: Option<String>,

    /// Path to the output file; rendered text goes to stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Directory of additional templates, overriding the configuration file
    #[arg(long)]
    pub search_path: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print the names of the available templates and exit
    #[arg(long)]
    pub list_templates: bool,
}
