//! Cyphering - compile declarative property graph models into Cypher.
//!
//! A model document lists nodes and relationships with their attributes,
//! indexes, constraints and write mode. Cyphering expands the macro
//! references in the model, discovers dependencies between elements,
//! validates the result and renders it through handlebars templates.

pub mod config;
pub mod render;

mod error;

pub use cyphering_core::{graph, helpers, text};

pub use error::CypheringError;

use log::{debug, info, trace};

use config::AppConfig;
use graph::Model;
use render::Renderer;

/// Builder for parsing and rendering Cyphering models.
///
/// This provides an API for processing models through the parsing and
/// rendering stages.
///
/// # Examples
///
/// ```rust,no_run
/// use cyphering::{ModelBuilder, config::AppConfig};
///
/// let source = "nodes:\n  - label: Person\n    mode: merge\n";
///
/// let builder = ModelBuilder::new(AppConfig::default())
///     .expect("Failed to load templates");
///
/// // Parse source to an expanded model
/// let model = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Render the model with a built-in template
/// let cypher = builder.render(&model, "nodes.create")
///     .expect("Failed to render");
/// ```
pub struct ModelBuilder {
    renderer: Renderer,
}

impl ModelBuilder {
    /// Create a new model builder with the given configuration.
    ///
    /// Templates are loaded once here and reused for every render.
    ///
    /// # Errors
    ///
    /// Returns `CypheringError` if the template search path cannot be read
    /// or a template does not compile.
    pub fn new(config: AppConfig) -> Result<Self, CypheringError> {
        let renderer = Renderer::new(&config)?;
        Ok(Self { renderer })
    }

    /// Parse a model document into an expanded, validated model.
    ///
    /// # Errors
    ///
    /// Returns `CypheringError::Parse` carrying every diagnostic of the
    /// phase that failed, together with the source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cyphering::{ModelBuilder, config::AppConfig};
    ///
    /// let builder = ModelBuilder::new(AppConfig::default()).unwrap();
    /// let model = builder
    ///     .parse("nodes:\n  - label: Person\n    mode: merge\n")
    ///     .expect("Failed to parse model");
    ///
    /// assert!(model.get("person").is_some());
    /// ```
    pub fn parse(&self, source: &str) -> Result<Model, CypheringError> {
        info!("Parsing model");

        let model = cyphering_parser::parse(source)
            .map_err(|err| CypheringError::new_parse_error(err, source))?;

        debug!("Model parsed successfully");
        trace!(model:?; "Parsed model");

        Ok(model)
    }

    /// Render a model with the named template.
    ///
    /// # Errors
    ///
    /// Returns `CypheringError::Template` for an unknown template and
    /// `CypheringError::Render` when rendering fails.
    pub fn render(&self, model: &Model, template: &str) -> Result<String, CypheringError> {
        let output = self.renderer.render(template, model)?;
        info!(template, bytes = output.len(); "Model rendered successfully");
        Ok(output)
    }

    /// Names of every available template, sorted.
    pub fn template_names(&self) -> Vec<String> {
        self.renderer.template_names()
    }
}
