//! Template rendering of expanded models.
//!
//! The [`Renderer`] owns a handlebars registry holding the built-in
//! templates, any templates found in the configured search path and the
//! helper set. Templates receive the model as `{"model": ...}`.

mod builtin;
mod clean;
mod helpers;

pub use builtin::builtin_names;
pub use clean::render_clean;
pub use helpers::HELPER_NAMES;

use std::{fs, path::Path};

use handlebars::Handlebars;
use log::{debug, info, trace};
use serde::Serialize;

use cyphering_core::graph::Model;

use crate::{config::AppConfig, error::CypheringError};

/// Data handed to every template.
#[derive(Serialize)]
struct TemplateData<'a> {
    model: &'a Model,
}

/// Renders models with a fixed set of templates and helpers.
pub struct Renderer {
    registry: Handlebars<'static>,
    clean_blank_lines: bool,
}

impl Renderer {
    /// Build a renderer from configuration.
    ///
    /// Built-in templates are registered first; templates from the search
    /// path replace built-ins of the same name.
    ///
    /// # Errors
    ///
    /// Returns [`CypheringError::Io`] when the search path cannot be read and
    /// [`CypheringError::Template`] when a template does not compile.
    pub fn new(config: &AppConfig) -> Result<Self, CypheringError> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(config.render().strict());
        helpers::register(&mut registry);

        for (name, source) in builtin::BUILTIN_TEMPLATES {
            registry.register_template_string(name, source)?;
        }
        debug!(count = builtin::BUILTIN_TEMPLATES.len(); "Registered built-in templates");

        if let Some(search_path) = config.templates().search_path() {
            register_directory(&mut registry, search_path, config.templates().extension())?;
        }

        Ok(Self {
            registry,
            clean_blank_lines: config.render().clean_blank_lines(),
        })
    }

    /// Check whether a template with this name is registered.
    pub fn has_template(&self, name: &str) -> bool {
        self.registry.has_template(name)
    }

    /// Names of every registered template, sorted.
    pub fn template_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.registry.get_templates().keys().cloned().collect();
        names.sort();
        names
    }

    /// Render `model` with the named template.
    ///
    /// # Errors
    ///
    /// Returns [`CypheringError::Template`] for an unknown template and
    /// [`CypheringError::Render`] when rendering fails.
    pub fn render(&self, name: &str, model: &Model) -> Result<String, CypheringError> {
        if !self.has_template(name) {
            return Err(CypheringError::Template(format!(
                "unknown template `{name}`"
            )));
        }

        info!(template = name; "Rendering model");
        let rendered = self.registry.render(name, &TemplateData { model })?;
        trace!(rendered = rendered.as_str(); "Rendered template");

        Ok(if self.clean_blank_lines {
            render_clean(&rendered)
        } else {
            rendered
        })
    }
}

/// Register every `*.{extension}` file directly inside `dir`.
fn register_directory(
    registry: &mut Handlebars<'static>,
    dir: &Path,
    extension: &str,
) -> Result<(), CypheringError> {
    let suffix = format!(".{extension}");
    let mut count = 0;

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_suffix(&suffix))
        else {
            continue;
        };

        let source = fs::read_to_string(&path)?;
        registry
            .register_template_string(name, source)
            .map_err(|err| {
                CypheringError::Template(format!("{}: {err}", path.display()))
            })?;
        debug!(name, path:? = path; "Registered template");
        count += 1;
    }

    info!(count, dir:? = dir; "Loaded templates from search path");
    Ok(())
}
