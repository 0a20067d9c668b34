//! Configuration types for Cyphering rendering.
//!
//! This module provides configuration structures that control where
//! templates are found and how rendered output is post-processed. All types
//! implement [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining template and render settings.
//! - [`TemplateConfig`] - Controls the template search path and file extension.
//! - [`RenderConfig`] - Controls output cleanup and strict rendering.
//!
//! # Example
//!
//! ```
//! # use cyphering::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.templates().search_path().is_none());
//! assert!(config.render().clean_blank_lines());
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default file extension of templates in the search path.
pub const DEFAULT_TEMPLATE_EXTENSION: &str = "hbs";

/// Top-level application configuration combining template and render settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Template configuration section.
    #[serde(default)]
    templates: TemplateConfig,

    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified template and render configurations.
    pub fn new(templates: TemplateConfig, render: RenderConfig) -> Self {
        Self { templates, render }
    }

    /// Returns the template configuration.
    pub fn templates(&self) -> &TemplateConfig {
        &self.templates
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Replace the template search path (builder style).
    ///
    /// Used by callers whose command-line flags override the file.
    pub fn with_search_path(mut self, search_path: impl Into<PathBuf>) -> Self {
        self.templates.search_path = Some(search_path.into());
        self
    }
}

/// Where user templates are loaded from.
///
/// Templates in the search path are registered under their file name
/// without the extension (`nodes.create.hbs` → `nodes.create`) and take
/// precedence over built-in templates of the same name.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    /// Directory of user templates. Only built-in templates are available when unset.
    #[serde(default)]
    search_path: Option<PathBuf>,

    /// File extension of templates in the search path, without the dot.
    #[serde(default = "default_extension")]
    extension: String,
}

impl TemplateConfig {
    /// Creates a new [`TemplateConfig`].
    pub fn new(search_path: Option<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            search_path,
            extension: extension.into(),
        }
    }

    /// Returns the template search path, if configured.
    pub fn search_path(&self) -> Option<&Path> {
        self.search_path.as_deref()
    }

    /// Returns the template file extension.
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            search_path: None,
            extension: default_extension(),
        }
    }
}

fn default_extension() -> String {
    DEFAULT_TEMPLATE_EXTENSION.to_string()
}

/// Rendering behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Collapse runs of blank lines in rendered output.
    #[serde(default = "default_true")]
    clean_blank_lines: bool,

    /// Fail on templates that reference missing fields.
    #[serde(default)]
    strict: bool,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`].
    pub fn new(clean_blank_lines: bool, strict: bool) -> Self {
        Self {
            clean_blank_lines,
            strict,
        }
    }

    /// Returns whether blank line runs are collapsed.
    pub fn clean_blank_lines(&self) -> bool {
        self.clean_blank_lines
    }

    /// Returns whether templates are rendered in strict mode.
    pub fn strict(&self) -> bool {
        self.strict
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clean_blank_lines: true,
            strict: false,
        }
    }
}

fn default_true() -> bool {
    true
}
