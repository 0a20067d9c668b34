//! Semantic validation of expanded models.
//!
//! Runs after expansion over nodes followed by relationships and checks:
//!
//! - every mode is `match`, `merge` or `create` (case-insensitive)
//! - every alias is defined only once
//! - every dependency resolves through the alias table
//!
//! All violations are collected; validation never stops at the first one.

use std::collections::HashMap;

use log::debug;

use cyphering_core::graph::{Element, Model};

use crate::error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError};

/// Walks a model and collects a diagnostic for every violation.
struct ModelValidator<'a> {
    model: &'a Model,
    seen: HashMap<&'a str, &'a Element>,
    collector: DiagnosticCollector,
}

impl<'a> ModelValidator<'a> {
    fn new(model: &'a Model) -> Self {
        Self {
            model,
            seen: HashMap::new(),
            collector: DiagnosticCollector::new(),
        }
    }

    fn validate(mut self) -> Result<(), ParseError> {
        let model = self.model;
        for element in model.elements() {
            self.check_mode(element);
            self.check_alias(element);
            self.check_dependencies(element);
        }
        self.collector.finish()
    }

    fn check_mode(&mut self, element: &Element) {
        if let Err(err) = element.write_mode() {
            self.collector.emit(
                Diagnostic::error(format!("invalid mode `{}` for {element}", err.mode()))
                    .with_code(ErrorCode::E201)
                    .with_help("use one of `match`, `merge` or `create`"),
            );
        }
    }

    fn check_alias(&mut self, element: &'a Element) {
        match self.seen.get(element.alias()) {
            Some(first) => self.collector.emit(
                Diagnostic::error(format!(
                    "alias `{}` of {element} is already used by {first}",
                    element.alias()
                ))
                .with_code(ErrorCode::E203)
                .with_help("give every node and relationship its own alias"),
            ),
            None => {
                self.seen.insert(element.alias(), element);
            }
        }
    }

    fn check_dependencies(&mut self, element: &Element) {
        let table = self.model.alias_table();
        for alias in element.depends_on() {
            if !table.contains(alias) {
                self.collector.emit(
                    Diagnostic::error(format!(
                        "alias `{alias}` referenced by {element} is not defined"
                    ))
                    .with_code(ErrorCode::E202)
                    .with_help(format!(
                        "define a node or relationship with alias `{alias}`"
                    )),
                );
            }
        }
    }
}

/// Validate an expanded model.
///
/// # Errors
///
/// Returns a [`ParseError`] carrying every `E201` (invalid mode), `E202`
/// (unresolved alias) and `E203` (duplicate alias) diagnostic found.
pub fn validate_model(model: &Model) -> Result<(), ParseError> {
    debug!(elements = model.elements().count(); "Validating model");
    ModelValidator::new(model).validate()
}

#[cfg(test)]
mod tests {
    use cyphering_core::graph::{Dependencies, ElementKind};

    use super::*;

    fn node(alias: &str, mode: &str) -> Element {
        Element::new(ElementKind::Node, "Label", alias, mode)
    }

    fn depending(element: Element, aliases: &[&str]) -> Element {
        element.with_depends_on(aliases.iter().map(|a| a.to_string()).collect::<Dependencies>())
    }

    fn codes(err: &ParseError) -> Vec<ErrorCode> {
        err.diagnostics().iter().filter_map(|d| d.code()).collect()
    }

    #[test]
    fn test_valid_model() {
        let model = Model::new(
            vec![node("a", "MATCH"), depending(node("b", "merge"), &["a"])],
            vec![depending(
                Element::new(ElementKind::Relationship, "REL", "ab", "Create"),
                &["a", "b"],
            )],
        );

        assert!(validate_model(&model).is_ok());
    }

    #[test]
    fn test_empty_model() {
        assert!(validate_model(&Model::default()).is_ok());
    }

    #[test]
    fn test_invalid_mode() {
        let model = Model::new(vec![node("a", "Invalid")], vec![]);

        let err = validate_model(&model).unwrap_err();

        assert_eq!(codes(&err), vec![ErrorCode::E201]);
        assert_eq!(
            err.diagnostics()[0].message(),
            "invalid mode `Invalid` for node `a` (Label)"
        );
    }

    #[test]
    fn test_unresolved_alias() {
        let model = Model::new(vec![depending(node("a", "merge"), &["ghost"])], vec![]);

        let err = validate_model(&model).unwrap_err();

        assert_eq!(codes(&err), vec![ErrorCode::E202]);
        assert_eq!(
            err.diagnostics()[0].message(),
            "alias `ghost` referenced by node `a` (Label) is not defined"
        );
    }

    #[test]
    fn test_duplicate_alias() {
        let model = Model::new(
            vec![node("a", "merge")],
            vec![Element::new(ElementKind::Relationship, "REL", "a", "create")],
        );

        let err = validate_model(&model).unwrap_err();

        assert_eq!(codes(&err), vec![ErrorCode::E203]);
        assert_eq!(
            err.diagnostics()[0].message(),
            "alias `a` of relationship `a` (REL) is already used by node `a` (Label)"
        );
    }

    #[test]
    fn test_collects_every_violation() {
        let model = Model::new(
            vec![
                depending(node("a", "upsert"), &["x", "y"]),
                node("b", "delete"),
            ],
            vec![],
        );

        let err = validate_model(&model).unwrap_err();

        assert_eq!(
            codes(&err),
            vec![
                ErrorCode::E201,
                ErrorCode::E202,
                ErrorCode::E202,
                ErrorCode::E201,
            ]
        );
    }
}
