//! Element and model expansion.
//!
//! Expansion turns a [`RawModel`] into an expanded [`Model`]: every macro
//! reference is resolved, dependencies are discovered and relationship
//! expressions are normalized. The raw model is consumed, so a model can
//! only ever be expanded once.

use log::{debug, info, trace};

use cyphering_core::graph::{
    Attributes, Dependencies, Element, ElementKind, Expanded, Model, Properties, RelationshipType,
};

use crate::{
    direction::{self, InvalidExpression},
    document::{RawElement, RawModel},
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    macros::{expand_list, expand_map},
};

/// Expands the fields shared by nodes and relationships.
///
/// The element's own alias is the self-reference value; dependencies found
/// in any field accumulate in one set.
struct ElementExpansion<'a> {
    raw: &'a RawElement,
    dependencies: Dependencies,
}

impl<'a> ElementExpansion<'a> {
    fn new(raw: &'a RawElement) -> Self {
        Self {
            raw,
            dependencies: Dependencies::new(),
        }
    }

    fn self_reference(&self) -> &'a str {
        &self.raw.alias
    }

    fn properties(&mut self, values: &Properties) -> Expanded<Properties> {
        let expanded = expand_map(values, self.self_reference(), &mut self.dependencies);
        Expanded::new(values.clone(), expanded)
    }

    fn statements(&mut self, values: &[String]) -> Expanded<Vec<String>> {
        let expanded = expand_list(values, self.self_reference(), &mut self.dependencies);
        Expanded::new(values.to_vec(), expanded)
    }

    /// Expand the shared fields into an element of the given kind.
    fn expand(mut self, kind: ElementKind) -> (Element, Dependencies) {
        let raw = self.raw;
        let attributes = Attributes::new(
            self.properties(&raw.attr.key),
            self.properties(&raw.attr.on_create),
            self.properties(&raw.attr.on_update),
        );
        let index = self.statements(&raw.index);
        let constraint = self.statements(&raw.constraint);
        let custom = self.statements(&raw.custom);

        let element = Element::new(kind, &raw.label, &raw.alias, &raw.mode)
            .with_attributes(attributes)
            .with_index(index)
            .with_constraint(constraint)
            .with_custom(custom);
        (element, self.dependencies)
    }
}

/// Expand a node record.
pub fn expand_node(raw: &RawElement) -> Element {
    let (element, dependencies) = ElementExpansion::new(raw).expand(ElementKind::Node);
    debug!(alias = raw.alias.as_str(), deps = dependencies.len(); "Expanded node");
    element.with_depends_on(dependencies)
}

/// Expand a relationship record.
///
/// The relationship expression is macro-expanded like a one-entry list,
/// trimmed and normalized; both endpoints become dependencies.
///
/// # Errors
///
/// Returns [`InvalidExpression`] when the expanded expression is not a
/// valid relationship expression, or when the record has no expression.
pub fn expand_relationship(raw: &RawElement) -> Result<Element, InvalidExpression> {
    let mut expansion = ElementExpansion::new(raw);
    let expression = raw.reltype.as_deref().unwrap_or_default();

    let expanded = expansion.statements(&[expression.to_string()]);
    let resolved = expanded
        .expanded()
        .first()
        .map(|value| value.trim())
        .unwrap_or_default();
    let ends = direction::normalize(resolved)?;

    let (element, mut dependencies) = expansion.expand(ElementKind::Relationship);
    dependencies.extend(ends.nodes().iter().cloned());

    debug!(
        alias = raw.alias.as_str(),
        source = ends.source(),
        target = ends.target(),
        direction = ends.direction().as_str();
        "Expanded relationship"
    );
    Ok(element
        .with_reltype(RelationshipType::new(expression, ends))
        .with_depends_on(dependencies))
}

/// Expand every node, then every relationship, then build the alias table.
///
/// # Errors
///
/// Returns a [`ParseError`] with one `E200` diagnostic per relationship
/// whose expression is invalid.
pub fn expand_model(raw: RawModel) -> Result<Model, ParseError> {
    info!(nodes = raw.nodes.len(), rels = raw.rels.len(); "Expanding model");

    let nodes: Vec<Element> = raw.nodes.iter().map(expand_node).collect();

    let mut collector = DiagnosticCollector::new();
    let mut rels = Vec::with_capacity(raw.rels.len());
    for record in &raw.rels {
        match expand_relationship(record) {
            Ok(element) => rels.push(element),
            Err(err) => collector.emit(
                Diagnostic::error(format!(
                    "invalid relationship type for relationship `{}` ({}): {err}",
                    record.alias, record.label
                ))
                .with_code(ErrorCode::E200)
                .with_help("write the endpoints as `A -> B`, `A - B` or `A <- B`"),
            ),
        }
    }
    collector.finish()?;

    let model = Model::new(nodes, rels);
    trace!(model:?; "Expanded model");
    Ok(model)
}
