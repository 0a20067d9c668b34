//! The graph model root and its alias lookup table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::graph::element::Element;

/// Lookup table from alias to element.
///
/// Built once from the expanded elements and never mutated afterwards.
/// When two elements share an alias the later one wins; alias uniqueness
/// is checked separately by the parser's validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTable(IndexMap<String, Element>);

impl AliasTable {
    /// Build the table from elements, keyed by alias.
    pub fn from_elements<'a>(elements: impl IntoIterator<Item = &'a Element>) -> Self {
        Self(
            elements
                .into_iter()
                .map(|element| (element.alias().to_string(), element.clone()))
                .collect(),
        )
    }

    /// Look up an element by alias.
    pub fn get(&self, alias: &str) -> Option<&Element> {
        self.0.get(alias)
    }

    /// Check whether an alias is known.
    pub fn contains(&self, alias: &str) -> bool {
        self.0.contains_key(alias)
    }

    /// Iterate over the known aliases in insertion order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// An expanded graph model: nodes, relationships and the alias table.
///
/// A `Model` is the output of expansion. It can only be created from
/// already-expanded elements, so a model is never expanded twice.
///
/// # Examples
///
/// ```
/// # use cyphering_core::graph::{Element, ElementKind, Model};
/// let model = Model::new(
///     vec![Element::new(ElementKind::Node, "Person", "person", "merge")],
///     vec![],
/// );
///
/// assert_eq!(model.get("person").map(|e| e.label()), Some("Person"));
/// assert!(model.get("company").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    nodes: Vec<Element>,
    rels: Vec<Element>,
    alias_map: AliasTable,
}

impl Model {
    /// Create a model from expanded nodes and relationships.
    ///
    /// The alias table is built here, after every element is expanded.
    pub fn new(nodes: Vec<Element>, rels: Vec<Element>) -> Self {
        let alias_map = AliasTable::from_elements(nodes.iter().chain(rels.iter()));
        Self {
            nodes,
            rels,
            alias_map,
        }
    }

    pub fn nodes(&self) -> &[Element] {
        &self.nodes
    }

    pub fn rels(&self) -> &[Element] {
        &self.rels
    }

    pub fn alias_table(&self) -> &AliasTable {
        &self.alias_map
    }

    /// Iterate over all nodes followed by all relationships.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.nodes.iter().chain(self.rels.iter())
    }

    /// Look up an element by alias.
    pub fn get(&self, alias: &str) -> Option<&Element> {
        self.alias_map.get(alias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ElementKind;

    fn node(alias: &str) -> Element {
        Element::new(ElementKind::Node, "Label", alias, "merge")
    }

    fn rel(alias: &str) -> Element {
        Element::new(ElementKind::Relationship, "REL", alias, "create")
    }

    #[test]
    fn test_model_builds_alias_table_from_nodes_and_rels() {
        let model = Model::new(vec![node("a"), node("b")], vec![rel("ab")]);

        assert_eq!(model.alias_table().len(), 3);
        assert!(model.alias_table().contains("a"));
        assert!(model.alias_table().contains("ab"));
        assert_eq!(
            model.alias_table().aliases().collect::<Vec<_>>(),
            vec!["a", "b", "ab"]
        );
    }

    #[test]
    fn test_model_elements_order() {
        let model = Model::new(vec![node("a")], vec![rel("r"), rel("s")]);

        let aliases: Vec<_> = model.elements().map(Element::alias).collect();
        assert_eq!(aliases, vec!["a", "r", "s"]);
    }

    #[test]
    fn test_alias_table_later_duplicate_wins() {
        let first = Element::new(ElementKind::Node, "First", "dup", "merge");
        let second = Element::new(ElementKind::Node, "Second", "dup", "merge");

        let table = AliasTable::from_elements([&first, &second]);

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("dup").map(Element::label), Some("Second"));
    }

    #[test]
    fn test_empty_model() {
        let model = Model::default();
        assert!(model.alias_table().is_empty());
        assert_eq!(model.elements().count(), 0);
    }

    #[test]
    fn test_model_serializes_alias_map() {
        let model = Model::new(vec![node("a")], vec![]);
        let value = serde_json::to_value(&model).unwrap();

        assert_eq!(value["alias_map"]["a"]["alias"], "a");
        assert_eq!(value["nodes"][0]["kind"], "node");
        assert!(value["rels"].as_array().unwrap().is_empty());
    }
}
