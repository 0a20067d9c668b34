//! Model documents as decoded from YAML.
//!
//! [`ModelDocument`] mirrors the input file: every field is optional so that
//! missing fields are reported by the structure check with element context
//! instead of failing the whole decode. Once checked, records are lowered
//! into a [`RawModel`] whose required fields are guaranteed present.

use std::fmt;

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

use cyphering_core::graph::Properties;

use crate::{
    error::{Diagnostic, ErrorCode},
    span::Span,
};

/// Top-level YAML document: lists of node and relationship records.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelDocument {
    #[serde(default)]
    pub nodes: Vec<ElementRecord>,
    #[serde(default)]
    pub rels: Vec<ElementRecord>,
}

/// One node or relationship entry, exactly as written.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElementRecord {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub reltype: Option<String>,
    #[serde(default)]
    pub attr: AttrRecord,
    #[serde(default)]
    pub index: Vec<String>,
    #[serde(default)]
    pub constraint: Vec<String>,
    #[serde(default)]
    pub custom: Vec<String>,
}

/// The `attr` block of an element record.
///
/// Attribute values are Cypher expressions and are decoded as text even
/// when YAML would type them: `limit: 10`, `weight: 1.0` or `mask: 0x10`
/// keep their spelling exactly. A value left empty (`note:`) decodes to an
/// empty string and is rejected by the structure check.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttrRecord {
    #[serde(default)]
    pub key: IndexMap<String, String>,
    #[serde(default)]
    pub on_create: IndexMap<String, String>,
    #[serde(default)]
    pub on_update: IndexMap<String, String>,
}

/// Which list of the document a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Nodes,
    Rels,
}

impl Section {
    /// The YAML key of this section.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Nodes => "nodes",
            Section::Rels => "rels",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attribute mappings of a raw element, values trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAttributes {
    pub key: Properties,
    pub on_create: Properties,
    pub on_update: Properties,
}

/// An element record whose required fields have been checked.
///
/// Values are trimmed the way the expander expects them; custom statements
/// are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawElement {
    pub label: String,
    pub alias: String,
    pub mode: String,
    pub reltype: Option<String>,
    pub attr: RawAttributes,
    pub index: Vec<String>,
    pub constraint: Vec<String>,
    pub custom: Vec<String>,
}

/// A structurally valid model that has not been expanded yet.
///
/// Consumed by [`expand_model`](crate::expand::expand_model), which is the
/// only way to obtain an expanded [`Model`](cyphering_core::graph::Model).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawModel {
    pub nodes: Vec<RawElement>,
    pub rels: Vec<RawElement>,
}

/// Decode a YAML model document.
///
/// A document holding only whitespace and comments decodes to an empty model.
///
/// # Errors
///
/// Returns an `E001` diagnostic labeled with the YAML location when the
/// text is not valid YAML or does not have the shape of a model document.
pub fn decode(source: &str) -> Result<ModelDocument, Diagnostic> {
    if is_blank(source) {
        debug!("Empty model document");
        return Ok(ModelDocument::default());
    }

    let document: ModelDocument = serde_yaml::from_str(source).map_err(|err| {
        let diagnostic = Diagnostic::error(format!("failed to decode model document: {err}"))
            .with_code(ErrorCode::E001)
            .with_help("a model document has top-level `nodes` and `rels` lists");
        match err.location() {
            Some(location) => {
                diagnostic.with_label(Span::at(location.index(), source), "invalid here")
            }
            None => diagnostic,
        }
    })?;

    debug!(
        nodes = document.nodes.len(),
        rels = document.rels.len();
        "Decoded model document"
    );
    Ok(document)
}

/// Whether the source holds nothing but whitespace and comments.
fn is_blank(source: &str) -> bool {
    source.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

/// Trim every value of an attribute mapping.
pub(crate) fn trimmed_properties(values: &IndexMap<String, String>) -> Properties {
    values
        .iter()
        .map(|(key, value)| (key.clone(), value.trim().to_string()))
        .collect()
}

/// Trim every entry of a statement list.
pub(crate) fn trimmed_statements(values: &[String]) -> Vec<String> {
    values.iter().map(|value| value.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_record() {
        let source = r#"
nodes:
  - label: Person
    alias: person
    mode: merge
    attr:
      key:
        name: "${entry}.name"
      on_create:
        created: timestamp()
    index:
      - "CREATE INDEX FOR (n:Person) ON (n.name)"
rels:
  - label: KNOWS
    alias: knows
    mode: create
    reltype: person -> friend
"#;

        let document = decode(source).unwrap();

        assert_eq!(document.nodes.len(), 1);
        assert_eq!(document.rels.len(), 1);

        let person = &document.nodes[0];
        assert_eq!(person.label.as_deref(), Some("Person"));
        assert_eq!(person.alias.as_deref(), Some("person"));
        assert_eq!(
            person.attr.key.get("name").map(String::as_str),
            Some("${entry}.name")
        );
        assert_eq!(person.index.len(), 1);
        assert!(person.custom.is_empty());

        assert_eq!(document.rels[0].reltype.as_deref(), Some("person -> friend"));
    }

    #[test]
    fn test_decode_missing_sections_default_to_empty() {
        let document = decode("nodes: []").unwrap();
        assert!(document.nodes.is_empty());
        assert!(document.rels.is_empty());

        let document = decode("").unwrap();
        assert!(document.nodes.is_empty());

        let document = decode("# nothing yet\n\n").unwrap();
        assert!(document.nodes.is_empty());
    }

    #[test]
    fn test_decode_missing_fields_are_none() {
        let document = decode("nodes:\n  - label: Person\n").unwrap();
        let record = &document.nodes[0];

        assert!(record.alias.is_none());
        assert!(record.mode.is_none());
        assert!(record.attr.key.is_empty());
    }

    #[test]
    fn test_decode_scalar_attribute_values() {
        let source = r#"
nodes:
  - label: Job
    mode: create
    attr:
      on_create:
        retries: 3
        ratio: 0.5
        active: true
        weight: 1.0
        mask: 0x10
        price: 1.50
        missing: null
        note:
"#;
        let document = decode(source).unwrap();
        let props = trimmed_properties(&document.nodes[0].attr.on_create);

        assert_eq!(props["retries"], "3");
        assert_eq!(props["ratio"], "0.5");
        assert_eq!(props["active"], "true");
        assert_eq!(props["weight"], "1.0");
        assert_eq!(props["mask"], "0x10");
        assert_eq!(props["price"], "1.50");
        assert_eq!(props["missing"], "null");
        assert_eq!(props["note"], "");
    }

    #[test]
    fn test_decode_nested_attribute_value_is_rejected() {
        let source = "nodes:\n  - label: Job\n    attr:\n      key:\n        id: [1, 2]\n";
        let diagnostic = decode(source).unwrap_err();

        assert_eq!(diagnostic.code(), Some(ErrorCode::E001));
    }

    #[test]
    fn test_decode_invalid_yaml_has_location() {
        let source = "nodes:\n  - label: [unclosed\n";
        let diagnostic = decode(source).unwrap_err();

        assert_eq!(diagnostic.code(), Some(ErrorCode::E001));
        assert_eq!(diagnostic.labels().len(), 1);
        assert!(diagnostic.labels()[0].span().end() <= source.len());
    }

    #[test]
    fn test_decode_wrong_shape() {
        let diagnostic = decode("nodes: 42").unwrap_err();
        assert_eq!(diagnostic.code(), Some(ErrorCode::E001));
    }

    #[test]
    fn test_trimmed_statements() {
        let statements = vec!["  a  ".to_string(), "b".to_string()];
        assert_eq!(trimmed_statements(&statements), vec!["a", "b"]);
    }
}
