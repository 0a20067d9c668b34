//! Graph element types for the expanded model.

use std::{collections::BTreeSet, fmt, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Property name to value mapping, kept in document order.
pub type Properties = IndexMap<String, String>;

/// Set of aliases an element refers to.
///
/// Ordered so that iteration (and therefore rendered output) is deterministic.
pub type Dependencies = BTreeSet<String>;

/// Discriminant telling nodes and relationships apart.
///
/// Serialized as `"node"` / `"relationship"` so templates can branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Node,
    Relationship,
}

impl ElementKind {
    /// Returns the lowercase name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Node => "node",
            ElementKind::Relationship => "relationship",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Write semantics of an element.
///
/// - `Match` - read-only lookup of an existing entity
/// - `Merge` - upsert
/// - `Create` - unconditional insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Match,
    Merge,
    Create,
}

impl Mode {
    /// Every legal mode, in documentation order.
    pub const ALL: [Mode; 3] = [Mode::Match, Mode::Merge, Mode::Create];

    /// Returns the canonical lowercase spelling of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Match => "match",
            Mode::Merge => "merge",
            Mode::Create => "create",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a mode string is not one of the legal modes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode `{0}`, expected one of `match`, `merge` or `create`")]
pub struct UnknownModeError(String);

impl UnknownModeError {
    /// The mode as it was written.
    pub fn mode(&self) -> &str {
        &self.0
    }
}

impl FromStr for Mode {
    type Err = UnknownModeError;

    /// Parses a mode case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "match" => Ok(Mode::Match),
            "merge" => Ok(Mode::Merge),
            "create" => Ok(Mode::Create),
            _ => Err(UnknownModeError(s.to_string())),
        }
    }
}

/// Canonical direction of a relationship.
///
/// Reversed expressions (`a <- b`) are normalized to [`Direction::Directed`]
/// with swapped endpoints, so only two directions remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// `->`
    #[serde(rename = "->")]
    Directed,
    /// `-`
    #[serde(rename = "-")]
    Undirected,
}

impl Direction {
    /// Returns the arrow token for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Directed => "->",
            Direction::Undirected => "-",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered endpoints of a relationship together with its canonical direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipEnds {
    nodes: [String; 2],
    direction: Direction,
}

impl RelationshipEnds {
    /// Create relationship ends from a source, a target and a direction.
    pub fn new(source: impl Into<String>, target: impl Into<String>, direction: Direction) -> Self {
        Self {
            nodes: [source.into(), target.into()],
            direction,
        }
    }

    /// Alias of the start node.
    pub fn source(&self) -> &str {
        &self.nodes[0]
    }

    /// Alias of the end node.
    pub fn target(&self) -> &str {
        &self.nodes[1]
    }

    /// Both endpoint aliases, start node first.
    pub fn nodes(&self) -> &[String; 2] {
        &self.nodes
    }

    /// Canonical direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// A relationship type expression as authored, plus its resolved ends.
///
/// Serializes as `{ "expression": .., "nodes": [..], "direction": ".." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipType {
    expression: String,
    #[serde(flatten)]
    ends: RelationshipEnds,
}

impl RelationshipType {
    /// Create a relationship type from the raw expression and its resolved ends.
    pub fn new(expression: impl Into<String>, ends: RelationshipEnds) -> Self {
        Self {
            expression: expression.into(),
            ends,
        }
    }

    /// The expression as written in the model document.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The resolved endpoints and direction.
    pub fn ends(&self) -> &RelationshipEnds {
        &self.ends
    }
}

/// A raw value paired with its macro-expanded form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expanded<T> {
    raw: T,
    expanded: T,
}

impl<T> Expanded<T> {
    /// Pair a raw value with its expansion.
    pub fn new(raw: T, expanded: T) -> Self {
        Self { raw, expanded }
    }

    /// The value as authored.
    pub fn raw(&self) -> &T {
        &self.raw
    }

    /// The value after macro expansion.
    pub fn expanded(&self) -> &T {
        &self.expanded
    }
}

/// The three attribute mappings of an element.
///
/// `key` holds the identifying properties, `on_create` and `on_update` the
/// values written when an entity is created or matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    key: Expanded<Properties>,
    on_create: Expanded<Properties>,
    on_update: Expanded<Properties>,
}

impl Attributes {
    /// Create a new attribute set.
    pub fn new(
        key: Expanded<Properties>,
        on_create: Expanded<Properties>,
        on_update: Expanded<Properties>,
    ) -> Self {
        Self {
            key,
            on_create,
            on_update,
        }
    }

    /// Identifying properties.
    pub fn key(&self) -> &Expanded<Properties> {
        &self.key
    }

    /// Properties set on creation.
    pub fn on_create(&self) -> &Expanded<Properties> {
        &self.on_create
    }

    /// Properties set on update.
    pub fn on_update(&self) -> &Expanded<Properties> {
        &self.on_update
    }
}

/// A node or relationship of the expanded graph model.
///
/// Elements are produced once by the model expander and are read-only
/// afterwards. The `mode` is kept as authored; use [`Element::write_mode`]
/// to interpret it.
///
/// # Examples
///
/// ```
/// # use cyphering_core::graph::{Element, ElementKind, Mode};
/// let person = Element::new(ElementKind::Node, "Person", "person", "MERGE");
///
/// assert!(person.is_node());
/// assert_eq!(person.write_mode(), Ok(Mode::Merge));
/// assert!(person.depends_on().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    kind: ElementKind,
    label: String,
    alias: String,
    mode: String,
    #[serde(default)]
    reltype: Option<RelationshipType>,
    #[serde(default)]
    attr: Attributes,
    #[serde(default)]
    index: Expanded<Vec<String>>,
    #[serde(default)]
    constraint: Expanded<Vec<String>>,
    #[serde(default)]
    custom: Expanded<Vec<String>>,
    #[serde(default)]
    depends_on: Dependencies,
}

impl Element {
    /// Create an element with no attributes, statements or dependencies.
    pub fn new(
        kind: ElementKind,
        label: impl Into<String>,
        alias: impl Into<String>,
        mode: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            label: label.into(),
            alias: alias.into(),
            mode: mode.into(),
            reltype: None,
            attr: Attributes::default(),
            index: Expanded::default(),
            constraint: Expanded::default(),
            custom: Expanded::default(),
            depends_on: Dependencies::new(),
        }
    }

    /// Set the resolved relationship type (builder style).
    pub fn with_reltype(mut self, reltype: RelationshipType) -> Self {
        self.reltype = Some(reltype);
        self
    }

    /// Set the attribute mappings (builder style).
    pub fn with_attributes(mut self, attr: Attributes) -> Self {
        self.attr = attr;
        self
    }

    /// Set the index statements (builder style).
    pub fn with_index(mut self, index: Expanded<Vec<String>>) -> Self {
        self.index = index;
        self
    }

    /// Set the constraint statements (builder style).
    pub fn with_constraint(mut self, constraint: Expanded<Vec<String>>) -> Self {
        self.constraint = constraint;
        self
    }

    /// Set the custom statements (builder style).
    pub fn with_custom(mut self, custom: Expanded<Vec<String>>) -> Self {
        self.custom = custom;
        self
    }

    /// Set the dependency set (builder style).
    pub fn with_depends_on(mut self, depends_on: Dependencies) -> Self {
        self.depends_on = depends_on;
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn is_node(&self) -> bool {
        self.kind == ElementKind::Node
    }

    pub fn is_relationship(&self) -> bool {
        self.kind == ElementKind::Relationship
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// The mode exactly as authored.
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Interpret the authored mode.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownModeError`] if the mode is not `match`, `merge` or
    /// `create` (compared case-insensitively).
    pub fn write_mode(&self) -> Result<Mode, UnknownModeError> {
        self.mode.parse()
    }

    /// Check whether this element is written with the given mode.
    pub fn has_mode(&self, mode: Mode) -> bool {
        self.write_mode() == Ok(mode)
    }

    /// The resolved relationship type, present on relationships only.
    pub fn reltype(&self) -> Option<&RelationshipType> {
        self.reltype.as_ref()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attr
    }

    pub fn index(&self) -> &Expanded<Vec<String>> {
        &self.index
    }

    pub fn constraint(&self) -> &Expanded<Vec<String>> {
        &self.constraint
    }

    pub fn custom(&self) -> &Expanded<Vec<String>> {
        &self.custom
    }

    /// Aliases this element refers to.
    pub fn depends_on(&self) -> &Dependencies {
        &self.depends_on
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}` ({})", self.kind, self.alias, self.label)
    }
}
