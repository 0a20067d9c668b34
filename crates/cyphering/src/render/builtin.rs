//! Templates shipped with Cyphering.

/// Built-in templates as `(name, source)` pairs.
pub const BUILTIN_TEMPLATES: [(&str, &str); 7] = [
    (
        "nodes.create",
        include_str!("../../templates/nodes.create.hbs"),
    ),
    ("nodes.drop", include_str!("../../templates/nodes.drop.hbs")),
    (
        "nodes.index.create",
        include_str!("../../templates/nodes.index.create.hbs"),
    ),
    (
        "nodes.index.drop",
        include_str!("../../templates/nodes.index.drop.hbs"),
    ),
    (
        "nodes.constraint.create",
        include_str!("../../templates/nodes.constraint.create.hbs"),
    ),
    (
        "nodes.constraint.drop",
        include_str!("../../templates/nodes.constraint.drop.hbs"),
    ),
    ("rels.create", include_str!("../../templates/rels.create.hbs")),
];

/// Names of the built-in templates.
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_TEMPLATES.iter().map(|(name, _)| *name)
}
