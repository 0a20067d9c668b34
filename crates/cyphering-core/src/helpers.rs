//! Pure helper functions exposed to templates.
//!
//! Every function here works on the expanded [`Model`] or its elements and
//! has no hidden state: anything that needs the alias table takes the model
//! as an explicit argument. The renderer registers thin adapters around
//! these under the names templates use:
//!
//! | template name          | function |
//! |------------------------|----------|
//! | `cyphering_get_match`  | [`elements_with_mode`] with [`Mode::Match`] |
//! | `cyphering_get_merge`  | [`elements_with_mode`] with [`Mode::Merge`] |
//! | `cyphering_get_create` | [`elements_with_mode`] with [`Mode::Create`] |
//! | `cyphering_fmt_list`   | [`fmt_list`] |
//! | `cyphering_merge_maps` | [`merge_maps`] |
//! | `cyphering_get_deps`   | [`dependencies`] |
//! | `cyphering_get_node`   | [`lookup`] |

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::graph::{Element, Mode, Model};

/// Default separator placed between prefix and item by [`fmt_list`].
pub const DEFAULT_SEPARATOR: &str = ".";

/// Default joiner placed between formatted items by [`fmt_list`].
pub const DEFAULT_JOINER: &str = ",";

/// Select the elements written with `mode`.
///
/// Elements whose mode is not legal are never selected.
pub fn elements_with_mode<'a>(
    elements: impl IntoIterator<Item = &'a Element>,
    mode: Mode,
) -> Vec<&'a Element> {
    elements
        .into_iter()
        .filter(|element| element.has_mode(mode))
        .collect()
}

/// Prefix every item and join the results.
///
/// Each item becomes `prefix + separator + item`, and the formatted items
/// are joined with `joiner`.
///
/// # Examples
///
/// ```
/// # use cyphering_core::helpers::fmt_list;
/// assert_eq!(fmt_list("n", &["name", "age"], ".", ", "), "n.name, n.age");
/// assert_eq!(fmt_list("n", &[] as &[&str], ".", ", "), "");
/// ```
pub fn fmt_list<S: AsRef<str>>(prefix: &str, items: &[S], separator: &str, joiner: &str) -> String {
    items
        .iter()
        .map(|item| format!("{prefix}{separator}{}", item.as_ref()))
        .collect::<Vec<_>>()
        .join(joiner)
}

/// Union of two mappings; values from `right` win on key collisions.
///
/// Keys keep the order they first appear in, `left` before `right`.
pub fn merge_maps<V: Clone>(
    left: &IndexMap<String, V>,
    right: &IndexMap<String, V>,
) -> IndexMap<String, V> {
    let mut merged = left.clone();
    for (key, value) in right {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Collect the elements that `elements` depend on.
///
/// The dependency sets are merged, resolved through the model's alias table
/// and returned sorted by alias. Aliases missing from the table are skipped.
pub fn dependencies<'m>(
    elements: impl IntoIterator<Item = &'m Element>,
    model: &'m Model,
) -> Vec<&'m Element> {
    let aliases: BTreeSet<&str> = elements
        .into_iter()
        .flat_map(|element| element.depends_on().iter().map(String::as_str))
        .collect();

    aliases
        .into_iter()
        .filter_map(|alias| model.get(alias))
        .collect()
}

/// Look up an element by alias.
pub fn lookup<'m>(alias: &str, model: &'m Model) -> Option<&'m Element> {
    model.get(alias)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Dependencies, ElementKind};

    fn element(alias: &str, mode: &str) -> Element {
        Element::new(ElementKind::Node, "Label", alias, mode)
    }

    fn depending(alias: &str, deps: &[&str]) -> Element {
        element(alias, "create").with_depends_on(deps.iter().map(|d| d.to_string()).collect())
    }

    #[test]
    fn test_elements_with_mode() {
        let elements = vec![
            element("a", "match"),
            element("b", "MERGE"),
            element("c", "Match"),
            element("d", "create"),
            element("e", "bogus"),
        ];

        let matched: Vec<_> = elements_with_mode(&elements, Mode::Match)
            .into_iter()
            .map(Element::alias)
            .collect();
        assert_eq!(matched, vec!["a", "c"]);

        assert_eq!(elements_with_mode(&elements, Mode::Merge).len(), 1);
        assert_eq!(elements_with_mode(&elements, Mode::Create).len(), 1);
    }

    #[test]
    fn test_fmt_list() {
        assert_eq!(
            fmt_list("p", &["name", "age"], DEFAULT_SEPARATOR, DEFAULT_JOINER),
            "p.name,p.age"
        );
        assert_eq!(fmt_list("", &["x"], "", " AND "), "x");
        assert_eq!(fmt_list("p", &["a", "b", "c"], ":", " | "), "p:a | p:b | p:c");
    }

    #[test]
    fn test_merge_maps_right_wins() {
        let mut left = IndexMap::new();
        left.insert("a".to_string(), 1);
        left.insert("b".to_string(), 2);
        let mut right = IndexMap::new();
        right.insert("b".to_string(), 20);
        right.insert("c".to_string(), 30);

        let merged = merge_maps(&left, &right);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged["a"], 1);
        assert_eq!(merged["b"], 20);
        assert_eq!(merged["c"], 30);
        assert_eq!(merged.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_dependencies_sorted_and_deduplicated() {
        let model = Model::new(
            vec![element("b", "match"), element("a", "match")],
            vec![depending("r1", &["b", "a"]), depending("r2", &["a"])],
        );

        let deps: Vec<_> = dependencies(model.rels(), &model)
            .into_iter()
            .map(Element::alias)
            .collect();

        assert_eq!(deps, vec!["a", "b"]);
    }

    #[test]
    fn test_dependencies_skip_unknown_aliases() {
        let model = Model::new(vec![element("a", "match")], vec![depending("r", &["a", "ghost"])]);

        let deps = dependencies(model.rels(), &model);

        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].alias(), "a");
    }

    #[test]
    fn test_dependencies_of_nothing() {
        let model = Model::new(vec![element("a", "match")], vec![]);
        assert!(dependencies(model.nodes(), &model).is_empty());
        assert!(dependencies(std::iter::empty(), &model).is_empty());
    }

    #[test]
    fn test_lookup() {
        let model = Model::new(vec![element("a", "match")], vec![]);

        assert_eq!(lookup("a", &model).map(Element::alias), Some("a"));
        assert!(lookup("missing", &model).is_none());
    }

    #[test]
    fn test_depending_builds_set() {
        let e = depending("x", &["b", "a", "b"]);
        assert_eq!(
            e.depends_on(),
            &Dependencies::from(["a".to_string(), "b".to_string()])
        );
    }
}
