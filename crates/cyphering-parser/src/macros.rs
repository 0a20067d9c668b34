//! Macro expansion of `${name}` references.
//!
//! Raw attribute values and statements may refer to elements by alias with
//! `${alias}`. Two names are reserved:
//!
//! - `${this}` expands to the alias of the element being expanded
//! - `${entry}` expands to the literal `entry`, the per-row variable used
//!   by the templates
//!
//! Every other name expands to itself and is recorded as a dependency of
//! the element. Each occurrence is resolved exactly once; substituted text
//! is never scanned again.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use cyphering_core::graph::{Dependencies, Properties};

/// Matches `${identifier}` where identifier is zero or more word characters.
static MACRO_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{(\w*)\}").expect("macro pattern is valid"));

/// Reserved name for the element's own alias.
pub const SELF_REFERENCE: &str = "this";

/// Reserved name for the per-row variable.
pub const ENTRY_REFERENCE: &str = "entry";

/// Result of expanding one string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacroExpansion {
    pub text: String,
    pub dependencies: Dependencies,
}

/// Expand every macro reference in `value`.
///
/// # Examples
///
/// ```
/// # use cyphering_parser::macros::expand_str;
/// let expansion = expand_str("${this}.name = ${company}.name", "person");
///
/// assert_eq!(expansion.text, "person.name = company.name");
/// assert!(expansion.dependencies.contains("company"));
/// assert_eq!(expansion.dependencies.len(), 1);
/// ```
pub fn expand_str(value: &str, self_reference: &str) -> MacroExpansion {
    let mut dependencies = Dependencies::new();
    let text = MACRO_PATTERN
        .replace_all(value, |caps: &Captures<'_>| {
            let name = caps.get(1).map_or("", |m| m.as_str());
            match name {
                SELF_REFERENCE => self_reference.to_string(),
                ENTRY_REFERENCE => ENTRY_REFERENCE.to_string(),
                other => {
                    dependencies.insert(other.to_string());
                    other.to_string()
                }
            }
        })
        .into_owned();

    MacroExpansion { text, dependencies }
}

/// Expand every value of a property mapping; keys are left untouched.
///
/// Discovered dependencies are merged into `dependencies`.
pub fn expand_map(
    values: &Properties,
    self_reference: &str,
    dependencies: &mut Dependencies,
) -> Properties {
    values
        .iter()
        .map(|(key, value)| {
            let expansion = expand_str(value, self_reference);
            dependencies.extend(expansion.dependencies);
            (key.clone(), expansion.text)
        })
        .collect()
}

/// Expand every entry of a statement list, keeping order.
///
/// Discovered dependencies are merged into `dependencies`.
pub fn expand_list(
    values: &[String],
    self_reference: &str,
    dependencies: &mut Dependencies,
) -> Vec<String> {
    values
        .iter()
        .map(|value| {
            let expansion = expand_str(value, self_reference);
            dependencies.extend(expansion.dependencies);
            expansion.text
        })
        .collect()
}
