//! Small string utilities.

/// Lower-case the first character of `value`, leaving the rest untouched.
///
/// Used to derive a default alias from a label (`Person` → `person`).
///
/// # Examples
///
/// ```
/// # use cyphering_core::text::lower_first;
/// assert_eq!(lower_first("CamelCase"), "camelCase");
/// assert_eq!(lower_first(""), "");
/// ```
pub fn lower_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
