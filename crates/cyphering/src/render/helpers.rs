//! Template helpers.
//!
//! Each helper converts its JSON arguments into model types, calls the
//! matching function of [`cyphering_core::helpers`] and hands the result
//! back to the template as JSON. Helpers return values, so they can be used
//! both inline and as subexpressions:
//!
//! ```text
//! {{#each (cyphering_get_merge model.nodes)}} ... {{/each}}
//! {{cyphering_fmt_list alias index.expanded "." ", "}}
//! ```

use handlebars::{Handlebars, RenderError, RenderErrorReason, handlebars_helper};
use indexmap::IndexMap;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use cyphering_core::{
    graph::{Element, Mode, Model},
    helpers::{self, DEFAULT_JOINER, DEFAULT_SEPARATOR},
};

/// Names of every registered helper.
pub const HELPER_NAMES: [&str; 9] = [
    "cyphering_get_match",
    "cyphering_get_merge",
    "cyphering_get_create",
    "cyphering_fmt_list",
    "cyphering_merge_maps",
    "cyphering_get_deps",
    "cyphering_get_node",
    "to_upper",
    "to_lower",
];

handlebars_helper!(get_match: |elements: Json| with_mode(elements, Mode::Match)?);
handlebars_helper!(get_merge: |elements: Json| with_mode(elements, Mode::Merge)?);
handlebars_helper!(get_create: |elements: Json| with_mode(elements, Mode::Create)?);
handlebars_helper!(fmt_list: |*args| format_list(&args)?);
handlebars_helper!(merge_maps: |left: Json, right: Json| merge(left, right)?);
handlebars_helper!(get_deps: |elements: Json, model: Json| dependencies(elements, model)?);
handlebars_helper!(get_node: |alias: str, model: Json| lookup(alias, model)?);
handlebars_helper!(to_upper: |value: str| value.to_uppercase());
handlebars_helper!(to_lower: |value: str| value.to_lowercase());

/// Register every helper on `registry`.
pub fn register(registry: &mut Handlebars<'_>) {
    registry.register_helper("cyphering_get_match", Box::new(get_match));
    registry.register_helper("cyphering_get_merge", Box::new(get_merge));
    registry.register_helper("cyphering_get_create", Box::new(get_create));
    registry.register_helper("cyphering_fmt_list", Box::new(fmt_list));
    registry.register_helper("cyphering_merge_maps", Box::new(merge_maps));
    registry.register_helper("cyphering_get_deps", Box::new(get_deps));
    registry.register_helper("cyphering_get_node", Box::new(get_node));
    registry.register_helper("to_upper", Box::new(to_upper));
    registry.register_helper("to_lower", Box::new(to_lower));
}

fn helper_error(helper: &str, message: impl std::fmt::Display) -> RenderError {
    RenderErrorReason::Other(format!("{helper}: {message}")).into()
}

fn from_json<T: DeserializeOwned>(helper: &str, value: &Value) -> Result<T, RenderError> {
    serde_json::from_value(value.clone()).map_err(|err| helper_error(helper, err))
}

fn to_json<T: Serialize>(helper: &str, value: T) -> Result<Value, RenderError> {
    serde_json::to_value(value).map_err(|err| helper_error(helper, err))
}

/// Accept either a list of elements or a single element.
fn elements_from_json(helper: &str, value: &Value) -> Result<Vec<Element>, RenderError> {
    match value {
        Value::Object(_) => Ok(vec![from_json(helper, value)?]),
        Value::Null => Ok(Vec::new()),
        _ => from_json(helper, value),
    }
}

fn with_mode(elements: &Value, mode: Mode) -> Result<Value, RenderError> {
    let helper = match mode {
        Mode::Match => "cyphering_get_match",
        Mode::Merge => "cyphering_get_merge",
        Mode::Create => "cyphering_get_create",
    };
    let elements = elements_from_json(helper, elements)?;
    to_json(helper, helpers::elements_with_mode(&elements, mode))
}

/// Render a JSON scalar as list item text; mappings contribute their keys.
fn list_items(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .collect(),
        Value::Object(map) => map.keys().cloned().collect(),
        Value::Null => Vec::new(),
        Value::String(text) => vec![text.clone()],
        other => vec![other.to_string()],
    }
}

fn format_list(args: &[&Value]) -> Result<Value, RenderError> {
    const HELPER: &str = "cyphering_fmt_list";

    let text_arg = |index: usize, default: &'static str| -> Result<String, RenderError> {
        match args.get(index) {
            None => Ok(default.to_string()),
            Some(Value::String(text)) => Ok(text.clone()),
            Some(other) => Err(helper_error(
                HELPER,
                format!("argument {index} must be a string, got `{other}`"),
            )),
        }
    };

    let Some(items) = args.get(1) else {
        return Err(helper_error(HELPER, "expected a prefix and a list"));
    };
    let prefix = text_arg(0, "")?;
    let separator = text_arg(2, DEFAULT_SEPARATOR)?;
    let joiner = text_arg(3, DEFAULT_JOINER)?;

    Ok(Value::String(helpers::fmt_list(
        &prefix,
        &list_items(items),
        &separator,
        &joiner,
    )))
}

fn merge(left: &Value, right: &Value) -> Result<Value, RenderError> {
    const HELPER: &str = "cyphering_merge_maps";

    let left: IndexMap<String, Value> = from_json(HELPER, left)?;
    let right: IndexMap<String, Value> = from_json(HELPER, right)?;
    to_json(HELPER, helpers::merge_maps(&left, &right))
}

fn dependencies(elements: &Value, model: &Value) -> Result<Value, RenderError> {
    const HELPER: &str = "cyphering_get_deps";

    let elements = elements_from_json(HELPER, elements)?;
    let model: Model = from_json(HELPER, model)?;
    to_json(HELPER, helpers::dependencies(&elements, &model))
}

fn lookup(alias: &str, model: &Value) -> Result<Value, RenderError> {
    const HELPER: &str = "cyphering_get_node";

    let model: Model = from_json(HELPER, model)?;
    to_json(HELPER, helpers::lookup(alias, &model))
}
