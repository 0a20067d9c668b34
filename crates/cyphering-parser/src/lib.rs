//! # Cyphering Parser
//!
//! Turns a YAML graph model document into an expanded, validated
//! [`Model`](cyphering_core::graph::Model).
//!
//! ## Usage
//!
//! ```
//! # use cyphering_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//! nodes:
//!   - label: Person
//!     mode: merge
//!     attr:
//!       key:
//!         name: ${entry}.name
//!   - label: Company
//!     mode: merge
//! rels:
//!   - label: WORKS_AT
//!     mode: create
//!     reltype: person -> company
//! "#;
//!
//!     let model = parse(source)?;
//!     assert_eq!(model.rels()[0].depends_on().len(), 2);
//!     Ok(())
//! }
//! ```

pub mod direction;
pub mod document;
pub mod error;
pub mod expand;
pub mod macros;
mod span;
pub mod structure;
pub mod validate;

pub use span::Span;

use log::info;

use cyphering_core::graph::Model;

use error::ParseError;

/// Parse a model document into an expanded model.
///
/// Runs the full pipeline:
///
/// 1. **Decode** - YAML into records (`E001`)
/// 2. **Check** - required fields and default aliases (`E100`)
/// 3. **Expand** - macros, dependencies and relationship expressions (`E200`)
/// 4. **Validate** - modes, alias uniqueness and dependencies (`E201`-`E203`)
///
/// # Errors
///
/// Returns a [`ParseError`] carrying every diagnostic of the first phase
/// that failed.
pub fn parse(source: &str) -> Result<Model, ParseError> {
    // Step 1: Decode
    let document = document::decode(source)?;

    // Step 2: Check structure
    let (raw, report) = structure::check(document);
    report.into_result()?;

    // Step 3: Expand
    let model = expand::expand_model(raw)?;

    // Step 4: Validate
    validate::validate_model(&model)?;

    info!(
        nodes = model.nodes().len(),
        rels = model.rels().len();
        "Model parsed successfully"
    );
    Ok(model)
}
