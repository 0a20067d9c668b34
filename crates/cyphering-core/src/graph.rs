//! Graph model types.
//!
//! This module contains the expanded representation of a graph model, the
//! form produced by the parser crate after macro expansion and consumed by
//! the template renderer.
//!
//! # Pipeline Position
//!
//! ```text
//! YAML Text
//!     ↓ decode
//! Model Document - raw records, strings as authored
//!     ↓ structure check + expand
//! Graph Model (these types) - expanded values, dependency sets, alias table
//!     ↓ validate
//! Validated Graph Model
//!     ↓ render
//! Cypher statements
//! ```
//!
//! # Organization
//!
//! - [`element`] - Graph elements: [`Element`], [`ElementKind`], [`Mode`], [`Direction`], etc.
//! - [`model`] - The [`Model`] root and its [`AliasTable`]

pub mod element;
pub mod model;

pub use element::*;
pub use model::*;
