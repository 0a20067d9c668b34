//! Cyphering Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Cyphering
//! compiler crates. It includes:
//!
//! - **Graph model**: Expanded nodes, relationships and the alias table ([`graph`] module)
//! - **Helpers**: Pure functions exposed to templates ([`helpers`] module)
//! - **Text**: Small string utilities ([`text`] module)

pub mod graph;
pub mod helpers;
pub mod text;
