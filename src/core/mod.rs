//! Core Kripke structure types.
//!
//! This module contains the immutable value model:
//! - Property values via the `PropertyValue` trait
//! - Nodes, their kinds and identifiers
//! - Edges and their costs
//! - The structure tying them together
//!
//! Everything here compares and hashes structurally. Nothing is mutated
//! after construction, so all values can be shared freely across threads.

mod cost;
mod edge;
pub mod error;
mod node;
mod structure;
mod value;

pub use cost::Cost;
pub use edge::Edge;
pub use error::{GraphError, IdentifierError};
pub use node::{Node, NodeKind, VariableName};
pub use structure::KripkeStructure;
pub use value::{BitLiteral, LogicLiteral, PropertyValue, SignalLiteral};
