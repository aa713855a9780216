//! Errors for identifiers and structure invariants.

use thiserror::Error;

/// Errors that can occur when validating a [`VariableName`](super::VariableName).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Identifier is empty")]
    Empty,

    #[error("Identifier {0:?} must start with an ASCII letter")]
    InvalidStart(String),

    #[error("Identifier {name:?} contains invalid character {character:?}")]
    InvalidCharacter { name: String, character: char },

    #[error("Identifier {0:?} has a trailing or repeated underscore")]
    InvalidUnderscore(String),
}

/// Referential violations inside a Kripke structure.
///
/// These are producer errors: a well-formed structure never raises them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node {second} duplicates node {first}, so its display identity is ambiguous")]
    DuplicateNode { first: usize, second: usize },

    #[error("Edge source {node} is not in the node list")]
    MissingEdgeSource { node: String },

    #[error("Edge {edge} from node {source_id} targets {node}, which is not in the node list")]
    MissingEdgeTarget {
        source_id: usize,
        edge: usize,
        node: String,
    },

    #[error("Initial state {node} is not in the node list")]
    MissingInitialState { node: String },
}
