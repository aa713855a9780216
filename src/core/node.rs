//! Nodes of a Kripke structure and the identifiers that label them.

use super::error::IdentifierError;
use super::value::PropertyValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The phase of the ringlet a node was captured in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Inputs have been sampled; the state is about to execute
    Read,
    /// The state has executed and is about to write its outputs
    Write,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("Read"),
            Self::Write => f.write_str("Write"),
        }
    }
}

/// A validated identifier for machine states and properties.
///
/// Identifiers start with an ASCII letter, continue with ASCII letters,
/// digits or single underscores, and do not end with an underscore.
///
/// ```rust
/// use kripke_structures::core::VariableName;
///
/// let name = VariableName::new("Suspended").unwrap();
/// assert_eq!(name.as_str(), "Suspended");
/// assert!(VariableName::new("2fast").is_err());
/// assert!(VariableName::new("a__b").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VariableName(String);

impl VariableName {
    /// Validate and wrap an identifier.
    pub fn new(name: impl Into<String>) -> Result<Self, IdentifierError> {
        let name = name.into();
        let Some(first) = name.chars().next() else {
            return Err(IdentifierError::Empty);
        };
        if !first.is_ascii_alphabetic() {
            return Err(IdentifierError::InvalidStart(name));
        }
        let invalid = name
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '_');
        if let Some(character) = invalid {
            return Err(IdentifierError::InvalidCharacter { name, character });
        }
        if name.ends_with('_') || name.contains("__") {
            return Err(IdentifierError::InvalidUnderscore(name));
        }
        Ok(Self(name))
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for VariableName {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for VariableName {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for VariableName {
    type Error = IdentifierError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VariableName> for String {
    fn from(name: VariableName) -> Self {
        name.0
    }
}

/// One reachable state of the machine.
///
/// Nodes are plain values: two nodes with identical fields are
/// interchangeable and collide in any hash-based collection. Properties live
/// in a `BTreeMap`, so insertion order never affects equality and the
/// display order is always sorted by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Node<V: PropertyValue> {
    /// Ringlet phase of the node
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// The state the machine is in while this node is active
    pub current_state: VariableName,
    /// Whether the OnEntry action runs in this ringlet
    pub execute_on_entry: bool,
    /// The state scheduled to run next
    pub next_state: VariableName,
    /// Variable values visible to the machine in this node
    pub properties: BTreeMap<VariableName, V>,
}

impl<V: PropertyValue> Node<V> {
    /// Create a node from its parts.
    pub fn new(
        kind: NodeKind,
        current_state: VariableName,
        execute_on_entry: bool,
        next_state: VariableName,
        properties: BTreeMap<VariableName, V>,
    ) -> Self {
        Self {
            kind,
            current_state,
            execute_on_entry,
            next_state,
            properties,
        }
    }
}

/// Short summary used in logs and error messages.
impl<V: PropertyValue> fmt::Display for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (next: {}, {} properties)",
            self.kind,
            self.current_state,
            self.next_state,
            self.properties.len()
        )
    }
}
