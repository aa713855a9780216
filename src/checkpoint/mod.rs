//! Versioned persistence for Kripke structures.
//!
//! A [`Snapshot`] wraps a structure with a format version so that stored
//! structures can be checked before they are trusted. Snapshots encode to
//! JSON for inspection and to bincode for compact storage.

use crate::core::{KripkeStructure, PropertyValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable snapshot of a complete Kripke structure.
///
/// # Example
///
/// ```rust
/// use kripke_structures::checkpoint::Snapshot;
/// use kripke_structures::core::{KripkeStructure, Node, NodeKind, VariableName};
/// use std::collections::{BTreeMap, HashMap, HashSet};
///
/// let idle = VariableName::new("Idle").unwrap();
/// let node: Node<bool> = Node::new(NodeKind::Read, idle.clone(), true, idle, BTreeMap::new());
/// let structure = KripkeStructure::new(vec![node.clone()], HashMap::new(), HashSet::from([node]));
///
/// let json = Snapshot::new(structure.clone()).to_json().unwrap();
/// let restored = Snapshot::<bool>::from_json(&json).unwrap();
/// assert_eq!(restored.structure, structure);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Snapshot<V: PropertyValue> {
    /// Snapshot format version
    pub version: u32,

    /// The persisted structure
    pub structure: KripkeStructure<V>,
}

impl<V: PropertyValue> Snapshot<V> {
    /// Wrap a structure at the current format version.
    pub fn new(structure: KripkeStructure<V>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            structure,
        }
    }

    /// Encode as compact JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        let json = serde_json::to_string(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))?;
        debug!(bytes = json.len(), "encoded snapshot as json");
        Ok(json)
    }

    /// Encode as indented JSON for reading by hand.
    pub fn to_json_pretty(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode a JSON snapshot, checking its version and invariants.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        snapshot.verified()
    }

    /// Encode with bincode.
    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        let bytes = bincode::serialize(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))?;
        debug!(bytes = bytes.len(), "encoded snapshot as binary");
        Ok(bytes)
    }

    /// Decode a binary snapshot, checking its version and invariants.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        snapshot.verified()
    }

    fn verified(self) -> Result<Self, CheckpointError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        self.structure.validate()?;
        debug!(
            nodes = self.structure.nodes().len(),
            edges = self.structure.edge_count(),
            "decoded snapshot"
        );
        Ok(self)
    }
}
