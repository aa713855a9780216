//! Directed transitions between nodes.

use super::cost::Cost;
use super::node::Node;
use super::value::PropertyValue;
use serde::{Deserialize, Serialize};

/// A transition to `target`, costing `cost` to take.
///
/// The source is implied by the key the edge is stored under in a
/// [`KripkeStructure`](super::KripkeStructure). The target is held by value,
/// so an edge compares equal to any edge with a structurally equal target
/// and cost.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Edge<V: PropertyValue> {
    /// The node reached by this transition
    pub target: Node<V>,
    /// The time and energy spent taking it
    pub cost: Cost,
}

impl<V: PropertyValue> Edge<V> {
    /// Create an edge to `target` with the given cost.
    pub fn new(target: Node<V>, cost: Cost) -> Self {
        Self { target, cost }
    }
}
