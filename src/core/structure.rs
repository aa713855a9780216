//! The Kripke structure: every reachable node, its transitions, and the
//! nodes the machine can start in.

use super::edge::Edge;
use super::error::GraphError;
use super::node::Node;
use super::value::PropertyValue;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A complete graph of the states a machine can reach.
///
/// The structure is assembled in one go by the producer and never changes
/// afterwards. Position in [`nodes`](KripkeStructure::nodes) is a node's
/// display identity; `edges` and `initial_states` refer to nodes by value.
///
/// # Example
///
/// ```rust
/// use kripke_structures::core::{Edge, KripkeStructure, Node, NodeKind, VariableName};
/// use kripke_structures::{Cost, Quantity};
/// use std::collections::{BTreeMap, HashMap, HashSet};
///
/// let idle = VariableName::new("Idle").unwrap();
/// let read: Node<i64> = Node::new(NodeKind::Read, idle.clone(), true, idle.clone(), BTreeMap::new());
/// let write: Node<i64> = Node::new(NodeKind::Write, idle.clone(), false, idle, BTreeMap::new());
///
/// let cost = Cost::new(Quantity::new(5, -6), Quantity::new(2, -9));
/// let structure = KripkeStructure::new(
///     vec![read.clone(), write.clone()],
///     HashMap::from([(read.clone(), vec![Edge::new(write.clone(), cost)])]),
///     HashSet::from([read.clone()]),
/// );
///
/// assert!(structure.validate().is_ok());
/// assert_eq!(structure.index_of(&write), Some(1));
/// assert_eq!(structure.edges_from(&read).len(), 1);
/// assert!(structure.edges_from(&write).is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "", into = "StructureRepr<V>", from = "StructureRepr<V>")]
pub struct KripkeStructure<V: PropertyValue> {
    nodes: Vec<Node<V>>,
    edges: HashMap<Node<V>, Vec<Edge<V>>>,
    initial_states: HashSet<Node<V>>,
}

impl<V: PropertyValue> KripkeStructure<V> {
    /// Assemble a structure from its parts, taken verbatim.
    ///
    /// No invariants are checked here; call [`validate`](Self::validate)
    /// to check a structure from an untrusted producer.
    pub fn new(
        nodes: Vec<Node<V>>,
        edges: HashMap<Node<V>, Vec<Edge<V>>>,
        initial_states: HashSet<Node<V>>,
    ) -> Self {
        Self {
            nodes,
            edges,
            initial_states,
        }
    }

    /// Nodes in display order.
    pub fn nodes(&self) -> &[Node<V>] {
        &self.nodes
    }

    /// Outgoing edges keyed by source node. Iteration order is unspecified.
    pub fn edges(&self) -> &HashMap<Node<V>, Vec<Edge<V>>> {
        &self.edges
    }

    /// Nodes the machine can start in.
    pub fn initial_states(&self) -> &HashSet<Node<V>> {
        &self.initial_states
    }

    /// Outgoing edges of `node`, empty if it has none.
    pub fn edges_from(&self, node: &Node<V>) -> &[Edge<V>] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `node` is an initial state.
    pub fn is_initial(&self, node: &Node<V>) -> bool {
        self.initial_states.contains(node)
    }

    /// Display identity of `node`: its position in the node list.
    pub fn index_of(&self, node: &Node<V>) -> Option<usize> {
        self.nodes.iter().position(|candidate| candidate == node)
    }

    /// Total number of edges across all sources.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Check the referential invariants.
    ///
    /// Returns the first violation found, checked in this order: duplicate
    /// nodes, edge sources, edge targets (by source display identity), then
    /// initial states. Ties are broken by node ordering so the reported
    /// error is the same on every run.
    pub fn validate(&self) -> Result<(), GraphError> {
        let index = self.display_index()?;
        if let Some(source) = self
            .edges
            .keys()
            .filter(|source| !index.contains_key(source))
            .min()
        {
            return Err(GraphError::MissingEdgeSource {
                node: source.to_string(),
            });
        }
        for (source_id, node) in self.nodes.iter().enumerate() {
            for (edge, transition) in self.edges_from(node).iter().enumerate() {
                if !index.contains_key(&transition.target) {
                    return Err(GraphError::MissingEdgeTarget {
                        source_id,
                        edge,
                        node: transition.target.to_string(),
                    });
                }
            }
        }
        if let Some(missing) = self.missing_initial_state(&index) {
            return Err(GraphError::MissingInitialState {
                node: missing.to_string(),
            });
        }
        Ok(())
    }

    /// Map each node to its display identity.
    ///
    /// Fails when the same node appears twice, since it would then have two
    /// identities.
    pub(crate) fn display_index(&self) -> Result<HashMap<&Node<V>, usize>, GraphError> {
        let mut index = HashMap::with_capacity(self.nodes.len());
        for (position, node) in self.nodes.iter().enumerate() {
            if let Some(first) = index.insert(node, position) {
                return Err(GraphError::DuplicateNode {
                    first,
                    second: position,
                });
            }
        }
        Ok(index)
    }

    /// Smallest initial state that is absent from `index`, if any.
    pub(crate) fn missing_initial_state(
        &self,
        index: &HashMap<&Node<V>, usize>,
    ) -> Option<&Node<V>> {
        self.initial_states
            .iter()
            .filter(|node| !index.contains_key(node))
            .min()
    }
}

/// Serialized layout of a structure.
///
/// Node-keyed maps cannot be JSON objects, so `edges` becomes a list of
/// `{source, edges}` entries. Entries and initial states are ordered by
/// display identity, so equal structures always encode identically.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
struct StructureRepr<V: PropertyValue> {
    nodes: Vec<Node<V>>,
    edges: Vec<Transitions<V>>,
    initial_states: Vec<Node<V>>,
}

#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
struct Transitions<V: PropertyValue> {
    source: Node<V>,
    edges: Vec<Edge<V>>,
}

impl<V: PropertyValue> From<KripkeStructure<V>> for StructureRepr<V> {
    fn from(structure: KripkeStructure<V>) -> Self {
        let KripkeStructure {
            nodes,
            edges,
            initial_states,
        } = structure;

        let mut positions: HashMap<&Node<V>, usize> = HashMap::with_capacity(nodes.len());
        for (position, node) in nodes.iter().enumerate() {
            positions.entry(node).or_insert(position);
        }
        // Nodes missing from the list sort last, then by value.
        let rank = |node: &Node<V>| positions.get(node).copied().unwrap_or(usize::MAX);

        let mut edges: Vec<Transitions<V>> = edges
            .into_iter()
            .map(|(source, edges)| Transitions { source, edges })
            .collect();
        edges.sort_by(|a, b| (rank(&a.source), &a.source).cmp(&(rank(&b.source), &b.source)));

        let mut initial_states: Vec<Node<V>> = initial_states.into_iter().collect();
        initial_states.sort_by(|a, b| (rank(a), a).cmp(&(rank(b), b)));

        Self {
            nodes,
            edges,
            initial_states,
        }
    }
}

impl<V: PropertyValue> From<StructureRepr<V>> for KripkeStructure<V> {
    fn from(repr: StructureRepr<V>) -> Self {
        let mut edges: HashMap<Node<V>, Vec<Edge<V>>> = HashMap::with_capacity(repr.edges.len());
        for transitions in repr.edges {
            edges
                .entry(transitions.source)
                .or_default()
                .extend(transitions.edges);
        }
        Self {
            nodes: repr.nodes,
            edges,
            initial_states: repr.initial_states.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cost::Cost;
    use crate::core::node::{NodeKind, VariableName};
    use crate::core::value::{BitLiteral, LogicLiteral, SignalLiteral};
    use crate::quantity::Quantity;
    use std::collections::BTreeMap;

    fn name(text: &str) -> VariableName {
        VariableName::new(text).unwrap()
    }

    fn node1() -> Node<SignalLiteral> {
        Node::new(
            NodeKind::Read,
            name("Initial"),
            true,
            name("Suspended"),
            BTreeMap::from([
                (name("x"), SignalLiteral::Bit(BitLiteral::Low)),
                (name("y"), SignalLiteral::Logic(LogicLiteral::HighImpedance)),
                (name("z"), SignalLiteral::Integer(30)),
            ]),
        )
    }

    fn node2() -> Node<SignalLiteral> {
        Node::new(
            NodeKind::Write,
            name("Suspended"),
            false,
            name("Initial"),
            BTreeMap::from([
                (name("x"), SignalLiteral::Bit(BitLiteral::High)),
                (name("y"), SignalLiteral::Logic(LogicLiteral::Low)),
                (name("z"), SignalLiteral::Integer(20)),
            ]),
        )
    }

    fn stranger() -> Node<SignalLiteral> {
        Node::new(
            NodeKind::Read,
            name("Elsewhere"),
            false,
            name("Elsewhere"),
            BTreeMap::new(),
        )
    }

    fn edges() -> HashMap<Node<SignalLiteral>, Vec<Edge<SignalLiteral>>> {
        HashMap::from([
            (
                node1(),
                vec![Edge::new(
                    node2(),
                    Cost::new(Quantity::new(1, 2), Quantity::new(2, 2)),
                )],
            ),
            (
                node2(),
                vec![Edge::new(
                    node1(),
                    Cost::new(Quantity::new(3, 1), Quantity::new(4, 1)),
                )],
            ),
        ])
    }

    fn structure() -> KripkeStructure<SignalLiteral> {
        KripkeStructure::new(
            vec![node1(), node2()],
            edges(),
            HashSet::from([node1()]),
        )
    }

    #[test]
    fn new_keeps_fields_verbatim() {
        let structure = structure();
        assert_eq!(structure.nodes(), &[node1(), node2()]);
        assert_eq!(structure.edges(), &edges());
        assert_eq!(structure.initial_states(), &HashSet::from([node1()]));
        assert_eq!(structure.edge_count(), 2);
    }

    #[test]
    fn equal_parts_mean_equal_structures() {
        assert_eq!(structure(), structure());
        let other = KripkeStructure::new(vec![node2(), node1()], edges(), HashSet::from([node1()]));
        assert_ne!(structure(), other);
    }

    #[test]
    fn index_of_is_list_position() {
        let structure = structure();
        assert_eq!(structure.index_of(&node1()), Some(0));
        assert_eq!(structure.index_of(&node2()), Some(1));
        assert_eq!(structure.index_of(&stranger()), None);
        assert!(structure.is_initial(&node1()));
        assert!(!structure.is_initial(&node2()));
    }

    #[test]
    fn validate_accepts_well_formed_structure() {
        assert_eq!(structure().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_duplicate_nodes() {
        let structure = KripkeStructure::new(
            vec![node1(), node2(), node1()],
            HashMap::new(),
            HashSet::new(),
        );
        assert_eq!(
            structure.validate(),
            Err(GraphError::DuplicateNode {
                first: 0,
                second: 2
            })
        );
    }

    #[test]
    fn validate_rejects_missing_edge_target() {
        let mut edges = edges();
        edges.insert(
            node2(),
            vec![
                Edge::new(node1(), Cost::ZERO),
                Edge::new(stranger(), Cost::ZERO),
            ],
        );
        let structure = KripkeStructure::new(vec![node1(), node2()], edges, HashSet::new());
        assert_eq!(
            structure.validate(),
            Err(GraphError::MissingEdgeTarget {
                source_id: 1,
                edge: 1,
                node: stranger().to_string(),
            })
        );
    }

    #[test]
    fn validate_rejects_missing_edge_source() {
        let mut edges = edges();
        edges.insert(stranger(), vec![Edge::new(node1(), Cost::ZERO)]);
        let structure = KripkeStructure::new(vec![node1(), node2()], edges, HashSet::new());
        assert!(matches!(
            structure.validate(),
            Err(GraphError::MissingEdgeSource { .. })
        ));
    }

    #[test]
    fn validate_rejects_missing_initial_state() {
        let structure = KripkeStructure::new(
            vec![node1(), node2()],
            edges(),
            HashSet::from([stranger()]),
        );
        assert_eq!(
            structure.validate(),
            Err(GraphError::MissingInitialState {
                node: stranger().to_string(),
            })
        );
    }

    #[test]
    fn serialization_round_trips() {
        let json = serde_json::to_string(&structure()).unwrap();
        let decoded: KripkeStructure<SignalLiteral> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, structure());
    }

    #[test]
    fn serialization_orders_edges_by_display_identity() {
        let json = serde_json::to_value(structure()).unwrap();
        assert_eq!(json["edges"][0]["source"]["current_state"], "Initial");
        assert_eq!(json["edges"][1]["source"]["current_state"], "Suspended");
        assert_eq!(json["initial_states"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn equal_structures_encode_identically() {
        let first = serde_json::to_string(&structure()).unwrap();
        let second = serde_json::to_string(&structure()).unwrap();
        assert_eq!(first, second);
    }
}
