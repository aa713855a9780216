//! Graphviz DOT rendering of Kripke structures.
//!
//! Output is a pure function of the structure: nodes appear in list order,
//! edges are grouped by source in the same order, and nothing depends on
//! hash-map iteration. Identical structures therefore render byte-for-byte
//! identically.
//!
//! # Example
//!
//! ```rust
//! use kripke_structures::core::{Edge, KripkeStructure, Node, NodeKind, VariableName};
//! use kripke_structures::{Cost, Quantity};
//! use std::collections::{BTreeMap, HashMap, HashSet};
//!
//! let idle = VariableName::new("Idle").unwrap();
//! let node: Node<i64> = Node::new(NodeKind::Read, idle.clone(), true, idle, BTreeMap::new());
//! let cost = Cost::new(Quantity::new(2, -1), Quantity::new(5, 3));
//! let structure = KripkeStructure::new(
//!     vec![node.clone()],
//!     HashMap::from([(node.clone(), vec![Edge::new(node.clone(), cost)])]),
//!     HashSet::new(),
//! );
//!
//! let dot = structure.to_dot().unwrap();
//! assert!(dot.starts_with("digraph {\n"));
//! assert!(dot.contains("\"0\" -> \"0\" [label=\"t: 200 ms, E: 5 kJ\"]"));
//! ```

mod options;

pub use options::DotOptions;

use crate::core::{Cost, GraphError, KripkeStructure, Node, PropertyValue};
use tracing::{debug, warn};

/// Values with a Graphviz label representation.
pub trait GraphvizConvertible {
    /// The label text, ready to embed in DOT output.
    fn graphviz(&self) -> String;
}

/// Node record body.
///
/// ```text
/// \ «Read»
/// \ Initial
/// \ executeOnEntry: true,
/// \ nextState: Suspended,
/// \ x: '0'
/// ```
impl<V: PropertyValue> GraphvizConvertible for Node<V> {
    fn graphviz(&self) -> String {
        let header = format!(
            "\\ «{}»\n\\ {}\n\\ executeOnEntry: {},\n\\ nextState: {}",
            self.kind, self.current_state, self.execute_on_entry, self.next_state
        );
        if self.properties.is_empty() {
            return header;
        }
        let properties = self
            .properties
            .iter()
            .map(|(name, value)| format!("\\ {name}: {}", escape(&value.label())))
            .collect::<Vec<_>>()
            .join(",\n");
        format!("{header},\n{properties}")
    }
}

/// Quoted edge label with metric-prefixed units.
impl GraphvizConvertible for Cost {
    fn graphviz(&self) -> String {
        format!(
            "\"t: {}, E: {}\"",
            self.time.si_rescale().time_label(),
            self.energy.si_rescale().energy_label()
        )
    }
}

impl<V: PropertyValue> KripkeStructure<V> {
    /// Render as a DOT `digraph` with the default layout.
    pub fn to_dot(&self) -> Result<String, GraphError> {
        self.to_dot_with(&DotOptions::default())
    }

    /// Render as a DOT `digraph`.
    ///
    /// Each node is labelled with its position in [`nodes`](Self::nodes).
    /// Initial nodes gain a point-shaped marker with an edge into them.
    ///
    /// # Errors
    ///
    /// - [`GraphError::DuplicateNode`] if a node appears twice in the list
    /// - [`GraphError::MissingInitialState`] if an initial state is not listed
    /// - [`GraphError::MissingEdgeTarget`] if an edge leads to an unlisted node
    ///
    /// Edges whose source is not listed are skipped with a warning.
    pub fn to_dot_with(&self, options: &DotOptions) -> Result<String, GraphError> {
        let index = self.display_index()?;
        if let Some(missing) = self.missing_initial_state(&index) {
            return Err(GraphError::MissingInitialState {
                node: missing.to_string(),
            });
        }

        let mut lines = Vec::with_capacity(self.nodes().len() + self.edge_count());
        for (id, node) in self.nodes().iter().enumerate() {
            let record = format!(
                "\"{id}\" [style=rounded shape=rectangle label=\"{}\"]",
                node.graphviz()
            );
            if self.is_initial(node) {
                lines.push(format!("\"{id}-0\" [shape=point]"));
                lines.push(record);
                lines.push(format!("\"{id}-0\" -> \"{id}\""));
            } else {
                lines.push(record);
            }
        }

        for (source_id, node) in self.nodes().iter().enumerate() {
            for (edge, transition) in self.edges_from(node).iter().enumerate() {
                let target_id = index.get(&transition.target).ok_or_else(|| {
                    GraphError::MissingEdgeTarget {
                        source_id,
                        edge,
                        node: transition.target.to_string(),
                    }
                })?;
                lines.push(format!(
                    "\"{source_id}\" -> \"{target_id}\" [label={}]",
                    transition.cost.graphviz()
                ));
            }
        }

        let skipped = self
            .edges()
            .keys()
            .filter(|source| !index.contains_key(source))
            .count();
        if skipped > 0 {
            warn!(
                skipped,
                "skipping edges whose source is not in the node list"
            );
        }

        debug!(
            nodes = self.nodes().len(),
            edges = self.edge_count(),
            initial = self.initial_states().len(),
            "rendered kripke structure as graphviz"
        );
        Ok(options.wrap(&lines))
    }
}

/// Escape backslashes and double quotes so text can sit inside a quoted
/// DOT string.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
