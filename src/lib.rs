//! Kripke structures for finite-state machine analysis
//!
//! A Kripke structure records every reachable execution state of a machine
//! as a node, and every possible step between them as a weighted edge. This
//! crate provides the immutable value model for such structures, an exact
//! number type for their time and energy costs, and a deterministic
//! Graphviz renderer.
//!
//! # Core Concepts
//!
//! - **Quantity**: Exact non-negative magnitude in normalised scientific notation
//! - **Cost**: Time and energy of a transition
//! - **Node** / **Edge**: Structural values describing states and transitions
//! - **KripkeStructure**: The complete graph, assembled once by a producer
//!
//! # Example
//!
//! ```rust
//! use kripke_structures::core::{
//!     BitLiteral, Edge, KripkeStructure, Node, NodeKind, SignalLiteral, VariableName,
//! };
//! use kripke_structures::{Cost, Quantity};
//! use std::collections::{BTreeMap, HashMap, HashSet};
//!
//! let name = |text: &str| VariableName::new(text).unwrap();
//! let node = |state: &str, bit| {
//!     Node::new(
//!         NodeKind::Read,
//!         name(state),
//!         true,
//!         name(state),
//!         BTreeMap::from([(name("led"), SignalLiteral::Bit(bit))]),
//!     )
//! };
//!
//! let off = node("Off", BitLiteral::Low);
//! let on = node("On", BitLiteral::High);
//! let step = Cost::new(Quantity::try_from(0.002).unwrap(), Quantity::new(3, -9));
//!
//! let structure = KripkeStructure::new(
//!     vec![off.clone(), on.clone()],
//!     HashMap::from([(off.clone(), vec![Edge::new(on.clone(), step)])]),
//!     HashSet::from([off]),
//! );
//!
//! let dot = structure.to_dot().unwrap();
//! assert!(dot.contains("\"0\" -> \"1\" [label=\"t: 2 ms, E: 3 nJ\"]"));
//! ```

pub mod checkpoint;
pub mod core;
pub mod graphviz;
pub mod quantity;

// Re-export commonly used types
pub use crate::core::{Cost, Edge, GraphError, KripkeStructure, Node, NodeKind, VariableName};
pub use graphviz::{DotOptions, GraphvizConvertible};
pub use quantity::{DisplayQuantity, Quantity, QuantityError};
