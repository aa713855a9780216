//! Rendering a Kripke Structure as Graphviz
//!
//! This example builds a two-state structure for a tiny read/write machine
//! and prints it as a DOT digraph.
//!
//! Key concepts:
//! - Nodes carrying signal literals as properties
//! - Exact time and energy costs on edges
//! - Deterministic output with node positions as identifiers
//!
//! Run with: cargo run --example render_dot
//! Pipe into Graphviz: cargo run --example render_dot | dot -Tsvg > fsm.svg

use kripke_structures::core::{
    BitLiteral, Edge, KripkeStructure, LogicLiteral, Node, NodeKind, SignalLiteral, VariableName,
};
use kripke_structures::{Cost, DotOptions, Quantity};
use std::collections::{BTreeMap, HashMap, HashSet};

fn name(text: &str) -> VariableName {
    VariableName::new(text).unwrap()
}

fn main() {
    let initial = Node::new(
        NodeKind::Read,
        name("Initial"),
        true,
        name("Suspended"),
        BTreeMap::from([
            (name("x"), SignalLiteral::Bit(BitLiteral::Low)),
            (name("y"), SignalLiteral::Logic(LogicLiteral::HighImpedance)),
            (name("z"), SignalLiteral::Integer(30)),
        ]),
    );
    let suspended = Node::new(
        NodeKind::Write,
        name("Suspended"),
        false,
        name("Initial"),
        BTreeMap::from([
            (name("x"), SignalLiteral::Bit(BitLiteral::High)),
            (name("y"), SignalLiteral::Logic(LogicLiteral::Low)),
            (name("z"), SignalLiteral::Integer(20)),
        ]),
    );

    // 25 ns and 1.5 pJ for the write, 10 ns and 400 fJ for the read back
    let write = Cost::new(Quantity::new(25, -9), Quantity::new(15, -13));
    let read = Cost::new(Quantity::new(1, -8), Quantity::new(4, -13));

    let structure = KripkeStructure::new(
        vec![initial.clone(), suspended.clone()],
        HashMap::from([
            (initial.clone(), vec![Edge::new(suspended.clone(), write)]),
            (suspended, vec![Edge::new(initial.clone(), read)]),
        ]),
        HashSet::from([initial]),
    );

    structure.validate().unwrap();
    eprintln!(
        "{} nodes, {} edges, total cost of one round trip: t = {}, E = {}",
        structure.nodes().len(),
        structure.edge_count(),
        (write.time + read.time).si_rescale().time_label(),
        (write.energy + read.energy).si_rescale().energy_label(),
    );

    let options = DotOptions::new().graph_name("read_write");
    println!("{}", structure.to_dot_with(&options).unwrap());
}
