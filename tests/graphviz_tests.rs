//! End-to-end rendering of complete structures.

use kripke_structures::core::{
    BitLiteral, Edge, KripkeStructure, LogicLiteral, Node, NodeKind, SignalLiteral, VariableName,
};
use kripke_structures::{Cost, DotOptions, GraphError, Quantity};
use std::collections::{BTreeMap, HashMap, HashSet};

fn name(text: &str) -> VariableName {
    VariableName::new(text).unwrap()
}

fn properties(
    x: BitLiteral,
    y: LogicLiteral,
    z: i64,
) -> BTreeMap<VariableName, SignalLiteral> {
    BTreeMap::from([
        (name("x"), SignalLiteral::Bit(x)),
        (name("y"), SignalLiteral::Logic(y)),
        (name("z"), SignalLiteral::Integer(z)),
    ])
}

fn initial_node() -> Node<SignalLiteral> {
    Node::new(
        NodeKind::Read,
        name("Initial"),
        true,
        name("Suspended"),
        properties(BitLiteral::Low, LogicLiteral::HighImpedance, 30),
    )
}

fn suspended_node() -> Node<SignalLiteral> {
    Node::new(
        NodeKind::Write,
        name("Suspended"),
        false,
        name("Initial"),
        properties(BitLiteral::High, LogicLiteral::Low, 20),
    )
}

fn cost(time: u64, energy: u64) -> Cost {
    Cost::new(Quantity::from(time), Quantity::from(energy))
}

fn two_node_structure() -> KripkeStructure<SignalLiteral> {
    let initial = initial_node();
    let suspended = suspended_node();
    KripkeStructure::new(
        vec![initial.clone(), suspended.clone()],
        HashMap::from([
            (
                initial.clone(),
                vec![Edge::new(suspended.clone(), cost(100, 200))],
            ),
            (suspended, vec![Edge::new(initial.clone(), cost(30, 40))]),
        ]),
        HashSet::from([initial]),
    )
}

const TWO_NODE_DOT: &str = r#"digraph {
    "0-0" [shape=point]
    "0" [style=rounded shape=rectangle label="\ «Read»
    \ Initial
    \ executeOnEntry: true,
    \ nextState: Suspended,
    \ x: '0',
    \ y: 'Z',
    \ z: 30"]
    "0-0" -> "0"
    "1" [style=rounded shape=rectangle label="\ «Write»
    \ Suspended
    \ executeOnEntry: false,
    \ nextState: Initial,
    \ x: '1',
    \ y: '0',
    \ z: 20"]
    "0" -> "1" [label="t: 100 s, E: 200 J"]
    "1" -> "0" [label="t: 30 s, E: 40 J"]
}"#;

#[test]
fn two_node_structure_renders_exactly() {
    assert_eq!(two_node_structure().to_dot().unwrap(), TWO_NODE_DOT);
}

#[test]
fn rendering_twice_is_identical() {
    let structure = two_node_structure();
    assert_eq!(structure.to_dot().unwrap(), structure.to_dot().unwrap());
    assert_eq!(
        structure.to_dot().unwrap(),
        two_node_structure().to_dot().unwrap()
    );
}

#[test]
fn single_initial_state_gets_one_marker() {
    let dot = two_node_structure().to_dot().unwrap();
    assert_eq!(dot.matches("[shape=point]").count(), 1);
    assert_eq!(dot.matches("\"0-0\" -> \"0\"").count(), 1);
    assert!(!dot.contains("\"1-0\""));
}

#[test]
fn node_order_decides_identifiers() {
    let initial = initial_node();
    let suspended = suspended_node();
    let structure = KripkeStructure::new(
        vec![suspended.clone(), initial.clone()],
        HashMap::from([(
            initial.clone(),
            vec![Edge::new(suspended, cost(100, 200))],
        )]),
        HashSet::from([initial]),
    );
    let dot = structure.to_dot().unwrap();
    assert!(dot.contains("\"1-0\" -> \"1\""));
    assert!(dot.contains("\"1\" -> \"0\" [label=\"t: 100 s, E: 200 J\"]"));
}

#[test]
fn edges_keep_insertion_order_per_source() {
    let initial = initial_node();
    let suspended = suspended_node();
    let structure = KripkeStructure::new(
        vec![initial.clone(), suspended.clone()],
        HashMap::from([(
            initial.clone(),
            vec![
                Edge::new(suspended.clone(), cost(1, 1)),
                Edge::new(initial.clone(), cost(2, 2)),
                Edge::new(suspended, cost(3, 3)),
            ],
        )]),
        HashSet::new(),
    );
    let dot = structure.to_dot().unwrap();
    let first = dot.find("t: 1 s").unwrap();
    let second = dot.find("t: 2 s").unwrap();
    let third = dot.find("t: 3 s").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn missing_edge_target_fails() {
    let initial = initial_node();
    let structure = KripkeStructure::new(
        vec![initial.clone()],
        HashMap::from([(
            initial.clone(),
            vec![Edge::new(suspended_node(), cost(1, 1))],
        )]),
        HashSet::from([initial]),
    );
    assert_eq!(
        structure.to_dot(),
        Err(GraphError::MissingEdgeTarget {
            source_id: 0,
            edge: 0,
            node: suspended_node().to_string(),
        })
    );
}

#[test]
fn small_costs_use_metric_prefixes() {
    let initial = initial_node();
    let structure = KripkeStructure::new(
        vec![initial.clone()],
        HashMap::from([(
            initial.clone(),
            vec![Edge::new(
                initial,
                Cost::new(Quantity::new(25, -9), Quantity::new(1, -12)),
            )],
        )]),
        HashSet::new(),
    );
    let dot = structure.to_dot().unwrap();
    assert!(dot.contains("\"0\" -> \"0\" [label=\"t: 25 ns, E: 1 pJ\"]"));
}

#[test]
fn options_change_layout_only() {
    let structure = two_node_structure();
    let options = DotOptions::new().indent(2).graph_name("fsm");
    let dot = structure.to_dot_with(&options).unwrap();

    assert!(dot.starts_with("digraph \"fsm\" {\n  \"0-0\" [shape=point]\n"));
    assert!(dot.contains("\n  \\ Initial\n"));
    assert!(dot.ends_with("\n}"));

    let default_body: Vec<&str> = TWO_NODE_DOT.lines().map(str::trim_start).collect();
    let custom_body: Vec<&str> = dot.lines().map(str::trim_start).collect();
    assert_eq!(default_body[1..], custom_body[1..]);
}

#[test]
fn extreme_exponents_render_in_scientific_notation() {
    let initial = initial_node();
    let structure = KripkeStructure::new(
        vec![initial.clone()],
        HashMap::from([(
            initial.clone(),
            vec![Edge::new(
                initial,
                Cost::new(Quantity::new(1, i64::MIN), Quantity::new(1, i64::MIN + 1)),
            )],
        )]),
        HashSet::new(),
    );
    let dot = structure.to_dot().unwrap();
    assert!(dot.contains("[label=\"t: 1×10⁻⁹²²³³⁷²⁰³⁶⁸⁵⁴⁷⁷⁵⁸⁰⁸ s, E: 1×10⁻⁹²²³³⁷²⁰³⁶⁸⁵⁴⁷⁷⁵⁸⁰⁷ J\"]"));
}

#[test]
fn string_properties_keep_the_label_quoted() {
    let node: Node<String> = Node::new(
        NodeKind::Read,
        name("Idle"),
        true,
        name("Idle"),
        BTreeMap::from([(name("path"), "dir\\".to_string())]),
    );
    let structure = KripkeStructure::new(vec![node], HashMap::new(), HashSet::new());
    let dot = structure.to_dot().unwrap();
    assert!(dot.contains("\\ path: dir\\\\\"]"));
}
