use mbvst_graphlib::{Edge, Graph};

#[test]
fn edges_are_orientation_agnostic() {
    let mut g = Graph::new();
    g.add_edge("b", "a");

    assert!(g.has_edge("a", "b"));
    assert!(g.has_edge("b", "a"));
    assert_eq!(g.edge_count(), 1);

    // Re-inserting the reverse orientation is a no-op.
    g.add_edge("a", "b");
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn removing_an_edge_removes_both_orientations() {
    let mut g = Graph::new();
    g.add_edge("a", "b");
    g.add_edge("b", "c");

    assert!(g.remove_edge("b", "a"));
    assert!(!g.has_edge("a", "b"));
    assert!(!g.has_edge("b", "a"));
    assert!(!g.remove_edge("a", "b"));

    // Unrelated edges survive, and endpoints stay in the vertex set.
    assert!(g.has_edge("b", "c"));
    assert!(g.has_node("a"));
    assert_eq!(g.node_count(), 3);
}

#[test]
fn add_edge_inserts_missing_endpoints() {
    let mut g = Graph::new();
    g.add_node("a");
    g.add_edge("b", "c");

    assert_eq!(g.node_count(), 3);
    assert_eq!(g.node_ids(), vec!["a", "b", "c"]);
}

#[test]
fn nodes_and_edges_keep_insertion_order() {
    let mut g = Graph::new();
    g.add_edge("c", "a");
    g.add_edge("a", "b");
    g.add_node("z");

    assert_eq!(g.node_ids(), vec!["c", "a", "b", "z"]);
    let edges: Vec<&Edge> = g.edges().collect();
    assert_eq!(edges[0].endpoints(), ("a", "c"));
    assert_eq!(edges[1].endpoints(), ("a", "b"));
}

#[test]
fn degrees_default_isolated_vertices_to_zero() {
    let mut g = Graph::new();
    g.add_node("lonely");
    g.add_edge("a", "b");
    g.add_edge("b", "c");

    let degrees = g.degrees();
    assert_eq!(degrees["lonely"], 0);
    assert_eq!(degrees["a"], 1);
    assert_eq!(degrees["b"], 2);
    assert_eq!(degrees["c"], 1);
    assert_eq!(degrees.len(), g.node_count());
}

#[test]
fn neighbors_follow_edge_insertion_order() {
    let mut g = Graph::new();
    g.add_edge("b", "c");
    g.add_edge("b", "a");
    g.add_edge("d", "b");

    assert_eq!(g.neighbors("b"), vec!["c", "a", "d"]);
    assert_eq!(g.degree("b"), 3);
}

#[test]
fn from_parts_keeps_the_whole_vertex_universe() {
    let g = Graph::from_parts(
        ["1", "2", "3", "4"],
        [Edge::new("1", "2"), Edge::new("2", "3")],
    );

    assert_eq!(g.node_count(), 4);
    assert_eq!(g.edge_count(), 2);
    assert!(g.has_node("4"));
    assert_eq!(g.degree("4"), 0);
}

#[test]
#[should_panic(expected = "self-loops are not supported")]
fn self_loops_are_rejected() {
    let _ = Edge::new("a", "a");
}

#[test]
fn edge_other_and_touches() {
    let e = Edge::new("y", "x");
    assert_eq!(e.endpoints(), ("x", "y"));
    assert!(e.touches("x"));
    assert!(e.touches("y"));
    assert!(!e.touches("z"));
    assert_eq!(e.other("x"), Some("y"));
    assert_eq!(e.other("z"), None);
}
