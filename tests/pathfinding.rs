//! End-to-end pathfinding scenarios against the public API.

use marga::{find_path, summarize, Graph, MargaError};

/// Diamond graph: two routes from A to C, both costing 10.
fn diamond_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_node("A", 0.0, 0.0);
    graph.add_node("B", 3.0, 4.0);
    graph.add_node("C", 6.0, 8.0);
    graph.add_node("D", 0.0, 8.0);
    graph.add_edge("A", "B", 5.0).unwrap();
    graph.add_edge("B", "C", 5.0).unwrap();
    graph.add_edge("A", "D", 8.0).unwrap();
    graph.add_edge("D", "C", 2.0).unwrap();
    graph
}

/// Six nodes on a 2x3 grid, every weight at least the Euclidean distance it
/// spans, so the heuristic is admissible and A* must be exactly optimal.
fn admissible_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_node("A", 0.0, 0.0);
    graph.add_node("B", 2.0, 0.0);
    graph.add_node("C", 4.0, 0.0);
    graph.add_node("D", 0.0, 2.0);
    graph.add_node("E", 2.0, 2.0);
    graph.add_node("F", 4.0, 2.0);

    graph.add_edge("A", "B", 2.5).unwrap();
    graph.add_edge("B", "C", 3.0).unwrap();
    graph.add_edge("A", "D", 2.0).unwrap();
    graph.add_edge("D", "E", 2.1).unwrap();
    graph.add_edge("E", "F", 4.0).unwrap();
    graph.add_edge("B", "E", 2.2).unwrap();
    graph.add_edge("B", "D", 3.0).unwrap();
    graph.add_edge("E", "C", 3.5).unwrap();
    graph.add_edge("C", "F", 2.0).unwrap();
    graph.add_edge("D", "A", 2.0).unwrap();
    graph.add_edge("F", "A", 10.0).unwrap();
    graph
}

/// Minimum cost over all simple paths, by exhaustive DFS.
fn brute_force_min_cost(graph: &Graph, start: &str, goal: &str) -> Option<f32> {
    fn dfs(
        graph: &Graph,
        current: &str,
        goal: &str,
        visited: &mut Vec<String>,
        cost: f32,
        best: &mut Option<f32>,
    ) {
        if current == goal {
            *best = Some(best.map_or(cost, |b: f32| b.min(cost)));
            return;
        }
        for edge in graph.outgoing_edges(current) {
            if visited.iter().any(|v| *v == edge.to) {
                continue;
            }
            visited.push(edge.to.clone());
            dfs(graph, &edge.to, goal, visited, cost + edge.weight, best);
            visited.pop();
        }
    }

    let mut best = None;
    let mut visited = vec![start.to_string()];
    dfs(graph, start, goal, &mut visited, 0.0, &mut best);
    best
}

#[test]
fn test_diamond_tie_costs_ten() {
    let graph = diamond_graph();
    let path = find_path(&graph, "A", "C").unwrap();

    assert_eq!(path.nodes.first().map(String::as_str), Some("A"));
    assert_eq!(path.nodes.last().map(String::as_str), Some("C"));
    assert_eq!(path.len(), 3); // either A-B-C or A-D-C

    let summary = summarize(&graph, &path).unwrap();
    assert!((summary.total_cost - 10.0).abs() < 1e-6);
}

#[test]
fn test_search_matches_brute_force() {
    let graph = admissible_graph();
    let names: Vec<String> = graph
        .node_names()
        .into_iter()
        .map(str::to_string)
        .collect();

    for start in &names {
        for goal in &names {
            let path = find_path(&graph, start, goal).unwrap();
            let expected = brute_force_min_cost(&graph, start, goal);

            match expected {
                None => assert!(
                    path.is_empty(),
                    "{start}->{goal}: found a path where none exists"
                ),
                Some(min_cost) => {
                    assert!(!path.is_empty(), "{start}->{goal}: missed existing path");
                    let summary = summarize(&graph, &path).unwrap();
                    assert!(
                        (summary.total_cost - min_cost).abs() < 1e-4,
                        "{start}->{goal}: got {} expected {}",
                        summary.total_cost,
                        min_cost
                    );
                }
            }
        }
    }
}

#[test]
fn test_start_equals_goal_is_free() {
    let graph = diamond_graph();
    let path = find_path(&graph, "B", "B").unwrap();
    assert_eq!(path.nodes, vec!["B"]);

    let summary = summarize(&graph, &path).unwrap();
    assert_eq!(summary.total_cost, 0.0);
    assert!(summary.edge_weights.is_empty());
}

#[test]
fn test_unreachable_goal_is_empty_not_error() {
    let mut graph = diamond_graph();
    graph.add_node("E", 12.0, 12.0);

    let path = find_path(&graph, "A", "E").unwrap();
    assert!(path.is_empty());

    // The empty path still summarizes cleanly to zero.
    let summary = summarize(&graph, &path).unwrap();
    assert_eq!(summary.total_cost, 0.0);
}

#[test]
fn test_unknown_endpoint_is_distinct_error() {
    let graph = diamond_graph();
    let err = find_path(&graph, "A", "Z").unwrap_err();
    assert!(matches!(err, MargaError::UnknownNode(name) if name == "Z"));
}

#[test]
fn test_add_edge_failure_leaves_graph_unchanged() {
    let mut graph = diamond_graph();
    let edges_before = graph.edge_count();

    let err = graph.add_edge("A", "Z", 1.0).unwrap_err();
    assert!(matches!(err, MargaError::MissingNode(_)));
    assert_eq!(graph.edge_count(), edges_before);
    assert_eq!(graph.node_count(), 4);
}

#[test]
fn test_parallel_edges_search_vs_summary() {
    // The search relaxes the cheaper parallel edge; the summary reports the
    // first-inserted one. Both behaviors are documented tie-breaks.
    let mut graph = Graph::new();
    graph.add_node("A", 0.0, 0.0);
    graph.add_node("B", 0.0, 0.0);
    graph.add_edge("A", "B", 7.0).unwrap();
    graph.add_edge("A", "B", 3.0).unwrap();

    let path = find_path(&graph, "A", "B").unwrap();
    assert_eq!(path.nodes, vec!["A", "B"]);

    let summary = summarize(&graph, &path).unwrap();
    assert_eq!(summary.edge_weights, vec![7.0]);
}

#[test]
fn test_mutating_graph_after_search_breaks_summary() {
    let graph = diamond_graph();
    let path = find_path(&graph, "A", "C").unwrap();

    // Rebuild without the edges the path relies on.
    let mut mutated = Graph::new();
    for node in graph.nodes() {
        mutated.add_node(&node.name, node.position.x, node.position.y);
    }

    let err = summarize(&mutated, &path).unwrap_err();
    assert!(matches!(err, MargaError::BrokenPath { .. }));
}
