//! Euclidean distance heuristic for the A* search.

use crate::graph::Graph;

/// Straight-line distance between two named nodes.
///
/// Returns 0.0 when either name is unknown. That is a defensive default,
/// not an error signal; callers are expected to have validated existence
/// already, and a zero estimate keeps the search correct (it merely stops
/// guiding it).
///
/// The estimate is admissible and consistent only when every edge weight is
/// at least the Euclidean distance it spans. On graphs with shortcut
/// weights below that distance the search degrades to best-first and the
/// returned path is not guaranteed optimal. This is a known limitation of
/// the heuristic, not something the graph enforces.
pub fn euclidean(graph: &Graph, a: &str, b: &str) -> f32 {
    match (graph.node(a), graph.node(b)) {
        (Some(from), Some(to)) => from.position.distance(&to.position),
        _ => 0.0,
    }
}
