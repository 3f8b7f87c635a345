//! A* search engine over the graph store.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::error::{MargaError, Result};
use crate::graph::Graph;

use super::heuristic;

/// Result of a path search.
///
/// `nodes` runs from start to goal inclusive. An empty sequence means no
/// path exists, which is a valid answer, distinct from the
/// [`MargaError::UnknownNode`] error raised for invalid endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedPath {
    /// Node names from start to goal, empty if no path exists
    pub nodes: Vec<String>,
}

impl PlannedPath {
    fn no_path() -> Self {
        Self { nodes: Vec::new() }
    }

    /// True when the search found no path
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes on the path
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Is this node on the path?
    pub fn contains(&self, name: &str) -> bool {
        self.nodes.iter().any(|n| n == name)
    }
}

/// Frontier entry ordered by estimated total cost.
#[derive(Clone, Debug)]
struct SearchNode<'a> {
    name: &'a str,
    f_score: f32,
}

impl PartialEq for SearchNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for SearchNode<'_> {}

impl Ord for SearchNode<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (lower f_score = higher priority)
        other
            .f_score
            .partial_cmp(&self.f_score)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for SearchNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a least-cost path from `start` to `goal`.
///
/// Standard A*: a binary-heap frontier keyed by g + heuristic, a best-known
/// cost map per node, and back-pointers for path reconstruction. A node is
/// re-pushed on every strict cost improvement; the closed set makes later,
/// stale pops a no-op. All search state lives in this call and is discarded
/// on return.
///
/// Returns [`MargaError::UnknownNode`] when either endpoint was never added
/// to the graph. An unreachable goal is not an error: the result is an
/// empty [`PlannedPath`]. `start == goal` yields the single-node path.
pub fn find_path(graph: &Graph, start: &str, goal: &str) -> Result<PlannedPath> {
    let (start, goal) = match (graph.node(start), graph.node(goal)) {
        (Some(s), Some(g)) => (s.name.as_str(), g.name.as_str()),
        (None, _) => return Err(MargaError::UnknownNode(start.to_string())),
        (_, None) => return Err(MargaError::UnknownNode(goal.to_string())),
    };

    let mut open_set = BinaryHeap::new();
    // Absent key = unreached; read through INFINITY so adding an edge
    // weight can never overflow a fixed sentinel.
    let mut g_score: HashMap<&str, f32> = HashMap::new();
    let mut came_from: HashMap<&str, &str> = HashMap::new();
    let mut closed: HashSet<&str> = HashSet::new();

    g_score.insert(start, 0.0);
    open_set.push(SearchNode {
        name: start,
        f_score: heuristic::euclidean(graph, start, goal),
    });

    let mut expansions = 0usize;

    while let Some(current_node) = open_set.pop() {
        let current = current_node.name;

        if current == goal {
            tracing::debug!(start, goal, expansions, "goal reached");
            return Ok(reconstruct_path(&came_from, start, goal));
        }

        // A node may sit in the heap once per cost improvement; the first
        // pop carries its best f-score, later pops are stale.
        if !closed.insert(current) {
            continue;
        }
        expansions += 1;

        let current_g = *g_score.get(current).unwrap_or(&f32::INFINITY);

        for edge in graph.outgoing_edges(current) {
            let neighbor = edge.to.as_str();
            if closed.contains(neighbor) {
                continue;
            }

            let tentative_g = current_g + edge.weight;
            let existing_g = *g_score.get(neighbor).unwrap_or(&f32::INFINITY);

            if tentative_g < existing_g {
                g_score.insert(neighbor, tentative_g);
                came_from.insert(neighbor, current);
                open_set.push(SearchNode {
                    name: neighbor,
                    f_score: tentative_g + heuristic::euclidean(graph, neighbor, goal),
                });
            }
        }
    }

    tracing::warn!(start, goal, expansions, "frontier exhausted, no path");
    Ok(PlannedPath::no_path())
}

/// Reconstruct the path by following back-pointers from goal to start.
fn reconstruct_path(came_from: &HashMap<&str, &str>, start: &str, goal: &str) -> PlannedPath {
    let mut nodes = Vec::new();
    let mut current = goal;

    while current != start {
        nodes.push(current.to_string());
        match came_from.get(current) {
            Some(&prev) => current = prev,
            None => break,
        }
    }
    nodes.push(start.to_string());
    nodes.reverse();

    PlannedPath { nodes }
}
