//! Cost summaries for discovered paths.
//!
//! Sits at the core boundary: turns a path (node name sequence) plus the
//! graph's edge weights into a total cost and per-edge breakdown for the
//! console and renderer to display.

use crate::error::{MargaError, Result};
use crate::graph::Graph;
use crate::search::PlannedPath;

/// Cost breakdown for a path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathSummary {
    /// Sum of the traversed edge weights
    pub total_cost: f32,
    /// Weight of each traversed edge, in path order
    pub edge_weights: Vec<f32>,
}

/// Walk consecutive pairs of the path and accumulate edge weights.
///
/// When parallel edges exist between a pair, the first outgoing edge in
/// insertion order wins: a documented, deterministic tie-break, not
/// nondeterminism.
///
/// Fails with [`MargaError::BrokenPath`] when no matching edge exists for a
/// consecutive pair. That cannot happen for a path produced by
/// [`crate::search::find_path`] on the same graph, so any occurrence is a
/// logic-error signal (the graph changed between search and summary).
///
/// Empty and single-node paths summarize to cost 0 with no edge weights.
pub fn summarize(graph: &Graph, path: &PlannedPath) -> Result<PathSummary> {
    let mut edge_weights = Vec::new();
    let mut total_cost = 0.0f32;

    for pair in path.nodes.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        let weight = graph
            .outgoing_edges(from)
            .iter()
            .find(|edge| edge.to == *to)
            .map(|edge| edge.weight)
            .ok_or_else(|| MargaError::BrokenPath {
                from: from.clone(),
                to: to.clone(),
            })?;

        edge_weights.push(weight);
        total_cost += weight;
    }

    Ok(PathSummary {
        total_cost,
        edge_weights,
    })
}

impl PathSummary {
    /// Annotated path line in the `A -(5)-> B` form.
    pub fn describe(&self, path: &PlannedPath) -> String {
        let mut out = String::new();
        for (i, name) in path.nodes.iter().enumerate() {
            out.push_str(name);
            if let Some(weight) = self.edge_weights.get(i) {
                out.push_str(&format!(" -({})-> ", weight));
            }
        }
        out
    }
}
