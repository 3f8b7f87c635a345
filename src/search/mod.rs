//! Least-cost path search.
//!
//! This module provides:
//! - A* search over the graph store with back-pointer path reconstruction
//! - The Euclidean distance heuristic that guides it

mod astar;
mod heuristic;

pub use astar::{find_path, PlannedPath};
pub use heuristic::euclidean;
