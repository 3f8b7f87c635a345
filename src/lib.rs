//! # Marga
//!
//! Weighted directed graph builder with A* pathfinding and ASCII
//! visualization.
//!
//! ## Overview
//!
//! - **Graph store**: named nodes with 2D positions; directed weighted
//!   edges kept in insertion order, parallel edges allowed
//! - **A\* search**: binary-heap frontier guided by a Euclidean heuristic,
//!   back-pointer path reconstruction
//! - **Path summaries**: total cost plus per-edge weights for a found path
//! - **ASCII renderer**: graph and path views on a fixed-size character
//!   grid for the console
//!
//! ## Quick Start
//!
//! ```rust
//! use marga::{find_path, summarize, Graph};
//!
//! let mut graph = Graph::new();
//! graph.add_node("A", 0.0, 0.0);
//! graph.add_node("B", 3.0, 4.0);
//! graph.add_edge("A", "B", 5.0)?;
//!
//! let path = find_path(&graph, "A", "B")?;
//! let summary = summarize(&graph, &path)?;
//! assert_eq!(summary.total_cost, 5.0);
//! # Ok::<(), marga::MargaError>(())
//! ```
//!
//! The graph is mutated only between searches; a search borrows it
//! immutably for its whole run, and all search state is local to one
//! [`find_path`] call.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod point;
pub mod render;
pub mod search;
pub mod summary;

pub use config::{MargaConfig, RenderConfig};
pub use error::{MargaError, Result};
pub use graph::{Edge, Graph, Node};
pub use point::Point2D;
pub use render::AsciiRenderer;
pub use search::{find_path, PlannedPath};
pub use summary::{summarize, PathSummary};
