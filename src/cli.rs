//! Interactive console menu.
//!
//! Thin dispatcher over the core: every menu action maps onto the graph
//! store, search, summary, and renderer operations. No graph logic lives
//! here. Generic over the input/output streams so sessions can be scripted
//! in tests.

use std::io::{BufRead, Write};

use tracing::{debug, error};

use crate::config::RenderConfig;
use crate::error::Result;
use crate::graph::Graph;
use crate::render::AsciiRenderer;
use crate::search;
use crate::summary;

/// Interactive menu session over a graph.
pub struct Menu<R, W> {
    input: R,
    output: W,
    graph: Graph,
    renderer: AsciiRenderer,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a menu session with an empty graph.
    pub fn new(input: R, output: W, render: &RenderConfig) -> Self {
        Self {
            input,
            output,
            graph: Graph::new(),
            renderer: AsciiRenderer::new(render.grid_width, render.grid_height),
        }
    }

    /// The graph built so far
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to Marga!")?;
        writeln!(
            self.output,
            "Build a weighted graph and find least-cost paths with A* search."
        )?;

        loop {
            self.show_menu()?;
            let Some(choice) = self.read_line()? else {
                break;
            };
            debug!(choice = %choice, "menu selection");

            match choice.as_str() {
                "1" => self.add_node()?,
                "2" => self.add_edge()?,
                "3" => self.display_graph()?,
                "4" => self.visualize_graph()?,
                "5" => self.find_path()?,
                "6" => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid choice! Please try again.")?,
            }
        }
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "======= GRAPH & A* PATHFINDER =======")?;
        writeln!(self.output, "1. Add Node")?;
        writeln!(self.output, "2. Add Edge")?;
        writeln!(self.output, "3. Display Graph (Text)")?;
        writeln!(self.output, "4. Visualize Graph (ASCII)")?;
        writeln!(self.output, "5. Find Shortest Path (A*)")?;
        writeln!(self.output, "6. Exit")?;
        writeln!(self.output, "====================================")?;
        write!(self.output, "Choose an option: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None); // EOF
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, msg: &str) -> Result<Option<String>> {
        write!(self.output, "{}", msg)?;
        self.output.flush()?;
        self.read_line()
    }

    fn prompt_number(&mut self, msg: &str) -> Result<Option<f32>> {
        loop {
            let Some(line) = self.prompt(msg)? else {
                return Ok(None);
            };
            match line.parse::<f32>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Invalid number: '{}'", line)?,
            }
        }
    }

    fn add_node(&mut self) -> Result<()> {
        let Some(name) = self.prompt("\nEnter node name: ")? else {
            return Ok(());
        };
        if name.is_empty() {
            writeln!(self.output, "Node name cannot be empty!")?;
            return Ok(());
        }
        let Some(x) = self.prompt_number("Enter x coordinate (for heuristic): ")? else {
            return Ok(());
        };
        let Some(y) = self.prompt_number("Enter y coordinate (for heuristic): ")? else {
            return Ok(());
        };

        self.graph.add_node(&name, x, y);
        writeln!(self.output, "Node '{}' added successfully!", name)?;
        Ok(())
    }

    fn add_edge(&mut self) -> Result<()> {
        if self.graph.is_empty() {
            writeln!(self.output, "\nNo nodes available! Add nodes first.")?;
            return Ok(());
        }
        writeln!(
            self.output,
            "\nAvailable nodes: {}",
            self.graph.node_names().join(", ")
        )?;

        let Some(from) = self.prompt("Enter source node: ")? else {
            return Ok(());
        };
        let Some(to) = self.prompt("Enter destination node: ")? else {
            return Ok(());
        };
        let Some(weight) = self.prompt_number("Enter edge weight: ")? else {
            return Ok(());
        };

        match self.graph.add_edge(&from, &to, weight) {
            Ok(()) => writeln!(
                self.output,
                "Edge added: {} -> {} (weight: {})",
                from, to, weight
            )?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(())
    }

    fn display_graph(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== GRAPH STRUCTURE ===")?;
        writeln!(self.output, "Nodes:")?;
        for node in self.graph.nodes() {
            writeln!(
                self.output,
                "  {} (x: {}, y: {})",
                node.name, node.position.x, node.position.y
            )?;
        }

        writeln!(self.output, "\nEdges:")?;
        for name in self.graph.node_names() {
            let edges = self.graph.outgoing_edges(name);
            if edges.is_empty() {
                continue;
            }
            let list = edges
                .iter()
                .map(|e| format!("{}({})", e.to, e.weight))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(self.output, "  {} -> {}", name, list)?;
        }
        writeln!(self.output, "======================")?;
        Ok(())
    }

    fn visualize_graph(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== GRAPH VISUALIZATION ===")?;
        let view = self.renderer.render_graph(&self.graph);
        write!(self.output, "{}", view)?;
        writeln!(self.output, "===========================")?;
        Ok(())
    }

    fn find_path(&mut self) -> Result<()> {
        let Some(start) = self.prompt("\nEnter start node: ")? else {
            return Ok(());
        };
        let Some(goal) = self.prompt("Enter goal node: ")? else {
            return Ok(());
        };

        writeln!(self.output, "\n=== A* PATHFINDING RESULT ===")?;
        writeln!(
            self.output,
            "Finding shortest path from {} to {}",
            start, goal
        )?;

        match search::find_path(&self.graph, &start, &goal) {
            Err(e) => writeln!(self.output, "Error: {}", e)?,
            Ok(path) if path.is_empty() => writeln!(self.output, "No path found!")?,
            Ok(path) => match summary::summarize(&self.graph, &path) {
                Err(e) => {
                    // A self-produced path with no matching edge is a logic
                    // error, not bad input.
                    error!("path summary failed: {}", e);
                    writeln!(self.output, "Internal error: {}", e)?;
                }
                Ok(summary) => {
                    writeln!(self.output, "Path found: {}", summary.describe(&path))?;
                    writeln!(self.output, "Total path cost: {:.2}", summary.total_cost)?;
                    writeln!(self.output, "Number of nodes in path: {}", path.len())?;

                    writeln!(self.output, "\n=== PATH VISUALIZATION ===")?;
                    let view = self.renderer.render_path(&self.graph, &path);
                    write!(self.output, "{}", view)?;
                    writeln!(self.output, "==========================")?;
                }
            },
        }
        writeln!(self.output, "=============================")?;
        Ok(())
    }
}
