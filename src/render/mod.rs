//! ASCII visualization of graphs and discovered paths.
//!
//! Presentation layer on top of the core: consumes node positions and path
//! sequences and draws them onto a fixed-size character grid. Node world
//! coordinates are scaled into the grid from their bounding box, edges are
//! rasterized with Bresenham lines, and the result is returned as a string
//! ready for the console.

mod grid;

pub use grid::CharGrid;

use std::collections::BTreeMap;

use crate::graph::Graph;
use crate::search::PlannedPath;

/// Renders graphs and paths onto a character grid of fixed dimensions.
#[derive(Clone, Debug)]
pub struct AsciiRenderer {
    width: usize,
    height: usize,
}

impl AsciiRenderer {
    /// Create a renderer with the given grid dimensions.
    ///
    /// Dimensions are clamped to at least 1×1.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Render the whole graph: node glyphs, edge lines, legend, and the
    /// node position listing.
    pub fn render_graph(&self, graph: &Graph) -> String {
        if graph.is_empty() {
            return "No nodes to display!\n".to_string();
        }

        let places = self.placements(graph);
        let mut grid = CharGrid::new(self.width, self.height);

        for (name, &(x, y)) in &places {
            grid.set(x, y, glyph(name));
        }
        for (name, &(x1, y1)) in &places {
            for edge in graph.outgoing_edges(name) {
                if let Some(&(x2, y2)) = places.get(edge.to.as_str()) {
                    grid.draw_line(x1, y1, x2, y2);
                }
            }
        }
        // Restamp glyphs where strokes crossed a node cell.
        for (name, &(x, y)) in &places {
            grid.set(x, y, glyph(name));
        }

        let mut out = self.format_grid(&grid);
        out.push_str("\nLegend:\n");
        out.push_str("  Nodes: Represented by first letter of node name\n");
        out.push_str("  Edges: Represented by '-', '|', '/', '\\' characters\n");
        out.push_str("  Empty: Represented by '.' characters\n");
        out.push_str("\nNode Positions:\n");
        for node in graph.nodes() {
            out.push_str(&format!(
                "  {}: ({}, {})\n",
                node.name, node.position.x, node.position.y
            ));
        }
        out
    }

    /// Render a discovered path over the graph: path nodes as `*`, path
    /// edges as `#`, all other nodes by their first letter.
    pub fn render_path(&self, graph: &Graph, path: &PlannedPath) -> String {
        if path.is_empty() {
            return "No path to visualize!\n".to_string();
        }

        let places = self.placements(graph);
        let mut grid = CharGrid::new(self.width, self.height);

        for (name, &(x, y)) in &places {
            let c = if path.contains(name) { '*' } else { glyph(name) };
            grid.set(x, y, c);
        }
        for pair in path.nodes.windows(2) {
            let from = places.get(pair[0].as_str());
            let to = places.get(pair[1].as_str());
            if let (Some(&(x1, y1)), Some(&(x2, y2))) = (from, to) {
                grid.draw_path_line(x1, y1, x2, y2);
            }
        }
        for name in &path.nodes {
            if let Some(&(x, y)) = places.get(name.as_str()) {
                grid.set(x, y, '*');
            }
        }

        let mut out = self.format_grid(&grid);
        out.push_str("\nPath Sequence: ");
        out.push_str(&path.nodes.join(" -> "));
        out.push('\n');
        out.push_str("\nLegend:\n");
        out.push_str("  Path Nodes: * (asterisk)\n");
        out.push_str("  Path Edges: # (hash)\n");
        out.push_str("  Other Nodes: First letter of node name\n");
        out.push_str("  Empty Space: . (dot)\n");
        out
    }

    /// Scale node world positions into grid cells.
    ///
    /// Cells come from the node bounding box stretched over the grid, with
    /// world Y up mapped to row 0 at the top. Degenerate bounds (all nodes
    /// on one vertical or horizontal line) center that axis.
    fn placements<'g>(&self, graph: &'g Graph) -> BTreeMap<&'g str, (i32, i32)> {
        let mut min_x = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_y = f32::NEG_INFINITY;

        for node in graph.nodes() {
            min_x = min_x.min(node.position.x);
            max_x = max_x.max(node.position.x);
            min_y = min_y.min(node.position.y);
            max_y = max_y.max(node.position.y);
        }

        let last_col = (self.width - 1) as f32;
        let last_row = (self.height - 1) as f32;

        let mut places = BTreeMap::new();
        for node in graph.nodes() {
            let gx = if max_x == min_x {
                (self.width / 2) as i32
            } else {
                ((node.position.x - min_x) / (max_x - min_x) * last_col) as i32
            };
            let gy = if max_y == min_y {
                (self.height / 2) as i32
            } else {
                ((max_y - node.position.y) / (max_y - min_y) * last_row) as i32
            };

            let gx = gx.clamp(0, self.width as i32 - 1);
            let gy = gy.clamp(0, self.height as i32 - 1);
            places.insert(node.name.as_str(), (gx, gy));
        }
        places
    }

    /// Grid with coordinate header rows and numbered rows.
    fn format_grid(&self, grid: &CharGrid) -> String {
        let mut out = String::new();

        // Tens digits every fifth column, then a units-digit ruler.
        out.push_str("   ");
        for x in 0..self.width {
            if x % 5 == 0 {
                out.push_str(&(x / 10).to_string());
            } else {
                out.push(' ');
            }
        }
        out.push('\n');
        out.push_str("   ");
        for x in 0..self.width {
            out.push_str(&(x % 10).to_string());
        }
        out.push('\n');

        for (y, row) in grid.rows().enumerate() {
            out.push_str(&format!("{:>2} {}\n", y, row));
        }
        out
    }
}

/// Display glyph for a node: first character of its name.
fn glyph(name: &str) -> char {
    name.chars().next().unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::find_path;

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

    #[test]
    fn test_empty_graph_message() {
        let renderer = AsciiRenderer::new(40, 20);
        assert_eq!(renderer.render_graph(&Graph::new()), "No nodes to display!\n");
    }

    #[test]
    fn test_placements_stretch_bounding_box() {
        let renderer = AsciiRenderer::new(40, 20);
        let graph = diamond_graph();
        let places = renderer.placements(&graph);

        // A(0,0) is bottom-left, D(0,8) top-left, C(6,8) top-right.
        assert_eq!(places["A"], (0, 19));
        assert_eq!(places["D"], (0, 0));
        assert_eq!(places["C"], (39, 0));
    }

    #[test]
    fn test_degenerate_bounds_center_axis() {
        let renderer = AsciiRenderer::new(40, 20);
        let mut graph = Graph::new();
        graph.add_node("A", 2.0, 1.0);
        graph.add_node("B", 2.0, 5.0);

        let places = renderer.placements(&graph);
        assert_eq!(places["A"].0, 20);
        assert_eq!(places["B"].0, 20);
    }

    #[test]
    fn test_render_graph_places_glyphs() {
        let renderer = AsciiRenderer::new(40, 20);
        let output = renderer.render_graph(&diamond_graph());

        let rows: Vec<&str> = output.lines().collect();
        // Two header lines, then row 0 holds D at column 0 and C at 39.
        let row0 = rows[2];
        assert_eq!(row0.chars().nth(3), Some('D')); // 3-char row label prefix
        assert_eq!(row0.chars().nth(3 + 39), Some('C'));
        assert!(output.contains("Node Positions:"));
        assert!(output.contains("  B: (3, 4)"));
    }

    #[test]
    fn test_render_path_marks_route() {
        let renderer = AsciiRenderer::new(40, 20);
        let graph = diamond_graph();
        let path = find_path(&graph, "A", "C").unwrap();
        let output = renderer.render_path(&graph, &path);

        assert!(output.contains('*'));
        assert!(output.contains('#'));
        assert!(output.contains(&format!("Path Sequence: {}", path.nodes.join(" -> "))));
    }

    #[test]
    fn test_render_empty_path_message() {
        let renderer = AsciiRenderer::new(40, 20);
        let mut graph = diamond_graph();
        graph.add_node("E", 9.0, 9.0);

        let no_path = find_path(&graph, "A", "E").unwrap();
        assert_eq!(
            renderer.render_path(&graph, &no_path),
            "No path to visualize!\n"
        );

        // A single-node path is a real path and still renders the grid.
        let trivial = find_path(&graph, "A", "A").unwrap();
        assert!(!renderer.render_path(&graph, &trivial).starts_with("No path"));
    }
}
