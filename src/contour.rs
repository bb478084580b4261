//! Control/edge node lattice built over an activation grid.
//!
//! [`ContourGraph`] owns a flat arena of positioned nodes addressed by
//! [`NodeId`]. Each grid cell gets one [`ControlNode`] carrying the cell's
//! activation plus two edge nodes it owns: the midpoint toward `x + 1`
//! (`right`) and the midpoint toward `y + 1` (`up`). Because an edge
//! midpoint is stored exactly once, inside the control node on its
//! lower/left side, the two squares touching that edge resolve to the
//! same handle — that sharing is what keeps the final mesh seam-free.

use glam::Vec2;

use crate::grid::Grid2D;
use crate::types::{ControlId, NodeId};

/// A positioned vertex candidate in the node arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub pos: Vec2,
}

/// Per-cell node carrying the cell activation and its two owned edge nodes.
#[derive(Debug, Clone, Copy)]
pub struct ControlNode {
    /// Handle of this control node's own position in the arena.
    pub node: NodeId,
    /// Activation copied from the grid at build time (`> 0` means solid).
    pub active: f32,
    /// Edge-node handle at the midpoint toward the `x + 1` neighbor.
    pub right: NodeId,
    /// Edge-node handle at the midpoint toward the `y + 1` neighbor.
    pub up: NodeId,
}

/// The full node lattice for one grid.
#[derive(Debug)]
pub struct ContourGraph {
    /// Arena of all node positions; control and edge nodes alike.
    pub nodes: Vec<Node>,
    /// One control node per grid cell, row-major.
    pub controls: Vec<ControlNode>,
    width: usize,
    height: usize,
}

impl ContourGraph {
    /// Builds the lattice for `grid`, centered on the origin.
    ///
    /// A control node for cell `(x, y)` sits at
    /// `((x, y) + (0.5, 0.5)) * cell_size - world_size / 2`, where
    /// `world_size` is the grid dimensions scaled by `cell_size`. Its
    /// `right` and `up` edge nodes sit half a cell further along the
    /// respective axis. Cells on the last row/column build their edge
    /// nodes the same way; the out-of-range ones are simply never
    /// referenced by any square.
    pub fn build(grid: &Grid2D, cell_size: f32) -> Self {
        let width = grid.width();
        let height = grid.height();
        let world_size = Vec2::new(width as f32, height as f32) * cell_size;

        let mut nodes = Vec::with_capacity(width * height * 3);
        let mut controls = Vec::with_capacity(width * height);

        for y in 0..height {
            for x in 0..width {
                let pos = (Vec2::new(x as f32, y as f32) + Vec2::splat(0.5)) * cell_size
                    - world_size * 0.5;

                let node = nodes.len();
                nodes.push(Node { pos });
                let right = nodes.len();
                nodes.push(Node {
                    pos: pos + Vec2::new(cell_size * 0.5, 0.0),
                });
                let up = nodes.len();
                nodes.push(Node {
                    pos: pos + Vec2::new(0.0, cell_size * 0.5),
                });

                controls.push(ControlNode {
                    node,
                    active: grid.get(x, y),
                    right,
                    up,
                });
            }
        }

        Self {
            nodes,
            controls,
            width,
            height,
        }
    }

    /// Grid width in cells (= control nodes per row).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells (= control node rows).
    pub fn height(&self) -> usize {
        self.height
    }

    /// The control node for grid cell `(x, y)`.
    #[inline]
    pub fn control(&self, x: usize, y: usize) -> &ControlNode {
        &self.controls[self.control_id(x, y)]
    }

    /// Arena-independent id of the control node for cell `(x, y)`.
    #[inline]
    pub fn control_id(&self, x: usize, y: usize) -> ControlId {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    /// Position of any node in the arena.
    #[inline]
    pub fn position(&self, id: NodeId) -> Vec2 {
        self.nodes[id].pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_grid(width: usize, height: usize) -> Grid2D {
        let mut g = Grid2D::new(width, height);
        for y in 0..height {
            for x in 0..width {
                g.set(x, y, 0.5);
            }
        }
        g
    }

    #[test]
    fn one_control_and_two_edge_nodes_per_cell() {
        let graph = ContourGraph::build(&solid_grid(4, 3), 1.0);
        assert_eq!(graph.controls.len(), 12);
        assert_eq!(graph.nodes.len(), 36);
    }

    #[test]
    fn lattice_is_centered_on_the_origin() {
        // For a 2x2 grid with unit cells the four control nodes are the
        // corners of a unit square around the origin.
        let graph = ContourGraph::build(&solid_grid(2, 2), 1.0);
        assert_eq!(graph.position(graph.control(0, 0).node), Vec2::new(-0.5, -0.5));
        assert_eq!(graph.position(graph.control(1, 0).node), Vec2::new(0.5, -0.5));
        assert_eq!(graph.position(graph.control(0, 1).node), Vec2::new(-0.5, 0.5));
        assert_eq!(graph.position(graph.control(1, 1).node), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn positions_scale_uniformly_with_cell_size() {
        let unit = ContourGraph::build(&solid_grid(3, 3), 1.0);
        let scaled = ContourGraph::build(&solid_grid(3, 3), 2.5);
        for (a, b) in unit.nodes.iter().zip(scaled.nodes.iter()) {
            assert_eq!(b.pos, a.pos * 2.5);
        }
    }

    #[test]
    fn edge_nodes_sit_half_a_cell_from_their_owner() {
        let graph = ContourGraph::build(&solid_grid(3, 3), 2.0);
        for c in &graph.controls {
            let pos = graph.position(c.node);
            assert_eq!(graph.position(c.right), pos + Vec2::new(1.0, 0.0));
            assert_eq!(graph.position(c.up), pos + Vec2::new(0.0, 1.0));
        }
    }

    #[test]
    fn activation_is_copied_from_the_grid() {
        let mut grid = Grid2D::new(3, 3);
        grid.set(1, 2, 0.7);
        let graph = ContourGraph::build(&grid, 1.0);
        assert_eq!(graph.control(1, 2).active, 0.7);
        assert_eq!(graph.control(0, 0).active, 0.0);
    }

    #[test]
    fn node_handles_are_unique() {
        let graph = ContourGraph::build(&solid_grid(4, 4), 1.0);
        let mut seen = vec![false; graph.nodes.len()];
        for c in &graph.controls {
            for id in [c.node, c.right, c.up] {
                assert!(!seen[id], "handle {id} referenced twice");
                seen[id] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
