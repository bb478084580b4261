//! Square views over every 2×2 control-node neighborhood.

use crate::contour::ContourGraph;
use crate::types::{ControlId, NodeId};

/// One 2×2 neighborhood of control nodes plus its four shared edge nodes.
///
/// Corner fields are [`ControlId`]s into `ContourGraph::controls`; the
/// center fields are resolved edge-node handles. `center_left` is the
/// bottom-left corner's `up` node, `center_right` the bottom-right's `up`,
/// `center_top` the top-left's `right`, and `center_bottom` the
/// bottom-left's `right` — so horizontally and vertically adjacent squares
/// reference the identical edge-node handles.
#[derive(Debug, Clone, Copy)]
pub struct Square {
    pub bottom_left: ControlId,
    pub top_left: ControlId,
    pub top_right: ControlId,
    pub bottom_right: ControlId,

    pub center_left: NodeId,
    pub center_right: NodeId,
    pub center_top: NodeId,
    pub center_bottom: NodeId,
}

/// All squares of a lattice, row-major, dimensions one less than the grid's.
#[derive(Debug)]
pub struct SquareGrid {
    pub squares: Vec<Square>,
    width: usize,
    height: usize,
}

impl SquareGrid {
    /// Indexes every 2×2 neighborhood of `graph` into a square descriptor.
    ///
    /// A 1-wide or 1-tall lattice yields zero squares, which downstream
    /// meshing treats as a valid empty result.
    pub fn build(graph: &ContourGraph) -> Self {
        let width = graph.width().saturating_sub(1);
        let height = graph.height().saturating_sub(1);

        let mut squares = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let bottom_left = graph.control_id(x, y);
                let top_left = graph.control_id(x, y + 1);
                let top_right = graph.control_id(x + 1, y + 1);
                let bottom_right = graph.control_id(x + 1, y);

                squares.push(Square {
                    bottom_left,
                    top_left,
                    top_right,
                    bottom_right,
                    center_left: graph.controls[bottom_left].up,
                    center_right: graph.controls[bottom_right].up,
                    center_top: graph.controls[top_left].right,
                    center_bottom: graph.controls[bottom_left].right,
                });
            }
        }

        Self {
            squares,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The square at `(x, y)` in square coordinates.
    #[inline]
    pub fn square(&self, x: usize, y: usize) -> &Square {
        debug_assert!(x < self.width && y < self.height);
        &self.squares[y * self.width + x]
    }
}
