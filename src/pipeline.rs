//! High-level generation entry points.
//!
//! A full generation is a one-shot, synchronous pull:
//! 1. [`generate_grid`] — synthesize an activation grid from a [`MapConfig`].
//! 2. [`generate_mesh`] — build the node lattice, index its squares, and
//!    triangulate them into mesh buffers.
//!
//! Nothing persists between calls; each call works on fresh instances.

use crate::config::{ConfigError, MapConfig};
use crate::contour::ContourGraph;
use crate::grid::Grid2D;
use crate::mesher::{self, MeshData};
use crate::square_grid::SquareGrid;
use crate::synthesizer;

/// Synthesizes a fresh activation grid.
///
/// For any non-sentinel seed this is a pure function of `cfg`: two calls
/// with identical arguments return bit-identical grids.
///
/// ### Returns
/// The grid, or a [`ConfigError`] if `cfg` fails validation.
pub fn generate_grid(cfg: &MapConfig) -> Result<Grid2D, ConfigError> {
    synthesizer::synthesize(cfg)
}

/// Extracts the contour mesh of a grid.
///
/// `cell_size` is the world-space edge length of one grid cell and must
/// be positive and finite. The grid is read-only here; an all-empty grid
/// produces a valid empty mesh.
pub fn generate_mesh(grid: &Grid2D, cell_size: f32) -> Result<MeshData, ConfigError> {
    if !(cell_size > 0.0) || !cell_size.is_finite() {
        return Err(ConfigError::NonPositiveCellSize(cell_size));
    }

    let graph = ContourGraph::build(grid, cell_size);
    let squares = SquareGrid::build(&graph);
    Ok(mesher::triangulate(&graph, &squares))
}
