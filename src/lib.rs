//! Procedural 2-D cave synthesis and marching-squares contour meshing.
//!
//! Main components:
//! - [`config`] — generation parameters and validation.
//! - [`grid`] — the scalar activation grid.
//! - [`synthesizer`] — random fill and cellular-automaton smoothing.
//! - [`contour`] — control/edge node lattice built over a grid.
//! - [`square_grid`] — 2×2 neighborhood squares over the node lattice.
//! - [`mesher`] — case-table triangulation into vertex/index buffers.
//! - [`pipeline`] — high-level `generate_grid` / `generate_mesh` entry points.
//! - [`types`] — shared type aliases and IDs.

pub mod config;
pub mod contour;
pub mod grid;
pub mod mesher;
pub mod pipeline;
pub mod square_grid;
pub mod synthesizer;
pub mod types;

pub use config::{ConfigError, MapConfig};
pub use grid::Grid2D;
pub use mesher::MeshData;
pub use pipeline::{generate_grid, generate_mesh};
