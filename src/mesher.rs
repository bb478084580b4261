//! Marching-squares triangulation of a [`SquareGrid`] into mesh buffers.
//!
//! Every square is summarized by a 4-bit configuration id built from its
//! corner activations. The id selects an ordered polygon of node roles
//! from a fixed 16-entry table; the polygon is fan-triangulated from its
//! first node. Vertex indices are handed out lazily, on a node's first
//! appearance anywhere in the mesh, and reused for every later reference
//! — that single mechanism deduplicates shared corners and edge midpoints
//! across neighboring squares.

use glam::Vec3;

use crate::contour::ContourGraph;
use crate::square_grid::{Square, SquareGrid};
use crate::types::{ControlId, NodeId};

/// The eight nodes a square can contribute to its contour polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    BottomLeft,
    TopLeft,
    TopRight,
    BottomRight,
    CenterLeft,
    CenterRight,
    CenterTop,
    CenterBottom,
}

use NodeRole::*;

/// Contour polygon per configuration id, in fan order.
///
/// The id is `bit0 * 1 + bit1 * 2 + bit2 * 4 + bit3 * 8` for solid
/// bottom-left, top-left, top-right, bottom-right corners respectively.
/// Entry order fixes the triangle winding; reversing any entry would flip
/// its faces.
pub const CASE_TABLE: [&[NodeRole]; 16] = [
    &[],
    &[CenterLeft, CenterBottom, BottomLeft],
    &[CenterLeft, TopLeft, CenterTop],
    &[CenterTop, CenterBottom, BottomLeft, TopLeft],
    &[CenterTop, TopRight, CenterRight],
    &[CenterLeft, CenterTop, TopRight, CenterRight, CenterBottom, BottomLeft],
    &[CenterRight, CenterLeft, TopLeft, TopRight],
    &[CenterRight, CenterBottom, BottomLeft, TopLeft, TopRight],
    &[CenterBottom, CenterRight, BottomRight],
    &[CenterLeft, CenterRight, BottomRight, BottomLeft],
    &[CenterBottom, CenterLeft, TopLeft, CenterTop, CenterRight, BottomRight],
    &[CenterTop, CenterRight, BottomRight, BottomLeft, TopLeft],
    &[CenterBottom, CenterTop, TopRight, BottomRight],
    &[CenterLeft, CenterTop, TopRight, BottomRight, BottomLeft],
    &[CenterBottom, CenterLeft, TopLeft, TopRight, BottomRight],
    &[BottomLeft, TopLeft, TopRight, BottomRight],
];

/// Finished mesh buffers.
///
/// `triangles` holds index triples into `vertices`; `normals` is parallel
/// to `vertices`. Positions are exported in 3-D with `z = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<u32>,
    pub normals: Vec<Vec3>,
}

impl MeshData {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }
}

/// Computes the 4-bit configuration id of a square from its corner
/// activations.
pub fn config_id(square: &Square, graph: &ContourGraph) -> usize {
    let solid = |c: ControlId| graph.controls[c].active > 0.0;
    (solid(square.bottom_left) as usize)
        + ((solid(square.top_left) as usize) << 1)
        + ((solid(square.top_right) as usize) << 2)
        + ((solid(square.bottom_right) as usize) << 3)
}

/// Resolves a role to the square's node handle for it.
fn resolve(role: NodeRole, square: &Square, graph: &ContourGraph) -> NodeId {
    match role {
        BottomLeft => graph.controls[square.bottom_left].node,
        TopLeft => graph.controls[square.top_left].node,
        TopRight => graph.controls[square.top_right].node,
        BottomRight => graph.controls[square.bottom_right].node,
        CenterLeft => square.center_left,
        CenterRight => square.center_right,
        CenterTop => square.center_top,
        CenterBottom => square.center_bottom,
    }
}

/// Triangulates every square of `squares` into one shared mesh.
///
/// Squares are visited row-major; within a square all polygon nodes are
/// registered in case-table order before the fan's index triples are
/// emitted. That exact order is what makes vertex indices (and therefore
/// whole buffers) reproducible, so it must not be parallelized or
/// reordered.
pub fn triangulate(graph: &ContourGraph, squares: &SquareGrid) -> MeshData {
    let mut vertex_ids: Vec<Option<u32>> = vec![None; graph.nodes.len()];
    let mut vertices: Vec<Vec3> = Vec::new();
    let mut triangles: Vec<u32> = Vec::new();

    for square in &squares.squares {
        let roles = CASE_TABLE[config_id(square, graph)];

        // Polygons never exceed 6 nodes.
        let mut polygon = [0u32; 6];
        for (slot, &role) in polygon.iter_mut().zip(roles) {
            let node = resolve(role, square, graph);
            *slot = match vertex_ids[node] {
                Some(v) => v,
                None => {
                    let v = vertices.len() as u32;
                    vertex_ids[node] = Some(v);
                    vertices.push(graph.position(node).extend(0.0));
                    v
                }
            };
        }

        for i in 2..roles.len() {
            triangles.push(polygon[0]);
            triangles.push(polygon[i - 1]);
            triangles.push(polygon[i]);
        }
    }

    let normals = accumulate_normals(&vertices, &triangles);

    log::debug!(
        "meshed {} squares into {} vertices, {} triangles",
        squares.squares.len(),
        vertices.len(),
        triangles.len() / 3
    );

    MeshData {
        vertices,
        triangles,
        normals,
    }
}

/// Averages unnormalized face normals into one unit normal per vertex.
fn accumulate_normals(vertices: &[Vec3], triangles: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; vertices.len()];
    for tri in triangles.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let face = (vertices[b] - vertices[a]).cross(vertices[c] - vertices[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }
    for n in &mut normals {
        *n = n.normalize_or_zero();
    }
    normals
}
