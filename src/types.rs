/// Identifier for a node in a [`crate::contour::ContourGraph`].
///
/// This is an index into `ContourGraph::nodes`, and is only meaningful
/// within the lifetime of a given `ContourGraph` instance.
pub type NodeId = usize;

/// Identifier for a control node in a [`crate::contour::ContourGraph`].
///
/// This is an index into `ContourGraph::controls` (row-major over grid
/// cells), distinct from the [`NodeId`] of the control node's own
/// position entry in the node arena.
pub type ControlId = usize;
