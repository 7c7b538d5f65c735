//! Point generation and triangulation feeding the path graph

/// Planar point type with exact coordinate identity
pub mod point;
/// Poisson-disk sampling inside a disk with pinned markers
pub mod sampling;
/// Delaunay triangulation of sampled points
pub mod triangulation;

pub use point::Point;
