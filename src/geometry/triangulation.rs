//! Delaunay triangulation of sampled points

use crate::geometry::point::Point;

/// Triangle referencing three sampled points by value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle(pub [Point; 3]);

impl Triangle {
    /// The three undirected edges, in winding order
    pub const fn edges(&self) -> [(Point, Point); 3] {
        let [a, b, c] = self.0;
        [(a, b), (b, c), (c, a)]
    }
}

/// Triangulate a point set
///
/// Degenerate input (fewer than three points, or all points collinear)
/// produces no triangles.
pub fn triangulate(points: &[Point]) -> Vec<Triangle> {
    let coords: Vec<delaunator::Point> = points
        .iter()
        .map(|p| delaunator::Point { x: p.x, y: p.y })
        .collect();

    let triangulation = delaunator::triangulate(&coords);

    let triangles: Vec<Triangle> = triangulation
        .triangles
        .chunks_exact(3)
        .filter_map(|corners| match *corners {
            [a, b, c] => Some(Triangle([
                *points.get(a)?,
                *points.get(b)?,
                *points.get(c)?,
            ])),
            _ => None,
        })
        .collect();

    log::debug!(
        "triangulated {} points into {} triangles",
        points.len(),
        triangles.len()
    );
    triangles
}
