//! Tests for Delaunay triangulation output

#[cfg(test)]
mod tests {
    use mazepaper::geometry::Point;
    use mazepaper::geometry::triangulation::{Triangle, triangulate};

    // Tests a single triangle keeps its points
    #[test]
    fn test_three_points() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 3.0),
        ];

        let triangles = triangulate(&points);

        assert_eq!(triangles.len(), 1);
        let corners = triangles.first().expect("one triangle").0;
        for p in &points {
            assert!(corners.contains(p));
        }
    }

    // Tests a square splits into two triangles
    #[test]
    fn test_square() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];

        assert_eq!(triangulate(&points).len(), 2);
    }

    // Tests degenerate input produces no triangles
    #[test]
    fn test_degenerate_input() {
        assert!(triangulate(&[]).is_empty());
        assert!(triangulate(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).is_empty());

        let collinear: Vec<Point> = (0..5).map(|i| Point::new(f64::from(i), 0.0)).collect();
        assert!(triangulate(&collinear).is_empty());
    }

    // Tests triangle edges close the loop
    #[test]
    fn test_triangle_edges() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(0.0, 1.0);

        assert_eq!(Triangle([a, b, c]).edges(), [(a, b), (b, c), (c, a)]);
    }
}
