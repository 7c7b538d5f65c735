//! Dashed arrow geometry between two waypoints

use crate::geometry::Point;

/// Gap left between the arrow tip and the target waypoint
pub const ARROW_STANDOFF: f64 = 10.0;
/// Length of the arrowhead along the shaft, also its base width
pub const ARROW_HEAD_SIZE: f64 = 6.0;
/// Length of each dash and of each gap in the shaft
pub const DASH_LENGTH: f64 = 5.0;

/// Drawable pieces of one arrow
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    /// Visible shaft segments, from the tail toward the tip
    pub dashes: Vec<(Point, Point)>,
    /// Arrowhead triangle; the last vertex is the tip
    pub head: [Point; 3],
}

impl Arrow {
    /// Arrow from `from` pointing at `to`, stopping short of it
    ///
    /// Returns `None` when the waypoints are too close for the shaft to have
    /// any length after the standoff.
    pub fn between(from: Point, to: Point) -> Option<Self> {
        Self::with_dimensions(from, to, ARROW_STANDOFF, ARROW_HEAD_SIZE, DASH_LENGTH)
    }

    /// Arrow with explicit standoff, head size and dash length
    pub fn with_dimensions(
        from: Point,
        to: Point,
        standoff: f64,
        head_size: f64,
        dash: f64,
    ) -> Option<Self> {
        let distance = from.distance(to);
        let shaft = distance - standoff;
        if shaft <= 0.0 || dash <= 0.0 {
            return None;
        }

        let ux = (to.x - from.x) / distance;
        let uy = (to.y - from.y) / distance;
        let along = |t: f64| from.offset(ux * t, uy * t);

        let tip = along(shaft);
        let base = along(shaft - head_size);
        let half = head_size * 0.5;
        let head = [
            base.offset(-uy * half, ux * half),
            base.offset(uy * half, -ux * half),
            tip,
        ];

        let dashes = dash_spans(shaft, dash)
            .into_iter()
            .map(|(a, b)| (along(a), along(b)))
            .collect();

        Some(Self { dashes, head })
    }
}

/// Dash intervals along a line of the given length
///
/// Dashes and gaps alternate with equal length; the final dash is clipped to
/// the line's end.
pub fn dash_spans(length: f64, dash: f64) -> Vec<(f64, f64)> {
    if length <= 0.0 || dash <= 0.0 {
        return Vec::new();
    }
    let count = (length / (2.0 * dash)).ceil() as usize;
    (0..count)
        .map(|k| k as f64 * 2.0 * dash)
        .filter(|&start| start < length)
        .map(|start| (start, (start + dash).min(length)))
        .collect()
}
