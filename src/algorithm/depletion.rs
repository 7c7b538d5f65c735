//! Greedy path depletion over a shrinking graph
//!
//! Each round extracts the current shortest route between the two markers,
//! records it, then deletes one random interior waypoint so the next round is
//! forced onto a different (longer) route. Rounds must run strictly in order:
//! every search observes the deletion made by the round before it.

use crate::algorithm::graph::PathGraph;
use crate::algorithm::selection::RandomSelector;
use crate::geometry::Point;

/// Canvas pixels per depletion round
pub const PATH_BUDGET_DIVISOR: u32 = 50;

/// Number of depletion rounds for a canvas of the given side length
pub const fn path_budget(canvas_size: u32) -> usize {
    (canvas_size / PATH_BUDGET_DIVISOR) as usize
}

/// Ordered route from the start marker to the end marker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// Wrap an ordered list of waypoints
    pub const fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// All waypoints including both endpoints
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of waypoints
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the search found no route
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First waypoint
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Last waypoint
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Waypoints strictly between the two endpoints
    pub fn interior(&self) -> &[Point] {
        match self.points.as_slice() {
            [_, inner @ .., _] => inner,
            _ => &[],
        }
    }

    /// Consecutive waypoint pairs, in travel order
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).filter_map(|pair| match *pair {
            [a, b] => Some((a, b)),
            _ => None,
        })
    }

    /// Total length along the stored links
    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }
}

impl FromIterator<Point> for Path {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Graph and markers owned for the duration of one generation
///
/// Created once the graph is built and dropped after rendering consumes the
/// depletion result. The markers are never removed from the graph.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    /// Graph mutated in place by depletion
    pub graph: PathGraph,
    /// Fixed start marker
    pub start: Point,
    /// Fixed end marker
    pub end: Point,
}

impl GenerationContext {
    /// Bundle a graph with its two markers
    pub const fn new(graph: PathGraph, start: Point, end: Point) -> Self {
        Self { graph, start, end }
    }

    /// Whether a point is one of the two markers
    pub fn is_marker(&self, point: Point) -> bool {
        point == self.start || point == self.end
    }
}

/// Outcome of a depletion run
#[derive(Debug, Clone, Default)]
pub struct DepletionReport {
    /// Routes in the order they were found
    pub paths: Vec<Path>,
    /// Waypoints deleted from the graph, in deletion order
    pub removed: Vec<Point>,
    /// Whether the run stopped early because no route remained
    pub exhausted: bool,
}

impl DepletionReport {
    /// Every visited waypoint once, in first-visit order
    pub fn visited(&self) -> Vec<Point> {
        let mut seen = std::collections::HashSet::new();
        self.paths
            .iter()
            .flat_map(Path::points)
            .copied()
            .filter(|p| seen.insert(*p))
            .collect()
    }
}

/// Extract up to `budget` routes, deleting one random interior waypoint each round
///
/// Stops early, without error, once the markers are disconnected. A route
/// with no interior waypoint still consumes its round but leaves the graph
/// untouched.
pub fn deplete(
    context: &mut GenerationContext,
    budget: usize,
    selector: &mut RandomSelector,
) -> DepletionReport {
    let mut report = DepletionReport::default();

    for round in 0..budget {
        let path = context.graph.shortest_path(context.start, context.end);
        if path.is_empty() {
            log::debug!("round {round}: markers disconnected, stopping");
            report.exhausted = true;
            break;
        }

        let victim = selector
            .interior_index(path.len())
            .and_then(|idx| path.points().get(idx).copied());

        match victim {
            Some(point) => {
                context.graph.remove_node(point);
                report.removed.push(point);
                log::debug!(
                    "round {round}: {} waypoints, removed ({:.1}, {:.1})",
                    path.len(),
                    point.x,
                    point.y
                );
            }
            None => log::debug!("round {round}: direct link, nothing to remove"),
        }

        report.paths.push(path);
    }

    report
}
