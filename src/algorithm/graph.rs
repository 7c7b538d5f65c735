//! Weighted undirected graph over sampled points
//!
//! Nodes are identified by their exact coordinates. Link weights are the
//! Euclidean distance between endpoints at insertion time and never change;
//! removing a node only changes adjacency.

use crate::algorithm::depletion::Path;
use crate::geometry::Point;
use crate::geometry::triangulation::Triangle;
use petgraph::algo::astar;
use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use std::collections::HashMap;

/// Mutable planar graph with stable node identities
///
/// Backed by a stable graph so removing a node leaves every other node's
/// index valid, which keeps the coordinate index consistent without rebuilds.
#[derive(Debug, Clone, Default)]
pub struct PathGraph {
    graph: StableUnGraph<Point, f64>,
    index: HashMap<Point, NodeIndex>,
}

impl PathGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph with one link per triangle edge
    ///
    /// Edges shared by adjacent triangles collapse into a single link.
    pub fn from_triangles(triangles: &[Triangle]) -> Self {
        let mut graph = Self::new();
        for triangle in triangles {
            for (a, b) in triangle.edges() {
                graph.add_link(a, b);
            }
        }
        graph
    }

    /// Insert a node if it is not already present, returning its index
    pub fn insert_node(&mut self, point: Point) -> NodeIndex {
        if let Some(&ix) = self.index.get(&point) {
            return ix;
        }
        let ix = self.graph.add_node(point);
        self.index.insert(point, ix);
        ix
    }

    /// Link two points, inserting either endpoint as needed
    ///
    /// The weight is the distance between the points. Returns `false` when the
    /// link already existed or both endpoints are the same point.
    pub fn add_link(&mut self, a: Point, b: Point) -> bool {
        if a == b {
            return false;
        }
        let ia = self.insert_node(a);
        let ib = self.insert_node(b);
        if self.graph.contains_edge(ia, ib) {
            return false;
        }
        self.graph.add_edge(ia, ib, a.distance(b));
        true
    }

    /// Delete a node together with every incident link
    ///
    /// Returns `false` if the node was not present.
    pub fn remove_node(&mut self, point: Point) -> bool {
        self.index
            .remove(&point)
            .and_then(|ix| self.graph.remove_node(ix))
            .is_some()
    }

    /// Whether the point is a node of the graph
    pub fn contains(&self, point: Point) -> bool {
        self.index.contains_key(&point)
    }

    /// Whether two nodes are directly linked
    pub fn has_link(&self, a: Point, b: Point) -> bool {
        self.link_weight(a, b).is_some()
    }

    /// Stored weight of the link between two nodes
    pub fn link_weight(&self, a: Point, b: Point) -> Option<f64> {
        let ia = *self.index.get(&a)?;
        let ib = *self.index.get(&b)?;
        self.graph
            .find_edge(ia, ib)
            .and_then(|edge| self.graph.edge_weight(edge))
            .copied()
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of links
    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All surviving nodes
    pub fn nodes(&self) -> impl Iterator<Item = Point> + '_ {
        self.graph
            .node_indices()
            .filter_map(|ix| self.graph.node_weight(ix).copied())
    }

    /// Shortest path between two nodes by stored link weight
    ///
    /// Uses A* with the straight-line distance to `end` as heuristic, which
    /// never overestimates because every weight is itself a straight-line
    /// distance. The result is empty when either endpoint is missing or no
    /// route exists.
    pub fn shortest_path(&self, start: Point, end: Point) -> Path {
        let (Some(&from), Some(&to)) = (self.index.get(&start), self.index.get(&end)) else {
            return Path::default();
        };

        let found = astar(
            &self.graph,
            from,
            |ix| ix == to,
            |edge| *edge.weight(),
            |ix| self.graph.node_weight(ix).map_or(0.0, |p| p.distance(end)),
        );

        found.map_or_else(Path::default, |(_, route)| {
            route
                .into_iter()
                .filter_map(|ix| self.graph.node_weight(ix).copied())
                .collect()
        })
    }
}
