/// Greedy path depletion loop and its result types
pub mod depletion;
/// Pipeline orchestration from point layout to rendering
pub mod executor;
/// Weighted planar graph with node removal and shortest paths
pub mod graph;
/// Seeded random choices shared across a run
pub mod selection;
