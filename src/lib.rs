//! Procedural path-puzzle illustrations on textured paper
//!
//! Points are scattered over a disk, triangulated, and turned into a weighted
//! graph. Shortest routes between a fixed start and end marker are extracted
//! one after another, each time deleting a random waypoint of the route just
//! found, and the resulting paths are drawn as dashed arrows with glyphs.

#![forbid(unsafe_code)]

/// Path depletion loop, graph, randomness and pipeline orchestration
pub mod algorithm;
/// Point sampling and triangulation
pub mod geometry;
/// Command-line interface, configuration, export and error handling
pub mod io;
/// Canvas drawing of paths, glyphs and paper texture
pub mod render;

pub use io::error::{GenerationError, Result};
