//! Planar coordinates with exact structural identity
//!
//! A point is both a graph node identity and a draw position, so equality and
//! hashing compare the raw coordinate bits rather than an approximate distance.

use std::hash::{Hash, Hasher};

/// Two-dimensional coordinate in canvas space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate (grows downward)
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Translate by the given deltas
    pub const fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    // Negative zero compares equal to zero, so it must hash identically
    fn key(self) -> (u64, u64) {
        let fold = |v: f64| if v == 0.0 { 0.0_f64.to_bits() } else { v.to_bits() };
        (fold(self.x), fold(self.y))
    }
}

// Coordinates come from sampling and are never NaN
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}
