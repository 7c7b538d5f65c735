//! Poisson-disk point scattering over a disk with pinned markers

use crate::geometry::point::Point;
use crate::io::error::{Result, invalid_parameter};
use fast_poisson::Poisson2D;

/// Square sampling area and the disk inscribed in it
#[derive(Debug, Clone, Copy)]
pub struct SamplingRegion {
    /// Side length of the square sampling area, anchored at the origin
    pub extent: f64,
    /// Minimum distance between any two samples
    pub min_distance: f64,
    /// Maximum distance at which new candidates are spawned from an existing sample
    pub max_distance: f64,
    /// Candidate attempts per active sample before it is retired
    pub tries: u32,
}

impl SamplingRegion {
    /// Center of the inscribed disk
    pub const fn center(&self) -> Point {
        Point::new(self.extent * 0.5, self.extent * 0.5)
    }

    /// Radius of the inscribed disk
    pub const fn radius(&self) -> f64 {
        self.extent * 0.5
    }

    /// Whether a point lies inside the square sampling area
    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.extent).contains(&p.x) && (0.0..=self.extent).contains(&p.y)
    }

    /// Whether a point lies on or inside the inscribed disk
    pub fn in_disk(&self, p: Point) -> bool {
        p.distance(self.center()) <= self.radius()
    }

    /// Check the region is one the sampler can fill
    ///
    /// # Errors
    ///
    /// Returns an error if the extent or distances are not positive, or if the
    /// spawn annulus is not `[min_distance, 2 * min_distance]`
    pub fn validate(&self) -> Result<()> {
        if self.extent.is_nan() || self.extent <= 0.0 {
            return Err(invalid_parameter(
                "extent",
                &self.extent,
                &"must be positive",
            ));
        }
        if self.min_distance.is_nan() || self.min_distance <= 0.0 {
            return Err(invalid_parameter(
                "min_distance",
                &self.min_distance,
                &"must be positive",
            ));
        }
        // The sampler spawns candidates in a fixed [r, 2r] annulus
        if (self.max_distance - 2.0 * self.min_distance).abs() > f64::EPSILON * self.max_distance {
            return Err(invalid_parameter(
                "max_distance",
                &self.max_distance,
                &format!("must be twice min_distance ({})", self.min_distance),
            ));
        }
        if self.tries == 0 {
            return Err(invalid_parameter("tries", &self.tries, &"must be at least 1"));
        }
        Ok(())
    }
}

/// Scatter points across the region's disk, keeping every pinned point
///
/// Pinned points come first in the result, in the order given, and always
/// survive. Samples closer than `min_distance` to a pin are discarded so the
/// spacing guarantee holds for the combined set, then samples outside the disk
/// are dropped.
///
/// # Errors
///
/// Returns an error if the region is invalid or a pinned point lies outside
/// the disk
pub fn sample_points(region: &SamplingRegion, pinned: &[Point], seed: u64) -> Result<Vec<Point>> {
    region.validate()?;
    if let Some(outside) = pinned
        .iter()
        .find(|p| !region.contains(**p) || !region.in_disk(**p))
    {
        return Err(invalid_parameter(
            "pinned",
            &format!("({}, {})", outside.x, outside.y),
            &format!("lies outside the disk of radius {}", region.radius()),
        ));
    }

    let mut points: Vec<Point> = Vec::with_capacity(pinned.len());
    for &pin in pinned {
        if !points.contains(&pin) {
            points.push(pin);
        }
    }

    let samples = Poisson2D::new()
        .with_dimensions([region.extent, region.extent], region.min_distance)
        .with_samples(region.tries)
        .with_seed(seed)
        .iter()
        .map(Point::from)
        .filter(|p| {
            pinned
                .iter()
                .all(|pin| pin.distance(*p) >= region.min_distance)
        })
        .collect::<Vec<_>>();

    points.extend(samples);
    points.retain(|p| region.in_disk(*p));

    log::debug!(
        "sampled {} points (minimum spacing {}) inside disk of radius {}",
        points.len(),
        region.min_distance,
        region.radius()
    );
    Ok(points)
}
