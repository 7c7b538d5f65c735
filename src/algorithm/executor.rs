//! End-to-end generation of one illustration
//!
//! Stages run strictly in sequence on one thread: sample points, triangulate,
//! build the graph, deplete paths, then hand the result to a renderer.

use crate::algorithm::depletion::{DepletionReport, GenerationContext, deplete, path_budget};
use crate::algorithm::graph::PathGraph;
use crate::algorithm::selection::RandomSelector;
use crate::geometry::Point;
use crate::geometry::sampling::{SamplingRegion, sample_points};
use crate::geometry::triangulation::triangulate;
use crate::io::configuration::{
    CANVAS_SIZE, MAX_POINT_DISTANCE, MIN_POINT_DISTANCE, SAMPLING_FRACTION, SAMPLING_TRIES,
};
use crate::io::error::{Result, invalid_parameter};
use crate::render::canvas::Renderer;
use crate::render::scene::draw_scene;

/// Parameters controlling point layout and depletion
#[derive(Clone, Copy, Debug)]
pub struct SketchConfig {
    /// Side length of the square canvas in pixels
    pub canvas_size: u32,
    /// Minimum spacing between sampled points
    pub min_distance: f64,
    /// Maximum spawn distance between sampled points
    pub max_distance: f64,
    /// Candidate attempts per active sample
    pub sampling_tries: u32,
    /// Maximum number of depletion rounds
    pub path_budget: usize,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self::for_canvas(CANVAS_SIZE)
    }
}

impl SketchConfig {
    /// Default layout for a canvas of the given size
    pub const fn for_canvas(canvas_size: u32) -> Self {
        Self {
            canvas_size,
            min_distance: MIN_POINT_DISTANCE,
            max_distance: MAX_POINT_DISTANCE,
            sampling_tries: SAMPLING_TRIES,
            path_budget: path_budget(canvas_size),
        }
    }

    /// Side length of the sampled square (and diameter of its disk)
    pub fn extent(&self) -> f64 {
        f64::from(self.canvas_size) * SAMPLING_FRACTION
    }

    /// Sampling region derived from the canvas
    pub fn region(&self) -> SamplingRegion {
        SamplingRegion {
            extent: self.extent(),
            min_distance: self.min_distance,
            max_distance: self.max_distance,
            tries: self.sampling_tries,
        }
    }

    /// Start marker, at the bottom of the disk
    pub fn start_point(&self) -> Point {
        let extent = self.extent();
        Point::new(extent * 0.5, extent)
    }

    /// End marker, at the top of the disk
    pub fn end_point(&self) -> Point {
        Point::new(self.extent() * 0.5, 0.0)
    }

    /// Check the parameters describe a drawable layout
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas is empty, the budget is zero, or the
    /// sampling region is invalid
    pub fn validate(&self) -> Result<()> {
        if self.canvas_size == 0 {
            return Err(invalid_parameter(
                "canvas_size",
                &self.canvas_size,
                &"must be positive",
            ));
        }
        if self.path_budget == 0 {
            return Err(invalid_parameter(
                "path_budget",
                &self.path_budget,
                &"must allow at least one path",
            ));
        }
        self.region().validate()
    }
}

/// Owns one run from point layout through rendering
pub struct SketchExecutor {
    config: SketchConfig,
    context: GenerationContext,
    selector: RandomSelector,
    noise_seed: u32,
    report: Option<DepletionReport>,
}

impl SketchExecutor {
    /// Lay out points and build the graph for a seeded run
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: SketchConfig, seed: u64) -> Result<Self> {
        config.validate()?;

        let mut selector = RandomSelector::new(seed);
        let sampling_seed = selector.derive_seed();
        let noise_seed = selector.derive_seed() as u32;

        let start = config.start_point();
        let end = config.end_point();
        let points = sample_points(&config.region(), &[start, end], sampling_seed)?;
        let triangles = triangulate(&points);

        let mut graph = PathGraph::from_triangles(&triangles);
        // Degenerate layouts still keep both markers as (isolated) nodes
        for &point in &points {
            graph.insert_node(point);
        }

        log::info!(
            "seed {seed}: {} points, {} triangles, {} links",
            points.len(),
            triangles.len(),
            graph.link_count()
        );

        Ok(Self {
            config,
            context: GenerationContext::new(graph, start, end),
            selector,
            noise_seed,
            report: None,
        })
    }

    /// Configuration this run was built with
    pub const fn config(&self) -> &SketchConfig {
        &self.config
    }

    /// Graph and markers in their current state
    pub const fn context(&self) -> &GenerationContext {
        &self.context
    }

    /// Seed for the paper texture
    pub const fn noise_seed(&self) -> u32 {
        self.noise_seed
    }

    /// Run the depletion loop once; later calls return the stored result
    pub fn deplete(&mut self) -> &DepletionReport {
        let Self {
            config,
            context,
            selector,
            report,
            ..
        } = self;
        report.get_or_insert_with(|| {
            let result = deplete(context, config.path_budget, selector);
            log::info!(
                "found {} of {} paths, removed {} waypoints{}",
                result.paths.len(),
                config.path_budget,
                result.removed.len(),
                if result.exhausted { " (exhausted)" } else { "" }
            );
            result
        })
    }

    /// Draw the depleted paths, running depletion first if needed
    pub fn render<R: Renderer>(&mut self, renderer: &mut R) {
        self.deplete();
        if let Some(report) = &self.report {
            draw_scene(renderer, report, &self.context, &mut self.selector);
        }
    }
}
