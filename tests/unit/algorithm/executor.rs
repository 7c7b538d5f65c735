//! Tests for pipeline configuration and the end-to-end executor

#[cfg(test)]
mod tests {
    use mazepaper::algorithm::executor::{SketchConfig, SketchExecutor};
    use mazepaper::geometry::Point;
    use mazepaper::render::canvas::Renderer;
    use mazepaper::render::glyph::Glyph;

    #[derive(Default)]
    struct Tally {
        arrows: usize,
        glyphs: Vec<(Point, Glyph)>,
        textures: usize,
    }

    impl Renderer for Tally {
        fn draw_background_texture(&mut self, _alpha: f64) {
            self.textures += 1;
        }
        fn draw_frame(&mut self) {}
        fn draw_arrow(&mut self, _from: Point, _to: Point) {
            self.arrows += 1;
        }
        fn draw_glyph(&mut self, at: Point, glyph: Glyph) {
            self.glyphs.push((at, glyph));
        }
    }

    // Tests default layout matches the canvas proportions
    #[test]
    fn test_default_config() {
        let config = SketchConfig::default();

        assert_eq!(config.canvas_size, 500);
        assert_eq!(config.path_budget, 10);
        assert!((config.extent() - 450.0).abs() < 1e-9);
        assert_eq!(config.start_point(), Point::new(225.0, 450.0));
        assert_eq!(config.end_point(), Point::new(225.0, 0.0));
        assert!(config.validate().is_ok());
    }

    // Tests invalid parameters are rejected before any work
    #[test]
    fn test_invalid_config_rejected() {
        let mut config = SketchConfig::default();
        config.path_budget = 0;
        assert!(SketchExecutor::new(config, 1).is_err());

        let mut config = SketchConfig::default();
        config.max_distance = config.min_distance;
        assert!(config.validate().is_err());

        let config = SketchConfig::for_canvas(0);
        assert!(config.validate().is_err());
    }

    // Tests the built graph holds both markers and is linked
    #[test]
    fn test_layout_contains_markers() {
        let executor = SketchExecutor::new(SketchConfig::default(), 42)
            .expect("Failed to create executor");
        let context = executor.context();

        assert!(context.graph.contains(context.start));
        assert!(context.graph.contains(context.end));
        assert!(context.graph.node_count() > 10);
        assert!(context.graph.link_count() >= context.graph.node_count());
    }

    // Tests depletion runs once and keeps the markers
    #[test]
    fn test_deplete_is_memoized() {
        let mut executor = SketchExecutor::new(SketchConfig::default(), 7)
            .expect("Failed to create executor");

        let first = executor.deplete().clone();
        let nodes_after = executor.context().graph.node_count();
        let second = executor.deplete().clone();

        assert!(!first.paths.is_empty());
        assert!(first.paths.len() <= executor.config().path_budget);
        assert_eq!(first.paths, second.paths);
        assert_eq!(executor.context().graph.node_count(), nodes_after);

        let context = executor.context();
        assert!(context.graph.contains(context.start));
        assert!(context.graph.contains(context.end));
    }

    // Tests rendering draws one glyph per visited point and every arrow
    #[test]
    fn test_render_draws_report() {
        let mut executor = SketchExecutor::new(SketchConfig::default(), 11)
            .expect("Failed to create executor");
        let mut tally = Tally::default();

        executor.render(&mut tally);
        let report = executor.deplete().clone();

        let expected_arrows: usize = report.paths.iter().map(|p| p.len() - 1).sum();
        assert_eq!(tally.arrows, expected_arrows);
        assert_eq!(tally.glyphs.len(), report.visited().len());
        assert_eq!(tally.textures, 2);

        let context = executor.context();
        assert!(tally.glyphs.contains(&(context.start, Glyph::Start)));
        assert!(tally.glyphs.contains(&(context.end, Glyph::End)));
    }

    // Tests the same seed reproduces the same paths
    #[test]
    fn test_seeded_runs_match() {
        let mut first = SketchExecutor::new(SketchConfig::default(), 5)
            .expect("Failed to create executor");
        let mut second = SketchExecutor::new(SketchConfig::default(), 5)
            .expect("Failed to create executor");

        assert_eq!(first.noise_seed(), second.noise_seed());
        assert_eq!(first.deplete().paths, second.deplete().paths);
    }
}
