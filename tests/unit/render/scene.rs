//! Tests for scene composition order

#[cfg(test)]
mod tests {
    use mazepaper::algorithm::depletion::{DepletionReport, GenerationContext, Path};
    use mazepaper::algorithm::graph::PathGraph;
    use mazepaper::algorithm::selection::RandomSelector;
    use mazepaper::geometry::Point;
    use mazepaper::io::configuration::OVERLAY_ALPHA;
    use mazepaper::render::canvas::Renderer;
    use mazepaper::render::glyph::Glyph;
    use mazepaper::render::scene::draw_scene;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Texture(f64),
        Frame,
        Arrow(Point, Point),
        Glyph(Point, Glyph),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Renderer for Recorder {
        fn draw_background_texture(&mut self, alpha: f64) {
            self.ops.push(Op::Texture(alpha));
        }
        fn draw_frame(&mut self) {
            self.ops.push(Op::Frame);
        }
        fn draw_arrow(&mut self, from: Point, to: Point) {
            self.ops.push(Op::Arrow(from, to));
        }
        fn draw_glyph(&mut self, at: Point, glyph: Glyph) {
            self.ops.push(Op::Glyph(at, glyph));
        }
    }

    const S: Point = Point::new(0.0, 100.0);
    const E: Point = Point::new(0.0, 0.0);
    const L: Point = Point::new(-30.0, 50.0);
    const R: Point = Point::new(30.0, 50.0);

    fn fixture() -> (DepletionReport, GenerationContext) {
        let report = DepletionReport {
            paths: vec![Path::new(vec![S, L, E]), Path::new(vec![S, R, E])],
            removed: vec![L, R],
            exhausted: true,
        };
        let context = GenerationContext::new(PathGraph::new(), S, E);
        (report, context)
    }

    // Tests paper and frame come first and the overlay last
    #[test]
    fn test_layer_order() {
        let (report, context) = fixture();
        let mut recorder = Recorder::default();

        draw_scene(&mut recorder, &report, &context, &mut RandomSelector::new(1));

        assert_eq!(recorder.ops.first(), Some(&Op::Texture(1.0)));
        assert_eq!(recorder.ops.get(1), Some(&Op::Frame));
        assert_eq!(recorder.ops.last(), Some(&Op::Texture(OVERLAY_ALPHA)));

        let first_glyph = recorder
            .ops
            .iter()
            .position(|op| matches!(op, Op::Glyph(..)))
            .unwrap_or(0);
        let last_arrow = recorder
            .ops
            .iter()
            .rposition(|op| matches!(op, Op::Arrow(..)))
            .unwrap_or(usize::MAX);
        assert!(last_arrow < first_glyph, "glyphs must be drawn over arrows");
    }

    // Tests arrows follow each path toward the end marker
    #[test]
    fn test_arrows_point_toward_end() {
        let (report, context) = fixture();
        let mut recorder = Recorder::default();

        draw_scene(&mut recorder, &report, &context, &mut RandomSelector::new(2));

        let arrows: Vec<&Op> = recorder
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Arrow(..)))
            .collect();
        assert_eq!(
            arrows,
            vec![
                &Op::Arrow(S, L),
                &Op::Arrow(L, E),
                &Op::Arrow(S, R),
                &Op::Arrow(R, E),
            ]
        );
    }

    // Tests markers get fixed glyphs and each waypoint is labelled once
    #[test]
    fn test_glyph_assignment() {
        let (report, context) = fixture();
        let mut recorder = Recorder::default();

        draw_scene(&mut recorder, &report, &context, &mut RandomSelector::new(3));

        let glyphs: Vec<(Point, Glyph)> = recorder
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Glyph(at, glyph) => Some((*at, *glyph)),
                _ => None,
            })
            .collect();

        let points: Vec<Point> = glyphs.iter().map(|(p, _)| *p).collect();
        assert_eq!(points, vec![S, L, E, R]);
        assert!(glyphs.contains(&(S, Glyph::Start)));
        assert!(glyphs.contains(&(E, Glyph::End)));
        for (point, glyph) in glyphs {
            if point == L || point == R {
                assert!(matches!(glyph, Glyph::Skull | Glyph::Treasure | Glyph::Mystery));
            }
        }
    }

    // Tests an empty report still produces a framed sheet
    #[test]
    fn test_empty_report() {
        let (_, context) = fixture();
        let mut recorder = Recorder::default();

        draw_scene(
            &mut recorder,
            &DepletionReport::default(),
            &context,
            &mut RandomSelector::new(4),
        );

        assert_eq!(
            recorder.ops,
            vec![Op::Texture(1.0), Op::Frame, Op::Texture(OVERLAY_ALPHA)]
        );
    }
}
