//! Composition of one finished sheet

use crate::algorithm::depletion::{DepletionReport, GenerationContext};
use crate::algorithm::selection::RandomSelector;
use crate::io::configuration::OVERLAY_ALPHA;
use crate::render::canvas::Renderer;
use crate::render::glyph::Glyph;

/// Paint paper, frame, every depleted path and the waypoint glyphs
///
/// Arrows run along each path toward the end marker. Each visited waypoint
/// gets exactly one glyph, in first-visit order; intermediate waypoints draw
/// their decoration from `selector`. A translucent pass of paper finishes the
/// sheet so ink appears printed into the texture.
pub fn draw_scene<R: Renderer>(
    renderer: &mut R,
    report: &DepletionReport,
    context: &GenerationContext,
    selector: &mut RandomSelector,
) {
    renderer.draw_background_texture(1.0);
    renderer.draw_frame();

    for path in &report.paths {
        for (from, to) in path.segments() {
            renderer.draw_arrow(from, to);
        }
    }

    for point in report.visited() {
        let glyph = if point == context.start {
            Glyph::Start
        } else if point == context.end {
            Glyph::End
        } else {
            selector.decoration()
        };
        renderer.draw_glyph(point, glyph);
    }

    renderer.draw_background_texture(OVERLAY_ALPHA);
}
