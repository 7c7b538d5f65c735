//! Raster drawing surface for the illustration

use crate::geometry::Point;
use crate::io::configuration::{MARGIN_FRACTION, PAPER_BLANK};
use crate::render::arrow::Arrow;
use crate::render::color::{INK, OUTLINE, blend};
use crate::render::glyph::{Glyph, Mark};
use crate::render::paper::PaperTexture;
use image::{Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_circle_mut,
    draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::rect::Rect;

/// Stroke width of the border around the sheet
pub const FRAME_STROKE: u32 = 10;
/// Radius of waypoint glyphs in pixels
pub const GLYPH_RADIUS: f64 = 8.0;

/// Drawing operations the scene needs from an output surface
///
/// Waypoint coordinates are in layout space; implementations apply their own
/// origin offset. The paper texture and frame cover the whole surface.
pub trait Renderer {
    /// Paint the paper texture over the whole surface at the given opacity
    fn draw_background_texture(&mut self, alpha: f64);

    /// Paint the border around the sheet
    fn draw_frame(&mut self);

    /// Draw a dashed arrow from one waypoint toward another
    fn draw_arrow(&mut self, from: Point, to: Point);

    /// Draw a decoration centered on a waypoint
    fn draw_glyph(&mut self, at: Point, glyph: Glyph);
}

/// In-memory RGB canvas with a precomputed paper texture
pub struct RasterCanvas {
    image: RgbImage,
    paper: PaperTexture,
    origin: f64,
    ink: Rgb<u8>,
}

impl RasterCanvas {
    /// Blank square canvas whose layout origin sits inside the margin
    pub fn new(size: u32, noise_seed: u32) -> Self {
        Self {
            image: RgbImage::from_pixel(size, size, PAPER_BLANK),
            paper: PaperTexture::new(size, size, noise_seed),
            origin: f64::from(size) * MARGIN_FRACTION,
            ink: INK.to_rgb(),
        }
    }

    /// Rendered pixels so far
    pub const fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Take ownership of the rendered pixels
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    fn to_canvas(&self, p: Point) -> Point {
        p.offset(self.origin, self.origin)
    }

    fn fill_polygon(&mut self, vertices: &[Point], color: Rgb<u8>) {
        let mut poly: Vec<imageproc::point::Point<i32>> = Vec::with_capacity(vertices.len());
        for v in vertices {
            let pixel = imageproc::point::Point::new(v.x.round() as i32, v.y.round() as i32);
            if poly.last() != Some(&pixel) {
                poly.push(pixel);
            }
        }
        // Rounding can collapse small shapes onto a closed or single point
        if poly.len() > 1 && poly.first() == poly.last() {
            poly.pop();
        }
        if poly.len() >= 3 {
            draw_polygon_mut(&mut self.image, &poly, color);
        }
    }
}

impl Renderer for RasterCanvas {
    fn draw_background_texture(&mut self, alpha: f64) {
        for (x, y, pixel) in self.image.enumerate_pixels_mut() {
            if let Some(tone) = self.paper.color(x, y) {
                *pixel = blend(*pixel, tone, alpha);
            }
        }
    }

    fn draw_frame(&mut self) {
        // Stroke is centered on the sheet edge, so half of it falls off-canvas
        let band = FRAME_STROKE / 2;
        let (width, height) = self.image.dimensions();
        if band == 0 || width == 0 || height == 0 {
            return;
        }
        let far_x = width.saturating_sub(band) as i32;
        let far_y = height.saturating_sub(band) as i32;
        for rect in [
            Rect::at(0, 0).of_size(width, band),
            Rect::at(0, far_y).of_size(width, band),
            Rect::at(0, 0).of_size(band, height),
            Rect::at(far_x, 0).of_size(band, height),
        ] {
            draw_filled_rect_mut(&mut self.image, rect, self.ink);
        }
    }

    fn draw_arrow(&mut self, from: Point, to: Point) {
        let Some(arrow) = Arrow::between(self.to_canvas(from), self.to_canvas(to)) else {
            return;
        };
        for (a, b) in &arrow.dashes {
            draw_line_segment_mut(
                &mut self.image,
                (a.x as f32, a.y as f32),
                (b.x as f32, b.y as f32),
                self.ink,
            );
        }
        let ink = self.ink;
        self.fill_polygon(&arrow.head, ink);
    }

    fn draw_glyph(&mut self, at: Point, glyph: Glyph) {
        let center = self.to_canvas(at);
        for mark in glyph.marks(GLYPH_RADIUS, OUTLINE) {
            match mark {
                Mark::Disc {
                    offset,
                    radius,
                    color,
                } => {
                    let c = center.offset(offset.0, offset.1);
                    draw_filled_circle_mut(
                        &mut self.image,
                        (c.x.round() as i32, c.y.round() as i32),
                        radius.round().max(1.0) as i32,
                        color,
                    );
                }
                Mark::Ring {
                    offset,
                    radius,
                    color,
                } => {
                    let c = center.offset(offset.0, offset.1);
                    draw_hollow_circle_mut(
                        &mut self.image,
                        (c.x.round() as i32, c.y.round() as i32),
                        radius.round().max(1.0) as i32,
                        color,
                    );
                }
                Mark::Polygon { vertices, color } => {
                    let points: Vec<Point> = vertices
                        .iter()
                        .map(|&(dx, dy)| center.offset(dx, dy))
                        .collect();
                    self.fill_polygon(&points, color);
                }
            }
        }
    }
}
