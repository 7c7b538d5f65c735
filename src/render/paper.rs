//! Perlin-noise paper texture
//!
//! The noise field is sampled once per canvas and reused for both the opaque
//! base layer and the translucent overlay, so both passes line up exactly.

use crate::io::configuration::NOISE_SCALE;
use crate::render::color::Hsb;
use image::Rgb;
use ndarray::Array2;
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

/// Octaves summed into the noise
pub const NOISE_OCTAVES: usize = 10;
/// Amplitude falloff between octaves
pub const NOISE_PERSISTENCE: f64 = 0.5;

/// Precomputed paper tones for every pixel
#[derive(Debug, Clone)]
pub struct PaperTexture {
    /// Noise value in `[0, 1]`, indexed by `[row, col]`
    field: Array2<f64>,
}

impl PaperTexture {
    /// Sample the noise field for a `width` by `height` canvas
    ///
    /// Horizontal frequency is halved to stretch fibres across the sheet.
    pub fn new(width: u32, height: u32, seed: u32) -> Self {
        let fbm = Fbm::<Perlin>::new(seed)
            .set_octaves(NOISE_OCTAVES)
            .set_persistence(NOISE_PERSISTENCE);

        let field = Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
            let sample = fbm.get([
                col as f64 * NOISE_SCALE * 0.5,
                row as f64 * NOISE_SCALE,
            ]);
            ((sample + 1.0) * 0.5).clamp(0.0, 1.0)
        });

        Self { field }
    }

    /// Canvas dimensions as `(width, height)`
    pub fn dimensions(&self) -> (u32, u32) {
        let (rows, cols) = self.field.dim();
        (cols as u32, rows as u32)
    }

    /// Noise value at a pixel, `None` outside the canvas
    pub fn value(&self, x: u32, y: u32) -> Option<f64> {
        self.field.get([y as usize, x as usize]).copied()
    }

    /// Paper colour at a pixel, `None` outside the canvas
    pub fn color(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        self.value(x, y).map(tone)
    }
}

/// Paper colour for a noise value: paler and brighter where the noise peaks
pub fn tone(n: f64) -> Rgb<u8> {
    Hsb::new(
        5.0f64.mul_add(-n, 40.0),
        10.0f64.mul_add(-n, 50.0),
        10.0f64.mul_add(n, 60.0),
    )
    .to_rgb()
}
