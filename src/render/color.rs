//! HSB colour handling for ink and paper tones

use image::Rgb;

/// Hue in degrees, saturation and brightness in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    /// Hue in degrees, wrapped into `[0, 360)`
    pub hue: f64,
    /// Saturation in percent
    pub saturation: f64,
    /// Brightness in percent
    pub brightness: f64,
}

/// Dark sepia used for arrows and the frame
pub const INK: Hsb = Hsb::new(40.0, 80.0, 20.0);

/// Outline colour for glyphs
pub const OUTLINE: Rgb<u8> = Rgb([0, 0, 0]);

impl Hsb {
    /// Create a colour from hue degrees and saturation/brightness percentages
    pub const fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Convert to 8-bit RGB
    pub fn to_rgb(self) -> Rgb<u8> {
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let v = (self.brightness / 100.0).clamp(0.0, 1.0);
        let h = self.hue.rem_euclid(360.0) / 60.0;

        let chroma = v * s;
        let x = chroma * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
        let m = v - chroma;

        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Rgb([to_channel(r + m), to_channel(g + m), to_channel(b + m)])
    }
}

fn to_channel(unit: f64) -> u8 {
    (unit.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Alpha-composite `over` onto `base`
pub fn blend(base: Rgb<u8>, over: Rgb<u8>, alpha: f64) -> Rgb<u8> {
    let alpha = alpha.clamp(0.0, 1.0);
    let mix = |b: u8, o: u8| f64::from(o).mul_add(alpha, f64::from(b) * (1.0 - alpha)).round() as u8;
    let [br, bg, bb] = base.0;
    let [or, og, ob] = over.0;
    Rgb([mix(br, or), mix(bg, og), mix(bb, ob)])
}
