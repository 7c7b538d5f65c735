//! Layout constants and runtime configuration defaults

use image::Rgb;

/// Side length of the square canvas in pixels
pub const CANVAS_SIZE: u32 = 500;

/// Spatial frequency of the paper noise per pixel (vertical axis)
pub const NOISE_SCALE: f64 = 0.02;

/// Sampled square side as a fraction of the canvas
pub const SAMPLING_FRACTION: f64 = 0.9;
/// Offset of the layout origin from the canvas corner, as a fraction of the canvas
pub const MARGIN_FRACTION: f64 = 0.05;

/// Minimum distance between sampled points
pub const MIN_POINT_DISTANCE: f64 = 40.0;
/// Maximum spawn distance between sampled points
pub const MAX_POINT_DISTANCE: f64 = 80.0;
/// Candidate attempts per active sample
pub const SAMPLING_TRIES: u32 = 20;

/// Opacity of the paper pass painted over the ink
pub const OVERLAY_ALPHA: f64 = 0.3;
/// Canvas colour before the paper is painted
pub const PAPER_BLANK: Rgb<u8> = Rgb([255, 255, 255]);

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Output file written when none is given
pub const DEFAULT_OUTPUT: &str = "mazepaper.png";
/// Separator between the output stem and the seed in batch mode
pub const SEED_SEPARATOR: &str = "_";
