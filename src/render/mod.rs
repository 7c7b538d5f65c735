//! Drawing the depleted paths onto textured paper

/// Dashed arrow geometry
pub mod arrow;
/// Renderer trait and raster canvas implementation
pub mod canvas;
/// HSB colour conversion and blending
pub mod color;
/// Waypoint decorations
pub mod glyph;
/// Perlin-noise paper texture
pub mod paper;
/// Draw order for a finished sheet
pub mod scene;
