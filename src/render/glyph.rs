//! Waypoint decorations and their pictogram geometry
//!
//! Glyphs are drawn as small vector pictograms instead of font text, so the
//! renderer needs no font files.

use crate::render::color::Hsb;
use image::Rgb;

/// Decoration placed on a visited waypoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Start marker
    Start,
    /// End marker
    End,
    /// Hazard on an intermediate waypoint
    Skull,
    /// Reward on an intermediate waypoint
    Treasure,
    /// Unknown intermediate waypoint
    Mystery,
}

/// Relative odds of each decoration for intermediate waypoints
pub const DECORATION_WEIGHTS: [(Glyph, f64); 3] = [
    (Glyph::Skull, 3.0),
    (Glyph::Treasure, 1.0),
    (Glyph::Mystery, 1.0),
];

/// One filled primitive of a pictogram, relative to the glyph center
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    /// Filled circle
    Disc {
        /// Center offset from the glyph center
        offset: (f64, f64),
        /// Circle radius
        radius: f64,
        /// Fill colour
        color: Rgb<u8>,
    },
    /// Circle outline
    Ring {
        /// Center offset from the glyph center
        offset: (f64, f64),
        /// Circle radius
        radius: f64,
        /// Stroke colour
        color: Rgb<u8>,
    },
    /// Filled polygon
    Polygon {
        /// Vertex offsets from the glyph center
        vertices: Vec<(f64, f64)>,
        /// Fill colour
        color: Rgb<u8>,
    },
}

impl Glyph {
    /// Emoji this glyph stands in for
    pub const fn symbol(self) -> char {
        match self {
            Self::Start => '😀',
            Self::End => '😈',
            Self::Skull => '💀',
            Self::Treasure => '💰',
            Self::Mystery => '❓',
        }
    }

    /// Body colour of the pictogram
    pub fn fill(self) -> Rgb<u8> {
        match self {
            Self::Start => Hsb::new(50.0, 85.0, 100.0),
            Self::End => Hsb::new(275.0, 60.0, 70.0),
            Self::Skull => Hsb::new(45.0, 8.0, 95.0),
            Self::Treasure => Hsb::new(42.0, 85.0, 90.0),
            Self::Mystery => Hsb::new(0.0, 75.0, 85.0),
        }
        .to_rgb()
    }

    /// Pictogram primitives for a glyph of the given radius, back to front
    pub fn marks(self, radius: f64, outline: Rgb<u8>) -> Vec<Mark> {
        let r = radius;
        let dark = Rgb([30, 20, 10]);
        let light = Rgb([250, 245, 235]);

        let mut marks = vec![
            Mark::Disc {
                offset: (0.0, 0.0),
                radius: r,
                color: self.fill(),
            },
            Mark::Ring {
                offset: (0.0, 0.0),
                radius: r,
                color: outline,
            },
        ];

        let eyes = |color| {
            [-1.0, 1.0].map(|side| Mark::Disc {
                offset: (side * r / 3.0, -r / 4.0),
                radius: r / 6.0,
                color,
            })
        };

        match self {
            Self::Start => {
                marks.extend(eyes(dark));
                marks.push(Mark::Polygon {
                    vertices: vec![(-r / 2.0, r / 4.0), (r / 2.0, r / 4.0), (0.0, r * 0.65)],
                    color: dark,
                });
            }
            Self::End => {
                for side in [-1.0, 1.0] {
                    marks.push(Mark::Polygon {
                        vertices: vec![
                            (side * r * 0.35, -r * 0.85),
                            (side * r * 0.85, -r * 0.35),
                            (side * r * 0.95, -r * 1.25),
                        ],
                        color: self.fill(),
                    });
                }
                marks.extend(eyes(light));
                marks.push(Mark::Polygon {
                    vertices: vec![(-r / 2.0, r / 3.0), (r / 2.0, r / 3.0), (0.0, r * 0.55)],
                    color: dark,
                });
            }
            Self::Skull => {
                marks.extend(eyes(dark));
                marks.push(Mark::Polygon {
                    vertices: vec![(0.0, 0.0), (r / 6.0, r / 3.0), (-r / 6.0, r / 3.0)],
                    color: dark,
                });
            }
            Self::Treasure => {
                marks.push(Mark::Ring {
                    offset: (0.0, 0.0),
                    radius: r * 0.6,
                    color: dark,
                });
                marks.push(Mark::Polygon {
                    vertices: vec![
                        (-r / 8.0, -r / 3.0),
                        (r / 8.0, -r / 3.0),
                        (r / 8.0, r / 3.0),
                        (-r / 8.0, r / 3.0),
                    ],
                    color: dark,
                });
            }
            Self::Mystery => {
                marks.push(Mark::Polygon {
                    vertices: vec![
                        (-r / 8.0, -r * 0.6),
                        (r / 8.0, -r * 0.6),
                        (r / 8.0, r * 0.15),
                        (-r / 8.0, r * 0.15),
                    ],
                    color: light,
                });
                marks.push(Mark::Disc {
                    offset: (0.0, r * 0.45),
                    radius: r / 7.0,
                    color: light,
                });
            }
        }

        marks
    }
}
