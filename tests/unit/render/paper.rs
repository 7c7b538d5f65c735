//! Tests for the Perlin paper texture

#[cfg(test)]
mod tests {
    use mazepaper::render::paper::{PaperTexture, tone};

    // Tests the field covers the canvas and nothing beyond it
    #[test]
    fn test_dimensions() {
        let paper = PaperTexture::new(40, 25, 1);

        assert_eq!(paper.dimensions(), (40, 25));
        assert!(paper.value(39, 24).is_some());
        assert!(paper.value(40, 0).is_none());
        assert!(paper.color(0, 25).is_none());
    }

    // Tests noise values stay in the unit interval and vary across the sheet
    #[test]
    fn test_values_normalized() {
        let paper = PaperTexture::new(64, 64, 3);
        let mut min = f64::MAX;
        let mut max = f64::MIN;

        for y in 0..64 {
            for x in 0..64 {
                let v = paper.value(x, y).unwrap_or(-1.0);
                assert!((0.0..=1.0).contains(&v), "value {v} out of range");
                min = min.min(v);
                max = max.max(v);
            }
        }

        assert!(max - min > 0.01, "texture is flat");
    }

    // Tests the same seed reproduces the texture and another seed changes it
    #[test]
    fn test_seeded_texture() {
        let a = PaperTexture::new(32, 32, 8);
        let b = PaperTexture::new(32, 32, 8);
        let c = PaperTexture::new(32, 32, 9);

        let sample = |p: &PaperTexture| -> Vec<f64> {
            (0..32)
                .flat_map(|y| (0..32).map(move |x| (x, y)))
                .filter_map(|(x, y)| p.value(x, y))
                .collect()
        };

        assert_eq!(sample(&a), sample(&b));
        assert_ne!(sample(&a), sample(&c));
    }

    // Tests peaks in the noise read as lighter paper
    #[test]
    fn test_tone_brightens_with_noise() {
        let luminance = |n: f64| -> u32 { tone(n).0.iter().map(|&c| u32::from(c)).sum() };

        assert!(luminance(1.0) > luminance(0.0));
        let [r, g, b] = tone(0.5).0;
        assert!(r > g && g > b, "paper should be warm");
    }
}
