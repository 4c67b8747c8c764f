/// A constant glyph ramp together with the lightness buckets that index into it.
///
/// Glyphs are declared from the sparsest (space) to the densest (full block).
/// Each bucket is an inclusive upper bound paired with the ramp index it selects.
/// Bounds are checked in ascending order and the first match wins; anything above
/// the last bound selects `fallback`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphRamp {
    chars: &'static [char],
    buckets: &'static [(f64, usize)],
    fallback: usize,
}

impl GlyphRamp {
    /// Nine glyphs, nine buckets of width 1/9.
    pub const PLAIN: GlyphRamp = GlyphRamp {
        chars: &[' ', '.', ':', '-', '=', '+', '#', '%', '█'],
        buckets: &[
            (0.111, 0),
            (0.222, 1),
            (0.333, 2),
            (0.444, 3),
            (0.555, 4),
            (0.666, 5),
            (0.777, 6),
            (0.888, 7),
        ],
        fallback: 8,
    };

    /// Eighteen glyphs, buckets of width 1/18.
    ///
    /// The `(0.888, 0.944]` bucket selects index 17 just like the bucket above it,
    /// so index 16 (`▓`) is never produced. Existing output depends on this.
    pub const DITHERED: GlyphRamp = GlyphRamp {
        chars: &[
            ' ', '.', ',', '"', '`', ':', '-', '=', '+', '^', '~', '*', ';', '#', '%', '▒', '▓',
            '█',
        ],
        buckets: &[
            (0.055, 0),
            (0.111, 1),
            (0.166, 2),
            (0.222, 3),
            (0.277, 4),
            (0.333, 5),
            (0.388, 6),
            (0.444, 7),
            (0.499, 8),
            (0.555, 9),
            (0.611, 10),
            (0.666, 11),
            (0.722, 12),
            (0.777, 13),
            (0.833, 14),
            (0.888, 15),
            (0.944, 17),
        ],
        fallback: 17,
    };

    pub fn for_dither(dither: bool) -> Self {
        if dither {
            Self::DITHERED
        } else {
            Self::PLAIN
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Glyphs in declared order.
    pub fn chars(&self) -> &'static [char] {
        self.chars
    }

    /// Ramp index for a lightness value. Out of range input is clamped, NaN counts as 0.
    pub fn bucket(&self, lightness: f64) -> usize {
        let lightness = if lightness.is_nan() { 0.0 } else { lightness.clamp(0.0, 1.0) };
        self.buckets
            .iter()
            .find(|(upper, _)| lightness <= *upper)
            .map_or(self.fallback, |&(_, index)| index)
    }

    /// Glyphs in the order used for rendering.
    ///
    /// Without `invert` the declared order is reversed, so index 0 (the darkest
    /// bucket) is the densest glyph. With `invert` the declared order is used as is.
    pub fn ordered(&self, invert: bool) -> Vec<char> {
        (0..self.chars.len()).map(|index| self.glyph(index, invert)).collect()
    }

    pub fn glyph(&self, index: usize, invert: bool) -> char {
        let index = index.min(self.chars.len() - 1);
        if invert {
            self.chars[index]
        } else {
            self.chars[self.chars.len() - 1 - index]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_sizes() {
        assert_eq!(GlyphRamp::PLAIN.len(), 9);
        assert_eq!(GlyphRamp::DITHERED.len(), 18);
        assert_eq!(GlyphRamp::for_dither(true), GlyphRamp::DITHERED);
        assert_eq!(GlyphRamp::for_dither(false), GlyphRamp::PLAIN);
    }

    #[test]
    fn bucket_bounds_are_inclusive() {
        let ramp = GlyphRamp::PLAIN;
        assert_eq!(ramp.bucket(0.0), 0);
        assert_eq!(ramp.bucket(0.111), 0);
        assert_eq!(ramp.bucket(0.1111), 1);
        assert_eq!(ramp.bucket(0.888), 7);
        assert_eq!(ramp.bucket(0.889), 8);
        assert_eq!(ramp.bucket(1.0), 8);
    }

    /// Checks `bucket(t) == index` at each bound and that the next bucket starts just above it.
    fn assert_bounds(ramp: GlyphRamp, bounds: &[(f64, usize)]) {
        for (position, &(upper, index)) in bounds.iter().enumerate() {
            let next = bounds.get(position + 1).map_or(ramp.len() - 1, |&(_, next)| next);
            assert_eq!(ramp.bucket(upper), index, "at {upper}");
            assert_eq!(ramp.bucket(upper + 1e-9), next, "just above {upper}");
        }
    }

    #[test]
    fn plain_bucket_bounds() {
        assert_bounds(
            GlyphRamp::PLAIN,
            &[
                (0.111, 0),
                (0.222, 1),
                (0.333, 2),
                (0.444, 3),
                (0.555, 4),
                (0.666, 5),
                (0.777, 6),
                (0.888, 7),
            ],
        );
    }

    #[test]
    fn dithered_bucket_bounds() {
        assert_bounds(
            GlyphRamp::DITHERED,
            &[
                (0.055, 0),
                (0.111, 1),
                (0.166, 2),
                (0.222, 3),
                (0.277, 4),
                (0.333, 5),
                (0.388, 6),
                (0.444, 7),
                (0.499, 8),
                (0.555, 9),
                (0.611, 10),
                (0.666, 11),
                (0.722, 12),
                (0.777, 13),
                (0.833, 14),
                (0.888, 15),
                (0.944, 17),
            ],
        );
    }

    #[test]
    fn dithered_top_buckets_merge() {
        let ramp = GlyphRamp::DITHERED;
        assert_eq!(ramp.bucket(0.888), 15);
        assert_eq!(ramp.bucket(0.9), 17);
        assert_eq!(ramp.bucket(0.944), 17);
        assert_eq!(ramp.bucket(0.95), 17);
        assert_eq!(ramp.bucket(1.0), 17);

        let produced: Vec<usize> = (0..=1000).map(|i| ramp.bucket(i as f64 / 1000.0)).collect();
        assert!(!produced.contains(&16));
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        let ramp = GlyphRamp::PLAIN;
        assert_eq!(ramp.bucket(-0.5), 0);
        assert_eq!(ramp.bucket(7.0), 8);
        assert_eq!(ramp.bucket(f64::NAN), 0);
    }

    #[test]
    fn ordering_follows_invert_flag() {
        let ramp = GlyphRamp::PLAIN;
        assert_eq!(ramp.ordered(true).iter().collect::<String>(), " .:-=+#%█");
        assert_eq!(ramp.ordered(false).iter().collect::<String>(), "█%#+=-:. ");
        for index in 0..ramp.len() {
            assert_eq!(ramp.glyph(index, false), ramp.ordered(false)[index]);
            assert_eq!(ramp.glyph(index, true), ramp.ordered(true)[index]);
        }
    }
}
