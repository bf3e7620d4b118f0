pub(crate) mod common;

mod circle;
mod hand;

pub use circle::CircleRenderer;
pub use hand::HandRenderer;

use crate::scene::ZIndex;

/// Inclusive z-index band a renderer invocation is restricted to.
///
/// Lets one pipeline run multiple times per frame over disjoint bands so
/// different shape types can interleave by z despite per-type render passes.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LayerRange {
    pub min: ZIndex,
    pub max: ZIndex,
}

impl LayerRange {
    #[inline]
    pub const fn new(min: ZIndex, max: ZIndex) -> Self {
        Self { min, max }
    }

    /// The unbounded band.
    #[inline]
    pub const fn all() -> Self {
        Self::new(ZIndex(i32::MIN), ZIndex(i32::MAX))
    }

    /// Everything strictly below `band`.
    #[inline]
    pub const fn below(band: LayerRange) -> Self {
        Self::new(ZIndex(i32::MIN), ZIndex(band.min.0 - 1))
    }

    /// Everything strictly above `band`.
    #[inline]
    pub const fn above(band: LayerRange) -> Self {
        Self::new(ZIndex(band.max.0 + 1), ZIndex(i32::MAX))
    }

    #[inline]
    pub fn contains(self, z: ZIndex) -> bool {
        self.min <= z && z <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_splits_are_disjoint_and_exhaustive() {
        let band = LayerRange::new(ZIndex::new(1), ZIndex::new(3));
        let below = LayerRange::below(band);
        let above = LayerRange::above(band);

        for z in -2..=6 {
            let z = ZIndex::new(z);
            let hits =
                [below.contains(z), band.contains(z), above.contains(z)]
                    .iter()
                    .filter(|&&b| b)
                    .count();
            assert_eq!(hits, 1, "z {z:?} must fall in exactly one band");
        }
    }
}
