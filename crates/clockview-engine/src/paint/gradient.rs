use crate::coords::Vec2;

use super::Color;

/// Gradient spread behavior outside the [0, 1] range.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

/// A single gradient stop.
///
/// `t` is expected in [0, 1] in typical usage, but is not strictly enforced.
/// Renderers may clamp/sort stops at build time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in logical pixel space.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as geometry.
/// - Stops define premultiplied linear colors.
/// - `spread` defines out-of-range behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self {
            start,
            end,
            stops,
            spread,
        }
    }

    /// Two-stop gradient from `a` at `start` to `b` at `end`, clamped at the
    /// edges. This is the only form the shaders evaluate natively.
    pub fn two_stop(start: Vec2, end: Vec2, a: Color, b: Color) -> Self {
        Self::new(
            start,
            end,
            vec![ColorStop::new(0.0, a), ColorStop::new(1.0, b)],
            SpreadMode::Pad,
        )
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_stop_is_valid() {
        let g = LinearGradient::two_stop(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 100.0),
            Color::from_srgb_u8(0x88, 0x88, 0x88, 0xFF),
            Color::from_srgb_u8(0x00, 0x00, 0x00, 0xFF),
        );
        assert!(g.is_valid());
        assert_eq!(g.spread, SpreadMode::Pad);
    }

    #[test]
    fn degenerate_axis_is_invalid() {
        let p = Vec2::new(5.0, 5.0);
        let g = LinearGradient::two_stop(p, p, Color::transparent(), Color::transparent());
        assert!(!g.is_valid());
    }
}
