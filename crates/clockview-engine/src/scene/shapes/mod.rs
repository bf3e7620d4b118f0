pub(crate) mod circle;
pub(crate) mod hand;

pub use circle::CircleCmd;
pub use hand::HandCmd;

use crate::paint::Paint;

/// Stroke drawn along a circle's radius line (centered on it).
///
/// Unlike a plain solid border, the ring carries a full `Paint` so it can be
/// stroked with a gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub width: f32,
    pub paint: Paint,
}

impl Ring {
    #[inline]
    pub fn new(width: f32, paint: Paint) -> Self {
        Self { width, paint }
    }
}
