use crate::coords::Vec2;
use crate::paint::{Color, Paint};
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Ring;

/// Circle draw payload.
///
/// `fill` paints the disc up to `radius`; `ring`, when present, strokes a band
/// of `ring.width` centered on `radius` on top of the fill.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub fill: Paint,
    pub ring: Option<Ring>,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, fill: Paint, ring: Option<Ring>) -> Self {
        Self { center, radius, fill, ring }
    }
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        fill: Paint,
        ring: Option<Ring>,
    ) {
        self.push(z, DrawCmd::Circle(CircleCmd::new(center, radius, fill, ring)));
    }

    /// Records a solid filled circle.
    #[inline]
    pub fn push_solid_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, color: Color) {
        self.push_circle(z, center, radius, Paint::Solid(color), None);
    }

    /// Records a stroke-only circle (transparent fill).
    #[inline]
    pub fn push_ring(&mut self, z: ZIndex, center: Vec2, radius: f32, ring: Ring) {
        self.push_circle(
            z,
            center,
            radius,
            Paint::Solid(Color::transparent()),
            Some(ring),
        );
    }
}
