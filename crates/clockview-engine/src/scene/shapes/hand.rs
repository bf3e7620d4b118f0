use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Clock-hand draw payload: a radial tick from `center` to the point at
/// `radius` in the direction of `angle_deg`.
///
/// `angle_deg` is measured clockwise from the 3-o'clock direction (+Y down
/// makes clockwise the positive rotation). The renderer draws the segment
/// with round caps at `width` stroke width, so a hand at any angle renders
/// as a thin radial line — the original widget's zero-sweep filled arc.
#[derive(Debug, Clone, PartialEq)]
pub struct HandCmd {
    pub center: Vec2,
    pub angle_deg: f32,
    pub radius: f32,
    pub width: f32,
    pub color: Color,
}

impl HandCmd {
    #[inline]
    pub fn new(center: Vec2, angle_deg: f32, radius: f32, width: f32, color: Color) -> Self {
        Self { center, angle_deg, radius, width, color }
    }

    /// Unit direction vector for this hand's angle.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        let rad = self.angle_deg.to_radians();
        Vec2::new(rad.cos(), rad.sin())
    }
}

impl DrawList {
    /// Records a clock-hand draw command.
    #[inline]
    pub fn push_hand(
        &mut self,
        z: ZIndex,
        center: Vec2,
        angle_deg: f32,
        radius: f32,
        width: f32,
        color: Color,
    ) {
        self.push(z, DrawCmd::Hand(HandCmd::new(center, angle_deg, radius, width, color)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn dir(angle_deg: f32) -> Vec2 {
        HandCmd::new(Vec2::zero(), angle_deg, 10.0, 2.0, Color::transparent()).direction()
    }

    #[test]
    fn zero_degrees_points_at_three_oclock() {
        let d = dir(0.0);
        assert!((d.x - 1.0).abs() < EPS);
        assert!(d.y.abs() < EPS);
    }

    #[test]
    fn minus_ninety_points_up() {
        // 12 o'clock: the -90° base offset maps onto screen-up (-Y).
        let d = dir(-90.0);
        assert!(d.x.abs() < EPS);
        assert!((d.y + 1.0).abs() < EPS);
    }

    #[test]
    fn ninety_points_down() {
        let d = dir(90.0);
        assert!(d.x.abs() < EPS);
        assert!((d.y - 1.0).abs() < EPS);
    }

    #[test]
    fn direction_is_modulo_360() {
        let a = dir(30.0);
        let b = dir(390.0);
        assert!((a.x - b.x).abs() < EPS);
        assert!((a.y - b.y).abs() < EPS);
    }
}
