use crate::coords::{Rect, Vec2};
use crate::paint::{Color, LinearGradient, Paint};
use crate::render::LayerRange;
use crate::scene::shapes::Ring;
use crate::scene::{DrawList, ZIndex};

use super::state::ClockState;
use super::style::ClockStyle;

/// Measured size when a dimension is unconstrained.
pub const DEFAULT_SIZE: f32 = 300.0;

/// Stroke widths of the hands, hour / minute / second.
const HOUR_HAND_WIDTH: f32 = 6.0;
const MINUTE_HAND_WIDTH: f32 = 4.0;
const SECOND_HAND_WIDTH: f32 = 2.0;

/// Radius of the round center dot (a 16-px dot).
const CENTER_DOT_RADIUS: f32 = 8.0;

/// Top stop of the outer-ring gradient; the bottom stop is the configured
/// ring color.
const RING_GRADIENT_TOP: Color = Color::from_premul(
    0x88 as f32 / 255.0,
    0x88 as f32 / 255.0,
    0x88 as f32 / 255.0,
    1.0,
);

// z layers, bottom to top.
const Z_FACE: ZIndex = ZIndex(0);
const Z_SECOND_HAND: ZIndex = ZIndex(1);
const Z_MINUTE_HAND: ZIndex = ZIndex(2);
const Z_HOUR_HAND: ZIndex = ZIndex(3);
const Z_CENTER_DOT: ZIndex = ZIndex(4);
const Z_RING: ZIndex = ZIndex(5);

/// The z band occupied by hand commands; circles draw below and above it.
pub fn hand_band() -> LayerRange {
    LayerRange::new(Z_SECOND_HAND, Z_HOUR_HAND)
}

/// One dimension of a layout constraint.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SizeConstraint {
    /// The host dictates an exact extent in logical pixels.
    Exact(f32),
    /// No constraint; the widget falls back to [`DEFAULT_SIZE`].
    Unconstrained,
}

impl SizeConstraint {
    fn resolve(self) -> f32 {
        match self {
            SizeConstraint::Exact(v) => v.max(0.0),
            SizeConstraint::Unconstrained => DEFAULT_SIZE,
        }
    }
}

/// The analog clock widget: owned state + style, measured size, and a pure
/// paint pass that records the face into a [`DrawList`].
#[derive(Debug, Clone)]
pub struct ClockFace {
    state: ClockState,
    style: ClockStyle,
    size: f32,
}

impl ClockFace {
    /// Creates a face showing the current local time.
    ///
    /// This is the only wall-clock read the widget ever performs; afterwards
    /// the hands advance purely by [`tick`](Self::tick).
    pub fn new(style: ClockStyle) -> Self {
        Self::with_state(ClockState::now_local(), style)
    }

    /// Creates a face with explicit hand angles.
    pub fn with_state(state: ClockState, style: ClockStyle) -> Self {
        Self {
            state,
            style,
            size: DEFAULT_SIZE,
        }
    }

    pub fn state(&self) -> &ClockState {
        &self.state
    }

    pub fn style(&self) -> &ClockStyle {
        &self.style
    }

    /// Side length the face was last measured to.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Resolves the layout constraints to a square side length and stores it.
    ///
    /// Unconstrained dimensions fall back to [`DEFAULT_SIZE`]; the face is
    /// always square, so the smaller resolved dimension wins.
    pub fn measure(&mut self, width: SizeConstraint, height: SizeConstraint) -> f32 {
        self.size = width.resolve().min(height.resolve());
        self.size
    }

    /// Advances the hands by one second.
    pub fn tick(&mut self) {
        self.state.tick();
    }

    /// Records one frame of the clock into `list`.
    ///
    /// Pure with respect to `self`: painting never mutates the hand angles.
    /// Geometry is laid out in a `size`×`size` square anchored at the list's
    /// origin, bottom to top: face disc, hands, center dot, outer ring.
    pub fn paint(&self, list: &mut DrawList) {
        let s = self.size;
        let bounds = Rect::square(0.0, 0.0, s);
        let center = bounds.center();
        let face_radius = s / 2.0 - self.style.ring_width;

        list.push_solid_circle(Z_FACE, center, face_radius, self.style.face_color);

        // Each hand spans from the center to the edge of its bounding box, a
        // square inset from the widget bounds. The insets nest: the second
        // hand reaches furthest, the hour hand least.
        let second_box = bounds.inset(s / 8.0);
        let minute_box = bounds.inset(s / 5.0);
        let hour_box = bounds.inset(s / 4.0);

        list.push_hand(
            Z_SECOND_HAND,
            center,
            self.state.second_deg,
            second_box.size.x / 2.0,
            SECOND_HAND_WIDTH,
            self.style.second_hand_color,
        );
        list.push_hand(
            Z_MINUTE_HAND,
            center,
            self.state.minute_deg,
            minute_box.size.x / 2.0,
            MINUTE_HAND_WIDTH,
            self.style.minute_hand_color,
        );
        list.push_hand(
            Z_HOUR_HAND,
            center,
            self.state.hour_deg,
            hour_box.size.x / 2.0,
            HOUR_HAND_WIDTH,
            self.style.hour_hand_color,
        );

        list.push_solid_circle(
            Z_CENTER_DOT,
            center,
            CENTER_DOT_RADIUS,
            self.style.center_dot_color,
        );

        // Outer ring, shaded top to bottom. With the default black ring color
        // this is the classic gray-to-black gradient.
        let gradient = LinearGradient::two_stop(
            Vec2::new(center.x, 0.0),
            Vec2::new(center.x, s),
            RING_GRADIENT_TOP,
            self.style.ring_color,
        );
        list.push_ring(
            Z_RING,
            center,
            face_radius,
            Ring {
                width: self.style.ring_width,
                paint: Paint::LinearGradient(gradient),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCmd;

    fn face_at(state: ClockState) -> ClockFace {
        ClockFace::with_state(state, ClockStyle::default())
    }

    // ── measuring ─────────────────────────────────────────────────────────

    #[test]
    fn exact_constraints_take_the_minimum() {
        let mut f = face_at(ClockState::from_time(0, 0, 0));
        let got = f.measure(SizeConstraint::Exact(200.0), SizeConstraint::Exact(240.0));
        assert_eq!(got, 200.0);
        assert_eq!(f.size(), 200.0);
    }

    #[test]
    fn unconstrained_falls_back_to_default_size() {
        let mut f = face_at(ClockState::from_time(0, 0, 0));
        let got = f.measure(SizeConstraint::Unconstrained, SizeConstraint::Unconstrained);
        assert_eq!(got, DEFAULT_SIZE);
    }

    #[test]
    fn default_size_caps_a_larger_exact_dimension() {
        let mut f = face_at(ClockState::from_time(0, 0, 0));
        let got = f.measure(SizeConstraint::Exact(400.0), SizeConstraint::Unconstrained);
        assert_eq!(got, DEFAULT_SIZE);
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn hand_radii_nest_second_over_minute_over_hour() {
        let mut f = face_at(ClockState::from_time(9, 41, 0));
        f.measure(SizeConstraint::Exact(320.0), SizeConstraint::Exact(320.0));

        let mut list = DrawList::new();
        f.paint(&mut list);

        let radii: Vec<f32> = list
            .items()
            .iter()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Hand(h) => Some(h.radius),
                _ => None,
            })
            .collect();

        // Painted second, minute, hour.
        assert_eq!(radii.len(), 3);
        assert!(radii[0] > radii[1] && radii[1] > radii[2]);
        assert_eq!(radii[0], 320.0 / 2.0 - 320.0 / 8.0);
        assert_eq!(radii[1], 320.0 / 2.0 - 320.0 / 5.0);
        assert_eq!(radii[2], 320.0 / 2.0 - 320.0 / 4.0);
    }

    #[test]
    fn draw_stream_layers_face_under_hands_under_ring() {
        let f = face_at(ClockState::from_time(3, 0, 0));
        let mut list = DrawList::new();
        f.paint(&mut list);

        let cmds: Vec<&DrawCmd> = list.iter_in_paint_order().map(|i| &i.cmd).collect();
        assert_eq!(cmds.len(), 5);

        assert!(matches!(cmds[0], DrawCmd::Circle(c) if c.ring.is_none()));
        assert!(matches!(cmds[1], DrawCmd::Hand(_)));
        assert!(matches!(cmds[2], DrawCmd::Hand(_)));
        assert!(matches!(cmds[3], DrawCmd::Hand(_)));
        // Last command is the gradient ring.
        assert!(matches!(cmds[4], DrawCmd::Circle(c) if c.ring.is_some()));
    }

    #[test]
    fn hands_carry_the_stored_angles() {
        let state = ClockState::from_time(3, 0, 0);
        let f = face_at(state);
        let mut list = DrawList::new();
        f.paint(&mut list);

        let angles: Vec<f32> = list
            .items()
            .iter()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Hand(h) => Some(h.angle_deg),
                _ => None,
            })
            .collect();

        assert_eq!(angles, vec![state.second_deg, state.minute_deg, state.hour_deg]);
    }

    #[test]
    fn face_radius_leaves_room_for_the_ring() {
        let mut f = face_at(ClockState::from_time(0, 0, 0));
        f.measure(SizeConstraint::Exact(300.0), SizeConstraint::Exact(300.0));

        let mut list = DrawList::new();
        f.paint(&mut list);

        let DrawCmd::Circle(c) = &list.iter_in_paint_order().next().unwrap().cmd else {
            panic!("first command must be the face disc");
        };
        assert_eq!(c.radius, 150.0 - ClockStyle::default().ring_width);
    }

    #[test]
    fn painting_is_pure() {
        let f = face_at(ClockState::from_time(7, 15, 42));
        let before = *f.state();
        let mut list = DrawList::new();
        f.paint(&mut list);
        f.paint(&mut list);
        assert_eq!(*f.state(), before);
    }
}
