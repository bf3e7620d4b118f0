use std::time::Instant;

use crate::core::{App, AppControl, FrameCtx};
use crate::paint::Color;
use crate::render::SceneRenderer;
use crate::scene::DrawList;
use crate::time::TickTimer;

use super::face::{hand_band, ClockFace, SizeConstraint};
use super::style::ClockStyle;

/// Runtime application hosting a single [`ClockFace`].
///
/// Owns the tick timer: it is armed on the first rendered frame (the widget
/// goes from idle to animating once it is actually on screen) and canceled at
/// exit so no scheduled tick outlives the app.
pub struct ClockApp {
    face: ClockFace,
    timer: TickTimer,
    draw_list: DrawList,
    renderer: SceneRenderer,
    clear_color: Color,
}

impl ClockApp {
    /// App showing the current local time with the given style.
    pub fn new(style: ClockStyle) -> Self {
        Self::with_face(ClockFace::new(style))
    }

    pub fn with_face(face: ClockFace) -> Self {
        Self {
            face,
            timer: TickTimer::per_second(),
            draw_list: DrawList::new(),
            renderer: SceneRenderer::new(hand_band()),
            clear_color: Color::from_srgb_u8(0xFF, 0xFF, 0xFF, 0xFF),
        }
    }

    pub fn face(&self) -> &ClockFace {
        &self.face
    }
}

impl App for ClockApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let (w, h) = ctx.window.logical_size();
        self.face
            .measure(SizeConstraint::Exact(w), SizeConstraint::Exact(h));

        // First visible frame starts the animation.
        if !self.timer.is_armed() {
            self.timer.arm(ctx.now);
            log::debug!("clock animating, first tick in 1 s");
        }

        self.draw_list.clear();
        self.face.paint(&mut self.draw_list);

        let clear = self.clear_color;
        let draw_list = &mut self.draw_list;
        let renderer = &mut self.renderer;
        ctx.render(clear, |rctx, target| {
            renderer.render(rctx, target, draw_list);
        })
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    fn on_deadline(&mut self, now: Instant) -> AppControl {
        for _ in 0..self.timer.poll(now) {
            self.face.tick();
        }
        AppControl::Continue
    }

    fn on_exit(&mut self) {
        self.timer.cancel();
        log::debug!("clock timer canceled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::clock::ClockState;

    fn app_at(hour: u32, minute: u32, second: u32) -> ClockApp {
        ClockApp::with_face(ClockFace::with_state(
            ClockState::from_time(hour, minute, second),
            ClockStyle::default(),
        ))
    }

    #[test]
    fn no_deadline_until_the_first_frame_arms_the_timer() {
        let app = app_at(10, 10, 10);
        assert_eq!(app.next_deadline(), None);
    }

    #[test]
    fn deadline_ticks_advance_the_hands() {
        let mut app = app_at(0, 0, 0);
        let now = Instant::now();
        app.timer.arm(now);

        let before = *app.face().state();
        app.on_deadline(now + Duration::from_secs(1));

        let after = *app.face().state();
        assert!((after.second_deg - (before.second_deg + 6.0).rem_euclid(360.0)).abs() < 1e-3);
    }

    #[test]
    fn stalled_deadline_catches_up_every_missed_second() {
        let mut app = app_at(0, 0, 0);
        let now = Instant::now();
        app.timer.arm(now);

        let before = *app.face().state();
        app.on_deadline(now + Duration::from_secs(4));

        let after = *app.face().state();
        let expected = (before.second_deg + 4.0 * 6.0).rem_euclid(360.0);
        assert!((after.second_deg - expected).abs() < 1e-3);
    }

    #[test]
    fn exit_cancels_the_pending_tick() {
        let mut app = app_at(0, 0, 0);
        let now = Instant::now();
        app.timer.arm(now);
        assert!(app.next_deadline().is_some());

        app.on_exit();
        assert_eq!(app.next_deadline(), None);

        let before = *app.face().state();
        app.on_deadline(now + Duration::from_secs(60));
        assert_eq!(*app.face().state(), before);
    }
}
