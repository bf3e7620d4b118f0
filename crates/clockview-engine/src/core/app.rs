use std::time::Instant;

use winit::event::WindowEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// Frames are demand-driven: the runtime requests a redraw after resize and
/// after every elapsed deadline, not continuously.
pub trait App {
    /// Called for window events the runtime does not consume itself.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    /// Next instant the app wants to be woken at, if any.
    ///
    /// The runtime sleeps until this deadline (`ControlFlow::WaitUntil`) and
    /// calls [`on_deadline`](Self::on_deadline) once it has passed. `None`
    /// lets the loop wait indefinitely for window events.
    fn next_deadline(&self) -> Option<Instant> {
        None
    }

    /// Called when a deadline reported by [`next_deadline`](Self::next_deadline)
    /// has elapsed. A redraw is requested afterwards.
    fn on_deadline(&mut self, now: Instant) -> AppControl {
        let _ = now;
        AppControl::Continue
    }

    /// Called exactly once when the runtime is shutting down (window closed
    /// or exit requested). Cancel pending timers here so no scheduled work
    /// outlives the app.
    fn on_exit(&mut self) {}
}
