//! The analog clock component.
//!
//! `ClockState` holds the hand angles and the per-second tick arithmetic,
//! `ClockStyle` the configurable colors and stroke widths, and `ClockFace`
//! turns both into a draw stream. `ClockApp` wires the face into the
//! runtime's frame/deadline loop.

mod app;
mod face;
mod state;
mod style;

pub use app::ClockApp;
pub use face::{ClockFace, SizeConstraint, DEFAULT_SIZE};
pub use state::ClockState;
pub use style::ClockStyle;
