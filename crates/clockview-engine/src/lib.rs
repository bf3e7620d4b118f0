//! Clockview engine crate.
//!
//! Owns the platform + GPU runtime pieces and the clock-face widget built on
//! top of them.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;

pub mod clock;
