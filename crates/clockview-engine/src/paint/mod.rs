//! Paint model shared between the widget and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid, 2-stop linear gradients)
//!
//! Geometry types remain in `coords`.

mod color;
mod gradient;
mod paint;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient, SpreadMode};
pub use paint::Paint;
