//! Time subsystem.
//!
//! Provides the cancelable fixed-period tick timer that drives the clock's
//! once-per-second animation, without coupling to the runtime. Tests drive it
//! with synthetic instants; nothing here sleeps.

mod ticker;

pub use ticker::{TickTimer, TICK_PERIOD};
