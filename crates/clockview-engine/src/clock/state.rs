use chrono::Timelike;

/// Degrees the second hand advances per tick (360° / 60 s).
pub const SECOND_STEP_DEG: f32 = 6.0;

/// Degrees the minute hand advances per tick (360° / 3600 s).
pub const MINUTE_STEP_DEG: f32 = 0.1;

/// Degrees the hour hand advances per tick (≈ 360° / 43200 s).
pub const HOUR_STEP_DEG: f32 = 0.0083;

/// Rotation applied to every hand so that angle 0 lands at 12 o'clock
/// instead of the 3-o'clock direction angles are measured from.
const BASE_OFFSET_DEG: f32 = 90.0;

/// Hand angles of the clock, in degrees.
///
/// Angles are measured clockwise from the 3-o'clock direction and kept
/// normalized to `[0, 360)`. The state advances by fixed per-second steps;
/// it never re-reads the wall clock after construction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockState {
    pub second_deg: f32,
    pub minute_deg: f32,
    pub hour_deg: f32,
}

impl ClockState {
    /// Derives hand angles from a wall-clock time of day.
    ///
    /// `hour` is on the 12-hour dial; each hand's angle is proportional to
    /// the seconds it represents, offset so 12 o'clock points up.
    pub fn from_time(hour: u32, minute: u32, second: u32) -> Self {
        let s = second as f32;
        let m = (minute * 60 + second) as f32;
        let h = (hour * 3600 + minute * 60 + second) as f32;

        Self {
            second_deg: normalize(s * SECOND_STEP_DEG - BASE_OFFSET_DEG),
            minute_deg: normalize(m * MINUTE_STEP_DEG - BASE_OFFSET_DEG),
            hour_deg: normalize(h * HOUR_STEP_DEG - BASE_OFFSET_DEG),
        }
    }

    /// Reads the local wall clock once and derives the initial angles.
    pub fn now_local() -> Self {
        let now = chrono::Local::now();
        Self::from_time(now.hour() % 12, now.minute(), now.second())
    }

    /// Advances every hand by one second.
    pub fn tick(&mut self) {
        self.second_deg = normalize(self.second_deg + SECOND_STEP_DEG);
        self.minute_deg = normalize(self.minute_deg + MINUTE_STEP_DEG);
        self.hour_deg = normalize(self.hour_deg + HOUR_STEP_DEG);
    }
}

/// Wraps an angle into `[0, 360)`.
#[inline]
fn normalize(deg: f32) -> f32 {
    deg.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    // ── initial angles ────────────────────────────────────────────────────

    #[test]
    fn midnight_points_all_hands_up() {
        let s = ClockState::from_time(0, 0, 0);
        // -90° normalized.
        assert!(close(s.second_deg, 270.0));
        assert!(close(s.minute_deg, 270.0));
        assert!(close(s.hour_deg, 270.0));
    }

    #[test]
    fn quarter_past_second_hand() {
        // 15 s → 15 * 6 - 90 = 0° (3 o'clock).
        let s = ClockState::from_time(0, 0, 15);
        assert!(close(s.second_deg, 0.0));
    }

    #[test]
    fn three_oclock_hour_hand() {
        // 3 h → 10800 s * 0.0083 - 90 = -0.36°, wrapped to 359.64°.
        let s = ClockState::from_time(3, 0, 0);
        assert!(close(s.hour_deg, 359.64));
    }

    #[test]
    fn minute_hand_counts_seconds() {
        // 10:30 into the hour → 630 s * 0.1 - 90 = -27°, wrapped.
        let s = ClockState::from_time(0, 10, 30);
        assert!(close(s.minute_deg, 333.0));
    }

    // ── ticking ───────────────────────────────────────────────────────────

    #[test]
    fn tick_advances_each_hand_by_its_step() {
        let mut s = ClockState::from_time(6, 20, 40);
        let before = s;
        s.tick();
        assert!(close(s.second_deg, normalize(before.second_deg + 6.0)));
        assert!(close(s.minute_deg, normalize(before.minute_deg + 0.1)));
        assert!(close(s.hour_deg, normalize(before.hour_deg + 0.0083)));
    }

    #[test]
    fn second_hand_wraps_at_360() {
        let mut s = ClockState::from_time(0, 0, 59);
        // 59 * 6 - 90 = 264°; one more tick crosses 270 without wrapping,
        // so push it near the boundary instead.
        s.second_deg = 358.0;
        s.tick();
        assert!(close(s.second_deg, 4.0));
    }

    #[test]
    fn angles_stay_normalized_over_many_ticks() {
        let mut s = ClockState::from_time(11, 59, 59);
        for _ in 0..10_000 {
            s.tick();
            for deg in [s.second_deg, s.minute_deg, s.hour_deg] {
                assert!((0.0..360.0).contains(&deg), "angle out of range: {deg}");
            }
        }
    }
}
