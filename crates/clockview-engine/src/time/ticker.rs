use std::time::{Duration, Instant};

/// Period of the clock animation: one tick per second.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Cancelable fixed-period deadline timer.
///
/// The runtime loop reads [`deadline`](Self::deadline) to know when to wake
/// up (`ControlFlow::WaitUntil`) and calls [`poll`](Self::poll) once awake.
/// Deadlines advance by whole periods from the instant the timer was armed,
/// so cadence does not drift with wake-up latency: exactly one tick elapses
/// per period of host time.
///
/// A disarmed timer never fires; [`cancel`](Self::cancel) at teardown
/// guarantees no tick outlives the component that armed it.
#[derive(Debug, Clone)]
pub struct TickTimer {
    deadline: Option<Instant>,
    period: Duration,
}

impl TickTimer {
    pub fn new(period: Duration) -> Self {
        debug_assert!(!period.is_zero(), "TickTimer period must be non-zero");
        Self {
            deadline: None,
            period,
        }
    }

    /// Timer with the clock's 1000 ms period.
    pub fn per_second() -> Self {
        Self::new(TICK_PERIOD)
    }

    /// True while a deadline is pending.
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Next wake instant, if armed.
    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Arms the first deadline at `now + period`.
    ///
    /// Arming an already-armed timer is a no-op; the existing cadence wins.
    pub fn arm(&mut self, now: Instant) {
        if self.deadline.is_none() {
            self.deadline = Some(now + self.period);
        }
    }

    /// Clears the pending deadline. Subsequent polls return zero ticks.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns how many whole periods have elapsed by `now` and advances the
    /// deadline past `now`.
    ///
    /// After a stall (debugger, minimized window) this catches up by
    /// reporting every missed period rather than collapsing them, keeping
    /// tick arithmetic exact.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut deadline) = self.deadline else {
            return 0;
        };

        let mut ticks = 0u32;
        while deadline <= now {
            ticks += 1;
            deadline += self.period;
        }

        self.deadline = Some(deadline);
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer_at(now: Instant) -> TickTimer {
        let mut t = TickTimer::per_second();
        t.arm(now);
        t
    }

    // ── arming ────────────────────────────────────────────────────────────

    #[test]
    fn unarmed_timer_never_fires() {
        let now = Instant::now();
        let mut t = TickTimer::per_second();
        assert!(!t.is_armed());
        assert_eq!(t.poll(now + Duration::from_secs(100)), 0);
    }

    #[test]
    fn arm_sets_deadline_one_period_out() {
        let now = Instant::now();
        let t = timer_at(now);
        assert_eq!(t.deadline(), Some(now + TICK_PERIOD));
    }

    #[test]
    fn rearming_keeps_existing_cadence() {
        let now = Instant::now();
        let mut t = timer_at(now);
        t.arm(now + Duration::from_millis(700));
        assert_eq!(t.deadline(), Some(now + TICK_PERIOD));
    }

    // ── cadence ───────────────────────────────────────────────────────────

    #[test]
    fn no_tick_before_the_deadline() {
        let now = Instant::now();
        let mut t = timer_at(now);
        assert_eq!(t.poll(now + Duration::from_millis(999)), 0);
    }

    #[test]
    fn one_tick_per_period() {
        let now = Instant::now();
        let mut t = timer_at(now);
        assert_eq!(t.poll(now + Duration::from_millis(1000)), 1);
        assert_eq!(t.poll(now + Duration::from_millis(1500)), 0);
        assert_eq!(t.poll(now + Duration::from_millis(2000)), 1);
    }

    #[test]
    fn stall_catches_up_with_exact_count() {
        let now = Instant::now();
        let mut t = timer_at(now);
        assert_eq!(t.poll(now + Duration::from_millis(5500)), 5);
        // Cadence is anchored to the arm instant, not the poll instant.
        assert_eq!(t.deadline(), Some(now + Duration::from_secs(6)));
    }

    // ── cancel ────────────────────────────────────────────────────────────

    #[test]
    fn cancel_stops_pending_ticks() {
        let now = Instant::now();
        let mut t = timer_at(now);
        t.cancel();
        assert!(!t.is_armed());
        assert_eq!(t.poll(now + Duration::from_secs(10)), 0);
    }

    #[test]
    fn arm_after_cancel_starts_fresh() {
        let now = Instant::now();
        let mut t = timer_at(now);
        t.cancel();

        let later = now + Duration::from_secs(3);
        t.arm(later);
        assert_eq!(t.deadline(), Some(later + TICK_PERIOD));
        assert_eq!(t.poll(later + TICK_PERIOD), 1);
    }
}
