use std::time::{Duration, Instant};

/// Time source used by [`RateLimiter`].
///
/// The real implementation is [`SystemClock`]; tests inject a mock so pacing
/// can be asserted without wall-clock delays.
pub trait Clock {
    fn now(&mut self) -> Instant;
    fn sleep(&mut self, duration: Duration);
}

/// Wall-clock implementation backed by `std::thread::sleep`.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&mut self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Enforces a minimum wall-clock interval between consecutive permitted
/// operations.
///
/// [`acquire`](Self::acquire) blocks until the next slot opens. The interval
/// is measured from the end of the previous sleep, so request latency is not
/// subtracted from the wait. The first acquire on a fresh limiter never
/// blocks.
pub struct RateLimiter<C: Clock = SystemClock> {
    period: Duration,
    next_slot: Option<Instant>,
    clock: C,
}

impl RateLimiter<SystemClock> {
    /// # Panics
    ///
    /// Panics if `max_requests_per_sec` is zero.
    pub fn new(max_requests_per_sec: u32) -> Self {
        Self::with_clock(max_requests_per_sec, SystemClock)
    }
}

impl<C: Clock> RateLimiter<C> {
    /// # Panics
    ///
    /// Panics if `max_requests_per_sec` is zero.
    pub fn with_clock(max_requests_per_sec: u32, clock: C) -> Self {
        assert!(max_requests_per_sec > 0, "request rate must be nonzero");
        Self {
            period: Duration::from_secs(1) / max_requests_per_sec,
            next_slot: None,
            clock,
        }
    }

    /// Block until the next request slot opens, then claim it.
    pub fn acquire(&mut self) {
        if let Some(slot) = self.next_slot {
            let now = self.clock.now();
            if now < slot {
                self.clock.sleep(slot - now);
            }
        }
        let start = self.clock.now();
        self.next_slot = Some(start + self.period);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Deterministic clock: `sleep` advances time instead of waiting.
    struct MockClock {
        now: Instant,
        sleeps: Rc<RefCell<Vec<Duration>>>,
    }

    impl MockClock {
        fn new() -> (Self, Rc<RefCell<Vec<Duration>>>) {
            let sleeps = Rc::new(RefCell::new(Vec::new()));
            (
                Self {
                    now: Instant::now(),
                    sleeps: Rc::clone(&sleeps),
                },
                sleeps,
            )
        }

        fn advance(&mut self, duration: Duration) {
            self.now += duration;
        }
    }

    impl Clock for MockClock {
        fn now(&mut self) -> Instant {
            self.now
        }

        fn sleep(&mut self, duration: Duration) {
            self.sleeps.borrow_mut().push(duration);
            self.now += duration;
        }
    }

    #[test]
    #[should_panic(expected = "request rate must be nonzero")]
    fn test_zero_rate_rejected() {
        let (clock, _) = MockClock::new();
        let _ = RateLimiter::with_clock(0, clock);
    }

    #[test]
    fn test_first_acquire_never_sleeps() {
        let (clock, sleeps) = MockClock::new();
        let mut limiter = RateLimiter::with_clock(10, clock);

        limiter.acquire();

        assert!(sleeps.borrow().is_empty());
    }

    #[test]
    fn test_back_to_back_acquires_sleep_full_period() {
        let (clock, sleeps) = MockClock::new();
        let mut limiter = RateLimiter::with_clock(10, clock);

        limiter.acquire();
        limiter.acquire();

        assert_eq!(sleeps.borrow().as_slice(), &[Duration::from_millis(100)]);
    }

    #[test]
    fn test_elapsed_time_reduces_wait() {
        let (clock, sleeps) = MockClock::new();
        let mut limiter = RateLimiter::with_clock(10, clock);

        limiter.acquire();
        limiter.clock.advance(Duration::from_millis(40));
        limiter.acquire();

        assert_eq!(sleeps.borrow().as_slice(), &[Duration::from_millis(60)]);
    }

    #[test]
    fn test_no_sleep_once_slot_has_passed() {
        let (clock, sleeps) = MockClock::new();
        let mut limiter = RateLimiter::with_clock(10, clock);

        limiter.acquire();
        limiter.clock.advance(Duration::from_millis(250));
        limiter.acquire();

        assert!(sleeps.borrow().is_empty());
    }

    #[test]
    fn test_consecutive_starts_spaced_by_at_least_period() {
        let (clock, _) = MockClock::new();
        let period = Duration::from_millis(100);
        let mut limiter = RateLimiter::with_clock(10, clock);

        let mut starts = Vec::new();
        for _ in 0..5 {
            limiter.acquire();
            starts.push(limiter.clock.now);
        }

        for pair in starts.windows(2) {
            assert!(pair[1] - pair[0] >= period);
        }
    }
}
