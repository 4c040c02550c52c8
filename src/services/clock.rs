use std::time::{Duration, Instant};

/// Source of time and the only place the run blocks.
///
/// Backoff delays and poll intervals both go through `sleep`, so a fake
/// clock can advance time deterministically in tests.
pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&self, duration: Duration);
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
