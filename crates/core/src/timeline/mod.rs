use std::time::{Duration, Instant};

/// Monotonic animation clock. Advances by a fixed step per simulated frame,
/// independent of wall-clock time, so a slow machine animates slower.
///
/// `t` is an `f32`: past 2^20 (roughly 97 hours at 60 fps) a 0.05 step is
/// below half an ulp and the clock stops rising.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClock {
    t: f32,
    step: f32,
}

impl AnimationClock {
    pub fn new(step: f32) -> Self {
        Self { t: 0.0, step }
    }

    pub fn t(&self) -> f32 {
        self.t
    }

    pub fn advance(&mut self) {
        self.t += self.step;
    }
}

/// Soft frame-rate cap: sleeps out whatever is left of the target interval
/// and never tries to catch up on overrun.
#[derive(Debug)]
pub struct FramePacer {
    interval: Duration,
    last: Instant,
}

impl FramePacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Instant::now(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left in the current frame given how long it has taken so far.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.interval
            .checked_sub(elapsed)
            .filter(|left| !left.is_zero())
    }

    /// Blocks until the target interval since the previous call has passed.
    /// Returns the time spent sleeping.
    pub fn pace(&mut self) -> Duration {
        let slept = match self.remaining(self.last.elapsed()) {
            Some(left) => {
                std::thread::sleep(left);
                left
            }
            None => Duration::ZERO,
        };
        self.last = Instant::now();
        slept
    }
}
