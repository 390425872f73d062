use std::time::{Duration, Instant};

/// Holds a loop to a target frame rate by sleeping until the next deadline.
///
/// Deadlines advance by a fixed interval. When a frame overruns by more than
/// one interval the schedule resynchronizes to "now" instead of running a
/// burst of catch-up frames.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Option<Duration>,
    next: Instant,
}

impl FramePacer {
    /// `target_fps == 0` disables pacing; `wait` then returns immediately.
    pub fn new(target_fps: u32) -> Self {
        let interval = (target_fps > 0).then(|| Duration::from_secs(1) / target_fps);
        Self {
            interval,
            next: Instant::now() + interval.unwrap_or_default(),
        }
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Sleeps until the current frame's deadline and schedules the next one.
    pub fn wait(&mut self) {
        let Some(interval) = self.interval else {
            return;
        };

        let now = Instant::now();
        if let Some(remaining) = self.next.checked_duration_since(now) {
            std::thread::sleep(remaining);
        }
        self.next = Self::schedule(self.next, interval, now);
    }

    fn schedule(deadline: Instant, interval: Duration, now: Instant) -> Instant {
        let next = deadline + interval;
        if next < now { now + interval } else { next }
    }
}
