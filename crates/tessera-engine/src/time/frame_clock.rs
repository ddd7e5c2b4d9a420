use std::time::{Duration, Instant};

/// One clock tick.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,
    pub now: Instant,
    /// Index of this tick, starting at 0.
    pub frame_index: u64,
}

/// Wall-clock source of per-frame delta time.
///
/// Delta time is clamped so a debugger pause or a minimized window does not
/// produce a huge step, and a tight loop never produces zero.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub const DEFAULT_DT_MIN: Duration = Duration::from_micros(100);
    pub const DEFAULT_DT_MAX: Duration = Duration::from_millis(250);

    pub fn new() -> Self {
        Self::with_clamps(Self::DEFAULT_DT_MIN, Self::DEFAULT_DT_MAX)
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self { last: Instant::now(), frame_index: 0, dt_min, dt_max }
    }

    /// Restarts delta measurement from now.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Ticks with an explicit timestamp. Timestamps earlier than the previous
    /// tick count as zero elapsed time.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now.saturating_duration_since(self.last).clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime { dt: dt.as_secs_f32(), now, frame_index: self.frame_index };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
