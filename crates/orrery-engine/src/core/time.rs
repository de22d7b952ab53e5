/// Turns variable frame deltas into a whole number of fixed simulation steps.
///
/// Leftover time carries into the next frame. A single frame never asks for
/// more than `MAX_STEPS_PER_FRAME` steps, so a backgrounded tab resumes
/// without a burst of catch-up updates.
#[derive(Debug)]
pub struct FixedTimestep {
    step: f32,
    carry: f32,
}

pub const MAX_STEPS_PER_FRAME: u32 = 10;

impl FixedTimestep {
    pub fn new(step: f32) -> Self {
        Self { step, carry: 0.0 }
    }

    /// Add `frame_dt` seconds and return how many steps are due.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        let budget = self.step * MAX_STEPS_PER_FRAME as f32;
        self.carry = (self.carry + frame_dt.max(0.0)).min(budget);
        let due = (self.carry / self.step) as u32;
        self.carry -= due as f32 * self.step;
        due
    }
}

/// Wall-clock bookkeeping between animation frames.
///
/// The first sample yields a zero delta so the page-load gap does not
/// count as simulated time.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `now_ms`; returns seconds since the previous sample.
    pub fn sample(&mut self, now_ms: f64) -> f32 {
        let dt = self
            .last_ms
            .map_or(0.0, |last| ((now_ms - last) / 1000.0).max(0.0) as f32);
        self.last_ms = Some(now_ms);
        dt
    }
}
