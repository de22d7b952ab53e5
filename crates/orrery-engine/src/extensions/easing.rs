// extensions/easing.rs
//
// Timed-animation helpers: normalized progress and easing curves.
// Pure math over wall-clock milliseconds.

use std::f32::consts::PI;

/// Shape of an animation curve over normalized time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Half a cosine period, `0.5 - 0.5·cos(πt)`: zero slope at both ends.
    SineInOut,
}

impl Easing {
    /// Map `t` (clamped to [0, 1]) through the curve.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::SineInOut => 0.5 - 0.5 * (t * PI).cos(),
        }
    }
}

/// Fraction of `duration_ms` elapsed between `started_ms` and `now_ms`,
/// clamped to [0, 1]. A non-positive duration counts as finished.
pub fn progress(started_ms: f64, now_ms: f64, duration_ms: f64) -> f32 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    ((now_ms - started_ms) / duration_ms).clamp(0.0, 1.0) as f32
}
