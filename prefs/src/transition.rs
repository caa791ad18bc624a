//! Linear color transition for the color page's animated background.
//!
//! The frame loop samples the transition with elapsed wall-clock time, so a
//! slow or irregular frame rate stretches nothing: the fraction is derived
//! from time, clamped to `[0, 1]`, and the loop stops at the first sample at
//! or past the full duration. The final sample is exactly the target.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

use crate::color::Rgb;

/// Duration of the displayed-color transition.
pub const DEFAULT_DURATION_MS: u32 = 200;

/// A linear interpolation from a starting displayed color to a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub start: Rgb,
    pub target: Rgb,
    pub duration_ms: u32,
}

impl Transition {
    #[must_use]
    pub fn new(start: Rgb, target: Rgb) -> Self {
        Self { start, target, duration_ms: DEFAULT_DURATION_MS }
    }

    /// Interpolation fraction for `elapsed_ms`, clamped to `[0, 1]`.
    ///
    /// A zero duration snaps straight to the target.
    #[must_use]
    pub fn fraction(&self, elapsed_ms: u32) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (f64::from(elapsed_ms) / f64::from(self.duration_ms)).clamp(0.0, 1.0)
    }

    /// The displayed color at `elapsed_ms`.
    #[must_use]
    pub fn sample(&self, elapsed_ms: u32) -> Rgb {
        let t = self.fraction(elapsed_ms);
        Rgb {
            red: lerp_channel(self.start.red, self.target.red, t),
            green: lerp_channel(self.start.green, self.target.green, t),
            blue: lerp_channel(self.start.blue, self.target.blue, t),
        }
    }

    /// True once the transition has reached the target; the frame loop
    /// schedules no further frames after this.
    #[must_use]
    pub fn is_done(&self, elapsed_ms: u32) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

/// Interpolate one channel. `t` must already be clamped to `[0, 1]`; the
/// result is exact at both endpoints.
fn lerp_channel(start: u8, target: u8, t: f64) -> u8 {
    let value = f64::from(start) + (f64::from(target) - f64::from(start)) * t;
    value.round().clamp(0.0, 255.0) as u8
}
