//! Entrance animation: easing curves and per-swatch scale-in progress.
//!
//! Time is always passed in explicitly as milliseconds elapsed since the
//! palette was configured; nothing here reads a clock.

use std::f64::consts::PI;

use crate::constants;

/// Easing curve applied to a swatch's normalized animation time.
///
/// Every curve maps 0 to 0 and 1 to 1. [`Interpolator::Overshoot`] rises
/// above 1 before settling, so hosts must leave room for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interpolator {
    Linear,
    AccelerateDecelerate,
    Overshoot { tension: f64 },
}

impl Default for Interpolator {
    fn default() -> Self {
        Self::AccelerateDecelerate
    }
}

impl Interpolator {
    pub fn overshoot() -> Self {
        Self::Overshoot {
            tension: constants::OVERSHOOT_TENSION,
        }
    }

    /// Evaluate the curve. Input is clamped to 0.0–1.0.
    pub fn interpolate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Self::Linear => t,
            Self::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
            Self::Overshoot { tension } => {
                let t = t - 1.0;
                t * t * ((tension + 1.0) * t + tension) + 1.0
            }
        }
    }

    /// Whether the curve can exceed 1.0.
    pub fn overshoots(&self) -> bool {
        matches!(self, Self::Overshoot { tension } if *tension > 0.0)
    }
}

/// Start offset of the swatch at `index`, spreading the starts evenly over
/// the part of the view animation that leaves room for one full swatch.
pub(crate) fn swatch_delay(index: usize, count: usize, view_ms: u32, swatch_ms: u32) -> u32 {
    if count == 0 {
        return 0;
    }
    let span = u64::from(view_ms.saturating_sub(swatch_ms));
    (span * index as u64 / count as u64) as u32
}

/// Radius of a swatch at `elapsed_ms`, scaled from 0 up to `full_radius`.
pub fn swatch_progress(
    elapsed_ms: u32,
    delay_ms: u32,
    swatch_ms: u32,
    full_radius: f64,
    interpolator: Interpolator,
) -> f64 {
    if elapsed_ms < delay_ms {
        return 0.0;
    }
    let into = elapsed_ms - delay_ms;
    if into >= swatch_ms {
        return full_radius;
    }
    full_radius * interpolator.interpolate(f64::from(into) / f64::from(swatch_ms))
}
