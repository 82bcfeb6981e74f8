//! Per-instance picker settings. Defaults come from [`crate::constants`].

use crate::animation::Interpolator;
use crate::color::SwatchColor;
use crate::constants;
use crate::error::PickerError;

/// Drop shadow painted under every swatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    /// Offset in pixels; the shadow is shifted by `(distance / 2, distance)`.
    pub distance: f64,
    pub color: SwatchColor,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            distance: 2.0,
            color: SwatchColor::GRAY,
        }
    }
}

/// Inner padding of the viewport, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Padding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Padding {
    pub const ZERO: Self = Self::uniform(0.0);

    pub const fn uniform(p: f64) -> Self {
        Self {
            left: p,
            top: p,
            right: p,
            bottom: p,
        }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerConfig {
    /// Length of the whole entrance animation (ms).
    pub view_anim_ms: u32,
    /// Length of one swatch's scale-in (ms).
    pub swatch_anim_ms: u32,
    pub interpolator: Interpolator,
    pub shadow: Option<Shadow>,
    /// Fraction of the shorter usable side kept free around the palette,
    /// e.g. for overshooting swatches and strokes.
    pub overshoot_margin: f64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            view_anim_ms: constants::ANIM_TIME_VIEW,
            swatch_anim_ms: constants::ANIM_TIME_SWATCH,
            interpolator: Interpolator::default(),
            shadow: None,
            overshoot_margin: 0.0,
        }
    }
}

impl PickerConfig {
    pub fn with_durations(mut self, view_anim_ms: u32, swatch_anim_ms: u32) -> Self {
        self.view_anim_ms = view_anim_ms;
        self.swatch_anim_ms = swatch_anim_ms;
        self
    }

    pub fn with_interpolator(mut self, interpolator: Interpolator) -> Self {
        self.interpolator = interpolator;
        self
    }

    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn with_overshoot_margin(mut self, margin: f64) -> Self {
        self.overshoot_margin = margin.clamp(0.0, 0.5);
        self
    }

    /// Reject settings that would leave the last swatch animating after the
    /// view animation has ended.
    pub fn validate(&self) -> Result<(), PickerError> {
        if self.swatch_anim_ms > self.view_anim_ms {
            log::warn!(
                "rejecting animation timing: swatch {} ms > view {} ms",
                self.swatch_anim_ms,
                self.view_anim_ms
            );
            return Err(PickerError::InvalidDuration {
                view_ms: self.view_anim_ms,
                swatch_ms: self.swatch_anim_ms,
            });
        }
        Ok(())
    }
}
