//! Timing, geometry, and styling constants for the picker.

/// Width / height ratio of the drawable palette rectangle.
pub const VIEW_ASPECT_RATIO: f64 = 1.154_700_538_379_251_7; // sqrt(4/3)

/// Duration of the entrance animation for the whole palette (ms).
pub const ANIM_TIME_VIEW: u32 = 500;

/// Duration of the scale-in animation of a single swatch (ms).
pub const ANIM_TIME_SWATCH: u32 = 200;

/// Host tick interval while the entrance animation runs (ms, ~50 Hz).
pub const TICK_INTERVAL_MS: u64 = 20;

/// Palette radius used when none is given (37 swatches).
pub const DEFAULT_PALETTE_RADIUS: u32 = 3;

/// Largest accepted palette radius.
pub const MAX_PALETTE_RADIUS: u32 = 64;

/// Stroke width as a fraction of the swatch radius
pub const STROKE_FACTOR: f64 = 0.05;

/// Gap between neighbouring swatches as a fraction of the swatch radius
pub const SWATCH_PADDING_FACTOR: f64 = 0.075;

/// Shadow circle radius relative to the swatch radius
pub const SHADOW_SCALE: f64 = 1.05;

/// Default tension of the overshoot interpolator.
pub const OVERSHOOT_TENSION: f64 = 2.0;

/// Gap between panel elements
pub const GAP: f32 = 8.0;

/// Padding around the whole panel
pub const PADDING: f32 = 8.0;

/// Border radius for the preview swatch
pub const RADIUS: f32 = 4.0;

/// Radius input field width
pub const INPUT_WIDTH: f32 = 28.0;

/// Hex label width
pub const HEX_LABEL_WIDTH: f32 = 64.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;
