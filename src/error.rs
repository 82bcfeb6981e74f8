//! Errors reported by the palette engine.

/// Everything that can go wrong while configuring or laying out a palette.
///
/// [`PickerError::Configuration`] is a programming defect and should never be
/// seen in practice; the remaining variants reject caller input.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PickerError {
    #[error("palette radius {radius} produced {actual} swatches, expected {expected}")]
    Configuration {
        radius: u32,
        expected: usize,
        actual: usize,
    },
    #[error("palette radius {0} is out of range")]
    InvalidRadius(i64),
    #[error("viewport {width}x{height} has no drawable area")]
    InvalidViewport { width: f64, height: f64 },
    #[error("swatch animation ({swatch_ms} ms) outlasts the view animation ({view_ms} ms)")]
    InvalidDuration { view_ms: u32, swatch_ms: u32 },
    #[error("{0:?} is not a valid hex color")]
    InvalidColor(String),
}

impl PickerError {
    /// Whether the error signals a defect rather than bad input.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
