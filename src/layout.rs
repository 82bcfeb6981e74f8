//! Pixel geometry for a palette inside a padded viewport.
//!
//! The palette is drawn into the largest rectangle of aspect ratio
//! [`constants::VIEW_ASPECT_RATIO`] that fits the usable area, centered along
//! the axis that has room to spare.

use crate::config::{Padding, PickerConfig};
use crate::constants;
use crate::error::PickerError;
use crate::palette::Palette;

/// Size of the host's drawing area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding: Padding::ZERO,
        }
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    fn usable(&self) -> (f64, f64) {
        (
            self.width - self.padding.horizontal(),
            self.height - self.padding.vertical(),
        )
    }
}

/// Resolved geometry of every swatch, in viewport pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderGeometry {
    /// Top-left corner of the drawable rectangle.
    pub offset: (f64, f64),
    /// Width and height of the drawable rectangle.
    pub scale: (f64, f64),
    /// Half the distance between centers of neighbouring swatches in a row.
    pub swatch_radius: f64,
    pub stroke_width: f64,
    pub swatch_padding: f64,
    /// Swatch centers, in palette order.
    pub centers: Vec<(f64, f64)>,
}

impl RenderGeometry {
    /// Radius a fully grown swatch is drawn with.
    pub fn full_radius(&self) -> f64 {
        self.swatch_radius - self.swatch_padding
    }

    /// Index of the first swatch whose bounding square contains the point.
    ///
    /// Edges are exclusive, so a point exactly between two swatches hits neither.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        let r = self.swatch_radius;
        self.centers
            .iter()
            .position(|&(cx, cy)| cx - r < x && x < cx + r && cy - r < y && y < cy + r)
    }
}

/// Compute pixel geometry for `palette` inside `viewport`.
pub fn resolve(
    viewport: &Viewport,
    palette: &Palette,
    config: &PickerConfig,
) -> Result<RenderGeometry, PickerError> {
    let (usable_w, usable_h) = viewport.usable();
    let invalid = || PickerError::InvalidViewport {
        width: viewport.width,
        height: viewport.height,
    };
    if !(usable_w.is_finite() && usable_h.is_finite()) || usable_w <= 0.0 || usable_h <= 0.0 {
        return Err(invalid());
    }

    let ar = constants::VIEW_ASPECT_RATIO;
    let (mut x, mut y) = (viewport.padding.left, viewport.padding.top);
    let (mut w, mut h) = (usable_w, usable_h);
    if w > h * ar {
        let diff = w - h * ar;
        x += diff * 0.5;
        w = h * ar;
    } else if h > w / ar {
        let diff = h - w / ar;
        y += diff * 0.5;
        h = w / ar;
    }

    let inset = config.overshoot_margin * usable_w.min(usable_h);
    if inset > 0.0 {
        let shrunk_w = w - inset;
        if shrunk_w <= 0.0 {
            return Err(invalid());
        }
        let shrunk_h = shrunk_w / ar;
        x += (w - shrunk_w) * 0.5;
        y += (h - shrunk_h) * 0.5;
        w = shrunk_w;
        h = shrunk_h;
    }

    let swatch_radius = 0.5 * w / f64::from(palette.radius() * 2 + 1);
    let centers = palette
        .swatches()
        .iter()
        .map(|s| {
            (
                x + (s.relative.0 + 1.0) * 0.5 * w,
                y + (s.relative.1 + 1.0) * 0.5 * h,
            )
        })
        .collect();

    Ok(RenderGeometry {
        offset: (x, y),
        scale: (w, h),
        swatch_radius,
        stroke_width: constants::STROKE_FACTOR * swatch_radius,
        swatch_padding: constants::SWATCH_PADDING_FACTOR * swatch_radius,
        centers,
    })
}

/// Preferred size when the host fixes only one side.
///
/// The free side follows the aspect ratio. Both sides known are kept as-is;
/// neither known yields `None`.
pub fn measure(width: Option<f64>, height: Option<f64>) -> Option<(f64, f64)> {
    let ar = constants::VIEW_ASPECT_RATIO;
    match (width, height) {
        (Some(w), Some(h)) => Some((w, h)),
        (Some(w), None) => Some((w, w / ar)),
        (None, Some(h)) => Some((h * ar, h)),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn square(radius: u32) -> RenderGeometry {
        let palette = Palette::new(radius).unwrap();
        resolve(&Viewport::new(300.0, 300.0), &palette, &PickerConfig::default()).unwrap()
    }

    #[test]
    fn square_viewport_shrinks_vertically() {
        let geometry = square(1);
        assert!(approx_eq(geometry.scale.0, 300.0));
        assert!(approx_eq(geometry.scale.1, 300.0 / constants::VIEW_ASPECT_RATIO));
        assert!(approx_eq(geometry.offset.0, 0.0));
        assert!(approx_eq(
            geometry.offset.1 * 2.0 + geometry.scale.1,
            300.0
        ));
        assert!(approx_eq(geometry.swatch_radius, 50.0));
        assert!(approx_eq(geometry.stroke_width, 2.5));
        assert!(approx_eq(geometry.full_radius(), 46.25));
    }

    #[test]
    fn wide_viewport_shrinks_horizontally() {
        let palette = Palette::new(2).unwrap();
        let viewport = Viewport::new(800.0, 200.0);
        let geometry = resolve(&viewport, &palette, &PickerConfig::default()).unwrap();
        assert!(approx_eq(geometry.scale.1, 200.0));
        assert!(approx_eq(geometry.scale.0, 200.0 * constants::VIEW_ASPECT_RATIO));
        assert!(approx_eq(geometry.offset.0 * 2.0 + geometry.scale.0, 800.0));
    }

    #[test]
    fn padding_moves_the_rectangle() {
        let palette = Palette::new(1).unwrap();
        let viewport = Viewport::new(320.0, 320.0).with_padding(Padding {
            left: 20.0,
            top: 0.0,
            right: 0.0,
            bottom: 20.0,
        });
        let geometry = resolve(&viewport, &palette, &PickerConfig::default()).unwrap();
        assert!(approx_eq(geometry.offset.0, 20.0));
        assert!(approx_eq(geometry.scale.0, 300.0));
        // Center swatch sits in the middle of the usable area.
        assert!(approx_eq(geometry.centers[3].0, 170.0));
        assert!(approx_eq(geometry.centers[3].1, 150.0));
    }

    #[test]
    fn row_neighbours_are_tangent() {
        let geometry = square(1);
        let (left, center) = (geometry.centers[2], geometry.centers[3]);
        assert!(approx_eq(center.0 - left.0, 2.0 * geometry.swatch_radius));
        assert!(approx_eq(center.1, left.1));
    }

    #[test]
    fn overshoot_margin_keeps_ratio() {
        let palette = Palette::new(3).unwrap();
        let config = PickerConfig::default().with_overshoot_margin(0.05);
        let geometry = resolve(&Viewport::new(400.0, 300.0), &palette, &config).unwrap();
        assert!(approx_eq(
            geometry.scale.0 / geometry.scale.1,
            constants::VIEW_ASPECT_RATIO
        ));
        assert!(approx_eq(geometry.scale.0, 300.0 * constants::VIEW_ASPECT_RATIO - 15.0));
    }

    #[test]
    fn empty_viewport_is_rejected() {
        let palette = Palette::new(1).unwrap();
        let config = PickerConfig::default();
        assert!(matches!(
            resolve(&Viewport::new(0.0, 100.0), &palette, &config),
            Err(PickerError::InvalidViewport { .. })
        ));
        let padded = Viewport::new(10.0, 10.0).with_padding(Padding::uniform(6.0));
        assert!(resolve(&padded, &palette, &config).is_err());
        assert!(resolve(&Viewport::new(f64::NAN, 10.0), &palette, &config).is_err());
    }

    #[test]
    fn hit_test_uses_bounding_squares() {
        let geometry = square(1);
        assert_eq!(geometry.hit_test(150.0, 150.0), Some(3));
        // Inside the center swatch's square but outside its circle.
        assert_eq!(geometry.hit_test(195.0, 195.0), Some(3));
        // Shared edge between the center and the right swatch.
        assert_eq!(geometry.hit_test(200.0, 150.0), None);
        assert_eq!(geometry.hit_test(1.0, 1.0), None);
    }

    #[test]
    fn measure_follows_aspect_ratio() {
        let ar = constants::VIEW_ASPECT_RATIO;
        assert_eq!(measure(Some(10.0), Some(20.0)), Some((10.0, 20.0)));
        let (w, h) = measure(Some(ar * 100.0), None).unwrap();
        assert!(approx_eq(w / h, ar));
        let (w, _) = measure(None, Some(100.0)).unwrap();
        assert!(approx_eq(w, ar * 100.0));
        assert_eq!(measure(None, None), None);
    }
}
