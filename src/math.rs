//! Color math: HSV conversion and the polar mapping from grid coordinates
//! to hue and saturation. Hue is handled in 0.0–1.0 internally.

use std::f64::consts::PI;

/// HSB/HSV → RGB. All values 0.0–1.0.
pub(crate) fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h * 6.0).rem_euclid(6.0);
    let i = h6.floor() as u32;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Hue (degrees) given to the center swatch, where the angle is undefined.
pub(crate) const CENTER_HUE: f64 = 180.0;

/// Map a grid coordinate to `(hue_degrees, saturation)`.
///
/// `extent` is the grid distance of the outer ring from the center (twice the
/// palette radius). The positive x axis maps to 180°, and saturation grows
/// linearly with distance, clamped to 1.0 past the hexagon's flat sides.
pub(crate) fn polar_hue_saturation(x: i32, y: i32, extent: u32) -> (f64, f64) {
    if (x == 0 && y == 0) || extent == 0 {
        return (CENTER_HUE, 0.0);
    }
    let (xf, yf) = (f64::from(x), f64::from(y));
    let hue = 360.0 * (0.5 + 0.5 * yf.atan2(xf) / PI);
    let saturation = (xf.hypot(yf) / f64::from(extent)).clamp(0.0, 1.0);
    (hue, saturation)
}
