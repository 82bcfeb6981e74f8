//! Palette generation: swatch positions on a hexagonally packed grid, their
//! colors, and their entrance delays.
//!
//! Grid points are spaced two units apart and every other row is shifted by
//! one unit, so each swatch touches its neighbours in the rows above and
//! below. Row `y` runs over `-2r..=2r` in steps of two and holds the points
//! `x` in `-(2r - |y/2|)..=(2r - |y/2|)`, again in steps of two.

use crate::animation;
use crate::color::SwatchColor;
use crate::config::PickerConfig;
use crate::constants;
use crate::error::PickerError;
use crate::math;

/// Number of swatches in a palette of the given radius (centered hexagonal number).
pub const fn swatch_count(radius: u32) -> usize {
    let r = radius as usize;
    3 * r * (r + 1) + 1
}

/// Validate a caller-supplied palette radius.
pub fn checked_radius(radius: i64) -> Result<u32, PickerError> {
    match u32::try_from(radius) {
        Ok(r) if r <= constants::MAX_PALETTE_RADIUS => Ok(r),
        _ => {
            log::warn!("rejecting palette radius {radius}");
            Err(PickerError::InvalidRadius(radius))
        }
    }
}

/// Axial position of a swatch on the doubled integer lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCoordinate {
    pub x: i32,
    pub y: i32,
}

/// One selectable color circle. Immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub coord: GridCoordinate,
    /// Position with both axes in -1.0..=1.0.
    pub relative: (f64, f64),
    /// Hue in degrees, 0.0..=360.0.
    pub hue: f64,
    pub saturation: f64,
    pub fill: SwatchColor,
    /// Same hue and saturation as `fill` at half the value.
    pub stroke: SwatchColor,
    /// Start offset of the scale-in animation (ms).
    pub delay_ms: u32,
}

impl Swatch {
    fn new(coord: GridCoordinate, radius: u32, delay_ms: u32) -> Self {
        let extent = radius * 2;
        let span = f64::from(extent + 1);
        let (hue, saturation) = math::polar_hue_saturation(coord.x, coord.y, extent);
        Self {
            coord,
            relative: (f64::from(coord.x) / span, f64::from(coord.y) / span),
            hue,
            saturation,
            fill: SwatchColor::from_hsv(hue, saturation, 1.0),
            stroke: SwatchColor::from_hsv(hue, saturation, 0.5),
            delay_ms,
        }
    }
}

/// Ordered swatch set for one palette radius, in row-major generation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    radius: u32,
    swatches: Vec<Swatch>,
}

impl Palette {
    /// Generate with the default animation timing.
    pub fn new(radius: u32) -> Result<Self, PickerError> {
        generate(radius, &PickerConfig::default())
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Swatch> {
        self.swatches.get(index)
    }

    /// Index of the first swatch filled with `color`.
    pub fn position_of(&self, color: SwatchColor) -> Option<usize> {
        self.swatches.iter().position(|s| s.fill == color)
    }
}

fn grid_coordinates(radius: u32) -> impl Iterator<Item = GridCoordinate> {
    let extent = radius as i32 * 2;
    (-extent..=extent).step_by(2).flat_map(move |y| {
        let row = extent - (y / 2).abs();
        (-row..=row).step_by(2).map(move |x| GridCoordinate { x, y })
    })
}

/// Build the palette for `radius`.
///
/// Fails with [`PickerError::Configuration`] if the grid walk disagrees with
/// [`swatch_count`], which would mean the iteration bounds are broken.
pub fn generate(radius: u32, config: &PickerConfig) -> Result<Palette, PickerError> {
    if radius > constants::MAX_PALETTE_RADIUS {
        return Err(PickerError::InvalidRadius(i64::from(radius)));
    }
    config.validate()?;

    let expected = swatch_count(radius);
    let swatches: Vec<Swatch> = grid_coordinates(radius)
        .enumerate()
        .map(|(index, coord)| {
            let delay = animation::swatch_delay(
                index,
                expected,
                config.view_anim_ms,
                config.swatch_anim_ms,
            );
            Swatch::new(coord, radius, delay)
        })
        .collect();

    if swatches.len() != expected {
        log::error!(
            "palette radius {radius}: generated {} swatches, expected {expected}",
            swatches.len()
        );
        return Err(PickerError::Configuration {
            radius,
            expected,
            actual: swatches.len(),
        });
    }

    log::debug!("generated palette radius {radius} with {expected} swatches");
    Ok(Palette { radius, swatches })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn centered_hexagonal_counts() {
        for (radius, count) in [(0, 1), (1, 7), (2, 19), (3, 37), (10, 331)] {
            assert_eq!(swatch_count(radius), count);
            assert_eq!(Palette::new(radius).unwrap().len(), count);
        }
    }

    #[test]
    fn radius_one_layout() {
        let palette = Palette::new(1).unwrap();
        let coords: Vec<(i32, i32)> = palette
            .swatches()
            .iter()
            .map(|s| (s.coord.x, s.coord.y))
            .collect();
        assert_eq!(
            coords,
            [(-1, -2), (1, -2), (-2, 0), (0, 0), (2, 0), (-1, 2), (1, 2)]
        );
    }

    #[test]
    fn single_swatch_palette_is_white() {
        let palette = Palette::new(0).unwrap();
        let center = palette.get(0).unwrap();
        assert_eq!(center.relative, (0.0, 0.0));
        assert_eq!(center.fill, SwatchColor::WHITE);
        assert_eq!(center.stroke, SwatchColor::from_rgb8(128, 128, 128));
        assert_eq!(center.delay_ms, 0);
    }

    #[test]
    fn relative_positions_stay_in_unit_square() {
        let palette = Palette::new(4).unwrap();
        for s in palette.swatches() {
            assert!(s.relative.0.abs() < 1.0 && s.relative.1.abs() < 1.0);
        }
    }

    #[test]
    fn outer_ring_on_x_axis_is_saturated() {
        let palette = Palette::new(2).unwrap();
        let right = palette
            .swatches()
            .iter()
            .find(|s| s.coord == GridCoordinate { x: 4, y: 0 })
            .unwrap();
        assert!(approx_eq(right.hue, 180.0));
        assert!(approx_eq(right.saturation, 1.0));
        assert_eq!(right.fill, SwatchColor::from_rgb8(0, 255, 255));
        assert_eq!(right.stroke, SwatchColor::from_rgb8(0, 128, 128));
    }

    #[test]
    fn last_swatch_finishes_within_view_animation() {
        let config = PickerConfig::default();
        let palette = generate(3, &config).unwrap();
        let last = palette.swatches().last().unwrap();
        assert!(last.delay_ms + config.swatch_anim_ms <= config.view_anim_ms);
        let delays: Vec<u32> = palette.swatches().iter().map(|s| s.delay_ms).collect();
        assert!(delays.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn finds_swatch_by_color() {
        let palette = Palette::new(2).unwrap();
        let target = palette.get(5).unwrap().fill;
        assert_eq!(palette.position_of(target), Some(5));
        assert_eq!(palette.position_of(SwatchColor::TRANSPARENT), None);
    }

    #[test]
    fn radius_bounds() {
        assert_eq!(checked_radius(3), Ok(3));
        assert_eq!(checked_radius(-1), Err(PickerError::InvalidRadius(-1)));
        assert_eq!(checked_radius(65), Err(PickerError::InvalidRadius(65)));
        assert!(matches!(
            Palette::new(65),
            Err(PickerError::InvalidRadius(65))
        ));
    }

    #[test]
    fn invalid_timing_is_rejected() {
        let config = PickerConfig::default().with_durations(10, 20);
        assert!(matches!(
            generate(1, &config),
            Err(PickerError::InvalidDuration { .. })
        ));
    }
}
