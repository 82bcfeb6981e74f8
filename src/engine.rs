//! Palette engine: owns the swatch set, its pixel geometry, the selection,
//! and the entrance animation clock.
//!
//! The engine never reads a clock and never schedules work. The host feeds it
//! viewport sizes, pointer events, and elapsed time, and draws whatever
//! [`PaletteEngine::render_model`] returns.

use crate::animation;
use crate::color::SwatchColor;
use crate::config::PickerConfig;
use crate::constants;
use crate::error::PickerError;
use crate::layout::{self, RenderGeometry, Viewport};
use crate::palette::{self, Palette};

/// Pointer gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    /// A pointer went down on the swatch at `index` and has not been released.
    Tracking { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowCircle {
    pub center: (f64, f64),
    pub radius: f64,
    pub color: SwatchColor,
}

/// Everything needed to draw one swatch in the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwatchRender {
    pub center: (f64, f64),
    /// Current (animated) radius. May briefly exceed the full radius with an
    /// overshooting interpolator.
    pub radius: f64,
    pub fill: SwatchColor,
    pub stroke: SwatchColor,
    pub stroke_width: f64,
    /// Whether the checkmark goes on this swatch.
    pub selected: bool,
    pub shadow: Option<ShadowCircle>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderModel {
    pub swatches: Vec<SwatchRender>,
    pub selected_color: Option<SwatchColor>,
}

pub struct PaletteEngine {
    config: PickerConfig,
    palette: Palette,
    viewport: Option<Viewport>,
    geometry: Option<RenderGeometry>,
    /// Last confirmed selection.
    selected: Option<SwatchColor>,
    state: InteractionState,
    elapsed_ms: u32,
    on_select: Option<Box<dyn Fn(SwatchColor)>>,
}

impl PaletteEngine {
    /// Create an engine with the default palette radius and no selection.
    pub fn new(config: PickerConfig) -> Result<Self, PickerError> {
        let palette = palette::generate(constants::DEFAULT_PALETTE_RADIUS, &config)?;
        Ok(Self {
            config,
            palette,
            viewport: None,
            geometry: None,
            selected: None,
            state: InteractionState::Idle,
            elapsed_ms: 0,
            on_select: None,
        })
    }

    /// Rebuild the palette for `radius`, replace the selection and listener,
    /// and restart the entrance animation.
    ///
    /// On error the engine is left untouched.
    pub fn configure(
        &mut self,
        radius: i64,
        selected: Option<SwatchColor>,
        on_select: Option<Box<dyn Fn(SwatchColor)>>,
    ) -> Result<(), PickerError> {
        let radius = palette::checked_radius(radius)?;
        let palette = palette::generate(radius, &self.config)?;
        let geometry = self.fit(&palette, &self.config);
        log::debug!(
            "configured palette radius {radius} ({} swatches), selection {:?}",
            palette.len(),
            selected.map(|c| c.to_hex())
        );
        self.palette = palette;
        self.geometry = geometry;
        self.selected = selected.filter(|c| !c.is_transparent());
        self.on_select = on_select;
        self.state = InteractionState::Idle;
        self.elapsed_ms = 0;
        Ok(())
    }

    /// Swap the timing, easing, and shadow settings. Regenerates the palette
    /// at its current radius.
    pub fn set_config(&mut self, config: PickerConfig) -> Result<(), PickerError> {
        let palette = palette::generate(self.palette.radius(), &config)?;
        let geometry = self.fit(&palette, &config);
        self.config = config;
        self.palette = palette;
        self.geometry = geometry;
        self.state = InteractionState::Idle;
        Ok(())
    }

    pub fn set_on_select(&mut self, on_select: impl Fn(SwatchColor) + 'static) {
        self.on_select = Some(Box::new(on_select));
    }

    /// Replace the confirmed selection without touching the palette or the
    /// animation. Transparent counts as no selection.
    pub fn set_selected(&mut self, selected: Option<SwatchColor>) {
        self.selected = selected.filter(|c| !c.is_transparent());
    }

    /// Rewind the entrance animation to its first frame.
    pub fn restart_animation(&mut self) {
        self.elapsed_ms = 0;
    }

    /// Recompute pixel geometry for a new viewport.
    ///
    /// An unusable viewport clears the geometry, so nothing is drawn or hit
    /// until a valid size arrives.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<(), PickerError> {
        match layout::resolve(&viewport, &self.palette, &self.config) {
            Ok(geometry) => {
                self.viewport = Some(viewport);
                log::debug!(
                    "viewport {}x{}: swatch radius {:.2}",
                    viewport.width,
                    viewport.height,
                    geometry.swatch_radius
                );
                self.geometry = Some(geometry);
                Ok(())
            }
            Err(e) => {
                log::warn!("{e}");
                self.viewport = None;
                self.geometry = None;
                self.state = InteractionState::Idle;
                Err(e)
            }
        }
    }

    /// Geometry for `palette` in the last accepted viewport. A palette that
    /// does not fit is drawn nowhere until the next viewport arrives.
    fn fit(&self, palette: &Palette, config: &PickerConfig) -> Option<RenderGeometry> {
        let viewport = self.viewport.as_ref()?;
        match layout::resolve(viewport, palette, config) {
            Ok(geometry) => Some(geometry),
            Err(e) => {
                log::warn!("palette left without geometry: {e}");
                None
            }
        }
    }

    /// Start tracking the swatch under the pointer, if any.
    ///
    /// The swatch shows as selected right away, but nothing is reported until
    /// the pointer is released over the same swatch.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        let hit = self.geometry.as_ref().and_then(|g| g.hit_test(x, y));
        log::trace!("pointer down at ({x:.1}, {y:.1}) -> {hit:?}");
        match hit {
            Some(index) => {
                self.state = InteractionState::Tracking { index };
                true
            }
            None => {
                self.state = InteractionState::Idle;
                false
            }
        }
    }

    /// Finish a gesture. Returns the newly selected color when the pointer is
    /// released over the swatch it went down on; a drag onto another swatch
    /// selects nothing and restores the previous selection.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> Option<SwatchColor> {
        let InteractionState::Tracking { index } = self.state else {
            return None;
        };
        self.state = InteractionState::Idle;

        let hit = self.geometry.as_ref().and_then(|g| g.hit_test(x, y));
        log::trace!("pointer up at ({x:.1}, {y:.1}) -> {hit:?}, tracking {index}");
        if hit != Some(index) {
            return None;
        }
        let color = self.palette.get(index)?.fill;
        self.selected = Some(color);
        log::trace!("selected #{}", color.to_hex());
        if let Some(cb) = &self.on_select {
            cb(color);
        }
        Some(color)
    }

    /// Abandon the current gesture without selecting anything.
    pub fn pointer_cancel(&mut self) {
        self.state = InteractionState::Idle;
    }

    /// Advance the animation clock to `elapsed_ms` since configuration.
    /// Returns whether the host should keep ticking.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.elapsed_ms = elapsed_ms;
        self.is_animating()
    }

    pub fn is_animating(&self) -> bool {
        self.elapsed_ms <= self.config.view_anim_ms
    }

    /// The selection as currently shown, including a tentative one.
    pub fn selected_color(&self) -> Option<SwatchColor> {
        match self.state {
            InteractionState::Tracking { index } => self.palette.get(index).map(|s| s.fill),
            InteractionState::Idle => self.selected,
        }
    }

    /// The last confirmed selection, ignoring any gesture in progress.
    pub fn committed_color(&self) -> Option<SwatchColor> {
        self.selected
    }

    fn selected_index(&self) -> Option<usize> {
        match self.state {
            InteractionState::Tracking { index } => Some(index),
            InteractionState::Idle => self.selected.and_then(|c| self.palette.position_of(c)),
        }
    }

    /// Per-swatch drawing data for the current frame. Empty until a usable
    /// viewport has been set.
    pub fn render_model(&self) -> RenderModel {
        let selected_color = self.selected_color();
        let Some(geometry) = &self.geometry else {
            return RenderModel {
                swatches: Vec::new(),
                selected_color,
            };
        };

        let selected_index = self.selected_index();
        let full_radius = geometry.full_radius();
        let swatches = self
            .palette
            .swatches()
            .iter()
            .zip(&geometry.centers)
            .enumerate()
            .map(|(i, (swatch, &center))| {
                let radius = animation::swatch_progress(
                    self.elapsed_ms,
                    swatch.delay_ms,
                    self.config.swatch_anim_ms,
                    full_radius,
                    self.config.interpolator,
                );
                let shadow = self.config.shadow.map(|shadow| ShadowCircle {
                    center: (center.0 + shadow.distance / 2.0, center.1 + shadow.distance),
                    radius: radius * constants::SHADOW_SCALE,
                    color: shadow.color,
                });
                SwatchRender {
                    center,
                    radius,
                    fill: swatch.fill,
                    stroke: swatch.stroke,
                    stroke_width: geometry.stroke_width,
                    selected: selected_index == Some(i),
                    shadow,
                }
            })
            .collect();

        RenderModel {
            swatches,
            selected_color,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn geometry(&self) -> Option<&RenderGeometry> {
        self.geometry.as_ref()
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Shadow;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn engine(radius: i64) -> PaletteEngine {
        let mut engine = PaletteEngine::new(PickerConfig::default()).unwrap();
        engine.configure(radius, None, None).unwrap();
        engine.set_viewport(Viewport::new(300.0, 300.0)).unwrap();
        engine
    }

    #[test]
    fn starts_with_default_radius() {
        let engine = PaletteEngine::new(PickerConfig::default()).unwrap();
        assert_eq!(engine.palette().len(), 37);
        assert!(engine.render_model().swatches.is_empty());
    }

    #[test]
    fn down_selects_tentatively() {
        let mut engine = engine(1);
        assert!(engine.pointer_down(150.0, 150.0));
        assert_eq!(engine.state(), InteractionState::Tracking { index: 3 });
        assert_eq!(engine.selected_color(), Some(SwatchColor::WHITE));
        assert!(engine.render_model().swatches[3].selected);
    }

    #[test]
    fn miss_stays_idle() {
        let mut engine = engine(1);
        assert!(!engine.pointer_down(2.0, 2.0));
        assert_eq!(engine.state(), InteractionState::Idle);
        assert_eq!(engine.pointer_up(2.0, 2.0), None);
    }

    #[test]
    fn cancel_restores_previous_selection() {
        let mut engine = engine(1);
        let right = engine.palette().get(4).unwrap().fill;
        engine.configure(1, Some(right), None).unwrap();
        engine.pointer_down(150.0, 150.0);
        engine.pointer_cancel();
        assert_eq!(engine.selected_color(), Some(right));
        assert!(engine.render_model().swatches[4].selected);
    }

    #[test]
    fn selection_survives_without_listener() {
        let mut engine = engine(1);
        engine.pointer_down(150.0, 150.0);
        assert_eq!(engine.pointer_up(150.0, 150.0), Some(SwatchColor::WHITE));
        assert_eq!(engine.selected_color(), Some(SwatchColor::WHITE));
    }

    #[test]
    fn listener_fires_once_per_tap() {
        let mut engine = engine(1);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        engine.set_on_select(move |c| sink.borrow_mut().push(c));
        engine.pointer_down(250.0, 150.0);
        engine.pointer_up(251.0, 149.0);
        // A release without a matching press is ignored.
        engine.pointer_up(250.0, 150.0);
        let right = engine.palette().get(4).unwrap().fill;
        assert_eq!(*seen.borrow(), vec![right]);
    }

    #[test]
    fn invalid_configure_keeps_state() {
        let mut engine = engine(2);
        assert_eq!(
            engine.configure(-3, None, None),
            Err(PickerError::InvalidRadius(-3))
        );
        assert_eq!(engine.palette().radius(), 2);
        assert!(engine.geometry().is_some());
    }

    #[test]
    fn bad_viewport_clears_geometry() {
        let mut engine = engine(1);
        assert!(engine.set_viewport(Viewport::new(0.0, 0.0)).is_err());
        assert!(engine.render_model().swatches.is_empty());
        assert!(!engine.pointer_down(150.0, 150.0));
    }

    #[test]
    fn collapsed_viewport_does_not_block_reconfigure() {
        let mut engine = engine(1);
        assert!(engine.set_viewport(Viewport::new(0.0, 0.0)).is_err());
        assert_eq!(engine.configure(2, None, None), Ok(()));
        assert_eq!(engine.palette().len(), 19);
        assert!(engine.geometry().is_none());
        assert!(engine.set_config(PickerConfig::default()).is_ok());

        engine.set_viewport(Viewport::new(300.0, 300.0)).unwrap();
        assert_eq!(engine.render_model().swatches.len(), 19);
    }

    #[test]
    fn press_outside_ends_previous_gesture() {
        let mut engine = engine(1);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        engine.set_on_select(move |c| sink.borrow_mut().push(c));

        assert!(engine.pointer_down(150.0, 150.0));
        assert!(!engine.pointer_down(2.0, 2.0));
        assert_eq!(engine.state(), InteractionState::Idle);
        assert!(!engine.render_model().swatches[3].selected);
        assert_eq!(engine.pointer_up(150.0, 150.0), None);
        assert!(seen.borrow().is_empty());
        assert_eq!(engine.selected_color(), None);
    }

    #[test]
    fn committed_color_ignores_gesture_in_progress() {
        let mut engine = engine(1);
        let right = engine.palette().get(4).unwrap().fill;
        engine.set_selected(Some(right));
        engine.pointer_down(150.0, 150.0);
        assert_eq!(engine.selected_color(), Some(SwatchColor::WHITE));
        assert_eq!(engine.committed_color(), Some(right));
    }

    #[test]
    fn tick_reports_until_view_animation_ends() {
        let mut engine = engine(1);
        assert!(engine.tick(0));
        assert!(engine.tick(500));
        assert!(!engine.tick(501));
        assert!(engine.render_model().swatches.iter().all(|s| {
            (s.radius - engine.geometry().unwrap().full_radius()).abs() < 1e-9
        }));
    }

    #[test]
    fn swatches_start_hidden() {
        let engine = engine(1);
        assert!(engine.render_model().swatches.iter().all(|s| s.radius == 0.0));
    }

    #[test]
    fn configure_restarts_animation() {
        let mut engine = engine(1);
        engine.tick(400);
        engine.configure(2, None, None).unwrap();
        assert_eq!(engine.elapsed_ms(), 0);
        assert_eq!(engine.render_model().swatches.len(), 19);
    }

    #[test]
    fn shadow_follows_swatch() {
        let mut engine = engine(0);
        engine
            .set_config(PickerConfig::default().with_shadow(Shadow {
                distance: 4.0,
                color: SwatchColor::GRAY,
            }))
            .unwrap();
        engine.tick(1000);
        let swatch = engine.render_model().swatches[0];
        let shadow = swatch.shadow.unwrap();
        assert_eq!(shadow.center, (swatch.center.0 + 2.0, swatch.center.1 + 4.0));
        assert!((shadow.radius - swatch.radius * 1.05).abs() < 1e-9);
    }

    #[test]
    fn transparent_selection_means_none() {
        let mut engine = engine(1);
        engine
            .configure(1, Some(SwatchColor::TRANSPARENT), None)
            .unwrap();
        assert_eq!(engine.selected_color(), None);
    }
}
