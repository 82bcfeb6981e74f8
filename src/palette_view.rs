//! Hexagonal palette view.
//!
//! Hosts a [`PaletteEngine`]: feeds it the widget size and pointer events,
//! drives its entrance animation from a timer, and paints the render model.

use std::time::{Duration, Instant};

use floem::action::exec_after;
use floem::context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx};
use floem::event::{Event, EventPropagation};
use floem::kurbo::{BezPath, Circle, Point, Rect, Stroke};
use floem::peniko::Color;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::{empty, Decorators};
use floem::{AnyView, IntoView, View, ViewId};
use floem_renderer::Renderer;

use crate::animation::Interpolator;
use crate::color::SwatchColor;
use crate::config::{PickerConfig, Shadow};
use crate::constants;
use crate::engine::PaletteEngine;
use crate::layout::Viewport;

fn to_color(c: SwatchColor) -> Color {
    Color::rgba8(c.r(), c.g(), c.b(), c.a())
}

/// Checkmark stroke inside a swatch of radius `r`.
fn checkmark_path(center: Point, r: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to((center.x - 0.4 * r, center.y));
    path.line_to((center.x - 0.1 * r, center.y + 0.3 * r));
    path.line_to((center.x + 0.45 * r, center.y - 0.3 * r));
    path
}

enum PaletteUpdate {
    Radius(u32),
    Selected(Option<SwatchColor>),
    Tick,
}

pub(crate) struct PaletteView {
    id: ViewId,
    engine: PaletteEngine,
    selected: RwSignal<Option<SwatchColor>>,
    /// When the current entrance animation started.
    started: Instant,
    ticking: bool,
    size: floem::taffy::prelude::Size<f32>,
}

/// Creates the hexagonal swatch palette.
///
/// - `radius`: palette radius; any change rebuilds the palette and replays the animation
/// - `selected`: written when a swatch is tapped, read to place the checkmark
///
/// A palette that cannot be built is logged and replaced by an empty view.
pub(crate) fn palette_view(
    radius: RwSignal<u32>,
    selected: RwSignal<Option<SwatchColor>>,
    config: PickerConfig,
) -> AnyView {
    match build_palette(radius, selected, config) {
        Some(view) => view
            .style(|s| {
                s.flex_grow(1.0)
                    .margin_top(12.0)
                    .aspect_ratio(constants::VIEW_ASPECT_RATIO as f32)
                    .min_height(100.0)
                    .cursor(floem::style::CursorStyle::Pointer)
            })
            .into_any(),
        None => empty().into_any(),
    }
}

fn build_palette(
    radius: RwSignal<u32>,
    selected: RwSignal<Option<SwatchColor>>,
    config: PickerConfig,
) -> Option<PaletteView> {
    let mut engine = match PaletteEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("palette disabled: {e}");
            return None;
        }
    };
    if let Err(e) = engine.configure(
        i64::from(radius.get_untracked()),
        selected.get_untracked(),
        Some(Box::new(move |c: SwatchColor| selected.set(Some(c)))),
    ) {
        log::error!("palette disabled: {e}");
        return None;
    }

    let id = ViewId::new();

    create_effect(move |_| {
        let r = radius.get();
        id.update_state(PaletteUpdate::Radius(r));
    });

    create_effect(move |_| {
        let c = selected.get();
        id.update_state(PaletteUpdate::Selected(c));
    });

    Some(PaletteView {
        id,
        engine,
        selected,
        started: Instant::now(),
        ticking: false,
        size: Default::default(),
    })
}

impl PaletteView {
    fn restart_animation(&mut self) {
        self.started = Instant::now();
        self.engine.restart_animation();
        self.schedule_tick();
    }

    fn schedule_tick(&mut self) {
        if self.ticking {
            return;
        }
        self.ticking = true;
        let id = self.id;
        exec_after(Duration::from_millis(constants::TICK_INTERVAL_MS), move |_| {
            id.update_state(PaletteUpdate::Tick);
        });
    }

    fn reconfigure(&mut self, radius: u32) {
        if radius == self.engine.palette().radius() {
            return;
        }
        let selected = self.selected;
        match self.engine.configure(
            i64::from(radius),
            self.engine.committed_color(),
            Some(Box::new(move |c: SwatchColor| selected.set(Some(c)))),
        ) {
            Ok(()) => self.restart_animation(),
            Err(e) => log::error!("keeping previous palette: {e}"),
        }
    }
}

impl View for PaletteView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<PaletteUpdate>() {
            match *update {
                PaletteUpdate::Radius(r) => self.reconfigure(r),
                PaletteUpdate::Selected(c) => {
                    if c != self.engine.selected_color() {
                        self.engine.set_selected(c);
                    }
                }
                PaletteUpdate::Tick => {
                    self.ticking = false;
                    let elapsed = self.started.elapsed().as_millis();
                    let elapsed = u32::try_from(elapsed).unwrap_or(u32::MAX);
                    if self.engine.tick(elapsed) {
                        self.schedule_tick();
                    }
                }
            }
            self.id.request_paint();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                if self.engine.pointer_down(e.pos.x, e.pos.y) {
                    cx.update_active(self.id());
                    self.id.request_paint();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(e) => {
                self.engine.pointer_up(e.pos.x, e.pos.y);
                self.id.request_paint();
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.engine.pointer_cancel();
                self.id.request_paint();
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        if layout.size != self.size {
            self.size = layout.size;
            let had_geometry = self.engine.geometry().is_some();
            let viewport = Viewport::new(self.size.width as f64, self.size.height as f64);
            // Replay the entrance the first time the palette becomes visible.
            if self.engine.set_viewport(viewport).is_ok() && !had_geometry {
                self.restart_animation();
            }
        }
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let model = self.engine.render_model();
        for swatch in &model.swatches {
            if swatch.radius <= 0.0 {
                continue;
            }
            let center = Point::new(swatch.center.0, swatch.center.1);

            if let Some(shadow) = swatch.shadow {
                let circle = Circle::new(shadow.center, shadow.radius);
                cx.fill(&circle, to_color(shadow.color), 0.0);
            }

            let circle = Circle::new(center, swatch.radius);
            cx.fill(&circle, to_color(swatch.fill), 0.0);
            cx.stroke(
                &circle,
                to_color(swatch.stroke),
                &Stroke::new(swatch.stroke_width),
            );

            if swatch.selected {
                cx.stroke(
                    &checkmark_path(center, swatch.radius),
                    to_color(swatch.stroke),
                    &Stroke::new(swatch.stroke_width * 3.0),
                );
            }
        }
    }
}

/// Host defaults: overshooting entrance with room left for it, and a drop shadow.
pub(crate) fn host_config() -> PickerConfig {
    PickerConfig::default()
        .with_interpolator(Interpolator::overshoot())
        .with_overshoot_margin(0.05)
        .with_shadow(Shadow::default())
}
