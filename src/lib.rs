//! # floem-hexpicker
//!
//! A hexagonal swatch color picker for [Floem](https://github.com/lapce/floem).
//!
//! Swatches are packed in a hexagon around a white center. Angle around the
//! center picks the hue and distance picks the saturation. Swatches scale in
//! one after another when the palette appears, and a tap on a swatch selects
//! its color.
//!
//! The palette logic lives in [`PaletteEngine`], which has no Floem
//! dependency and can be driven by any host that supplies a viewport size,
//! pointer events, and elapsed time.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_hexpicker::{hexagonal_picker, SwatchColor};
//!
//! let color = RwSignal::new(None::<SwatchColor>);
//! let radius = RwSignal::new(3u32);
//! // Use `hexagonal_picker(color, radius)` in your Floem view tree.
//! ```

mod animation;
mod color;
mod config;
mod constants;
mod engine;
mod error;
mod inputs;
mod layout;
mod math;
mod palette;
mod palette_view;
mod picker_panel;

pub use animation::{swatch_progress, Interpolator};
pub use color::SwatchColor;
pub use config::{Padding, PickerConfig, Shadow};
pub use constants::{
    ANIM_TIME_SWATCH, ANIM_TIME_VIEW, DEFAULT_PALETTE_RADIUS, MAX_PALETTE_RADIUS,
    TICK_INTERVAL_MS, VIEW_ASPECT_RATIO,
};
pub use engine::{InteractionState, PaletteEngine, RenderModel, ShadowCircle, SwatchRender};
pub use error::PickerError;
pub use layout::{measure, resolve, RenderGeometry, Viewport};
pub use palette::{checked_radius, generate, swatch_count, GridCoordinate, Palette, Swatch};

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the top-level picker view.
///
/// `color` receives the color of every tapped swatch and may be set from
/// outside to move the checkmark. `radius` controls the palette size; changing
/// it rebuilds the palette.
pub fn hexagonal_picker(
    color: RwSignal<Option<SwatchColor>>,
    radius: RwSignal<u32>,
) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    picker_panel::picker_panel(color, radius)
}
