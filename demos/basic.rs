//! Standalone demo: opens a window with the hexagonal picker.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_hexpicker::{hexagonal_picker, SwatchColor, DEFAULT_PALETTE_RADIUS};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let color = RwSignal::new(Some(SwatchColor::WHITE));
    let radius = RwSignal::new(DEFAULT_PALETTE_RADIUS);

    floem::Application::new()
        .window(
            move |_| {
                hexagonal_picker(color, radius).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((360.0, 380.0))
                    .title("floem-hexpicker"),
            ),
        )
        .run();
}
