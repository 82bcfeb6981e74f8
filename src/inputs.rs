//! Small input and readout components around the palette.

use floem::event::EventPropagation;
use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

use crate::color::SwatchColor;
use crate::constants;
use crate::palette;

fn field_style(s: floem::style::Style, width: f32) -> floem::style::Style {
    s.width(width)
        .padding(2.0)
        .font_size(constants::INPUT_FONT)
        .font_family("monospace".to_string())
        .background(Color::WHITE)
        .border(1.0)
        .border_color(Color::rgb8(200, 200, 200))
        .border_radius(3.0)
}

/// A numeric input for the palette radius.
///
/// Text is committed on Enter or focus loss. Anything that is not an accepted
/// radius snaps back to the current value.
pub(crate) fn radius_input(radius: RwSignal<u32>) -> impl IntoView {
    let text = RwSignal::new(radius.get_untracked().to_string());

    // Signal → text (external updates)
    create_effect(move |_| {
        let expected = radius.get().to_string();
        if text.get_untracked() != expected {
            text.set(expected);
        }
    });

    let on_commit = move || {
        let raw = text.get_untracked();
        let parsed = raw
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|r| palette::checked_radius(r).ok());
        match parsed {
            Some(r) => {
                if r != radius.get_untracked() {
                    radius.set(r);
                }
                if raw != r.to_string() {
                    text.set(r.to_string());
                }
            }
            None => {
                log::debug!("ignoring radius input {raw:?}");
                text.set(radius.get_untracked().to_string());
            }
        }
    };
    let on_commit_clone = on_commit;

    v_stack((
        text_input(text)
            .style(|s| field_style(s, constants::INPUT_WIDTH))
            .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
                on_commit();
            })
            .on_event(floem::event::EventListener::KeyDown, move |e| {
                if let floem::event::Event::KeyDown(ke) = e {
                    if ke.key.logical_key
                        == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
                    {
                        on_commit_clone();
                        return EventPropagation::Stop;
                    }
                }
                EventPropagation::Continue
            }),
        label(|| "R").style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
                .justify_content(Some(floem::taffy::AlignContent::Center))
        }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// Read-only `#RRGGBB` readout of the selected color.
pub(crate) fn hex_label(color: RwSignal<Option<SwatchColor>>) -> impl IntoView {
    label(move || match color.get() {
        Some(c) => format!("#{}", c.to_hex()),
        None => "none".to_string(),
    })
    .style(|s| {
        s.width(constants::HEX_LABEL_WIDTH)
            .font_size(constants::INPUT_FONT)
            .font_family("monospace".to_string())
            .color(Color::rgb8(80, 80, 80))
    })
}

/// A small copy button that copies the result of `get_text` to the clipboard.
/// Empty text is not copied.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        let text = get_text();
        if !text.is_empty() {
            copy_to_clipboard(&text);
        }
    })
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => log::trace!("copied {text} to clipboard"),
        Err(e) => log::warn!("clipboard unavailable: {e}"),
    }
}
