//! Picker panel: the hexagonal palette above a row with the radius input,
//! hex readout, copy button, and a preview of the selected color.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet};

use crate::color::SwatchColor;
use crate::constants;
use crate::inputs::{copy_button, hex_label, radius_input};
use crate::palette_view::{host_config, palette_view};

pub(crate) fn picker_panel(
    color: RwSignal<Option<SwatchColor>>,
    radius: RwSignal<u32>,
) -> impl IntoView {
    v_stack((
        palette_view(radius, color, host_config()),
        h_stack((
            radius_input(radius),
            // Spacer pushes the readout to the right
            empty().style(|s| s.flex_grow(1.0)),
            hex_label(color),
            copy_button(move || color.get().map(|c| c.to_hex()).unwrap_or_default()),
            empty().style(move |st| {
                let (r, g, b, a) = color
                    .get()
                    .unwrap_or(SwatchColor::TRANSPARENT)
                    .to_rgba_f64();
                st.width(32.0)
                    .height(32.0)
                    .border_radius(constants::RADIUS)
                    .border(1.0)
                    .border_color(Color::rgb8(180, 180, 180))
                    .background(Color::rgba(r, g, b, a))
            }),
        ))
        .style(|st| st.gap(constants::GAP).items_center().margin_horiz(8.0)),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .padding_horiz(constants::PADDING)
            .padding_bottom(constants::PADDING)
            .padding_top(2.0)
            .size_full()
            .justify_center()
            .background(Color::rgb8(242, 242, 242))
    })
}
