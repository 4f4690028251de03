//! Swatch view: one colored square with its hex caption, a copy control,
//! and a remove control on non-default colors.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};
use floem::IntoView;

use crate::color::PaletteColor;
use crate::constants;

/// Fill color for a swatch square; unparseable hex renders gray.
fn square_fill(color: &PaletteColor) -> Color {
    match color.rgb() {
        Some(rgb) => Color::rgb8(rgb.r, rgb.g, rgb.b),
        None => Color::rgb8(128, 128, 128),
    }
}

/// One swatch. `on_remove` receives the hex string; it is never invoked for
/// defaults, which render without the remove control.
pub(crate) fn swatch(
    color: PaletteColor,
    on_remove: impl Fn(String) + 'static,
) -> impl IntoView {
    let fill = square_fill(&color);
    let hex = color.hex().to_string();

    let remove = if color.is_default() {
        empty().into_any()
    } else {
        let hex = hex.clone();
        remove_button(move || on_remove(hex.clone())).into_any()
    };

    let caption_hex = hex.clone();
    let copied_hex = hex.clone();
    v_stack((
        empty().style(move |s| {
            s.size(constants::SWATCH_SIZE, constants::SWATCH_SIZE)
                .border_radius(constants::RADIUS)
                .border(1.0)
                .border_color(Color::rgb8(180, 180, 180))
                .background(fill)
        }),
        h_stack((
            label(move || caption_hex.clone()).style(move |s| {
                s.font_size(constants::LABEL_FONT)
                    .font_family("monospace".to_string())
                    .color(fill)
            }),
            copy_button(move || copied_hex.clone()),
            remove,
        ))
        .style(|s| s.items_center().gap(2.0)),
    ))
    .style(|s| s.items_center().gap(2.0))
}

/// A small copy button that copies the result of `get_text` to the clipboard.
fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(11.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(16.0, 16.0)
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
        copy_to_clipboard(&get_text());
    })
}

/// The `x` control that deletes a custom color.
fn remove_button(on_press: impl Fn() + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::X.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(160, 40, 40)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(11.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(16.0, 16.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(240, 220, 220)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        on_press();
    })
}

fn copy_to_clipboard(text: &str) {
    if let Ok(mut clipboard) = arboard::Clipboard::new() {
        let _ = clipboard.set_text(text);
    }
}
