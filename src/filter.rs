//! Filter engine: narrows the visible palette by channel predicates, plus
//! the toggle row views.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::color::PaletteColor;
use crate::constants;

/// The four filter toggles. All off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
    pub saturation: bool,
}

/// Applies the active predicates as successive intersections (logical AND).
///
/// A color whose hex fails to parse never satisfies an active predicate.
/// The green toggle is state-only; it is shown in the UI but has never been
/// wired into the narrowing.
pub fn apply_filters(colors: &[PaletteColor], state: FilterState) -> Vec<PaletteColor> {
    let mut current = colors.to_vec();
    if state.red {
        current.retain(|c| c.rgb().map(|rgb| rgb.r > 127).unwrap_or(false));
    }
    if state.blue {
        current.retain(|c| c.rgb().map(|rgb| rgb.b > 127).unwrap_or(false));
    }
    if state.saturation {
        current.retain(|c| c.hsl().map(|hsl| hsl.s > 50.0).unwrap_or(false));
    }
    current
}

/// One labelled check square bound to a flag signal.
pub(crate) fn filter_toggle(lbl: &'static str, flag: RwSignal<bool>) -> impl IntoView {
    h_stack((
        container(
            label(move || {
                if flag.get() {
                    lucide_icons::Icon::Check.unicode().to_string()
                } else {
                    String::new()
                }
            })
            .style(|s| {
                s.font_size(constants::LABEL_FONT)
                    .font_family("lucide".to_string())
                    .color(Color::rgb8(80, 80, 80))
            }),
        )
        .style(|s| {
            s.size(constants::CHECK_SIZE, constants::CHECK_SIZE)
                .items_center()
                .justify_center()
                .background(Color::WHITE)
                .border(1.0)
                .border_color(Color::rgb8(200, 200, 200))
                .border_radius(2.0)
        }),
        label(move || lbl).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
        }),
    ))
    .style(|s| {
        s.items_center()
            .gap(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        flag.set(!flag.get_untracked());
    })
}
