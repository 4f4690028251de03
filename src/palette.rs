//! Palette manager container: input row, filter toggles, and the swatch
//! grid, with the persistence and recompute wiring.

use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

use crate::color::PaletteColor;
use crate::constants;
use crate::filter::{apply_filters, filter_toggle, FilterState};
use crate::input::color_input;
use crate::store::PaletteStore;
use crate::swatch::swatch;

/// The working set: custom colors first, then the built-in defaults.
fn full_set(custom: &[PaletteColor]) -> Vec<PaletteColor> {
    let mut all = custom.to_vec();
    all.extend(
        constants::DEFAULT_COLORS
            .iter()
            .map(|hex| PaletteColor::default_color(*hex)),
    );
    all
}

/// Append a custom color to the list.
fn add_color(colors: &mut Vec<PaletteColor>, hex: String) {
    colors.push(PaletteColor::custom(hex));
}

/// Drop every entry matching `hex` exactly. Absent hex is a no-op.
fn remove_color(colors: &mut Vec<PaletteColor>, hex: &str) {
    colors.retain(|c| c.hex() != hex);
}

fn load_initial(store: &dyn PaletteStore) -> Vec<PaletteColor> {
    match store.load() {
        Ok(hexes) => hexes.into_iter().map(PaletteColor::custom).collect(),
        Err(err) => {
            tracing::warn!(%err, "failed to load stored palette, starting empty");
            Vec::new()
        }
    }
}

/// Builds the full widget around `store`.
pub(crate) fn palette_container(store: Rc<dyn PaletteStore>) -> impl IntoView {
    let custom = RwSignal::new(load_initial(store.as_ref()));
    let visible = RwSignal::new(full_set(&custom.get_untracked()));

    let red = RwSignal::new(false);
    let green = RwSignal::new(false);
    let blue = RwSignal::new(false);
    let saturation = RwSignal::new(false);

    // ── List changed → show the whole set again, unfiltered ────────────
    // Active toggles are deliberately not reapplied here; only a toggle
    // change triggers the narrowing effect below.
    create_effect(move |_| {
        let colors = custom.get();
        visible.set(full_set(&colors));
    });

    // Toggle changed → refilter from the current list.
    create_effect(move |_| {
        let state = FilterState {
            red: red.get(),
            green: green.get(),
            blue: blue.get(),
            saturation: saturation.get(),
        };
        visible.set(apply_filters(&full_set(&custom.get_untracked()), state));
    });

    // Every mutation rewrites the whole custom list; save failures keep the
    // in-memory state and are only logged.
    let persist = {
        let store = store.clone();
        move |colors: &[PaletteColor]| {
            let hexes: Vec<String> = colors.iter().map(|c| c.hex().to_string()).collect();
            if let Err(err) = store.save(&hexes) {
                tracing::warn!(%err, "failed to save palette");
            }
        }
    };

    let on_add = {
        let persist = persist.clone();
        move |hex: String| {
            let mut colors = custom.get_untracked();
            add_color(&mut colors, hex);
            persist(&colors);
            custom.set(colors);
        }
    };
    let on_remove = Rc::new(move |hex: String| {
        let mut colors = custom.get_untracked();
        remove_color(&mut colors, &hex);
        persist(&colors);
        custom.set(colors);
    });

    v_stack((
        color_input(on_add),
        h_stack((
            filter_toggle("Red > 50%", red),
            filter_toggle("Green > 50%", green),
            filter_toggle("Blue > 50%", blue),
            filter_toggle("Saturation > 50%", saturation),
        ))
        .style(|s| s.items_center().gap(constants::GAP)),
        dyn_stack(
            move || visible.get(),
            |c: &PaletteColor| (c.hex().to_string(), c.is_default()),
            move |c| {
                let on_remove = on_remove.clone();
                swatch(c, move |hex| on_remove(hex))
            },
        )
        .style(|s| {
            s.flex_row()
                .flex_wrap(floem::taffy::FlexWrap::Wrap)
                .gap(constants::GAP)
        }),
    ))
    .style(|s| {
        s.gap(constants::GAP)
            .padding(constants::PADDING)
            .size_full()
            .background(Color::rgb8(242, 242, 242))
    })
}
