//! # floem-palette
//!
//! A hex color palette manager widget for [Floem](https://github.com/lapce/floem).
//!
//! Colors added through the validated text input persist across sessions as
//! a JSON array of hex strings; a fixed set of default colors always renders
//! alongside them, and four toggles narrow the visible set by RGB/HSL
//! predicates.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::rc::Rc;
//! use floem_palette::{palette_manager, JsonFileStore};
//!
//! let store = Rc::new(JsonFileStore::default_location().unwrap());
//! // Use `palette_manager(store)` in your Floem view tree.
//! ```

mod color;
mod constants;
mod filter;
mod input;
mod math;
mod palette;
mod store;
mod swatch;

pub use color::{Hsl, PaletteColor, Rgb};
pub use constants::DEFAULT_COLORS;
pub use filter::{apply_filters, FilterState};
pub use store::{JsonFileStore, MemoryStore, PaletteStore, StoreError};

use std::rc::Rc;
use std::sync::Once;

use floem::prelude::*;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the palette manager view backed by `store`.
///
/// The custom color list is loaded once when the view is built; every add or
/// remove synchronously rewrites the full list through the store. Defaults
/// never reach the store.
pub fn palette_manager(store: Rc<dyn PaletteStore>) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    palette::palette_container(store)
}
