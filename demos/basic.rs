//! Standalone demo: opens a window with the palette manager.

use std::rc::Rc;

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_palette::{palette_manager, JsonFileStore, MemoryStore, PaletteStore};

fn main() {
    let store: Rc<dyn PaletteStore> = match JsonFileStore::default_location() {
        Ok(store) => Rc::new(store),
        Err(_) => Rc::new(MemoryStore::new()),
    };

    floem::Application::new()
        .window(
            move |_| {
                palette_manager(store.clone()).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((420.0, 520.0))
                    .title("floem-palette"),
            ),
        )
        .run();
}
