//! Hex entry row: an incrementally validated text input plus an Add button.
//!
//! Keystrokes that would make the buffer an impossible hex prefix are rolled
//! back silently; a submit only fires when the buffer is a complete
//! `#RRGGBB` value.

use std::rc::Rc;

use floem::event::EventPropagation;
use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

use crate::constants;

/// Decide which buffer to keep after an edit turned `prev` into `next`.
///
/// Deletions always go through. Otherwise the buffer must start with `#`,
/// stay hex after that first char, and never exceed 7 chars. Rejected edits
/// keep `prev`.
pub(crate) fn sanitize_edit(prev: &str, next: &str) -> String {
    if next.chars().count() < prev.chars().count() {
        return next.to_string();
    }
    if prev.is_empty() && next != "#" {
        return prev.to_string();
    }
    if !prev.is_empty() {
        let mut after_first = next.chars().skip(1).peekable();
        if after_first.peek().is_none() {
            return prev.to_string();
        }
        if !after_first.all(|c| c.is_ascii_hexdigit()) {
            return prev.to_string();
        }
    }
    if next.chars().count() > 7 {
        return prev.to_string();
    }
    next.to_string()
}

/// Final check on submit: `#` plus exactly six hex digits.
pub(crate) fn is_complete_hex(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next() == Some('#') && {
        let rest = chars.as_str();
        rest.len() == 6 && rest.chars().all(|c| c.is_ascii_hexdigit())
    }
}

/// The "Add new color" row. `on_add` receives the validated hex string;
/// the buffer clears only on a successful submit.
pub(crate) fn color_input(on_add: impl Fn(String) + 'static) -> impl IntoView {
    let text = RwSignal::new(String::new());

    // Keystroke filter: the effect sees every edit and rolls back the ones
    // the buffer rules reject. The returned value is the accepted buffer,
    // handed back as `prev` on the next run.
    create_effect(move |prev: Option<String>| {
        let raw = text.get();
        let kept = sanitize_edit(prev.as_deref().unwrap_or(""), &raw);
        if kept != raw {
            text.set(kept.clone());
        }
        kept
    });

    let on_add = Rc::new(on_add);
    let submit = move || {
        let raw = text.get_untracked();
        if is_complete_hex(&raw) {
            on_add(raw);
            text.set(String::new());
        }
    };
    let submit_on_enter = submit.clone();

    h_stack((
        label(|| "Add new color").style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
        }),
        text_input(text)
            .style(|s| {
                s.width(constants::HEX_INPUT_WIDTH)
                    .padding(2.0)
                    .font_size(constants::INPUT_FONT)
                    .font_family("monospace".to_string())
                    .background(Color::WHITE)
                    .border(1.0)
                    .border_color(Color::rgb8(200, 200, 200))
                    .border_radius(3.0)
            })
            .on_event(floem::event::EventListener::KeyDown, move |e| {
                if let floem::event::Event::KeyDown(ke) = e {
                    if ke.key.logical_key
                        == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
                    {
                        submit_on_enter();
                        return EventPropagation::Stop;
                    }
                }
                EventPropagation::Continue
            }),
        add_button(submit),
    ))
    .style(|s| s.items_center().gap(constants::GAP / 2.0))
}

/// A small Add button in the pressed-container style.
fn add_button(on_press: impl Fn() + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(label(|| "Add").style(move |s| {
        let c = if pressed.get() {
            Color::rgb8(80, 80, 80)
        } else {
            Color::rgb8(120, 120, 120)
        };
        s.font_size(constants::INPUT_FONT).color(c)
    }))
    .style(|s| {
        s.padding_horiz(8.0)
            .padding_vert(3.0)
            .border(1.0)
            .border_color(Color::rgb8(200, 200, 200))
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        on_press();
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_must_start_with_hash() {
        assert_eq!(sanitize_edit("", "a"), "");
        assert_eq!(sanitize_edit("", "#"), "#");
        assert_eq!(sanitize_edit("", "ff"), "");
    }

    #[test]
    fn non_hex_keystrokes_are_dropped() {
        assert_eq!(sanitize_edit("#", "#g"), "#");
        assert_eq!(sanitize_edit("#ff", "#ff "), "#ff");
        assert_eq!(sanitize_edit("#ff", "#ffa"), "#ffa");
        assert_eq!(sanitize_edit("#ff", "#ffA"), "#ffA");
    }

    #[test]
    fn buffer_caps_at_seven_chars() {
        assert_eq!(sanitize_edit("#ffffff", "#ffffff0"), "#ffffff");
    }

    #[test]
    fn deletions_always_pass() {
        assert_eq!(sanitize_edit("#fff", "#ff"), "#ff");
        assert_eq!(sanitize_edit("#", ""), "");
        assert_eq!(sanitize_edit("#zz", "#z"), "#z");
    }

    #[test]
    fn hash_only_buffer_stays_put_on_identical_edit() {
        // Same length, prev non-empty, nothing after the first char.
        assert_eq!(sanitize_edit("#", "#"), "#");
    }

    #[test]
    fn complete_hex_check() {
        assert!(is_complete_hex("#ABCDEF"));
        assert!(is_complete_hex("#abc123"));
        assert!(!is_complete_hex("#ABC"));
        assert!(!is_complete_hex("ABCDEF"));
        assert!(!is_complete_hex("#ABCDEF0"));
        assert!(!is_complete_hex(""));
    }
}
