//! Multi-line text entry helpers for item cards

use wasm_bindgen::JsCast;

/// What a key press inside an item textarea means
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKey {
    Commit,
    Cancel,
    /// Plain typing, including Enter for a new line
    Type,
}

/// Ctrl+Enter (Cmd+Enter on macOS) commits, Escape cancels
pub fn edit_key(key: &str, ctrl_or_meta: bool) -> EditKey {
    match key {
        "Enter" if ctrl_or_meta => EditKey::Commit,
        "Escape" => EditKey::Cancel,
        _ => EditKey::Type,
    }
}

pub fn key_of(ev: &web_sys::KeyboardEvent) -> EditKey {
    edit_key(&ev.key(), ev.ctrl_key() || ev.meta_key())
}

/// Current value of the textarea an event came from, newlines intact
pub fn textarea_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
        .map(|textarea| textarea.value())
        .unwrap_or_default()
}
