//! Click selection on the board
//!
//! A press released before the hold threshold is a click: on a list header
//! it focuses that list, on a card it selects the card. Clicking the same
//! element again clears it.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct BoardFocus {
    pub list: RwSignal<Option<usize>>,
    pub item: RwSignal<Option<(usize, usize)>>,
}

impl BoardFocus {
    pub fn new() -> Self {
        Self {
            list: RwSignal::new(None),
            item: RwSignal::new(None),
        }
    }

    pub fn click_list(&self, list_index: usize) {
        self.list.update(|f| *f = toggle(*f, list_index));
        self.item.set(None);
    }

    /// Selecting a card also focuses its list
    pub fn click_item(&self, list_index: usize, item_index: usize) {
        self.item.update(|f| *f = toggle(*f, (list_index, item_index)));
        self.list.set(Some(list_index));
    }

    /// Indices go stale once the board changes shape
    pub fn clear(&self) {
        self.list.set(None);
        self.item.set(None);
    }
}

pub fn toggle<T: PartialEq>(current: Option<T>, clicked: T) -> Option<T> {
    match current {
        Some(c) if c == clicked => None,
        _ => Some(clicked),
    }
}

/// Append a modifier when `on`
pub fn with_flag(class: String, flag: &str, on: bool) -> String {
    if on {
        format!("{} {}", class, flag)
    } else {
        class
    }
}
