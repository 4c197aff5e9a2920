//! Per-element interaction mode, derived from the shared store

use crate::session::{DragSession, DragStore, EditTarget};

/// How a list header or item card should currently behave
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ElementMode {
    #[default]
    Viewing,
    Editing,
    Armed,
    Dragging,
}

pub fn list_mode(store: &DragStore, index: usize) -> ElementMode {
    match store.session() {
        DragSession::ArmedList { list_index, .. } if *list_index == index => ElementMode::Armed,
        DragSession::DraggingList { list_index, .. } if *list_index == index => ElementMode::Dragging,
        _ if store.editing() == Some(EditTarget::ListTitle { list_index: index }) => ElementMode::Editing,
        _ => ElementMode::Viewing,
    }
}

pub fn item_mode(store: &DragStore, list: usize, item: usize) -> ElementMode {
    match store.session() {
        DragSession::ArmedItem {
            list_index,
            item_index,
            ..
        } if (*list_index, *item_index) == (list, item) => ElementMode::Armed,
        DragSession::DraggingItem {
            source_list,
            source_item,
            ..
        } if (*source_list, *source_item) == (list, item) => ElementMode::Dragging,
        _ if store.editing()
            == Some(EditTarget::Item {
                list_index: list,
                item_index: item,
            }) =>
        {
            ElementMode::Editing
        }
        _ => ElementMode::Viewing,
    }
}
