//! Item Delete Zone
//!
//! Strip along the bottom of the board. Always laid out so its rectangle can
//! be measured; only visible while an item is being dragged.

use leptos::prelude::*;
use kanban_dnd::{DndSignals, DragSession};

pub fn zone_class(visible: bool, hot: bool) -> &'static str {
    match (visible, hot) {
        (false, _) => "item-delete-zone",
        (true, false) => "item-delete-zone visible",
        (true, true) => "item-delete-zone visible hot",
    }
}

#[component]
pub fn ItemDeleteZone() -> impl IntoView {
    let dnd = expect_context::<DndSignals>();

    let class = move || {
        dnd.store.with(|s| {
            let session = s.session();
            zone_class(
                matches!(session, DragSession::DraggingItem { .. }),
                session.over_delete_zone(),
            )
        })
    };

    view! {
        <div class=class node_ref=dnd.delete_zone>
            "Drop here to delete"
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_class() {
        assert_eq!(zone_class(false, false), "item-delete-zone");
        assert_eq!(zone_class(false, true), "item-delete-zone");
        assert_eq!(zone_class(true, false), "item-delete-zone visible");
        assert_eq!(zone_class(true, true), "item-delete-zone visible hot");
    }
}
