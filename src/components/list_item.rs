//! List Item Card
//!
//! One card on a list. Hold to drag, double-click to edit in place
//! (Ctrl+Enter or leaving the field saves, Escape discards).

use leptos::prelude::*;
use kanban_dnd::board::edit_item;
use kanban_dnd::signals::make_on_item_mousedown;
use kanban_dnd::{item_mode, Board, DndSignals, EditTarget, ElementMode, Item};

use super::drag_classes::{floating_style, mode_class};
use super::focus::{with_flag, BoardFocus};
use super::text_entry::{key_of, textarea_value, EditKey};
use crate::context::use_app_context;

#[component]
pub fn ListItemCard(
    list_index: usize,
    item_index: usize,
    item: Item,
    board: Signal<Board>,
    on_change: Callback<Board>,
) -> impl IntoView {
    let dnd = expect_context::<DndSignals>();
    let ctx = use_app_context();

    let mode = Memo::new(move |_| dnd.store.with(|s| item_mode(s, list_index, item_index)));
    let focus = expect_context::<BoardFocus>();
    let class = move || {
        with_flag(
            mode_class("item-card", mode.get()),
            "selected",
            focus.item.get() == Some((list_index, item_index)),
        )
    };
    let style = move || {
        if mode.get() == ElementMode::Dragging {
            dnd.store.with(|s| floating_style(s.session().floating_origin()))
        } else {
            String::new()
        }
    };

    let (draft, set_draft) = signal(item.text.clone());
    let original = item.text.clone();

    let start_edit = move |_| {
        let target = EditTarget::Item { list_index, item_index };
        if dnd.store.try_update(|s| s.begin_edit(target)).is_some_and(|r| r.is_ok()) {
            set_draft.set(original.clone());
        }
    };

    let commit = move || {
        if mode.get_untracked() != ElementMode::Editing {
            return;
        }
        dnd.store.update(|s| s.end_edit());
        match edit_item(&board.get_untracked(), list_index, item_index, &draft.get_untracked()) {
            Ok(next) => on_change.run(next),
            Err(e) => ctx.error(e.to_string()),
        }
    };

    view! {
        <div
            class=class
            style=style
            on:mousedown=make_on_item_mousedown(dnd, board, list_index, item_index)
            on:dblclick=start_edit
        >
            {move || if mode.get() == ElementMode::Editing {
                view! {
                    <textarea
                        class="item-edit"
                        rows="3"
                        autofocus=true
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(textarea_value(&ev))
                        on:blur=move |_| commit()
                        on:keydown=move |ev: web_sys::KeyboardEvent| match key_of(&ev) {
                            EditKey::Commit => {
                                ev.prevent_default();
                                commit();
                            }
                            EditKey::Cancel => dnd.store.update(|s| s.end_edit()),
                            EditKey::Type => {}
                        }
                    ></textarea>
                }.into_any()
            } else {
                view! { <span class="item-text">{item.text.clone()}</span> }.into_any()
            }}
        </div>
    }
}
