//! Board List Column
//!
//! Header (hold to drag the list, double-click to rename, colour picker),
//! the item cards with their placeholder gaps, and an add-item form.

use leptos::prelude::*;
use kanban_dnd::board::{add_item, recolor_list, rename_list};
use kanban_dnd::signals::{make_on_list_mousedown, LIST_CLASS, LIST_ITEMS_CLASS};
use kanban_dnd::{list_mode, Board, BoardList, DndSignals, EditTarget, ElementMode, Gap, ItemReorder, Rgb};

use super::drag_classes::{floating_style, mode_class};
use super::focus::{with_flag, BoardFocus};
use super::list_item::ListItemCard;
use super::text_entry::{key_of, textarea_value, EditKey};
use crate::context::use_app_context;
use crate::models::list_style;

#[component]
pub fn BoardListColumn(
    list_index: usize,
    list: BoardList,
    board: Signal<Board>,
    on_change: Callback<Board>,
) -> impl IntoView {
    let dnd = expect_context::<DndSignals>();
    let ctx = use_app_context();

    let mode = Memo::new(move |_| dnd.store.with(|s| list_mode(s, list_index)));
    let focus = expect_context::<BoardFocus>();
    let class = move || {
        with_flag(
            mode_class(LIST_CLASS, mode.get()),
            "focused",
            focus.list.get() == Some(list_index),
        )
    };
    let color_style = list_style(list.color);
    let style = move || {
        let floating = if mode.get() == ElementMode::Dragging {
            dnd.store.with(|s| floating_style(s.session().floating_origin()))
        } else {
            String::new()
        };
        format!("{}{}", color_style, floating)
    };

    let item_count = list.items.len();
    let item_gap = Memo::new(move |_| {
        let list_count = board.with(|b| b.lists.len());
        dnd.store
            .with(|s| ItemReorder.gap(s.session(), list_index, item_count, list_count))
    });

    // Title editing
    let (title_draft, set_title_draft) = signal(list.title.clone());
    let title = list.title.clone();
    let start_rename = move |_| {
        let target = EditTarget::ListTitle { list_index };
        if dnd.store.try_update(|s| s.begin_edit(target)).is_some_and(|r| r.is_ok()) {
            set_title_draft.set(title.clone());
        }
    };
    let commit_rename = move || {
        if mode.get_untracked() != ElementMode::Editing {
            return;
        }
        dnd.store.update(|s| s.end_edit());
        match rename_list(&board.get_untracked(), list_index, &title_draft.get_untracked()) {
            Ok(next) => on_change.run(next),
            Err(e) => ctx.error(e.to_string()),
        }
    };

    let on_recolor = move |ev: web_sys::Event| {
        let Some(color) = Rgb::from_hex(&event_target_value(&ev)) else {
            return;
        };
        match recolor_list(&board.get_untracked(), list_index, color) {
            Ok(next) => on_change.run(next),
            Err(e) => ctx.error(e.to_string()),
        }
    };

    // New item
    let (new_text, set_new_text) = signal(String::new());
    let add_now = move || {
        let text = new_text.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        match add_item(&board.get_untracked(), list_index, &text) {
            Ok(next) => {
                set_new_text.set(String::new());
                on_change.run(next);
            }
            Err(e) => ctx.error(e.to_string()),
        }
    };
    let on_add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        add_now();
    };

    let hex = list.color.to_hex();
    let header_title = list.title.clone();
    let cards = list
        .items
        .into_iter()
        .enumerate()
        .map(|(item_index, item)| {
            view! {
                <Show when=move || item_gap.get() == Some(Gap::Before(item_index))>
                    <div class="item-gap"></div>
                </Show>
                <ListItemCard
                    list_index=list_index
                    item_index=item_index
                    item=item
                    board=board
                    on_change=on_change
                />
            }
        })
        .collect_view();

    view! {
        <div class=class style=style>
            <div
                class="board-list-header"
                on:mousedown=make_on_list_mousedown(dnd, board, list_index)
                on:dblclick=start_rename
            >
                {move || if mode.get() == ElementMode::Editing {
                    view! {
                        <input
                            class="list-title-edit"
                            type="text"
                            autofocus=true
                            prop:value=move || title_draft.get()
                            on:input=move |ev| set_title_draft.set(event_target_value(&ev))
                            on:blur=move |_| commit_rename()
                            on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                                "Enter" => commit_rename(),
                                "Escape" => dnd.store.update(|s| s.end_edit()),
                                _ => {}
                            }
                        />
                    }.into_any()
                } else {
                    view! { <span class="list-title">{header_title.clone()}</span> }.into_any()
                }}
                <span class="list-count">{item_count}</span>
                <input class="list-color" type="color" prop:value=hex on:change=on_recolor />
            </div>

            <div class=LIST_ITEMS_CLASS>
                {cards}
                <Show when=move || item_gap.get() == Some(Gap::End)>
                    <div class="item-gap"></div>
                </Show>
            </div>

            <form class="add-item-form" on:submit=on_add_item>
                <textarea
                    rows="1"
                    placeholder="Add item... (Ctrl+Enter)"
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(textarea_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if key_of(&ev) == EditKey::Commit {
                            ev.prevent_default();
                            add_now();
                        }
                    }
                ></textarea>
                <button type="submit">"+"</button>
            </form>
        </div>
    }
}
