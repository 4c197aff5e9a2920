//! Board View
//!
//! The horizontal rail of list columns plus everything a drag needs around
//! it: the capture overlay, the item delete zone and the list delete prompt.

use leptos::prelude::*;
use kanban_dnd::board::add_list;
use kanban_dnd::signals::{
    bind_global_release, client_point, make_on_capture_mousemove, measure_layout, track_pointer,
    update_scroll,
};
use kanban_dnd::{
    create_dnd_signals, Board, DropOutcome, Gap, GeometryConfig, ItemDrop, ListDrop, ListReorder,
    PendingListDelete, Rgb,
};

use super::board_list::BoardListColumn;
use super::delete_popup::DeletePopup;
use super::delete_zone::ItemDeleteZone;
use super::focus::BoardFocus;
use crate::app::save_open_project;
use crate::context::use_app_context;
use crate::store::{current_board, store_replace_board, use_app_store, AppStateStoreFields};

fn log_dnd(msg: String) {
    web_sys::console::log_1(&format!("[DND] {}", msg).into());
}

#[component]
pub fn BoardView() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let dnd = create_dnd_signals(GeometryConfig::default());
    provide_context(dnd);
    let focus = BoardFocus::new();
    provide_context(focus);

    let board = Signal::derive(move || {
        let index = store.board_index().get();
        store
            .project()
            .with(|p| current_board(p.as_ref(), index))
            .unwrap_or_default()
    });
    let on_change = Callback::new(move |next: Board| store_replace_board(&store, next));

    let pending = RwSignal::new(None::<PendingListDelete>);

    bind_global_release(dnd, board, move |outcome| match outcome {
        DropOutcome::List(ListDrop::Reordered(next)) => {
            log_dnd(format!("list order now {:?}", next.titles()));
            on_change.run(next);
        }
        DropOutcome::List(ListDrop::ConfirmDelete(p)) => {
            log_dnd(format!("asking to delete list '{}'", p.title));
            pending.set(Some(p));
        }
        DropOutcome::Item(ItemDrop::Moved(next)) => {
            log_dnd("item moved".to_string());
            on_change.run(next);
        }
        DropOutcome::Item(ItemDrop::Deleted(next)) => {
            log_dnd("item deleted".to_string());
            on_change.run(next);
        }
        DropOutcome::List(ListDrop::Click { list_index }) => focus.click_list(list_index),
        DropOutcome::Item(ItemDrop::Click {
            list_index,
            item_index,
        }) => focus.click_item(list_index, item_index),
        DropOutcome::List(ListDrop::Cancelled) | DropOutcome::Item(ItemDrop::Cancelled) => {}
    });

    let on_delete_answer = Callback::new(move |confirmed: bool| {
        let Some(p) = pending.get_untracked() else { return };
        pending.set(None);
        if confirmed {
            on_change.run(p.resolve(&board.get_untracked(), true));
        }
    });
    let delete_message = Signal::derive(move || {
        pending
            .get()
            .map(|p| format!("Delete list '{}' and its items?", p.title))
    });

    // Anchors move whenever the rendered board does
    Effect::new(move |_| {
        board.track();
        focus.clear();
        measure_layout(&dnd);
    });

    let list_gap = Memo::new(move |_| {
        let list_count = board.with(|b| b.lists.len());
        dnd.store.with(|s| ListReorder.gap(s.session(), list_count))
    });
    let is_dragging = move || dnd.store.with(|s| s.session().is_dragging());

    // Pointer movement between press and hold
    let on_armed_move = move |ev: web_sys::MouseEvent| {
        let armed = dnd
            .store
            .with_untracked(|s| !s.is_idle() && !s.session().is_dragging());
        if armed {
            track_pointer(&dnd, client_point(&ev));
        }
    };

    view! {
        <div class="board-view" on:mousemove=on_armed_move>
            <div class="board-header">
                <h2>{move || board.with(|b| b.name.clone())}</h2>
                <span class="board-count">
                    {move || board.with(|b| format!("{} lists, {} items", b.lists.len(), b.item_count()))}
                </span>
                <span class="dirty-mark">{move || if store.dirty().get() { "unsaved" } else { "" }}</span>
                <button class="save-btn" on:click=move |_| save_open_project(store, ctx)>"Save"</button>
            </div>

            <div class="board-rail" node_ref=dnd.rail on:scroll=move |_| update_scroll(&dnd)>
                {move || {
                    board.get().lists.into_iter().enumerate().map(|(list_index, list)| {
                        view! {
                            <Show when=move || list_gap.get() == Some(Gap::Before(list_index))>
                                <div class="list-gap"></div>
                            </Show>
                            <BoardListColumn
                                list_index=list_index
                                list=list
                                board=board
                                on_change=on_change
                            />
                        }
                    }).collect_view()
                }}
                <Show when=move || list_gap.get() == Some(Gap::End)>
                    <div class="list-gap"></div>
                </Show>
                <AddListForm board=board on_change=on_change />
            </div>

            <ItemDeleteZone />

            <Show when=is_dragging>
                <div class="capture-overlay" on:mousemove=make_on_capture_mousemove(dnd)></div>
            </Show>

            <DeletePopup message=delete_message on_answer=on_delete_answer />
        </div>
    }
}

/// Title + colour form at the end of the rail
#[component]
fn AddListForm(board: Signal<Board>, on_change: Callback<Board>) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let (title, set_title) = signal(String::new());
    let color = RwSignal::new(store.settings().with_untracked(|s| s.new_list_default_color.clone()));

    // Reset to the configured default whenever settings change
    Effect::new(move |_| {
        let default = store.settings().with(|s| s.list_color().to_hex());
        color.set(default);
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let rgb = Rgb::from_hex(&color.get_untracked())
            .unwrap_or_else(|| store.settings().with_untracked(|s| s.list_color()));
        match add_list(&board.get_untracked(), &title.get_untracked(), rgb) {
            Ok(next) => {
                set_title.set(String::new());
                on_change.run(next);
            }
            Err(e) => ctx.error(e.to_string()),
        }
    };

    view! {
        <form class="add-list-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="New list..."
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input
                type="color"
                prop:value=move || color.get()
                on:input=move |ev| color.set(event_target_value(&ev))
            />
            <button type="submit">"Add list"</button>
        </form>
    }
}
