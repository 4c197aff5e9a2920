//! Leptos bindings
//!
//! Wraps the pure store in signals, schedules hold timers, measures the DOM
//! into a [`LayoutSnapshot`] and routes mouse events to the controllers.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::board::Board;
use crate::geometry::{GeometryConfig, LayoutSnapshot, Point, Rect};
use crate::gesture::PointerButton;
use crate::item_drag::{ItemDrop, ItemReorder};
use crate::list_drag::{ListDrop, ListReorder};
use crate::session::{ArmRequest, DragSession, DragStore};

/// Class of a list column inside the rail
pub const LIST_CLASS: &str = "board-list";
/// Class of the item container inside a list column
pub const LIST_ITEMS_CLASS: &str = "board-list-items";

/// DnD state for one board view
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub store: RwSignal<DragStore>,
    pub layout: RwSignal<LayoutSnapshot>,
    /// Horizontally scrolling container of list columns
    pub rail: NodeRef<html::Div>,
    /// Item delete zone at the bottom of the viewport
    pub delete_zone: NodeRef<html::Div>,
}

/// What a release turned into
#[derive(Clone, Debug, PartialEq)]
pub enum DropOutcome {
    List(ListDrop),
    Item(ItemDrop),
}

pub fn create_dnd_signals(config: GeometryConfig) -> DndSignals {
    DndSignals {
        store: RwSignal::new(DragStore::new(config)),
        layout: RwSignal::new(LayoutSnapshot::default()),
        rail: NodeRef::new(),
        delete_zone: NodeRef::new(),
    }
}

pub fn client_point(ev: &web_sys::MouseEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

pub fn element_rect(el: &web_sys::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Re-sample anchors from the rendered rail
pub fn measure_layout(dnd: &DndSignals) {
    let Some(rail) = dnd.rail.get_untracked() else {
        return;
    };
    let rail: &web_sys::Element = rail.as_ref();
    let scroll_x = rail.scroll_left() as f64;

    let mut snapshot = LayoutSnapshot {
        scroll_x,
        ..Default::default()
    };
    let lists = rail.get_elements_by_class_name(LIST_CLASS);
    for i in 0..lists.length() {
        let Some(list) = lists.item(i) else { continue };
        if i == 0 {
            snapshot.list_origin = Some(element_rect(&list).left + scroll_x);
        }
        let column = list.get_elements_by_class_name(LIST_ITEMS_CLASS).item(0);
        let top = column.map(|c| element_rect(&c).top).unwrap_or(element_rect(&list).top);
        snapshot.column_origins.push(top);
    }
    if let Some(zone) = dnd.delete_zone.get_untracked() {
        let zone: &web_sys::Element = zone.as_ref();
        snapshot.delete_zone = Some(element_rect(zone));
    }
    dnd.layout.set(snapshot);
}

/// Only the scroll offset changed
pub fn update_scroll(dnd: &DndSignals) {
    if let Some(rail) = dnd.rail.get_untracked() {
        let rail: &web_sys::Element = rail.as_ref();
        let x = rail.scroll_left() as f64;
        dnd.layout.update(|l| l.scroll_x = x);
    }
}

/// One-shot deferred callback on the UI thread
pub fn schedule_hold(delay_ms: u32, on_expire: impl FnOnce() + 'static) {
    if let Some(win) = web_sys::window() {
        let cb = wasm_bindgen::closure::Closure::once(on_expire);
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay_ms as i32,
        );
        cb.forget();
    }
}

fn is_control(ev: &web_sys::MouseEvent) -> bool {
    let Some(target) = ev.target() else { return false };
    target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
}

/// CSS selector for a whole list column
pub fn list_selector() -> String {
    format!(".{}", LIST_CLASS)
}

/// Rect of the element that will float. A press on a list header floats the
/// enclosing column, so measure that instead of the header.
fn press_rect(ev: &web_sys::MouseEvent, floating_root: Option<&str>) -> Rect {
    let Some(target) = ev
        .current_target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
    else {
        return Rect::default();
    };
    let root = floating_root
        .and_then(|sel| target.closest(sel).ok().flatten())
        .unwrap_or(target);
    element_rect(&root)
}

fn arm_timer<F>(dnd: DndSignals, board: Signal<Board>, req: ArmRequest, start: F)
where
    F: Fn(&mut DragStore, &Board, &LayoutSnapshot) -> bool + 'static,
{
    schedule_hold(req.delay_ms, move || {
        let Some(board) = board.try_get_untracked() else { return };
        measure_layout(&dnd);
        let layout = dnd.layout.get_untracked();
        dnd.store.try_update(|s| start(s, &board, &layout));
    });
}

/// Mousedown on a list header: arm a list drag
pub fn make_on_list_mousedown(
    dnd: DndSignals,
    board: Signal<Board>,
    list_index: usize,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if is_control(&ev) {
            return;
        }
        let button = PointerButton::from_dom(ev.button());
        let pointer = client_point(&ev);
        let rect = press_rect(&ev, Some(&list_selector()));
        let req = dnd
            .store
            .try_update(|s| ListReorder.pointer_down(s, list_index, button, pointer, rect))
            .flatten();
        if let Some(req) = req {
            ev.prevent_default();
            arm_timer(dnd, board, req, move |s, b, l| ListReorder.hold_elapsed(s, req.ticket, b, l));
        }
    }
}

/// Mousedown on an item card: arm an item drag
pub fn make_on_item_mousedown(
    dnd: DndSignals,
    board: Signal<Board>,
    list_index: usize,
    item_index: usize,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if is_control(&ev) {
            return;
        }
        // keep the list header from arming too
        ev.stop_propagation();
        let button = PointerButton::from_dom(ev.button());
        let pointer = client_point(&ev);
        let rect = press_rect(&ev, None);
        let req = dnd
            .store
            .try_update(|s| ItemReorder.pointer_down(s, list_index, item_index, button, pointer, rect))
            .flatten();
        if let Some(req) = req {
            ev.prevent_default();
            arm_timer(dnd, board, req, move |s, b, l| ItemReorder.hold_elapsed(s, req.ticket, b, l));
        }
    }
}

/// Route a pointer position to whichever controller owns the session
pub fn track_pointer(dnd: &DndSignals, pointer: Point) {
    let layout = dnd.layout.get_untracked();
    dnd.store.update(|s| {
        ListReorder.pointer_move(s, pointer, &layout);
        ItemReorder.pointer_move(s, pointer, &layout);
    });
}

/// Finish whatever session is live against `board`
pub fn release(dnd: &DndSignals, board: &Board) -> Option<DropOutcome> {
    dnd.store
        .try_update(|s| {
            let is_list = match s.session() {
                DragSession::Idle => return None,
                DragSession::ArmedList { .. } | DragSession::DraggingList { .. } => true,
                DragSession::ArmedItem { .. } | DragSession::DraggingItem { .. } => false,
            };
            Some(if is_list {
                DropOutcome::List(ListReorder.pointer_up(s, board))
            } else {
                DropOutcome::Item(ItemReorder.pointer_up(s, board))
            })
        })
        .flatten()
}

/// Capture-overlay mousemove handler
pub fn make_on_capture_mousemove(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        track_pointer(&dnd, client_point(&ev));
    }
}

/// Bind window-level release and Escape handling for the board view.
///
/// Primary-button releases anywhere finish the session: an armed press
/// becomes a click, a drag becomes a drop. Escape cancels without mutation.
pub fn bind_global_release<F>(dnd: DndSignals, board: Signal<Board>, on_outcome: F)
where
    F: Fn(DropOutcome) + Clone + 'static,
{
    let up = window_event_listener(leptos::ev::mouseup, move |ev: web_sys::MouseEvent| {
        if PointerButton::from_dom(ev.button()) != PointerButton::Primary {
            return;
        }
        let Some(current) = board.try_get_untracked() else { return };
        if let Some(outcome) = release(&dnd, &current) {
            on_outcome(outcome);
        }
    });

    let key = window_event_listener(leptos::ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            dnd.store.try_update(|s| {
                ListReorder.cancel(s);
                ItemReorder.cancel(s);
            });
        }
    });

    on_cleanup(move || {
        up.remove();
        key.remove();
    });
}
