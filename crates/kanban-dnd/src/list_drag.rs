//! List Reorder Controller
//!
//! `Idle → Armed → Dragging → {Reordered | ConfirmDelete | Cancelled} → Idle`.
//! A release before the hold timer fires is a plain click on the list.

use crate::board::Board;
use crate::geometry::{list_slot, LayoutQuery, Point, Rect};
use crate::gesture::{landing_gap, Gap, PointerButton};
use crate::mutation::{move_list, remove_list};
use crate::session::{ArmRequest, ArmTicket, DragSession, DragStore, Slot};

/// Result of releasing the pointer
#[derive(Clone, Debug, PartialEq)]
pub enum ListDrop {
    /// Released before the hold threshold: run the list's click action
    Click { list_index: usize },
    /// New board with the list at its landing slot
    Reordered(Board),
    /// Released over the delete band; ask before removing
    ConfirmDelete(PendingListDelete),
    /// No change
    Cancelled,
}

/// A list deletion awaiting the user's answer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingListDelete {
    pub list_index: usize,
    pub title: String,
}

impl PendingListDelete {
    /// Apply the answer. Declining, or a list that moved meanwhile, keeps the board.
    pub fn resolve(&self, board: &Board, confirmed: bool) -> Board {
        let still_there = board
            .lists
            .get(self.list_index)
            .is_some_and(|l| l.title == self.title);
        if !confirmed || !still_there {
            return board.clone();
        }
        remove_list(board, self.list_index).unwrap_or_else(|_| board.clone())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ListReorder;

impl ListReorder {
    /// Press on a list header. Returns the hold timer to schedule.
    pub fn pointer_down(
        &self,
        store: &mut DragStore,
        list_index: usize,
        button: PointerButton,
        pointer: Point,
        element: Rect,
    ) -> Option<ArmRequest> {
        if button != PointerButton::Primary {
            return None;
        }
        store.arm(|ticket| DragSession::ArmedList {
            list_index,
            ticket,
            pointer,
            element,
        })
    }

    /// Hold timer fired. Starts the drag if the ticket is still current.
    pub fn hold_elapsed(
        &self,
        store: &mut DragStore,
        ticket: ArmTicket,
        board: &Board,
        layout: &impl LayoutQuery,
    ) -> bool {
        let (list_index, pointer, element) = match store.session() {
            DragSession::ArmedList {
                list_index,
                ticket: armed,
                pointer,
                element,
            } if *armed == ticket => (*list_index, *pointer, *element),
            _ => return false,
        };
        let Some(list) = board.lists.get(list_index) else {
            store.cancel();
            return false;
        };
        let mut session = DragSession::DraggingList {
            list_index,
            title: list.title.clone(),
            pointer_offset: pointer.offset_from(element.top_left()),
            pointer,
            current_slot: Slot::NONE,
            over_delete_zone: false,
        };
        track(&mut session, store.config.sidebar_width, |x| {
            list_slot(&store.config, layout, x)
        }, pointer);
        store.replace(session);
        true
    }

    pub fn pointer_move(&self, store: &mut DragStore, pointer: Point, layout: &impl LayoutQuery) {
        let config = store.config;
        match store.session_mut() {
            DragSession::ArmedList { pointer: p, .. } => *p = pointer,
            session @ DragSession::DraggingList { .. } => {
                track(session, config.sidebar_width, |x| list_slot(&config, layout, x), pointer)
            }
            _ => {}
        }
    }

    /// Release. Consumes a list session; item sessions are left alone.
    pub fn pointer_up(&self, store: &mut DragStore, board: &Board) -> ListDrop {
        if !matches!(
            store.session(),
            DragSession::ArmedList { .. } | DragSession::DraggingList { .. }
        ) {
            return ListDrop::Cancelled;
        }
        match store.take() {
            DragSession::ArmedList { list_index, .. } => ListDrop::Click { list_index },
            DragSession::DraggingList {
                list_index,
                title,
                current_slot,
                over_delete_zone,
                ..
            } => {
                let live = board
                    .lists
                    .get(list_index)
                    .is_some_and(|l| l.title == title);
                if !live {
                    return ListDrop::Cancelled;
                }
                if over_delete_zone {
                    return ListDrop::ConfirmDelete(PendingListDelete { list_index, title });
                }
                if current_slot.list_index < 0 {
                    return ListDrop::Cancelled;
                }
                match move_list(board, list_index, current_slot.list_index) {
                    Ok(next) => ListDrop::Reordered(next),
                    Err(_) => ListDrop::Cancelled,
                }
            }
            _ => ListDrop::Cancelled,
        }
    }

    /// Abort a list drag (Escape). Never mutates the board.
    pub fn cancel(&self, store: &mut DragStore) {
        if matches!(
            store.session(),
            DragSession::ArmedList { .. } | DragSession::DraggingList { .. }
        ) {
            store.cancel();
        }
    }

    /// Placeholder position on the rail, if one should render
    pub fn gap(&self, session: &DragSession, list_count: usize) -> Option<Gap> {
        match session {
            DragSession::DraggingList {
                list_index,
                current_slot,
                over_delete_zone: false,
                ..
            } => landing_gap(Some(*list_index), current_slot.list_index, list_count),
            _ => None,
        }
    }
}

fn track(session: &mut DragSession, band: f64, slot_of: impl Fn(f64) -> i32, at: Point) {
    if let DragSession::DraggingList {
        pointer,
        current_slot,
        over_delete_zone,
        ..
    } = session
    {
        *pointer = at;
        *over_delete_zone = at.x < band;
        current_slot.item_index = -1;
        current_slot.list_index = if *over_delete_zone { -1 } else { slot_of(at.x) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardList, Rgb};
    use crate::geometry::{GeometryConfig, LayoutSnapshot};

    const PITCH: f64 = 280.0;

    fn board() -> Board {
        Board::new("B").with_lists(vec![
            BoardList::new("Todo", Rgb::default()),
            BoardList::new("Doing", Rgb::default()),
            BoardList::new("Done", Rgb::default()),
        ])
    }

    fn layout() -> LayoutSnapshot {
        // first list at x=260, margin 10 -> slot boundaries at 250 + k*280
        LayoutSnapshot {
            list_origin: Some(260.0),
            column_origins: vec![120.0; 3],
            ..Default::default()
        }
    }

    /// X in the middle of slot `k`
    fn slot_x(k: i32) -> f64 {
        250.0 + PITCH * k as f64 + PITCH / 2.0
    }

    fn start_drag(store: &mut DragStore, b: &Board, list_index: usize) {
        let c = ListReorder;
        let press = Point::new(slot_x(list_index as i32), 60.0);
        let rect = Rect::new(260.0 + PITCH * list_index as f64, 40.0, 260.0, 500.0);
        let req = c
            .pointer_down(store, list_index, PointerButton::Primary, press, rect)
            .unwrap();
        assert!(c.hold_elapsed(store, req.ticket, b, &layout()));
    }

    #[test]
    fn test_drag_to_slot_two_reorders() {
        let c = ListReorder;
        let b = board();
        let mut store = DragStore::default();
        start_drag(&mut store, &b, 0);
        c.pointer_move(&mut store, Point::new(slot_x(2), 80.0), &layout());
        assert_eq!(store.session().current_slot(), Some(Slot::new(2, -1)));

        match c.pointer_up(&mut store, &b) {
            ListDrop::Reordered(next) => assert_eq!(next.titles(), vec!["Doing", "Done", "Todo"]),
            other => panic!("unexpected {:?}", other),
        }
        assert!(store.is_idle());
    }

    #[test]
    fn test_drop_past_end_appends() {
        let c = ListReorder;
        let b = board();
        let mut store = DragStore::default();
        start_drag(&mut store, &b, 1);
        c.pointer_move(&mut store, Point::new(slot_x(9), 80.0), &layout());
        match c.pointer_up(&mut store, &b) {
            ListDrop::Reordered(next) => assert_eq!(next.titles(), vec!["Todo", "Done", "Doing"]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_release_before_hold_is_click() {
        let c = ListReorder;
        let b = board();
        let mut store = DragStore::default();
        let req = c
            .pointer_down(&mut store, 2, PointerButton::Primary, Point::new(900.0, 60.0), Rect::default())
            .unwrap();
        assert_eq!(c.pointer_up(&mut store, &b), ListDrop::Click { list_index: 2 });
        // the timer fires late and finds nothing to start
        assert!(!c.hold_elapsed(&mut store, req.ticket, &b, &layout()));
        assert!(store.is_idle());
    }

    #[test]
    fn test_secondary_button_never_arms() {
        let c = ListReorder;
        let mut store = DragStore::default();
        let r = c.pointer_down(&mut store, 0, PointerButton::Secondary, Point::default(), Rect::default());
        assert!(r.is_none());
        assert!(store.is_idle());
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let c = ListReorder;
        let b = board();
        let mut store = DragStore::default();
        let old = c
            .pointer_down(&mut store, 0, PointerButton::Primary, Point::default(), Rect::default())
            .unwrap();
        c.pointer_up(&mut store, &b);
        let new = c
            .pointer_down(&mut store, 1, PointerButton::Primary, Point::default(), Rect::default())
            .unwrap();
        assert!(!c.hold_elapsed(&mut store, old.ticket, &b, &layout()));
        assert!(matches!(store.session(), DragSession::ArmedList { list_index: 1, .. }));
        assert!(c.hold_elapsed(&mut store, new.ticket, &b, &layout()));
    }

    #[test]
    fn test_no_second_drag_while_active() {
        let c = ListReorder;
        let b = board();
        let mut store = DragStore::default();
        start_drag(&mut store, &b, 0);
        let again = c.pointer_down(&mut store, 1, PointerButton::Primary, Point::default(), Rect::default());
        assert!(again.is_none());
        assert_eq!(store.session().dragged_list(), Some(0));
    }

    #[test]
    fn test_pointer_offset_keeps_element_under_pointer() {
        let b = board();
        let mut store = DragStore::default();
        start_drag(&mut store, &b, 0);
        let origin = store.session().floating_origin().unwrap();
        assert_eq!(origin, Point::new(260.0, 40.0));
        ListReorder.pointer_move(&mut store, Point::new(slot_x(0) + 30.0, 70.0), &layout());
        assert_eq!(store.session().floating_origin().unwrap(), Point::new(290.0, 50.0));
    }

    #[test]
    fn test_delete_band_hides_placeholder() {
        let c = ListReorder;
        let b = board();
        let mut store = DragStore::default();
        start_drag(&mut store, &b, 1);
        c.pointer_move(&mut store, Point::new(slot_x(0), 80.0), &layout());
        assert_eq!(c.gap(store.session(), 3), Some(Gap::Before(0)));

        c.pointer_move(&mut store, Point::new(100.0, 80.0), &layout());
        assert!(store.session().over_delete_zone());
        assert_eq!(store.session().current_slot(), Some(Slot::new(-1, -1)));
        assert_eq!(c.gap(store.session(), 3), None);

        // leaving the band clears the flag
        c.pointer_move(&mut store, Point::new(slot_x(2), 80.0), &layout());
        assert!(!store.session().over_delete_zone());
        assert_eq!(c.gap(store.session(), 3), Some(Gap::End));
    }

    #[test]
    fn test_delete_confirmed_removes_list() {
        let c = ListReorder;
        let b = board();
        let mut store = DragStore::default();
        start_drag(&mut store, &b, 0);
        c.pointer_move(&mut store, Point::new(40.0, 300.0), &layout());
        let ListDrop::ConfirmDelete(pending) = c.pointer_up(&mut store, &b) else {
            panic!("expected a delete confirmation");
        };
        assert_eq!(pending.title, "Todo");
        assert_eq!(pending.resolve(&b, true).titles(), vec!["Doing", "Done"]);
    }

    #[test]
    fn test_delete_declined_restores_board() {
        let c = ListReorder;
        let b = board();
        let mut store = DragStore::default();
        start_drag(&mut store, &b, 2);
        c.pointer_move(&mut store, Point::new(10.0, 300.0), &layout());
        let ListDrop::ConfirmDelete(pending) = c.pointer_up(&mut store, &b) else {
            panic!("expected a delete confirmation");
        };
        assert_eq!(pending.resolve(&b, false), b);
        assert!(store.is_idle());
    }

    #[test]
    fn test_confirm_after_board_changed_keeps_board() {
        let c = ListReorder;
        let b = board();
        let mut store = DragStore::default();
        start_drag(&mut store, &b, 1);
        c.pointer_move(&mut store, Point::new(40.0, 300.0), &layout());
        let ListDrop::ConfirmDelete(pending) = c.pointer_up(&mut store, &b) else {
            panic!("expected a delete confirmation");
        };
        assert_eq!(pending.title, "Doing");

        // reordered while the prompt was open: "Doing" no longer at index 1
        let reordered = move_list(&b, 0, 2).unwrap();
        assert_eq!(reordered.titles(), vec!["Doing", "Done", "Todo"]);
        assert_eq!(pending.resolve(&reordered, true), reordered);

        // shrunk so that index 1 is gone
        let shrunk = remove_list(&remove_list(&b, 2).unwrap(), 1).unwrap();
        assert_eq!(pending.resolve(&shrunk, true), shrunk);
    }

    #[test]
    fn test_stale_list_cancels() {
        let c = ListReorder;
        let b = board();
        let mut store = DragStore::default();
        start_drag(&mut store, &b, 2);
        c.pointer_move(&mut store, Point::new(slot_x(0), 80.0), &layout());
        // "Done" was removed by another action mid-drag
        let shrunk = remove_list(&b, 2).unwrap();
        assert_eq!(c.pointer_up(&mut store, &shrunk), ListDrop::Cancelled);
        assert!(store.is_idle());
    }

    #[test]
    fn test_left_of_rail_cancels() {
        let c = ListReorder;
        let b = board();
        let mut store = DragStore::new(GeometryConfig {
            sidebar_width: 0.0,
            ..Default::default()
        });
        start_drag(&mut store, &b, 1);
        c.pointer_move(&mut store, Point::new(240.0, 80.0), &layout());
        assert_eq!(store.session().current_slot(), Some(Slot::new(-1, -1)));
        assert_eq!(c.pointer_up(&mut store, &b), ListDrop::Cancelled);
    }

    #[test]
    fn test_escape_cancels_without_mutation() {
        let c = ListReorder;
        let b = board();
        let mut store = DragStore::default();
        start_drag(&mut store, &b, 0);
        c.cancel(&mut store);
        assert!(store.is_idle());
        assert_eq!(c.pointer_up(&mut store, &b), ListDrop::Cancelled);
    }
}
