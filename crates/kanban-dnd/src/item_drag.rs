//! Item Reorder Controller
//!
//! Same hold-to-arm gesture as lists, at item grain and across lists.
//! The delete zone is a rectangle at the bottom of the viewport; dropping
//! there removes the item straight away.

use crate::board::Board;
use crate::geometry::{item_slot, list_slot, GeometryConfig, LayoutQuery, Point, Rect};
use crate::gesture::{landing_gap, Gap, PointerButton};
use crate::mutation::{move_item, remove_item};
use crate::session::{ArmRequest, ArmTicket, DragSession, DragStore, Slot};

/// Result of releasing the pointer
#[derive(Clone, Debug, PartialEq)]
pub enum ItemDrop {
    /// Released before the hold threshold
    Click { list_index: usize, item_index: usize },
    Moved(Board),
    Deleted(Board),
    Cancelled,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ItemReorder;

impl ItemReorder {
    pub fn pointer_down(
        &self,
        store: &mut DragStore,
        list_index: usize,
        item_index: usize,
        button: PointerButton,
        pointer: Point,
        element: Rect,
    ) -> Option<ArmRequest> {
        if button != PointerButton::Primary {
            return None;
        }
        store.arm(|ticket| DragSession::ArmedItem {
            list_index,
            item_index,
            ticket,
            pointer,
            element,
        })
    }

    /// Hold timer fired. Copies the item into the session as the payload.
    pub fn hold_elapsed(
        &self,
        store: &mut DragStore,
        ticket: ArmTicket,
        board: &Board,
        layout: &impl LayoutQuery,
    ) -> bool {
        let (list_index, item_index, pointer, element) = match store.session() {
            DragSession::ArmedItem {
                list_index,
                item_index,
                ticket: armed,
                pointer,
                element,
            } if *armed == ticket => (*list_index, *item_index, *pointer, *element),
            _ => return false,
        };
        let payload = board
            .lists
            .get(list_index)
            .and_then(|l| l.items.get(item_index))
            .cloned();
        let Some(payload) = payload else {
            store.cancel();
            return false;
        };
        let mut session = DragSession::DraggingItem {
            payload,
            source_list: list_index,
            source_item: item_index,
            pointer_offset: pointer.offset_from(element.top_left()),
            pointer,
            current_slot: Slot::NONE,
            over_delete_zone: false,
        };
        track(&mut session, &store.config, layout, pointer);
        store.replace(session);
        true
    }

    pub fn pointer_move(&self, store: &mut DragStore, pointer: Point, layout: &impl LayoutQuery) {
        let config = store.config;
        match store.session_mut() {
            DragSession::ArmedItem { pointer: p, .. } => *p = pointer,
            session @ DragSession::DraggingItem { .. } => track(session, &config, layout, pointer),
            _ => {}
        }
    }

    /// Release. Consumes an item session; list sessions are left alone.
    pub fn pointer_up(&self, store: &mut DragStore, board: &Board) -> ItemDrop {
        if !matches!(
            store.session(),
            DragSession::ArmedItem { .. } | DragSession::DraggingItem { .. }
        ) {
            return ItemDrop::Cancelled;
        }
        match store.take() {
            DragSession::ArmedItem {
                list_index,
                item_index,
                ..
            } => ItemDrop::Click {
                list_index,
                item_index,
            },
            DragSession::DraggingItem {
                payload,
                source_list,
                source_item,
                current_slot,
                over_delete_zone,
                ..
            } => {
                let live = board
                    .lists
                    .get(source_list)
                    .and_then(|l| l.items.get(source_item))
                    .is_some_and(|item| item.id == payload.id);
                if !live {
                    return ItemDrop::Cancelled;
                }
                let result = if over_delete_zone {
                    remove_item(board, source_list, source_item).map(ItemDrop::Deleted)
                } else {
                    move_item(
                        board,
                        source_list,
                        source_item,
                        current_slot.list_index,
                        current_slot.item_index,
                    )
                    .map(ItemDrop::Moved)
                };
                result.unwrap_or(ItemDrop::Cancelled)
            }
            _ => ItemDrop::Cancelled,
        }
    }

    pub fn cancel(&self, store: &mut DragStore) {
        if matches!(
            store.session(),
            DragSession::ArmedItem { .. } | DragSession::DraggingItem { .. }
        ) {
            store.cancel();
        }
    }

    /// The list the dragged item would land in, after clamping
    pub fn landing_list(&self, session: &DragSession, list_count: usize) -> Option<usize> {
        match session {
            DragSession::DraggingItem {
                current_slot,
                over_delete_zone: false,
                ..
            } if list_count > 0 => Some(current_slot.list_index.clamp(0, list_count as i32 - 1) as usize),
            _ => None,
        }
    }

    /// Placeholder position inside the list at `list_index`, if any
    pub fn gap(
        &self,
        session: &DragSession,
        list_index: usize,
        item_count: usize,
        list_count: usize,
    ) -> Option<Gap> {
        if self.landing_list(session, list_count) != Some(list_index) {
            return None;
        }
        let DragSession::DraggingItem {
            source_list,
            source_item,
            current_slot,
            ..
        } = session
        else {
            return None;
        };
        let source = (*source_list == list_index).then_some(*source_item);
        landing_gap(source, current_slot.item_index.max(0), item_count)
    }
}

fn track(session: &mut DragSession, config: &GeometryConfig, layout: &impl LayoutQuery, at: Point) {
    if let DragSession::DraggingItem {
        pointer,
        current_slot,
        over_delete_zone,
        ..
    } = session
    {
        *pointer = at;
        *over_delete_zone = layout.delete_zone().is_some_and(|zone| zone.contains(at));
        let list_index = list_slot(config, layout, at.x);
        *current_slot = Slot::new(list_index, item_slot(config, layout, list_index, at.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardList, Rgb};
    use crate::geometry::LayoutSnapshot;
    use crate::list_drag::ListReorder;
    use crate::session::EditTarget;

    fn board() -> Board {
        Board::new("B").with_lists(vec![
            BoardList::new("Todo", Rgb::default()).with_items(["A", "B", "C"]),
            BoardList::new("Doing", Rgb::default()),
        ])
    }

    // Columns start at x=250 (after margin), pitch 280.
    // Item rows start at y=100 (after margin), pitch 40.
    fn layout() -> LayoutSnapshot {
        LayoutSnapshot {
            list_origin: Some(260.0),
            column_origins: vec![104.0, 104.0],
            scroll_x: 0.0,
            delete_zone: Some(Rect::new(300.0, 700.0, 400.0, 80.0)),
        }
    }

    fn at(list: i32, item: i32) -> Point {
        Point::new(250.0 + 280.0 * list as f64 + 100.0, 100.0 + 40.0 * item as f64 + 20.0)
    }

    fn start_drag(store: &mut DragStore, b: &Board, list: usize, item: usize) {
        let c = ItemReorder;
        let p = at(list as i32, item as i32);
        let rect = Rect::new(p.x - 100.0, p.y - 15.0, 224.0, 32.0);
        let req = c
            .pointer_down(store, list, item, PointerButton::Primary, p, rect)
            .unwrap();
        assert!(c.hold_elapsed(store, req.ticket, b, &layout()));
    }

    fn drop_at(b: &Board, from: (usize, usize), to: Point) -> ItemDrop {
        let c = ItemReorder;
        let mut store = DragStore::default();
        start_drag(&mut store, b, from.0, from.1);
        c.pointer_move(&mut store, to, &layout());
        let out = c.pointer_up(&mut store, b);
        assert!(store.is_idle());
        out
    }

    #[test]
    fn test_cross_list_into_empty_list() {
        let b = Board::new("B").with_lists(vec![
            BoardList::new("Todo", Rgb::default()).with_items(["A", "B"]),
            BoardList::new("Doing", Rgb::default()),
        ]);
        match drop_at(&b, (0, 0), at(1, 0)) {
            ItemDrop::Moved(next) => {
                assert_eq!(next.lists[0].texts(), vec!["B"]);
                assert_eq!(next.lists[1].texts(), vec!["A"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_same_list_downward_move() {
        match drop_at(&board(), (0, 0), at(0, 2)) {
            ItemDrop::Moved(next) => assert_eq!(next.lists[0].texts(), vec!["B", "C", "A"]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_drop_below_last_appends() {
        match drop_at(&board(), (0, 1), at(0, 12)) {
            ItemDrop::Moved(next) => assert_eq!(next.lists[0].texts(), vec!["A", "C", "B"]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_drop_in_delete_zone_removes_immediately() {
        let b = board();
        match drop_at(&b, (0, 1), Point::new(500.0, 740.0)) {
            ItemDrop::Deleted(next) => {
                assert_eq!(next.lists[0].texts(), vec!["A", "C"]);
                assert_eq!(next.item_count(), b.item_count() - 1);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_underflow_clamps_to_first_slot() {
        match drop_at(&board(), (0, 2), Point::new(10.0, 10.0)) {
            ItemDrop::Moved(next) => assert_eq!(next.lists[0].texts(), vec!["C", "A", "B"]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_release_before_hold_is_click() {
        let c = ItemReorder;
        let b = board();
        let mut store = DragStore::default();
        c.pointer_down(&mut store, 0, 1, PointerButton::Primary, at(0, 1), Rect::default())
            .unwrap();
        assert_eq!(
            c.pointer_up(&mut store, &b),
            ItemDrop::Click { list_index: 0, item_index: 1 }
        );
    }

    #[test]
    fn test_payload_identity_checked_on_drop() {
        let c = ItemReorder;
        let b = board();
        let mut store = DragStore::default();
        start_drag(&mut store, &b, 0, 0);
        assert_eq!(store.session().dragged_item(), Some(b.lists[0].items[0].id));
        // an item was inserted above the source mid-drag: the index is stale
        let shifted = crate::board::add_item(&b, 0, "Z")
            .and_then(|x| crate::mutation::move_item(&x, 0, 3, 0, 0))
            .unwrap();
        c.pointer_move(&mut store, at(1, 0), &layout());
        assert_eq!(c.pointer_up(&mut store, &shifted), ItemDrop::Cancelled);
        assert!(store.is_idle());
    }

    #[test]
    fn test_duplicate_texts_move_the_dragged_one() {
        let b = Board::new("B").with_lists(vec![
            BoardList::new("Todo", Rgb::default()).with_items(["same", "same"]),
            BoardList::new("Doing", Rgb::default()),
        ]);
        let second = b.lists[0].items[1].id;
        match drop_at(&b, (0, 1), at(1, 0)) {
            ItemDrop::Moved(next) => assert_eq!(next.locate_item(second), Some((1, 0))),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_gap_follows_landing_slot() {
        let c = ItemReorder;
        let b = board();
        let mut store = DragStore::default();
        start_drag(&mut store, &b, 0, 0);

        c.pointer_move(&mut store, at(0, 1), &layout());
        // post-removal slot 1 is after B, i.e. before C
        assert_eq!(c.gap(store.session(), 0, 3, 2), Some(Gap::Before(2)));
        assert_eq!(c.gap(store.session(), 1, 0, 2), None);

        c.pointer_move(&mut store, at(1, 4), &layout());
        assert_eq!(c.gap(store.session(), 0, 3, 2), None);
        assert_eq!(c.gap(store.session(), 1, 0, 2), Some(Gap::End));

        // past the last list clamps onto it
        c.pointer_move(&mut store, at(5, 0), &layout());
        assert_eq!(c.landing_list(store.session(), 2), Some(1));

        c.pointer_move(&mut store, Point::new(500.0, 740.0), &layout());
        assert!(store.session().over_delete_zone());
        assert_eq!(c.gap(store.session(), 1, 0, 2), None);
    }

    #[test]
    fn test_list_and_item_sessions_are_exclusive() {
        let b = board();
        let mut store = DragStore::default();
        start_drag(&mut store, &b, 0, 0);
        let list = ListReorder.pointer_down(&mut store, 0, PointerButton::Primary, Point::default(), Rect::default());
        assert!(list.is_none());
        // the list controller must not consume an item session
        assert_eq!(ListReorder.pointer_up(&mut store, &b), crate::list_drag::ListDrop::Cancelled);
        assert!(store.session().is_dragging());
    }

    #[test]
    fn test_editing_blocks_arming() {
        let c = ItemReorder;
        let mut store = DragStore::default();
        store
            .begin_edit(EditTarget::Item { list_index: 0, item_index: 0 })
            .unwrap();
        assert!(c
            .pointer_down(&mut store, 0, 0, PointerButton::Primary, Point::default(), Rect::default())
            .is_none());
    }
}
