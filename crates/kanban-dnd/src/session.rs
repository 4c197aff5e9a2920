//! Drag Session State
//!
//! One [`DragStore`] is owned by the open board view and handed by reference
//! to both controllers. It holds at most one session; arming is refused
//! unless the store is idle and no in-place edit is open.

use crate::board::{Item, ItemId};
use crate::error::{DndError, Result};
use crate::geometry::{GeometryConfig, Point, Rect};

/// Discrete insertion position. `-1` on an axis means "before the first"
/// or "off the rail"; values past the end mean "append".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    pub list_index: i32,
    pub item_index: i32,
}

impl Slot {
    pub const NONE: Slot = Slot {
        list_index: -1,
        item_index: -1,
    };

    pub fn new(list_index: i32, item_index: i32) -> Self {
        Self { list_index, item_index }
    }
}

impl Default for Slot {
    fn default() -> Self {
        Slot::NONE
    }
}

/// Token carried by a hold timer; only the matching armed state accepts it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArmTicket(u64);

/// What the view should schedule after a press
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArmRequest {
    pub ticket: ArmTicket,
    pub delay_ms: u32,
}

/// Element that is open for in-place editing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditTarget {
    ListTitle { list_index: usize },
    Item { list_index: usize, item_index: usize },
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    ArmedList {
        list_index: usize,
        ticket: ArmTicket,
        pointer: Point,
        element: Rect,
    },
    DraggingList {
        list_index: usize,
        /// Title at arm time, re-checked on drop
        title: String,
        pointer_offset: Point,
        pointer: Point,
        current_slot: Slot,
        over_delete_zone: bool,
    },
    ArmedItem {
        list_index: usize,
        item_index: usize,
        ticket: ArmTicket,
        pointer: Point,
        element: Rect,
    },
    DraggingItem {
        payload: Item,
        source_list: usize,
        source_item: usize,
        pointer_offset: Point,
        pointer: Point,
        current_slot: Slot,
        over_delete_zone: bool,
    },
}

impl DragSession {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragSession::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(
            self,
            DragSession::DraggingList { .. } | DragSession::DraggingItem { .. }
        )
    }

    pub fn current_slot(&self) -> Option<Slot> {
        match self {
            DragSession::DraggingList { current_slot, .. }
            | DragSession::DraggingItem { current_slot, .. } => Some(*current_slot),
            _ => None,
        }
    }

    pub fn over_delete_zone(&self) -> bool {
        match self {
            DragSession::DraggingList { over_delete_zone, .. }
            | DragSession::DraggingItem { over_delete_zone, .. } => *over_delete_zone,
            _ => false,
        }
    }

    /// Id of the item being dragged, if any
    pub fn dragged_item(&self) -> Option<ItemId> {
        match self {
            DragSession::DraggingItem { payload, .. } => Some(payload.id),
            _ => None,
        }
    }

    /// Source index of the list being dragged, if any
    pub fn dragged_list(&self) -> Option<usize> {
        match self {
            DragSession::DraggingList { list_index, .. } => Some(*list_index),
            _ => None,
        }
    }

    /// Top-left of the floating element, tracking the pointer
    pub fn floating_origin(&self) -> Option<Point> {
        match self {
            DragSession::DraggingList { pointer, pointer_offset, .. }
            | DragSession::DraggingItem { pointer, pointer_offset, .. } => {
                Some(pointer.offset_from(*pointer_offset))
            }
            _ => None,
        }
    }
}

/// Owned drag context for one board view
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragStore {
    session: DragSession,
    next_ticket: u64,
    editing: Option<EditTarget>,
    pub config: GeometryConfig,
}

impl DragStore {
    pub fn new(config: GeometryConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn is_idle(&self) -> bool {
        self.session.is_idle()
    }

    pub fn editing(&self) -> Option<EditTarget> {
        self.editing
    }

    /// Whether a new press may start arming
    pub fn can_arm(&self) -> bool {
        self.session.is_idle() && self.editing.is_none()
    }

    /// Open in-place editing; refused while any session is live
    pub fn begin_edit(&mut self, target: EditTarget) -> Result<()> {
        if !self.session.is_idle() {
            return Err(DndError::SessionBusy);
        }
        self.editing = Some(target);
        Ok(())
    }

    pub fn end_edit(&mut self) {
        self.editing = None;
    }

    /// Drop any session without touching the board
    pub fn cancel(&mut self) {
        self.session = DragSession::Idle;
    }

    /// Consume the session, leaving the store idle
    pub fn take(&mut self) -> DragSession {
        std::mem::take(&mut self.session)
    }

    pub(crate) fn arm(&mut self, build: impl FnOnce(ArmTicket) -> DragSession) -> Option<ArmRequest> {
        if !self.can_arm() {
            return None;
        }
        self.next_ticket += 1;
        let ticket = ArmTicket(self.next_ticket);
        self.session = build(ticket);
        Some(ArmRequest {
            ticket,
            delay_ms: self.config.hold_ms,
        })
    }

    pub(crate) fn replace(&mut self, session: DragSession) {
        self.session = session;
    }

    pub(crate) fn session_mut(&mut self) -> &mut DragSession {
        &mut self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn armed(ticket: ArmTicket) -> DragSession {
        DragSession::ArmedList {
            list_index: 0,
            ticket,
            pointer: Point::default(),
            element: Rect::default(),
        }
    }

    #[test]
    fn test_arm_only_from_idle() {
        let mut store = DragStore::default();
        let first = store.arm(armed).unwrap();
        assert_eq!(first.delay_ms, GeometryConfig::default().hold_ms);
        assert!(store.arm(armed).is_none());
        store.cancel();
        let second = store.arm(armed).unwrap();
        assert_ne!(first.ticket, second.ticket);
    }

    #[test]
    fn test_edit_and_drag_exclude_each_other() {
        let mut store = DragStore::default();
        store.begin_edit(EditTarget::Item { list_index: 0, item_index: 0 }).unwrap();
        assert!(!store.can_arm());
        assert!(store.arm(armed).is_none());
        store.end_edit();

        store.arm(armed).unwrap();
        assert_eq!(
            store.begin_edit(EditTarget::ListTitle { list_index: 0 }),
            Err(DndError::SessionBusy)
        );
        assert_eq!(store.editing(), None);
    }

    #[test]
    fn test_take_resets_to_idle() {
        let mut store = DragStore::default();
        store.arm(armed).unwrap();
        assert!(matches!(store.take(), DragSession::ArmedList { .. }));
        assert!(store.is_idle());
    }

    #[test]
    fn test_floating_origin_tracks_pointer() {
        let session = DragSession::DraggingList {
            list_index: 0,
            title: "Todo".into(),
            pointer_offset: Point::new(5.0, 8.0),
            pointer: Point::new(105.0, 208.0),
            current_slot: Slot::new(0, -1),
            over_delete_zone: false,
        };
        assert_eq!(session.floating_origin(), Some(Point::new(100.0, 200.0)));
        assert_eq!(DragSession::Idle.floating_origin(), None);
    }
}
