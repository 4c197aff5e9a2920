//! Kanban DnD
//!
//! Pointer-driven reordering of lists and items on a kanban board, built on
//! raw mouse events: hold-to-arm, full-viewport capture, slot geometry,
//! placeholder gaps and delete-by-drag.
//!
//! The core (`geometry`, `session`, `list_drag`, `item_drag`, `mutation`)
//! is plain data and runs anywhere. [`signals`] binds it to Leptos.

pub mod board;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod item_drag;
pub mod list_drag;
pub mod mode;
pub mod mutation;
pub mod session;
pub mod signals;

pub use board::{Board, BoardList, Item, ItemId, Project, Rgb};
pub use error::{DndError, NameKind, Result};
pub use geometry::{GeometryConfig, LayoutQuery, LayoutSnapshot, Point, Rect};
pub use gesture::{Gap, PointerButton};
pub use item_drag::{ItemDrop, ItemReorder};
pub use list_drag::{ListDrop, ListReorder, PendingListDelete};
pub use mode::{item_mode, list_mode, ElementMode};
pub use session::{ArmRequest, ArmTicket, DragSession, DragStore, EditTarget, Slot};
pub use signals::{create_dnd_signals, DndSignals, DropOutcome};
