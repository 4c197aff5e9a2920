//! UI Components
//!
//! Leptos components for the sidebar and the board.

mod banner;
mod board_list;
mod board_view;
mod delete_popup;
mod delete_zone;
mod drag_classes;
mod focus;
mod list_item;
mod settings_panel;
mod sidebar;
mod text_entry;

pub use banner::Banner;
pub use board_view::BoardView;
pub use sidebar::Sidebar;
