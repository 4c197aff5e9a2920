//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use kanban_dnd::board::replace_board;
use crate::models::{Board, Project, ProjectInfo, Settings};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Sidebar project rows
    pub projects: Vec<ProjectInfo>,
    /// Project currently open, with its boards
    pub project: Option<Project>,
    /// Board shown in the rail
    pub board_index: Option<usize>,
    pub settings: Settings,
    /// Unsaved edits since the last save
    pub dirty: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Board shown in the rail, if a project and board are selected
pub fn current_board(project: Option<&Project>, board_index: Option<usize>) -> Option<Board> {
    project?.boards.get(board_index?).cloned()
}

/// Open a project, selecting its first board
pub fn store_open_project(store: &AppStore, project: Project) {
    store.board_index().set((!project.boards.is_empty()).then_some(0));
    store.project().set(Some(project));
    store.dirty().set(false);
}

/// Swap the open project for an edited copy
pub fn store_replace_project(store: &AppStore, project: Project) {
    let boards = project.boards.len();
    store.project().set(Some(project));
    store.board_index().update(|selected| {
        *selected = match *selected {
            _ if boards == 0 => None,
            Some(i) => Some(i.min(boards - 1)),
            None => Some(0),
        }
    });
    store.dirty().set(true);
}

/// Write an edited board back into the open project
pub fn store_replace_board(store: &AppStore, board: Board) {
    let Some(index) = store.board_index().get_untracked() else {
        return;
    };
    let Some(project) = store.project().get_untracked() else {
        return;
    };
    match replace_board(&project, index, board) {
        Ok(next) => {
            store.project().set(Some(next));
            store.dirty().set(true);
        }
        Err(e) => web_sys::console::log_1(&format!("[APP] board write-back skipped: {}", e).into()),
    }
}

/// Refresh a sidebar row after create or save
pub fn store_upsert_info(store: &AppStore, info: ProjectInfo) {
    let field = store.projects();
    let mut projects = field.write();
    match projects.iter_mut().find(|p| p.id == info.id) {
        Some(existing) => *existing = info,
        None => projects.insert(0, info),
    }
}

pub fn store_remove_project(store: &AppStore, id: &str) {
    store.projects().write().retain(|p| p.id != id);
    let open = store
        .project()
        .with_untracked(|p| p.as_ref().is_some_and(|p| p.id == id));
    if open {
        store.project().set(None);
        store.board_index().set(None);
        store.dirty().set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BoardList, Rgb};

    #[test]
    fn test_current_board() {
        assert_eq!(current_board(None, Some(0)), None);

        let mut board = Board::new("Main");
        board.lists.push(BoardList::new("Todo", Rgb::default()));
        let project = Project {
            id: "p".into(),
            name: "P".into(),
            description: "D".into(),
            boards: vec![board.clone()],
        };
        assert_eq!(current_board(Some(&project), None), None);
        assert_eq!(
            current_board(Some(&project), Some(0)).map(|b| b.name),
            Some("Main".to_string())
        );
        assert_eq!(current_board(Some(&project), Some(3)), None);
    }
}
