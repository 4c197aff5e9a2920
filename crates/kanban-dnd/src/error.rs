//! Error types for board editing and drag sessions

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, DndError>;

/// What kind of named element an error refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameKind {
    Board,
    List,
    Item,
}

impl std::fmt::Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameKind::Board => write!(f, "board"),
            NameKind::List => write!(f, "list"),
            NameKind::Item => write!(f, "item"),
        }
    }
}

/// Errors surfaced by board edits and session bookkeeping.
///
/// None of these are fatal: the caller keeps the previous board value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DndError {
    /// Name or title is blank after trimming
    #[error("{kind} name must not be empty")]
    EmptyName { kind: NameKind },

    /// Another sibling already carries this name
    #[error("a {kind} named '{name}' already exists")]
    DuplicateName { kind: NameKind, name: String },

    /// Name exceeds the allowed length
    #[error("{kind} name must be at most {max} characters")]
    NameTooLong { kind: NameKind, max: usize },

    /// A coordinate no longer addresses a live element
    #[error("{what} index {index} is out of range (len {len})")]
    StaleCoordinate {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// Another drag or edit is already active
    #[error("another drag or edit is in progress")]
    SessionBusy,
}

impl DndError {
    pub(crate) fn stale(what: &'static str, index: usize, len: usize) -> Self {
        DndError::StaleCoordinate { what, index, len }
    }
}
