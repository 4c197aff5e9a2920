//! Domain Layer
//!
//! Entities and validation rules. No storage or IPC concerns live here.

mod entity;
mod project;
mod settings;

pub use entity::{DomainError, DomainResult, Entity};
pub use project::{Board, BoardList, Project, ProjectInfo, MAX_PROJECT_NAME_LEN};
pub use settings::Settings;
