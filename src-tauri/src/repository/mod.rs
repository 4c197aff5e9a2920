//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod project_repo;
mod settings_repo;


pub use traits::Repository;
pub use db::{init_db, DbState};
pub use project_repo::ProjectRepository;
pub use settings_repo::{SettingsRepository, SETTINGS_FILE};
