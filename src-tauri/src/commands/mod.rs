//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod project_cmd;
mod settings_cmd;

pub use project_cmd::*;
pub use settings_cmd::*;
