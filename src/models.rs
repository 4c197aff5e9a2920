//! Frontend Models
//!
//! Board types come from the DnD crate; the rest mirror backend entities.

use serde::{Deserialize, Serialize};

pub use kanban_dnd::{Board, BoardList, Project, Rgb};

/// Sidebar row, as returned by `list_projects`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub updated_at: i64,
}

impl From<&Project> for ProjectInfo {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            description: p.description.clone(),
            updated_at: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub auto_save_interval_secs: u32,
    pub new_list_default_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_save_interval_secs: 300,
            new_list_default_color: "#93C5FD".to_string(),
        }
    }
}

impl Settings {
    /// Colour for a freshly added list; bad input falls back to the default
    pub fn list_color(&self) -> Rgb {
        Rgb::from_hex(&self.new_list_default_color)
            .or_else(|| Rgb::from_hex(&Settings::default().new_list_default_color))
            .unwrap_or_default()
    }
}

/// Inline style for a list column
pub fn list_style(color: Rgb) -> String {
    format!("background-color: {};", color.to_hex())
}
