//! Project Entity
//!
//! A project owns an ordered list of boards; each board owns ordered lists of
//! plain-text items. Boards are stored as one JSON document per project.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use super::entity::{DomainError, DomainResult, Entity};

pub const MAX_PROJECT_NAME_LEN: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardList {
    pub title: String,
    pub color: [u8; 3],
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub name: String,
    #[serde(default)]
    pub lists: Vec<BoardList>,
}

impl Board {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lists: Vec::new(),
        }
    }

    /// List titles must be non-empty and unique within the board
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidInput("Board name is empty".into()));
        }
        let mut seen = HashSet::new();
        for list in &self.lists {
            if list.title.trim().is_empty() {
                return Err(DomainError::InvalidInput(format!(
                    "Empty list title on board '{}'",
                    self.name
                )));
            }
            if !seen.insert(list.title.as_str()) {
                return Err(DomainError::Conflict(format!(
                    "Duplicate list '{}' on board '{}'",
                    list.title, self.name
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub boards: Vec<Board>,
}

/// Sidebar row: a project without its boards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub updated_at: i64,
}

impl Project {
    /// New project with a fresh v4 id and no boards
    pub fn new(name: &str, description: &str) -> DomainResult<Self> {
        validate_header(name, description)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            boards: Vec::new(),
        })
    }

    pub fn validate(&self) -> DomainResult<()> {
        validate_header(&self.name, &self.description)?;
        let mut seen = HashSet::new();
        for board in &self.boards {
            board.validate()?;
            if !seen.insert(board.name.as_str()) {
                return Err(DomainError::Conflict(format!(
                    "Duplicate board '{}'",
                    board.name
                )));
            }
        }
        Ok(())
    }
}

fn validate_header(name: &str, description: &str) -> DomainResult<()> {
    if name.trim().is_empty() || description.trim().is_empty() {
        return Err(DomainError::InvalidInput(
            "Empty name or description".into(),
        ));
    }
    if name.chars().count() > MAX_PROJECT_NAME_LEN {
        return Err(DomainError::InvalidInput(format!(
            "Name longer than {} characters",
            MAX_PROJECT_NAME_LEN
        )));
    }
    Ok(())
}

impl Entity for Project {
    type Id = Uuid;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(title: &str) -> BoardList {
        BoardList {
            title: title.into(),
            color: [147, 197, 253],
            items: vec!["a".into()],
        }
    }

    #[test]
    fn test_new_project_trims_and_mints_id() {
        let p = Project::new("  Roadmap ", " Q3 ").unwrap();
        assert_eq!(p.name, "Roadmap");
        assert_eq!(p.description, "Q3");
        assert!(p.boards.is_empty());
        assert_ne!(p.id, Project::new("Roadmap", "Q3").unwrap().id);
    }

    #[test]
    fn test_header_validation() {
        assert!(matches!(Project::new("", "d"), Err(DomainError::InvalidInput(_))));
        assert!(matches!(Project::new("n", "   "), Err(DomainError::InvalidInput(_))));
        let long = "x".repeat(MAX_PROJECT_NAME_LEN + 1);
        assert!(matches!(Project::new(&long, "d"), Err(DomainError::InvalidInput(_))));
        assert!(Project::new(&"x".repeat(MAX_PROJECT_NAME_LEN), "d").is_ok());
    }

    #[test]
    fn test_duplicate_list_titles_conflict() {
        let mut board = Board::new("Main");
        board.lists = vec![list("Todo"), list("Todo")];
        assert!(matches!(board.validate(), Err(DomainError::Conflict(_))));
    }

    #[test]
    fn test_duplicate_board_names_conflict() {
        let mut p = Project::new("P", "D").unwrap();
        p.boards = vec![Board::new("Main"), Board::new("Main")];
        assert!(matches!(p.validate(), Err(DomainError::Conflict(_))));
    }

    #[test]
    fn test_json_shape_items_are_strings() {
        let mut board = Board::new("Main");
        board.lists.push(list("Todo"));
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json["lists"][0]["items"][0], "a");
        assert_eq!(json["lists"][0]["color"], serde_json::json!([147, 197, 253]));
    }
}
