//! Board Data Model
//!
//! Project → Board → List → Item. Every value here is treated as immutable:
//! edits return a new value and leave the input alone.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::{DndError, NameKind, Result};

/// Longest accepted board or list name
pub const MAX_NAME_LEN: usize = 256;

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

/// Synthetic, process-local item identity. Never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    pub fn fresh() -> Self {
        ItemId(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

/// A card on a list. Persisted as its bare text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Item {
    pub id: ItemId,
    pub text: String,
}

impl Item {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ItemId::fresh(),
            text: text.into(),
        }
    }
}

impl From<String> for Item {
    fn from(text: String) -> Self {
        Item::new(text)
    }
}

impl From<Item> for String {
    fn from(item: Item) -> Self {
        item.text
    }
}

/// 3-byte RGB colour
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0[0], self.0[1], self.0[2])
    }

    /// Parse `#RRGGBB` (leading `#` optional)
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Rgb([byte(0)?, byte(2)?, byte(4)?]))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardList {
    pub title: String,
    pub color: Rgb,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl BoardList {
    pub fn new(title: impl Into<String>, color: Rgb) -> Self {
        Self {
            title: title.into(),
            color,
            items: Vec::new(),
        }
    }

    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Item::new).collect();
        self
    }

    /// Item texts in order
    pub fn texts(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.text.as_str()).collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
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

    pub fn with_lists(mut self, lists: Vec<BoardList>) -> Self {
        self.lists = lists;
        self
    }

    pub fn item_count(&self) -> usize {
        self.lists.iter().map(|l| l.items.len()).sum()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.lists.iter().map(|l| l.title.as_str()).collect()
    }

    /// Find where an item currently lives
    pub fn locate_item(&self, id: ItemId) -> Option<(usize, usize)> {
        self.lists.iter().enumerate().find_map(|(li, list)| {
            list.items
                .iter()
                .position(|item| item.id == id)
                .map(|ii| (li, ii))
        })
    }
}

/// Project as exchanged with the persistence collaborator
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub boards: Vec<Board>,
}

// ========================
// Validated edits
// ========================

fn clean_name<'a, I>(kind: NameKind, name: &str, siblings: I) -> Result<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let name = name.trim();
    if name.is_empty() {
        return Err(DndError::EmptyName { kind });
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(DndError::NameTooLong { kind, max: MAX_NAME_LEN });
    }
    if siblings.into_iter().any(|s| s == name) {
        return Err(DndError::DuplicateName {
            kind,
            name: name.to_string(),
        });
    }
    Ok(name.to_string())
}

fn check_index(what: &'static str, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(DndError::stale(what, index, len))
    }
}

/// Append a new empty list
pub fn add_list(board: &Board, title: &str, color: Rgb) -> Result<Board> {
    let title = clean_name(NameKind::List, title, board.titles())?;
    let mut next = board.clone();
    next.lists.push(BoardList::new(title, color));
    Ok(next)
}

pub fn rename_list(board: &Board, index: usize, title: &str) -> Result<Board> {
    check_index("list", index, board.lists.len())?;
    let siblings = board
        .lists
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, l)| l.title.as_str());
    let title = clean_name(NameKind::List, title, siblings)?;
    let mut next = board.clone();
    next.lists[index].title = title;
    Ok(next)
}

pub fn recolor_list(board: &Board, index: usize, color: Rgb) -> Result<Board> {
    check_index("list", index, board.lists.len())?;
    let mut next = board.clone();
    next.lists[index].color = color;
    Ok(next)
}

/// Append an item to a list. Items may repeat and span several lines.
pub fn add_item(board: &Board, list_index: usize, text: &str) -> Result<Board> {
    check_index("list", list_index, board.lists.len())?;
    if text.trim().is_empty() {
        return Err(DndError::EmptyName { kind: NameKind::Item });
    }
    let mut next = board.clone();
    next.lists[list_index].items.push(Item::new(text));
    Ok(next)
}

/// Replace an item's text, keeping its identity
pub fn edit_item(board: &Board, list_index: usize, item_index: usize, text: &str) -> Result<Board> {
    check_index("list", list_index, board.lists.len())?;
    check_index("item", item_index, board.lists[list_index].items.len())?;
    if text.trim().is_empty() {
        return Err(DndError::EmptyName { kind: NameKind::Item });
    }
    let mut next = board.clone();
    next.lists[list_index].items[item_index].text = text.to_string();
    Ok(next)
}

pub fn add_board(project: &Project, name: &str) -> Result<Project> {
    let siblings = project.boards.iter().map(|b| b.name.as_str());
    let name = clean_name(NameKind::Board, name, siblings)?;
    let mut next = project.clone();
    next.boards.push(Board::new(name));
    Ok(next)
}

pub fn rename_board(project: &Project, index: usize, name: &str) -> Result<Project> {
    check_index("board", index, project.boards.len())?;
    let siblings = project
        .boards
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, b)| b.name.as_str());
    let name = clean_name(NameKind::Board, name, siblings)?;
    let mut next = project.clone();
    next.boards[index].name = name;
    Ok(next)
}

pub fn remove_board(project: &Project, index: usize) -> Result<Project> {
    check_index("board", index, project.boards.len())?;
    let mut next = project.clone();
    next.boards.remove(index);
    Ok(next)
}

/// Swap in an edited board at `index`
pub fn replace_board(project: &Project, index: usize, board: Board) -> Result<Project> {
    check_index("board", index, project.boards.len())?;
    let mut next = project.clone();
    next.boards[index] = board;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new("Sprint").with_lists(vec![
            BoardList::new("Todo", Rgb([1, 2, 3])).with_items(["A", "B"]),
            BoardList::new("Doing", Rgb::default()),
        ])
    }

    #[test]
    fn test_items_serialize_as_strings() {
        let list = BoardList::new("Todo", Rgb([255, 0, 16])).with_items(["A", "line1\nline2"]);
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["items"], serde_json::json!(["A", "line1\nline2"]));
        assert_eq!(json["color"], serde_json::json!([255, 0, 16]));

        let back: BoardList = serde_json::from_value(json).unwrap();
        assert_eq!(back.texts(), vec!["A", "line1\nline2"]);
    }

    #[test]
    fn test_identical_texts_get_distinct_ids() {
        let list = BoardList::new("Todo", Rgb::default()).with_items(["same", "same"]);
        assert_ne!(list.items[0].id, list.items[1].id);
    }

    #[test]
    fn test_rgb_hex() {
        assert_eq!(Rgb([0x93, 0xC5, 0xFD]).to_hex(), "#93C5FD");
        assert_eq!(Rgb::from_hex("#93c5fd"), Some(Rgb([0x93, 0xC5, 0xFD])));
        assert_eq!(Rgb::from_hex("93C5FD"), Some(Rgb([0x93, 0xC5, 0xFD])));
        assert_eq!(Rgb::from_hex("#93C5F"), None);
        assert_eq!(Rgb::from_hex("#GGGGGG"), None);
    }

    #[test]
    fn test_add_list_rejects_duplicate_and_empty() {
        let b = board();
        assert_eq!(
            add_list(&b, " Todo ", Rgb::default()),
            Err(DndError::DuplicateName { kind: NameKind::List, name: "Todo".into() })
        );
        assert_eq!(
            add_list(&b, "   ", Rgb::default()),
            Err(DndError::EmptyName { kind: NameKind::List })
        );
        let next = add_list(&b, "Done", Rgb::default()).unwrap();
        assert_eq!(next.titles(), vec!["Todo", "Doing", "Done"]);
        // input untouched
        assert_eq!(b.titles(), vec!["Todo", "Doing"]);
    }

    #[test]
    fn test_rename_list_to_own_name_is_allowed() {
        let b = board();
        assert!(rename_list(&b, 0, "Todo").is_ok());
        assert!(matches!(
            rename_list(&b, 0, "Doing"),
            Err(DndError::DuplicateName { .. })
        ));
        assert!(matches!(
            rename_list(&b, 5, "X"),
            Err(DndError::StaleCoordinate { .. })
        ));
    }

    #[test]
    fn test_name_too_long() {
        let b = board();
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert_eq!(
            add_list(&b, &long, Rgb::default()),
            Err(DndError::NameTooLong { kind: NameKind::List, max: MAX_NAME_LEN })
        );
    }

    #[test]
    fn test_edit_item_keeps_identity() {
        let b = board();
        let id = b.lists[0].items[1].id;
        let next = edit_item(&b, 0, 1, "B2").unwrap();
        assert_eq!(next.lists[0].items[1].id, id);
        assert_eq!(next.lists[0].texts(), vec!["A", "B2"]);
        assert_eq!(next.locate_item(id), Some((0, 1)));
    }

    #[test]
    fn test_board_names_unique_within_project() {
        let p = Project {
            id: "p".into(),
            name: "P".into(),
            description: "d".into(),
            boards: vec![Board::new("Main")],
        };
        assert!(matches!(add_board(&p, "Main"), Err(DndError::DuplicateName { .. })));
        let p2 = add_board(&p, "Side").unwrap();
        let p3 = rename_board(&p2, 1, "Other").unwrap();
        assert_eq!(p3.boards[1].name, "Other");
        let p4 = remove_board(&p3, 0).unwrap();
        assert_eq!(p4.boards.len(), 1);
    }

    #[test]
    fn test_item_and_board_writes() {
        let b = board();
        let next = add_item(&b, 1, "C").unwrap();
        assert_eq!(next.lists[1].texts(), vec!["C"]);
        assert!(matches!(add_item(&b, 0, "  "), Err(DndError::EmptyName { .. })));

        let red = recolor_list(&next, 1, Rgb([255, 0, 0])).unwrap();
        assert_eq!(red.lists[1].color, Rgb([255, 0, 0]));

        let p = Project {
            id: "p".into(),
            name: "P".into(),
            description: "d".into(),
            boards: vec![b.clone()],
        };
        let p2 = replace_board(&p, 0, red.clone()).unwrap();
        assert_eq!(p2.boards[0], red);
        assert_eq!(p.boards[0], b);
        assert!(matches!(
            replace_board(&p, 1, red),
            Err(DndError::StaleCoordinate { .. })
        ));
    }
}
