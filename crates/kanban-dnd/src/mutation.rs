//! Board Mutation Layer
//!
//! Pure remove-then-insert transforms over [`Board`] values. Target indices
//! are read against the sequence after the moved element has been taken out.
//! Source coordinates are checked; a bad source comes back as
//! [`DndError::StaleCoordinate`] and the caller keeps its old board.

use crate::board::Board;
use crate::error::{DndError, Result};

fn clamp_index(index: i32, max: usize) -> usize {
    if index <= 0 {
        0
    } else {
        (index as usize).min(max)
    }
}

/// Move the list at `from` so it ends up at `to` in the shortened sequence.
///
/// `to` is clamped into `[0, len - 1]`; anything past the end appends.
pub fn move_list(board: &Board, from: usize, to: i32) -> Result<Board> {
    let len = board.lists.len();
    if from >= len {
        return Err(DndError::stale("list", from, len));
    }
    let mut next = board.clone();
    let list = next.lists.remove(from);
    let to = clamp_index(to, next.lists.len());
    next.lists.insert(to, list);
    Ok(next)
}

/// Move one item, possibly across lists.
///
/// `to_list` is clamped to the existing lists; `to_item` is clamped into the
/// target list after the source item is gone.
pub fn move_item(
    board: &Board,
    from_list: usize,
    from_item: usize,
    to_list: i32,
    to_item: i32,
) -> Result<Board> {
    let lists = board.lists.len();
    if from_list >= lists {
        return Err(DndError::stale("list", from_list, lists));
    }
    let items = board.lists[from_list].items.len();
    if from_item >= items {
        return Err(DndError::stale("item", from_item, items));
    }
    let mut next = board.clone();
    let item = next.lists[from_list].items.remove(from_item);
    let to_list = clamp_index(to_list, lists - 1);
    let target = &mut next.lists[to_list].items;
    let to_item = clamp_index(to_item, target.len());
    target.insert(to_item, item);
    Ok(next)
}

pub fn remove_list(board: &Board, index: usize) -> Result<Board> {
    let len = board.lists.len();
    if index >= len {
        return Err(DndError::stale("list", index, len));
    }
    let mut next = board.clone();
    next.lists.remove(index);
    Ok(next)
}

pub fn remove_item(board: &Board, list_index: usize, item_index: usize) -> Result<Board> {
    let lists = board.lists.len();
    if list_index >= lists {
        return Err(DndError::stale("list", list_index, lists));
    }
    let items = board.lists[list_index].items.len();
    if item_index >= items {
        return Err(DndError::stale("item", item_index, items));
    }
    let mut next = board.clone();
    next.lists[list_index].items.remove(item_index);
    Ok(next)
}
