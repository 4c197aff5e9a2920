//! Class and style builders for draggable elements

use kanban_dnd::{ElementMode, Point};

/// `base` plus a modifier for the element's current mode
pub fn mode_class(base: &str, mode: ElementMode) -> String {
    match mode {
        ElementMode::Viewing => base.to_string(),
        ElementMode::Editing => format!("{} editing", base),
        ElementMode::Armed => format!("{} armed", base),
        ElementMode::Dragging => format!("{} dragging", base),
    }
}

/// Inline position for the element following the pointer
pub fn floating_style(origin: Option<Point>) -> String {
    match origin {
        Some(p) => format!("left: {}px; top: {}px;", p.x, p.y),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_class() {
        assert_eq!(mode_class("item-card", ElementMode::Viewing), "item-card");
        assert_eq!(mode_class("item-card", ElementMode::Armed), "item-card armed");
        assert_eq!(mode_class("board-list", ElementMode::Dragging), "board-list dragging");
        assert_eq!(mode_class("board-list", ElementMode::Editing), "board-list editing");
    }

    #[test]
    fn test_floating_style() {
        assert_eq!(floating_style(None), "");
        assert_eq!(
            floating_style(Some(Point::new(12.5, 40.0))),
            "left: 12.5px; top: 40px;"
        );
    }
}
