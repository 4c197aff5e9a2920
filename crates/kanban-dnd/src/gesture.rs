//! Pointer buttons and placeholder gaps shared by both controllers

/// Mouse button as reported by `MouseEvent.button`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(i16),
}

impl PointerButton {
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => PointerButton::Primary,
            1 => PointerButton::Auxiliary,
            2 => PointerButton::Secondary,
            other => PointerButton::Other(other),
        }
    }
}

/// Where a placeholder renders, in terms of the currently rendered
/// (pre-removal) sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gap {
    /// Before the element at this rendered index
    Before(usize),
    /// After the last element
    End,
}

/// Translate a post-removal landing index into a rendered gap.
///
/// `source` is the dragged element's own index when it is rendered in this
/// same sequence; it is skipped so the gap shows where the element lands
/// once it has been taken out.
pub fn landing_gap(source: Option<usize>, target: i32, len: usize) -> Option<Gap> {
    if target < 0 {
        return None;
    }
    let remaining = match source {
        Some(s) if s < len => len - 1,
        _ => len,
    };
    let t = (target as usize).min(remaining);
    if t >= remaining {
        return Some(Gap::End);
    }
    let rendered = match source {
        Some(s) if s < len && t >= s => t + 1,
        _ => t,
    };
    Some(Gap::Before(rendered))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_mapping() {
        assert_eq!(PointerButton::from_dom(0), PointerButton::Primary);
        assert_eq!(PointerButton::from_dom(2), PointerButton::Secondary);
        assert_eq!(PointerButton::from_dom(4), PointerButton::Other(4));
    }

    #[test]
    fn test_gap_without_source() {
        assert_eq!(landing_gap(None, 0, 3), Some(Gap::Before(0)));
        assert_eq!(landing_gap(None, 2, 3), Some(Gap::Before(2)));
        assert_eq!(landing_gap(None, 3, 3), Some(Gap::End));
        assert_eq!(landing_gap(None, 0, 0), Some(Gap::End));
        assert_eq!(landing_gap(None, -1, 3), None);
    }

    #[test]
    fn test_gap_skips_source_to_the_left() {
        // [a b c d], dragging b (1)
        assert_eq!(landing_gap(Some(1), 0, 4), Some(Gap::Before(0)));
        // landing where it was: gap right after its own spot
        assert_eq!(landing_gap(Some(1), 1, 4), Some(Gap::Before(2)));
        // after c: before d
        assert_eq!(landing_gap(Some(1), 2, 4), Some(Gap::Before(3)));
        assert_eq!(landing_gap(Some(1), 3, 4), Some(Gap::End));
        assert_eq!(landing_gap(Some(1), 40, 4), Some(Gap::End));
    }

    #[test]
    fn test_gap_single_element_dragged() {
        assert_eq!(landing_gap(Some(0), 0, 1), Some(Gap::End));
    }
}
