//! Geometry Model
//!
//! Turns continuous pointer coordinates into discrete slot indices.
//! Nothing here touches the DOM: anchors come in through [`LayoutQuery`],
//! which the binding layer fills from `getBoundingClientRect` measurements.

use serde::{Deserialize, Serialize};

/// Reference pitch of one list column (column width plus gap)
pub const LIST_PITCH: f64 = 280.0;
/// Reference pitch of one item row (card height plus gap)
pub const ITEM_PITCH: f64 = 40.0;
/// Width of the sidebar, which doubles as the list delete band
pub const SIDEBAR_WIDTH: f64 = 235.0;
/// Hold duration before a press turns into a drag
pub const HOLD_MS: u32 = 100;

/// A viewport position
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// An axis-aligned rectangle in viewport coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Point-in-rectangle test, edges inclusive
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right() && p.y >= self.top && p.y <= self.bottom()
    }
}

/// Map a coordinate on one axis to a cell index.
///
/// Anything before `axis_origin` is `-1`. The result is not clamped to the
/// container length; callers decide what out-of-range means.
pub fn slot_from_pointer(axis_origin: f64, pointer_coord: f64, pitch: f64) -> i32 {
    if pointer_coord < axis_origin {
        return -1;
    }
    if pitch <= 0.0 {
        return 0;
    }
    let cell = ((pointer_coord - axis_origin) / pitch).floor();
    if cell >= i32::MAX as f64 {
        i32::MAX
    } else {
        cell as i32
    }
}

/// Display-layout constants for slot math
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeometryConfig {
    pub list_pitch: f64,
    pub item_pitch: f64,
    /// Pointer X below this is the list delete band
    pub sidebar_width: f64,
    /// Pulled off the first list's left edge so slot boundaries sit in the gaps
    pub list_margin: f64,
    /// Pulled off the first item's top edge for the same reason
    pub item_margin: f64,
    pub hold_ms: u32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            list_pitch: LIST_PITCH,
            item_pitch: ITEM_PITCH,
            sidebar_width: SIDEBAR_WIDTH,
            list_margin: 10.0,
            item_margin: 4.0,
            hold_ms: HOLD_MS,
        }
    }
}

/// Layout capability the controllers query for anchors.
///
/// Origins are raw element edges; the margins from [`GeometryConfig`] are
/// applied by the slot functions below.
pub trait LayoutQuery {
    /// Left edge of the first rendered list, in content coordinates
    fn list_origin(&self) -> Option<f64>;
    /// Top edge of the item area of the list at `list_index`
    fn column_origin(&self, list_index: usize) -> Option<f64>;
    /// Horizontal scroll offset of the list rail
    fn rail_scroll_x(&self) -> f64;
    /// Bounding box of the item delete zone, if rendered
    fn delete_zone(&self) -> Option<Rect>;
}

/// Plain-data layout, measured by the view or built by hand in tests
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub list_origin: Option<f64>,
    pub column_origins: Vec<f64>,
    pub scroll_x: f64,
    pub delete_zone: Option<Rect>,
}

impl LayoutQuery for LayoutSnapshot {
    fn list_origin(&self) -> Option<f64> {
        self.list_origin
    }

    fn column_origin(&self, list_index: usize) -> Option<f64> {
        self.column_origins.get(list_index).copied()
    }

    fn rail_scroll_x(&self) -> f64 {
        self.scroll_x
    }

    fn delete_zone(&self) -> Option<Rect> {
        self.delete_zone
    }
}

/// List-axis slot for a viewport X, scroll-corrected
pub fn list_slot(config: &GeometryConfig, layout: &impl LayoutQuery, pointer_x: f64) -> i32 {
    match layout.list_origin() {
        Some(origin) => slot_from_pointer(
            origin - config.list_margin,
            pointer_x + layout.rail_scroll_x(),
            config.list_pitch,
        ),
        None => -1,
    }
}

/// Item-axis slot for a viewport Y, anchored on the hovered list's own column.
///
/// A list without a measured column falls back to the first list's anchor.
pub fn item_slot(
    config: &GeometryConfig,
    layout: &impl LayoutQuery,
    list_index: i32,
    pointer_y: f64,
) -> i32 {
    let own = usize::try_from(list_index)
        .ok()
        .and_then(|i| layout.column_origin(i));
    match own.or_else(|| layout.column_origin(0)) {
        Some(origin) => slot_from_pointer(origin - config.item_margin, pointer_y, config.item_pitch),
        None => -1,
    }
}
