mod batch;
mod shelf;

#[doc(inline)]
pub use batch::CategoryJob;
#[doc(inline)]
pub use batch::pack_categories;
#[doc(inline)]
pub use shelf::ShelfPacker;

/// Rectangular item to be placed on a sheet.
/// One `Rect` per physical unit; quantity expansion happens at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub w: f32,
    pub h: f32,
    /// Identifier echoed in the output, need not be unique
    pub id: String,
    /// Whether a 90 degree rotation of this item is permitted
    pub rotate: bool,
}

/// Metadata of one consumed sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetStats {
    /// 1-based sheet index
    pub index: usize,
    pub w: f32,
    pub h: f32,
}

/// Outcome for a single item: where it ended up, or that it did not fit at all
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub id: String,
    /// 1-based index of the sheet the item was placed on, `None` if unplaceable
    pub sheet: Option<usize>,
    /// Top-left x coordinate, only present when placed
    pub x: Option<f32>,
    /// Top-left y coordinate, only present when placed
    pub y: Option<f32>,
    /// Width actually used (after any rotation)
    pub w: f32,
    /// Height actually used (after any rotation)
    pub h: f32,
    /// Whether the working dimensions are the 90 degree rotation of the input
    pub rotated: bool,
    pub placed: bool,
}

/// Result of packing a set of items onto sheets of a single size
#[derive(Debug, Clone, PartialEq)]
pub struct PackResult {
    /// Every sheet consumed, in order. At least one, even if empty.
    pub sheets: Vec<SheetStats>,
    /// One entry per input item, in processing (sorted) order
    pub placements: Vec<Placement>,
    /// Placed area / total consumed sheet area, rounded to 4 decimals
    pub utilization: f32,
    /// Sum of `w*h` over all input items, placed or not
    pub total_area: f32,
}
