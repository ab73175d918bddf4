use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// External representation of a pack request
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtPackRequest {
    /// Global sheet size, 1000x1000 if not specified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet: Option<ExtSheet>,
    #[serde(default)]
    pub items: Vec<ExtPackItem>,
    /// Minimum spacing between adjacent items and shelves
    #[serde(default)]
    pub gap: f32,
    /// Minimum inset from every sheet edge
    #[serde(default)]
    pub margin: f32,
    /// Pack each category onto its own sheets
    #[serde(default)]
    pub by_category: bool,
    /// Per-category sheet size overrides, only used with `byCategory`
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub sheet_by_category: HashMap<String, ExtSheet>,
}

/// External representation of a sheet size
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtSheet {
    pub width: f32,
    pub height: f32,
}

/// External representation of one distinct item, before quantity expansion.
/// `w`/`h` also accept the long-form `width`/`height` field names.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPackItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, alias = "width")]
    pub w: f32,
    #[serde(default, alias = "height")]
    pub h: f32,
    /// Number of physical units of this item
    #[serde(default = "default_qty")]
    pub qty: usize,
    /// Whether a 90 degree rotation is permitted
    #[serde(default = "default_rotate")]
    pub rotate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

fn default_qty() -> usize {
    1
}

fn default_rotate() -> bool {
    true
}

/// External representation of a [`SheetStats`](crate::packing::SheetStats)
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtSheetStats {
    pub index: usize,
    pub w: f32,
    pub h: f32,
}

/// External representation of a [`Placement`](crate::packing::Placement)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacement {
    pub id: String,
    /// 1-based sheet index, `null` when the item could not be placed
    pub sheet: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    pub w: f32,
    pub h: f32,
    pub rotated: bool,
    pub placed: bool,
}

/// External representation of a [`PackResult`](crate::packing::PackResult)
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtPackResult {
    pub sheets: Vec<ExtSheetStats>,
    pub placements: Vec<ExtPlacement>,
    pub utilization: f32,
    pub total_area: f32,
}

/// A single pack result, or one per category when `byCategory` was requested
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum ExtPackResponse {
    Single(ExtPackResult),
    ByCategory(BTreeMap<String, ExtPackResult>),
}

/// External representation of a [`VectorizeResult`](crate::vectorize::VectorizeResult)
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtVectorizeResult {
    pub name: String,
    pub format: String,
    pub svg: String,
    pub svg_standalone: String,
    pub data_url: String,
    pub width: u32,
    pub height: u32,
    pub hull: Vec<(f32, f32)>,
    pub bbox: ExtBBox,
}

/// External representation of a [`BBox`](crate::vectorize::BBox)
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtBBox {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

/// Per-item failure entry of a vectorize batch
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtVectorizeError {
    pub name: String,
    pub error: String,
}

/// One entry of a vectorize response: a result or an embedded error
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum ExtVectorizeOutcome {
    Success(ExtVectorizeResult),
    Failure(ExtVectorizeError),
}

/// External representation of a full vectorize batch response
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtVectorizeResponse {
    pub results: Vec<ExtVectorizeOutcome>,
}
