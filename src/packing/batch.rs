use std::collections::BTreeMap;

use anyhow::Result;
use log::info;
use rayon::prelude::*;

use crate::packing::{PackResult, Rect, ShelfPacker};

/// The items of one category together with the sheet size to pack them on
#[derive(Debug, Clone)]
pub struct CategoryJob {
    pub category: String,
    pub sheet_w: f32,
    pub sheet_h: f32,
    pub rects: Vec<Rect>,
}

/// Runs an independent [`ShelfPacker`] per category.
///
/// Categories never share sheets, so the jobs are embarrassingly parallel and
/// run through rayon. Fails only on an invalid sheet size.
pub fn pack_categories(
    jobs: Vec<CategoryJob>,
    gap: f32,
    margin: f32,
) -> Result<BTreeMap<String, PackResult>> {
    info!("[PACK] packing {} categories", jobs.len());
    jobs.into_par_iter()
        .map(|job| {
            let packer = ShelfPacker::new(job.sheet_w, job.sheet_h)?;
            Ok((job.category, packer.pack(&job.rects, gap, margin)))
        })
        .collect()
}
