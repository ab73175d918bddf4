use std::cmp::Reverse;

use anyhow::{Result, ensure};
use log::debug;
use ordered_float::OrderedFloat;

use crate::packing::{PackResult, Placement, Rect, SheetStats};
use crate::util::assertions;

/// Packs rectangular items onto fixed-size sheets using a shelf (strip) heuristic.
///
/// Items are laid out left-to-right on horizontal shelves, wrapping to a new shelf
/// when the sheet width runs out and to a new sheet when the height runs out.
/// Greedy and stateless: one instance is bound to a single sheet size and
/// [`ShelfPacker::pack`] is a pure function of its arguments.
#[derive(Debug, Clone, Copy)]
pub struct ShelfPacker {
    pub sheet_w: f32,
    pub sheet_h: f32,
}

struct WorkItem {
    id: String,
    w: f32,
    h: f32,
    rotated: bool,
}

impl ShelfPacker {
    pub fn new(sheet_w: f32, sheet_h: f32) -> Result<Self> {
        ensure!(
            sheet_w > 0.0 && sheet_h > 0.0,
            "invalid sheet size, w: {sheet_w}, h: {sheet_h}"
        );
        Ok(ShelfPacker { sheet_w, sheet_h })
    }

    /// Arranges `rects` onto as many sheets as needed.
    ///
    /// `gap` is the minimum spacing between adjacent items and shelves,
    /// `margin` the inset from every sheet edge. There is no failure path:
    /// items wider than the sheet surface as `placed: false` entries.
    pub fn pack(&self, rects: &[Rect], gap: f32, margin: f32) -> PackResult {
        let (sw, sh) = (self.sheet_w, self.sheet_h);

        let mut items: Vec<WorkItem> = rects
            .iter()
            .map(|r| {
                //lay tall items on their side when that fits the sheet, shelves are horizontal
                let rotated = r.rotate && r.h > r.w && r.h <= sw && r.w <= sh;
                let (w, h) = if rotated { (r.h, r.w) } else { (r.w, r.h) };
                WorkItem {
                    id: r.id.clone(),
                    w,
                    h,
                    rotated,
                }
            })
            .collect();

        //largest footprint first, stable sort preserves expansion order between ties
        items.sort_by_key(|it| Reverse(OrderedFloat(f32::max(it.w, it.h))));

        let mut sheets = vec![];
        let mut placements = Vec::with_capacity(items.len());
        let mut sheet_idx = 1;
        let mut x = margin;
        let mut y = margin;
        let mut shelf_h = 0.0_f32;
        let mut used_area = 0.0;
        let mut total_area = 0.0;

        for it in items {
            total_area += it.w * it.h;
            if it.w > sw {
                //wider than the sheet, even after rotation consideration
                placements.push(Placement {
                    id: it.id,
                    sheet: None,
                    x: None,
                    y: None,
                    w: it.w,
                    h: it.h,
                    rotated: it.rotated,
                    placed: false,
                });
                continue;
            }
            if x + it.w + margin > sw {
                //wrap to a new shelf
                x = margin;
                y += shelf_h + gap;
                shelf_h = 0.0;
            }
            if y + it.h + margin > sh {
                //close the current sheet and open a fresh one
                sheets.push(SheetStats {
                    index: sheet_idx,
                    w: sw,
                    h: sh,
                });
                sheet_idx += 1;
                x = margin;
                y = margin;
                shelf_h = 0.0;
            }
            placements.push(Placement {
                id: it.id,
                sheet: Some(sheet_idx),
                x: Some(x),
                y: Some(y),
                w: it.w,
                h: it.h,
                rotated: it.rotated,
                placed: true,
            });
            used_area += it.w * it.h;
            x += it.w + gap;
            shelf_h = f32::max(shelf_h, it.h);
        }
        //the final sheet is always recorded, even when empty
        sheets.push(SheetStats {
            index: sheet_idx,
            w: sw,
            h: sh,
        });

        let utilization = match sheets.is_empty() {
            true => 0.0,
            false => round4(used_area / (sheets.len() as f32 * sw * sh)),
        };

        debug!(
            "[PACK] {} items on {} sheet(s) of {sw}x{sh}, utilization: {utilization}",
            placements.len(),
            sheets.len()
        );

        let result = PackResult {
            sheets,
            placements,
            utilization,
            total_area,
        };
        debug_assert!(assertions::placements_disjoint(&result));
        result
    }
}

fn round4(v: f32) -> f32 {
    (v * 1e4).round() / 1e4
}
