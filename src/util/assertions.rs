//Various checks to verify correctness of packing and hull results
//Used in debug_assert!() blocks and tests

use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;

use crate::geometry::PixelPoint;
use crate::packing::{PackResult, Placement};

/// No two placed items on the same sheet overlap
pub fn placements_disjoint(result: &PackResult) -> bool {
    let placed = result.placements.iter().filter(|p| p.placed);
    for (a, b) in placed.tuple_combinations() {
        if a.sheet == b.sheet && rects_overlap(a, b) {
            error!("overlapping placements: {a:?} and {b:?}");
            return false;
        }
    }
    true
}

fn rects_overlap(a: &Placement, b: &Placement) -> bool {
    let (ax, ay) = (a.x.unwrap(), a.y.unwrap());
    let (bx, by) = (b.x.unwrap(), b.y.unwrap());
    ax < bx + b.w && bx < ax + a.w && ay < by + b.h && by < ay + a.h
}

/// Every placed item lies within the sheet, inset by `margin` (with float tolerance)
pub fn placements_within_bounds(
    result: &PackResult,
    sheet_w: f32,
    sheet_h: f32,
    margin: f32,
) -> bool {
    result.placements.iter().filter(|p| p.placed).all(|p| {
        let (x, y) = (p.x.unwrap(), p.y.unwrap());
        let x_ok = x >= margin && lte_approx(x + p.w, sheet_w - margin);
        let y_ok = y >= margin && lte_approx(y + p.h, sheet_h - margin);
        if !(x_ok && y_ok) {
            error!("placement out of bounds: {p:?}");
        }
        x_ok && y_ok
    })
}

fn lte_approx(a: f32, b: f32) -> bool {
    a <= b || approx_eq!(f32, a, b, ulps = 4)
}

/// No placement references a sheet index beyond the recorded sheets
pub fn sheet_references_covered(result: &PackResult) -> bool {
    let n_sheets = result.sheets.len();
    result
        .placements
        .iter()
        .filter_map(|p| p.sheet)
        .all(|idx| idx >= 1 && idx <= n_sheets)
}

/// `point` lies inside or on the convex polygon `hull` (counter-clockwise).
/// Degenerate hulls (a single point or a segment) are handled as such.
pub fn hull_contains_point(hull: &[PixelPoint], point: PixelPoint) -> bool {
    match hull {
        [] => false,
        [p] => *p == point,
        [a, b] => {
            cross(*a, *b, point) == 0
                && point.0 >= a.0.min(b.0)
                && point.0 <= a.0.max(b.0)
                && point.1 >= a.1.min(b.1)
                && point.1 <= a.1.max(b.1)
        }
        _ => hull
            .iter()
            .circular_tuple_windows()
            .all(|(a, b)| cross(*a, *b, point) >= 0),
    }
}

fn cross(a: PixelPoint, b: PixelPoint, c: PixelPoint) -> i64 {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}
