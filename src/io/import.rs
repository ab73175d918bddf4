use std::collections::BTreeMap;

use log::warn;

use crate::io::ext_repr::{ExtPackItem, ExtPackRequest, ExtSheet};
use crate::packing::{CategoryJob, Rect};

/// Default sheet size used when the request does not specify one
pub const DEFAULT_SHEET: ExtSheet = ExtSheet {
    width: 1000.0,
    height: 1000.0,
};

const DEFAULT_CATEGORY: &str = "default";

/// A normalized pack request: items expanded per unit and grouped into
/// per-category jobs, ready for [`pack_categories`](crate::packing::pack_categories)
#[derive(Debug, Clone)]
pub struct PackJob {
    pub jobs: Vec<CategoryJob>,
    pub gap: f32,
    pub margin: f32,
    pub by_category: bool,
}

/// Imports a pack request into the library.
///
/// Normalizes the loose wire format: missing sheet falls back to
/// [`DEFAULT_SHEET`], quantities are expanded to one [`Rect`] per physical
/// unit (ids suffixed `-<i>` when expanded from qty > 1) and items are grouped
/// by category when `byCategory` is set.
pub fn import_pack_request(ext: &ExtPackRequest) -> PackJob {
    let global_sheet = ext.sheet.unwrap_or_else(|| {
        warn!("[IMPORT] no sheet size in request, using {}x{}", DEFAULT_SHEET.width, DEFAULT_SHEET.height);
        DEFAULT_SHEET
    });

    let jobs = match ext.by_category {
        false => vec![CategoryJob {
            category: DEFAULT_CATEGORY.to_string(),
            sheet_w: global_sheet.width,
            sheet_h: global_sheet.height,
            rects: ext.items.iter().flat_map(expand_item).collect(),
        }],
        true => {
            //partition by category, each with its own (possibly overridden) sheet
            let mut by_cat: BTreeMap<String, Vec<Rect>> = BTreeMap::new();
            for item in &ext.items {
                let cat = item.category.clone().unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
                by_cat.entry(cat).or_default().extend(expand_item(item));
            }
            by_cat
                .into_iter()
                .map(|(category, rects)| {
                    let sheet = ext
                        .sheet_by_category
                        .get(&category)
                        .copied()
                        .unwrap_or(global_sheet);
                    CategoryJob {
                        category,
                        sheet_w: sheet.width,
                        sheet_h: sheet.height,
                        rects,
                    }
                })
                .collect()
        }
    };

    PackJob {
        jobs,
        gap: ext.gap,
        margin: ext.margin,
        by_category: ext.by_category,
    }
}

fn expand_item(item: &ExtPackItem) -> Vec<Rect> {
    let id = item.id.as_deref().unwrap_or("item");
    let qty = usize::max(item.qty, 1);
    (0..qty)
        .map(|i| Rect {
            w: item.w,
            h: item.h,
            id: match qty > 1 {
                true => format!("{id}-{i}"),
                false => id.to_string(),
            },
            rotate: item.rotate,
        })
        .collect()
}
