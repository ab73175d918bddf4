use crate::io::ext_repr::{
    ExtBBox, ExtPackResult, ExtPlacement, ExtSheetStats, ExtVectorizeError, ExtVectorizeOutcome,
    ExtVectorizeResult,
};
use crate::packing::PackResult;
use crate::vectorize::{VectorizeOutcome, VectorizeResult};

/// Exports a pack result out of the library
pub fn export_pack_result(result: &PackResult) -> ExtPackResult {
    ExtPackResult {
        sheets: result
            .sheets
            .iter()
            .map(|s| ExtSheetStats {
                index: s.index,
                w: s.w,
                h: s.h,
            })
            .collect(),
        placements: result
            .placements
            .iter()
            .map(|p| ExtPlacement {
                id: p.id.clone(),
                sheet: p.sheet,
                x: p.x,
                y: p.y,
                w: p.w,
                h: p.h,
                rotated: p.rotated,
                placed: p.placed,
            })
            .collect(),
        utilization: result.utilization,
        total_area: result.total_area,
    }
}

/// Exports a per-image vectorize outcome out of the library
pub fn export_vectorize_outcome(outcome: &VectorizeOutcome) -> ExtVectorizeOutcome {
    match outcome {
        VectorizeOutcome::Success(result) => {
            ExtVectorizeOutcome::Success(export_vectorize_result(result))
        }
        VectorizeOutcome::Failure { name, error } => {
            ExtVectorizeOutcome::Failure(ExtVectorizeError {
                name: name.clone(),
                error: error.clone(),
            })
        }
    }
}

fn export_vectorize_result(result: &VectorizeResult) -> ExtVectorizeResult {
    ExtVectorizeResult {
        name: result.name.clone(),
        format: result.format.clone(),
        svg: result.svg.clone(),
        svg_standalone: result.svg_standalone.clone(),
        data_url: result.data_url.clone(),
        width: result.width,
        height: result.height,
        hull: result.hull.clone(),
        bbox: ExtBBox {
            min_x: result.bbox.min_x,
            min_y: result.bbox.min_y,
            max_x: result.bbox.max_x,
            max_y: result.bbox.max_y,
        },
    }
}
