//! Request/response boundary of the library: external (wire) representations,
//! request normalization and the batch drivers the surrounding service calls.

pub mod export;
pub mod ext_repr;
pub mod import;

use anyhow::{Context, Result};

use crate::io::ext_repr::{ExtPackRequest, ExtPackResponse, ExtVectorizeResponse};
use crate::packing::pack_categories;
use crate::vectorize::{RasterFile, VectorizeConfig, vectorize_batch};

/// Handles a full pack request: normalization, (per-category) packing, export.
///
/// Fails only on invalid sheet dimensions; unplaceable items are data in the
/// response.
pub fn process_pack_request(ext: &ExtPackRequest) -> Result<ExtPackResponse> {
    let job = import::import_pack_request(ext);
    let by_category = job.by_category;
    let results = pack_categories(job.jobs, job.gap, job.margin)?;

    match by_category {
        true => Ok(ExtPackResponse::ByCategory(
            results
                .iter()
                .map(|(cat, res)| (cat.clone(), export::export_pack_result(res)))
                .collect(),
        )),
        false => {
            let result = results.values().next().context("empty pack result")?;
            Ok(ExtPackResponse::Single(export::export_pack_result(result)))
        }
    }
}

/// Handles a full vectorize request; per-image failures are embedded in the
/// response, in input order.
pub fn process_vectorize_request(
    files: &[RasterFile],
    config: &VectorizeConfig,
) -> ExtVectorizeResponse {
    ExtVectorizeResponse {
        results: vectorize_batch(files, config)
            .iter()
            .map(export::export_vectorize_outcome)
            .collect(),
    }
}
