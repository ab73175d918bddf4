/// Decoding, validation, downscaling and foreground sampling of raster images
pub mod sampler;

mod svg_export;

use anyhow::Result;
use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::geometry::PixelPoint;
use crate::geometry::convex_hull::convex_hull;

/// Configuration for the vectorizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct VectorizeConfig {
    /// Luminance below which a pixel counts as foreground (not near-white)
    pub threshold: u8,
    /// Images with a longer side above this are downscaled before sampling
    pub max_side: u32,
}

impl Default for VectorizeConfig {
    fn default() -> Self {
        Self {
            threshold: 240,
            max_side: 600,
        }
    }
}

/// A raster file as received from the caller: a name (the extension matters) and raw bytes
#[derive(Debug, Clone)]
pub struct RasterFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Axis-aligned bounding box of a hull, in original-image coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

/// Outline approximation of a single raster image
#[derive(Debug, Clone)]
pub struct VectorizeResult {
    pub name: String,
    pub format: String,
    /// SVG containing only the hull polygon outline
    pub svg: String,
    /// Standalone SVG embedding the original image as a data URL
    pub svg_standalone: String,
    /// Lossless PNG re-encoding of the original image as a base64 data URL
    pub data_url: String,
    /// Original pixel width
    pub width: u32,
    /// Original pixel height
    pub height: u32,
    /// Convex hull in original-image coordinates, rounded to 2 decimals
    pub hull: Vec<(f32, f32)>,
    pub bbox: BBox,
}

/// Per-image outcome of a batch: a result or an embedded error, never a batch failure
#[derive(Debug, Clone)]
pub enum VectorizeOutcome {
    Success(VectorizeResult),
    Failure { name: String, error: String },
}

/// Approximates the outline of a raster image by the convex hull of its
/// foreground pixels.
///
/// Foreground pixels are sampled on an adaptive grid using alpha, luminance
/// and edge heuristics. All-background images fall back to the four image
/// corners, so the hull is never empty.
pub fn vectorize_image(file: &RasterFile, config: &VectorizeConfig) -> Result<VectorizeResult> {
    let img = sampler::decode_raster(&file.name, &file.bytes)?;
    let (width, height) = img.dimensions();

    //re-encode the full resolution image before downscaling consumes it
    let data_url = svg_export::png_data_url(&img)?;

    let (scaled, scale) = sampler::downscale(img, config.max_side);
    let mut points: Vec<PixelPoint> = sampler::sample_foreground(&scaled, config.threshold);
    if points.is_empty() {
        //nothing qualified as foreground, use the whole image rectangle
        let (w, h) = scaled.dimensions();
        points = vec![
            (0, 0).into(),
            (w as i64, 0).into(),
            (w as i64, h as i64).into(),
            (0, h as i64).into(),
        ];
        debug!("[TRACE] no foreground pixels in {}, using corner fallback", file.name);
    }

    let hull = convex_hull(points);

    //map the hull back to original-image space
    let inv = 1.0 / scale;
    let hull: Vec<(f32, f32)> = hull
        .iter()
        .map(|p| {
            let (x, y): (i64, i64) = (*p).into();
            (round2(x as f32 * inv), round2(y as f32 * inv))
        })
        .collect();
    let bbox = hull_bbox(&hull, width, height);

    let svg = svg_export::hull_svg(&hull, width, height);
    let svg_standalone = svg_export::standalone_svg(&data_url, width, height);

    let ext = sampler::extension(&file.name);
    debug!(
        "[TRACE] {}: {width}x{height}, scale {scale}, hull of {} vertices",
        file.name,
        hull.len()
    );

    Ok(VectorizeResult {
        name: file.name.clone(),
        format: ext,
        svg,
        svg_standalone,
        data_url,
        width,
        height,
        hull,
        bbox,
    })
}

/// Vectorizes a batch of images; each image is independent and failures are
/// embedded per item, in input order.
pub fn vectorize_batch(files: &[RasterFile], config: &VectorizeConfig) -> Vec<VectorizeOutcome> {
    files
        .par_iter()
        .map(|file| match vectorize_image(file, config) {
            Ok(result) => VectorizeOutcome::Success(result),
            Err(e) => {
                warn!("[TRACE] {} failed: {e}", file.name);
                VectorizeOutcome::Failure {
                    name: file.name.clone(),
                    error: e.to_string(),
                }
            }
        })
        .collect()
}

fn hull_bbox(hull: &[(f32, f32)], width: u32, height: u32) -> BBox {
    let min_x = hull.iter().map(|p| p.0).fold(f32::INFINITY, f32::min);
    let min_y = hull.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
    let max_x = hull.iter().map(|p| p.0).fold(f32::NEG_INFINITY, f32::max);
    let max_y = hull.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);

    if max_x - min_x < 1.0 || max_y - min_y < 1.0 {
        //degenerate hull, fall back to the full image rectangle
        BBox {
            min_x: 0.0,
            min_y: 0.0,
            max_x: width as f32,
            max_y: height as f32,
        }
    } else {
        BBox {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

fn round2(v: f32) -> f32 {
    (v * 1e2).round() / 1e2
}
