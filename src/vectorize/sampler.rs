use anyhow::{Result, bail};
use image::imageops::FilterType;
use image::{Rgba, RgbaImage};

use crate::geometry::PixelPoint;

/// Raster formats accepted by the vectorizer
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "tif", "tiff"];

/// Decoded images above this size on either axis are rejected
pub const MAX_DIMENSION: u32 = 8000;

/// Lowercased final `.`-segment of a file name (the whole name if it has no dot)
pub fn extension(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

/// Validates and decodes a raster file to RGBA.
///
/// Rejections (empty file, unknown extension, undecodable bytes, out-of-range
/// dimensions) carry a stable message, to be embedded as per-item errors.
pub fn decode_raster(name: &str, bytes: &[u8]) -> Result<RgbaImage> {
    if bytes.is_empty() {
        bail!("empty file");
    }
    let ext = extension(name);
    if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        bail!("unsupported format: {ext}");
    }
    let img = match image::load_from_memory(bytes) {
        Ok(img) => img.to_rgba8(),
        Err(_) => bail!("could not decode image"),
    };
    let (w, h) = img.dimensions();
    if w <= 1 || h <= 1 || w > MAX_DIMENSION || h > MAX_DIMENSION {
        bail!("invalid dimensions: {w}x{h}");
    }
    Ok(img)
}

/// Uniformly scales the image down so its longer side equals `max_side`,
/// returning the (possibly untouched) image and the applied scale factor.
pub fn downscale(img: RgbaImage, max_side: u32) -> (RgbaImage, f32) {
    let (w0, h0) = img.dimensions();
    let long_side = u32::max(w0, h0);
    if long_side <= max_side {
        return (img, 1.0);
    }
    let scale = max_side as f32 / long_side as f32;
    let w = u32::max(1, (w0 as f32 * scale) as u32);
    let h = u32::max(1, (h0 as f32 * scale) as u32);
    let scaled = image::imageops::resize(&img, w, h, FilterType::CatmullRom);
    (scaled, scale)
}

/// Samples foreground pixels on an adaptive grid.
///
/// The grid step coarsens with image size, bounding the point count to roughly
/// a 300x300 grid. A pixel is foreground when it is not transparent and either
/// darker than `threshold` or on an edge (luminance jump to its right or
/// bottom neighbor above 12), which captures light-on-light content.
pub fn sample_foreground(img: &RgbaImage, threshold: u8) -> Vec<PixelPoint> {
    let (w, h) = img.dimensions();
    let step = u32::max(1, u32::max(1, u32::max(w, h)) / 300) as usize;

    let mut points = vec![];
    for y in (0..h).step_by(step) {
        for x in (0..w).step_by(step) {
            let p = img.get_pixel(x, y);
            if p[3] <= 10 {
                continue;
            }
            let lum = luminance(p);
            let mut edge = 0.0_f32;
            if x + 1 < w {
                edge = f32::max(edge, (luminance(img.get_pixel(x + 1, y)) - lum).abs());
            }
            if y + 1 < h {
                edge = f32::max(edge, (luminance(img.get_pixel(x, y + 1)) - lum).abs());
            }
            if lum < threshold as f32 || edge > 12.0 {
                points.push(PixelPoint(x as i64, y as i64));
            }
        }
    }
    points
}

fn luminance(p: &Rgba<u8>) -> f32 {
    0.299 * p[0] as f32 + 0.587 * p[1] as f32 + 0.114 * p[2] as f32
}
