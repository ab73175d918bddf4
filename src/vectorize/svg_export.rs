use std::io::Cursor;

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose;
use image::{ImageFormat, RgbaImage};
use itertools::Itertools;
use svg::Document;
use svg::node::element::{Image, Polygon};

/// Losslessly re-encodes the image as PNG and wraps it in a base64 data URL
pub fn png_data_url(img: &RgbaImage) -> Result<String> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .context("could not re-encode image as PNG")?;
    Ok(format!(
        "data:image/png;base64,{}",
        general_purpose::STANDARD.encode(&buf)
    ))
}

/// SVG document containing only the hull polygon outline
pub fn hull_svg(hull: &[(f32, f32)], width: u32, height: u32) -> String {
    let polygon = Polygon::new()
        .set("points", points_attribute(hull))
        .set("fill", "none")
        .set("stroke", "black");
    Document::new()
        .set("width", width)
        .set("height", height)
        .add(polygon)
        .to_string()
}

/// Standalone SVG embedding the original image at full fidelity
pub fn standalone_svg(data_url: &str, width: u32, height: u32) -> String {
    let image = Image::new()
        .set("href", data_url)
        .set("width", width)
        .set("height", height)
        .set("preserveAspectRatio", "xMidYMid meet");
    Document::new()
        .set("width", width)
        .set("height", height)
        .add(image)
        .to_string()
}

fn points_attribute(hull: &[(f32, f32)]) -> String {
    hull.iter().map(|(x, y)| format!("{x},{y}")).join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hull_svg_contains_polygon_points() {
        let svg = hull_svg(&[(0.0, 0.0), (10.0, 0.0), (5.0, 8.5)], 20, 20);
        assert!(svg.contains("<polygon"));
        assert!(svg.contains("0,0 10,0 5,8.5"));
        assert!(svg.contains(r#"fill="none""#));
    }

    #[test]
    fn data_url_has_png_prefix() {
        let img = RgbaImage::from_pixel(4, 4, image::Rgba([10, 20, 30, 255]));
        let url = png_data_url(&img).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
    }
}
