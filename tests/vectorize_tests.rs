use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

use shelfnest::geometry::PixelPoint;
use shelfnest::geometry::convex_hull::convex_hull;
use shelfnest::io::process_vectorize_request;
use shelfnest::util::assertions;
use shelfnest::vectorize::{
    RasterFile, VectorizeConfig, VectorizeOutcome, sampler, vectorize_batch, vectorize_image,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn png_bytes(img: &RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

fn raster(name: &str, bytes: Vec<u8>) -> RasterFile {
    RasterFile {
        name: name.to_string(),
        bytes,
    }
}

/// White canvas with a filled dark rectangle
fn dark_rect_image(w: u32, h: u32, x0: u32, y0: u32, x1: u32, y1: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 255]));
    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x, y, Rgba([20, 20, 20, 255]));
        }
    }
    img
}

#[test]
fn hull_contains_every_sampled_point() {
    init_logger();
    let mut img = dark_rect_image(200, 160, 30, 40, 120, 100);
    //some scattered dark spots outside the rectangle
    img.put_pixel(180, 10, Rgba([0, 0, 0, 255]));
    img.put_pixel(5, 150, Rgba([0, 0, 0, 255]));

    let points = sampler::sample_foreground(&img, 240);
    assert!(!points.is_empty());

    let hull = convex_hull(points.clone());
    for p in &points {
        assert!(
            assertions::hull_contains_point(&hull, *p),
            "{p:?} outside hull"
        );
    }
}

#[test]
fn hull_is_idempotent_on_traced_image() {
    let img = dark_rect_image(300, 200, 50, 30, 220, 170);
    let result = vectorize_image(
        &raster("rect.png", png_bytes(&img)),
        &VectorizeConfig::default(),
    )
    .unwrap();

    //scale is 1 here, so hull coordinates are exact grid points
    let as_pixels: Vec<PixelPoint> = result
        .hull
        .iter()
        .map(|&(x, y)| PixelPoint(x as i64, y as i64))
        .collect();
    let rehull = convex_hull(as_pixels.clone());
    assert_eq!(rehull, as_pixels);
}

#[test]
fn transparent_image_falls_back_to_corners() {
    let img = RgbaImage::from_pixel(100, 50, Rgba([0, 0, 0, 0]));
    let result = vectorize_image(
        &raster("ghost.png", png_bytes(&img)),
        &VectorizeConfig::default(),
    )
    .unwrap();

    assert_eq!(
        result.hull,
        vec![(0.0, 0.0), (100.0, 0.0), (100.0, 50.0), (0.0, 50.0)]
    );
    assert_eq!(
        (
            result.bbox.min_x,
            result.bbox.min_y,
            result.bbox.max_x,
            result.bbox.max_y
        ),
        (0.0, 0.0, 100.0, 50.0)
    );
}

#[test]
fn downscaled_hull_maps_back_to_original_space() {
    let img = dark_rect_image(1200, 600, 100, 100, 300, 200);
    let result = vectorize_image(
        &raster("big.png", png_bytes(&img)),
        &VectorizeConfig::default(),
    )
    .unwrap();

    assert_eq!((result.width, result.height), (1200, 600));
    //hull coordinates are inverted back into original-image space
    for &(x, y) in &result.hull {
        assert!((0.0..=1200.0).contains(&x));
        assert!((0.0..=600.0).contains(&y));
    }
    //bounding box tracks the dark rectangle, within sampling tolerance
    assert!((90.0..=110.0).contains(&result.bbox.min_x));
    assert!((90.0..=110.0).contains(&result.bbox.min_y));
    assert!((290.0..=310.0).contains(&result.bbox.max_x));
    assert!((190.0..=210.0).contains(&result.bbox.max_y));
}

#[test]
fn svg_outputs_have_expected_shape() {
    let img = dark_rect_image(80, 60, 10, 10, 70, 50);
    let result = vectorize_image(
        &raster("label.png", png_bytes(&img)),
        &VectorizeConfig::default(),
    )
    .unwrap();

    assert!(result.svg.contains("<polygon"));
    assert!(result.svg.contains(r#"stroke="black""#));
    assert!(result.svg_standalone.contains("<image"));
    assert!(result.svg_standalone.contains("xMidYMid meet"));
    assert!(result.data_url.starts_with("data:image/png;base64,"));
    assert_eq!(result.format, "png");
}

#[test]
fn jpeg_input_reports_its_extension() {
    let mut img = RgbImage::from_pixel(40, 40, Rgb([255, 255, 255]));
    for y in 10..30 {
        for x in 10..30 {
            img.put_pixel(x, y, Rgb([0, 0, 0]));
        }
    }
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Jpeg)
        .unwrap();

    let result = vectorize_image(&raster("photo.jpg", buf), &VectorizeConfig::default()).unwrap();
    assert_eq!(result.format, "jpg");
}

#[test]
fn batch_embeds_partial_failures_in_order() {
    init_logger();
    let good = dark_rect_image(50, 50, 10, 10, 40, 40);
    let files = vec![
        raster("first.png", png_bytes(&good)),
        raster("broken.png", vec![]),
        raster("third.png", png_bytes(&good)),
    ];

    let outcomes = vectorize_batch(&files, &VectorizeConfig::default());
    assert_eq!(outcomes.len(), 3);

    match &outcomes[0] {
        VectorizeOutcome::Success(r) => assert_eq!(r.name, "first.png"),
        VectorizeOutcome::Failure { .. } => panic!("first image should succeed"),
    }
    match &outcomes[1] {
        VectorizeOutcome::Failure { name, error } => {
            assert_eq!(name, "broken.png");
            assert_eq!(error, "empty file");
        }
        VectorizeOutcome::Success(_) => panic!("empty file should fail"),
    }
    match &outcomes[2] {
        VectorizeOutcome::Success(r) => assert_eq!(r.name, "third.png"),
        VectorizeOutcome::Failure { .. } => panic!("third image should succeed"),
    }
}

#[test]
fn unsupported_extension_is_rejected() {
    let img = dark_rect_image(50, 50, 10, 10, 40, 40);
    let err = vectorize_image(
        &raster("scan.bmp", png_bytes(&img)),
        &VectorizeConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "unsupported format: bmp");
}

#[test]
fn degenerate_dimensions_are_rejected() {
    let img = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]));
    let err = vectorize_image(
        &raster("dot.png", png_bytes(&img)),
        &VectorizeConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "invalid dimensions: 1x1");
}

#[test]
fn oversized_dimensions_are_rejected() {
    let img = RgbaImage::from_pixel(8001, 2, Rgba([255, 255, 255, 255]));
    let err = vectorize_image(
        &raster("wall.png", png_bytes(&img)),
        &VectorizeConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "invalid dimensions: 8001x2");
}

#[test]
fn response_serializes_results_and_errors() {
    let good = dark_rect_image(50, 50, 10, 10, 40, 40);
    let files = vec![
        raster("ok.png", png_bytes(&good)),
        raster("bad.png", vec![]),
    ];

    let response = process_vectorize_request(&files, &VectorizeConfig::default());
    let wire = serde_json::to_value(&response).unwrap();

    let results = wire["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert!(results[0].get("svgStandalone").is_some());
    assert!(results[0].get("dataUrl").is_some());
    assert!(results[0].get("error").is_none());
    assert_eq!(results[1]["name"], "bad.png");
    assert_eq!(results[1]["error"], "empty file");
}
