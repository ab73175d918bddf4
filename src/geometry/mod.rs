pub mod convex_hull;

mod pixel_point;

#[doc(inline)]
pub use pixel_point::PixelPoint;
