//! Rectangle nesting and raster outline extraction for print-production layout.
//!
//! Two independent, stateless algorithms: a shelf (strip) packer arranging
//! rectangular items onto fixed-size sheets, and a convex-hull vectorizer
//! approximating the outline of a raster image.

/// Geometric primitives and base algorithms
pub mod geometry;

/// Importing requests into and exporting results out of this library
pub mod io;

/// Shelf packing of rectangular items onto fixed-size sheets
pub mod packing;

/// Helper functions which do not belong to any specific module
pub mod util;

/// Raster image sampling and convex-hull outline extraction
pub mod vectorize;
