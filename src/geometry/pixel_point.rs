/// Point on the integer sampling grid of a (possibly downscaled) raster image
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PixelPoint(pub i64, pub i64);

impl PixelPoint {
    pub fn x(&self) -> i64 {
        self.0
    }

    pub fn y(&self) -> i64 {
        self.1
    }
}

impl From<PixelPoint> for (i64, i64) {
    fn from(p: PixelPoint) -> Self {
        (p.0, p.1)
    }
}

impl From<(i64, i64)> for PixelPoint {
    fn from(p: (i64, i64)) -> Self {
        PixelPoint(p.0, p.1)
    }
}
