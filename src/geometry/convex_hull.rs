use crate::geometry::PixelPoint;

/// Filters a set of points to only include those that are part of the convex hull.
///
/// Monotone chain: <https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain>
///
/// Collinear points are discarded, so the result is a strict convex polygon,
/// ordered counter-clockwise starting from the lexicographically smallest point.
/// Degenerate inputs (&le;1 distinct point) are returned unchanged.
pub fn convex_hull(mut points: Vec<PixelPoint>) -> Vec<PixelPoint> {
    //sort the points lexicographically by (x,y) and drop duplicates
    points.sort();
    points.dedup();

    if points.len() <= 1 {
        return points;
    }

    let mut lower_hull = points
        .iter()
        .fold(vec![], |hull, p| grow_convex_hull(hull, *p));
    let mut upper_hull = points
        .iter()
        .rev()
        .fold(vec![], |hull, p| grow_convex_hull(hull, *p));

    //First and last element of both hull parts are the same point
    lower_hull.pop();
    upper_hull.pop();

    lower_hull.append(&mut upper_hull);
    lower_hull
}

fn grow_convex_hull(mut h: Vec<PixelPoint>, next: PixelPoint) -> Vec<PixelPoint> {
    //pop all points from the hull which will be made irrelevant due to the new point
    while h.len() >= 2 && cross(h[h.len() - 2], h[h.len() - 1], next) <= 0 {
        h.pop();
    }
    h.push(next);
    h
}

fn cross(a: PixelPoint, b: PixelPoint, c: PixelPoint) -> i64 {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}
