//! Point-in-polygon classification (ray casting, even-odd rule).
//!
//! A horizontal scan line is cast from the test point toward increasing
//! longitude; every polygon edge it crosses toggles the `inside` flag.
//!
//! # Edge straddling
//!
//! An edge qualifies only when `(yi > lat) != (yj > lat)`. The comparison is
//! strict on both ends, which makes each edge a half-open interval in
//! latitude. A vertex lying exactly on the scan line therefore belongs to
//! exactly one of its two edges and is counted once. Replacing this with an
//! inclusive comparison double-counts such vertices and flips the result.
//!
//! Latitude is the y axis and longitude the x axis. There is no wraparound
//! handling: polygons crossing the antimeridian or covering a pole are
//! classified as if the coordinates were planar.

use super::types::LatLng;

/// Test whether `(lat, lng)` lies inside the polygon described by `vertices`.
///
/// The ring is implicitly closed (last vertex connects back to the first).
/// Fewer than three vertices never contain anything. Points exactly on an
/// edge may land on either side.
pub fn point_in_polygon(lat: f64, lng: f64, vertices: &[LatLng]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (yi, xi) = (vertices[i].lat, vertices[i].lng);
        let (yj, xj) = (vertices[j].lat, vertices[j].lng);

        if (yi > lat) != (yj > lat) {
            // yi != yj here, so the division is safe.
            let x_cross = (xj - xi) * (lat - yi) / (yj - yi) + xi;
            if lng < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}
