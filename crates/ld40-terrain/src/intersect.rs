//! Plane/line intersection.

use glam::Vec3;

/// Point where the infinite line through `line[0]` and `line[1]` meets the
/// infinite plane through the three `plane` points.
///
/// # Preconditions
///
/// The caller MUST guarantee that the plane points are not colinear and
/// that the line is not parallel to the plane. Neither is checked: a
/// degenerate plane has no normal, and a parallel line divides by zero,
/// so the result is meaningless (typically NaN or infinite). Terrain
/// tiles never produce such input because every tile triangle spans a
/// unit square in x/z and every height probe is vertical.
pub fn plane_line_intersection(plane: [Vec3; 3], line: [Vec3; 2]) -> Vec3 {
    // Plane: dot(n, p) = d
    let n = (plane[1] - plane[0])
        .cross(plane[2] - plane[0])
        .normalize();
    let d = n.dot(plane[0]);

    // Line: a + t * b
    let a = line[0];
    let b = line[1] - line[0];

    let t = (n.dot(a) - d) / -n.dot(b);
    a + b * t
}
