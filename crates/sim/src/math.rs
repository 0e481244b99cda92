//! Ground-plane helpers.
//!
//! Actors live on the XZ floor; the Y axis only matters for eye heights
//! and the kill floor. Distances and headings here ignore it.

use glam::Vec3;

/// Distance between two points projected onto the floor.
pub fn flat_distance(a: Vec3, b: Vec3) -> f32 {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    (dx * dx + dz * dz).sqrt()
}

/// Unit direction from `from` to `to` along the floor. `None` when the
/// two points stack vertically.
pub fn flat_direction(from: Vec3, to: Vec3) -> Option<Vec3> {
    let d = Vec3::new(to.x - from.x, 0.0, to.z - from.z);
    let len = d.length();
    if len > f32::EPSILON {
        Some(d / len)
    } else {
        None
    }
}

/// Heading that faces `dir` on the floor, in radians. Zero faces +Z.
pub fn yaw_from_direction(dir: Vec3) -> f32 {
    dir.x.atan2(dir.z)
}

/// Unit floor vector for a heading.
pub fn direction_from_yaw(yaw: f32) -> Vec3 {
    Vec3::new(yaw.sin(), 0.0, yaw.cos())
}
