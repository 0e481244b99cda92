//! Raycast seam between the simulations and the host engine.
//!
//! The engine owns the real collision scene. The arena only ever asks one
//! question of it: walking a ray from here, which actor do I meet first?
//! `OpenField` answers that question for tests and the headless driver.

use glam::Vec3;

use crate::entities::EntityId;

/// First actor found along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: EntityId,
    pub distance: f32,
}

/// Raycast service provided by the host.
pub trait SpatialQuery {
    /// First actor along `origin + t * direction` with `t <= max_distance`,
    /// skipping `exclude`. `direction` must be normalized.
    fn first_hit(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        exclude: EntityId,
    ) -> Option<RayHit>;
}

#[derive(Debug, Clone, Copy)]
struct Body {
    id: EntityId,
    feet: Vec3,
    radius: f32,
    height: f32,
}

/// Obstacle-free floor where every actor is a vertical cylinder. Rebuild
/// or re-`place` bodies each frame from the game state before ticking.
#[derive(Debug, Clone, Default)]
pub struct OpenField {
    bodies: Vec<Body>,
}

impl OpenField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or move the cylinder tracked for `id`.
    pub fn place(&mut self, id: EntityId, feet: Vec3, radius: f32, height: f32) {
        if let Some(body) = self.bodies.iter_mut().find(|b| b.id == id) {
            body.feet = feet;
            body.radius = radius;
            body.height = height;
        } else {
            self.bodies.push(Body {
                id,
                feet,
                radius,
                height,
            });
        }
    }

    pub fn remove(&mut self, id: EntityId) {
        self.bodies.retain(|b| b.id != id);
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
    }
}

impl SpatialQuery for OpenField {
    fn first_hit(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        exclude: EntityId,
    ) -> Option<RayHit> {
        let mut best: Option<RayHit> = None;
        for body in &self.bodies {
            if body.id == exclude {
                continue;
            }
            if let Some(distance) = ray_cylinder(origin, direction, max_distance, body) {
                if best.is_none_or(|b| distance < b.distance) {
                    best = Some(RayHit {
                        entity: body.id,
                        distance,
                    });
                }
            }
        }
        best
    }
}

/// Ray against the side surface of a vertical cylinder. A ray starting
/// inside reports a hit at distance zero. Caps are not modeled; rays
/// here travel at eye level.
fn ray_cylinder(origin: Vec3, direction: Vec3, max_distance: f32, body: &Body) -> Option<f32> {
    let ox = origin.x - body.feet.x;
    let oz = origin.z - body.feet.z;
    let dx = direction.x;
    let dz = direction.z;

    let a = dx * dx + dz * dz;
    let c = ox * ox + oz * oz - body.radius * body.radius;
    if a < 1e-12 {
        // Vertical ray; only meets the side surface if already inside it.
        if c > 0.0 {
            return None;
        }
        let y = origin.y - body.feet.y;
        return (0.0..=body.height).contains(&y).then_some(0.0);
    }

    let b = 2.0 * (ox * dx + oz * dz);
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }

    let sqrt_disc = disc.sqrt();
    let t_near = (-b - sqrt_disc) / (2.0 * a);
    let t_far = (-b + sqrt_disc) / (2.0 * a);
    if t_far < 0.0 {
        return None;
    }
    let t = if t_near >= 0.0 { t_near } else { 0.0 };
    if t > max_distance {
        return None;
    }

    let y = origin.y + direction.y * t - body.feet.y;
    (0.0..=body.height).contains(&y).then_some(t)
}
