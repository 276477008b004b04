//! Collision detection module
//!
//! Axis-aligned boxes and the ray/box test the voxel raycaster is built on.
//!
//! # Ray-AABB Intersection
//!
//! The slab method is used for ray-AABB intersection, which finds the
//! intersection points by computing entry and exit times for each axis.
//! The entry axis also tells us which face of the box the ray came through.
//!
//! # Example
//!
//! ```ignore
//! use reacharound_engine::physics::collision::{Aabb, ray_aabb_intersect};
//! use glam::DVec3;
//!
//! let origin = DVec3::new(0.5, 3.0, 0.5);
//! let direction = DVec3::new(0.0, -1.0, 0.0);
//!
//! if let Some(hit) = ray_aabb_intersect(origin, direction, &Aabb::UNIT) {
//!     let hit_point = origin + direction * hit.t;
//!     println!("Hit {} face at {:?}", hit.face, hit_point);
//! }
//! ```

use glam::DVec3;

use crate::world::Direction;

/// Axis-aligned bounding box in f64 world (or block-local) units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    /// The full unit cube `[0,1]^3`.
    pub const UNIT: Aabb = Aabb {
        min: DVec3::ZERO,
        max: DVec3::ONE,
    };

    /// Box from block-local pixel coordinates (0..16), the usual way block shapes are authored.
    pub fn from_pixels(min: [f64; 3], max: [f64; 3]) -> Self {
        Self {
            min: DVec3::from_array(min) / 16.0,
            max: DVec3::from_array(max) / 16.0,
        }
    }

    /// The same box moved by `offset`.
    pub fn translated(&self, offset: DVec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

/// Entry point of a ray into a box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayBoxHit {
    /// Ray parameter at entry (`origin + direction * t`)
    pub t: f64,
    /// Face of the box the ray entered through
    pub face: Direction,
}

/// Performs ray-AABB intersection using the slab method.
///
/// `direction` does not need to be normalized; `t` is expressed in units of it.
/// Only entries at `t >= 0` count. A ray starting inside the box reports no
/// hit. This matches block raycasting, where the cell holding the camera is not a target.
pub fn ray_aabb_intersect(origin: DVec3, direction: DVec3, aabb: &Aabb) -> Option<RayBoxHit> {
    let mut t_min = f64::NEG_INFINITY;
    let mut t_max = f64::INFINITY;
    let mut entry_face = Direction::Up;

    let axes = [
        (origin.x, direction.x, aabb.min.x, aabb.max.x, Direction::West, Direction::East),
        (origin.y, direction.y, aabb.min.y, aabb.max.y, Direction::Down, Direction::Up),
        (origin.z, direction.z, aabb.min.z, aabb.max.z, Direction::North, Direction::South),
    ];

    for (o, d, lo, hi, low_face, high_face) in axes {
        if d.abs() < 1e-12 {
            // Parallel to this slab: must already be inside it
            if o < lo || o > hi {
                return None;
            }
            continue;
        }

        let inv = 1.0 / d;
        let (t_near, t_far, face) = if inv > 0.0 {
            ((lo - o) * inv, (hi - o) * inv, low_face)
        } else {
            ((hi - o) * inv, (lo - o) * inv, high_face)
        };

        if t_near > t_min {
            t_min = t_near;
            entry_face = face;
        }
        t_max = t_max.min(t_far);

        if t_max < t_min {
            return None;
        }
    }

    if t_min >= 0.0 && t_min.is_finite() {
        Some(RayBoxHit {
            t: t_min,
            face: entry_face,
        })
    } else {
        None
    }
}
