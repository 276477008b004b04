//! Physics module
//!
//! Geometry shared by the voxel raycaster and the outline consumer.
//! Built from scratch without external physics library dependencies.
//!
//! # Unit System
//!
//! **1 unit = 1 block** (block-local shapes live in `[0,1]^3`)
//!
//! # Submodules
//!
//! - [`collision`] - Axis-aligned boxes and ray-AABB intersection

pub mod collision;

pub use collision::{Aabb, RayBoxHit, ray_aabb_intersect};
