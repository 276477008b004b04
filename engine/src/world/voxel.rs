//! In-Memory Voxel World
//!
//! A sparse block map implementing [`WorldQuery`], used by the tests and the
//! demo binary in place of a host world.
//!
//! Raycasts use DDA 3D voxel traversal ("A Fast Voxel Traversal Algorithm for
//! Ray Tracing", Amanatides & Woo): cells are visited in ray order and each
//! one is tested against its outline/collision box with the slab method, so
//! partial shapes (slabs, fences, grass) report their exact entry point.

use std::collections::HashMap;

use glam::{DVec3, IVec3};

use crate::physics::{Aabb, ray_aabb_intersect};
use super::block::BlockState;
use super::hit::{BlockHitResult, HitResult};
use super::query::{RaycastContext, ShapeType, WorldQuery};

/// Upper bound on cells visited by one raycast.
const MAX_TRAVERSAL_STEPS: usize = 1024;

/// Sparse voxel storage; unset cells are air.
#[derive(Debug, Clone, Default)]
pub struct VoxelWorld {
    blocks: HashMap<IVec3, BlockState>,
    /// Half-width of the square world border around the origin (X/Z), if any
    border_radius: Option<i32>,
}

impl VoxelWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the world to `-radius..radius` on X and Z.
    #[must_use]
    pub fn with_border(mut self, radius: i32) -> Self {
        self.border_radius = Some(radius);
        self
    }

    /// Set a cell; setting air removes it.
    pub fn set_block(&mut self, pos: IVec3, state: BlockState) {
        if state.is_air() {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, state);
        }
    }

    /// Fill the inclusive box `min..=max` with `state`.
    pub fn fill(&mut self, min: IVec3, max: IVec3, state: BlockState) {
        let lo = min.min(max);
        let hi = min.max(max);
        for x in lo.x..=hi.x {
            for y in lo.y..=hi.y {
                for z in lo.z..=hi.z {
                    self.set_block(IVec3::new(x, y, z), state);
                }
            }
        }
    }

    /// Number of non-air cells.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    fn shapes_for(&self, state: &BlockState, ctx: &RaycastContext) -> [Option<Aabb>; 2] {
        let shape = match ctx.shape {
            ShapeType::Outline => state.outline_shape(),
            ShapeType::Collider => state.collision_shape(),
        };
        let fluid = if ctx.fluid.handles(state) {
            state.fluid_shape()
        } else {
            None
        };
        [shape, fluid]
    }

    /// Nearest entry into any targetable box of `cell` along the segment.
    fn hit_in_cell(&self, cell: IVec3, ctx: &RaycastContext, delta: DVec3) -> Option<BlockHitResult> {
        let state = self.block_state(cell);
        if state.is_air() {
            return None;
        }

        let origin = cell.as_dvec3();
        self.shapes_for(&state, ctx)
            .into_iter()
            .flatten()
            .filter_map(|shape| ray_aabb_intersect(ctx.start, delta, &shape.translated(origin)))
            .filter(|hit| hit.t <= 1.0)
            .min_by(|a, b| a.t.total_cmp(&b.t))
            .map(|hit| BlockHitResult::new(ctx.start + delta * hit.t, hit.face, cell))
    }
}

impl WorldQuery for VoxelWorld {
    fn raycast(&self, ctx: &RaycastContext) -> HitResult {
        let delta = ctx.end - ctx.start;
        if delta.length_squared() < 1e-12 {
            return HitResult::miss(ctx.end, delta);
        }

        let mut cell = ctx.start.floor().as_ivec3();
        let end_cell = ctx.end.floor().as_ivec3();

        let step = IVec3::new(
            axis_step(delta.x),
            axis_step(delta.y),
            axis_step(delta.z),
        );

        // Segment parameter needed to cross one cell along each axis
        let t_delta = DVec3::new(
            axis_delta(delta.x),
            axis_delta(delta.y),
            axis_delta(delta.z),
        );

        // Segment parameter of the next cell boundary along each axis
        let mut t_max = DVec3::new(
            first_boundary(ctx.start.x, cell.x, delta.x),
            first_boundary(ctx.start.y, cell.y, delta.y),
            first_boundary(ctx.start.z, cell.z, delta.z),
        );

        let mut reached_end = false;
        for _ in 0..MAX_TRAVERSAL_STEPS {
            if let Some(hit) = self.hit_in_cell(cell, ctx, delta) {
                return hit.into();
            }
            if cell == end_cell || t_max.min_element() > 1.0 {
                reached_end = true;
                break;
            }

            if t_max.x < t_max.y && t_max.x < t_max.z {
                cell.x += step.x;
                t_max.x += t_delta.x;
            } else if t_max.y < t_max.z {
                cell.y += step.y;
                t_max.y += t_delta.y;
            } else {
                cell.z += step.z;
                t_max.z += t_delta.z;
            }
        }

        if !reached_end {
            tracing::trace!(
                start = ?ctx.start,
                end = ?ctx.end,
                stopped_at = ?cell,
                steps = MAX_TRAVERSAL_STEPS,
                "raycast hit the traversal step cap"
            );
        }
        HitResult::miss(ctx.end, delta)
    }

    fn block_state(&self, pos: IVec3) -> BlockState {
        self.blocks.get(&pos).copied().unwrap_or_default()
    }

    fn is_within_border(&self, pos: IVec3) -> bool {
        match self.border_radius {
            Some(radius) => pos.x >= -radius && pos.x < radius && pos.z >= -radius && pos.z < radius,
            None => true,
        }
    }
}

#[inline]
fn axis_step(d: f64) -> i32 {
    if d > 0.0 {
        1
    } else if d < 0.0 {
        -1
    } else {
        0
    }
}

#[inline]
fn axis_delta(d: f64) -> f64 {
    if d.abs() < 1e-12 { f64::INFINITY } else { (1.0 / d).abs() }
}

#[inline]
fn first_boundary(start: f64, cell: i32, d: f64) -> f64 {
    if d > 1e-12 {
        (cell as f64 + 1.0 - start) / d
    } else if d < -1e-12 {
        (start - cell as f64) / -d
    } else {
        f64::INFINITY
    }
}
