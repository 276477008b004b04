//! World Query Contract
//!
//! The read-only view of the world the targeting engine needs. Hosts
//! implement [`WorldQuery`] over their own storage; [`super::VoxelWorld`]
//! is the in-crate implementation used by tests and the demo.

use glam::{DVec3, IVec3};
use serde::{Deserialize, Serialize};

use super::block::BlockState;
use super::hit::HitResult;

/// Which block shape a ray is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    /// Shapes entities collide with
    Collider,
    /// Visual selection shapes (plants and other non-colliding blocks count)
    Outline,
}

/// Whether fluids stop a ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FluidHandling {
    None,
    SourceOnly,
    Any,
}

impl FluidHandling {
    pub fn handles(self, state: &BlockState) -> bool {
        match (self, state) {
            (FluidHandling::Any, BlockState::Fluid { .. }) => true,
            (FluidHandling::SourceOnly, BlockState::Fluid { source }) => *source,
            _ => false,
        }
    }
}

/// Opaque id of the entity a ray originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// A segment raycast request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastContext {
    pub start: DVec3,
    pub end: DVec3,
    pub shape: ShapeType,
    pub fluid: FluidHandling,
    /// Entity that should never be reported as hit (normally the caster)
    pub excluded_entity: Option<EntityId>,
}

impl RaycastContext {
    pub fn new(start: DVec3, end: DVec3, shape: ShapeType, fluid: FluidHandling) -> Self {
        Self {
            start,
            end,
            shape,
            fluid,
            excluded_entity: None,
        }
    }

    #[must_use]
    pub fn excluding(mut self, entity: EntityId) -> Self {
        self.excluded_entity = Some(entity);
        self
    }
}

/// Synchronous world lookups, called from the tick thread only.
pub trait WorldQuery {
    /// Cast a segment from `ctx.start` to `ctx.end`.
    ///
    /// Returns the first block face hit, or a miss positioned at `ctx.end`.
    fn raycast(&self, ctx: &RaycastContext) -> HitResult;

    fn block_state(&self, pos: IVec3) -> BlockState;

    /// Whether `pos` lies inside the world border.
    fn is_within_border(&self, _pos: IVec3) -> bool {
        true
    }
}

impl<T: WorldQuery + ?Sized> WorldQuery for &T {
    fn raycast(&self, ctx: &RaycastContext) -> HitResult {
        (**self).raycast(ctx)
    }

    fn block_state(&self, pos: IVec3) -> BlockState {
        (**self).block_state(pos)
    }

    fn is_within_border(&self, pos: IVec3) -> bool {
        (**self).is_within_border(pos)
    }
}
