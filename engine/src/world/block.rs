//! Block States
//!
//! The block categories the targeting code distinguishes, with their
//! outline and collision shapes in block-local unit coordinates.

use serde::{Deserialize, Serialize};

use crate::physics::Aabb;

/// Which half of a cell a slab occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlabType {
    Bottom,
    Top,
    /// Both halves, equivalent in shape to a full block
    Double,
}

/// State of a single world cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BlockState {
    #[default]
    Air,
    /// Full opaque cube
    Solid,
    /// Plant-like cover (tall grass): has an outline, no collision, may be overwritten
    Replaceable,
    /// Water-like fluid; `source` marks a still source cell
    Fluid { source: bool },
    Slab(SlabType),
    /// Thin post with a raised collision box
    Fence,
}

impl BlockState {
    #[inline]
    pub fn is_air(&self) -> bool {
        matches!(self, BlockState::Air)
    }

    /// Whether placement may overwrite this cell (air, plant cover and fluids).
    #[inline]
    pub fn is_replaceable(&self) -> bool {
        matches!(
            self,
            BlockState::Air | BlockState::Replaceable | BlockState::Fluid { .. }
        )
    }

    #[inline]
    pub fn is_fluid(&self) -> bool {
        matches!(self, BlockState::Fluid { .. })
    }

    #[inline]
    pub fn is_slab_shaped(&self) -> bool {
        matches!(self, BlockState::Slab(_))
    }

    /// Shape used for targeting and for the selection outline.
    pub fn outline_shape(&self) -> Option<Aabb> {
        match self {
            BlockState::Air | BlockState::Fluid { .. } => None,
            BlockState::Solid | BlockState::Slab(SlabType::Double) => Some(Aabb::UNIT),
            BlockState::Replaceable => Some(Aabb::from_pixels([2.0, 0.0, 2.0], [14.0, 13.0, 14.0])),
            BlockState::Slab(SlabType::Bottom) => Some(Aabb::from_pixels([0.0, 0.0, 0.0], [16.0, 8.0, 16.0])),
            BlockState::Slab(SlabType::Top) => Some(Aabb::from_pixels([0.0, 8.0, 0.0], [16.0, 16.0, 16.0])),
            BlockState::Fence => Some(Aabb::from_pixels([6.0, 0.0, 6.0], [10.0, 16.0, 10.0])),
        }
    }

    /// Shape entities collide with. Fences reach half a block above their cell.
    pub fn collision_shape(&self) -> Option<Aabb> {
        match self {
            BlockState::Replaceable => None,
            BlockState::Fence => Some(Aabb::from_pixels([6.0, 0.0, 6.0], [10.0, 24.0, 10.0])),
            other => other.outline_shape(),
        }
    }

    /// Surface box of a fluid cell, empty for non-fluids.
    pub fn fluid_shape(&self) -> Option<Aabb> {
        match self {
            BlockState::Fluid { source: true } => Some(Aabb::from_pixels([0.0, 0.0, 0.0], [16.0, 14.0, 16.0])),
            BlockState::Fluid { source: false } => Some(Aabb::from_pixels([0.0, 0.0, 0.0], [16.0, 10.0, 16.0])),
            _ => None,
        }
    }
}
