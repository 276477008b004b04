//! World Module
//!
//! Block states, face directions, hit results and the [`WorldQuery`]
//! contract the targeting engine reads the world through.
//!
//! ## Coordinates
//! - 1 unit = 1 block, y-up
//! - Block coordinates are `IVec3`, the cell covering `[x, x+1) × [y, y+1) × [z, z+1)`
//! - World-space points are `DVec3`

pub mod block;
pub mod direction;
pub mod hit;
pub mod item;
pub mod query;
pub mod voxel;

pub use block::{BlockState, SlabType};
pub use direction::Direction;
pub use hit::{BlockHitResult, HitResult};
pub use item::{BlockKind, ItemStack};
pub use query::{EntityId, FluidHandling, RaycastContext, ShapeType, WorldQuery};
pub use voxel::VoxelWorld;
