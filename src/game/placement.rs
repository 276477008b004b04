//! Block Placement
//!
//! Turns a (reach-around or direct) block hit into a placement: which cell
//! receives the block and which state the block takes there.

use glam::IVec3;

use crate::player::PlayerPose;
use crate::reacharound::ReacharoundEngine;
use crate::world::{BlockHitResult, BlockKind, BlockState, Direction, ItemStack, VoxelWorld, WorldQuery};

/// Everything needed to place a block against a targeted face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementContext {
    /// The hit being placed against, side already resolved
    pub hit: BlockHitResult,
    /// Cell that receives the block
    pub placement_pos: IVec3,
    /// Whether the hit cell itself is overwritten (it was air or replaceable)
    pub replaces_hit: bool,
    pub player_facing: Direction,
    pub within_border: bool,
}

impl PlacementContext {
    /// Context for placing against `hit` as-is.
    ///
    /// A replaceable hit cell (air, grass, fluid) takes the block itself;
    /// otherwise the block goes into the neighbor across the hit side.
    pub fn new<W: WorldQuery + ?Sized>(world: &W, player: &PlayerPose, hit: BlockHitResult) -> Self {
        let replaces_hit = world.block_state(hit.block_pos).is_replaceable();
        let placement_pos = if replaces_hit {
            hit.block_pos
        } else {
            hit.block_pos + hit.side.offset()
        };

        Self {
            hit,
            placement_pos,
            replaces_hit,
            player_facing: player.facing,
            within_border: world.is_within_border(placement_pos),
        }
    }

    /// Context for a reach-around target.
    ///
    /// Resolves the slab side for the held stack first, so the placed half
    /// matches the outline the player was shown.
    pub fn from_reacharound<W: WorldQuery + ?Sized>(
        engine: &ReacharoundEngine,
        world: &W,
        player: &PlayerPose,
        hit: BlockHitResult,
    ) -> Self {
        let hit = engine.with_side_for_reacharound_stack(hit, &player.main_hand);
        Self::new(world, player, hit)
    }

    #[inline]
    pub fn side(&self) -> Direction {
        self.hit.side
    }

    /// Height of the hit point inside the placement cell, clamped to 0..1.
    pub fn hit_height(&self) -> f64 {
        (self.hit.position.y - self.placement_pos.y as f64).clamp(0.0, 1.0)
    }

    /// State `block` would take, or `None` when it cannot go here.
    pub fn placement_state<W: WorldQuery + ?Sized>(&self, world: &W, block: BlockKind) -> Option<BlockState> {
        if !self.within_border {
            return None;
        }
        let existing = world.block_state(self.placement_pos);
        let merges_slab = block.is_slab_shaped() && existing.is_slab_shaped();
        if !existing.is_replaceable() && !merges_slab {
            return None;
        }
        block.placement_state(self.side(), self.hit_height(), existing)
    }
}

/// Place the held block, returning the state written.
///
/// Does nothing for empty stacks, non-block items and blocked cells.
pub fn place_block(world: &mut VoxelWorld, ctx: &PlacementContext, stack: &ItemStack) -> Option<BlockState> {
    let block = stack.as_block()?;
    let state = ctx.placement_state(&*world, block)?;
    world.set_block(ctx.placement_pos, state);
    tracing::debug!(pos = ?ctx.placement_pos, ?state, side = %ctx.side(), "placed block");
    Some(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use crate::world::SlabType;

    fn player() -> PlayerPose {
        PlayerPose::new(DVec3::new(0.5, 65.0, 0.5), 0.0, 50.0)
    }

    #[test]
    fn air_hit_cell_takes_the_block() {
        let world = VoxelWorld::new();
        let hit = BlockHitResult::new(DVec3::new(0.5, 64.0, 1.5), Direction::South, IVec3::new(0, 64, 1));
        let ctx = PlacementContext::new(&world, &player(), hit);
        assert!(ctx.replaces_hit);
        assert_eq!(ctx.placement_pos, IVec3::new(0, 64, 1));
    }

    #[test]
    fn solid_hit_cell_places_across_side() {
        let mut world = VoxelWorld::new();
        world.set_block(IVec3::new(0, 64, 1), BlockState::Solid);
        let hit = BlockHitResult::new(DVec3::new(0.5, 65.0, 1.5), Direction::Up, IVec3::new(0, 64, 1));
        let ctx = PlacementContext::new(&world, &player(), hit);
        assert!(!ctx.replaces_hit);
        assert_eq!(ctx.placement_pos, IVec3::new(0, 65, 1));
    }

    #[test]
    fn place_block_writes_slab_half() {
        let mut world = VoxelWorld::new();
        let hit = BlockHitResult::new(DVec3::new(0.5, 64.0, 1.5), Direction::Down, IVec3::new(0, 64, 1));
        let ctx = PlacementContext::new(&world, &player(), hit);

        let placed = place_block(&mut world, &ctx, &ItemStack::block(BlockKind::Slab, 1));
        assert_eq!(placed, Some(BlockState::Slab(SlabType::Top)));
        assert_eq!(world.block_state(IVec3::new(0, 64, 1)), BlockState::Slab(SlabType::Top));
    }

    #[test]
    fn slab_merges_into_single_slab_across_side() {
        let mut world = VoxelWorld::new();
        world.set_block(IVec3::new(0, 64, 0), BlockState::Solid);
        world.set_block(IVec3::new(0, 64, 1), BlockState::Slab(SlabType::Bottom));
        let hit = BlockHitResult::new(DVec3::new(0.5, 64.25, 1.0), Direction::South, IVec3::new(0, 64, 0));
        let ctx = PlacementContext::new(&world, &player(), hit);
        assert_eq!(ctx.placement_pos, IVec3::new(0, 64, 1));

        let slab = ItemStack::block(BlockKind::Slab, 2);
        assert_eq!(place_block(&mut world, &ctx, &slab), Some(BlockState::Slab(SlabType::Double)));
        assert_eq!(ctx.placement_state(&world, BlockKind::Slab), None);
        assert_eq!(ctx.placement_state(&world, BlockKind::Solid), None);
    }

    #[test]
    fn non_block_stack_places_nothing() {
        let mut world = VoxelWorld::new();
        let hit = BlockHitResult::new(DVec3::new(0.5, 64.0, 1.5), Direction::South, IVec3::new(0, 64, 1));
        let ctx = PlacementContext::new(&world, &player(), hit);
        assert_eq!(place_block(&mut world, &ctx, &ItemStack::item("torch_lighter", 1)), None);
        assert!(world.block_state(IVec3::new(0, 64, 1)).is_air());
    }

    #[test]
    fn outside_border_cannot_place() {
        let world = VoxelWorld::new().with_border(8);
        let hit = BlockHitResult::new(DVec3::new(8.5, 64.0, 0.5), Direction::East, IVec3::new(8, 64, 0));
        let ctx = PlacementContext::new(&world, &player(), hit);
        assert!(!ctx.within_border);
        assert_eq!(ctx.placement_state(&world, BlockKind::Solid), None);
    }
}
