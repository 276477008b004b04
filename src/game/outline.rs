//! Reach-Around Outline
//!
//! Decides, once per frame, whether and where to draw the preview outline
//! of the block a reach-around placement would produce. The renderer only
//! has to draw the returned box.

use glam::IVec3;

use crate::config::{ReacharoundConfig, Rgba};
use crate::physics::Aabb;
use crate::player::PlayerPose;
use crate::reacharound::ReacharoundEngine;
use crate::world::{BlockState, HitResult, WorldQuery};
use super::placement::PlacementContext;

/// One outline to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineDraw {
    /// Cell the outline belongs to
    pub block_pos: IVec3,
    /// State the held block would be placed as
    pub state: BlockState,
    /// Outline box relative to the camera position
    pub shape: Aabb,
    pub color: Rgba,
}

/// Compute the reach-around outline for this frame, if any.
///
/// Nothing is drawn unless the live crosshair still misses, outlines are
/// enabled, a target is cached, it lies inside the world border and the
/// player holds a block that can be placed there.
pub fn reacharound_outline<W: WorldQuery + ?Sized>(
    engine: &ReacharoundEngine,
    world: &W,
    player: &PlayerPose,
    crosshair: Option<&HitResult>,
    config: &ReacharoundConfig,
    time_secs: f64,
) -> Option<OutlineDraw> {
    if !engine.is_available() || !config.render_outline {
        return None;
    }
    if !crosshair.is_some_and(HitResult::is_miss) {
        return None;
    }

    let result = engine.last_result()?;
    if !world.is_within_border(result.block_pos) {
        return None;
    }

    let block = player.main_hand.as_block()?;
    let hit = engine.with_side_for_reacharound(result, block);
    let ctx = PlacementContext::new(world, player, hit);
    let state = ctx.placement_state(world, block)?;
    let shape = state.outline_shape()?;

    let color = match config.outline_color() {
        Ok(Some(color)) => color,
        _ => Rgba::rainbow(time_secs).with_alpha(config.outline_alpha),
    };

    Some(OutlineDraw {
        block_pos: result.block_pos,
        state,
        shape: shape.translated(result.block_pos.as_dvec3() - player.camera_position),
        color,
    })
}
