//! Vertical Reach-Around
//!
//! While looking almost straight down past their own footing, the player
//! targets the underside of whatever the probe ray finds below.

use glam::{DVec3, IVec3};

use crate::config::FeatureToggles;
use crate::world::{Direction, FluidHandling, RaycastContext, ShapeType, WorldQuery};
use super::{
    MIN_VERTICAL_DROP, ReacharoundResult, TickContext, VERTICAL_MIN_PITCH, VERTICAL_PROBE_LIFT,
    player_range,
};

/// Try to synthesize a target below the player.
///
/// Casts a probe from the camera along the look vector (full interaction
/// range, end point lifted by [`VERTICAL_PROBE_LIFT`]). The cell under the
/// block it hits is the target, provided it is more than
/// [`MIN_VERTICAL_DROP`] below the feet cell and can take a block.
pub fn try_vertical<W: WorldQuery + ?Sized>(
    ctx: &TickContext<'_, W>,
    features: &FeatureToggles,
) -> Option<ReacharoundResult> {
    if !features.vertical_available() {
        return None;
    }
    let (world, player, _) = ctx.grounded_miss(VERTICAL_MIN_PITCH)?;

    let range = player_range(Some(player)) as f64;
    let start = player.camera_position;
    let end = start + player.look * range + DVec3::new(0.0, VERTICAL_PROBE_LIFT, 0.0);
    let probe = RaycastContext::new(start, end, ShapeType::Outline, FluidHandling::None)
        .excluding(player.entity);

    let hit = world.raycast(&probe);
    let hit = hit.as_block()?;

    let candidate = hit.block_pos + IVec3::NEG_Y;
    let state = world.block_state(candidate);
    let drop = player.block_pos().y - candidate.y;

    if drop > MIN_VERTICAL_DROP && (state.is_air() || state.is_replaceable()) {
        Some(ReacharoundResult::new(hit.position, Direction::Down, candidate))
    } else {
        tracing::trace!(?candidate, drop, ?state, "vertical reach-around candidate rejected");
        None
    }
}
