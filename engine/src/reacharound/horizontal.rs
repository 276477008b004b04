//! Horizontal Reach-Around
//!
//! While looking down and forward, the player targets the air cell beside
//! their footing, placed against the block they stand on.
//!
//! The crosshair end point is collapsed into one of the eight horizontal
//! neighbors of the footing cell by clamping each horizontal component of
//! its offset to [-1, 1].

use glam::DVec3;

use crate::config::FeatureToggles;
use crate::world::WorldQuery;
use super::{HORIZONTAL_MIN_PITCH, ReacharoundResult, SLAB_FOOTING_THRESHOLD, TickContext};

/// Reference point the neighbor offset is measured from.
///
/// Normally the top of the block under the feet (`floor(y) - 1`, keeping
/// the continuous X/Z). On a bottom slab the feet sit half a block higher
/// and the feet position itself is used. Returns `(reference, on_slab)`.
///
/// `on_slab` really means "elevated footing": any block whose top sits at
/// least [`SLAB_FOOTING_THRESHOLD`] above its cell floor triggers it,
/// including 15/16-high blocks such as paths and farmland.
pub fn footing_reference(feet: DVec3) -> (DVec3, bool) {
    let below = DVec3::new(feet.x, feet.y.floor() - 1.0, feet.z);
    if feet.y - below.y - 1.0 >= SLAB_FOOTING_THRESHOLD {
        (feet, true)
    } else {
        (below, false)
    }
}

/// Horizontal offset from `reference` toward `target`, each axis clamped to [-1, 1].
pub fn clamped_offset(reference: DVec3, target: DVec3) -> DVec3 {
    let offset = target - reference;
    DVec3::new(offset.x.clamp(-1.0, 1.0), 0.0, offset.z.clamp(-1.0, 1.0))
}

/// Try to synthesize a target beside the player's footing.
///
/// `on_slab` receives the footing determination whenever the preconditions
/// hold, even if no candidate survives.
pub fn try_horizontal<W: WorldQuery + ?Sized>(
    ctx: &TickContext<'_, W>,
    features: &FeatureToggles,
    on_slab: &mut bool,
) -> Option<ReacharoundResult> {
    if !features.horizontal_available() {
        return None;
    }
    let (world, player, target) = ctx.grounded_miss(HORIZONTAL_MIN_PITCH)?;

    let (reference, standing_on_slab) = footing_reference(player.position);
    *on_slab = standing_on_slab;

    let vector = clamped_offset(reference, target);
    let landing = reference + vector;
    let candidate = landing.floor().as_ivec3();
    let facing = player.facing;

    if !world.block_state(candidate).is_air() {
        tracing::trace!(?candidate, "horizontal reach-around candidate occupied");
        return None;
    }

    let support = world.block_state(candidate + facing.opposite().offset());
    if support.is_air() || support.is_fluid() || (vector.x == 0.0 && vector.z == 0.0) {
        tracing::trace!(?candidate, ?support, ?vector, "horizontal reach-around has no support");
        return None;
    }

    Some(ReacharoundResult::new(landing, facing, candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_block_footing_drops_one_below_feet_cell() {
        let (reference, on_slab) = footing_reference(DVec3::new(0.3, 65.0, -2.7));
        assert!(!on_slab);
        assert_eq!(reference, DVec3::new(0.3, 64.0, -2.7));
    }

    #[test]
    fn bottom_slab_footing_uses_feet() {
        let feet = DVec3::new(0.3, 64.5, 0.5);
        let (reference, on_slab) = footing_reference(feet);
        assert!(on_slab);
        assert_eq!(reference, feet);
    }

    #[test]
    fn small_step_below_threshold_is_not_a_slab() {
        // Carpet-like elevation
        let (_, on_slab) = footing_reference(DVec3::new(0.5, 64.0625, 0.5));
        assert!(!on_slab);
    }

    #[test]
    fn path_height_footing_counts_as_elevated() {
        // Feet on top of a 15/16-high block at y = 63
        let feet = DVec3::new(0.5, 63.9375, 0.5);
        let (reference, on_slab) = footing_reference(feet);
        assert!(on_slab);
        assert_eq!(reference, feet);
    }

    #[test]
    fn distant_targets_clamp_to_unit_components() {
        let reference = DVec3::new(0.5, 64.0, 0.5);
        let v = clamped_offset(reference, DVec3::new(10.5, 61.0, 0.9));
        assert_eq!(v.x, 1.0);
        assert!((v.z - 0.4).abs() < 1e-12);
        assert_eq!(v.y, 0.0);

        let v = clamped_offset(reference, DVec3::new(-20.0, 80.0, -9.5));
        assert_eq!(v, DVec3::new(-1.0, 0.0, -1.0));
    }
}
