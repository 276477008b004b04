//! Reach-Around Engine
//!
//! Owns the per-tick targeting state and arbitrates between the strategies.

use crate::config::FeatureToggles;
use crate::player::PlayerPose;
use crate::world::{BlockKind, ItemStack, WorldQuery};
use super::{ReacharoundResult, TickContext, horizontal, slab, vertical};

/// Interaction range as used by the probes, 0 without a player.
pub fn player_range(player: Option<&PlayerPose>) -> f32 {
    player.map_or(0.0, |p| p.interaction_range as f32)
}

/// State rewritten by every tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReacharoundState {
    /// Target cached for consumers; at most one
    pub last_result: Option<ReacharoundResult>,
    /// Whether `last_result` came from the vertical strategy
    pub last_result_is_vertical: bool,
    /// Last footing determination of the horizontal strategy.
    /// Only refreshed when that strategy gets as far as checking footing.
    pub on_slab: bool,
}

/// Tick-driven reach-around targeting.
///
/// Driven once per simulation tick by the host; consumers read the cached
/// result and never run the strategies themselves.
#[derive(Debug, Clone, Default)]
pub struct ReacharoundEngine {
    features: FeatureToggles,
    state: ReacharoundState,
}

impl ReacharoundEngine {
    pub fn new(features: FeatureToggles) -> Self {
        Self {
            features,
            state: ReacharoundState::default(),
        }
    }

    pub fn features(&self) -> &FeatureToggles {
        &self.features
    }

    /// Replace the toggles; takes effect on the next tick.
    pub fn set_features(&mut self, features: FeatureToggles) {
        self.features = features;
    }

    /// Recompute the target for this tick.
    ///
    /// Vertical reach-around has strict priority: when it yields a target the
    /// horizontal strategy is not evaluated at all.
    pub fn tick<W: WorldQuery + ?Sized>(&mut self, ctx: &TickContext<'_, W>) {
        let previous = self.state.last_result;

        match vertical::try_vertical(ctx, &self.features) {
            Some(result) => {
                self.state.last_result = Some(result);
                self.state.last_result_is_vertical = true;
            }
            None => {
                self.state.last_result =
                    horizontal::try_horizontal(ctx, &self.features, &mut self.state.on_slab);
                self.state.last_result_is_vertical = false;
            }
        }

        if previous != self.state.last_result {
            match &self.state.last_result {
                Some(result) => tracing::debug!(
                    block = ?result.block_pos,
                    side = %result.side,
                    vertical = self.state.last_result_is_vertical,
                    on_slab = self.state.on_slab,
                    "reach-around target"
                ),
                None if previous.is_some() => tracing::debug!("reach-around target lost"),
                None => {}
            }
        }
    }

    pub fn last_result(&self) -> Option<ReacharoundResult> {
        self.state.last_result
    }

    pub fn is_last_result_vertical(&self) -> bool {
        self.state.last_result_is_vertical
    }

    /// Whether either strategy can run; consumers skip all work otherwise.
    pub fn is_available(&self) -> bool {
        self.features.any_available()
    }

    pub fn is_on_slab(&self) -> bool {
        self.state.on_slab
    }

    /// Side a `block` placed on `result` should use. See [`slab`].
    pub fn with_side_for_reacharound(&self, result: ReacharoundResult, block: BlockKind) -> ReacharoundResult {
        slab::with_side_for_block(result, block, self.state.on_slab)
    }

    /// Stack overload of [`Self::with_side_for_reacharound`]; non-block stacks pass through.
    pub fn with_side_for_reacharound_stack(&self, result: ReacharoundResult, stack: &ItemStack) -> ReacharoundResult {
        slab::with_side_for_stack(result, stack, self.state.on_slab)
    }

    #[cfg(test)]
    pub(crate) fn set_on_slab(&mut self, on_slab: bool) {
        self.state.on_slab = on_slab;
    }
}
