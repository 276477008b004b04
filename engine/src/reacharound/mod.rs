//! Reach-Around Module
//!
//! Synthesizes a block target next to or below the player when the
//! crosshair hits nothing, so controller players can bridge and pillar
//! without pixel-precise aim.
//!
//! Two strategies run once per tick in fixed priority:
//!
//! 1. [`vertical`] - looking almost straight down: target the cell under the block the probe ray hits
//! 2. [`horizontal`] - looking down and forward: target the air cell beside the player's footing
//!
//! [`slab`] then decides which half a slab placed on the target should take.
//!
//! # Example
//!
//! ```ignore
//! use reacharound_engine::reacharound::{ReacharoundEngine, TickContext};
//! use reacharound_engine::config::FeatureToggles;
//!
//! let mut engine = ReacharoundEngine::new(FeatureToggles::all());
//!
//! // Once per simulation tick
//! engine.tick(&TickContext::new(&world, &player, &crosshair));
//!
//! // Consumers pull the cached result
//! if let Some(target) = engine.last_result() {
//!     println!("reach-around {} face of {:?}", target.side, target.block_pos);
//! }
//! ```

pub mod engine;
pub mod horizontal;
pub mod slab;
pub mod vertical;

use glam::DVec3;

use crate::player::PlayerPose;
use crate::world::{BlockHitResult, HitResult, WorldQuery};

pub use engine::{ReacharoundEngine, ReacharoundState, player_range};

/// A synthesized target: "as if the player had aimed at this face of this block".
pub type ReacharoundResult = BlockHitResult;

/// Minimum pitch (degrees below the horizon) for vertical reach-around.
pub const VERTICAL_MIN_PITCH: f32 = 80.0;
/// Minimum pitch (degrees below the horizon) for horizontal reach-around.
pub const HORIZONTAL_MIN_PITCH: f32 = 35.0;
/// Upward shift of the vertical probe's end point, biasing it above candidate footing.
pub const VERTICAL_PROBE_LIFT: f64 = 0.75;
/// The vertical target must sit more than this many blocks below the feet cell.
pub const MIN_VERTICAL_DROP: i32 = 1;
/// Feet this far above a full block's top mean the player stands on a bottom slab.
pub const SLAB_FOOTING_THRESHOLD: f64 = 0.25;

/// Inputs for one tick. Any missing piece means "no target this tick".
pub struct TickContext<'a, W: WorldQuery + ?Sized> {
    pub world: Option<&'a W>,
    pub player: Option<&'a PlayerPose>,
    /// The live crosshair target
    pub crosshair: Option<&'a HitResult>,
}

impl<W: WorldQuery + ?Sized> Clone for TickContext<'_, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W: WorldQuery + ?Sized> Copy for TickContext<'_, W> {}

impl<'a, W: WorldQuery + ?Sized> TickContext<'a, W> {
    pub fn new(world: &'a W, player: &'a PlayerPose, crosshair: &'a HitResult) -> Self {
        Self {
            world: Some(world),
            player: Some(player),
            crosshair: Some(crosshair),
        }
    }

    /// No world loaded (menus, loading screens).
    pub fn empty() -> Self {
        Self {
            world: None,
            player: None,
            crosshair: None,
        }
    }

    /// Shared preconditions of both strategies.
    ///
    /// Yields the world, the player and the crosshair end point when the
    /// crosshair missed and the player is grounded, on foot and pitched at
    /// least `min_pitch` downward.
    pub(crate) fn grounded_miss(&self, min_pitch: f32) -> Option<(&'a W, &'a PlayerPose, DVec3)> {
        let world = self.world?;
        let player = self.player?;
        let crosshair = self.crosshair?;

        if !crosshair.is_miss() || !player.on_ground || player.riding || player.pitch < min_pitch {
            return None;
        }
        Some((world, player, crosshair.position()))
    }
}

static_assertions::assert_impl_all!(ReacharoundResult: Copy, Send, Sync);
static_assertions::assert_impl_all!(ReacharoundEngine: Send, Sync, Default);
