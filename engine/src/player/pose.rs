//! Player Pose Snapshot
//!
//! Everything the targeting engine reads from the local player, captured
//! once per tick by the host.
//!
//! Angle conventions:
//! - pitch 0 looks at the horizon, +90 straight down, -90 straight up
//! - yaw 0 faces south (+Z), 90 west, 180 north, 270 east

use glam::{DVec3, IVec3};

use crate::world::{Direction, EntityId, ItemStack};

/// Camera height above the feet when standing.
pub const PLAYER_EYE_HEIGHT: f64 = 1.62;

/// Default block interaction range in blocks.
pub const DEFAULT_INTERACTION_RANGE: f64 = 4.5;

/// Per-tick snapshot of the local player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerPose {
    /// Entity id, excluded from the player's own raycasts
    pub entity: EntityId,
    /// Feet position in world space
    pub position: DVec3,
    /// Eye position in world space
    pub camera_position: DVec3,
    /// Normalized look direction
    pub look: DVec3,
    /// Pitch in degrees (90 = straight down)
    pub pitch: f32,
    /// Yaw in degrees
    pub yaw: f32,
    /// Horizontal facing derived from yaw
    pub facing: Direction,
    pub on_ground: bool,
    /// Riding a vehicle or mount
    pub riding: bool,
    /// Block interaction range in blocks
    pub interaction_range: f64,
    /// Stack held in the main hand
    pub main_hand: ItemStack,
}

impl PlayerPose {
    /// Standing, grounded pose at `position` looking along `yaw`/`pitch`.
    pub fn new(position: DVec3, yaw: f32, pitch: f32) -> Self {
        Self {
            entity: EntityId(0),
            position,
            camera_position: position + DVec3::new(0.0, PLAYER_EYE_HEIGHT, 0.0),
            look: look_vector(yaw, pitch),
            pitch,
            yaw,
            facing: Direction::from_yaw(yaw),
            on_ground: true,
            riding: false,
            interaction_range: DEFAULT_INTERACTION_RANGE,
            main_hand: ItemStack::Empty,
        }
    }

    #[must_use]
    pub fn airborne(mut self) -> Self {
        self.on_ground = false;
        self
    }

    #[must_use]
    pub fn riding(mut self) -> Self {
        self.riding = true;
        self
    }

    #[must_use]
    pub fn holding(mut self, stack: ItemStack) -> Self {
        self.main_hand = stack;
        self
    }

    /// Cell containing the feet.
    #[inline]
    pub fn block_pos(&self) -> IVec3 {
        self.position.floor().as_ivec3()
    }

    /// Point the crosshair reaches at full interaction range.
    pub fn reach_point(&self) -> DVec3 {
        self.camera_position + self.look * self.interaction_range
    }
}

/// Unit look vector for yaw/pitch in degrees.
pub fn look_vector(yaw: f32, pitch: f32) -> DVec3 {
    let yaw = (yaw as f64).to_radians();
    let pitch = (pitch as f64).to_radians();
    let horizontal = pitch.cos();
    DVec3::new(-yaw.sin() * horizontal, -pitch.sin(), yaw.cos() * horizontal)
}
