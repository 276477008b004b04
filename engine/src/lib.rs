//! Reach-Around Engine Library
//!
//! Controller-friendly block targeting for first-person voxel worlds.
//! When the crosshair misses, the engine synthesizes a target beside or
//! below the player's feet, as if they had aimed at it precisely.
//!
//! # Modules
//!
//! - [`reacharound`] - The engine: vertical/horizontal strategies, arbitration, slab sides
//! - [`world`] - Block states, directions, hit results and the `WorldQuery` contract
//! - [`player`] - Per-tick player pose snapshot
//! - [`physics`] - Boxes and ray-box intersection
//! - [`config`] - Feature toggles and persisted settings
//! - [`game`] - Outline and placement consumers
//!
//! # Example
//!
//! ```ignore
//! use reacharound_engine::config::ReacharoundConfig;
//! use reacharound_engine::reacharound::{ReacharoundEngine, TickContext};
//! use reacharound_engine::game::{reacharound_outline, PlacementContext};
//!
//! let config = ReacharoundConfig::load_or_default("reacharound.json")?;
//! let mut engine = ReacharoundEngine::new(config.features());
//!
//! // Host loop, once per tick
//! engine.tick(&TickContext::new(&world, &player, &crosshair));
//!
//! // Renderer, once per frame
//! if let Some(draw) = reacharound_outline(&engine, &world, &player, Some(&crosshair), &config, time) {
//!     draw_box(draw.shape, draw.color);
//! }
//!
//! // On use
//! if let Some(target) = engine.last_result() {
//!     let ctx = PlacementContext::from_reacharound(&engine, &world, &player, target);
//!     place(ctx);
//! }
//! ```

pub mod config;
pub mod physics;
pub mod player;
pub mod reacharound;
pub mod world;

// Consumer modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used types at crate level for convenience
pub use config::{ConfigError, FeatureToggles, ReacharoundConfig};
pub use player::PlayerPose;
pub use reacharound::{ReacharoundEngine, ReacharoundResult, TickContext};
pub use world::{BlockHitResult, BlockState, Direction, HitResult, VoxelWorld, WorldQuery};
