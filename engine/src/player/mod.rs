//! Player Module
//!
//! Read-only view of the local player for targeting.
//!
//! # Components
//!
//! - [`PlayerPose`] - per-tick snapshot of position, view angles, ground/vehicle state and held item

pub mod pose;

pub use pose::{DEFAULT_INTERACTION_RANGE, PLAYER_EYE_HEIGHT, PlayerPose, look_vector};
