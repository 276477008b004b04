//! Game Module
//!
//! Consumers of the reach-around engine: the outline preview and block
//! placement. They read the engine's cached result and never run the
//! strategies themselves.

pub mod outline;
pub mod placement;

pub use outline::{OutlineDraw, reacharound_outline};
pub use placement::{PlacementContext, place_block};
