//! Slab Side Resolution
//!
//! A slab placed on a reach-around target takes its half from the side of
//! the hit: "up" places a bottom slab, "down" a top slab. The footing seen
//! by the horizontal strategy picks the side, so a player standing on a
//! bottom slab keeps bridging at slab height.

use crate::world::{BlockKind, Direction, ItemStack};
use super::ReacharoundResult;

/// Override the side of `result` for slab-shaped `block`; other blocks pass through.
pub fn with_side_for_block(result: ReacharoundResult, block: BlockKind, on_slab: bool) -> ReacharoundResult {
    if !block.is_slab_shaped() {
        return result;
    }
    if on_slab {
        result.with_side(Direction::Up)
    } else {
        result.with_side(Direction::Down)
    }
}

/// Same as [`with_side_for_block`] for a held stack.
///
/// Empty stacks and items that do not place a block pass through unchanged.
pub fn with_side_for_stack(result: ReacharoundResult, stack: &ItemStack, on_slab: bool) -> ReacharoundResult {
    match stack.as_block() {
        Some(block) => with_side_for_block(result, block, on_slab),
        None => result,
    }
}
