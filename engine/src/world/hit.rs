//! Hit Results
//!
//! What a raycast (or the crosshair) reports: nothing, a block face, or an entity.

use glam::{DVec3, IVec3};
use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A targeted face of a block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockHitResult {
    /// World-space point on (or near) the face
    pub position: DVec3,
    /// Face being targeted
    pub side: Direction,
    /// Coordinate of the targeted cell
    pub block_pos: IVec3,
    /// Whether the ray started inside the cell
    pub inside_block: bool,
}

impl BlockHitResult {
    pub fn new(position: DVec3, side: Direction, block_pos: IVec3) -> Self {
        Self {
            position,
            side,
            block_pos,
            inside_block: false,
        }
    }

    /// Copy of this hit facing `side` instead.
    #[must_use]
    pub fn with_side(self, side: Direction) -> Self {
        Self { side, ..self }
    }
}

/// Outcome of a raycast or of the live crosshair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HitResult {
    /// Nothing was hit; `position` is where the ray ended
    Miss {
        position: DVec3,
        side: Direction,
        block_pos: IVec3,
    },
    Block(BlockHitResult),
    Entity { position: DVec3 },
}

impl HitResult {
    /// A miss that ended at `position`, facing against `travel`.
    pub fn miss(position: DVec3, travel: DVec3) -> Self {
        HitResult::Miss {
            position,
            side: Direction::facing_against(travel),
            block_pos: position.floor().as_ivec3(),
        }
    }

    #[inline]
    pub fn is_miss(&self) -> bool {
        matches!(self, HitResult::Miss { .. })
    }

    pub fn position(&self) -> DVec3 {
        match self {
            HitResult::Miss { position, .. } | HitResult::Entity { position } => *position,
            HitResult::Block(hit) => hit.position,
        }
    }

    pub fn as_block(&self) -> Option<&BlockHitResult> {
        match self {
            HitResult::Block(hit) => Some(hit),
            _ => None,
        }
    }
}

impl From<BlockHitResult> for HitResult {
    fn from(hit: BlockHitResult) -> Self {
        HitResult::Block(hit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_side_keeps_everything_else() {
        let hit = BlockHitResult::new(DVec3::new(1.5, 2.0, 3.5), Direction::North, IVec3::new(1, 1, 3));
        let flipped = hit.with_side(Direction::Up);
        assert_eq!(flipped.side, Direction::Up);
        assert_eq!(flipped.position, hit.position);
        assert_eq!(flipped.block_pos, hit.block_pos);
        assert!(!flipped.inside_block);
    }

    #[test]
    fn miss_records_end_cell() {
        let miss = HitResult::miss(DVec3::new(-0.5, 63.2, 4.9), DVec3::new(0.0, -1.0, 0.2));
        assert!(miss.is_miss());
        match miss {
            HitResult::Miss { side, block_pos, .. } => {
                assert_eq!(side, Direction::Up);
                assert_eq!(block_pos, IVec3::new(-1, 63, 4));
            }
            _ => unreachable!(),
        }
    }
}
