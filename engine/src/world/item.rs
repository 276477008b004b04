//! Block Kinds and Item Stacks
//!
//! What a held item places, and which state it takes once placed.

use serde::{Deserialize, Serialize};

use super::block::{BlockState, SlabType};
use super::direction::Direction;

/// A block type as carried by a block item, independent of its placed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    Solid,
    Slab,
    Fence,
    TallGrass,
}

impl BlockKind {
    /// Half-height blocks with two placement orientations.
    #[inline]
    pub fn is_slab_shaped(self) -> bool {
        matches!(self, BlockKind::Slab)
    }

    /// State this block takes when placed.
    ///
    /// * `side` - face of the targeted block the placement is made against
    /// * `hit_height` - height of the hit point inside the placement cell (0..1)
    /// * `existing` - current state of the placement cell
    ///
    /// Returns `None` when the block cannot be placed there.
    pub fn placement_state(
        self,
        side: Direction,
        hit_height: f64,
        existing: BlockState,
    ) -> Option<BlockState> {
        match self {
            BlockKind::Slab => match existing {
                BlockState::Slab(SlabType::Bottom | SlabType::Top) => {
                    Some(BlockState::Slab(SlabType::Double))
                }
                BlockState::Slab(SlabType::Double) => None,
                _ => {
                    let half = match side {
                        Direction::Down => SlabType::Top,
                        Direction::Up => SlabType::Bottom,
                        _ if hit_height > 0.5 => SlabType::Top,
                        _ => SlabType::Bottom,
                    };
                    Some(BlockState::Slab(half))
                }
            },
            BlockKind::Solid => Some(BlockState::Solid),
            BlockKind::Fence => Some(BlockState::Fence),
            BlockKind::TallGrass => Some(BlockState::Replaceable),
        }
    }
}

/// Contents of an inventory slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ItemStack {
    #[default]
    Empty,
    /// An item that places a block
    Block { kind: BlockKind, count: u32 },
    /// Any other item (tools, food, ...)
    Item { name: String, count: u32 },
}

impl ItemStack {
    pub fn block(kind: BlockKind, count: u32) -> Self {
        ItemStack::Block { kind, count }
    }

    pub fn item(name: impl Into<String>, count: u32) -> Self {
        ItemStack::Item {
            name: name.into(),
            count,
        }
    }

    /// An explicit `Empty` or any stack with a zero count.
    pub fn is_empty(&self) -> bool {
        match self {
            ItemStack::Empty => true,
            ItemStack::Block { count, .. } | ItemStack::Item { count, .. } => *count == 0,
        }
    }

    /// The block this stack places, if it is a non-empty block item.
    pub fn as_block(&self) -> Option<BlockKind> {
        match self {
            ItemStack::Block { kind, .. } if !self.is_empty() => Some(*kind),
            _ => None,
        }
    }
}
