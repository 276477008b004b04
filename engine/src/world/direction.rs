//! Block Face Directions
//!
//! The six axis-aligned faces of a voxel and the conversions the
//! targeting code needs (offsets, opposites, facing from yaw).

use glam::IVec3;
use serde::{Deserialize, Serialize};

/// One of the six axis-aligned faces of a block.
///
/// World axes are y-up. North is -Z, south is +Z, west is -X, east is +X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

/// Horizontal directions indexed by quarter turns of yaw, starting at yaw 0.
const HORIZONTAL_BY_QUARTER: [Direction; 4] = [
    Direction::South,
    Direction::West,
    Direction::North,
    Direction::East,
];

impl Direction {
    /// The face pointing the other way along the same axis.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// Unit block offset of a neighbor across this face.
    pub fn offset(self) -> IVec3 {
        match self {
            Direction::Down => IVec3::NEG_Y,
            Direction::Up => IVec3::Y,
            Direction::North => IVec3::NEG_Z,
            Direction::South => IVec3::Z,
            Direction::West => IVec3::NEG_X,
            Direction::East => IVec3::X,
        }
    }

    /// Horizontal facing for a yaw angle in degrees.
    ///
    /// Yaw 0 faces south (+Z) and increases clockwise seen from above:
    /// 90 is west, 180 north, 270 east. Any real yaw is accepted and
    /// snapped to the nearest quarter turn.
    pub fn from_yaw(yaw_degrees: f32) -> Direction {
        let quarter = (yaw_degrees as f64 / 90.0 + 0.5).floor() as i64;
        HORIZONTAL_BY_QUARTER[quarter.rem_euclid(4) as usize]
    }

    /// The face a ray travelling along `delta` enters a box through.
    ///
    /// Picks the dominant axis of the ray and returns the face opposing it.
    pub fn facing_against(delta: glam::DVec3) -> Direction {
        let abs = delta.abs();
        if abs.x >= abs.y && abs.x >= abs.z {
            if delta.x > 0.0 { Direction::West } else { Direction::East }
        } else if abs.y >= abs.z {
            if delta.y > 0.0 { Direction::Down } else { Direction::Up }
        } else if delta.z > 0.0 {
            Direction::North
        } else {
            Direction::South
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::North => "north",
            Direction::South => "south",
            Direction::West => "west",
            Direction::East => "east",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn opposite_is_involution() {
        use Direction::*;
        for dir in [Down, Up, North, South, West, East] {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.offset() + dir.opposite().offset(), IVec3::ZERO);
        }
    }

    #[test]
    fn yaw_snaps_to_quarter_turns() {
        assert_eq!(Direction::from_yaw(0.0), Direction::South);
        assert_eq!(Direction::from_yaw(44.0), Direction::South);
        assert_eq!(Direction::from_yaw(46.0), Direction::West);
        assert_eq!(Direction::from_yaw(180.0), Direction::North);
        assert_eq!(Direction::from_yaw(270.0), Direction::East);
        assert_eq!(Direction::from_yaw(-90.0), Direction::East);
        assert_eq!(Direction::from_yaw(720.0 + 90.0), Direction::West);
    }

    #[test]
    fn facing_against_opposes_dominant_axis() {
        assert_eq!(Direction::facing_against(DVec3::new(0.1, -1.0, 0.2)), Direction::Up);
        assert_eq!(Direction::facing_against(DVec3::new(2.0, 0.0, 1.0)), Direction::West);
        assert_eq!(Direction::facing_against(DVec3::new(0.0, 0.3, -1.0)), Direction::South);
    }
}
