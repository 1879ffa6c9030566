//! # Directions
//!
//! The six axis-aligned neighbours of a voxel and a compact set of them.

use serde::{Deserialize, Serialize};

/// One of the six unit steps between neighbouring voxels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Direction {
    /// +Y
    Up = 0,
    /// -Y
    Down = 1,
    /// -Z
    North = 2,
    /// +X
    East = 3,
    /// +Z
    South = 4,
    /// -X
    West = 5,
}

impl Direction {
    /// All six directions, vertical first.
    pub const ALL: [Self; 6] = [
        Self::Up,
        Self::Down,
        Self::North,
        Self::East,
        Self::South,
        Self::West,
    ];

    /// Unit offset `(dx, dy, dz)` of this direction.
    #[inline]
    #[must_use]
    pub const fn offset(self) -> (i32, i32, i32) {
        match self {
            Self::Up => (0, 1, 0),
            Self::Down => (0, -1, 0),
            Self::North => (0, 0, -1),
            Self::East => (1, 0, 0),
            Self::South => (0, 0, 1),
            Self::West => (-1, 0, 0),
        }
    }

    /// The direction pointing the other way.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Returns true for north, east, south and west.
    #[inline]
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        !matches!(self, Self::Up | Self::Down)
    }

    /// Narrows to a horizontal direction, if this is one.
    #[inline]
    #[must_use]
    pub const fn horizontal(self) -> Option<HorizontalDirection> {
        match self {
            Self::North => Some(HorizontalDirection::North),
            Self::East => Some(HorizontalDirection::East),
            Self::South => Some(HorizontalDirection::South),
            Self::West => Some(HorizontalDirection::West),
            Self::Up | Self::Down => None,
        }
    }

    #[inline]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// The four non-vertical directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalDirection {
    /// -Z
    North,
    /// +X
    East,
    /// +Z
    South,
    /// -X
    West,
}

impl HorizontalDirection {
    /// All four horizontal directions, clockwise from north.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Widens to the general direction type.
    #[inline]
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::North => Direction::North,
            Self::East => Direction::East,
            Self::South => Direction::South,
            Self::West => Direction::West,
        }
    }

    /// The direction pointing the other way.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }
}

impl From<HorizontalDirection> for Direction {
    fn from(direction: HorizontalDirection) -> Self {
        direction.direction()
    }
}

/// Orientation axis for logs, pillars and bones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// East-west.
    X,
    /// Vertical.
    Y,
    /// North-south.
    Z,
}

impl Axis {
    /// All three axes.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];
}

/// Set of directions packed into one byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FaceSet(u8);

impl FaceSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    const HORIZONTAL_MASK: u8 = Direction::North.bit()
        | Direction::East.bit()
        | Direction::South.bit()
        | Direction::West.bit();

    /// Adds a direction.
    #[inline]
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    /// Returns true if the set holds `direction`.
    #[inline]
    #[must_use]
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Returns true if no direction is present.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of directions present.
    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if any of the four horizontal directions is present.
    #[inline]
    #[must_use]
    pub const fn any_horizontal(self) -> bool {
        self.0 & Self::HORIZONTAL_MASK != 0
    }

    /// Iterates the present directions in `Direction::ALL` order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }

    /// The horizontal members, clockwise from north.
    pub fn horizontals(self) -> impl Iterator<Item = HorizontalDirection> {
        HorizontalDirection::ALL
            .into_iter()
            .filter(move |h| self.contains(h.direction()))
    }
}

impl FromIterator<Direction> for FaceSet {
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites_cancel() {
        for direction in Direction::ALL {
            let (x, y, z) = direction.offset();
            let (ox, oy, oz) = direction.opposite().offset();
            assert_eq!((x + ox, y + oy, z + oz), (0, 0, 0));
        }
    }

    #[test]
    fn test_face_set() {
        let mut set = FaceSet::EMPTY;
        assert!(set.is_empty());
        set.insert(Direction::Up);
        assert!(!set.any_horizontal());
        set.insert(Direction::West);
        set.insert(Direction::West);
        assert_eq!(set.len(), 2);
        assert!(set.any_horizontal());
        assert_eq!(set.horizontals().collect::<Vec<_>>(), vec![HorizontalDirection::West]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Direction::Up, Direction::West]);
    }

    #[test]
    fn test_horizontal_narrowing() {
        assert_eq!(Direction::Up.horizontal(), None);
        for h in HorizontalDirection::ALL {
            assert_eq!(h.direction().horizontal(), Some(h));
            assert!(h.direction().is_horizontal());
        }
    }
}
