//! # Surface Context
//!
//! One record per cave-facing voxel: which faces touch open space, how deep
//! the cavity beside it runs, and whether the voxel is a floor, a ceiling or
//! a wall.

use std::collections::BTreeMap;

use crate::direction::{Direction, FaceSet};
use crate::world::VoxelPos;

/// Minimum cavity depth for a floor or ceiling.
pub const MIN_OPEN_DEPTH: u32 = 2;

/// Which way a surface faces the cave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// Open space of at least two voxels above.
    Floor,
    /// Open space of at least two voxels below, not a floor.
    Ceiling,
    /// Anything else.
    Wall,
}

/// Classification of a single cave-facing voxel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Context {
    /// Faces touching open cave space, directly or through a soft obstruction.
    pub faces: FaceSet,
    /// Open voxels stacked above a floor or below a ceiling.
    pub depth: u32,
    /// Floor, ceiling or wall.
    pub kind: SurfaceKind,
}

impl Context {
    /// Derives the classification from exposed faces and the two vertical
    /// cavity depths.
    ///
    /// `depth_above` only counts when `Up` is exposed and `depth_below` only
    /// when `Down` is. A voxel qualifying both ways is a floor.
    #[must_use]
    pub fn from_scan(faces: FaceSet, depth_above: u32, depth_below: u32) -> Self {
        let up = faces.contains(Direction::Up);
        let down = faces.contains(Direction::Down);
        let (kind, depth) = if up && depth_above >= MIN_OPEN_DEPTH {
            (SurfaceKind::Floor, depth_above)
        } else if down && depth_below >= MIN_OPEN_DEPTH {
            (SurfaceKind::Ceiling, depth_below)
        } else if down {
            (SurfaceKind::Wall, depth_below)
        } else if up {
            (SurfaceKind::Wall, depth_above)
        } else {
            (SurfaceKind::Wall, 0)
        };
        Self { faces, depth, kind }
    }

    /// Returns true for floors.
    #[inline]
    #[must_use]
    pub const fn is_floor(&self) -> bool {
        matches!(self.kind, SurfaceKind::Floor)
    }

    /// Returns true for ceilings.
    #[inline]
    #[must_use]
    pub const fn is_ceiling(&self) -> bool {
        matches!(self.kind, SurfaceKind::Ceiling)
    }

    /// Returns true for walls.
    #[inline]
    #[must_use]
    pub const fn is_wall(&self) -> bool {
        matches!(self.kind, SurfaceKind::Wall)
    }

    /// Returns true if any horizontal face is exposed.
    #[inline]
    #[must_use]
    pub const fn is_horizontal(&self) -> bool {
        self.faces.any_horizontal()
    }

    /// Returns true if `direction` is exposed.
    #[inline]
    #[must_use]
    pub const fn exposes(&self, direction: Direction) -> bool {
        self.faces.contains(direction)
    }
}

/// Contexts of one chunk, iterated in `VoxelPos` order.
pub type ContextMap = BTreeMap<VoxelPos, Context>;
