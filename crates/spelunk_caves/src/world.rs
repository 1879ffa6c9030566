//! # World Contracts
//!
//! The decorator never owns voxels. It reaches the host world through the
//! traits in this module:
//!
//! - [`VoxelStore`]: read and write voxels, query column heights
//! - [`BiomeSource`]: semantic biome type per voxel
//! - [`StructureOracle`]: voxels belonging to generated structures
//! - [`GrowthService`]: procedural plants and creature spawns
//!
//! Chunks are 16x16 columns spanning the full world height.

use serde::{Deserialize, Serialize};

use crate::biome::BiomeType;
use crate::direction::Direction;
use crate::material::{BlockState, Material};

/// Chunk width/depth in voxels.
pub const CHUNK_SIZE: i32 = 16;

/// Sky light level of a voxel with an unobstructed view of the sky.
pub const MAX_SKY_LIGHT: u8 = 15;

/// Absolute voxel coordinate.
///
/// Ordered by `x`, then `y`, then `z`, which fixes the iteration order of
/// context maps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VoxelPos {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate (height).
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl VoxelPos {
    /// Creates a new position.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Position shifted by `(dx, dy, dz)`.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Neighbouring position in `direction`.
    #[inline]
    #[must_use]
    pub const fn neighbor(self, direction: Direction) -> Self {
        let (dx, dy, dz) = direction.offset();
        self.offset(dx, dy, dz)
    }

    /// Position directly above.
    #[inline]
    #[must_use]
    pub const fn up(self) -> Self {
        self.offset(0, 1, 0)
    }

    /// Position directly below.
    #[inline]
    #[must_use]
    pub const fn down(self) -> Self {
        self.offset(0, -1, 0)
    }

    /// Chunk containing this position.
    #[inline]
    #[must_use]
    pub const fn chunk(self) -> ChunkCoord {
        ChunkCoord::from_block_pos(self.x, self.z)
    }
}

/// Chunk coordinate (identifies a chunk in the world grid).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChunkCoord {
    /// X coordinate (in chunks, not voxels).
    pub x: i32,
    /// Z coordinate (in chunks, not voxels).
    pub z: i32,
}

impl ChunkCoord {
    /// Creates a new chunk coordinate.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Converts world voxel coordinates to a chunk coordinate.
    #[inline]
    #[must_use]
    pub const fn from_block_pos(block_x: i32, block_z: i32) -> Self {
        Self {
            x: block_x.div_euclid(CHUNK_SIZE),
            z: block_z.div_euclid(CHUNK_SIZE),
        }
    }

    /// World X coordinate of the chunk's origin (corner).
    #[inline]
    #[must_use]
    pub const fn world_x(self) -> i32 {
        self.x * CHUNK_SIZE
    }

    /// World Z coordinate of the chunk's origin.
    #[inline]
    #[must_use]
    pub const fn world_z(self) -> i32 {
        self.z * CHUNK_SIZE
    }

    /// Returns true if `pos` lies within this chunk's horizontal bounds.
    #[inline]
    #[must_use]
    pub const fn contains(self, pos: VoxelPos) -> bool {
        pos.x.div_euclid(CHUNK_SIZE) == self.x && pos.z.div_euclid(CHUNK_SIZE) == self.z
    }

    /// World `(x, z)` of every column, z-major.
    pub fn columns(self) -> impl Iterator<Item = (i32, i32)> {
        let (ox, oz) = (self.world_x(), self.world_z());
        (0..CHUNK_SIZE).flat_map(move |dz| (0..CHUNK_SIZE).map(move |dx| (ox + dx, oz + dz)))
    }
}

/// What the store reports for a single voxel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoxelState {
    /// Material and properties.
    pub block: BlockState,
    /// Light reaching this voxel from the sky, `0..=15`.
    pub sky_light: u8,
}

impl VoxelState {
    /// Creates a state.
    #[inline]
    #[must_use]
    pub const fn new(block: BlockState, sky_light: u8) -> Self {
        Self { block, sky_light }
    }

    /// Material kind.
    #[inline]
    #[must_use]
    pub const fn material(self) -> Material {
        self.block.material
    }

    /// Returns true for air.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.block.material.is_empty()
    }

    /// Returns true for water and lava.
    #[inline]
    #[must_use]
    pub const fn is_liquid(self) -> bool {
        self.block.material.is_liquid()
    }

    /// Returns true for thin obstructions the surface scan looks through.
    #[inline]
    #[must_use]
    pub const fn is_soft(self) -> bool {
        self.block.material.is_soft()
    }

    /// Empty, liquid or soft: part of a cavity.
    #[inline]
    #[must_use]
    pub const fn is_inside(self) -> bool {
        self.is_empty() || self.is_liquid() || self.is_soft()
    }

    /// Returns true if the voxel sees the open sky.
    #[inline]
    #[must_use]
    pub const fn is_sky_exposed(self) -> bool {
        self.sky_light >= MAX_SKY_LIGHT
    }
}

/// Voxel storage owned by the host.
///
/// Heights are absolute: `min_height()` is the lowest valid `y`,
/// `max_height()` is one past the highest.
pub trait VoxelStore {
    /// Reads a voxel. Positions outside the height range must still answer.
    fn get(&self, pos: VoxelPos) -> VoxelState;

    /// Writes a voxel. No physics or lighting update is expected.
    fn set(&mut self, pos: VoxelPos, block: BlockState);

    /// Height of the highest non-empty voxel in a column.
    fn highest_solid_y(&self, x: i32, z: i32) -> i32;

    /// Lowest valid `y`.
    fn min_height(&self) -> i32;

    /// One past the highest valid `y`.
    fn max_height(&self) -> i32;

    /// Returns true if `y` lies within the world's height range.
    fn in_height_range(&self, y: i32) -> bool {
        (self.min_height()..self.max_height()).contains(&y)
    }
}

/// Biome classification owned by the host.
pub trait BiomeSource {
    /// Semantic biome type of a voxel, `None` when unclassified.
    fn biome_type_of(&self, pos: VoxelPos) -> Option<BiomeType>;
}

/// Every voxel in the same biome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformBiome(pub BiomeType);

impl BiomeSource for UniformBiome {
    fn biome_type_of(&self, _pos: VoxelPos) -> Option<BiomeType> {
        Some(self.0)
    }
}

/// Structure footprints owned by the host.
pub trait StructureOracle {
    /// Returns true if `pos` belongs to a generated structure.
    fn is_protected(&self, pos: VoxelPos) -> bool;
}

/// A world without structures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoStructures;

impl StructureOracle for NoStructures {
    fn is_protected(&self, _pos: VoxelPos) -> bool {
        false
    }
}

/// Creatures a decoration may spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatureKind {
    /// Mushroom cow.
    Mooshroom,
    /// Bee, released from a nest.
    Bee,
}

/// Procedural plants a decoration may ask the host to grow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlantKind {
    /// Huge brown mushroom.
    BrownMushroom,
    /// Huge red mushroom.
    RedMushroom,
}

impl PlantKind {
    /// Single block placed when growth fails.
    #[must_use]
    pub const fn fallback(self) -> Material {
        match self {
            Self::BrownMushroom => Material::BrownMushroom,
            Self::RedMushroom => Material::RedMushroom,
        }
    }
}

/// Entity and growth services owned by the host.
pub trait GrowthService {
    /// Spawns a creature at `pos`.
    fn spawn_creature(&mut self, kind: CreatureKind, pos: VoxelPos);

    /// Grows a procedural plant rooted at `pos`. Returns false if the host
    /// rejected the placement.
    fn grow_procedural_plant(&mut self, kind: PlantKind, pos: VoxelPos) -> bool;
}

/// A world the decorator can both edit and grow things in.
pub trait WorldAccess: VoxelStore + GrowthService {}

impl<T: VoxelStore + GrowthService + ?Sized> WorldAccess for T {}
