//! # Write Scope
//!
//! Every write a chunk transform makes goes through a [`WriteScope`]. The
//! scope refuses writes that would
//!
//! - leave the chunk's horizontal bounds or the world's height range
//! - touch a voxel belonging to a structure
//! - touch a voxel whose biome is unclassified or never decorated
//!
//! Refusals are counted and traced, never reported as errors. Two transforms
//! of different chunks therefore write disjoint voxel sets.

use crate::biome::BiomeType;
use crate::material::BlockState;
use crate::world::{BiomeSource, ChunkCoord, StructureOracle, VoxelPos, VoxelStore};

/// Write guard for one chunk transform.
pub struct WriteScope<'a> {
    chunk: ChunkCoord,
    biomes: &'a dyn BiomeSource,
    structures: &'a dyn StructureOracle,
    forced_biome: Option<BiomeType>,
    writes: u32,
    refused: u32,
}

impl<'a> WriteScope<'a> {
    /// Creates a scope for `chunk`. A forced biome replaces the biome source
    /// for every voxel.
    #[must_use]
    pub fn new(
        chunk: ChunkCoord,
        biomes: &'a dyn BiomeSource,
        structures: &'a dyn StructureOracle,
        forced_biome: Option<BiomeType>,
    ) -> Self {
        Self {
            chunk,
            biomes,
            structures,
            forced_biome,
            writes: 0,
            refused: 0,
        }
    }

    /// Chunk this scope guards.
    #[must_use]
    pub const fn chunk(&self) -> ChunkCoord {
        self.chunk
    }

    /// Biome type used for `pos`.
    #[must_use]
    pub fn biome_at(&self, pos: VoxelPos) -> Option<BiomeType> {
        self.forced_biome.or_else(|| self.biomes.biome_type_of(pos))
    }

    /// Returns true if `pos` may be written, ignoring the height range.
    #[must_use]
    pub fn permits(&self, pos: VoxelPos) -> bool {
        self.chunk.contains(pos)
            && self.biome_at(pos).is_some_and(|biome| !biome.is_skipped())
            && !self.structures.is_protected(pos)
    }

    /// Writes `block` at `pos` if permitted. Returns whether it was written.
    pub fn set<S: VoxelStore + ?Sized>(
        &mut self,
        store: &mut S,
        pos: VoxelPos,
        block: impl Into<BlockState>,
    ) -> bool {
        if !store.in_height_range(pos.y) || !self.permits(pos) {
            self.refused += 1;
            tracing::trace!(x = pos.x, y = pos.y, z = pos.z, "write refused");
            return false;
        }
        store.set(pos, block.into());
        self.writes += 1;
        true
    }

    /// Writes performed so far.
    #[must_use]
    pub const fn writes(&self) -> u32 {
        self.writes
    }

    /// Writes refused so far.
    #[must_use]
    pub const fn refused(&self) -> u32 {
        self.refused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::memory::{ColumnBiomes, MemoryWorld, ProtectedVoxels};
    use crate::world::NoStructures;

    #[test]
    fn test_refuses_outside_chunk() {
        let mut world = MemoryWorld::new(0, 32, 16);
        let biomes = ColumnBiomes::new(Some(BiomeType::Cold));
        let mut scope = WriteScope::new(ChunkCoord::new(0, 0), &biomes, &NoStructures, None);

        assert!(scope.set(&mut world, VoxelPos::new(15, 5, 15), Material::Ice));
        assert!(!scope.set(&mut world, VoxelPos::new(16, 5, 15), Material::Ice));
        assert!(!scope.set(&mut world, VoxelPos::new(-1, 5, 0), Material::Ice));
        assert!(!scope.set(&mut world, VoxelPos::new(0, 32, 0), Material::Ice));
        assert_eq!(scope.writes(), 1);
        assert_eq!(scope.refused(), 3);
        assert_eq!(world.material_at(VoxelPos::new(16, 5, 15)), Material::Stone);
    }

    #[test]
    fn test_refuses_protected_and_unclassified() {
        let mut world = MemoryWorld::new(0, 32, 16);
        let mut biomes = ColumnBiomes::new(Some(BiomeType::Desert));
        biomes.set(3, 3, None);
        biomes.set(4, 4, Some(BiomeType::Caves));
        let mut protected = ProtectedVoxels::new();
        protected.protect(VoxelPos::new(5, 5, 5));
        let mut scope = WriteScope::new(ChunkCoord::new(0, 0), &biomes, &protected, None);

        assert!(!scope.set(&mut world, VoxelPos::new(3, 5, 3), Material::Sand));
        assert!(!scope.set(&mut world, VoxelPos::new(4, 5, 4), Material::Sand));
        assert!(!scope.set(&mut world, VoxelPos::new(5, 5, 5), Material::Sand));
        assert!(scope.set(&mut world, VoxelPos::new(5, 6, 5), Material::Sand));
        assert_eq!(scope.refused(), 3);
    }

    #[test]
    fn test_forced_biome_overrides_source() {
        let biomes = ColumnBiomes::new(None);
        let scope = WriteScope::new(
            ChunkCoord::new(0, 0),
            &biomes,
            &NoStructures,
            Some(BiomeType::Mesa),
        );
        assert_eq!(scope.biome_at(VoxelPos::new(1, 1, 1)), Some(BiomeType::Mesa));
        assert!(scope.permits(VoxelPos::new(1, 1, 1)));
    }
}
