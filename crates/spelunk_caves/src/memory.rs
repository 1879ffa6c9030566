//! # In-Memory World
//!
//! A complete host implementation held in memory. Used by the tests and
//! benches, and by tooling that decorates worlds outside a game server.
//!
//! ## Layout
//!
//! Voxels live in 16-wide chunk columns created on first write. Untouched
//! columns read as a flat world: stone up to and including `ground`, air
//! above. Below the world floor every read is bedrock; above the ceiling
//! every read is open air.
//!
//! Sky light is straight-down: a voxel above the highest non-empty voxel of
//! its column sees the sky, everything else is dark.

use std::collections::{HashMap, HashSet};

use crate::biome::BiomeType;
use crate::material::{BlockState, Material};
use crate::world::{
    BiomeSource, ChunkCoord, CreatureKind, GrowthService, PlantKind, StructureOracle, VoxelPos,
    VoxelState, VoxelStore, CHUNK_SIZE, MAX_SKY_LIGHT,
};

const COLUMNS_PER_CHUNK: usize = (CHUNK_SIZE * CHUNK_SIZE) as usize;

/// One chunk's worth of voxels.
#[derive(Clone)]
struct ChunkColumn {
    /// Voxels indexed as `[y][z][x]`, flattened.
    blocks: Vec<BlockState>,
    /// Highest non-empty `y` per column, indexed as `[z][x]`.
    height_map: [i32; COLUMNS_PER_CHUNK],
}

impl ChunkColumn {
    /// Highest non-empty `y` of one column, or one below the floor.
    fn rescan(&self, column_index: usize, min_height: i32, max_height: i32) -> i32 {
        (min_height..max_height)
            .rev()
            .find(|&y| {
                let layer = (y - min_height) as usize;
                !self.blocks[layer * COLUMNS_PER_CHUNK + column_index]
                    .material
                    .is_empty()
            })
            .unwrap_or(min_height - 1)
    }
}

/// Flat in-memory voxel store with recording growth services.
#[derive(Clone)]
pub struct MemoryWorld {
    min_height: i32,
    max_height: i32,
    ground: i32,
    chunks: HashMap<ChunkCoord, ChunkColumn>,
    growth_succeeds: bool,
    spawns: Vec<(CreatureKind, VoxelPos)>,
    grown: Vec<(PlantKind, VoxelPos)>,
    writes: u64,
}

impl MemoryWorld {
    /// Creates a world spanning `min_height..max_height` whose untouched
    /// columns are stone up to `ground`.
    #[must_use]
    pub fn new(min_height: i32, max_height: i32, ground: i32) -> Self {
        Self {
            min_height,
            max_height: max_height.max(min_height + 1),
            ground: ground.clamp(min_height - 1, max_height - 1),
            chunks: HashMap::new(),
            growth_succeeds: true,
            spawns: Vec::new(),
            grown: Vec::new(),
            writes: 0,
        }
    }

    /// Makes every procedural growth request succeed or fail.
    #[must_use]
    pub fn with_growth(mut self, succeeds: bool) -> Self {
        self.growth_succeeds = succeeds;
        self
    }

    /// Ground height of untouched columns.
    #[must_use]
    pub const fn ground(&self) -> i32 {
        self.ground
    }

    /// Material at `pos`.
    #[must_use]
    pub fn material_at(&self, pos: VoxelPos) -> Material {
        self.get(pos).material()
    }

    /// Fills the inclusive box spanned by `a` and `b`.
    pub fn fill(&mut self, a: VoxelPos, b: VoxelPos, block: impl Into<BlockState>) {
        let block = block.into();
        for x in a.x.min(b.x)..=a.x.max(b.x) {
            for z in a.z.min(b.z)..=a.z.max(b.z) {
                for y in a.y.min(b.y)..=a.y.max(b.y) {
                    self.set(VoxelPos::new(x, y, z), block);
                }
            }
        }
    }

    /// Fills the inclusive box spanned by `a` and `b` with cave air.
    pub fn carve(&mut self, a: VoxelPos, b: VoxelPos) {
        self.fill(a, b, Material::CaveAir);
    }

    /// Creatures spawned so far, in spawn order.
    #[must_use]
    pub fn spawns(&self) -> &[(CreatureKind, VoxelPos)] {
        &self.spawns
    }

    /// Plants grown successfully so far.
    #[must_use]
    pub fn grown(&self) -> &[(PlantKind, VoxelPos)] {
        &self.grown
    }

    /// Number of `set` calls received.
    #[must_use]
    pub const fn write_count(&self) -> u64 {
        self.writes
    }

    /// Copies every voxel of a chunk in `[y][z][x]` order, for comparisons.
    #[must_use]
    pub fn snapshot(&self, chunk: ChunkCoord) -> Vec<BlockState> {
        let mut out = Vec::new();
        for y in self.min_height..self.max_height {
            for (x, z) in chunk.columns() {
                out.push(self.get(VoxelPos::new(x, y, z)).block);
            }
        }
        out
    }

    fn generated(&self, y: i32) -> BlockState {
        if y <= self.ground {
            Material::Stone.into()
        } else {
            BlockState::AIR
        }
    }

    fn fresh_column(&self) -> ChunkColumn {
        let height = usize::try_from(self.max_height - self.min_height).unwrap_or(0);
        let mut blocks = Vec::with_capacity(height * COLUMNS_PER_CHUNK);
        for y in self.min_height..self.max_height {
            let block = self.generated(y);
            blocks.extend(std::iter::repeat(block).take(COLUMNS_PER_CHUNK));
        }
        ChunkColumn {
            blocks,
            height_map: [self.ground; COLUMNS_PER_CHUNK],
        }
    }

    fn column_index(x: i32, z: i32) -> usize {
        let lx = x.rem_euclid(CHUNK_SIZE);
        let lz = z.rem_euclid(CHUNK_SIZE);
        (lz * CHUNK_SIZE + lx) as usize
    }

    fn voxel_index(&self, pos: VoxelPos) -> usize {
        let layer = (pos.y - self.min_height) as usize;
        layer * COLUMNS_PER_CHUNK + Self::column_index(pos.x, pos.z)
    }

    fn block_at(&self, pos: VoxelPos) -> BlockState {
        if pos.y < self.min_height {
            return Material::Bedrock.into();
        }
        if pos.y >= self.max_height {
            return BlockState::AIR;
        }
        match self.chunks.get(&pos.chunk()) {
            Some(column) => column.blocks[self.voxel_index(pos)],
            None => self.generated(pos.y),
        }
    }
}

impl Default for MemoryWorld {
    /// Stone from -64 to 63 under 128 voxels of air.
    fn default() -> Self {
        Self::new(-64, 192, 63)
    }
}

impl VoxelStore for MemoryWorld {
    fn get(&self, pos: VoxelPos) -> VoxelState {
        let block = self.block_at(pos);
        let sky_light = if pos.y > self.highest_solid_y(pos.x, pos.z) {
            MAX_SKY_LIGHT
        } else {
            0
        };
        VoxelState::new(block, sky_light)
    }

    fn set(&mut self, pos: VoxelPos, block: BlockState) {
        if !self.in_height_range(pos.y) {
            return;
        }
        self.writes += 1;
        let chunk = pos.chunk();
        if !self.chunks.contains_key(&chunk) {
            let column = self.fresh_column();
            self.chunks.insert(chunk, column);
        }
        let index = self.voxel_index(pos);
        let column_index = Self::column_index(pos.x, pos.z);
        let (min_height, max_height) = (self.min_height, self.max_height);
        let Some(column) = self.chunks.get_mut(&chunk) else {
            return;
        };
        column.blocks[index] = block;
        let top = column.height_map[column_index];
        if !block.material.is_empty() && pos.y > top {
            column.height_map[column_index] = pos.y;
        } else if block.material.is_empty() && pos.y == top {
            column.height_map[column_index] = column.rescan(column_index, min_height, max_height);
        }
    }

    fn highest_solid_y(&self, x: i32, z: i32) -> i32 {
        match self.chunks.get(&ChunkCoord::from_block_pos(x, z)) {
            Some(column) => column.height_map[Self::column_index(x, z)],
            None => self.ground,
        }
    }

    fn min_height(&self) -> i32 {
        self.min_height
    }

    fn max_height(&self) -> i32 {
        self.max_height
    }
}

impl GrowthService for MemoryWorld {
    fn spawn_creature(&mut self, kind: CreatureKind, pos: VoxelPos) {
        self.spawns.push((kind, pos));
    }

    /// Grows a two-voxel mushroom: a stem at `pos` under a cap.
    fn grow_procedural_plant(&mut self, kind: PlantKind, pos: VoxelPos) -> bool {
        if !self.growth_succeeds
            || !self.get(pos).is_empty()
            || !self.get(pos.up()).is_empty()
            || !self.in_height_range(pos.y + 1)
        {
            return false;
        }
        let cap = match kind {
            PlantKind::BrownMushroom => Material::BrownMushroomBlock,
            PlantKind::RedMushroom => Material::RedMushroomBlock,
        };
        self.set(pos, Material::MushroomStem.into());
        self.set(pos.up(), cap.into());
        self.grown.push((kind, pos));
        true
    }
}

/// Biome types assigned per column, with a default for the rest.
#[derive(Clone, Debug, Default)]
pub struct ColumnBiomes {
    default: Option<BiomeType>,
    columns: HashMap<(i32, i32), Option<BiomeType>>,
}

impl ColumnBiomes {
    /// Every column in `default` until overridden.
    #[must_use]
    pub fn new(default: Option<BiomeType>) -> Self {
        Self {
            default,
            columns: HashMap::new(),
        }
    }

    /// Assigns a type to one column; `None` marks it unclassified.
    pub fn set(&mut self, x: i32, z: i32, biome: Option<BiomeType>) {
        self.columns.insert((x, z), biome);
    }

    /// Assigns a column by host biome name through the keyword table.
    pub fn set_named(&mut self, x: i32, z: i32, name: &str) {
        self.set(x, z, BiomeType::from_biome_name(name));
    }

    /// Assigns a type to every column of a chunk.
    pub fn set_chunk(&mut self, chunk: ChunkCoord, biome: Option<BiomeType>) {
        for (x, z) in chunk.columns() {
            self.set(x, z, biome);
        }
    }
}

impl BiomeSource for ColumnBiomes {
    fn biome_type_of(&self, pos: VoxelPos) -> Option<BiomeType> {
        self.columns
            .get(&(pos.x, pos.z))
            .copied()
            .unwrap_or(self.default)
    }
}

/// Explicit set of protected voxels.
#[derive(Clone, Debug, Default)]
pub struct ProtectedVoxels {
    voxels: HashSet<VoxelPos>,
}

impl ProtectedVoxels {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Protects the inclusive box spanned by `a` and `b`.
    pub fn protect_box(&mut self, a: VoxelPos, b: VoxelPos) {
        for x in a.x.min(b.x)..=a.x.max(b.x) {
            for y in a.y.min(b.y)..=a.y.max(b.y) {
                for z in a.z.min(b.z)..=a.z.max(b.z) {
                    self.voxels.insert(VoxelPos::new(x, y, z));
                }
            }
        }
    }

    /// Protects a single voxel.
    pub fn protect(&mut self, pos: VoxelPos) {
        self.voxels.insert(pos);
    }

    /// Iterates the protected voxels in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = VoxelPos> + '_ {
        self.voxels.iter().copied()
    }
}

impl StructureOracle for ProtectedVoxels {
    fn is_protected(&self, pos: VoxelPos) -> bool {
        self.voxels.contains(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_world_is_flat() {
        let world = MemoryWorld::new(0, 64, 40);
        assert_eq!(world.material_at(VoxelPos::new(7, 40, -300)), Material::Stone);
        assert_eq!(world.material_at(VoxelPos::new(7, 41, -300)), Material::Air);
        assert_eq!(world.material_at(VoxelPos::new(7, -1, 0)), Material::Bedrock);
        assert_eq!(world.highest_solid_y(1000, 1000), 40);
        assert!(world.get(VoxelPos::new(0, 41, 0)).is_sky_exposed());
        assert!(!world.get(VoxelPos::new(0, 40, 0)).is_sky_exposed());
    }

    #[test]
    fn test_ground_clamped_to_height_range() {
        assert_eq!(MemoryWorld::new(0, 64, 40).ground(), 40);
        assert_eq!(MemoryWorld::new(0, 16, 99).ground(), 15);
        let buried = MemoryWorld::new(0, 16, -20);
        assert_eq!(buried.ground(), -1);
        assert_eq!(buried.material_at(VoxelPos::new(0, 0, 0)), Material::Air);
    }

    #[test]
    fn test_set_tracks_height_map() {
        let mut world = MemoryWorld::new(0, 64, 20);
        world.set(VoxelPos::new(3, 30, 3), Material::Granite.into());
        assert_eq!(world.highest_solid_y(3, 3), 30);
        assert_eq!(world.highest_solid_y(4, 3), 20);

        world.set(VoxelPos::new(3, 30, 3), BlockState::AIR);
        assert_eq!(world.highest_solid_y(3, 3), 20);

        world.carve(VoxelPos::new(3, 15, 3), VoxelPos::new(3, 20, 3));
        assert_eq!(world.highest_solid_y(3, 3), 14);
    }

    #[test]
    fn test_carved_pocket_is_dark() {
        let mut world = MemoryWorld::new(0, 64, 40);
        world.carve(VoxelPos::new(0, 10, 0), VoxelPos::new(2, 12, 2));
        let inside = world.get(VoxelPos::new(1, 11, 1));
        assert!(inside.is_empty());
        assert!(!inside.is_sky_exposed());
    }

    #[test]
    fn test_out_of_range_writes_are_ignored() {
        let mut world = MemoryWorld::new(0, 16, 8);
        world.set(VoxelPos::new(0, 16, 0), Material::Stone.into());
        world.set(VoxelPos::new(0, -1, 0), Material::Air.into());
        assert_eq!(world.write_count(), 0);
        assert_eq!(world.material_at(VoxelPos::new(0, 16, 0)), Material::Air);
    }

    #[test]
    fn test_growth_records_and_fails() {
        let mut world = MemoryWorld::new(0, 64, 10);
        let pos = VoxelPos::new(0, 11, 0);
        assert!(world.grow_procedural_plant(PlantKind::RedMushroom, pos));
        assert_eq!(world.material_at(pos), Material::MushroomStem);
        assert_eq!(world.material_at(pos.up()), Material::RedMushroomBlock);
        assert_eq!(world.grown(), &[(PlantKind::RedMushroom, pos)]);

        let mut barren = MemoryWorld::new(0, 64, 10).with_growth(false);
        assert!(!barren.grow_procedural_plant(PlantKind::BrownMushroom, pos));
        assert!(barren.grown().is_empty());
    }

    #[test]
    fn test_column_biomes_and_protection() {
        let mut biomes = ColumnBiomes::new(Some(BiomeType::Plains));
        biomes.set_named(1, 1, "ICE_SPIKES");
        biomes.set(2, 2, None);
        assert_eq!(biomes.biome_type_of(VoxelPos::new(0, 5, 0)), Some(BiomeType::Plains));
        assert_eq!(biomes.biome_type_of(VoxelPos::new(1, 5, 1)), Some(BiomeType::Cold));
        assert_eq!(biomes.biome_type_of(VoxelPos::new(2, 5, 2)), None);

        biomes.set_chunk(ChunkCoord::new(-1, 0), Some(BiomeType::Mesa));
        assert_eq!(biomes.biome_type_of(VoxelPos::new(-16, 5, 15)), Some(BiomeType::Mesa));
        assert_eq!(biomes.biome_type_of(VoxelPos::new(-1, 5, 0)), Some(BiomeType::Mesa));
        assert_eq!(biomes.biome_type_of(VoxelPos::new(-17, 5, 0)), Some(BiomeType::Plains));

        let mut protected = ProtectedVoxels::new();
        protected.protect_box(VoxelPos::new(0, 0, 0), VoxelPos::new(1, 1, 1));
        assert!(protected.is_protected(VoxelPos::new(1, 0, 1)));
        assert!(!protected.is_protected(VoxelPos::new(2, 0, 1)));
        assert_eq!(protected.iter().count(), 8);
    }
}
