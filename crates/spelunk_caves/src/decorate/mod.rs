//! # Biome Decorators
//!
//! One decoration routine per biome type, dispatched through a static table.
//!
//! Every routine has the same shape: sample the noise field at one or two
//! scales around the voxel and pick a material from a short ladder of
//! thresholds. Some also build small structures next to the surface
//! (icicles, cacti, rafters, bushes) or schedule deferred actions.
//!
//! A routine returns `false` when it declined to decorate the voxel.
//!
//! | Biome types | Routine |
//! |---|---|
//! | cold | [`cold`] |
//! | desert | [`desert`] |
//! | jungle | [`jungle`] |
//! | mushroom | [`mushroom`] |
//! | ocean | [`ocean`] |
//! | mountain, spruce | [`mountain`] |
//! | swamp, dark forest | [`swamp`] |
//! | plains, forest, savanna | [`flowers`] |
//! | river | [`river`] |
//! | mesa | [`mesa`] |

pub mod cold;
pub mod desert;
pub mod flowers;
pub mod jungle;
pub mod mesa;
pub mod mountain;
pub mod mushroom;
pub mod ocean;
pub mod river;
pub mod swamp;

use crate::biome::BiomeType;
use crate::config::DecoratorConfig;
use crate::context::Context;
use crate::deferred::{DeferredAction, DeferredActionQueue};
use crate::direction::Direction;
use crate::material::BlockState;
use crate::noise::NoiseField;
use crate::random::ChunkRandom;
use crate::scope::WriteScope;
use crate::world::{VoxelPos, VoxelState, VoxelStore};

/// Noise scale for material ladders.
pub const COARSE: f64 = 8.0;

/// Noise scale for per-voxel speckle.
pub const FINE: f64 = 1.0;

/// A decoration routine.
pub type Routine = fn(&mut Decoration<'_, '_>, VoxelPos, &Context) -> bool;

/// Pass state shared by every routine call of one chunk.
pub struct Decoration<'a, 'w> {
    world: &'a mut dyn VoxelStore,
    scope: &'a mut WriteScope<'w>,
    noise: &'a NoiseField,
    config: &'a DecoratorConfig,
    rng: &'a mut ChunkRandom,
    deferred: &'a mut DeferredActionQueue,
}

impl<'a, 'w> Decoration<'a, 'w> {
    /// Bundles the pass state.
    pub fn new(
        world: &'a mut dyn VoxelStore,
        scope: &'a mut WriteScope<'w>,
        noise: &'a NoiseField,
        config: &'a DecoratorConfig,
        rng: &'a mut ChunkRandom,
        deferred: &'a mut DeferredActionQueue,
    ) -> Self {
        Self {
            world,
            scope,
            noise,
            config,
            rng,
            deferred,
        }
    }

    /// 3D noise at `pos` with coordinates divided by `scale`.
    #[must_use]
    pub fn noise(&self, pos: VoxelPos, scale: f64) -> f64 {
        self.noise
            .sample3(f64::from(pos.x), f64::from(pos.y), f64::from(pos.z), scale)
    }

    /// 2D noise.
    #[must_use]
    pub fn noise2(&self, x: f64, z: f64) -> f64 {
        self.noise.sample2(x, z)
    }

    /// Reads a voxel.
    #[must_use]
    pub fn get(&self, pos: VoxelPos) -> VoxelState {
        self.world.get(pos)
    }

    /// Returns true if `pos` holds air.
    #[must_use]
    pub fn is_empty(&self, pos: VoxelPos) -> bool {
        self.world.get(pos).is_empty()
    }

    /// Writes through the scope. Returns whether the write happened.
    pub fn set(&mut self, pos: VoxelPos, block: impl Into<BlockState>) -> bool {
        self.scope.set(&mut *self.world, pos, block)
    }

    /// Returns true if the scope would accept a write at `pos`.
    #[must_use]
    pub fn permits(&self, pos: VoxelPos) -> bool {
        self.world.in_height_range(pos.y) && self.scope.permits(pos)
    }

    /// Biome type the scope assigns to `pos`.
    #[must_use]
    pub fn biome_at(&self, pos: VoxelPos) -> Option<BiomeType> {
        self.scope.biome_at(pos)
    }

    /// The chunk's random stream.
    pub fn rng(&mut self) -> &mut ChunkRandom {
        &mut *self.rng
    }

    /// Decorator tunables.
    #[must_use]
    pub const fn config(&self) -> &DecoratorConfig {
        self.config
    }

    /// Lowest valid `y`.
    #[must_use]
    pub fn min_height(&self) -> i32 {
        self.world.min_height()
    }

    /// Schedules an action for after the pass.
    pub fn defer(&mut self, action: DeferredAction) {
        self.deferred.push(action);
    }

    /// Returns true below the height where walls and ceilings are left alone.
    #[must_use]
    pub const fn below_bedrock_buffer(&self, pos: VoxelPos) -> bool {
        pos.y < self.config.bedrock_buffer
    }

    /// Random run length in `1..=min(cap, depth)`.
    pub fn run_length(&mut self, cap: u32, depth: u32) -> u32 {
        1 + self.rng.next_int(cap.min(depth))
    }

    /// Writes up to `len` voxels stepping away from `from` in `direction`,
    /// stopping at the first voxel that is not cave space. Returns the
    /// number written.
    pub fn hang(
        &mut self,
        from: VoxelPos,
        direction: Direction,
        len: u32,
        block: impl Into<BlockState>,
    ) -> u32 {
        let block = block.into();
        let mut cursor = from;
        let mut placed = 0;
        for _ in 0..len {
            cursor = cursor.neighbor(direction);
            if !self.world.in_height_range(cursor.y) || !self.get(cursor).is_inside() {
                break;
            }
            if !self.set(cursor, block) {
                break;
            }
            placed += 1;
        }
        placed
    }
}

/// Biome type to routine dispatch.
#[derive(Clone, Copy)]
pub struct BiomeDecoratorTable {
    routines: [Option<Routine>; BiomeType::COUNT],
}

impl BiomeDecoratorTable {
    /// The built-in routines.
    #[must_use]
    pub fn standard() -> Self {
        let mut routines: [Option<Routine>; BiomeType::COUNT] = [None; BiomeType::COUNT];
        let entries: [(BiomeType, Routine); 14] = [
            (BiomeType::Cold, cold::decorate),
            (BiomeType::Desert, desert::decorate),
            (BiomeType::Jungle, jungle::decorate),
            (BiomeType::Mushroom, mushroom::decorate),
            (BiomeType::Ocean, ocean::decorate),
            (BiomeType::Mountain, mountain::oak),
            (BiomeType::Spruce, mountain::spruce),
            (BiomeType::Swamp, swamp::decorate),
            (BiomeType::DarkForest, swamp::decorate),
            (BiomeType::Plains, flowers::decorate),
            (BiomeType::Forest, flowers::decorate),
            (BiomeType::Savanna, flowers::decorate),
            (BiomeType::River, river::decorate),
            (BiomeType::Mesa, mesa::decorate),
        ];
        for (biome, routine) in entries {
            routines[biome.index()] = Some(routine);
        }
        Self { routines }
    }

    /// A table with no routines.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            routines: [None; BiomeType::COUNT],
        }
    }

    /// Replaces or installs the routine for `biome`.
    #[must_use]
    pub fn with_routine(mut self, biome: BiomeType, routine: Routine) -> Self {
        self.routines[biome.index()] = Some(routine);
        self
    }

    /// Routine for `biome`, if any.
    #[must_use]
    pub fn routine(&self, biome: BiomeType) -> Option<Routine> {
        if biome.is_skipped() {
            return None;
        }
        self.routines[biome.index()]
    }

    /// Decorates one voxel. Returns false for unmapped or skipped biome types.
    pub fn decorate(
        &self,
        deco: &mut Decoration<'_, '_>,
        pos: VoxelPos,
        context: &Context,
        biome: BiomeType,
    ) -> bool {
        match self.routine(biome) {
            Some(routine) => routine(deco, pos, context),
            None => false,
        }
    }
}

impl Default for BiomeDecoratorTable {
    fn default() -> Self {
        Self::standard()
    }
}
