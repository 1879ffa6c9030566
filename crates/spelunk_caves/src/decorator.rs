//! # Cave Decorator
//!
//! The chunk pipeline. One [`CaveDecorator`] is built per world and shared by
//! every chunk transform:
//!
//! 1. Seed the chunk's random stream
//! 2. Classify every cave-facing voxel
//! 3. Grow ore veins into the horizontally exposed surfaces
//! 4. Decorate the remaining surfaces with their biome's routine
//! 5. Drain the deferred actions
//!
//! A transform never fails. Anything it cannot do (a refused write, a failed
//! growth, an unclassified biome) is counted in the [`ChunkReport`].

use std::path::Path;

use crate::biome::BiomeType;
use crate::classify::SurfaceClassifier;
use crate::config::DecoratorConfig;
use crate::context::SurfaceKind;
use crate::decorate::{BiomeDecoratorTable, Decoration};
use crate::deferred::{DeferredActionQueue, DrainReport};
use crate::error::CaveResult;
use crate::noise::{NoiseField, WorldSeed};
use crate::ore::OreVeinPlacer;
use crate::random::ChunkRandom;
use crate::scope::WriteScope;
use crate::world::{BiomeSource, ChunkCoord, StructureOracle, WorldAccess};

/// What one chunk transform did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChunkReport {
    /// Chunk transformed.
    pub chunk: ChunkCoord,
    /// Cave-facing voxels found by the classifier.
    pub surfaces: usize,
    /// Floors among them.
    pub floors: usize,
    /// Ceilings among them.
    pub ceilings: usize,
    /// Walls among them.
    pub walls: usize,
    /// Surfaces eligible to seed a vein.
    pub vein_candidates: usize,
    /// Size of each vein, in placement order.
    pub veins: Vec<usize>,
    /// Surfaces a routine decorated.
    pub decorated: u32,
    /// Surfaces a routine declined.
    pub declined: u32,
    /// Surfaces with no routine, or protected, or outside any biome.
    pub skipped: u32,
    /// Actions queued during decoration.
    pub deferred: usize,
    /// Outcome of the deferred actions.
    pub drained: DrainReport,
    /// Voxels written.
    pub writes: u32,
    /// Writes the scope refused.
    pub refused: u32,
}

impl ChunkReport {
    /// Voxels turned into ore.
    #[must_use]
    pub fn ore_voxels(&self) -> usize {
        self.veins.iter().sum()
    }
}

/// Decorates the caves of one world.
pub struct CaveDecorator {
    noise: NoiseField,
    config: DecoratorConfig,
    table: BiomeDecoratorTable,
}

impl CaveDecorator {
    /// Creates a decorator with the standard routines.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn new(seed: WorldSeed, config: DecoratorConfig) -> CaveResult<Self> {
        config.validate()?;
        Ok(Self {
            noise: NoiseField::new(seed),
            config,
            table: BiomeDecoratorTable::standard(),
        })
    }

    /// Creates a decorator from a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_config_file(seed: WorldSeed, path: impl AsRef<Path>) -> CaveResult<Self> {
        Self::new(seed, DecoratorConfig::load(path)?)
    }

    /// Replaces the routine table.
    #[must_use]
    pub fn with_table(mut self, table: BiomeDecoratorTable) -> Self {
        self.table = table;
        self
    }

    /// The world's noise field.
    #[must_use]
    pub const fn noise(&self) -> &NoiseField {
        &self.noise
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &DecoratorConfig {
        &self.config
    }

    /// Decorates the caves of `chunk`.
    ///
    /// With `forced_biome` set every voxel is treated as that biome type,
    /// whatever `biomes` says.
    pub fn transform_chunk<W: WorldAccess>(
        &self,
        world: &mut W,
        biomes: &dyn BiomeSource,
        structures: &dyn StructureOracle,
        chunk: ChunkCoord,
        forced_biome: Option<BiomeType>,
    ) -> ChunkReport {
        let span = tracing::debug_span!("transform_chunk", x = chunk.x, z = chunk.z);
        let _enter = span.enter();

        let mut rng = ChunkRandom::for_chunk(&self.noise, chunk);
        let mut scope = WriteScope::new(chunk, biomes, structures, forced_biome);
        let mut report = ChunkReport {
            chunk,
            ..ChunkReport::default()
        };

        let contexts = SurfaceClassifier::new(&self.config).classify(&*world, chunk);
        report.surfaces = contexts.len();
        for context in contexts.values() {
            match context.kind {
                SurfaceKind::Floor => report.floors += 1,
                SurfaceKind::Ceiling => report.ceilings += 1,
                SurfaceKind::Wall => report.walls += 1,
            }
        }

        let placer = OreVeinPlacer::new(&self.config, &self.noise);
        let (remaining, placement) = placer.place_veins(contexts, world, &mut scope, &mut rng);
        report.vein_candidates = placement.candidates;
        report.veins = placement.veins.iter().map(|vein| vein.voxels.len()).collect();

        let mut deferred = DeferredActionQueue::new();
        {
            let mut deco = Decoration::new(
                &mut *world,
                &mut scope,
                &self.noise,
                &self.config,
                &mut rng,
                &mut deferred,
            );
            for (pos, context) in &remaining {
                let biome = deco.biome_at(*pos).filter(|_| deco.permits(*pos));
                let Some(biome) = biome.filter(|b| self.table.routine(*b).is_some()) else {
                    report.skipped += 1;
                    continue;
                };
                if self.table.decorate(&mut deco, *pos, context, biome) {
                    report.decorated += 1;
                } else {
                    report.declined += 1;
                }
            }
        }

        report.deferred = deferred.len();
        report.drained = deferred.drain(world, &mut scope);
        report.writes = scope.writes();
        report.refused = scope.refused();

        tracing::debug!(
            surfaces = report.surfaces,
            floors = report.floors,
            ceilings = report.ceilings,
            walls = report.walls,
            veins = report.veins.len(),
            decorated = report.decorated,
            skipped = report.skipped,
            deferred = report.deferred,
            "chunk decorated"
        );
        report
    }

    /// Transforms the `(2 * radius + 1)^2` chunks around `center`, rows of
    /// increasing `z`, each row in increasing `x`.
    pub fn transform_area<W: WorldAccess>(
        &self,
        world: &mut W,
        biomes: &dyn BiomeSource,
        structures: &dyn StructureOracle,
        center: ChunkCoord,
        radius: u32,
        forced_biome: Option<BiomeType>,
    ) -> Vec<ChunkReport> {
        let radius = i32::try_from(radius).unwrap_or(i32::MAX);
        let xs = center.x.saturating_sub(radius)..=center.x.saturating_add(radius);
        let zs = center.z.saturating_sub(radius)..=center.z.saturating_add(radius);
        let mut reports = Vec::new();
        for z in zs {
            for x in xs.clone() {
                let chunk = ChunkCoord::new(x, z);
                reports.push(self.transform_chunk(world, biomes, structures, chunk, forced_biome));
            }
        }
        reports
    }
}
