//! # SPELUNK Cave Decoration
//!
//! Turns bare carved caves into biome-themed ones: icy grottos, sandstone
//! hollows, overgrown ruins, mineshafts with rafters, flooded prismarine
//! halls.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: material choices are thresholds on seeded noise
//! 2. **Chunk-local**: a transform only writes inside its own chunk column
//! 3. **Infallible**: a transform always completes; refusals are counted
//! 4. **Host-agnostic**: the world is reached only through [`world`] traits
//!
//! ## Core Components
//!
//! - `NoiseField`: 2D/3D simplex noise for every material ladder
//! - `SurfaceClassifier`: finds floors, ceilings and walls around cave air
//! - `OreVeinPlacer`: grows ore veins into exposed rock
//! - `BiomeDecoratorTable`: one decoration routine per biome type
//! - `CaveDecorator`: the per-chunk pipeline tying them together
//! - `MemoryWorld`: an in-memory host for tests and tooling
//!
//! ## Example
//!
//! ```rust
//! use spelunk_caves::{
//!     BiomeType, CaveDecorator, ChunkCoord, DecoratorConfig, MemoryWorld, NoStructures,
//!     UniformBiome, VoxelPos, WorldSeed,
//! };
//!
//! let decorator = CaveDecorator::new(WorldSeed::new(12345), DecoratorConfig::default())?;
//!
//! let mut world = MemoryWorld::new(-64, 192, 63);
//! world.carve(VoxelPos::new(2, 10, 2), VoxelPos::new(12, 14, 12));
//!
//! let report = decorator.transform_chunk(
//!     &mut world,
//!     &UniformBiome(BiomeType::Cold),
//!     &NoStructures,
//!     ChunkCoord::new(0, 0),
//!     None,
//! );
//! assert!(report.floors > 0);
//! # Ok::<(), spelunk_caves::CaveError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::perf)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod biome;
pub mod classify;
pub mod config;
pub mod context;
pub mod decorate;
pub mod decorator;
pub mod deferred;
pub mod direction;
pub mod error;
pub mod material;
pub mod memory;
pub mod noise;
pub mod ore;
pub mod random;
pub mod scope;
pub mod world;

pub use biome::BiomeType;
pub use classify::SurfaceClassifier;
pub use config::DecoratorConfig;
pub use context::{Context, ContextMap, SurfaceKind};
pub use decorate::{BiomeDecoratorTable, Decoration, Routine};
pub use decorator::{CaveDecorator, ChunkReport};
pub use deferred::{DeferredAction, DeferredActionQueue, DrainReport};
pub use direction::{Axis, Direction, FaceSet, HorizontalDirection};
pub use error::{CaveError, CaveResult};
pub use material::{BlockState, Half, Material};
pub use memory::{ColumnBiomes, MemoryWorld, ProtectedVoxels};
pub use noise::{NoiseField, WorldSeed};
pub use ore::{OreFamily, OreSpec, OreVeinPlacer, Vein, VeinPlacement};
pub use random::ChunkRandom;
pub use scope::WriteScope;
pub use world::{
    BiomeSource, ChunkCoord, CreatureKind, GrowthService, NoStructures, PlantKind,
    StructureOracle, UniformBiome, VoxelPos, VoxelState, VoxelStore, WorldAccess, CHUNK_SIZE,
};
