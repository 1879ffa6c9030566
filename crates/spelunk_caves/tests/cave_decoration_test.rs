//! # Cave Decoration Tests
//!
//! End-to-end properties of the chunk pipeline against `MemoryWorld`:
//! determinism, classification rules, vein bounds, and the voxels a
//! transform must leave alone.

use std::collections::BTreeSet;

use spelunk_caves::{
    Axis, BiomeType, CaveDecorator, ChunkCoord, ChunkRandom, ColumnBiomes, DecoratorConfig,
    Direction, Material, MemoryWorld, NoStructures, NoiseField, OreVeinPlacer, ProtectedVoxels,
    SurfaceClassifier, UniformBiome, VoxelPos, VoxelStore, WorldSeed, WriteScope,
};

const ORIGIN: ChunkCoord = ChunkCoord::new(0, 0);

/// Stone up to y = 48 with a tall hall and a side gallery in chunk (0, 0).
fn cavern() -> MemoryWorld {
    let mut world = MemoryWorld::new(0, 64, 48);
    world.carve(VoxelPos::new(1, 8, 1), VoxelPos::new(14, 12, 14));
    world.carve(VoxelPos::new(4, 13, 4), VoxelPos::new(8, 20, 6));
    world.carve(VoxelPos::new(10, 3, 2), VoxelPos::new(12, 7, 12));
    world
}

fn decorator(seed: u64) -> CaveDecorator {
    CaveDecorator::new(WorldSeed::new(seed), DecoratorConfig::default()).unwrap()
}

/// Test: same seed and same world, same caves.
#[test]
fn test_transform_is_deterministic() {
    for biome in [BiomeType::Cold, BiomeType::Mountain, BiomeType::Swamp, BiomeType::Mushroom] {
        let mut a = cavern();
        let mut b = cavern();
        let ra = decorator(99).transform_chunk(&mut a, &UniformBiome(biome), &NoStructures, ORIGIN, None);
        let rb = decorator(99).transform_chunk(&mut b, &UniformBiome(biome), &NoStructures, ORIGIN, None);
        assert_eq!(ra, rb, "{biome} reports differ");
        assert_eq!(a.snapshot(ORIGIN), b.snapshot(ORIGIN), "{biome} voxels differ");
        assert_eq!(a.spawns(), b.spawns());
    }
}

/// Test: noise is a pure function of seed and coordinates.
#[test]
fn test_noise_is_reproducible() {
    let a = NoiseField::new(WorldSeed::new(5));
    let b = NoiseField::new(WorldSeed::new(5));
    for i in 0..500 {
        let (x, y, z) = (f64::from(i) * 1.37, f64::from(i % 17), f64::from(-i) * 0.61);
        assert_eq!(a.sample3(x, y, z, 8.0).to_bits(), b.sample3(x, y, z, 8.0).to_bits());
        assert_eq!(a.sample2(x, z).to_bits(), b.sample2(x, z).to_bits());
    }
}

/// Test: every context is exactly one kind and faces open, sunless space.
#[test]
fn test_classification_exclusivity() {
    let world = cavern();
    let config = DecoratorConfig::default();
    let contexts = SurfaceClassifier::new(&config).classify(&world, ORIGIN);
    assert!(!contexts.is_empty());
    for (pos, context) in &contexts {
        let kinds = [context.is_floor(), context.is_ceiling(), context.is_wall()];
        assert_eq!(kinds.iter().filter(|k| **k).count(), 1, "at {pos:?}");
        assert!(!context.faces.is_empty());
        for direction in Direction::ALL {
            assert!(!world.get(pos.neighbor(direction)).is_sky_exposed());
        }
    }
}

/// Test: a slab between two caves is a floor, not a ceiling.
#[test]
fn test_floor_precedence() {
    let mut world = MemoryWorld::new(0, 64, 48);
    world.carve(VoxelPos::new(2, 10, 2), VoxelPos::new(6, 12, 6));
    world.carve(VoxelPos::new(2, 14, 2), VoxelPos::new(6, 16, 6));
    let config = DecoratorConfig::default();
    let contexts = SurfaceClassifier::new(&config).classify(&world, ORIGIN);
    for x in 2..=6 {
        for z in 2..=6 {
            let slab = contexts[&VoxelPos::new(x, 13, z)];
            assert!(slab.exposes(Direction::Up) && slab.exposes(Direction::Down));
            assert!(slab.is_floor());
            assert_eq!(slab.depth, 3);
        }
    }
}

/// Scenario A: a one-voxel pocket has only walls around it.
#[test]
fn test_single_pocket_has_only_walls() {
    let mut world = MemoryWorld::new(0, 64, 48);
    world.carve(VoxelPos::new(7, 20, 7), VoxelPos::new(7, 20, 7));
    let config = DecoratorConfig::default();
    let contexts = SurfaceClassifier::new(&config).classify(&world, ORIGIN);
    assert_eq!(contexts.len(), 6);
    assert!(contexts.values().all(|c| c.is_wall()));
}

/// Scenario B: a shaft reaching daylight is not a cave.
#[test]
fn test_sky_shaft_excluded() {
    let config = DecoratorConfig::default();

    let mut open = MemoryWorld::new(0, 64, 48);
    open.carve(VoxelPos::new(7, 46, 7), VoxelPos::new(7, 48, 7));
    assert!(SurfaceClassifier::new(&config).classify(&open, ORIGIN).is_empty());

    let mut buried = MemoryWorld::new(0, 64, 48);
    buried.carve(VoxelPos::new(7, 36, 7), VoxelPos::new(7, 38, 7));
    let contexts = SurfaceClassifier::new(&config).classify(&buried, ORIGIN);
    assert!(contexts[&VoxelPos::new(7, 35, 7)].is_floor());
    assert!(contexts[&VoxelPos::new(7, 39, 7)].is_ceiling());
}

/// Scenario C: fifty candidates are too few for a vein.
#[test]
fn test_sparse_candidates_place_no_veins() {
    let mut world = MemoryWorld::new(0, 64, 48);
    // 2 x 3 footprint, 5 tall: 50 wall voxels.
    world.carve(VoxelPos::new(2, 10, 2), VoxelPos::new(3, 14, 4));
    let config = DecoratorConfig::default();
    let noise = NoiseField::new(WorldSeed::new(3));
    let contexts = SurfaceClassifier::new(&config).classify(&world, ORIGIN);
    let before = contexts.clone();
    let biomes = UniformBiome(BiomeType::Cold);
    let mut scope = WriteScope::new(ORIGIN, &biomes, &NoStructures, None);
    let mut rng = ChunkRandom::for_chunk(&noise, ORIGIN);
    let (remaining, placement) =
        OreVeinPlacer::new(&config, &noise).place_veins(contexts, &mut world, &mut scope, &mut rng);
    assert_eq!(placement.candidates, 50);
    assert_eq!(placement.vein_count, 0);
    assert!(placement.veins.is_empty());
    assert_eq!(remaining, before);
    assert_eq!(scope.writes(), 0);
}

/// Test: veins stay in their box, in the chunk, and never overlap.
#[test]
fn test_vein_containment() {
    let mut world = cavern();
    let config = DecoratorConfig {
        vein_density: 20,
        max_veins: 16,
        ..DecoratorConfig::default()
    };
    let noise = NoiseField::new(WorldSeed::new(8));
    let contexts = SurfaceClassifier::new(&config).classify(&world, ORIGIN);
    let biomes = UniformBiome(BiomeType::Plains);
    let mut scope = WriteScope::new(ORIGIN, &biomes, &NoStructures, None);
    let mut rng = ChunkRandom::for_chunk(&noise, ORIGIN);
    let (remaining, placement) =
        OreVeinPlacer::new(&config, &noise).place_veins(contexts, &mut world, &mut scope, &mut rng);

    assert!(placement.veins.len() > 1);
    let mut seen = BTreeSet::new();
    for vein in &placement.veins {
        assert!(vein.voxels.len() <= vein.spec.target_size as usize);
        for &pos in &vein.voxels {
            assert!(vein.within_reach(pos), "{pos:?} outside vein at {:?}", vein.origin);
            assert!(ORIGIN.contains(pos));
            assert!(seen.insert(pos), "{pos:?} in two veins");
            assert!(!remaining.contains_key(&pos));
            assert_eq!(world.material_at(pos), vein.spec.material);
        }
    }
}

/// Test: protected voxels keep their material.
#[test]
fn test_protected_voxels_untouched() {
    let mut world = cavern();
    let mut structures = ProtectedVoxels::new();
    structures.protect_box(VoxelPos::new(0, 0, 0), VoxelPos::new(7, 63, 15));
    let before: Vec<_> = structures.iter().map(|pos| world.get(pos).block).collect();

    let report = decorator(4).transform_chunk(
        &mut world,
        &UniformBiome(BiomeType::Jungle),
        &structures,
        ORIGIN,
        None,
    );
    assert!(report.decorated > 0);
    assert!(report.skipped > 0);
    let after: Vec<_> = structures.iter().map(|pos| world.get(pos).block).collect();
    assert_eq!(before, after);
}

/// Test: columns without a biome keep their material.
#[test]
fn test_unclassified_columns_untouched() {
    let mut world = cavern();
    let mut biomes = ColumnBiomes::new(Some(BiomeType::Desert));
    for x in 0..16 {
        for z in 0..8 {
            biomes.set(x, z, None);
        }
    }
    let column = |world: &MemoryWorld, x: i32, z: i32| -> Vec<Material> {
        (0..64).map(|y| world.material_at(VoxelPos::new(x, y, z))).collect()
    };
    let before: Vec<_> = (0..16)
        .flat_map(|x| (0..8).map(move |z| (x, z)))
        .map(|(x, z)| column(&world, x, z))
        .collect();

    let report = decorator(6).transform_chunk(&mut world, &biomes, &NoStructures, ORIGIN, None);
    assert!(report.decorated > 0);

    let after: Vec<_> = (0..16)
        .flat_map(|x| (0..8).map(move |z| (x, z)))
        .map(|(x, z)| column(&world, x, z))
        .collect();
    assert_eq!(before, after);
}

/// Test: a cave crossing a chunk border is only decorated on one side.
#[test]
fn test_neighbouring_chunk_untouched() {
    let mut world = MemoryWorld::new(0, 64, 48);
    world.carve(VoxelPos::new(8, 10, 4), VoxelPos::new(24, 14, 10));
    let east = ChunkCoord::new(1, 0);
    let before = world.snapshot(east);
    let report = decorator(12).transform_chunk(
        &mut world,
        &UniformBiome(BiomeType::Cold),
        &NoStructures,
        ORIGIN,
        None,
    );
    assert!(report.decorated > 0);
    assert_eq!(world.snapshot(east), before);
}

/// Scenario D: an aligned mountain ceiling drops a pillar to the floor.
#[test]
#[allow(clippy::cast_possible_truncation)]
fn test_mountain_pillar() {
    let mut world = MemoryWorld::new(0, 64, 48);
    world.carve(VoxelPos::new(1, 8, 1), VoxelPos::new(14, 12, 14));
    // No veins, so every ceiling reaches its routine.
    let config = DecoratorConfig {
        vein_density: u32::MAX,
        ..DecoratorConfig::default()
    };
    let decorator = CaveDecorator::new(WorldSeed::new(31), config).unwrap();
    let interval = decorator.config().rafter_interval;

    let offset = |a: i32, b: i32| {
        let n = decorator
            .noise()
            .sample2(f64::from(a) / 128.0, f64::from(b) / 128.0);
        (n * 3.0 + 3.0).floor() as i32
    };
    let aligned: Vec<(i32, i32)> = (2i32..=13)
        .flat_map(|x| (2i32..=13).map(move |z| (x, z)))
        .filter(|&(x, z)| {
            x.rem_euclid(interval) == offset(x, z) && z.rem_euclid(interval) == offset(z, x)
        })
        .collect();
    assert!(!aligned.is_empty());

    decorator.transform_chunk(
        &mut world,
        &UniformBiome(BiomeType::Mountain),
        &NoStructures,
        ORIGIN,
        None,
    );
    for (x, z) in aligned {
        for y in 8..=12 {
            let state = world.get(VoxelPos::new(x, y, z)).block;
            assert!(
                matches!(state.material, Material::OakLog | Material::StrippedOakLog),
                "{:?} at ({x}, {y}, {z})",
                state.material
            );
            assert_eq!(state.axis, Some(Axis::Y));
        }
        assert!(world.material_at(VoxelPos::new(x, 7, z)).is_solid());
    }
}

/// Test: failed mushroom growth leaves a small mushroom behind.
#[test]
fn test_growth_fallback() {
    let mut grows = cavern();
    let mut fails = cavern().with_growth(false);
    let biomes = UniformBiome(BiomeType::Mushroom);
    let ok = decorator(2).transform_chunk(&mut grows, &biomes, &NoStructures, ORIGIN, None);
    let failed = decorator(2).transform_chunk(&mut fails, &biomes, &NoStructures, ORIGIN, None);

    assert_eq!(ok.deferred, failed.deferred);
    assert_eq!(ok.drained.grown as usize, grows.grown().len());
    assert_eq!(failed.drained.grown, 0);
    assert_eq!(failed.drained.fallbacks, ok.drained.grown + ok.drained.fallbacks);
    assert_eq!(ok.drained.spawned, failed.drained.spawned);
    assert!(fails.spawns().iter().all(|(_, pos)| ORIGIN.contains(*pos)));
}

/// Test: the debug override decorates terrain outside any biome.
#[test]
fn test_forced_biome_from_name() {
    let forced: BiomeType = "cold".parse().unwrap();
    let mut world = cavern();
    let report = decorator(1).transform_chunk(
        &mut world,
        &ColumnBiomes::new(None),
        &NoStructures,
        ORIGIN,
        Some(forced),
    );
    assert_eq!(report.skipped, 0);
    assert!(report.decorated > 0);
    let frozen = (1..=14)
        .flat_map(|x| (1..=14).map(move |z| VoxelPos::new(x, 7, z)))
        .filter(|pos| {
            matches!(
                world.material_at(*pos),
                Material::Dirt | Material::SnowBlock | Material::PackedIce | Material::Ice
            )
        })
        .count();
    assert!(frozen > 50);
}
