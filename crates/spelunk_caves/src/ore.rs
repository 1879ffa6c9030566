//! # Ore Veins
//!
//! Grows mineral veins into rock behind horizontally exposed cave surfaces
//! before the cosmetic pass runs.
//!
//! ## Placement
//!
//! 1. Candidates are the horizontally exposed contexts the scope may write.
//! 2. `candidates / vein_density` veins are placed (plus optional jitter),
//!    capped at `max_veins`.
//! 3. Each vein starts at a random candidate. A coarse noise sample picks the
//!    ore family, a fine sample the ore and its target size.
//! 4. The vein grows by random frontier expansion through replaceable rock,
//!    never more than 4 voxels horizontally or 5 vertically from its origin,
//!    never into another vein, never out of the chunk.
//!
//! Vein voxels are rewritten to ore and dropped from the context map, so the
//! decorators never see them.

use std::collections::BTreeSet;

use crate::config::DecoratorConfig;
use crate::context::ContextMap;
use crate::direction::Direction;
use crate::material::Material;
use crate::noise::NoiseField;
use crate::random::ChunkRandom;
use crate::scope::WriteScope;
use crate::world::{VoxelPos, VoxelStore};

/// Horizontal reach of a vein from its origin.
pub const VEIN_REACH_HORIZONTAL: i32 = 4;

/// Vertical reach of a vein from its origin.
pub const VEIN_REACH_VERTICAL: i32 = 5;

/// Noise scale selecting the ore family.
const FAMILY_SCALE: f64 = 64.0;

/// Noise scale selecting the ore within a family.
const ORE_SCALE: f64 = 1.0;

/// Band of the fine sample around zero that picks the common ore.
const ORE_THRESHOLD: f64 = 0.25;

/// Coarse grouping of ores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OreFamily {
    /// Diamond, gold, lapis.
    Precious,
    /// Redstone, copper, iron.
    Industrial,
}

impl OreFamily {
    /// Family for a coarse noise sample.
    #[inline]
    #[must_use]
    pub fn from_noise(coarse: f64) -> Self {
        if coarse < 0.0 {
            Self::Industrial
        } else {
            Self::Precious
        }
    }

    /// `(ore, deep ore, median size, size spread)` for a fine noise sample.
    #[must_use]
    pub fn ore_for(self, fine: f64) -> (Material, Material, i32, u32) {
        match self {
            Self::Precious if fine > ORE_THRESHOLD => {
                (Material::DiamondOre, Material::DeepslateDiamondOre, 4, 3)
            }
            Self::Precious if fine < -ORE_THRESHOLD => {
                (Material::GoldOre, Material::DeepslateGoldOre, 6, 4)
            }
            Self::Precious => (Material::LapisOre, Material::DeepslateLapisOre, 6, 4),
            Self::Industrial if fine > ORE_THRESHOLD => {
                (Material::RedstoneOre, Material::DeepslateRedstoneOre, 6, 3)
            }
            Self::Industrial if fine < -ORE_THRESHOLD => {
                (Material::CopperOre, Material::DeepslateCopperOre, 8, 4)
            }
            Self::Industrial => (Material::IronOre, Material::DeepslateIronOre, 6, 4),
        }
    }
}

/// Ore material and target size of one vein.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OreSpec {
    /// Ore written into every vein voxel.
    pub material: Material,
    /// Voxels the vein tries to reach.
    pub target_size: u32,
}

impl OreSpec {
    /// Picks the ore from two noise samples; `deep` selects the deepslate
    /// variant. The size is drawn from `rng`.
    pub fn select(coarse: f64, fine: f64, deep: bool, rng: &mut ChunkRandom) -> Self {
        let (shallow, deepslate, median, dist) = OreFamily::from_noise(coarse).ore_for(fine);
        let size = rng.spread(median, dist).max(1);
        Self {
            material: if deep { deepslate } else { shallow },
            target_size: size.unsigned_abs(),
        }
    }
}

/// A grown vein.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vein {
    /// Voxel the vein grew from.
    pub origin: VoxelPos,
    /// Ore and target size.
    pub spec: OreSpec,
    /// Member voxels in growth order, origin first.
    pub voxels: Vec<VoxelPos>,
}

impl Vein {
    /// Returns true if `pos` lies within the growth box around the origin.
    #[must_use]
    pub fn within_reach(&self, pos: VoxelPos) -> bool {
        within_reach(self.origin, pos)
    }
}

/// Outcome of vein placement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VeinPlacement {
    /// Horizontally exposed candidates considered.
    pub candidates: usize,
    /// Veins requested before growth.
    pub vein_count: u32,
    /// Veins grown, in placement order.
    pub veins: Vec<Vein>,
}

impl VeinPlacement {
    /// Every voxel turned into ore.
    #[must_use]
    pub fn consumed(&self) -> BTreeSet<VoxelPos> {
        self.veins
            .iter()
            .flat_map(|vein| vein.voxels.iter().copied())
            .collect()
    }
}

/// Places veins for one chunk.
pub struct OreVeinPlacer<'a> {
    config: &'a DecoratorConfig,
    noise: &'a NoiseField,
}

impl<'a> OreVeinPlacer<'a> {
    /// Creates a placer.
    #[must_use]
    pub const fn new(config: &'a DecoratorConfig, noise: &'a NoiseField) -> Self {
        Self { config, noise }
    }

    /// Number of veins for a candidate count.
    ///
    /// Below `vein_density` candidates this is always zero; otherwise the
    /// jitter is added before capping at `max_veins`.
    pub fn vein_count(&self, candidates: usize, rng: &mut ChunkRandom) -> u32 {
        let density = self.config.vein_density.max(1) as usize;
        let base = u32::try_from(candidates / density).unwrap_or(u32::MAX);
        if base == 0 {
            return 0;
        }
        let jitter = rng.next_int(self.config.vein_jitter.saturating_add(1));
        base.saturating_add(jitter).min(self.config.max_veins)
    }

    /// Grows veins, writes them and returns the contexts that remain.
    pub fn place_veins<S: VoxelStore + ?Sized>(
        &self,
        mut contexts: ContextMap,
        store: &mut S,
        scope: &mut WriteScope<'_>,
        rng: &mut ChunkRandom,
    ) -> (ContextMap, VeinPlacement) {
        let mut candidates: Vec<VoxelPos> = contexts
            .iter()
            .filter(|(pos, ctx)| ctx.is_horizontal() && scope.permits(**pos))
            .map(|(pos, _)| *pos)
            .collect();
        let mut placement = VeinPlacement {
            candidates: candidates.len(),
            ..VeinPlacement::default()
        };
        if candidates.is_empty() {
            return (contexts, placement);
        }
        placement.vein_count = self.vein_count(candidates.len(), rng);

        let mut claimed = BTreeSet::new();
        for _ in 0..placement.vein_count {
            if candidates.is_empty() {
                break;
            }
            let origin = candidates[rng.next_index(candidates.len())];
            let coarse = self.sample(origin, FAMILY_SCALE);
            let fine = self.sample(origin, ORE_SCALE);
            let deep = origin.y < self.config.deep_ore_below;
            let spec = OreSpec::select(coarse, fine, deep, rng);

            let voxels = self.grow(&*store, scope, origin, spec.target_size, &claimed, rng);
            for &pos in &voxels {
                scope.set(store, pos, spec.material);
                contexts.remove(&pos);
                claimed.insert(pos);
            }
            candidates.retain(|pos| !claimed.contains(pos));
            tracing::trace!(
                x = origin.x,
                y = origin.y,
                z = origin.z,
                ore = ?spec.material,
                size = voxels.len(),
                "vein placed"
            );
            placement.veins.push(Vein {
                origin,
                spec,
                voxels,
            });
        }
        (contexts, placement)
    }

    fn sample(&self, pos: VoxelPos, scale: f64) -> f64 {
        self.noise
            .sample3(f64::from(pos.x), f64::from(pos.y), f64::from(pos.z), scale)
    }

    fn grow<S: VoxelStore + ?Sized>(
        &self,
        store: &S,
        scope: &WriteScope<'_>,
        origin: VoxelPos,
        target: u32,
        claimed: &BTreeSet<VoxelPos>,
        rng: &mut ChunkRandom,
    ) -> Vec<VoxelPos> {
        let target = target as usize;
        let mut vein = vec![origin];
        let mut frontier: Vec<VoxelPos> = Vec::new();
        let mut pivot = origin;
        while vein.len() < target {
            for direction in Direction::ALL {
                let next = pivot.neighbor(direction);
                if vein.contains(&next) || frontier.contains(&next) || claimed.contains(&next) {
                    continue;
                }
                if !within_reach(origin, next)
                    || !store.in_height_range(next.y)
                    || !scope.permits(next)
                    || !self.config.is_replaceable(store.get(next).material())
                {
                    continue;
                }
                frontier.push(next);
            }
            if frontier.is_empty() {
                break;
            }
            pivot = frontier.swap_remove(rng.next_index(frontier.len()));
            vein.push(pivot);
        }
        vein
    }
}

fn within_reach(origin: VoxelPos, pos: VoxelPos) -> bool {
    (pos.x - origin.x).abs() <= VEIN_REACH_HORIZONTAL
        && (pos.z - origin.z).abs() <= VEIN_REACH_HORIZONTAL
        && (pos.y - origin.y).abs() <= VEIN_REACH_VERTICAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biome::BiomeType;
    use crate::classify::SurfaceClassifier;
    use crate::memory::{ColumnBiomes, MemoryWorld};
    use crate::noise::WorldSeed;
    use crate::world::{ChunkCoord, NoStructures};

    #[test]
    fn test_family_and_ore_selection() {
        assert_eq!(OreFamily::from_noise(0.0), OreFamily::Precious);
        assert_eq!(OreFamily::from_noise(-0.01), OreFamily::Industrial);
        assert_eq!(OreFamily::Precious.ore_for(0.3).0, Material::DiamondOre);
        assert_eq!(OreFamily::Precious.ore_for(-0.3).0, Material::GoldOre);
        assert_eq!(OreFamily::Precious.ore_for(0.25).0, Material::LapisOre);
        assert_eq!(OreFamily::Industrial.ore_for(0.9).0, Material::RedstoneOre);
        assert_eq!(OreFamily::Industrial.ore_for(-0.9).0, Material::CopperOre);
        assert_eq!(OreFamily::Industrial.ore_for(0.0).0, Material::IronOre);
    }

    #[test]
    fn test_deep_variant_and_size() {
        let mut rng = ChunkRandom::from_seed(3);
        for _ in 0..200 {
            let spec = OreSpec::select(0.5, 0.9, true, &mut rng);
            assert_eq!(spec.material, Material::DeepslateDiamondOre);
            assert!((1..=7).contains(&spec.target_size));
        }
        let spec = OreSpec::select(0.5, 0.9, false, &mut rng);
        assert_eq!(spec.material, Material::DiamondOre);
    }

    #[test]
    fn test_vein_count_thresholds() {
        let config = DecoratorConfig::default();
        let noise = NoiseField::new(WorldSeed::new(1));
        let placer = OreVeinPlacer::new(&config, &noise);
        let mut rng = ChunkRandom::from_seed(1);
        assert_eq!(placer.vein_count(0, &mut rng), 0);
        assert_eq!(placer.vein_count(50, &mut rng), 0);
        assert_eq!(placer.vein_count(99, &mut rng), 0);
        assert_eq!(placer.vein_count(100, &mut rng), 1);
        assert_eq!(placer.vein_count(450, &mut rng), 4);
        assert_eq!(placer.vein_count(5000, &mut rng), 8);
    }

    #[test]
    fn test_jitter_stays_capped() {
        let config = DecoratorConfig {
            vein_jitter: 3,
            ..DecoratorConfig::default()
        };
        let noise = NoiseField::new(WorldSeed::new(1));
        let placer = OreVeinPlacer::new(&config, &noise);
        let mut rng = ChunkRandom::from_seed(8);
        for _ in 0..100 {
            assert_eq!(placer.vein_count(60, &mut rng), 0);
            assert!((2..=5).contains(&placer.vein_count(200, &mut rng)));
            assert_eq!(placer.vein_count(800, &mut rng), 8);
        }
    }

    #[test]
    fn test_veins_grow_inside_box_and_chunk() {
        let mut world = MemoryWorld::new(0, 64, 48);
        // Long corridors give several hundred exposed wall voxels.
        for z in [2, 6, 10, 14] {
            world.carve(VoxelPos::new(0, 10, z), VoxelPos::new(15, 30, z));
        }
        let config = DecoratorConfig::default();
        let noise = NoiseField::new(WorldSeed::new(77));
        let chunk = ChunkCoord::new(0, 0);
        let biomes = ColumnBiomes::new(Some(BiomeType::Plains));
        let mut scope = WriteScope::new(chunk, &biomes, &NoStructures, None);
        let mut rng = ChunkRandom::for_chunk(&noise, chunk);

        let contexts = SurfaceClassifier::new(&config).classify(&world, chunk);
        let before = contexts.len();
        let placer = OreVeinPlacer::new(&config, &noise);
        let (remaining, placement) = placer.place_veins(contexts, &mut world, &mut scope, &mut rng);

        assert!(placement.candidates >= 100);
        assert!(placement.vein_count >= 1);
        assert_eq!(placement.veins.len(), placement.vein_count as usize);

        let mut seen = BTreeSet::new();
        for vein in &placement.veins {
            assert!(!vein.voxels.is_empty());
            assert!(vein.voxels.len() <= vein.spec.target_size as usize);
            for &pos in &vein.voxels {
                assert!(vein.within_reach(pos));
                assert!(chunk.contains(pos));
                assert!(seen.insert(pos), "voxel {pos:?} in two veins");
                assert_eq!(world.material_at(pos), vein.spec.material);
                assert!(!remaining.contains_key(&pos));
            }
        }
        let consumed = placement.consumed();
        assert_eq!(consumed.len(), seen.len());
        assert!(remaining.len() <= before);
    }

    #[test]
    fn test_no_candidates_is_noop() {
        let mut world = MemoryWorld::new(0, 64, 48);
        let config = DecoratorConfig::default();
        let noise = NoiseField::new(WorldSeed::new(77));
        let chunk = ChunkCoord::new(0, 0);
        let biomes = ColumnBiomes::new(Some(BiomeType::Plains));
        let mut scope = WriteScope::new(chunk, &biomes, &NoStructures, None);
        let mut rng = ChunkRandom::from_seed(0);
        let placer = OreVeinPlacer::new(&config, &noise);
        let (remaining, placement) =
            placer.place_veins(ContextMap::new(), &mut world, &mut scope, &mut rng);
        assert!(remaining.is_empty());
        assert_eq!(placement, VeinPlacement::default());
        assert_eq!(scope.writes(), 0);
    }
}
