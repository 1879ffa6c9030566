//! Flooded grottos: sand and gravel floors with puddles, prismarine and
//! obsidian ceilings dripping water around sea lanterns.

use super::{Decoration, COARSE, FINE};
use crate::context::Context;
use crate::direction::HorizontalDirection;
use crate::material::Material;
use crate::world::VoxelPos;

/// Decorates an ocean surface.
pub fn decorate(deco: &mut Decoration<'_, '_>, pos: VoxelPos, context: &Context) -> bool {
    let noise = deco.noise(pos, COARSE);
    if context.is_floor() {
        let material = if !(-0.6..=0.6).contains(&noise) {
            // Puddles only where the floor is enclosed on all sides.
            let open_side = HorizontalDirection::ALL
                .iter()
                .any(|h| deco.is_empty(pos.neighbor(h.direction())));
            if open_side {
                Material::Sand
            } else {
                Material::Water
            }
        } else if noise < 0.0 {
            Material::Sand
        } else {
            Material::Gravel
        };
        deco.set(pos, material);
    } else if context.is_ceiling() {
        let material = if noise < -0.5 {
            Material::Obsidian
        } else if noise < 0.0 {
            Material::Prismarine
        } else if noise < 0.5 {
            Material::DarkPrismarine
        } else {
            Material::PrismarineBricks
        };
        deco.set(pos, material);
        let fine = deco.noise(pos, FINE);
        if fine > 0.6 {
            deco.set(pos, Material::Water);
            if fine > 0.7 {
                deco.set(pos.up(), Material::SeaLantern);
            }
        }
    } else {
        let material = if noise < -0.5 {
            Material::MossyStoneBricks
        } else if noise < 0.0 {
            Material::PrismarineBricks
        } else if noise < 0.5 {
            Material::Prismarine
        } else {
            Material::MossyCobblestone
        };
        deco.set(pos, material);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::super::testing::Bench;
    use super::*;
    use crate::biome::BiomeType;

    #[test]
    fn test_ceiling_drips_and_lanterns() {
        let mut bench = Bench::new(BiomeType::Ocean, 8);
        let surfaces = bench.run_all(decorate);
        for (pos, _) in surfaces.iter().filter(|(_, c)| c.is_ceiling()) {
            let fine = bench.sample(*pos, FINE);
            if fine > 0.6 {
                assert_eq!(bench.material(*pos), Material::Water);
            }
            if fine > 0.7 {
                assert_eq!(bench.material(pos.up()), Material::SeaLantern);
            } else {
                assert_eq!(bench.material(pos.up()), Material::Stone);
            }
        }
    }

    #[test]
    fn test_floor_never_empty() {
        let mut bench = Bench::new(BiomeType::Ocean, 8);
        let surfaces = bench.run_all(decorate);
        for (pos, _) in surfaces.iter().filter(|(_, c)| c.is_floor()) {
            assert!(matches!(
                bench.material(*pos),
                Material::Sand | Material::Gravel | Material::Water
            ));
        }
    }
}
