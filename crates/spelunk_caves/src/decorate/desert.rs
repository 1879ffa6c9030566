//! Sandstone caves with bone deposits, cacti and dead bushes.

use super::{Decoration, COARSE, FINE};
use crate::context::Context;
use crate::direction::{Axis, HorizontalDirection};
use crate::material::{BlockState, Material};
use crate::world::VoxelPos;

/// Tallest cactus.
const MAX_CACTUS: u32 = 3;

/// Decorates a desert surface.
pub fn decorate(deco: &mut Decoration<'_, '_>, pos: VoxelPos, context: &Context) -> bool {
    let noise = deco.noise(pos, COARSE);
    if noise < -0.75 {
        let axis = deco.rng().pick(&Axis::ALL).copied().unwrap_or(Axis::Y);
        deco.set(pos, BlockState::oriented(Material::BoneBlock, axis));
    } else if noise < 0.0 {
        deco.set(pos, Material::Sand);
    } else if noise < 0.5 {
        deco.set(pos, Material::Sandstone);
    } else {
        deco.set(pos, Material::SmoothSandstone);
    }

    if context.is_floor() && context.depth > 1 {
        let fine = deco.noise(pos, FINE);
        if fine > 0.33 {
            deco.set(pos, Material::Sand);
            let len = deco.run_length(MAX_CACTUS, context.depth);
            grow_cactus(deco, pos.up(), len);
        } else if fine < -0.5 && deco.is_empty(pos.up()) {
            deco.set(pos.up(), Material::DeadBush);
        }
    }
    true
}

/// Stacks up to `len` cactus blocks from `base`, stopping where the column
/// is blocked or a horizontal neighbour is not air. Returns the height.
pub fn grow_cactus(deco: &mut Decoration<'_, '_>, base: VoxelPos, len: u32) -> u32 {
    let mut cursor = base;
    let mut height = 0;
    while height < len {
        if !deco.is_empty(cursor) {
            break;
        }
        let crowded = HorizontalDirection::ALL
            .iter()
            .any(|h| !deco.is_empty(cursor.neighbor(h.direction())));
        if crowded || !deco.set(cursor, Material::Cactus) {
            break;
        }
        height += 1;
        cursor = cursor.up();
    }
    height
}

#[cfg(test)]
mod tests {
    use super::super::testing::Bench;
    use super::*;
    use crate::biome::BiomeType;

    #[test]
    fn test_surface_ladder() {
        let mut bench = Bench::new(BiomeType::Desert, 5);
        let surfaces = bench.run_all(decorate);
        for (pos, context) in &surfaces {
            let material = bench.material(*pos);
            let noise = bench.sample(*pos, COARSE);
            let expected = if context.is_floor() && bench.sample(*pos, FINE) > 0.33 {
                Material::Sand
            } else if noise < -0.75 {
                Material::BoneBlock
            } else if noise < 0.0 {
                Material::Sand
            } else if noise < 0.5 {
                Material::Sandstone
            } else {
                Material::SmoothSandstone
            };
            assert_eq!(material, expected, "at {pos:?}");
        }
    }

    #[test]
    fn test_cacti_stand_on_sand() {
        let mut bench = Bench::new(BiomeType::Desert, 5);
        bench.run_all(decorate);
        for x in 1..15 {
            for z in 1..15 {
                for y in 8..13 {
                    let pos = VoxelPos::new(x, y, z);
                    match bench.material(pos) {
                        Material::Cactus => {
                            let below = bench.material(pos.down());
                            assert!(matches!(below, Material::Cactus | Material::Sand));
                            assert!(y <= 10, "cactus taller than three");
                        }
                        Material::DeadBush => assert_eq!(y, 8),
                        other => assert!(other.is_empty(), "{other:?} at {pos:?}"),
                    }
                }
            }
        }
    }
}
