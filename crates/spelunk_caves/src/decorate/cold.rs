//! Frozen caves: snow and ice on every surface, icicles hanging from the
//! ceiling and ice stalagmites rising from the floor.

use super::{Decoration, COARSE, FINE};
use crate::context::Context;
use crate::direction::Direction;
use crate::material::Material;
use crate::world::VoxelPos;

/// Longest icicle or stalagmite.
const MAX_ICICLE: u32 = 4;

/// Surface material for a coarse noise sample.
#[must_use]
pub fn ladder(noise: f64) -> Material {
    if noise < -0.75 {
        Material::Dirt
    } else if noise < 0.0 {
        Material::SnowBlock
    } else if noise < 0.5 {
        Material::PackedIce
    } else {
        Material::Ice
    }
}

/// Decorates a cold-biome surface.
pub fn decorate(deco: &mut Decoration<'_, '_>, pos: VoxelPos, context: &Context) -> bool {
    deco.set(pos, ladder(deco.noise(pos, COARSE)));
    let direction = if context.is_ceiling() {
        Direction::Down
    } else if context.is_floor() {
        Direction::Up
    } else {
        return true;
    };
    if context.depth > 1 && deco.noise(pos, FINE) > 0.5 {
        let len = deco.run_length(MAX_ICICLE, context.depth);
        deco.hang(pos, direction, len, Material::Ice);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::super::testing::{Bench, ROOM_CEILING, ROOM_FLOOR};
    use super::*;
    use crate::biome::BiomeType;

    #[test]
    fn test_ladder_bands() {
        assert_eq!(ladder(-0.9), Material::Dirt);
        assert_eq!(ladder(-0.75), Material::SnowBlock);
        assert_eq!(ladder(0.0), Material::PackedIce);
        assert_eq!(ladder(0.5), Material::Ice);
    }

    #[test]
    fn test_every_surface_frozen() {
        let mut bench = Bench::new(BiomeType::Cold, 11);
        let surfaces = bench.run_all(decorate);
        for (pos, _) in &surfaces {
            assert_eq!(bench.material(*pos), ladder(bench.sample(*pos, COARSE)));
        }
    }

    #[test]
    fn test_icicles_hang_from_ceiling() {
        let mut bench = Bench::new(BiomeType::Cold, 11);
        let surfaces = bench.run_all(decorate);
        for (pos, context) in surfaces.iter().filter(|(_, c)| c.is_ceiling()) {
            let below = pos.down();
            if bench.sample(*pos, FINE) > 0.5 {
                assert_eq!(bench.material(below), Material::Ice);
            }
            assert!(context.depth >= 2);
        }
        // Only ice grows into the room.
        for x in 1..15 {
            for z in 1..15 {
                let mid = VoxelPos::new(x, (ROOM_FLOOR + ROOM_CEILING) / 2, z);
                let reach = bench.material(mid);
                assert!(reach.is_empty() || reach == Material::Ice);
            }
        }
    }

    #[test]
    fn test_ice_runs_bounded_by_cavity() {
        let mut grown = 0;
        // A tall hall (depth 10) and a crawlspace (depth 2).
        for (lo, hi) in [(8, 17), (8, 9)] {
            for seed in 1..=3 {
                let mut bench = Bench::with_room(BiomeType::Cold, seed, lo, hi);
                for column in bench.isolated_columns(decorate) {
                    let run = column.run(Material::Ice);
                    let cap = MAX_ICICLE.min(column.depth) as usize;
                    assert!(run <= cap, "run {run} > {cap} at {:?}", column.pos);
                    assert!(column.open_from(run), "gap in run at {:?}", column.pos);
                    assert_eq!(column.opposite, Material::Stone, "at {:?}", column.pos);
                    grown += usize::from(run > 0);
                }
            }
        }
        assert!(grown > 0);
    }
}
