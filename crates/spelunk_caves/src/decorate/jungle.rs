//! Overgrown ruins: grass and paths underfoot, log bushes, mossy cobblestone
//! overhead with hanging logs, leaves and vines, brick walls.

use super::{Decoration, COARSE, FINE};
use crate::context::Context;
use crate::direction::Direction;
use crate::material::{BlockState, Material};
use crate::world::VoxelPos;

/// Decorates a jungle surface.
pub fn decorate(deco: &mut Decoration<'_, '_>, pos: VoxelPos, context: &Context) -> bool {
    let noise = deco.noise(pos, COARSE);
    if context.is_floor() {
        floor(deco, pos, noise);
    } else if context.is_ceiling() {
        ceiling(deco, pos, context, noise);
    } else {
        let material = if noise < -0.5 {
            Material::MossyStoneBricks
        } else if noise < 0.0 {
            Material::Stone
        } else if noise < 0.5 {
            Material::StoneBricks
        } else {
            Material::CrackedStoneBricks
        };
        deco.set(pos, material);
    }
    true
}

fn floor(deco: &mut Decoration<'_, '_>, pos: VoxelPos, noise: f64) {
    let fine = deco.noise(pos, FINE);
    if fine > 0.6 {
        // Bush: two logs with a crown of leaves.
        deco.set(pos, Material::JungleLog);
        let log = pos.up();
        deco.set(log, Material::JungleLog);
        for direction in Direction::ALL {
            if direction == Direction::Down {
                continue;
            }
            let leaf = log.neighbor(direction);
            if deco.is_empty(leaf) {
                deco.set(leaf, BlockState::leaves(Material::JungleLeaves));
            }
        }
    } else if fine < 0.0 || noise <= 0.5 {
        deco.set(pos, Material::GrassBlock);
    } else {
        deco.set(pos, Material::DirtPath);
    }
}

fn ceiling(deco: &mut Decoration<'_, '_>, pos: VoxelPos, context: &Context, noise: f64) {
    let material = if noise < 0.0 {
        Material::MossyCobblestone
    } else {
        Material::Cobblestone
    };
    deco.set(pos, material);
    if context.depth < 3 || deco.noise(pos, FINE) <= 0.6 {
        return;
    }
    deco.set(pos, Material::JungleLog);
    let leaf = pos.down();
    deco.set(leaf, BlockState::leaves(Material::JungleLeaves));
    // Vines leave at least one voxel of headroom above the floor.
    let len = deco.rng().next_int(context.depth - 1);
    deco.hang(leaf, Direction::Down, len, Material::Vine);
}
