//! Swamps and dark forests: grassy banks around puddles of water and
//! seagrass, a leaf canopy overhead with slime drips and vines.

use super::{Decoration, COARSE, FINE};
use crate::context::Context;
use crate::direction::{Direction, HorizontalDirection};
use crate::material::{BlockState, Material};
use crate::world::VoxelPos;

/// Longest slime drip.
const MAX_SLIME: u32 = 4;

/// Noise scale choosing clay or dirt under a puddle.
const BED_SCALE: f64 = 6.0;

/// Decorates a swamp or dark-forest surface.
pub fn decorate(deco: &mut Decoration<'_, '_>, pos: VoxelPos, context: &Context) -> bool {
    if context.is_floor() {
        if deco.noise(pos, COARSE) < 0.0 {
            puddle(deco, pos, context);
        } else {
            land(deco, pos);
        }
    } else if context.is_ceiling() {
        canopy(deco, pos, context);
    } else {
        if deco.below_bedrock_buffer(pos) {
            return false;
        }
        let material = if deco.noise(pos, COARSE) > 0.0 {
            Material::Sand
        } else {
            Material::Dirt
        };
        deco.set(pos, material);
    }
    true
}

fn puddle(deco: &mut Decoration<'_, '_>, pos: VoxelPos, context: &Context) {
    // Water would spill over an open side: make it a bank instead.
    let spills = context.is_horizontal()
        || HorizontalDirection::ALL.iter().any(|h| {
            let side = deco.get(pos.neighbor(h.direction()));
            !side.material().is_solid() && !side.is_liquid()
        });
    if spills {
        deco.set(pos, Material::GrassBlock);
        return;
    }
    let bed = if deco.noise(pos, BED_SCALE) > 0.2 {
        Material::Clay
    } else {
        Material::Dirt
    };
    deco.set(pos.down(), bed);
    let fill = if deco.noise(pos, FINE) > 0.3 {
        Material::Seagrass
    } else {
        Material::Water
    };
    deco.set(pos, fill);
    let above = pos.up();
    if deco.is_empty(above) && deco.noise(above, FINE) > 0.3 {
        deco.set(above, Material::LilyPad);
    }
}

fn land(deco: &mut Decoration<'_, '_>, pos: VoxelPos) {
    deco.set(pos, Material::GrassBlock);
    let above = pos.up();
    if !deco.is_empty(above) {
        return;
    }
    let speckle = deco.noise(above, FINE);
    let cover = match speckle {
        s if s >= 0.5 || s <= -0.2 => None,
        s if s > 0.4 => Some(Material::DeadBush),
        s if s > 0.3 => None,
        s if s > 0.2 => Some(Material::ShortGrass),
        s if s > 0.1 => Some(Material::BlueOrchid),
        s if s > 0.0 => Some(Material::BrownMushroom),
        s if s > -0.1 => None,
        _ => Some(Material::DeadBush),
    };
    if let Some(cover) = cover {
        deco.set(above, cover);
    }
}

fn canopy(deco: &mut Decoration<'_, '_>, pos: VoxelPos, context: &Context) {
    let speckle = deco.noise(pos, FINE);
    if speckle > 0.4 && context.depth > 1 {
        let len = deco.run_length(MAX_SLIME, context.depth);
        deco.set(pos, Material::SlimeBlock);
        deco.hang(pos, Direction::Down, len - 1, Material::SlimeBlock);
        return;
    }
    deco.set(pos, BlockState::leaves(Material::OakLeaves));
    if speckle < -0.3 {
        deco.set(pos.up(), Material::OakWood);
    } else if speckle > 0.2 && context.depth > 2 {
        let len = deco.rng().next_int(context.depth - 1);
        deco.hang(pos, Direction::Down, len, Material::Vine);
    }
}
