//! Abandoned mineshafts: wooden rafters and pillars under the ceiling, worn
//! cobblestone steps underfoot, brick walls lit by the odd torch.
//!
//! Rafters sit on a grid of `rafter_interval` spacing whose offset drifts
//! with a very coarse 2D noise, so neighbouring caves line up differently.

use super::{Decoration, COARSE, FINE};
use crate::context::Context;
use crate::direction::{Axis, Direction};
use crate::material::{BlockState, Material};
use crate::world::VoxelPos;

/// Horizontal scale of the rafter grid offset.
const RAFTER_SCALE: f64 = 128.0;

/// Ceilings this high or higher get no rafters.
const MAX_RAFTER_DEPTH: u32 = 8;

/// Oak mineshaft.
pub fn oak(deco: &mut Decoration<'_, '_>, pos: VoxelPos, context: &Context) -> bool {
    decorate(deco, pos, context, Material::OakLog, Material::StrippedOakLog)
}

/// Spruce mineshaft.
pub fn spruce(deco: &mut Decoration<'_, '_>, pos: VoxelPos, context: &Context) -> bool {
    decorate(deco, pos, context, Material::SpruceLog, Material::StrippedSpruceLog)
}

/// Grid offset of the rafters over column `(x, z)`, each in `0..=6`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn rafter_offsets(deco: &Decoration<'_, '_>, x: i32, z: i32) -> (i32, i32) {
    let (x, z) = (f64::from(x) / RAFTER_SCALE, f64::from(z) / RAFTER_SCALE);
    let dx = (deco.noise2(x, z) * 3.0 + 3.0).floor() as i32;
    let dz = (deco.noise2(z, x) * 3.0 + 3.0).floor() as i32;
    (dx, dz)
}

/// Places the rafter hanging from `ceiling`.
///
/// With both axes aligned a pillar runs down through open and liquid voxels
/// until it reaches rock. With one aligned a single beam is laid across the
/// other axis. Returns true if anything was placed.
pub fn raise_rafter(
    deco: &mut Decoration<'_, '_>,
    ceiling: VoxelPos,
    along_x: bool,
    along_z: bool,
    log: Material,
    stripped: Material,
) -> bool {
    let mut pillar = ceiling.down();
    let axis = match (along_x, along_z) {
        (true, true) => {
            let mut placed = false;
            loop {
                let state = deco.get(pillar);
                if !(state.is_empty() || state.is_liquid()) || pillar.y < deco.min_height() {
                    break;
                }
                let wood = timber(deco, pillar, log, stripped);
                if !deco.set(pillar, BlockState::oriented(wood, Axis::Y)) {
                    break;
                }
                placed = true;
                pillar = pillar.down();
            }
            return placed;
        }
        (true, false) => Axis::Z,
        (false, true) => Axis::X,
        (false, false) => return false,
    };
    let wood = timber(deco, pillar, log, stripped);
    deco.set(pillar, BlockState::oriented(wood, axis))
}

fn timber(deco: &Decoration<'_, '_>, pos: VoxelPos, log: Material, stripped: Material) -> Material {
    if deco.noise(pos, COARSE) < 0.4 {
        log
    } else {
        stripped
    }
}

fn decorate(
    deco: &mut Decoration<'_, '_>,
    pos: VoxelPos,
    context: &Context,
    log: Material,
    stripped: Material,
) -> bool {
    if context.is_ceiling() {
        ceiling(deco, pos, context, log, stripped);
    } else if context.is_floor() {
        floor(deco, pos, context);
    } else {
        wall(deco, pos, context);
    }
    true
}

fn ceiling(
    deco: &mut Decoration<'_, '_>,
    pos: VoxelPos,
    context: &Context,
    log: Material,
    stripped: Material,
) {
    let raft = context.depth < MAX_RAFTER_DEPTH && {
        let interval = deco.config().rafter_interval;
        let (dx, dz) = rafter_offsets(deco, pos.x, pos.z);
        let along_x = pos.x.rem_euclid(interval) == dx;
        let along_z = pos.z.rem_euclid(interval) == dz;
        raise_rafter(deco, pos, along_x, along_z, log, stripped)
    };
    if raft && context.depth > 2 {
        let below = pos.offset(0, -2, 0);
        if deco.is_empty(below) && deco.noise(below, FINE).abs() < 0.005 {
            deco.set(below, BlockState::hanging_lantern());
        }
    }
    let noise = deco.noise(pos, COARSE);
    let material = if noise > 0.5 {
        Material::Gravel
    } else if noise > 0.0 {
        Material::Stone
    } else if noise > -0.5 {
        Material::Andesite
    } else {
        Material::SprucePlanks
    };
    deco.set(pos, material);
}

fn floor(deco: &mut Decoration<'_, '_>, pos: VoxelPos, context: &Context) {
    if !context.is_horizontal() {
        let noise = deco.noise(pos, COARSE);
        let material = if noise < -0.8 {
            Material::CrackedStoneBricks
        } else if noise < -0.6 {
            Material::StoneBricks
        } else if noise < 0.0 {
            Material::Stone
        } else if noise > 0.6 {
            Material::MossyCobblestone
        } else {
            Material::Cobblestone
        };
        deco.set(pos, material);
        return;
    }
    let step = !context.exposes(Direction::Down)
        && context.exposes(Direction::Up)
        && deco.is_empty(pos.up());
    if !step {
        deco.set(pos, Material::PolishedAndesite);
        return;
    }
    let mut open = context.faces.horizontals();
    match (open.next(), open.next()) {
        (Some(face), None) => {
            let stairs = BlockState::directed(Material::CobblestoneStairs, face.opposite().direction());
            deco.set(pos, stairs);
        }
        (Some(_), Some(_)) => {
            deco.set(pos, Material::CobblestoneSlab);
        }
        _ => {
            deco.set(pos, Material::Cobblestone);
        }
    }
}

fn wall(deco: &mut Decoration<'_, '_>, pos: VoxelPos, context: &Context) {
    let speckle = deco.noise(pos, FINE);
    if !deco.below_bedrock_buffer(pos) {
        let material = if speckle > 0.5 {
            Material::MossyStoneBricks
        } else if speckle < -0.5 {
            Material::CrackedStoneBricks
        } else {
            let noise = deco.noise(pos, COARSE);
            if noise < 0.0 {
                Material::Stone
            } else if noise > 0.6 {
                Material::PolishedAndesite
            } else {
                Material::Andesite
            }
        };
        deco.set(pos, material);
    }
    if speckle <= 0.9 {
        return;
    }
    let open: Vec<_> = context.faces.horizontals().collect();
    let Some(face) = deco.rng().pick(&open).copied() else {
        return;
    };
    let torch = pos.neighbor(face.direction());
    if deco.is_empty(torch) {
        let material = if speckle > 0.95 {
            Material::WallTorch
        } else {
            Material::RedstoneWallTorch
        };
        deco.set(torch, BlockState::directed(material, face.direction()));
    }
}
