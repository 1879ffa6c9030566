//! Meadow caves for plains, forests and savannas: grass and flowers on the
//! floor, earthy ceilings, and the occasional bee nest in a wall.

use super::{Decoration, COARSE, FINE};
use crate::context::Context;
use crate::deferred::DeferredAction;
use crate::material::{BlockState, Material};
use crate::world::{CreatureKind, VoxelPos};

/// Flowers by coarse-noise bucket, starting at bucket -8.
const FLOWERS: [Material; 17] = [
    Material::Dandelion,
    Material::Poppy,
    Material::BlueOrchid,
    Material::Allium,
    Material::AzureBluet,
    Material::RedTulip,
    Material::OrangeTulip,
    Material::WhiteTulip,
    Material::PinkTulip,
    Material::OxeyeDaisy,
    Material::Cornflower,
    Material::LilyOfTheValley,
    Material::Lilac,
    Material::RoseBush,
    Material::Peony,
    Material::TallGrass,
    Material::WitherRose,
];

/// Most bees leaving a fresh nest.
const MAX_BEES: u32 = 3;

/// Plant for a coarse noise sample, if any.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn flower_for(noise: f64) -> Option<Material> {
    let bucket = (noise * 10.0) as i32 + 8;
    usize::try_from(bucket)
        .ok()
        .and_then(|i| FLOWERS.get(i).copied())
}

/// Decorates a plains, forest or savanna surface.
pub fn decorate(deco: &mut Decoration<'_, '_>, pos: VoxelPos, context: &Context) -> bool {
    let noise = deco.noise(pos, COARSE);
    if context.is_floor() {
        deco.set(pos, Material::GrassBlock);
        plant(deco, pos.up(), context);
    } else if context.is_ceiling() {
        let material = if noise < 0.0 {
            Material::Dirt
        } else if noise > 0.5 {
            Material::CoarseDirt
        } else {
            Material::Granite
        };
        deco.set(pos, material);
    } else {
        if deco.below_bedrock_buffer(pos) {
            return false;
        }
        let material = if noise < 0.0 {
            Material::Sand
        } else if noise > 0.5 {
            Material::Andesite
        } else {
            Material::Stone
        };
        deco.set(pos, material);
        if deco.noise(pos, FINE) > 0.95 {
            nest(deco, pos, context);
        }
    }
    true
}

fn plant(deco: &mut Decoration<'_, '_>, above: VoxelPos, context: &Context) {
    if !deco.is_empty(above) {
        return;
    }
    let speckle = deco.noise(above, FINE);
    if speckle > 0.2 {
        let Some(flower) = flower_for(deco.noise(above, COARSE)) else {
            return;
        };
        if !flower.is_two_tall() {
            deco.set(above, flower);
            return;
        }
        let top = above.up();
        if context.depth >= 3 && deco.is_empty(top) && deco.permits(top) {
            deco.set(above, BlockState::lower(flower));
            deco.set(top, BlockState::upper(flower));
        }
    } else if (-0.5..-0.2).contains(&speckle) {
        deco.set(above, Material::ShortGrass);
    }
}

fn nest(deco: &mut Decoration<'_, '_>, pos: VoxelPos, context: &Context) {
    let open: Vec<_> = context.faces.horizontals().collect();
    let Some(face) = deco.rng().pick(&open).copied() else {
        return;
    };
    deco.set(pos, BlockState::directed(Material::BeeNest, face.direction()));
    let entrance = pos.neighbor(face.direction());
    if !deco.permits(entrance) {
        return;
    }
    let bees = deco.run_length(MAX_BEES, MAX_BEES);
    for _ in 0..bees {
        deco.defer(DeferredAction::SpawnCreature {
            kind: CreatureKind::Bee,
            at: entrance,
        });
    }
}
