//! Mycelium floors, mushroom-block ceilings lit by glowstone, stem and cap
//! walls. Large mushrooms are grown after the pass; mooshrooms wander in.

use super::{Decoration, COARSE, FINE};
use crate::context::Context;
use crate::deferred::DeferredAction;
use crate::material::Material;
use crate::world::{CreatureKind, PlantKind, VoxelPos};

/// Decorates a mushroom-field surface.
pub fn decorate(deco: &mut Decoration<'_, '_>, pos: VoxelPos, context: &Context) -> bool {
    let noise = deco.noise(pos, COARSE);
    if context.is_floor() {
        deco.set(pos, Material::Mycelium);
        let above = pos.up();
        if !deco.is_empty(above) || !deco.permits(above) {
            return true;
        }
        let fine = deco.noise(above, FINE);
        if fine > 0.6 {
            let kind = if noise < 0.1 {
                PlantKind::BrownMushroom
            } else {
                PlantKind::RedMushroom
            };
            deco.defer(DeferredAction::GrowPlant {
                kind,
                at: above,
                fallback: kind.fallback(),
            });
        } else if fine < -0.8 {
            deco.defer(DeferredAction::SpawnCreature {
                kind: CreatureKind::Mooshroom,
                at: above,
            });
        } else if fine > 0.3 {
            let cap = if noise < 0.0 {
                Material::BrownMushroom
            } else {
                Material::RedMushroom
            };
            deco.set(above, cap);
        }
    } else if context.is_ceiling() {
        let material = if deco.noise(pos, FINE) < -0.5 {
            Material::Glowstone
        } else if noise < 0.0 {
            Material::BrownMushroomBlock
        } else {
            Material::RedMushroomBlock
        };
        deco.set(pos, material);
    } else {
        if deco.below_bedrock_buffer(pos) {
            return false;
        }
        let material = if noise < -0.25 {
            Material::BrownMushroomBlock
        } else if noise > 0.25 {
            Material::RedMushroomBlock
        } else {
            Material::MushroomStem
        };
        deco.set(pos, material);
    }
    true
}
