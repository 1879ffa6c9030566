//! Riverbed caves: clay, sand and dirt underfoot, clay and diorite above.

use super::{Decoration, COARSE};
use crate::context::Context;
use crate::material::Material;
use crate::world::VoxelPos;

/// Decorates a river surface.
pub fn decorate(deco: &mut Decoration<'_, '_>, pos: VoxelPos, context: &Context) -> bool {
    let noise = deco.noise(pos, COARSE);
    let material = if context.is_floor() {
        if noise < -0.5 {
            Material::Clay
        } else if noise > 0.5 {
            Material::Sand
        } else {
            Material::Dirt
        }
    } else if deco.below_bedrock_buffer(pos) {
        return false;
    } else if noise < 0.0 {
        Material::Clay
    } else {
        Material::Diorite
    };
    deco.set(pos, material);
    true
}
