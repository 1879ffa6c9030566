//! Badlands: red sand floors with dead bushes and cacti, red sandstone
//! ceilings, walls banded in terracotta.

use super::{desert, Decoration, COARSE, FINE};
use crate::context::Context;
use crate::material::Material;
use crate::world::VoxelPos;

/// Tallest cactus.
const MAX_CACTUS: u32 = 3;

/// Wall bands, bottom to top, repeating every seven voxels.
const BANDS: [Material; 7] = [
    Material::RedTerracotta,
    Material::OrangeTerracotta,
    Material::YellowTerracotta,
    Material::WhiteTerracotta,
    Material::LightGrayTerracotta,
    Material::BrownTerracotta,
    Material::Terracotta,
];

/// Terracotta band at height `y`.
#[must_use]
pub fn band(y: i32) -> Material {
    let index = usize::try_from(y.rem_euclid(7)).unwrap_or(0);
    BANDS[index]
}

/// Decorates a mesa surface.
pub fn decorate(deco: &mut Decoration<'_, '_>, pos: VoxelPos, context: &Context) -> bool {
    if context.is_floor() {
        if deco.noise(pos, COARSE) > 0.5 {
            deco.set(pos, Material::RedSandstone);
            return true;
        }
        deco.set(pos, Material::RedSand);
        let above = pos.up();
        if deco.is_empty(above) {
            let speckle = deco.noise(above, FINE);
            if speckle > 0.3 {
                deco.set(above, Material::DeadBush);
            } else if speckle < -0.4 {
                let len = deco.run_length(MAX_CACTUS, context.depth);
                desert::grow_cactus(deco, above, len);
            }
        }
    } else if context.is_ceiling() {
        deco.set(pos, Material::RedSandstone);
    } else {
        if deco.below_bedrock_buffer(pos) {
            return false;
        }
        deco.set(pos, band(pos.y));
    }
    true
}
