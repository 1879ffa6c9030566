//! # Materials
//!
//! The closed set of materials the decorator reads and writes, plus the rich
//! block state (orientation, facing, halves) some of them carry.
//!
//! Material names serialise as `snake_case` so configuration files can list
//! them (`replaceable = ["stone", "tuff"]`).

use serde::{Deserialize, Serialize};

use crate::direction::{Axis, Direction};

/// Material kinds known to the cave decorator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u16)]
pub enum Material {
    // --- empty and liquid ---
    /// Open air.
    Air = 0,
    /// Air generated inside caves.
    CaveAir,
    /// Water.
    Water,
    /// Lava.
    Lava,

    // --- natural stone family ---
    /// Stone.
    Stone,
    /// Andesite.
    Andesite,
    /// Diorite.
    Diorite,
    /// Granite.
    Granite,
    /// Dirt.
    Dirt,
    /// Gravel.
    Gravel,
    /// Deepslate.
    Deepslate,
    /// Tuff.
    Tuff,
    /// Bedrock.
    Bedrock,

    // --- ores ---
    /// Coal ore.
    CoalOre,
    /// Coal ore in deepslate.
    DeepslateCoalOre,
    /// Iron ore.
    IronOre,
    /// Iron ore in deepslate.
    DeepslateIronOre,
    /// Copper ore.
    CopperOre,
    /// Copper ore in deepslate.
    DeepslateCopperOre,
    /// Redstone ore.
    RedstoneOre,
    /// Redstone ore in deepslate.
    DeepslateRedstoneOre,
    /// Diamond ore.
    DiamondOre,
    /// Diamond ore in deepslate.
    DeepslateDiamondOre,
    /// Gold ore.
    GoldOre,
    /// Gold ore in deepslate.
    DeepslateGoldOre,
    /// Lapis lazuli ore.
    LapisOre,
    /// Lapis lazuli ore in deepslate.
    DeepslateLapisOre,

    // --- cold ---
    /// Snow block.
    SnowBlock,
    /// Packed ice.
    PackedIce,
    /// Ice.
    Ice,

    // --- desert and mesa ---
    /// Bone block.
    BoneBlock,
    /// Sand.
    Sand,
    /// Sandstone.
    Sandstone,
    /// Smooth sandstone.
    SmoothSandstone,
    /// Cactus.
    Cactus,
    /// Dead bush.
    DeadBush,
    /// Red sand.
    RedSand,
    /// Red sandstone.
    RedSandstone,
    /// Terracotta.
    Terracotta,
    /// Red terracotta.
    RedTerracotta,
    /// Orange terracotta.
    OrangeTerracotta,
    /// Yellow terracotta.
    YellowTerracotta,
    /// White terracotta.
    WhiteTerracotta,
    /// Light gray terracotta.
    LightGrayTerracotta,
    /// Brown terracotta.
    BrownTerracotta,

    // --- masonry ---
    /// Cobblestone.
    Cobblestone,
    /// Mossy cobblestone.
    MossyCobblestone,
    /// Cobblestone stairs.
    CobblestoneStairs,
    /// Cobblestone slab.
    CobblestoneSlab,
    /// Stone bricks.
    StoneBricks,
    /// Mossy stone bricks.
    MossyStoneBricks,
    /// Cracked stone bricks.
    CrackedStoneBricks,
    /// Polished andesite.
    PolishedAndesite,
    /// Obsidian.
    Obsidian,
    /// Prismarine.
    Prismarine,
    /// Dark prismarine.
    DarkPrismarine,
    /// Prismarine bricks.
    PrismarineBricks,
    /// Sea lantern.
    SeaLantern,
    /// Glowstone.
    Glowstone,
    /// Clay.
    Clay,
    /// Slime block.
    SlimeBlock,

    // --- soil ---
    /// Grass block.
    GrassBlock,
    /// Dirt path.
    DirtPath,
    /// Coarse dirt.
    CoarseDirt,
    /// Mycelium.
    Mycelium,

    // --- wood ---
    /// Oak log.
    OakLog,
    /// Stripped oak log.
    StrippedOakLog,
    /// Oak wood (bark on all sides).
    OakWood,
    /// Oak leaves.
    OakLeaves,
    /// Spruce log.
    SpruceLog,
    /// Stripped spruce log.
    StrippedSpruceLog,
    /// Spruce planks.
    SprucePlanks,
    /// Jungle log.
    JungleLog,
    /// Jungle leaves.
    JungleLeaves,
    /// Oak fence.
    OakFence,
    /// Bee nest.
    BeeNest,

    // --- fungi ---
    /// Small brown mushroom.
    BrownMushroom,
    /// Small red mushroom.
    RedMushroom,
    /// Brown mushroom block.
    BrownMushroomBlock,
    /// Red mushroom block.
    RedMushroomBlock,
    /// Mushroom stem.
    MushroomStem,

    // --- plants ---
    /// Vine.
    Vine,
    /// Short grass.
    ShortGrass,
    /// Two-tall grass.
    TallGrass,
    /// Seagrass.
    Seagrass,
    /// Lily pad.
    LilyPad,
    /// Dandelion.
    Dandelion,
    /// Poppy.
    Poppy,
    /// Blue orchid.
    BlueOrchid,
    /// Allium.
    Allium,
    /// Azure bluet.
    AzureBluet,
    /// Red tulip.
    RedTulip,
    /// Orange tulip.
    OrangeTulip,
    /// White tulip.
    WhiteTulip,
    /// Pink tulip.
    PinkTulip,
    /// Oxeye daisy.
    OxeyeDaisy,
    /// Cornflower.
    Cornflower,
    /// Lily of the valley.
    LilyOfTheValley,
    /// Wither rose.
    WitherRose,
    /// Lilac (two tall).
    Lilac,
    /// Rose bush (two tall).
    RoseBush,
    /// Peony (two tall).
    Peony,
    /// Wheat crop.
    Wheat,
    /// Carrot crop.
    Carrots,
    /// Potato crop.
    Potatoes,

    // --- fixtures ---
    /// Rail.
    Rail,
    /// Torch attached to a wall.
    WallTorch,
    /// Redstone torch attached to a wall.
    RedstoneWallTorch,
    /// Lantern.
    Lantern,
}

impl Material {
    /// The replaceable set used when no configuration overrides it.
    pub const DEFAULT_REPLACEABLE: [Self; 12] = [
        Self::Stone,
        Self::Andesite,
        Self::Diorite,
        Self::Granite,
        Self::Dirt,
        Self::Gravel,
        Self::CoalOre,
        Self::IronOre,
        Self::DeepslateCoalOre,
        Self::DeepslateIronOre,
        Self::Deepslate,
        Self::Tuff,
    ];

    /// Returns true for air of any kind.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Air | Self::CaveAir)
    }

    /// Returns true for flowing or still liquids.
    #[inline]
    #[must_use]
    pub const fn is_liquid(self) -> bool {
        matches!(self, Self::Water | Self::Lava)
    }

    /// Returns true for flowers, including the two-tall ones.
    #[must_use]
    pub const fn is_flower(self) -> bool {
        matches!(
            self,
            Self::Dandelion
                | Self::Poppy
                | Self::BlueOrchid
                | Self::Allium
                | Self::AzureBluet
                | Self::RedTulip
                | Self::OrangeTulip
                | Self::WhiteTulip
                | Self::PinkTulip
                | Self::OxeyeDaisy
                | Self::Cornflower
                | Self::LilyOfTheValley
                | Self::WitherRose
                | Self::Lilac
                | Self::RoseBush
                | Self::Peony
        )
    }

    /// Returns true for plants occupying two stacked voxels.
    #[must_use]
    pub const fn is_two_tall(self) -> bool {
        matches!(self, Self::Lilac | Self::RoseBush | Self::Peony | Self::TallGrass)
    }

    /// Thin, non-occluding obstructions (fences, flowers, crops, rails).
    ///
    /// The surface scan looks through these when searching for open cave
    /// space.
    #[must_use]
    pub const fn is_soft(self) -> bool {
        self.is_flower()
            || matches!(
                self,
                Self::OakFence | Self::Wheat | Self::Carrots | Self::Potatoes | Self::Rail
            )
    }

    /// Returns true for materials an entity can walk through.
    #[must_use]
    pub const fn is_passable(self) -> bool {
        self.is_empty()
            || self.is_flower()
            || matches!(
                self,
                Self::ShortGrass
                    | Self::TallGrass
                    | Self::DeadBush
                    | Self::BrownMushroom
                    | Self::RedMushroom
                    | Self::Seagrass
                    | Self::LilyPad
                    | Self::Vine
                    | Self::WallTorch
                    | Self::RedstoneWallTorch
                    | Self::Rail
                    | Self::Wheat
                    | Self::Carrots
                    | Self::Potatoes
            )
    }

    /// Returns true for full, collidable blocks.
    #[inline]
    #[must_use]
    pub const fn is_solid(self) -> bool {
        !self.is_liquid() && !self.is_passable()
    }
}

/// Upper or lower half of a two-voxel block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Half {
    /// Lower voxel.
    Bottom,
    /// Upper voxel.
    Top,
}

/// A material plus the optional properties written with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockState {
    /// Material kind.
    pub material: Material,
    /// Orientation of logs, pillars and bone blocks.
    pub axis: Option<Axis>,
    /// Facing of stairs, torches, nests and vines.
    pub facing: Option<Direction>,
    /// Half of a two-voxel plant.
    pub half: Option<Half>,
    /// Lantern hangs from the block above.
    pub hanging: bool,
    /// Leaves placed by the decorator never decay.
    pub persistent: bool,
}

impl BlockState {
    /// Plain air.
    pub const AIR: Self = Self::new(Material::Air);

    /// Creates a state with no properties set.
    #[inline]
    #[must_use]
    pub const fn new(material: Material) -> Self {
        Self {
            material,
            axis: None,
            facing: None,
            half: None,
            hanging: false,
            persistent: false,
        }
    }

    /// Oriented along `axis`.
    #[inline]
    #[must_use]
    pub const fn oriented(material: Material, axis: Axis) -> Self {
        let mut state = Self::new(material);
        state.axis = Some(axis);
        state
    }

    /// Facing `direction`.
    #[inline]
    #[must_use]
    pub const fn directed(material: Material, direction: Direction) -> Self {
        let mut state = Self::new(material);
        state.facing = Some(direction);
        state
    }

    /// Upper half of a two-tall plant.
    #[inline]
    #[must_use]
    pub const fn upper(material: Material) -> Self {
        let mut state = Self::new(material);
        state.half = Some(Half::Top);
        state
    }

    /// Lower half of a two-tall plant.
    #[inline]
    #[must_use]
    pub const fn lower(material: Material) -> Self {
        let mut state = Self::new(material);
        state.half = Some(Half::Bottom);
        state
    }

    /// Lantern hanging from the ceiling.
    #[inline]
    #[must_use]
    pub const fn hanging_lantern() -> Self {
        let mut state = Self::new(Material::Lantern);
        state.hanging = true;
        state
    }

    /// Leaves that will not decay.
    #[inline]
    #[must_use]
    pub const fn leaves(material: Material) -> Self {
        let mut state = Self::new(material);
        state.persistent = true;
        state
    }
}

impl Default for BlockState {
    fn default() -> Self {
        Self::AIR
    }
}

impl From<Material> for BlockState {
    fn from(material: Material) -> Self {
        Self::new(material)
    }
}
