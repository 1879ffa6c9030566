//! # Biome Types
//!
//! Semantic biome classes used to pick a decoration routine.
//!
//! Hosts usually know biomes by name (`"SNOWY_TAIGA"`, `"BADLANDS"`). The
//! keyword table below maps such names onto the closed [`BiomeType`]
//! enumeration. The decorator itself only ever sees the enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CaveError;

/// Semantic biome classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BiomeType {
    /// Snowy and frozen biomes.
    Cold = 0,
    /// Badlands.
    Mesa = 1,
    /// Savanna.
    Savanna = 2,
    /// Mushroom fields.
    Mushroom = 3,
    /// Desert.
    Desert = 4,
    /// Jungle.
    Jungle = 5,
    /// Oceans, beaches and shores.
    Ocean = 6,
    /// Mountains, hills and peaks.
    Mountain = 7,
    /// Swamps.
    Swamp = 8,
    /// Dark forest.
    DarkForest = 9,
    /// Taiga and other spruce biomes.
    Spruce = 10,
    /// Plains and meadows.
    Plains = 11,
    /// Forests.
    Forest = 12,
    /// Rivers.
    River = 13,
    /// Underground cave biomes; never decorated.
    Caves = 14,
    /// Nether biomes.
    Nether = 15,
    /// End biomes.
    End = 16,
    /// Deep dark.
    DeepDark = 17,
    /// Host-defined custom biomes.
    Custom = 18,
}

impl BiomeType {
    /// Number of biome types.
    pub const COUNT: usize = 19;

    /// All biome types in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Cold,
        Self::Mesa,
        Self::Savanna,
        Self::Mushroom,
        Self::Desert,
        Self::Jungle,
        Self::Ocean,
        Self::Mountain,
        Self::Swamp,
        Self::DarkForest,
        Self::Spruce,
        Self::Plains,
        Self::Forest,
        Self::River,
        Self::Caves,
        Self::Nether,
        Self::End,
        Self::DeepDark,
        Self::Custom,
    ];

    /// Index into per-type tables.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Keywords matched against upper-cased host biome names.
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Cold => &["SNOW", "ICE", "FROZEN"],
            Self::Mesa => &["BADLAND"],
            Self::Savanna => &["SAVANNA"],
            Self::Mushroom => &["MUSHROOM"],
            Self::Desert => &["DESERT"],
            Self::Jungle => &["JUNGLE"],
            Self::Ocean => &["OCEAN", "BEACH", "SHORE"],
            Self::Mountain => &["MOUNTAIN", "HILLS", "PEAKS"],
            Self::Swamp => &["SWAMP"],
            Self::DarkForest => &["DARK_FOREST"],
            Self::Spruce => &["TAIGA", "SPRUCE"],
            Self::Plains => &["PLAINS", "SUNFLOWER", "MEADOW"],
            Self::Forest => &["FOREST", "WOOD", "BIRCH", "CHERRY_GROVE"],
            Self::River => &["RIVER"],
            Self::Caves => &["CAVES"],
            Self::Nether => &["NETHER", "BASALT_DELTAS", "SOUL_SAND_VALLEY"],
            Self::End => &["END", "VOID"],
            Self::DeepDark => &["DEEP_DARK"],
            Self::Custom => &["CUSTOM"],
        }
    }

    /// Maps a host biome name onto a type.
    ///
    /// Every keyword of every type is tried in declaration order and the last
    /// match wins. A keyword found only inside a longer matching keyword does
    /// not count, so `"DARK_FOREST"` lands on [`BiomeType::DarkForest`] rather
    /// than [`BiomeType::Forest`]. Returns `None` when nothing matches.
    #[must_use]
    pub fn from_biome_name(name: &str) -> Option<Self> {
        let upper = name.to_ascii_uppercase();
        let hits: Vec<(Self, &str)> = Self::ALL
            .into_iter()
            .flat_map(|ty| {
                ty.keywords()
                    .iter()
                    .filter(|kw| upper.contains(**kw))
                    .map(move |kw| (ty, *kw))
            })
            .collect();
        hits.iter()
            .filter(|(_, kw)| {
                !hits
                    .iter()
                    .any(|(_, other)| other.len() > kw.len() && other.contains(kw))
            })
            .map(|(ty, _)| *ty)
            .last()
    }

    /// Every type whose keywords occur in `name`, in declaration order.
    ///
    /// More than one entry means the name is ambiguous; hosts can report
    /// those while loading their biome registry.
    pub fn matches(name: &str) -> impl Iterator<Item = Self> {
        let upper = name.to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .filter(move |ty| ty.keywords().iter().any(|kw| upper.contains(kw)))
    }

    /// Returns true for types the decorator leaves untouched.
    #[inline]
    #[must_use]
    pub const fn is_skipped(self) -> bool {
        matches!(self, Self::Caves)
    }

    /// Lower-case name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cold => "cold",
            Self::Mesa => "mesa",
            Self::Savanna => "savanna",
            Self::Mushroom => "mushroom",
            Self::Desert => "desert",
            Self::Jungle => "jungle",
            Self::Ocean => "ocean",
            Self::Mountain => "mountain",
            Self::Swamp => "swamp",
            Self::DarkForest => "dark_forest",
            Self::Spruce => "spruce",
            Self::Plains => "plains",
            Self::Forest => "forest",
            Self::River => "river",
            Self::Caves => "caves",
            Self::Nether => "nether",
            Self::End => "end",
            Self::DeepDark => "deep_dark",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for BiomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BiomeType {
    type Err = CaveError;

    /// Parses a type name case-insensitively (`"cold"`, `"DARK_FOREST"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CaveError::UnknownBiomeType(s.to_owned()))
    }
}
