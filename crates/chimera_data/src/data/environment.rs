use serde::{Deserialize, Serialize};

/// Biome the offspring is expected to grow up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Biome {
    #[default]
    Grassland,
    Forest,
    Desert,
    Tundra,
    Volcanic,
    Ocean,
    Mystic,
}

impl Biome {
    pub const ALL: [Biome; 7] = [
        Biome::Grassland,
        Biome::Forest,
        Biome::Desert,
        Biome::Tundra,
        Biome::Volcanic,
        Biome::Ocean,
        Biome::Mystic,
    ];
}

/// Seasonal signal feeding mutation pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Season {
    Spring,
    #[default]
    Summer,
    Autumn,
    Winter,
}
