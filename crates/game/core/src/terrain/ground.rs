//! Ground cover: flooring, grass and decorative plants.

/// Translation key announced for grass tiles.
pub const GRASS_NAME_KEY: &str = "tile-grass-name";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flooring {
    pub is_pathway: bool,
    pub is_stepping_stone: bool,
}

impl Flooring {
    pub fn describe(&self) -> &'static str {
        if self.is_pathway {
            "Pathway"
        } else if self.is_stepping_stone {
            "Stepping Stone"
        } else {
            "Flooring"
        }
    }
}

/// Decorative plant, identified only by its texture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CosmeticPlant {
    pub texture_name: String,
}

impl CosmeticPlant {
    pub fn new(texture_name: impl Into<String>) -> Self {
        Self {
            texture_name: texture_name.into(),
        }
    }

    /// Texture name lower-cased, minus "terrain"/"feature", whitespace collapsed.
    pub fn describe(&self) -> String {
        self.texture_name
            .to_lowercase()
            .replace("terrain", "")
            .replace("feature", "")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
