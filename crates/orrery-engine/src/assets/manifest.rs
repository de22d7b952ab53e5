use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Asset manifest describing the textures a game wants loaded.
/// Loaded from a JSON file at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Named textures: key (as used by draw commands) → descriptor.
    #[serde(default)]
    pub textures: BTreeMap<String, TextureDescriptor>,
}

/// Describes a single image asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Relative path to the image file (e.g., "planets/earth.png").
    pub path: String,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resolve every texture path against `base_url`.
    /// Yields `(key, url)` pairs in key order.
    pub fn texture_urls<'a>(&'a self, base_url: &'a str) -> impl Iterator<Item = (&'a str, String)> + 'a {
        self.textures.iter().map(move |(key, desc)| {
            let url = if base_url.is_empty() {
                desc.path.clone()
            } else {
                format!("{}/{}", base_url.trim_end_matches('/'), desc.path.trim_start_matches('/'))
            };
            (key.as_str(), url)
        })
    }
}
