use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Asset manifest describing the textures a scene may use.
/// Loaded from JSON at runtime; entries override the URLs the game registered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Named textures: name → where to fetch it.
    #[serde(default)]
    pub textures: HashMap<String, TextureDescriptor>,
}

/// Describes a single remote texture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Absolute or page-relative URL of the image.
    pub url: String,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_manifest_with_textures() {
        let json = r#"{
            "textures": {
                "sun": { "url": "assets/sun.jpg" }
            }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.textures.len(), 1);
        assert_eq!(manifest.textures["sun"].url, "assets/sun.jpg");
    }

    #[test]
    fn empty_object_is_an_empty_manifest() {
        let manifest = AssetManifest::from_json("{}").unwrap();
        assert!(manifest.textures.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(AssetManifest::from_json("{ textures: ").is_err());
        assert!(AssetManifest::from_json(r#"{ "textures": { "sun": {} } }"#).is_err());
    }
}
