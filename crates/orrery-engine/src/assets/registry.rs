use serde::Serialize;
use crate::api::types::TextureId;
use crate::assets::manifest::AssetManifest;

/// Load state of a texture as last reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextureState {
    Pending,
    Ready,
    Failed,
}

#[derive(Debug, Clone)]
struct TextureEntry {
    name: String,
    url: String,
    state: TextureState,
}

/// A texture the host still has to fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextureRequest {
    pub id: u32,
    pub name: String,
    pub url: String,
}

/// Registry of named textures and their load state.
///
/// Rust never fetches anything: the host reads [`TextureRegistry::pending`],
/// loads each image, and reports back with `mark_ready` / `mark_failed`.
/// Reports may arrive at any time, in any order, or not at all.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture (or return the existing id for `name`).
    pub fn register(&mut self, name: &str, url: &str) -> TextureId {
        if let Some(id) = self.id_of(name) {
            return id;
        }
        self.entries.push(TextureEntry {
            name: name.to_owned(),
            url: url.to_owned(),
            state: TextureState::Pending,
        });
        TextureId(self.entries.len() as u32 - 1)
    }

    /// Look up a texture by name.
    pub fn id_of(&self, name: &str) -> Option<TextureId> {
        self.entries
            .iter()
            .position(|e| e.name == name)
            .map(|i| TextureId(i as u32))
    }

    pub fn state(&self, id: TextureId) -> Option<TextureState> {
        self.entries.get(id.0 as usize).map(|e| e.state)
    }

    pub fn url(&self, id: TextureId) -> Option<&str> {
        self.entries.get(id.0 as usize).map(|e| e.url.as_str())
    }

    pub fn is_ready(&self, id: TextureId) -> bool {
        self.state(id) == Some(TextureState::Ready)
    }

    /// Host finished loading. Unknown ids are ignored.
    pub fn mark_ready(&mut self, id: TextureId) {
        match self.entries.get_mut(id.0 as usize) {
            Some(entry) => {
                entry.state = TextureState::Ready;
                log::info!("texture '{}' ready", entry.name);
            }
            None => log::debug!("texture ready for unknown id {}", id.0),
        }
    }

    /// Host failed to load. A texture that already loaded stays ready.
    pub fn mark_failed(&mut self, id: TextureId) {
        match self.entries.get_mut(id.0 as usize) {
            Some(entry) if entry.state != TextureState::Ready => {
                entry.state = TextureState::Failed;
                log::warn!("texture '{}' failed to load from {}; using fallback", entry.name, entry.url);
            }
            Some(_) => {}
            None => log::debug!("texture failure for unknown id {}", id.0),
        }
    }

    /// Override URLs from a manifest. Textures whose URL changes go back to pending.
    /// Returns how many entries changed.
    pub fn apply_manifest(&mut self, manifest: &AssetManifest) -> usize {
        let mut changed = 0;
        for entry in &mut self.entries {
            let Some(desc) = manifest.textures.get(&entry.name) else { continue };
            if desc.url != entry.url {
                entry.url = desc.url.clone();
                entry.state = TextureState::Pending;
                changed += 1;
            }
        }
        changed
    }

    /// Textures the host has not reported on yet.
    pub fn pending(&self) -> Vec<TextureRequest> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.state == TextureState::Pending)
            .map(|(i, e)| TextureRequest {
                id: i as u32,
                name: e.name.clone(),
                url: e.url.clone(),
            })
            .collect()
    }

    /// JSON array of pending requests for the host.
    pub fn pending_json(&self) -> String {
        serde_json::to_string(&self.pending()).unwrap_or_else(|e| {
            log::error!("texture request serialization failed: {}", e);
            "[]".to_owned()
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
