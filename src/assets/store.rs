use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::assets::decode::{ResizeFilter, decode_sprite};
use crate::foundation::core::Resolution;
use crate::foundation::error::{FaceError, FaceResult};
use crate::render::frame::PixelBuffer;

/// Turn a sprite file name from an avatar config into the key the store caches it under.
///
/// Separators become `/` and `.` segments are dropped. Names must stay inside the resource
/// directory: rooted names, drive prefixes and `..` are rejected.
pub fn normalize_rel_path(source: &str) -> FaceResult<String> {
    let unified = source.trim().replace('\\', "/");
    let rooted = unified.starts_with('/') || unified.as_bytes().get(1) == Some(&b':');

    let mut segments = Vec::new();
    for part in unified.split('/').filter(|p| !p.is_empty() && *p != ".") {
        if part == ".." {
            return Err(FaceError::validation(format!(
                "sprite '{source}' escapes the resource directory"
            )));
        }
        segments.push(part);
    }

    if rooted || segments.is_empty() {
        return Err(FaceError::validation(format!(
            "sprite '{source}' must name a file inside the resource directory"
        )));
    }
    Ok(segments.join("/"))
}

/// Loads sprites from a resource directory, decoding each file at most once.
///
/// Every sprite is resized to the store's working resolution on load, so anything handed out
/// can be composited with anything else from the same store.
#[derive(Debug)]
pub struct SpriteStore {
    root: PathBuf,
    resolution: Resolution,
    filter: ResizeFilter,
    sprites: BTreeMap<String, Arc<PixelBuffer>>,
    decodes: BTreeMap<String, u32>,
}

impl SpriteStore {
    /// Create an empty store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>, resolution: Resolution, filter: ResizeFilter) -> Self {
        Self {
            root: root.into(),
            resolution,
            filter,
            sprites: BTreeMap::new(),
            decodes: BTreeMap::new(),
        }
    }

    /// Directory sprite paths are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Working resolution sprites are fitted to.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Load `source` (relative to the root), reusing the decoded sprite if already loaded.
    pub fn load(&mut self, source: &str) -> FaceResult<Arc<PixelBuffer>> {
        let key = normalize_rel_path(source)?;
        if let Some(sprite) = self.sprites.get(&key) {
            return Ok(Arc::clone(sprite));
        }

        let path = self.root.join(&key);
        let bytes = std::fs::read(&path).map_err(|e| FaceError::resource_load(&path, e))?;
        let sprite = decode_sprite(&bytes, self.resolution, self.filter)
            .map_err(|e| FaceError::resource_load(&path, e))?;
        tracing::debug!(sprite = %key, resolution = %self.resolution, "decoded sprite");

        let sprite = Arc::new(sprite);
        *self.decodes.entry(key.clone()).or_insert(0) += 1;
        self.sprites.insert(key, Arc::clone(&sprite));
        Ok(sprite)
    }

    /// Number of times `source` was decoded from disk.
    pub fn decode_count(&self, source: &str) -> u32 {
        normalize_rel_path(source)
            .ok()
            .and_then(|key| self.decodes.get(&key).copied())
            .unwrap_or(0)
    }

    /// Number of distinct sprites held.
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Whether no sprite has been loaded yet.
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
