//! Rendering module
//!
//! The game draws through the `Renderer` trait: textured quads with a world
//! transform, plus raw triangle lists for bitmap text. Textures come from a
//! `TextureLoader`; failing to load one is fatal at startup.

pub mod recorder;
pub mod scene;
pub mod sprite;
pub mod text;
pub mod vertex;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use glam::Mat4;

use crate::error::{LanderError, Result};
pub use crate::sim::TextureHandle;

pub use recorder::{DrawCommand, RecordingRenderer};
pub use scene::{SceneTextures, render_frame};
pub use vertex::{UvRect, Vertex};

/// Texture sampling filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterMode {
    Nearest,
    Linear,
}

/// A rendering surface
pub trait Renderer {
    /// Start a new frame
    fn clear(&mut self);

    /// Draw the unit quad (-0.5..0.5) under `transform`, sampling `uv` of `texture`
    fn draw_quad(&mut self, transform: Mat4, texture: TextureHandle, uv: UvRect);

    /// Draw a triangle list under `transform`
    fn draw_triangles(&mut self, transform: Mat4, vertices: &[Vertex], texture: TextureHandle);

    /// Finish the frame
    fn present(&mut self);
}

/// Maps image files to texture handles
pub trait TextureLoader {
    fn load(&mut self, path: &Path, filter: FilterMode) -> Result<TextureHandle>;
}

/// Handle registry: one stable handle per (path, filter) pair.
///
/// With an asset root set, each path must name a readable, non-empty file
/// under that root; otherwise handles are issued without touching disk.
#[derive(Debug, Default)]
pub struct TextureCache {
    asset_root: Option<PathBuf>,
    handles: HashMap<(PathBuf, FilterMode), TextureHandle>,
    next_id: u32,
}

impl TextureCache {
    /// Registry that never touches the filesystem
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry that checks files under `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            asset_root: Some(root.into()),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    fn verify(&self, path: &Path) -> Result<()> {
        let Some(root) = &self.asset_root else {
            return Ok(());
        };
        let full = root.join(path);
        let meta = std::fs::metadata(&full).map_err(|e| LanderError::TextureLoad {
            path: full.clone(),
            reason: e.to_string(),
        })?;
        if !meta.is_file() || meta.len() == 0 {
            return Err(LanderError::TextureLoad {
                path: full,
                reason: "not a non-empty file".to_string(),
            });
        }
        Ok(())
    }
}

impl TextureLoader for TextureCache {
    fn load(&mut self, path: &Path, filter: FilterMode) -> Result<TextureHandle> {
        let key = (path.to_path_buf(), filter);
        if let Some(handle) = self.handles.get(&key) {
            return Ok(*handle);
        }

        self.verify(path)?;

        self.next_id += 1;
        let handle = TextureHandle(self.next_id);
        log::debug!("Texture {} -> {:?} ({:?})", path.display(), handle, filter);
        self.handles.insert(key, handle);
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_dedupes_paths() {
        let mut cache = TextureCache::new();
        let a = cache.load(Path::new("a.png"), FilterMode::Nearest).unwrap();
        let again = cache.load(Path::new("a.png"), FilterMode::Nearest).unwrap();
        let linear = cache.load(Path::new("a.png"), FilterMode::Linear).unwrap();
        let b = cache.load(Path::new("b.png"), FilterMode::Nearest).unwrap();

        assert_eq!(a, again);
        assert_ne!(a, linear);
        assert_ne!(a, b);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_missing_asset_is_fatal() {
        let root = std::env::temp_dir().join(format!("lunar_lander_assets_{}", std::process::id()));
        let mut cache = TextureCache::with_root(&root);
        let result = cache.load(Path::new("nope.png"), FilterMode::Nearest);
        assert!(matches!(result, Err(LanderError::TextureLoad { .. })));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_existing_asset_loads() {
        let root = std::env::temp_dir().join(format!(
            "lunar_lander_assets_ok_{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("ship.png"), [0x89, b'P', b'N', b'G']).unwrap();

        let mut cache = TextureCache::with_root(&root);
        let handle = cache.load(Path::new("ship.png"), FilterMode::Nearest);
        let _ = std::fs::remove_dir_all(&root);
        assert!(handle.is_ok());
    }
}
