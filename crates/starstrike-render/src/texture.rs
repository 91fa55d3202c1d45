//! Texture loading.
//!
//! A failed load is never fatal: the adapter logs it and falls back to an
//! untextured mesh.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Opaque reference to a loaded texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureHandle {
    pub id: u32,
    pub path: PathBuf,
    /// Size of the encoded image in bytes.
    pub byte_len: u64,
}

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("texture not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read texture {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("texture {} is empty", .0.display())]
    Empty(PathBuf),
}

/// Source of textures for the adapter.
pub trait TextureLoader {
    fn load(&mut self, path: &Path) -> Result<TextureHandle, TextureError>;
}

/// Loads textures from files under an asset root.
#[derive(Debug)]
pub struct FsTextureLoader {
    root: PathBuf,
    next_id: u32,
}

impl FsTextureLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            next_id: 0,
        }
    }
}

impl TextureLoader for FsTextureLoader {
    fn load(&mut self, path: &Path) -> Result<TextureHandle, TextureError> {
        let full = self.root.join(path);
        let metadata = std::fs::metadata(&full).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                TextureError::NotFound(full.clone())
            } else {
                TextureError::Io {
                    path: full.clone(),
                    source,
                }
            }
        })?;

        if metadata.len() == 0 {
            return Err(TextureError::Empty(full));
        }

        let id = self.next_id;
        self.next_id += 1;
        log::debug!("loaded texture #{} from {}", id, full.display());

        Ok(TextureHandle {
            id,
            path: full,
            byte_len: metadata.len(),
        })
    }
}
