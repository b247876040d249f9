//! Texture cache
//!
//! Skin images are shared between many widgets. The cache key is the full
//! `(path, type, color)` triple since colorized copies of one image differ by
//! tint alone.

use super::{Texture, TextureType};
use crate::theme::color::Rgb;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Result of uploading one image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadedImage {
    pub tex_num: u32,
    pub width: u32,
    pub height: u32,
}

/// Uploads images to the rendering backend
///
/// Implemented by the SDL backend in production and by a counting fake in tests.
pub trait TextureLoader {
    fn load_texture(&mut self, path: &Path, typ: TextureType, color: Rgb) -> Result<LoadedImage, String>;

    fn unload(&mut self, tex_num: u32);
}

type CacheKey = (PathBuf, TextureType, u32);

/// Deduplicating texture cache
#[derive(Debug, Default)]
pub struct TextureManager {
    cache: HashMap<CacheKey, Texture>,
    /// Uncached textures still owned by the backend
    uncached: Vec<u32>,
}

impl TextureManager {
    pub fn new() -> Self {
        TextureManager::default()
    }

    /// Returns the cached texture for `(path, typ, color)`, loading it on first use
    ///
    /// A failed load logs a warning and yields an unloaded texture. Failures are
    /// not cached so a later call retries.
    pub fn get_texture(
        &mut self,
        loader: &mut dyn TextureLoader,
        path: &Path,
        typ: TextureType,
        color: Rgb,
    ) -> Texture {
        let key = (path.to_path_buf(), typ, color.to_packed());
        if let Some(tex) = self.cache.get(&key) {
            return tex.clone();
        }

        let tex = Self::upload(loader, path, typ, color);
        if tex.is_loaded() {
            self.cache.insert(key, tex.clone());
        }
        tex
    }

    /// Loads a private copy that bypasses the cache
    pub fn load_texture(
        &mut self,
        loader: &mut dyn TextureLoader,
        path: &Path,
        typ: TextureType,
        color: Rgb,
    ) -> Texture {
        let tex = Self::upload(loader, path, typ, color);
        if tex.is_loaded() {
            self.uncached.push(tex.tex_num);
        }
        tex
    }

    fn upload(loader: &mut dyn TextureLoader, path: &Path, typ: TextureType, color: Rgb) -> Texture {
        match loader.load_texture(path, typ, color) {
            Ok(image) => {
                log::debug!("Loaded {} texture {} as #{}", typ.as_str(), path.display(), image.tex_num);
                Texture {
                    tex_num: image.tex_num,
                    name: Some(path.to_path_buf()),
                    w: image.width as f32,
                    h: image.height as f32,
                    tex_w: image.width as f32,
                    tex_h: image.height as f32,
                    col: if typ == TextureType::Colorized { color } else { Rgb::WHITE },
                    ..Texture::default()
                }
            }
            Err(e) => {
                log::warn!("Could not load texture {}: {}", path.display(), e);
                Texture::default()
            }
        }
    }

    /// Unloads every texture handed out so far (theme switch)
    pub fn clear(&mut self, loader: &mut dyn TextureLoader) {
        for (_, tex) in self.cache.drain() {
            loader.unload(tex.tex_num);
        }
        for tex_num in self.uncached.drain(..) {
            loader.unload(tex_num);
        }
    }

    #[cfg(test)]
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }
}
