//! Asset loading for HUD widgets
//!
//! Widgets ask an `AssetProvider` for their textures and fonts instead of
//! touching SDL2 directly. In the game that provider is `SdlAssets`; tests use
//! an in-memory provider that can be told to fail.

use crate::error::HeartError;
use crate::text::BitmapFont;
use log::debug;
use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Supplies the heart icon texture and the label font
pub trait AssetProvider {
    type Texture;

    /// Loads a texture. Every call returns a fresh texture owned by the caller.
    fn load_texture(&self, path: &Path) -> Result<Self::Texture, HeartError>;

    /// Loads a font, or the built-in font when `path` is `None`.
    ///
    /// Fonts are shared between widgets, so implementations should hand out
    /// the same `Rc` for the same path.
    fn load_font(&self, path: Option<&Path>) -> Result<Rc<BitmapFont>, HeartError>;
}

/// Loads each font once and shares it afterwards
#[derive(Debug, Default)]
pub struct FontCache {
    builtin: RefCell<Option<Rc<BitmapFont>>>,
    loaded: RefCell<HashMap<PathBuf, Rc<BitmapFont>>>,
}

impl FontCache {
    pub fn new() -> Self {
        FontCache::default()
    }

    pub fn get_or_load(&self, path: Option<&Path>) -> Result<Rc<BitmapFont>, HeartError> {
        let Some(path) = path else {
            let font = self
                .builtin
                .borrow_mut()
                .get_or_insert_with(|| Rc::new(BitmapFont::builtin()))
                .clone();
            return Ok(font);
        };

        if let Some(font) = self.loaded.borrow().get(path) {
            return Ok(Rc::clone(font));
        }

        let font = Rc::new(BitmapFont::load_from_file(path)?);
        debug!("Loaded font {}", path.display());
        self.loaded
            .borrow_mut()
            .insert(path.to_path_buf(), Rc::clone(&font));
        Ok(font)
    }

    /// Number of fonts loaded from disk so far
    #[cfg(test)]
    pub(crate) fn loaded_count(&self) -> usize {
        self.loaded.borrow().len()
    }
}

/// SDL2-backed asset provider
///
/// Textures borrow the `TextureCreator`, so they can't outlive it.
pub struct SdlAssets<'a> {
    texture_creator: &'a TextureCreator<WindowContext>,
    fonts: FontCache,
}

impl<'a> SdlAssets<'a> {
    pub fn new(texture_creator: &'a TextureCreator<WindowContext>) -> Self {
        SdlAssets {
            texture_creator,
            fonts: FontCache::new(),
        }
    }
}

impl<'a> AssetProvider for SdlAssets<'a> {
    type Texture = Texture<'a>;

    fn load_texture(&self, path: &Path) -> Result<Texture<'a>, HeartError> {
        self.texture_creator
            .load_texture(path)
            .map_err(|e| HeartError::asset(path.display().to_string(), e))
    }

    fn load_font(&self, path: Option<&Path>) -> Result<Rc<BitmapFont>, HeartError> {
        self.fonts.get_or_load(path)
    }
}
