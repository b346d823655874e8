//! Test doubles for the render and asset seams (no SDL2 context needed)

use crate::assets::{AssetProvider, FontCache};
use crate::error::HeartError;
use crate::render::RenderTarget;
use crate::text::BitmapFont;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use std::cell::Cell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Texture handed out by `MemoryAssets`: just remembers where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeTexture {
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Fill(Rect, Color),
    Texture(PathBuf, Rect),
}

/// Records every draw command in order
#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub calls: Vec<DrawCall>,
}

impl RecordingTarget {
    pub fn textures(&self) -> Vec<Rect> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Texture(_, rect) => Some(*rect),
                DrawCall::Fill(..) => None,
            })
            .collect()
    }

    pub fn fills_with(&self, color: Color) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Fill(_, c) if *c == color))
            .count()
    }
}

impl RenderTarget<FakeTexture> for RecordingTarget {
    fn draw_filled_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.calls.push(DrawCall::Fill(rect, color));
        Ok(())
    }

    fn draw_texture(&mut self, texture: &FakeTexture, dest: Rect) -> Result<(), String> {
        self.calls.push(DrawCall::Texture(texture.path.clone(), dest));
        Ok(())
    }
}

// Fonts are drawn with `RenderTarget<u32>` in the text tests
impl RenderTarget<u32> for RecordingTarget {
    fn draw_filled_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.calls.push(DrawCall::Fill(rect, color));
        Ok(())
    }

    fn draw_texture(&mut self, _texture: &u32, dest: Rect) -> Result<(), String> {
        self.calls.push(DrawCall::Texture(PathBuf::new(), dest));
        Ok(())
    }
}

/// In-memory asset provider with failure injection
#[derive(Debug, Default)]
pub struct MemoryAssets {
    missing: HashSet<PathBuf>,
    fonts: FontCache,
    textures_loaded: Cell<usize>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        MemoryAssets::default()
    }

    /// Any later load of `path` fails with `AssetLoadFailure`
    pub fn with_missing(mut self, path: impl Into<PathBuf>) -> Self {
        self.missing.insert(path.into());
        self
    }

    pub fn textures_loaded(&self) -> usize {
        self.textures_loaded.get()
    }
}

impl AssetProvider for MemoryAssets {
    type Texture = FakeTexture;

    fn load_texture(&self, path: &Path) -> Result<FakeTexture, HeartError> {
        if self.missing.contains(path) {
            return Err(HeartError::asset(path.display().to_string(), "missing"));
        }
        self.textures_loaded.set(self.textures_loaded.get() + 1);
        Ok(FakeTexture {
            path: path.to_path_buf(),
        })
    }

    fn load_font(&self, path: Option<&Path>) -> Result<Rc<BitmapFont>, HeartError> {
        if let Some(path) = path {
            if self.missing.contains(path) {
                return Err(HeartError::asset(path.display().to_string(), "missing"));
            }
        }
        self.fonts.get_or_load(path)
    }
}
