//! Render target abstraction for HUD widgets
//!
//! HUD widgets only ever need two draw commands: a solid rectangle and a
//! textured rectangle. Keeping them behind a trait lets widgets draw to an
//! SDL2 canvas in the game and to a recording target in tests.
//!
//! # Usage Example
//!
//! ```ignore
//! heart.render(&mut canvas)?;
//! ```

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

/// Surface that accepts HUD draw commands.
///
/// `T` is the texture type the matching `AssetProvider` hands out.
///
/// The target must stay valid for the whole `render()` call; that is the
/// windowing layer's job, not the widget's.
pub trait RenderTarget<T> {
    /// Fill `rect` with a solid color.
    fn draw_filled_rect(&mut self, rect: Rect, color: Color) -> Result<(), String>;

    /// Stretch the whole `texture` over `dest`.
    fn draw_texture(&mut self, texture: &T, dest: Rect) -> Result<(), String>;
}

impl<'t> RenderTarget<Texture<'t>> for Canvas<Window> {
    fn draw_filled_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.set_draw_color(color);
        self.fill_rect(rect)
    }

    fn draw_texture(&mut self, texture: &Texture<'t>, dest: Rect) -> Result<(), String> {
        self.copy(texture, None, dest)
    }
}
