//! Bitmap Font Rendering
//!
//! Labels are drawn procedurally from a fixed-cell bitmap font: each glyph is a
//! list of rows, each row a bitmask (most significant used bit = leftmost
//! pixel). A 5x7 font is built in; other fonts can be loaded from JSON.
//!
//! # Font file format
//!
//! ```json
//! {
//!   "glyph_width": 5,
//!   "glyph_height": 7,
//!   "glyphs": { "X": [17, 17, 10, 4, 10, 17, 17] }
//! }
//! ```

use crate::error::HeartError;
use crate::render::RenderTarget;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// On-disk shape of a font file
#[derive(Debug, Deserialize)]
struct FontFile {
    glyph_width: u32,
    glyph_height: u32,
    glyphs: HashMap<String, Vec<u8>>,
}

/// Fixed-cell bitmap font
///
/// Lookups are case-insensitive for letters: lower-case text is drawn with
/// the upper-case glyphs. Characters with no glyph draw as a full block.
#[derive(Debug, Clone, PartialEq)]
pub struct BitmapFont {
    glyph_width: u32,
    glyph_height: u32,
    glyphs: HashMap<char, Vec<u8>>,
}

impl BitmapFont {
    /// The built-in 5x7 font (letters, digits, basic punctuation)
    pub fn builtin() -> Self {
        let glyphs = BUILTIN_GLYPHS
            .iter()
            .map(|(c, rows)| (*c, rows.to_vec()))
            .collect();

        BitmapFont {
            glyph_width: 5,
            glyph_height: 7,
            glyphs,
        }
    }

    /// Loads a font from a JSON file
    ///
    /// Any read, parse or validation problem is reported as an
    /// `AssetLoadFailure` for that path.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, HeartError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let content = std::fs::read_to_string(path)
            .map_err(|e| HeartError::asset(&display, e.to_string()))?;
        let file: FontFile = serde_json::from_str(&content)
            .map_err(|e| HeartError::asset(&display, e.to_string()))?;

        Self::from_font_file(file).map_err(|reason| HeartError::asset(&display, reason))
    }

    fn from_font_file(file: FontFile) -> Result<Self, String> {
        if file.glyph_width == 0 || file.glyph_width > 8 {
            return Err(format!("glyph_width must be 1-8, got {}", file.glyph_width));
        }
        if file.glyph_height == 0 {
            return Err("glyph_height must be at least 1".to_string());
        }

        let mut glyphs = HashMap::with_capacity(file.glyphs.len());
        for (key, rows) in file.glyphs {
            let mut chars = key.chars();
            let c = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(format!("glyph key {:?} is not a single character", key)),
            };
            if rows.len() != file.glyph_height as usize {
                return Err(format!(
                    "glyph {:?} has {} rows, expected {}",
                    c,
                    rows.len(),
                    file.glyph_height
                ));
            }
            glyphs.insert(c.to_ascii_uppercase(), rows);
        }

        Ok(BitmapFont {
            glyph_width: file.glyph_width,
            glyph_height: file.glyph_height,
            glyphs,
        })
    }

    pub fn glyph_width(&self) -> u32 {
        self.glyph_width
    }

    pub fn glyph_height(&self) -> u32 {
        self.glyph_height
    }

    /// Horizontal advance per character (glyph plus 1px spacing) at `scale`
    pub fn advance(&self, scale: u32) -> u32 {
        (self.glyph_width + 1) * scale
    }

    /// Width in pixels of `text` at `scale`, trailing spacing excluded
    pub fn text_width(&self, text: &str, scale: u32) -> u32 {
        let count = text.chars().count() as u32;
        if count == 0 {
            return 0;
        }
        count * self.advance(scale) - scale
    }

    fn glyph(&self, c: char) -> Option<&[u8]> {
        self.glyphs.get(&c.to_ascii_uppercase()).map(|rows| rows.as_slice())
    }

    /// Draws `text` with its top-left corner at (`x`, `y`)
    ///
    /// # Parameters
    ///
    /// - `target`: Surface to draw on
    /// - `text`: Text to render (case-insensitive)
    /// - `color`: Text color
    /// - `scale`: 1 = one screen pixel per font pixel, 2 = 2x2, etc.
    pub fn draw_text<T, R>(
        &self,
        target: &mut R,
        text: &str,
        x: i32,
        y: i32,
        color: Color,
        scale: u32,
    ) -> Result<(), String>
    where
        R: RenderTarget<T> + ?Sized,
    {
        let pixel_size = scale as i32;
        let advance = self.advance(scale) as i32;

        for (i, c) in text.chars().enumerate() {
            let char_x = x + i as i32 * advance;

            match self.glyph(c) {
                Some(rows) => {
                    for (row, &bits) in rows.iter().enumerate() {
                        for col in 0..self.glyph_width {
                            let shift = self.glyph_width - 1 - col;
                            if (bits >> shift) & 1 == 1 {
                                target.draw_filled_rect(
                                    Rect::new(
                                        char_x + col as i32 * pixel_size,
                                        y + row as i32 * pixel_size,
                                        scale,
                                        scale,
                                    ),
                                    color,
                                )?;
                            }
                        }
                    }
                }
                None => {
                    // Full block for unknown characters
                    target.draw_filled_rect(
                        Rect::new(
                            char_x,
                            y,
                            self.glyph_width * scale,
                            self.glyph_height * scale,
                        ),
                        color,
                    )?;
                }
            }
        }

        Ok(())
    }
}

impl Default for BitmapFont {
    fn default() -> Self {
        Self::builtin()
    }
}

// 5x7 bitmap font patterns (1 = pixel on, 0 = pixel off)
const BUILTIN_GLYPHS: &[(char, [u8; 7])] = &[
    ('A', [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('B', [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]),
    ('C', [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]),
    ('D', [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110]),
    ('E', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
    ('F', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('G', [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110]),
    ('H', [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('I', [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111]),
    ('J', [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]),
    ('K', [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001]),
    ('L', [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
    ('M', [0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001]),
    ('N', [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001]),
    ('O', [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('P', [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('Q', [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]),
    ('R', [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
    ('S', [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110]),
    ('T', [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('U', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('V', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
    ('W', [0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001]),
    ('X', [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001]),
    ('Y', [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('Z', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111]),
    ('0', [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
    ('1', [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('2', [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111]),
    ('3', [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]),
    ('4', [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
    ('5', [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
    ('6', [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
    ('7', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
    ('8', [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
    ('9', [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
    (':', [0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000]),
    ('/', [0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000]),
    ('-', [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000]),
    ('+', [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000]),
    ('.', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100]),
    ('!', [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100]),
    (' ', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000]),
];
