//! HUD configuration
//!
//! Asset paths, the starting life total and the heart row layout are read
//! from a JSON file so they can be tuned without recompiling. Every field is
//! optional; missing fields fall back to the defaults below.
//!
//! ```json
//! {
//!   "texture_path": "assets/sprites/heart.png",
//!   "starting_lives": 5,
//!   "origin": [10, 10]
//! }
//! ```
//!
//! A user override is looked up at `<config dir>/heart_hud/hud.json`
//! (`~/.config/heart_hud/hud.json` on Linux).

use crate::error::HeartError;
use log::{info, warn};
use sdl2::rect::Rect;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Heart icon image
    pub texture_path: PathBuf,

    /// Label font (JSON bitmap font); `None` = built-in 5x7 font
    pub font_path: Option<PathBuf>,

    /// Lives the HUD starts with
    pub starting_lives: u32,

    /// Screen position of the first heart (top-left corner)
    pub origin: (i32, i32),

    /// Icon size in pixels
    pub icon_size: (u32, u32),

    /// Horizontal gap between hearts
    pub spacing: i32,
}

impl Default for HudConfig {
    fn default() -> Self {
        HudConfig {
            texture_path: PathBuf::from("assets/sprites/heart.png"),
            font_path: None,
            starting_lives: 3,
            origin: (10, 10),
            icon_size: (16, 16),
            spacing: 4,
        }
    }
}

impl HudConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, HeartError> {
        let content = std::fs::read_to_string(path)?;
        let config: HudConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Writes the config as pretty JSON, creating parent directories
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), HeartError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Where a user override config lives, if the platform has a config dir
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("heart_hud").join("hud.json"))
    }

    /// Loads the user override if there is one, defaults otherwise
    ///
    /// A broken override is reported and ignored rather than aborting start-up.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::user_config_path() else {
            return HudConfig::default();
        };

        if !path.exists() {
            return HudConfig::default();
        }

        match Self::load_from_file(&path) {
            Ok(config) => {
                info!("Loaded HUD config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Ignoring HUD config {}: {}", path.display(), e);
                HudConfig::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), HeartError> {
        if self.icon_size.0 == 0 || self.icon_size.1 == 0 {
            return Err(HeartError::Config(format!(
                "icon_size must be non-zero, got {}x{}",
                self.icon_size.0, self.icon_size.1
            )));
        }
        Ok(())
    }

    /// Screen rectangle of the heart in slot `index` (0 = leftmost)
    pub fn slot_rect(&self, index: usize) -> Rect {
        let (width, height) = self.icon_size;
        let step = width as i32 + self.spacing;
        Rect::new(self.origin.0 + index as i32 * step, self.origin.1, width, height)
    }
}
