//! Lives HUD for SDL2 games
//!
//! Heart icons that track the player's remaining lives, a shared
//! [`LivesTracker`] counter, and the asset/render seams they draw through.

pub mod assets;
pub mod config;
pub mod error;
pub mod lives;
pub mod render;
pub mod text;
pub mod ui;

#[cfg(test)]
mod test_support;

pub use assets::{AssetProvider, FontCache, SdlAssets};
pub use config::HudConfig;
pub use error::HeartError;
pub use lives::{LifeState, LivesTracker};
pub use render::RenderTarget;
pub use text::BitmapFont;
pub use ui::{Heart, HeartStyle, LivesHud};
