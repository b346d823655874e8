//! Row of hearts, one per remaining life
//!
//! `LivesHud` keeps the number of heart icons on screen equal to the number
//! of lives: gaining a life builds a new `Heart` in the next slot, losing one
//! drops the rightmost heart. Building the HUD sets the tracker to the
//! starting total; after that the counter only moves through heart
//! construction and drop, so the two can't drift apart.
//!
//! # Example
//!
//! ```ignore
//! let lives = LivesTracker::new();
//! let mut hud = LivesHud::new(&lives, &assets, HudConfig::load_or_default())?;
//!
//! // Player got hit
//! hud.remove_life();
//! if !hud.has_lives_remaining() {
//!     game_state = GameState::GameOver;
//! }
//!
//! // Each frame
//! hud.update();
//! hud.render(&mut canvas)?;
//! ```

use super::heart::Heart;
use crate::assets::AssetProvider;
use crate::config::HudConfig;
use crate::error::HeartError;
use crate::lives::LivesTracker;
use crate::render::RenderTarget;
use log::info;

/// Row of heart icons, one per remaining life
///
/// The HUD takes over its `LivesTracker`: after `new` or `reinitialize` the
/// count equals the number of hearts, and `add_life`/`remove_life` move both
/// together.
pub struct LivesHud<T> {
    lives: LivesTracker,
    config: HudConfig,
    hearts: Vec<Heart<T>>,
}

impl<T> LivesHud<T> {
    /// Builds `config.starting_lives` hearts and sets the tracker to match
    ///
    /// All or nothing: if any heart fails to load, the hearts already built
    /// are dropped again and the tracker is back where it started.
    pub fn new<A>(lives: &LivesTracker, assets: &A, config: HudConfig) -> Result<Self, HeartError>
    where
        A: AssetProvider<Texture = T>,
    {
        config.validate()?;

        let previous = lives.count();
        lives.reset(0);
        let hearts = match build_row(lives, assets, &config) {
            Ok(hearts) => hearts,
            Err(e) => {
                lives.reset(previous);
                return Err(e);
            }
        };

        info!("Lives HUD ready with {} lives", hearts.len());
        Ok(LivesHud {
            lives: lives.clone(),
            config,
            hearts,
        })
    }

    /// Adds a heart in the next free slot and returns the new count
    pub fn add_life<A>(&mut self, assets: &A) -> Result<u32, HeartError>
    where
        A: AssetProvider<Texture = T>,
    {
        let rect = self.config.slot_rect(self.hearts.len());
        let heart = Heart::at(&self.lives, assets, &self.config, rect)?;
        self.hearts.push(heart);
        Ok(self.lives.count())
    }

    /// Drops the rightmost heart and returns the new count
    ///
    /// With no hearts left this still goes through the tracker, which
    /// saturates at zero.
    pub fn remove_life(&mut self) -> u32 {
        match self.hearts.pop() {
            Some(heart) => drop(heart),
            None => {
                self.lives.lose_life();
            }
        }
        self.lives.count()
    }

    /// Replaces every heart with `config.starting_lives` fresh ones
    ///
    /// The new row is built next to the old one and swapped in only once
    /// every heart has loaded. On failure the HUD and the tracker are left
    /// as they were.
    pub fn reinitialize<A>(&mut self, assets: &A) -> Result<u32, HeartError>
    where
        A: AssetProvider<Texture = T>,
    {
        let hearts = build_row(&self.lives, assets, &self.config)?;

        // Dropping the old row takes its hearts back off the count
        let fresh = hearts.len() as u32;
        self.lives.reset(fresh + self.hearts.len() as u32);
        self.hearts = hearts;

        info!("Lives HUD reinitialized with {} lives", self.lives.count());
        Ok(self.lives.count())
    }

    pub fn has_lives_remaining(&self) -> bool {
        self.lives.has_lives_remaining()
    }

    pub fn lives(&self) -> &LivesTracker {
        &self.lives
    }

    pub fn hearts(&self) -> &[Heart<T>] {
        &self.hearts
    }

    pub fn len(&self) -> usize {
        self.hearts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hearts.is_empty()
    }

    pub fn update(&mut self) {
        for heart in &mut self.hearts {
            heart.update();
        }
    }

    pub fn render<R>(&self, target: &mut R) -> Result<(), String>
    where
        R: RenderTarget<T> + ?Sized,
    {
        for heart in &self.hearts {
            heart.render(&mut *target)?;
        }
        Ok(())
    }
}

/// Builds one heart per starting life, laid out left to right
///
/// A partly built row is dropped on error, which takes its lives back off
/// the tracker.
fn build_row<T, A>(
    lives: &LivesTracker,
    assets: &A,
    config: &HudConfig,
) -> Result<Vec<Heart<T>>, HeartError>
where
    A: AssetProvider<Texture = T>,
{
    (0..config.starting_lives as usize)
        .map(|slot| Heart::at(lives, assets, config, config.slot_rect(slot)))
        .collect()
}
