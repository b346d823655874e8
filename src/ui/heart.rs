//! Heart widget: one life on the HUD
//!
//! A `Heart` is a heart icon with a small label next to it showing how many
//! lives the player has left. Each heart stands for one life: building one
//! adds a life to the shared `LivesTracker`, dropping it takes one away.
//!
//! # Example
//!
//! ```ignore
//! let lives = LivesTracker::new();
//! let heart = Heart::new(&lives, &assets, &config)?;   // lives.count() == 1
//!
//! // Game events
//! heart.lose_life();
//! if !lives.has_lives_remaining() {
//!     game_state = GameState::GameOver;
//! }
//!
//! // Each frame
//! heart.update();
//! heart.render(&mut canvas)?;
//! ```

use crate::assets::AssetProvider;
use crate::config::HudConfig;
use crate::error::HeartError;
use crate::lives::LivesTracker;
use crate::render::RenderTarget;
use crate::text::BitmapFont;
use log::debug;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use std::rc::Rc;

/// Configuration for heart appearance
#[derive(Debug, Clone)]
pub struct HeartStyle {
    /// Label position relative to the icon's top-right corner
    pub label_offset: (i32, i32),

    /// Label font scale (1 = 5x7 pixels with the built-in font)
    pub label_scale: u32,

    /// Label color when nothing is happening
    pub label_color: Color,

    /// Label color while a life-gained pulse is showing
    pub gain_color: Color,

    /// Label color while a life-lost pulse is showing
    pub loss_color: Color,

    /// Backdrop drawn behind the icon while a life-lost pulse is showing
    pub loss_backdrop_color: Color,

    /// How many updates a gain/loss pulse lasts (0 = no pulse)
    pub feedback_frames: u32,

    /// How far the icon grows on each side during a gain pulse
    pub pulse_pixels: u32,
}

impl Default for HeartStyle {
    fn default() -> Self {
        HeartStyle {
            label_offset: (4, 4),
            label_scale: 1,
            label_color: Color::RGB(255, 255, 255),       // White
            gain_color: Color::RGB(100, 255, 100),        // Green
            loss_color: Color::RGB(255, 50, 50),          // Red
            loss_backdrop_color: Color::RGB(120, 0, 0),   // Dark red
            feedback_frames: 20,
            pulse_pixels: 2,
        }
    }
}

/// Which way the life count moved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Gained,
    Lost,
}

/// Short visual pulse after the life count changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeFeedback {
    /// Gain or loss, picks the label color and icon effect
    pub kind: FeedbackKind,

    /// Updates left before the pulse ends
    pub frames_remaining: u32,
}

/// One life icon plus a label with the remaining-lives count
///
/// `T` is the texture type of the `AssetProvider` the heart was built with.
/// The icon texture is owned by the heart; the font is shared.
pub struct Heart<T> {
    lives: LivesTracker,
    icon: T,
    rect: Rect,
    font: Rc<BitmapFont>,
    label: String,
    displayed_count: u32,
    feedback: Option<LifeFeedback>,
    style: HeartStyle,
}

impl<T> Heart<T> {
    /// Creates a heart in the config's first slot
    pub fn new<A>(lives: &LivesTracker, assets: &A, config: &HudConfig) -> Result<Self, HeartError>
    where
        A: AssetProvider<Texture = T>,
    {
        Self::at(lives, assets, config, config.slot_rect(0))
    }

    /// Creates a heart at `rect` (position and size)
    pub fn at<A>(
        lives: &LivesTracker,
        assets: &A,
        config: &HudConfig,
        rect: Rect,
    ) -> Result<Self, HeartError>
    where
        A: AssetProvider<Texture = T>,
    {
        Self::with_style(lives, assets, config, rect, HeartStyle::default())
    }

    /// Creates a heart at `rect` with custom styling
    ///
    /// Assets are loaded before the life is counted, so a failed load leaves
    /// the tracker untouched.
    pub fn with_style<A>(
        lives: &LivesTracker,
        assets: &A,
        config: &HudConfig,
        rect: Rect,
        style: HeartStyle,
    ) -> Result<Self, HeartError>
    where
        A: AssetProvider<Texture = T>,
    {
        let icon = assets.load_texture(&config.texture_path)?;
        let font = assets.load_font(config.font_path.as_deref())?;

        let count = lives.gain_life();
        debug!("Heart created at ({}, {}), {} lives", rect.x(), rect.y(), count);

        Ok(Heart {
            lives: lives.clone(),
            icon,
            rect,
            font,
            label: label_text(count),
            displayed_count: count,
            feedback: None,
            style,
        })
    }

    /// Adds a life to the shared counter. Does not add an icon.
    pub fn gain_life(&self) -> u32 {
        self.lives.gain_life()
    }

    /// Removes a life from the shared counter. Does not remove this heart.
    pub fn lose_life(&self) -> u32 {
        self.lives.lose_life()
    }

    pub fn has_lives_remaining(&self) -> bool {
        self.lives.has_lives_remaining()
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn label_text(&self) -> &str {
        &self.label
    }

    pub fn feedback(&self) -> Option<LifeFeedback> {
        self.feedback
    }

    pub fn style(&self) -> &HeartStyle {
        &self.style
    }

    /// Per-frame update: syncs the label with the counter and runs the pulse
    ///
    /// Reads the counter but never changes it.
    pub fn update(&mut self) {
        let count = self.lives.count();

        if count != self.displayed_count {
            let kind = if count > self.displayed_count {
                FeedbackKind::Gained
            } else {
                FeedbackKind::Lost
            };
            self.feedback = (self.style.feedback_frames > 0).then_some(LifeFeedback {
                kind,
                frames_remaining: self.style.feedback_frames,
            });
            self.displayed_count = count;
            self.label = label_text(count);
            return;
        }

        if let Some(feedback) = &mut self.feedback {
            feedback.frames_remaining = feedback.frames_remaining.saturating_sub(1);
            if feedback.frames_remaining == 0 {
                self.feedback = None;
            }
        }
    }

    /// Draws the icon, then the label to its right
    pub fn render<R>(&self, target: &mut R) -> Result<(), String>
    where
        R: RenderTarget<T> + ?Sized,
    {
        let kind = self.feedback.map(|feedback| feedback.kind);

        let icon_rect = match kind {
            Some(FeedbackKind::Gained) => {
                let pulse = self.style.pulse_pixels;
                Rect::new(
                    self.rect.x() - pulse as i32,
                    self.rect.y() - pulse as i32,
                    self.rect.width() + pulse * 2,
                    self.rect.height() + pulse * 2,
                )
            }
            Some(FeedbackKind::Lost) => {
                target.draw_filled_rect(self.rect, self.style.loss_backdrop_color)?;
                self.rect
            }
            None => self.rect,
        };
        target.draw_texture(&self.icon, icon_rect)?;

        let label_color = match kind {
            Some(FeedbackKind::Gained) => self.style.gain_color,
            Some(FeedbackKind::Lost) => self.style.loss_color,
            None => self.style.label_color,
        };
        self.font.draw_text::<T, R>(
            target,
            &self.label,
            self.rect.right() + self.style.label_offset.0,
            self.rect.y() + self.style.label_offset.1,
            label_color,
            self.style.label_scale,
        )
    }
}

impl<T> Drop for Heart<T> {
    fn drop(&mut self) {
        let count = self.lives.lose_life();
        debug!("Heart at ({}, {}) removed, {} lives", self.rect.x(), self.rect.y(), count);
    }
}

fn label_text(count: u32) -> String {
    format!("x{}", count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{DrawCall, FakeTexture, MemoryAssets, RecordingTarget};

    fn config() -> HudConfig {
        HudConfig::default()
    }

    #[test]
    fn test_construction_adds_one_life() {
        let lives = LivesTracker::with_lives(2);
        let _heart = Heart::new(&lives, &MemoryAssets::new(), &config()).unwrap();
        assert_eq!(lives.count(), 3);
    }

    #[test]
    fn test_drop_removes_one_life() {
        let lives = LivesTracker::with_lives(2);
        let heart = Heart::new(&lives, &MemoryAssets::new(), &config()).unwrap();
        assert_eq!(lives.count(), 3);

        drop(heart);
        assert_eq!(lives.count(), 2);
    }

    #[test]
    fn test_construct_then_drop_round_trip() {
        let lives = LivesTracker::with_lives(4);
        let assets = MemoryAssets::new();
        for _ in 0..10 {
            let heart = Heart::new(&lives, &assets, &config()).unwrap();
            drop(heart);
        }
        assert_eq!(lives.count(), 4);
    }

    #[test]
    fn test_default_placement_is_first_slot() {
        let lives = LivesTracker::new();
        let config = config();
        let heart = Heart::new(&lives, &MemoryAssets::new(), &config).unwrap();
        assert_eq!(heart.rect(), config.slot_rect(0));
    }

    #[test]
    fn test_explicit_placement() {
        let lives = LivesTracker::new();
        let rect = Rect::new(100, 40, 32, 24);
        let heart = Heart::at(&lives, &MemoryAssets::new(), &config(), rect).unwrap();
        assert_eq!(heart.rect(), rect);
        assert_eq!(heart.label_text(), "x1");
    }

    #[test]
    fn test_missing_texture_fails_without_counting() {
        let lives = LivesTracker::with_lives(3);
        let config = config();
        let assets = MemoryAssets::new().with_missing(config.texture_path.clone());

        let result = Heart::new(&lives, &assets, &config);
        assert!(matches!(result, Err(HeartError::AssetLoadFailure { .. })));
        assert_eq!(lives.count(), 3);
    }

    #[test]
    fn test_missing_font_fails_without_counting() {
        let lives = LivesTracker::with_lives(3);
        let config = HudConfig {
            font_path: Some("assets/fonts/missing.json".into()),
            ..Default::default()
        };
        let assets = MemoryAssets::new().with_missing("assets/fonts/missing.json");

        let result = Heart::new(&lives, &assets, &config);
        assert!(matches!(result, Err(HeartError::AssetLoadFailure { .. })));
        assert_eq!(lives.count(), 3);
    }

    #[test]
    fn test_gain_life_only_touches_counter() {
        let lives = LivesTracker::new();
        let rect = Rect::new(5, 5, 16, 16);
        let heart = Heart::at(&lives, &MemoryAssets::new(), &config(), rect).unwrap();

        assert_eq!(heart.gain_life(), 2);
        assert_eq!(lives.count(), 2);
        assert_eq!(heart.rect(), rect);
    }

    #[test]
    fn test_three_losses_through_heart() {
        let lives = LivesTracker::with_lives(2);
        let heart = Heart::new(&lives, &MemoryAssets::new(), &config()).unwrap();
        assert_eq!(lives.count(), 3);

        heart.lose_life();
        assert!(heart.has_lives_remaining());
        heart.lose_life();
        assert!(heart.has_lives_remaining());
        heart.lose_life();
        assert!(!heart.has_lives_remaining());
        assert!(!lives.has_lives_remaining());
    }

    #[test]
    fn test_drop_after_depletion_saturates() {
        let lives = LivesTracker::new();
        let heart = Heart::new(&lives, &MemoryAssets::new(), &config()).unwrap();
        heart.lose_life();
        assert_eq!(lives.count(), 0);

        drop(heart);
        assert_eq!(lives.count(), 0);
    }

    #[test]
    fn test_update_and_render_leave_counter_alone() {
        let lives = LivesTracker::with_lives(1);
        let mut heart = Heart::new(&lives, &MemoryAssets::new(), &config()).unwrap();
        let mut target = RecordingTarget::default();

        for _ in 0..50 {
            heart.update();
            heart.render(&mut target).unwrap();
        }
        assert_eq!(lives.count(), 2);
    }

    #[test]
    fn test_update_syncs_label() {
        let lives = LivesTracker::with_lives(2);
        let mut heart = Heart::new(&lives, &MemoryAssets::new(), &config()).unwrap();
        assert_eq!(heart.label_text(), "x3");

        lives.lose_life();
        // Label follows the counter on the next update, not before
        assert_eq!(heart.label_text(), "x3");
        heart.update();
        assert_eq!(heart.label_text(), "x2");
    }

    #[test]
    fn test_loss_pulse_runs_and_expires() {
        let lives = LivesTracker::new();
        let style = HeartStyle {
            feedback_frames: 3,
            ..Default::default()
        };
        let mut heart = Heart::with_style(
            &lives,
            &MemoryAssets::new(),
            &config(),
            Rect::new(0, 0, 16, 16),
            style,
        )
        .unwrap();
        assert_eq!(heart.feedback(), None);

        heart.lose_life();
        heart.update();
        assert_eq!(
            heart.feedback(),
            Some(LifeFeedback {
                kind: FeedbackKind::Lost,
                frames_remaining: 3
            })
        );

        heart.update();
        heart.update();
        assert!(heart.feedback().is_some());
        heart.update();
        assert_eq!(heart.feedback(), None);
    }

    #[test]
    fn test_no_pulse_when_disabled() {
        let lives = LivesTracker::new();
        let style = HeartStyle {
            feedback_frames: 0,
            ..Default::default()
        };
        let mut heart = Heart::with_style(
            &lives,
            &MemoryAssets::new(),
            &config(),
            Rect::new(0, 0, 16, 16),
            style,
        )
        .unwrap();

        heart.gain_life();
        heart.update();
        assert_eq!(heart.feedback(), None);
        assert_eq!(heart.label_text(), "x2");
    }

    #[test]
    fn test_render_draws_icon_then_label() {
        let lives = LivesTracker::new();
        let config = config();
        let rect = Rect::new(10, 10, 16, 16);
        let heart = Heart::at(&lives, &MemoryAssets::new(), &config, rect).unwrap();
        let mut target = RecordingTarget::default();

        heart.render(&mut target).unwrap();

        assert_eq!(
            target.calls[0],
            DrawCall::Texture(config.texture_path.clone(), rect)
        );
        // "x1" drawn as white pixels to the right of the icon
        let label_pixels = target.fills_with(heart.style().label_color);
        assert!(label_pixels > 0);
        assert_eq!(label_pixels, target.calls.len() - 1);
        for call in &target.calls[1..] {
            if let DrawCall::Fill(pixel, _) = call {
                assert!(pixel.x() >= rect.right());
            }
        }
    }

    #[test]
    fn test_render_gain_pulse_grows_icon() {
        let lives = LivesTracker::new();
        let rect = Rect::new(10, 10, 16, 16);
        let mut heart = Heart::at(&lives, &MemoryAssets::new(), &config(), rect).unwrap();
        let mut target = RecordingTarget::default();

        heart.gain_life();
        heart.update();
        heart.render(&mut target).unwrap();

        let pulse = heart.style().pulse_pixels;
        assert_eq!(
            target.textures(),
            vec![Rect::new(10 - pulse as i32, 10 - pulse as i32, 16 + pulse * 2, 16 + pulse * 2)]
        );
        assert!(target.fills_with(heart.style().gain_color) > 0);
    }

    #[test]
    fn test_render_loss_pulse_draws_backdrop() {
        let lives = LivesTracker::with_lives(1);
        let rect = Rect::new(10, 10, 16, 16);
        let mut heart = Heart::at(&lives, &MemoryAssets::new(), &config(), rect).unwrap();
        let mut target = RecordingTarget::default();

        heart.lose_life();
        heart.update();
        heart.render(&mut target).unwrap();

        assert_eq!(
            target.calls[0],
            DrawCall::Fill(rect, heart.style().loss_backdrop_color)
        );
        assert_eq!(target.textures(), vec![rect]);
        assert!(target.fills_with(heart.style().loss_color) > 0);
    }

    #[test]
    fn test_each_heart_owns_its_icon() {
        let lives = LivesTracker::new();
        let assets = MemoryAssets::new();
        let first: Heart<FakeTexture> = Heart::new(&lives, &assets, &config()).unwrap();
        let second: Heart<FakeTexture> = Heart::new(&lives, &assets, &config()).unwrap();

        assert_eq!(assets.textures_loaded(), 2);
        assert!(Rc::ptr_eq(&first.font, &second.font));
        assert_eq!(lives.count(), 2);
    }
}
