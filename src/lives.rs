//! Shared life counter for the HUD
//!
//! A `LivesTracker` is the session's count of remaining lives. Every heart on
//! screen holds a clone of the same tracker, so a life gained or lost through
//! any of them is visible to all of them.
//!
//! # Example
//!
//! ```rust
//! use heart_hud::LivesTracker;
//!
//! let lives = LivesTracker::with_lives(3);
//! lives.lose_life();
//! assert_eq!(lives.count(), 2);
//! assert!(lives.has_lives_remaining());
//! ```

use log::{debug, warn};
use std::cell::Cell;
use std::rc::Rc;

/// Whether the player still has lives left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeState {
    /// Counter is above zero
    HasLives,

    /// Counter reached zero; the game owner should end the session
    Depleted,
}

/// Handle to a session's remaining-lives counter
///
/// Cloning the handle does NOT copy the count: clones share it. The counter
/// lives on the game-loop thread only (`Rc<Cell<_>>`), so the tracker is
/// neither `Send` nor `Sync`.
///
/// Decrementing at zero saturates: the count stays at zero and a warning is
/// logged. The count is unsigned, so it can never go negative.
#[derive(Debug, Clone, Default)]
pub struct LivesTracker {
    count: Rc<Cell<u32>>,
}

impl LivesTracker {
    /// Creates a tracker with no lives
    pub fn new() -> Self {
        LivesTracker::default()
    }

    /// Creates a tracker starting at `lives`
    pub fn with_lives(lives: u32) -> Self {
        LivesTracker {
            count: Rc::new(Cell::new(lives)),
        }
    }

    /// Current number of remaining lives
    pub fn count(&self) -> u32 {
        self.count.get()
    }

    /// True while the count is strictly greater than zero
    pub fn has_lives_remaining(&self) -> bool {
        self.count() > 0
    }

    pub fn state(&self) -> LifeState {
        if self.has_lives_remaining() {
            LifeState::HasLives
        } else {
            LifeState::Depleted
        }
    }

    /// Adds one life and returns the new count
    pub fn gain_life(&self) -> u32 {
        let new_count = self.count().saturating_add(1);
        self.count.set(new_count);
        debug!("Life gained, {} remaining", new_count);
        new_count
    }

    /// Removes one life and returns the new count
    ///
    /// Already at zero: the count is left untouched.
    pub fn lose_life(&self) -> u32 {
        let current = self.count();
        if current == 0 {
            warn!("Tried to lose a life with none remaining, ignoring");
            return 0;
        }

        let new_count = current - 1;
        self.count.set(new_count);
        debug!("Life lost, {} remaining", new_count);
        new_count
    }

    /// Re-initialises the counter (new game, respawn with fresh lives)
    pub fn reset(&self, lives: u32) {
        debug!("Lives reset to {}", lives);
        self.count.set(lives);
    }

    /// True if both handles point at the same counter
    #[cfg(test)]
    pub(crate) fn shares_counter_with(&self, other: &LivesTracker) -> bool {
        Rc::ptr_eq(&self.count, &other.count)
    }
}
