//! Lives HUD Components
//!
//! Screen-space widgets that show how many lives the player has left.
//!
//! # Available Components
//!
//! - [`Heart`] - One heart icon plus a remaining-lives label
//! - [`LivesHud`] - A row of hearts kept in step with the life count
//!
//! # Architecture
//!
//! A `Heart` owns its icon texture and holds a handle to the session's
//! [`LivesTracker`](crate::LivesTracker). Building a heart counts one life,
//! dropping it removes one.
//!
//! The game loop calls `update()` then `render()` once per frame; neither
//! changes the life count. Game rules decide when a life is gained or lost
//! and call `gain_life()` / `lose_life()` (or `LivesHud::add_life` /
//! `LivesHud::remove_life`).

pub mod heart;
pub mod lives_hud;

pub use heart::{FeedbackKind, Heart, HeartStyle, LifeFeedback};
pub use lives_hud::LivesHud;
