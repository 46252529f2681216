//! Pac-Man sprite motion
//!
//! Keyboard-driven, one direction at a time. The state here is plain data so
//! it can be ticked and tested without a DOM:
//! - One logical direction drives velocity and displayed orientation
//! - Position is clamped to the container on every tick
//! - Bounces flip the logical direction so the sprite faces where it travels

pub mod direction;
pub mod motion;

pub use direction::{Direction, SpriteAssets};
pub use motion::{Bounds, Motion, TickOutcome};
