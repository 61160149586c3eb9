//! # devfocus-rewards
//!
//! Gamification rules for DevFocus. Given a snapshot of the store taken after
//! a completion, the [`GamificationEngine`] proposes point entries and
//! milestone unlocks without mutating anything itself.

pub mod engine;
pub mod rules;
pub mod snapshot;

pub use engine::{GamificationEngine, Proposal};
pub use snapshot::Snapshot;
