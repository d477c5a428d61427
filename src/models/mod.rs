//! Data models for the team directory.
//!
//! These models match the persisted JSON contract exactly so stored values
//! written by older builds keep loading.

mod member;

pub use member::*;
