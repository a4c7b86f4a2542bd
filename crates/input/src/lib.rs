//! Terminal input module.
//!
//! This crate is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`brickdrop_types::GameAction`] and provides
//! a DAS/ARR repeat scheduler for held movement keys, including terminals
//! without key-release events.

pub mod map;
pub mod repeat;

pub use brickdrop_types as types;

pub use map::{handle_key_event, is_interrupt, should_quit};
pub use repeat::{KeyRepeat, RepeatKey};
