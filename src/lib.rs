//! Brickdrop (workspace facade crate).
//!
//! This package keeps the `brickdrop::{core,input,term,audio,score,types}`
//! public API stable while the implementation lives in dedicated crates
//! under `crates/`.

pub use brickdrop_audio as audio;
pub use brickdrop_core as core;
pub use brickdrop_input as input;
pub use brickdrop_score as score;
pub use brickdrop_term as term;
pub use brickdrop_types as types;
