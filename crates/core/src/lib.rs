//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation
//! logic. It has **zero dependencies** on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, headless)
//! - **Fast**: Zero-allocation hot paths for game tick processing
//!
//! # Module Structure
//!
//! - [`arena`]: 12x20 playfield with collision detection and row sweeping
//! - [`matrix`]: Piece shape matrices with in-place rotation
//! - [`pieces`]: The seven-piece catalog and spawn placement
//! - [`rng`]: Seeded uniform piece generation with an upcoming-piece preview
//! - [`scoring`]: Sweep scoring, level progression, and gravity speed
//! - [`session`]: Complete game state including phase machine and events
//!
//! # Game Rules
//!
//! - **Uniform Randomizer**: Every draw picks any of the seven pieces with
//!   equal probability; a three-piece preview is always available
//! - **Kick Rotation**: Rotation nudges the piece sideways with alternating
//!   offsets (+1, -2, +3, ...) when the turned shape does not fit
//! - **Instant Lock**: A piece locks the moment a gravity or soft-drop step
//!   finds it resting on the stack
//! - **Ghost Piece**: Shows where the current piece will land
//! - **Hold**: Store one piece for later use (once per locked piece)
//! - **Sweep Scoring**: Row values double within one sweep (10/30/70/150)
//! - **Levels**: One level per 300 points; each level speeds gravity by 30ms
//!   down to a 100ms floor
//!
//! # Example
//!
//! ```
//! use brickdrop_core::GameSession;
//! use brickdrop_types::{GameAction, GamePhase};
//!
//! // Create and start a game
//! let mut game = GameSession::new(12345);
//! game.start();
//!
//! // Apply game actions
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! // The first piece locked on the floor and the next one spawned
//! assert_eq!(game.phase(), GamePhase::Running);
//! assert!(game.active().is_some());
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep system:
//! - **Tick Rate**: 16ms (approximately 60 FPS)
//! - **Gravity**: 1000ms at level 1, 30ms faster per level, 100ms floor
//! - **Soft Drop**: One immediate row per press, gravity timer restarted
//!
//! Call [`GameSession::tick`](session::GameSession::tick) every frame with
//! elapsed time.

pub mod arena;
pub mod matrix;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;

pub use brickdrop_types as types;

// Re-export commonly used types for convenience
pub use arena::Arena;
pub use matrix::{ShapeMatrix, MAX_MATRIX_SIZE};
pub use pieces::{spawn_matrix, spawn_x};
pub use rng::{PieceQueue, SimpleRng};
pub use scoring::{drop_interval_ms, level_for_score, sweep_score};
pub use session::{ActivePiece, GameSession};
