//! Shared types module - enums and constants used across the workspace
//!
//! Pure data definitions with no external dependencies, usable from the
//! simulation core, the input layer, and the terminal client alike.
//!
//! # Arena dimensions
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 20 rows (indexed 0-19), row 0 at the top
//! - **Spawn position**: horizontally centered, y = 0
//!
//! # Cell values
//!
//! Arena cells and shape matrices share one value space. 0 is empty; each
//! piece writes its own value, which doubles as its color index:
//!
//! | Piece | Value |
//! |-------|-------|
//! | T | 1 |
//! | O | 2 |
//! | L | 3 |
//! | J | 4 |
//! | I | 5 |
//! | S | 6 |
//! | Z | 7 |
//!
//! # Timing constants
//!
//! All values in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_STEP_MS` | 30 | Gravity speed-up per level |
//! | `DROP_FLOOR_MS` | 100 | Fastest gravity interval |
//! | `DAS_DELAY_MS` | 150 | Held-key delay before auto repeat |
//! | `ARR_DELAY_MS` | 50 | Interval between auto repeats |
//!
//! Gravity for a level is `max(DROP_FLOOR_MS, BASE_DROP_MS - (level - 1) *
//! DROP_STEP_MS)`; the level itself is `score / LEVEL_SCORE_STEP + 1`.
//!
//! # Examples
//!
//! ```
//! use brickdrop_types::{PieceKind, GamePhase, ARENA_WIDTH, ARENA_HEIGHT};
//!
//! let kind = PieceKind::from_char('t').unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.cell_value(), 1);
//!
//! assert_eq!(ARENA_WIDTH, 12);
//! assert_eq!(ARENA_HEIGHT, 20);
//! assert_eq!(GamePhase::default(), GamePhase::NotStarted);
//! ```

/// Arena width in cells (12 columns)
pub const ARENA_WIDTH: u8 = 12;

/// Arena height in cells (20 rows)
pub const ARENA_HEIGHT: u8 = 20;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 (1000ms = one row per second)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity interval decrease per level above 1 (30ms)
pub const DROP_STEP_MS: u32 = 30;

/// Fastest gravity interval (100ms floor)
pub const DROP_FLOOR_MS: u32 = 100;

/// Score needed per level step (level = score / 300 + 1)
pub const LEVEL_SCORE_STEP: u32 = 300;

/// Points for the first row cleared in a sweep pass; doubles per extra row
pub const SWEEP_BASE_SCORE: u32 = 10;

/// DAS (Delayed Auto Shift) delay in milliseconds
pub const DAS_DELAY_MS: u64 = 150;

/// ARR (Auto Repeat Rate) interval in milliseconds
pub const ARR_DELAY_MS: u64 = 50;

/// Minimum number of upcoming pieces kept queued
pub const QUEUE_MIN_LEN: usize = 3;

/// How long the level-up banner stays visible (2s)
pub const LEVEL_BANNER_MS: u32 = 2000;

/// The seven piece kinds
///
/// Declared in catalog order (I, L, J, O, T, S, Z); uniform random draws
/// index into [`PieceKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    L,
    J,
    O,
    T,
    S,
    Z,
}

impl PieceKind {
    /// All piece kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// The non-zero cell value this piece writes into the arena.
    ///
    /// # Examples
    ///
    /// ```
    /// use brickdrop_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::T.cell_value(), 1);
    /// assert_eq!(PieceKind::I.cell_value(), 5);
    /// ```
    pub fn cell_value(&self) -> u8 {
        match self {
            PieceKind::T => 1,
            PieceKind::O => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::I => 5,
            PieceKind::S => 6,
            PieceKind::Z => 7,
        }
    }

    /// Look up the piece kind owning a cell value.
    ///
    /// Returns `None` for 0 (empty) and anything above 7.
    pub fn from_cell_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(PieceKind::T),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::J),
            5 => Some(PieceKind::I),
            6 => Some(PieceKind::S),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Parse a piece kind from its letter (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use brickdrop_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('i'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_char('Z'), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'L' => Some(PieceKind::L),
            'J' => Some(PieceKind::J),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// The piece's letter.
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }
}

/// Lifecycle of one game session.
///
/// Transitions:
/// - `NotStarted` -> `Running` on start
/// - `Running` <-> `Paused` on pause toggle
/// - `Running` -> `GameOver` when a freshly spawned piece collides
/// - `GameOver` -> `Running` on restart
///
/// Every other (phase, action) pair is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    NotStarted,
    Running,
    Paused,
    GameOver,
}

/// Actions that drive a game session
///
/// Produced by the keyboard adapter (with DAS/ARR repeat for the movement
/// actions) and consumed by `GameSession::apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move the active piece one cell left
    MoveLeft,
    /// Move the active piece one cell right
    MoveRight,
    /// Drop the active piece one cell down
    SoftDrop,
    /// Drop the active piece straight to the stack and lock it
    HardDrop,
    /// Rotate the active piece 90° clockwise
    RotateCw,
    /// Rotate the active piece 90° counter-clockwise
    RotateCcw,
    /// Stash or swap the active piece (once per piece lifetime)
    Hold,
    /// Toggle pause
    Pause,
    /// Begin a new session from the start screen
    Start,
    /// Reset the session after game over
    Restart,
}

/// Feedback emitted by the session for the presentation layer.
///
/// The session buffers events as it mutates; the client drains them once per
/// frame and fans them out (sound effects, particle bursts, the level-up
/// banner). Purely informational, never read back by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The active piece moved one column
    Moved,
    /// The active piece rotated (possibly with a wall kick)
    Rotated,
    /// The active piece was stashed or swapped
    Held,
    /// A piece merged into the arena
    Locked,
    /// One full row was removed at this index
    RowCleared { row: u8 },
    /// A sweep pass finished with this many rows removed
    LinesCleared { count: u8 },
    /// The level rose to this value
    LevelUp { level: u32 },
    /// A spawned piece had no room; the session ended
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(ARENA_WIDTH, 12);
        assert_eq!(ARENA_HEIGHT, 20);
        assert_eq!(DAS_DELAY_MS, 150);
        assert_eq!(ARR_DELAY_MS, 50);
        assert_eq!(BASE_DROP_MS, 1000);
        assert_eq!(DROP_FLOOR_MS, 100);
        assert_eq!(LEVEL_SCORE_STEP, 300);
    }

    #[test]
    fn cell_values_round_trip() {
        for kind in PieceKind::ALL {
            let value = kind.cell_value();
            assert!((1..=7).contains(&value));
            assert_eq!(PieceKind::from_cell_value(value), Some(kind));
        }
        assert_eq!(PieceKind::from_cell_value(0), None);
        assert_eq!(PieceKind::from_cell_value(8), None);
    }

    #[test]
    fn chars_round_trip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_char(kind.as_char()), Some(kind));
            assert_eq!(
                PieceKind::from_char(kind.as_char().to_ascii_lowercase()),
                Some(kind)
            );
        }
    }

    #[test]
    fn all_lists_each_kind_once() {
        for kind in PieceKind::ALL {
            let count = PieceKind::ALL.iter().filter(|k| **k == kind).count();
            assert_eq!(count, 1);
        }
    }
}
