//! DAS/ARR key repeat for held movement keys.
//!
//! Terminals deliver key events, not held-key state. This module rebuilds
//! "held" semantics from press/release/repeat events and schedules repeats
//! on absolute deadlines: the first repeat waits out the DAS delay, later
//! ones fire every ARR interval. Soft drop skips the long delay and repeats
//! at the ARR rate from the first press.
//!
//! Terminals that never emit release events are covered by a timeout: a key
//! with no press or auto-repeat inside the window counts as released.

use arrayvec::ArrayVec;
use brickdrop_types::{GameAction, ARR_DELAY_MS, DAS_DELAY_MS};

// Longer than typical terminal auto-repeat spacing, so a genuinely held key
// stays alive between repeat events.
const DEFAULT_RELEASE_TIMEOUT_MS: u64 = 150;

/// Keys that repeat while held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatKey {
    Left,
    Right,
    SoftDrop,
}

impl RepeatKey {
    const ALL: [RepeatKey; 3] = [RepeatKey::Left, RepeatKey::Right, RepeatKey::SoftDrop];

    /// The action this key fires.
    pub fn action(self) -> GameAction {
        match self {
            RepeatKey::Left => GameAction::MoveLeft,
            RepeatKey::Right => GameAction::MoveRight,
            RepeatKey::SoftDrop => GameAction::SoftDrop,
        }
    }

    /// The repeating key behind an action, if it has one.
    pub fn for_action(action: GameAction) -> Option<Self> {
        match action {
            GameAction::MoveLeft => Some(RepeatKey::Left),
            GameAction::MoveRight => Some(RepeatKey::Right),
            GameAction::SoftDrop => Some(RepeatKey::SoftDrop),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            RepeatKey::Left => 0,
            RepeatKey::Right => 1,
            RepeatKey::SoftDrop => 2,
        }
    }

    /// Delay before the first repeat. Horizontal movement waits out DAS;
    /// soft drop repeats at the ARR rate from the start.
    fn initial_delay(self, das_ms: u64, arr_ms: u64) -> u64 {
        match self {
            RepeatKey::SoftDrop => arr_ms,
            _ => das_ms,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct HeldKey {
    /// Timestamp at which the next repeat fires.
    deadline_ms: u64,
    /// Last press or terminal auto-repeat seen for this key.
    last_seen_ms: u64,
}

/// Tracks held keys and schedules their repeat actions.
#[derive(Debug, Clone)]
pub struct KeyRepeat {
    held: [Option<HeldKey>; 3],
    das_ms: u64,
    arr_ms: u64,
    release_timeout_ms: u64,
}

impl KeyRepeat {
    pub fn new() -> Self {
        Self::with_delays(DAS_DELAY_MS, ARR_DELAY_MS)
    }

    pub fn with_delays(das_ms: u64, arr_ms: u64) -> Self {
        Self {
            held: [None; 3],
            das_ms,
            arr_ms,
            release_timeout_ms: DEFAULT_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    /// Register a key press at `now_ms`.
    ///
    /// Returns the immediate action on the initial press. Terminal
    /// auto-repeats of an already-held key refresh its liveness and return
    /// `None`; the repeat schedule stays untouched.
    pub fn press(&mut self, key: RepeatKey, now_ms: u64) -> Option<GameAction> {
        let idx = key.index();

        if let Some(held) = self.held[idx].as_mut() {
            held.last_seen_ms = now_ms;
            return None;
        }

        self.held[idx] = Some(HeldKey {
            deadline_ms: now_ms + key.initial_delay(self.das_ms, self.arr_ms),
            last_seen_ms: now_ms,
        });
        Some(key.action())
    }

    /// Register a key release.
    pub fn release(&mut self, key: RepeatKey) {
        self.held[key.index()] = None;
    }

    /// Drop all held keys (used when gameplay stops).
    pub fn release_all(&mut self) {
        self.held = [None; 3];
    }

    pub fn is_held(&self, key: RepeatKey) -> bool {
        self.held[key.index()].is_some()
    }

    /// Collect the repeat actions due at `now_ms`.
    ///
    /// Each held key fires at most once per call; a stalled frame produces
    /// a single repeat, not a burst. Keys unseen for longer than the release
    /// timeout are dropped first.
    pub fn tick(&mut self, now_ms: u64) -> ArrayVec<GameAction, 8> {
        let mut actions = ArrayVec::new();

        for key in RepeatKey::ALL {
            let idx = key.index();
            let Some(mut held) = self.held[idx] else {
                continue;
            };

            if now_ms.saturating_sub(held.last_seen_ms) > self.release_timeout_ms {
                self.held[idx] = None;
                continue;
            }

            if now_ms >= held.deadline_ms {
                let _ = actions.try_push(key.action());
                held.deadline_ms = now_ms + self.arr_ms;
                self.held[idx] = Some(held);
            }
        }

        actions
    }
}

impl Default for KeyRepeat {
    fn default() -> Self {
        Self::new()
    }
}
