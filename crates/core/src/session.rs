//! Session module - the complete game state machine
//!
//! Ties together the arena, piece catalog, queue, and scoring behind a
//! single [`GameSession`] value. All rule decisions live here: the phase
//! machine, gravity timing, wall kicks, hold, locking, and sweep scoring.
//! Observers read state through accessors and drain [`GameEvent`]s once
//! per frame.

use arrayvec::ArrayVec;
use brickdrop_types::{GameAction, GameEvent, GamePhase, PieceKind, BASE_DROP_MS};

use crate::arena::Arena;
use crate::matrix::ShapeMatrix;
use crate::pieces::{spawn_matrix, spawn_x};
use crate::rng::PieceQueue;
use crate::scoring::{drop_interval_ms, level_for_score, sweep_score};

/// Upper bound on buffered events between drains.
const EVENT_BUF: usize = 32;

/// The falling piece: its catalog kind, current (possibly rotated) matrix,
/// and the arena position of the matrix origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub matrix: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// A fresh piece at its spawn position (centered, top row).
    fn spawn(kind: PieceKind) -> Self {
        let matrix = spawn_matrix(kind);
        let x = spawn_x(&matrix);
        Self {
            kind,
            matrix,
            x,
            y: 0,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession {
    phase: GamePhase,
    arena: Arena,
    active: Option<ActivePiece>,
    queue: PieceQueue,
    hold: Option<PieceKind>,
    can_hold: bool,
    score: u32,
    level: u32,
    drop_counter_ms: u32,
    drop_interval_ms: u32,
    events: ArrayVec<GameEvent, EVENT_BUF>,
}

impl GameSession {
    /// Create a new session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            phase: GamePhase::NotStarted,
            arena: Arena::new(),
            active: None,
            queue: PieceQueue::new(seed),
            hold: None,
            can_hold: true,
            score: 0,
            level: 1,
            drop_counter_ms: 0,
            drop_interval_ms: BASE_DROP_MS,
            events: ArrayVec::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    /// Queued pieces, next to spawn first.
    pub fn upcoming(&self) -> &[PieceKind] {
        self.queue.upcoming()
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Current gravity interval based on level
    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    /// Take the events buffered since the last drain.
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, EVENT_BUF> {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: GameEvent) {
        // Full buffer drops the newest event rather than reallocating.
        let _ = self.events.try_push(event);
    }

    /// Begin play from the title screen and spawn the first piece.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::NotStarted {
            return false;
        }
        self.phase = GamePhase::Running;
        self.spawn_piece();
        true
    }

    /// Begin a fresh run after a game over.
    ///
    /// Resets the arena, score, and hold slot but keeps the piece queue, so
    /// the upcoming preview carries over into the new run.
    pub fn restart(&mut self) -> bool {
        if self.phase != GamePhase::GameOver {
            return false;
        }
        self.arena.clear();
        self.active = None;
        self.hold = None;
        self.can_hold = true;
        self.score = 0;
        self.level = 1;
        self.drop_counter_ms = 0;
        self.drop_interval_ms = BASE_DROP_MS;
        self.phase = GamePhase::Running;
        self.spawn_piece();
        true
    }

    /// Toggle between running and paused. No-op in any other phase.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Running => {
                self.phase = GamePhase::Paused;
                true
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Running;
                true
            }
            _ => false,
        }
    }

    /// Apply a game action. Returns whether the action had an effect.
    ///
    /// Piece actions only apply while running; lifecycle actions gate on
    /// their own phases.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => self.start(),
            GameAction::Restart => self.restart(),
            GameAction::Pause => self.toggle_pause(),
            _ if self.phase != GamePhase::Running => false,
            GameAction::MoveLeft => self.try_move(-1),
            GameAction::MoveRight => self.try_move(1),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::RotateCw => self.try_rotate(1),
            GameAction::RotateCcw => self.try_rotate(-1),
            GameAction::Hold => self.hold(),
        }
    }

    /// Main game tick - accumulate elapsed time and apply gravity.
    ///
    /// Returns true when the active piece advanced (or locked) this tick.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        if self.active.is_none() {
            return false;
        }

        self.drop_counter_ms += elapsed_ms;
        if self.drop_counter_ms >= self.drop_interval_ms {
            self.drop_counter_ms = 0;
            self.step_down();
            return true;
        }

        false
    }

    /// Try to shift the active piece horizontally.
    fn try_move(&mut self, dx: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        if self.arena.collides(&active.matrix, active.x + dx, active.y) {
            return false;
        }

        self.active = Some(ActivePiece {
            x: active.x + dx,
            ..active
        });
        self.push_event(GameEvent::Moved);
        true
    }

    /// Advance the active piece one row, locking it on contact.
    ///
    /// Returns true when the piece moved down, false when it locked.
    fn step_down(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        if self.arena.collides(&active.matrix, active.x, active.y + 1) {
            self.lock_active();
            return false;
        }

        self.active = Some(ActivePiece {
            y: active.y + 1,
            ..active
        });
        true
    }

    /// Player-driven drop: one gravity step now, gravity timer restarted.
    fn soft_drop(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }
        self.step_down();
        self.drop_counter_ms = 0;
        true
    }

    /// Drop the active piece straight to the floor and lock it.
    fn hard_drop(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let mut y = active.y;
        while !self.arena.collides(&active.matrix, active.x, y + 1) {
            y += 1;
        }

        self.active = Some(ActivePiece { y, ..active });
        self.lock_active();
        self.drop_counter_ms = 0;
        true
    }

    /// Rotate the active piece, kicking off walls when the turned matrix
    /// does not fit in place.
    ///
    /// Kick offsets alternate outward (+1, -2, +3, ...); the attempt is
    /// abandoned once an offset exceeds the matrix size, leaving the piece
    /// exactly as it was.
    fn try_rotate(&mut self, dir: i8) -> bool {
        let Some(mut active) = self.active else {
            return false;
        };

        active.matrix.rotate(dir);

        let mut offset: i8 = 1;
        while self.arena.collides(&active.matrix, active.x, active.y) {
            active.x += offset;
            offset = -(offset + if offset > 0 { 1 } else { -1 });
            if offset.unsigned_abs() > active.matrix.size() {
                return false;
            }
        }

        self.active = Some(active);
        self.push_event(GameEvent::Rotated);
        true
    }

    /// Stash the active piece, swapping with a previously held one.
    ///
    /// The first hold of a piece's run stashes it and spawns from the
    /// queue; later holds swap with the stored kind. The swap path places
    /// the stored piece at spawn without a collision test, matching the
    /// queue-spawn position exactly. One hold per locked piece.
    fn hold(&mut self) -> bool {
        if !self.can_hold {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        match self.hold {
            Some(stored) => {
                self.hold = Some(active.kind);
                self.active = Some(ActivePiece::spawn(stored));
            }
            None => {
                self.hold = Some(active.kind);
                self.spawn_piece();
            }
        }

        self.can_hold = false;
        self.push_event(GameEvent::Held);
        true
    }

    /// Draw the next piece and place it at spawn. A blocked spawn ends
    /// the run.
    fn spawn_piece(&mut self) {
        let kind = self.queue.draw();
        let piece = ActivePiece::spawn(kind);

        if self.arena.collides(&piece.matrix, piece.x, piece.y) {
            self.active = None;
            self.phase = GamePhase::GameOver;
            self.push_event(GameEvent::GameOver);
            return;
        }

        self.active = Some(piece);
    }

    /// Merge the active piece into the arena, sweep, score, and respawn.
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.arena.merge(&active.matrix, active.x, active.y);
        self.push_event(GameEvent::Locked);

        let cleared = self.arena.sweep();
        if !cleared.is_empty() {
            for &row in &cleared {
                self.push_event(GameEvent::RowCleared { row });
            }
            self.push_event(GameEvent::LinesCleared {
                count: cleared.len() as u8,
            });
            self.award_sweep(cleared.len() as u32);
        }

        self.can_hold = true;
        self.spawn_piece();
    }

    /// Add sweep points and refresh the level and gravity interval.
    fn award_sweep(&mut self, rows: u32) {
        self.score = self.score.saturating_add(sweep_score(rows));

        let level = level_for_score(self.score);
        if level > self.level {
            self.level = level;
            self.push_event(GameEvent::LevelUp { level });
        }
        self.drop_interval_ms = drop_interval_ms(self.level);
    }

    /// The row the active piece would land on if dropped now.
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;

        let mut y = active.y;
        while !self.arena.collides(&active.matrix, active.x, y + 1) {
            y += 1;
        }

        Some(y)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
