//! RNG module - seeded piece generation and the upcoming-piece queue
//!
//! Every draw picks uniformly from the full catalog, so runs of the same
//! piece are possible. The queue is topped up to [`QUEUE_MIN_LEN`] entries
//! so callers can always preview what comes next.
//!
//! The generator is a simple LCG, giving deterministic sequences per seed.

use arrayvec::ArrayVec;
use brickdrop_types::{PieceKind, QUEUE_MIN_LEN};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Upcoming-piece queue backed by a seeded RNG.
///
/// Holds at least [`QUEUE_MIN_LEN`] pieces at all times; `draw` removes the
/// front and appends one fresh piece, so the preview length is stable.
#[derive(Debug, Clone)]
pub struct PieceQueue {
    /// Pieces waiting to spawn, front first
    queue: ArrayVec<PieceKind, 8>,
    /// RNG for piece selection
    rng: SimpleRng,
}

impl PieceQueue {
    /// Create a new piece queue with the given seed
    pub fn new(seed: u32) -> Self {
        let mut queue = Self {
            queue: ArrayVec::new(),
            rng: SimpleRng::new(seed),
        };
        queue.top_up();
        queue
    }

    /// One uniform draw from the catalog.
    fn random_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }

    /// Refill until the preview holds at least the minimum count.
    fn top_up(&mut self) {
        while self.queue.len() < QUEUE_MIN_LEN {
            let kind = self.random_kind();
            self.queue.push(kind);
        }
    }

    /// Draw the next piece, keeping the preview length stable.
    pub fn draw(&mut self) -> PieceKind {
        self.top_up();
        let piece = self.queue.remove(0);
        let refill = self.random_kind();
        self.queue.push(refill);
        piece
    }

    /// Peek at the next piece without removing it
    pub fn peek(&self) -> Option<PieceKind> {
        self.queue.first().copied()
    }

    /// The queued pieces, front first.
    pub fn upcoming(&self) -> &[PieceKind] {
        &self.queue
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
