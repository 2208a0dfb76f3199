//! Bag module - 7-bag random piece generation
//!
//! Implements the "7-bag" randomization algorithm used in modern Tetris.
//! Each bag contains one of each piece (I, O, T, S, Z, J, L), shuffled.
//! Draws from the bag until empty, then generates a new bag.
//!
//! The shuffle is driven by a seeded ChaCha8 generator so a seed fully determines
//! the piece sequence.

use arrayvec::ArrayVec;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::types::{PieceKind, BAG_SIZE};

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct Bag {
    /// Pieces left in the current bag; drawn from the back
    pieces: ArrayVec<PieceKind, BAG_SIZE>,
    rng: ChaCha8Rng,
    seed: u64,
}

impl Bag {
    /// Create an empty bag; the first draw shuffles a full set.
    pub fn new(seed: u64) -> Self {
        Self {
            pieces: ArrayVec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a bag with a seed taken from the thread-local generator.
    pub fn from_random_seed() -> Self {
        Self::new(rand::random())
    }

    /// Generate a new shuffled bag
    fn refill(&mut self) {
        self.pieces.clear();
        self.pieces.extend(PieceKind::ALL);
        self.pieces.shuffle(&mut self.rng);
    }

    /// Draw the next piece, refilling first if the bag is empty
    pub fn next_piece(&mut self) -> PieceKind {
        loop {
            if let Some(kind) = self.pieces.pop() {
                return kind;
            }
            self.refill();
        }
    }

    /// Pieces left before the next refill
    pub fn remaining(&self) -> usize {
        self.pieces.len()
    }

    /// Seed this bag was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for Bag {
    fn default() -> Self {
        Self::new(1)
    }
}
