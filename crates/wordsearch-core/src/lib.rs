//! Word-search puzzle engine.
//!
//! The engine hides a small set of words in a rectangular character grid
//! (horizontally, vertically, or diagonally), fills the remaining cells
//! with camouflage characters from the same script, and exposes the result
//! through hints and a word-to-path answer mapping. Word candidates come
//! from a pluggable [`WordSource`]; the bundled remote source queries a
//! Korean dictionary service and falls back to a builtin list on any
//! failure.

mod alphabet;
mod direction;
mod generator;
mod grid;
mod rng;
mod words;

pub use alphabet::{Alphabet, Hangul, Latin};
pub use direction::Direction;
pub use generator::{
    GenerateError, GeneratorConfig, Hint, Placement, Puzzle, PuzzleExport, PuzzleGenerator,
};
pub use grid::Grid;
pub use rng::Prng;
pub use words::{
    BuiltinWords, DictionaryApi, FixedWords, WordProvider, WordSource, WordSourceError,
    WordSourceResult, BUILTIN_WORDS,
};

use serde::Serialize;

/// A zero-based (row, column) grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The position one step away in the given direction.
    pub fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row + dr, self.col + dc)
    }
}
