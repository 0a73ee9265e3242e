use log::debug;
use serde::Serialize;

use crate::alphabet::{Alphabet, Hangul};
use crate::grid::Grid;
use crate::rng::Prng;
use crate::words::{WordProvider, WordSourceError};
use crate::{Direction, Position};

/// Configuration for puzzle generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Grid width in columns
    pub width: usize,
    /// Grid height in rows
    pub height: usize,
    /// Number of words to hide
    pub word_count: usize,
    /// Random (direction, anchor) attempts per word before the whole pass
    /// is abandoned
    pub max_word_attempts: usize,
    /// Full passes before generation gives up on the configuration
    pub max_passes: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 6,
            height: 4,
            word_count: 3,
            max_word_attempts: 100,
            max_passes: 1000,
        }
    }
}

impl GeneratorConfig {
    /// Longest word the grid can hold in any direction.
    pub fn max_word_len(&self) -> usize {
        self.width.min(self.height)
    }
}

/// A word fixed to its path through the grid.
///
/// Invariants: `cells` holds one coordinate per character, consecutive
/// coordinates differ by exactly the direction's unit step, and the grid
/// character at each coordinate equals the corresponding character of the
/// word.
#[derive(Debug, Clone, Serialize)]
pub struct Placement {
    pub word: String,
    pub direction: Direction,
    pub cells: Vec<Position>,
}

impl Placement {
    pub fn start(&self) -> Position {
        self.cells[0]
    }
}

/// What the player is told about one hidden word: the word, the direction
/// it runs, and its 1-indexed starting coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hint {
    pub word: String,
    pub direction: Direction,
    pub row: usize,
    pub col: usize,
}

/// Errors that can occur during generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Width or height is zero
    EmptyGrid,
    /// The word list was empty or contained an empty word
    NoWords,
    /// A word cannot fit in the grid in any direction
    WordTooLong { word: String, max: usize },
    /// Every pass hit a word that would not place within its attempt
    /// budget
    PassesExhausted { passes: usize },
    /// The word source could not supply enough eligible words
    Source(WordSourceError),
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid dimensions must be at least 1x1"),
            Self::NoWords => write!(f, "no words to place"),
            Self::WordTooLong { word, max } => {
                write!(
                    f,
                    "word {:?} does not fit in the grid (at most {} characters)",
                    word, max
                )
            }
            Self::PassesExhausted { passes } => {
                write!(
                    f,
                    "could not place every word within {} generation passes",
                    passes
                )
            }
            Self::Source(e) => write!(f, "word source: {}", e),
        }
    }
}

impl std::error::Error for GenerateError {}

impl From<WordSourceError> for GenerateError {
    fn from(e: WordSourceError) -> Self {
        Self::Source(e)
    }
}

/// A complete generated puzzle: a fully populated grid and one placement
/// per word, in placement order.
///
/// A puzzle is created wholesale by one generation pass and replaced
/// wholesale on restart; it is never patched in place.
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    placements: Vec<Placement>,
}

impl Puzzle {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn words(&self) -> Vec<&str> {
        self.placements.iter().map(|p| p.word.as_str()).collect()
    }

    pub fn word_count(&self) -> usize {
        self.placements.len()
    }

    /// One hint per word, in placement order.
    ///
    /// The reported direction is derived from the path endpoints: equal
    /// rows mean horizontal, equal columns vertical, anything else
    /// diagonal. A single-character path has no distinguishable endpoints,
    /// so it reports the direction it was placed with.
    pub fn hints(&self) -> Vec<Hint> {
        self.placements
            .iter()
            .map(|p| {
                let first = p.cells[0];
                let last = p.cells[p.cells.len() - 1];
                let direction = if p.cells.len() < 2 {
                    p.direction
                } else if first.row == last.row {
                    Direction::Horizontal
                } else if first.col == last.col {
                    Direction::Vertical
                } else {
                    Direction::Diagonal
                };
                Hint {
                    word: p.word.clone(),
                    direction,
                    row: first.row + 1,
                    col: first.col + 1,
                }
            })
            .collect()
    }

    /// Flat serializable view, for JSON export.
    pub fn export(&self) -> PuzzleExport {
        PuzzleExport {
            width: self.grid.width(),
            height: self.grid.height(),
            rows: self
                .grid
                .rows()
                .into_iter()
                .map(|row| row.into_iter().collect())
                .collect(),
            hints: self.hints(),
            placements: self.placements.clone(),
        }
    }
}

/// Serializable snapshot of a puzzle.
#[derive(Debug, Clone, Serialize)]
pub struct PuzzleExport {
    pub width: usize,
    pub height: usize,
    pub rows: Vec<String>,
    pub hints: Vec<Hint>,
    pub placements: Vec<Placement>,
}

/// Word-search puzzle generator
pub struct PuzzleGenerator {
    config: GeneratorConfig,
    rng: Prng,
    alphabet: Box<dyn Alphabet>,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator {
    /// Create a generator with the default configuration and Hangul
    /// filler.
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator with a custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: Prng::new(),
            alphabet: Box::new(Hangul),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            rng: Prng::with_seed(seed),
            alphabet: Box::new(Hangul),
        }
    }

    /// Replace the filler alphabet.
    pub fn with_alphabet(mut self, alphabet: Box<dyn Alphabet>) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a puzzle from a freshly sampled word set.
    ///
    /// Restart is this same operation: the caller swaps the returned
    /// puzzle in for the old one.
    pub fn generate(&mut self, provider: &WordProvider) -> Result<Puzzle, GenerateError> {
        self.check_dimensions()?;
        let words = provider.pick(
            self.config.word_count,
            self.config.max_word_len(),
            &mut self.rng,
        )?;
        self.generate_with_words(&words)
    }

    /// Generate a puzzle hiding exactly the given words.
    ///
    /// Rejects infeasible input up front: an empty list, an empty word, or
    /// a word longer than both grid dimensions fails fast instead of
    /// looping.
    pub fn generate_with_words(&mut self, words: &[String]) -> Result<Puzzle, GenerateError> {
        self.check_dimensions()?;
        if words.is_empty() {
            return Err(GenerateError::NoWords);
        }
        let max_len = self.config.max_word_len();
        for word in words {
            let len = word.chars().count();
            if len == 0 {
                return Err(GenerateError::NoWords);
            }
            if len > max_len {
                return Err(GenerateError::WordTooLong {
                    word: word.clone(),
                    max: max_len,
                });
            }
        }

        for pass in 0..self.config.max_passes {
            if let Some((mut grid, placements)) = self.try_pass(words) {
                self.fill_empty_cells(&mut grid);
                if pass > 0 {
                    debug!("placed all {} words on pass {}", words.len(), pass + 1);
                }
                return Ok(Puzzle { grid, placements });
            }
        }
        Err(GenerateError::PassesExhausted {
            passes: self.config.max_passes,
        })
    }

    fn check_dimensions(&self) -> Result<(), GenerateError> {
        if self.config.width == 0 || self.config.height == 0 {
            return Err(GenerateError::EmptyGrid);
        }
        Ok(())
    }

    /// One full placement pass. Any word failing its attempt budget
    /// abandons the whole grid; there is no per-word repair.
    fn try_pass(&mut self, words: &[String]) -> Option<(Grid, Vec<Placement>)> {
        let mut grid = Grid::new(self.config.width, self.config.height);
        let mut placements = Vec::with_capacity(words.len());
        for word in words {
            match self.place_word(&mut grid, word) {
                Some(placement) => placements.push(placement),
                None => {
                    debug!(
                        "could not place {:?} within {} attempts, regenerating",
                        word, self.config.max_word_attempts
                    );
                    return None;
                }
            }
        }
        Some((grid, placements))
    }

    fn place_word(&mut self, grid: &mut Grid, word: &str) -> Option<Placement> {
        let chars: Vec<char> = word.chars().collect();
        let span = chars.len() - 1;

        for _ in 0..self.config.max_word_attempts {
            let direction = Direction::ALL[self.rng.next_usize(Direction::ALL.len())];
            let (dr, dc) = direction.delta();
            let row = self.rng.next_usize(self.config.height - span * dr);
            let col = self.rng.next_usize(self.config.width - span * dc);

            // Accept iff every path cell is still empty or already holds
            // the identical character.
            let fits = chars.iter().enumerate().all(|(i, &ch)| {
                let pos = Position::new(row + i * dr, col + i * dc);
                grid.get(pos).map_or(true, |existing| existing == ch)
            });
            if !fits {
                continue;
            }

            let cells: Vec<Position> = (0..chars.len())
                .map(|i| Position::new(row + i * dr, col + i * dc))
                .collect();
            for (pos, &ch) in cells.iter().zip(&chars) {
                grid.set(*pos, ch);
            }
            return Some(Placement {
                word: word.to_string(),
                direction,
                cells,
            });
        }
        None
    }

    fn fill_empty_cells(&mut self, grid: &mut Grid) {
        let empties: Vec<Position> = grid.positions().filter(|&p| grid.get(p).is_none()).collect();
        for pos in empties {
            let ch = self.alphabet.filler(self.rng.next_u32());
            grid.set(pos, ch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::FixedWords;
    use crate::Latin;

    fn config(width: usize, height: usize, word_count: usize) -> GeneratorConfig {
        GeneratorConfig {
            width,
            height,
            word_count,
            ..GeneratorConfig::default()
        }
    }

    fn korean_words() -> Vec<String> {
        vec!["사과".to_string(), "바나나".to_string(), "키위".to_string()]
    }

    /// Every placement must spell its word along its path, cell by cell.
    fn assert_placements_consistent(puzzle: &Puzzle) {
        for placement in puzzle.placements() {
            let chars: Vec<char> = placement.word.chars().collect();
            assert_eq!(placement.cells.len(), chars.len());

            let (dr, dc) = placement.direction.delta();
            for (i, (&pos, &ch)) in placement.cells.iter().zip(&chars).enumerate() {
                assert_eq!(
                    puzzle.grid().get(pos),
                    Some(ch),
                    "cell {:?} of {:?} does not hold {:?}",
                    pos,
                    placement.word,
                    ch
                );
                if i > 0 {
                    let prev = placement.cells[i - 1];
                    assert_eq!(pos.row, prev.row + dr);
                    assert_eq!(pos.col, prev.col + dc);
                }
            }
        }
    }

    #[test]
    fn example_scenario_terminates_fully_populated() {
        // 6x4 grid, words of length 2, 3, 2: must place all three with no
        // leftover empty cells in the 24-cell grid.
        let mut generator = PuzzleGenerator::with_seed(config(6, 4, 3), 42);
        let puzzle = generator.generate_with_words(&korean_words()).unwrap();

        assert_eq!(puzzle.word_count(), 3);
        assert_eq!(puzzle.grid().empty_count(), 0);
        assert!(puzzle.grid().is_full());
        assert_placements_consistent(&puzzle);
    }

    #[test]
    fn every_word_is_covered() {
        let mut generator = PuzzleGenerator::with_seed(config(8, 8, 3), 7);
        let puzzle = generator.generate_with_words(&korean_words()).unwrap();

        let words = puzzle.words();
        for word in ["사과", "바나나", "키위"] {
            assert!(words.contains(&word), "{:?} missing from placements", word);
        }
        assert_placements_consistent(&puzzle);
    }

    #[test]
    fn shared_cells_agree_between_placements() {
        // A dense grid forces overlaps across many generations; whenever
        // two paths cross, both must assign the same character.
        for seed in 0..20 {
            let mut generator = PuzzleGenerator::with_seed(config(5, 5, 4), seed)
                .with_alphabet(Box::new(Latin));
            let words: Vec<String> = ["stone", "notes", "tones", "onset"]
                .iter()
                .map(|w| w.to_string())
                .collect();
            let puzzle = generator.generate_with_words(&words).unwrap();
            assert_placements_consistent(&puzzle);
            assert!(puzzle.grid().is_full());
        }
    }

    #[test]
    fn hints_match_placements() {
        let mut generator = PuzzleGenerator::with_seed(config(6, 4, 3), 42);
        let puzzle = generator.generate_with_words(&korean_words()).unwrap();

        let hints = puzzle.hints();
        assert_eq!(hints.len(), puzzle.placements().len());
        for (hint, placement) in hints.iter().zip(puzzle.placements()) {
            assert_eq!(hint.word, placement.word);
            assert_eq!(hint.direction, placement.direction);
            assert_eq!(hint.row, placement.start().row + 1);
            assert_eq!(hint.col, placement.start().col + 1);
        }
    }

    #[test]
    fn single_character_word_reports_its_placed_direction() {
        let mut generator =
            PuzzleGenerator::with_seed(config(3, 3, 1), 5).with_alphabet(Box::new(Latin));
        let puzzle = generator
            .generate_with_words(&["x".to_string()])
            .unwrap();

        let hints = puzzle.hints();
        assert_eq!(hints.len(), 1);
        assert_eq!(hints[0].direction, puzzle.placements()[0].direction);
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let words = korean_words();
        let mut a = PuzzleGenerator::with_seed(config(6, 4, 3), 99);
        let mut b = PuzzleGenerator::with_seed(config(6, 4, 3), 99);

        let first = a.generate_with_words(&words).unwrap();
        let second = b.generate_with_words(&words).unwrap();
        assert_eq!(first.grid().rows(), second.grid().rows());
    }

    #[test]
    fn seeded_generation_with_provider_is_deterministic() {
        let provider = WordProvider::builtin_only();
        let mut a = PuzzleGenerator::with_seed(config(6, 4, 3), 123);
        let mut b = PuzzleGenerator::with_seed(config(6, 4, 3), 123);

        let first = a.generate(&provider).unwrap();
        let second = b.generate(&provider).unwrap();
        assert_eq!(first.grid().rows(), second.grid().rows());
        assert_eq!(first.words(), second.words());
    }

    #[test]
    fn restart_preserves_word_count() {
        let provider = WordProvider::new(Box::new(FixedWords::new(&[
            "하나", "둘", "셋", "넷", "다섯", "여섯",
        ])));
        let mut generator = PuzzleGenerator::with_seed(config(7, 7, 3), 1);

        let first = generator.generate(&provider).unwrap();
        let second = generator.generate(&provider).unwrap();
        assert_eq!(first.word_count(), 3);
        assert_eq!(second.word_count(), 3);
    }

    #[test]
    fn oversized_word_is_rejected_before_placement() {
        let mut generator = PuzzleGenerator::with_seed(config(3, 3, 1), 0);
        let err = generator
            .generate_with_words(&["바나나맛우유".to_string()])
            .unwrap_err();
        assert_eq!(
            err,
            GenerateError::WordTooLong {
                word: "바나나맛우유".to_string(),
                max: 3
            }
        );
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let mut generator = PuzzleGenerator::with_seed(config(0, 4, 1), 0);
        assert_eq!(
            generator.generate_with_words(&["사과".to_string()]).unwrap_err(),
            GenerateError::EmptyGrid
        );
    }

    #[test]
    fn empty_word_list_is_rejected() {
        let mut generator = PuzzleGenerator::with_seed(config(6, 4, 3), 0);
        assert_eq!(
            generator.generate_with_words(&[]).unwrap_err(),
            GenerateError::NoWords
        );
    }

    #[test]
    fn impossible_packing_exhausts_its_pass_budget() {
        // Five two-letter words over ten distinct letters cannot share any
        // cell, and a 2x2 grid only has four.
        let words: Vec<String> = ["ab", "cd", "ef", "gh", "ij"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let mut generator = PuzzleGenerator::with_seed(
            GeneratorConfig {
                width: 2,
                height: 2,
                word_count: 5,
                max_word_attempts: 20,
                max_passes: 10,
            },
            0,
        )
        .with_alphabet(Box::new(Latin));

        assert_eq!(
            generator.generate_with_words(&words).unwrap_err(),
            GenerateError::PassesExhausted { passes: 10 }
        );
    }

    #[test]
    fn infeasible_word_request_surfaces_source_error() {
        // A 2x2 grid limits words to two characters; the builtin list has
        // nine such entries, so asking for twelve must fail fast.
        let provider = WordProvider::builtin_only();
        let mut generator = PuzzleGenerator::with_seed(config(2, 2, 12), 0);
        assert!(matches!(
            generator.generate(&provider).unwrap_err(),
            GenerateError::Source(WordSourceError::TooFewWords { .. })
        ));
    }

    #[test]
    fn export_serializes_to_json() {
        let mut generator = PuzzleGenerator::with_seed(config(6, 4, 3), 42);
        let puzzle = generator.generate_with_words(&korean_words()).unwrap();

        let json = serde_json::to_string(&puzzle.export()).unwrap();
        assert!(json.contains("\"width\":6"));
        assert!(json.contains("사과"));
        assert!(json.contains("\"hints\""));
    }
}
