use crossterm::event::{KeyCode, KeyEvent};
use wordsearch_core::{
    FixedWords, GenerateError, GeneratorConfig, Latin, Puzzle, PuzzleGenerator, WordProvider,
};

use crate::cli::Args;
use crate::theme::{Theme, ThemeKind};

/// English word list for `--latin`, sized so a handful of short words
/// survive the length filter even on the default 6x4 grid.
const ENGLISH_WORDS: [&str; 14] = [
    "kiwi", "plum", "pear", "lime", "fig", "date", "apple", "mango", "lemon", "peach", "grape",
    "melon", "cherry", "banana",
];

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// The main application state
pub struct App {
    generator: PuzzleGenerator,
    provider: WordProvider,
    puzzle: Puzzle,
    theme_kind: ThemeKind,
    /// Color theme
    pub theme: Theme,
    /// Whether the hint panel is visible
    pub show_hints: bool,
    /// Whether the answer paths are colored in
    pub show_answer: bool,
    /// Message to display
    pub message: Option<String>,
    /// Message timer
    message_timer: u32,
}

impl App {
    /// Build the provider and generator from the command line and
    /// generate the first puzzle.
    pub fn new(args: &Args) -> Result<Self, GenerateError> {
        let config = GeneratorConfig {
            width: args.width,
            height: args.height,
            word_count: args.word_count,
            ..GeneratorConfig::default()
        };

        let provider = if args.latin {
            WordProvider::new(Box::new(FixedWords::new(&ENGLISH_WORDS)))
        } else if args.offline {
            WordProvider::builtin_only()
        } else {
            WordProvider::from_env()
        };

        let mut generator = match args.seed {
            Some(seed) => PuzzleGenerator::with_seed(config, seed),
            None => PuzzleGenerator::with_config(config),
        };
        if args.latin {
            generator = generator.with_alphabet(Box::new(Latin));
        }

        let puzzle = generator.generate(&provider)?;
        log::debug!(
            "generated a {}x{} puzzle hiding {} words",
            args.width,
            args.height,
            puzzle.word_count()
        );

        Ok(Self {
            generator,
            provider,
            puzzle,
            theme_kind: args.theme,
            theme: args.theme.theme(),
            show_hints: false,
            show_answer: false,
            message: None,
            message_timer: 0,
        })
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Show a temporary message
    pub fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_timer = 30; // ~3 seconds at 100ms poll
    }

    /// Update the message timer (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('h') => {
                self.show_hints = !self.show_hints;
            }
            KeyCode::Char('a') => {
                self.show_answer = !self.show_answer;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('t') => {
                self.theme_kind = self.theme_kind.next();
                self.theme = self.theme_kind.theme();
            }
            _ => {}
        }
        AppAction::Continue
    }

    /// Replace the puzzle wholesale with a freshly generated one. The
    /// word count stays as configured; the words themselves may change.
    fn restart(&mut self) {
        match self.generator.generate(&self.provider) {
            Ok(puzzle) => {
                self.puzzle = puzzle;
                self.show_hints = false;
                self.show_answer = false;
                self.show_message("New puzzle");
            }
            Err(e) => self.show_message(&format!("Restart failed: {}", e)),
        }
    }
}
