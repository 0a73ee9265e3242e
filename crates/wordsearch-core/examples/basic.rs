//! Basic example of using the word-search engine

use wordsearch_core::{GeneratorConfig, PuzzleGenerator, WordProvider};

fn main() {
    println!("Generating a 6x4 puzzle with 3 hidden words...\n");
    let mut generator = PuzzleGenerator::with_config(GeneratorConfig::default());
    let provider = WordProvider::builtin_only();

    match generator.generate(&provider) {
        Ok(puzzle) => {
            println!("{}\n", puzzle.grid());
            for hint in puzzle.hints() {
                println!(
                    "{}: {}, starts at ({}, {})",
                    hint.word,
                    hint.direction.label(),
                    hint.row,
                    hint.col
                );
            }
        }
        Err(e) => println!("Generation failed: {}", e),
    }
}
