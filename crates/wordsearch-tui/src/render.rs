use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Print, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io;
use wordsearch_core::Puzzle;

use crate::app::App;

/// Terminal columns taken by one grid cell. Hangul syllables render two
/// columns wide, so three columns leaves at least one space between
/// cells.
const CELL_WIDTH: u16 = 3;

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, _term_height) = terminal::size()?;

    execute!(stdout, Clear(ClearType::All))?;

    let puzzle = app.puzzle();
    let grid_cols = puzzle.grid().width() as u16;
    let box_width = grid_cols * CELL_WIDTH + 3;
    let start_x = if term_width > box_width {
        (term_width - box_width) / 2
    } else {
        0
    };

    execute!(
        stdout,
        MoveTo(start_x, 1),
        SetForegroundColor(app.theme.title),
        Print("Word Search")
    )?;

    render_grid(stdout, app, start_x, 3)?;

    let mut y = 4 + puzzle.grid().height() as u16 + 1;
    if app.show_hints {
        y = render_hints(stdout, app, start_x, y)?;
    }

    execute!(
        stdout,
        MoveTo(start_x, y + 1),
        SetForegroundColor(app.theme.key),
        Print("h"),
        SetForegroundColor(app.theme.fg),
        Print(" hints  "),
        SetForegroundColor(app.theme.key),
        Print("a"),
        SetForegroundColor(app.theme.fg),
        Print(" answer  "),
        SetForegroundColor(app.theme.key),
        Print("r"),
        SetForegroundColor(app.theme.fg),
        Print(" restart  "),
        SetForegroundColor(app.theme.key),
        Print("t"),
        SetForegroundColor(app.theme.fg),
        Print(" theme  "),
        SetForegroundColor(app.theme.key),
        Print("q"),
        SetForegroundColor(app.theme.fg),
        Print(" quit")
    )?;

    if let Some(ref msg) = app.message {
        execute!(
            stdout,
            MoveTo(start_x, y + 3),
            SetForegroundColor(app.theme.message),
            Print(msg)
        )?;
    }

    Ok(())
}

fn render_grid(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let puzzle = app.puzzle();
    let grid = puzzle.grid();
    let inner = grid.width() as u16 * CELL_WIDTH + 1;

    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(app.theme.border),
        Print(format!("┌{}┐", "─".repeat(inner as usize)))
    )?;

    for (row, chars) in grid.rows().iter().enumerate() {
        let line_y = y + 1 + row as u16;
        execute!(
            stdout,
            MoveTo(x, line_y),
            SetForegroundColor(app.theme.border),
            Print("│ ")
        )?;

        for (col, &ch) in chars.iter().enumerate() {
            let color = match answer_index(puzzle, row, col) {
                Some(i) if app.show_answer => {
                    app.theme.palette[i % app.theme.palette.len()]
                }
                _ => app.theme.letter,
            };
            let pad = CELL_WIDTH as usize - display_width(ch);
            execute!(
                stdout,
                SetForegroundColor(color),
                Print(ch),
                Print(" ".repeat(pad))
            )?;
        }

        execute!(
            stdout,
            SetForegroundColor(app.theme.border),
            Print("│")
        )?;
    }

    execute!(
        stdout,
        MoveTo(x, y + 1 + grid.height() as u16),
        SetForegroundColor(app.theme.border),
        Print(format!("└{}┘", "─".repeat(inner as usize)))
    )?;

    Ok(())
}

fn render_hints(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<u16> {
    let mut line = y;
    execute!(
        stdout,
        MoveTo(x, line),
        SetForegroundColor(app.theme.title),
        Print("Hints")
    )?;
    for hint in app.puzzle().hints() {
        line += 1;
        execute!(
            stdout,
            MoveTo(x, line),
            SetForegroundColor(app.theme.hint),
            Print(format!(
                "{}: {}, starts at ({}, {})",
                hint.word,
                hint.direction.label(),
                hint.row,
                hint.col
            ))
        )?;
    }
    Ok(line + 1)
}

/// Index of the placement covering the cell, if any. Cells shared by two
/// words take the first word's color.
fn answer_index(puzzle: &Puzzle, row: usize, col: usize) -> Option<usize> {
    puzzle
        .placements()
        .iter()
        .position(|p| p.cells.iter().any(|c| c.row == row && c.col == col))
}

/// Terminal columns a grid character occupies. Hangul syllables are
/// double-width; the filler and word scripts never mix, so checking the
/// ASCII range is enough.
fn display_width(ch: char) -> usize {
    if ch.is_ascii() {
        1
    } else {
        2
    }
}
