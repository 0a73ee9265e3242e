use clap::ValueEnum;
use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Default text color
    pub fg: Color,
    /// Grid border color
    pub border: Color,
    /// Grid letter color
    pub letter: Color,
    /// Title color
    pub title: Color,
    /// Hint text color
    pub hint: Color,
    /// Key binding text color
    pub key: Color,
    /// Status message color
    pub message: Color,
    /// Answer overlay palette, cycled per word
    pub palette: Vec<Color>,
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 100, g: 105, b: 125 },
            letter: Color::Rgb { r: 235, g: 235, b: 245 },
            title: Color::Rgb { r: 130, g: 180, b: 255 },
            hint: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
            message: Color::Rgb { r: 90, g: 255, b: 130 },
            palette: vec![
                Color::Rgb { r: 255, g: 90, b: 90 },
                Color::Rgb { r: 80, g: 180, b: 255 },
                Color::Rgb { r: 90, g: 255, b: 130 },
                Color::Rgb { r: 255, g: 140, b: 255 },
                Color::Rgb { r: 90, g: 240, b: 240 },
                Color::Rgb { r: 255, g: 210, b: 100 },
            ],
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 150, g: 150, b: 170 },
            letter: Color::Rgb { r: 20, g: 20, b: 30 },
            title: Color::Rgb { r: 30, g: 100, b: 200 },
            hint: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
            message: Color::Rgb { r: 40, g: 160, b: 60 },
            palette: vec![
                Color::Rgb { r: 220, g: 50, b: 50 },
                Color::Rgb { r: 30, g: 100, b: 200 },
                Color::Rgb { r: 40, g: 160, b: 60 },
                Color::Rgb { r: 170, g: 60, b: 200 },
                Color::Rgb { r: 20, g: 150, b: 160 },
                Color::Rgb { r: 200, g: 120, b: 20 },
            ],
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            fg: Color::White,
            border: Color::Grey,
            letter: Color::White,
            title: Color::Cyan,
            hint: Color::Grey,
            key: Color::Yellow,
            message: Color::Green,
            palette: vec![
                Color::Red,
                Color::Blue,
                Color::Green,
                Color::Magenta,
                Color::Cyan,
                Color::Yellow,
            ],
        }
    }
}

/// Theme selection on the command line and the `t` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeKind {
    Dark,
    Light,
    HighContrast,
}

impl ThemeKind {
    pub fn theme(self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::HighContrast => Theme::high_contrast(),
        }
    }

    pub fn next(self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::HighContrast,
            ThemeKind::HighContrast => ThemeKind::Dark,
        }
    }
}
