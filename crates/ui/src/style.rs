//! Semantic colours for terminal output.
//!
//! Colour is decided here once so the renderers only say what a piece of
//! text *is*. `colored` drops the escapes on its own when colour is disabled.

use colored::{ColoredString, Colorize};

pub trait LearnStyle {
    fn heading(self) -> ColoredString;
    fn narrator(self) -> ColoredString;
    fn failure(self) -> ColoredString;
    fn success(self) -> ColoredString;
    fn info(self) -> ColoredString;
    fn muted(self) -> ColoredString;
    fn option(self) -> ColoredString;
    fn sentinel(self) -> ColoredString;
    fn code(self) -> ColoredString;
    fn body(self) -> ColoredString;
}

impl LearnStyle for &str {
    fn heading(self) -> ColoredString {
        self.cyan().bold()
    }

    fn narrator(self) -> ColoredString {
        self.yellow()
    }

    fn failure(self) -> ColoredString {
        self.red()
    }

    fn success(self) -> ColoredString {
        self.green()
    }

    fn info(self) -> ColoredString {
        self.cyan()
    }

    fn muted(self) -> ColoredString {
        self.bright_black()
    }

    fn option(self) -> ColoredString {
        self.cyan()
    }

    fn sentinel(self) -> ColoredString {
        self.yellow().dimmed()
    }

    fn code(self) -> ColoredString {
        self.yellow()
    }

    fn body(self) -> ColoredString {
        self.white()
    }
}

/// Turn colour on or off for the whole process.
pub fn set_color_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}
