//! Line-oriented terminal access.
//!
//! Everything the front-end prints or reads goes through [`Console`], so the
//! views run the same against a real terminal and a scripted one.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub trait Console {
    /// Read one line without its trailing newline. `Ok(None)` means end-of-file.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the read fails.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write `text` as-is, without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the write fails.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// # Errors
    ///
    /// Returns the underlying I/O error if the write fails.
    fn clear(&mut self) -> io::Result<()>;

    /// # Errors
    ///
    /// Returns the underlying I/O error if the write fails.
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write(text)?;
        self.write("\n")
    }
}

/// Read one line, replacing bytes that are not UTF-8 so a stray byte reads
/// as a bad answer instead of a failed stream.
fn read_lossy_line(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();
    if reader.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(None);
    }
    let mut line = String::from_utf8_lossy(&bytes).into_owned();
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Stdin/stdout console.
#[derive(Debug, Default)]
pub struct Terminal {
    clear_screen: bool,
}

impl Terminal {
    #[must_use]
    pub fn new(clear_screen: bool) -> Self {
        Self { clear_screen }
    }
}

impl Console for Terminal {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        read_lossy_line(&mut io::stdin().lock())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            self.write("\x1B[2J\x1B[1;1H")
        } else {
            self.write("\n")
        }
    }
}

/// Console fed from canned input lines that records everything written.
///
/// Running out of lines behaves like end-of-file on a real terminal.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: String,
    clears: usize,
}

impl ScriptedConsole {
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
            clears: 0,
        }
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.input.push_back(line.into());
    }

    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    #[must_use]
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }

    #[must_use]
    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        self.output.push('\n');
        Ok(())
    }
}
