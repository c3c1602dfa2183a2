//! Blocking prompts. Invalid input re-prompts with an error line and never
//! returns; end-of-file surfaces as [`UiError::InputClosed`].

use std::io;

use crate::console::Console;
use crate::error::UiError;
use crate::render;
use crate::style::LearnStyle;

const CONTINUE_PROMPT: &str = "Press Enter to continue...";
const UNREADABLE_LINE: &str = "That line could not be read. Please try again.";

fn prompt(out: &mut dyn Console, text: &str) -> Result<(), UiError> {
    out.write(&format!(">> {text}: ").as_str().narrator().to_string())?;
    Ok(())
}

/// Next line from the console. A line the console cannot decode is reported
/// and skipped.
fn read(console: &mut dyn Console) -> Result<Option<String>, UiError> {
    loop {
        match console.read_line() {
            Ok(line) => return Ok(line),
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                render::error(console, UNREADABLE_LINE)?;
            }
            Err(err) => return Err(err.into()),
        }
    }
}

fn next_line(console: &mut dyn Console) -> Result<String, UiError> {
    read(console)?.ok_or(UiError::InputClosed)
}

/// Read an integer in `min..=max`.
///
/// # Errors
///
/// Returns `UiError::InputClosed` on end-of-file or `UiError::Io` if the
/// terminal fails.
pub fn menu_choice(console: &mut dyn Console, min: usize, max: usize) -> Result<usize, UiError> {
    loop {
        prompt(console, "Your choice")?;
        let line = next_line(console)?;
        match line.trim().parse::<usize>() {
            Ok(choice) if (min..=max).contains(&choice) => return Ok(choice),
            _ => render::error(
                console,
                &format!("Invalid choice. Please enter a number between {min} and {max}."),
            )?,
        }
    }
}

/// # Errors
///
/// Returns `UiError::InputClosed` on end-of-file or `UiError::Io` if the
/// terminal fails.
pub fn text(console: &mut dyn Console, label: &str) -> Result<String, UiError> {
    prompt(console, label)?;
    next_line(console)
}

/// Accepts `y`, `yes`, `n` or `no` in any case.
///
/// # Errors
///
/// Returns `UiError::InputClosed` on end-of-file or `UiError::Io` if the
/// terminal fails.
pub fn yes_no(console: &mut dyn Console, label: &str) -> Result<bool, UiError> {
    loop {
        prompt(console, &format!("{label} (y/n)"))?;
        match next_line(console)?.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => render::error(console, "Please enter 'y' or 'n'.")?,
        }
    }
}

/// Collect lines until a blank one. End-of-file also ends the block, unless
/// nothing was read yet.
///
/// # Errors
///
/// Returns `UiError::InputClosed` if the stream ends before the first line or
/// `UiError::Io` if the terminal fails.
pub fn multiline(console: &mut dyn Console) -> Result<String, UiError> {
    let mut lines: Vec<String> = Vec::new();
    loop {
        match read(console)? {
            None if lines.is_empty() => return Err(UiError::InputClosed),
            None => break,
            Some(line) if line.trim().is_empty() => break,
            Some(line) => lines.push(line),
        }
    }
    Ok(lines.join("\n"))
}

/// # Errors
///
/// Returns `UiError::InputClosed` on end-of-file or `UiError::Io` if the
/// terminal fails.
pub fn wait_for_enter(console: &mut dyn Console) -> Result<(), UiError> {
    wait_for(console, CONTINUE_PROMPT)
}

/// # Errors
///
/// Returns `UiError::InputClosed` on end-of-file or `UiError::Io` if the
/// terminal fails.
pub fn wait_for(console: &mut dyn Console, message: &str) -> Result<(), UiError> {
    console.write_line(&message.muted().to_string())?;
    next_line(console).map(drop)
}
