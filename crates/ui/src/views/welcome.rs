use rand::seq::IndexedRandom;

use crate::context::AppContext;
use crate::error::UiError;
use crate::input;
use crate::render;
use crate::style::LearnStyle;
use crate::vm::GREETINGS;

pub const ANONYMOUS_CODER: &str = "Anonymous Coder";

const BANNER: &[&str] = &[
    "╔══════════════════════════════════════════════════════════════╗",
    "║                                                              ║",
    "║     ██╗     ███████╗██╗  ██╗██╗ ██████╗ ██████╗ ███╗   ██╗    ║",
    "║     ██║     ██╔════╝╚██╗██╔╝██║██╔════╝██╔═══██╗████╗  ██║    ║",
    "║     ██║     █████╗   ╚███╔╝ ██║██║     ██║   ██║██╔██╗ ██║    ║",
    "║     ██║     ██╔══╝   ██╔██╗ ██║██║     ██║   ██║██║╚██╗██║    ║",
    "║     ███████╗███████╗██╔╝ ██╗██║╚██████╗╚██████╔╝██║ ╚████║    ║",
    "║     ╚══════╝╚══════╝╚═╝  ╚═╝╚═╝ ╚═════╝ ╚═════╝ ╚═╝  ╚═══╝    ║",
    "║                                                              ║",
    "║   ~ Do you have what it takes to make the leaderboard? ~     ║",
    "║                                                              ║",
    "╚══════════════════════════════════════════════════════════════╝",
];

/// Banner plus a randomly chosen greeting.
///
/// # Errors
///
/// Returns `UiError::Io` if the terminal fails.
pub fn show_welcome(ctx: &mut AppContext<'_>) -> Result<(), UiError> {
    ctx.console.clear()?;
    for line in BANNER {
        ctx.console.write_line(&line.narrator().to_string())?;
    }
    render::blank(ctx.console)?;
    if let Some(greeting) = GREETINGS.choose(&mut ctx.rng) {
        render::narrator(ctx.console, greeting)?;
    }
    render::blank(ctx.console)?;
    Ok(())
}

/// Ask for the player's name and apply it to the running score.
/// A blank answer becomes [`ANONYMOUS_CODER`].
///
/// # Errors
///
/// Returns `UiError::InputClosed` on end-of-file or `UiError::Io` if the
/// terminal fails.
pub fn ask_player_name(ctx: &mut AppContext<'_>) -> Result<String, UiError> {
    let answer = input::text(ctx.console, "State your name, seeker of knowledge")?;
    let name = answer.trim();
    let name = if name.is_empty() {
        render::narrator(
            ctx.console,
            &format!("Too shy to give your name? Fine, I'll call you '{ANONYMOUS_CODER}'."),
        )?;
        ANONYMOUS_CODER.to_owned()
    } else {
        render::narrator(
            ctx.console,
            &format!("Welcome, {name}. Try not to disappoint me too much."),
        )?;
        name.to_owned()
    };
    ctx.scores.set_player_name(name.as_str());
    render::blank(ctx.console)?;
    input::wait_for_enter(ctx.console)?;
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_harness::run_fresh;

    #[test]
    fn blank_name_becomes_anonymous_coder() {
        let run = run_fresh(&["   ", ""], ask_player_name);
        assert_eq!(run.value.unwrap(), ANONYMOUS_CODER);
        assert_eq!(run.scores.player_name(), ANONYMOUS_CODER);
        assert!(run.console.output().contains("Too shy to give your name?"));
    }

    #[test]
    fn given_name_is_trimmed_and_applied() {
        let run = run_fresh(&["  Ada ", ""], ask_player_name);
        assert_eq!(run.value.unwrap(), "Ada");
        assert_eq!(run.scores.player_name(), "Ada");
    }

    #[test]
    fn welcome_shows_a_known_greeting() {
        let run = run_fresh(&[], show_welcome);
        run.value.unwrap();
        assert!(GREETINGS.iter().any(|g| run.console.output().contains(g)));
    }
}
