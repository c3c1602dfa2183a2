use crate::context::AppContext;
use crate::error::UiError;
use crate::input;
use crate::render;
use crate::vm::parse_page;

/// Display one reference page and wait for the player to move on.
///
/// # Errors
///
/// Returns `UiError::InputClosed` on end-of-file or `UiError::Io` if the
/// terminal fails.
pub fn show_page(ctx: &mut AppContext<'_>, title: &str, content: &str) -> Result<(), UiError> {
    ctx.console.clear()?;
    render::header(ctx.console, title)?;
    render::blank(ctx.console)?;
    render::page(ctx.console, &parse_page(content))?;
    render::blank(ctx.console)?;
    input::wait_for_enter(ctx.console)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_harness::run_fresh;

    #[test]
    fn page_renders_styled_blocks() {
        let content = "## Undo\n```\ngit restore <file>\n```\n- careful";
        let run = run_fresh(&[""], |ctx| show_page(ctx, "Git Undo", content));

        run.value.unwrap();
        let out = run.console.output();
        assert!(out.contains("Git Undo"));
        assert!(out.contains("► Undo"));
        assert!(out.contains("┌─ Code"));
        assert!(out.contains("  git restore <file>"));
        assert!(out.contains("  - careful"));
        assert!(out.contains("Press Enter to continue..."));
    }
}
