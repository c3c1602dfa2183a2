use learn_core::tree::ContentTree;
use services::{NavigationController, Transition};
use tracing::debug;

use crate::context::{AppContext, LeafAction};
use crate::error::UiError;
use crate::input;
use crate::render;

/// Menu loop over `tree` until the player picks `Exit` at the root.
///
/// # Errors
///
/// Returns `UiError::InputClosed` on end-of-file, or whatever a leaf action
/// fails with.
pub fn run_navigation(
    ctx: &mut AppContext<'_>,
    tree: &ContentTree<LeafAction>,
) -> Result<(), UiError> {
    let mut nav = NavigationController::new(tree);
    loop {
        ctx.console.clear()?;
        render::score_corner(ctx.console, ctx.scores.total_score())?;
        let menu = nav.menu();
        render::menu(ctx.console, &menu)?;

        let choice = input::menu_choice(ctx.console, 0, menu.max_choice())?;
        let transition = nav.select(choice, |action: &LeafAction| action(&mut *ctx))?;
        if transition == Transition::Exited {
            debug!("main menu exited");
            return Ok(());
        }
    }
}
