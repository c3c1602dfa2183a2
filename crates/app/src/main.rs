mod config;
mod content;
mod logging;

use clap::Parser;
use learn_core::Clock;
use learn_core::tree::ContentTree;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::ScoreService;
use storage::Storage;
use tracing::{debug, info};
use ui::views::{ask_player_name, end_run, run_navigation, show_welcome};
use ui::{AppContext, LeafAction, Terminal, UiError};

use crate::config::Cli;

/// Welcome, name, then the menu loop.
fn play(
    ctx: &mut AppContext<'_>,
    tree: &ContentTree<LeafAction>,
    player: Option<&str>,
) -> Result<(), UiError> {
    show_welcome(ctx)?;
    match player {
        Some(name) => ctx.scores.set_player_name(name),
        None => {
            ask_player_name(ctx)?;
        }
    }
    run_navigation(ctx, tree)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);
    if cli.no_color {
        ui::style::set_color_enabled(false);
    }

    let scores_path = cli.scores_path();
    info!(path = %scores_path.display(), "scoreboard file");
    let storage = Storage::json_file(scores_path);
    let scores = ScoreService::new(storage.scores, Clock::system());
    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let tree = content::build_tree()?;
    debug!(leaves = tree.root().count_leaves(), "content tree ready");

    let mut terminal = Terminal::new(!cli.no_clear);
    let mut ctx = AppContext::new(&mut terminal, scores, rng).with_leaderboard_size(cli.top);

    let played = play(&mut ctx, &tree, cli.player_name());
    end_run(&mut ctx, played)?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(2);
    }
}
