use std::sync::Arc;

use learn_core::time::fixed_clock;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::ScoreService;
use storage::InMemoryScoreRepository;

use crate::console::ScriptedConsole;
use crate::context::AppContext;
use crate::style::set_color_enabled;

pub const TEST_SEED: u64 = 7;

/// Result of driving a view against scripted input.
pub struct Run<T> {
    pub value: T,
    pub console: ScriptedConsole,
    pub scores: ScoreService,
}

pub fn run_view<T>(
    repo: &InMemoryScoreRepository,
    lines: &[&str],
    view: impl FnOnce(&mut AppContext<'_>) -> T,
) -> Run<T> {
    set_color_enabled(false);
    let mut console = ScriptedConsole::new(lines.iter().copied());
    let scores = ScoreService::new(Arc::new(repo.clone()), fixed_clock());
    let mut ctx = AppContext::new(&mut console, scores, StdRng::seed_from_u64(TEST_SEED));

    let value = view(&mut ctx);
    let scores = ctx.scores;
    Run {
        value,
        console,
        scores,
    }
}

pub fn run_fresh<T>(lines: &[&str], view: impl FnOnce(&mut AppContext<'_>) -> T) -> Run<T> {
    run_view(&InMemoryScoreRepository::new(), lines, view)
}
