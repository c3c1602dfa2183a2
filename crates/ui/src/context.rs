use rand::rngs::StdRng;
use services::ScoreService;

use crate::console::Console;
use crate::error::UiError;

pub const DEFAULT_LEADERBOARD_SIZE: usize = 10;

/// Everything a screen needs while the run is live.
///
/// Built once by the composition root (`crates/app`) and threaded through the
/// navigation loop into every leaf action.
pub struct AppContext<'c> {
    pub console: &'c mut dyn Console,
    pub scores: ScoreService,
    pub rng: StdRng,
    pub leaderboard_size: usize,
}

impl<'c> AppContext<'c> {
    #[must_use]
    pub fn new(console: &'c mut dyn Console, scores: ScoreService, rng: StdRng) -> Self {
        Self {
            console,
            scores,
            rng,
            leaderboard_size: DEFAULT_LEADERBOARD_SIZE,
        }
    }

    #[must_use]
    pub fn with_leaderboard_size(mut self, size: usize) -> Self {
        self.leaderboard_size = size;
        self
    }
}

impl std::fmt::Debug for AppContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("scores", &self.scores)
            .field("leaderboard_size", &self.leaderboard_size)
            .finish_non_exhaustive()
    }
}

/// Action bound to a leaf of the content tree.
pub type LeafAction = Box<dyn Fn(&mut AppContext<'_>) -> Result<(), UiError>>;

/// Box a closure as a [`LeafAction`].
pub fn leaf<F>(action: F) -> LeafAction
where
    F: Fn(&mut AppContext<'_>) -> Result<(), UiError> + 'static,
{
    Box::new(action)
}
