mod code_trainer;
mod farewell;
mod lexicon;
mod navigation;
mod quiz;
mod scoreboard;
mod welcome;

#[cfg(test)]
mod test_harness;

pub use code_trainer::run_code_training;
pub use farewell::{end_run, finish_run};
pub use lexicon::show_page;
pub use navigation::run_navigation;
pub use quiz::run_quiz;
pub use scoreboard::{show_current_session, show_history, show_leaderboard};
pub use welcome::{ANONYMOUS_CODER, ask_player_name, show_welcome};
