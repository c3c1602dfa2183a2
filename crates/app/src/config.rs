use std::path::PathBuf;

use clap::Parser;

const SCORES_DIR: &str = "learn-companion";
const SCORES_FILE: &str = "highscores.json";

/// Terminal learning companion: reference pages, quizzes and live code drills.
#[derive(Debug, Parser)]
#[command(name = "learn", version)]
pub struct Cli {
    /// Scoreboard file (JSON array of past runs)
    #[arg(long, env = "LEARN_SCORES_FILE", value_name = "FILE")]
    pub scores_file: Option<PathBuf>,

    /// Player name; skips the name prompt
    #[arg(long, env = "LEARN_PLAYER", value_name = "NAME")]
    pub player: Option<String>,

    /// Seed for option shuffles and greetings
    #[arg(long, env = "LEARN_SEED", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Log filter directive, e.g. `debug` or `services=trace`. `RUST_LOG` wins when set.
    #[arg(long, default_value = "warn", value_name = "FILTER")]
    pub log_level: String,

    /// Rows shown on the leaderboard
    #[arg(long, default_value_t = ui::DEFAULT_LEADERBOARD_SIZE, value_name = "N")]
    pub top: usize,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Never clear the screen between pages
    #[arg(long)]
    pub no_clear: bool,
}

impl Cli {
    /// Resolved scoreboard location.
    #[must_use]
    pub fn scores_path(&self) -> PathBuf {
        self.scores_file.clone().unwrap_or_else(default_scores_path)
    }

    /// A non-blank `--player`, trimmed.
    #[must_use]
    pub fn player_name(&self) -> Option<&str> {
        self.player
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

fn default_scores_path() -> PathBuf {
    dirs::data_local_dir().map_or_else(
        || PathBuf::from("JSON").join(SCORES_FILE),
        |dir| dir.join(SCORES_DIR).join(SCORES_FILE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["learn"]).unwrap();
        assert_eq!(cli.log_level, "warn");
        assert_eq!(cli.top, 10);
        assert!(!cli.no_color);
        assert!(cli.scores_path().ends_with(SCORES_FILE));
    }

    #[test]
    fn explicit_flags() {
        let cli = Cli::try_parse_from([
            "learn",
            "--scores-file",
            "/tmp/scores.json",
            "--player",
            "  Ada  ",
            "--seed",
            "42",
            "--top",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.scores_path(), PathBuf::from("/tmp/scores.json"));
        assert_eq!(cli.player_name(), Some("Ada"));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.top, 3);
    }

    #[test]
    fn blank_player_is_ignored() {
        let cli = Cli::try_parse_from(["learn", "--player", "   "]).unwrap();
        assert_eq!(cli.player_name(), None);
    }

    #[test]
    fn rejects_non_numeric_seed() {
        assert!(Cli::try_parse_from(["learn", "--seed", "abc"]).is_err());
    }
}
