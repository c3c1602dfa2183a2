#![forbid(unsafe_code)]

pub mod console;
pub mod context;
pub mod error;
pub mod input;
pub mod render;
pub mod style;
pub mod views;
pub mod vm;

pub use console::{Console, ScriptedConsole, Terminal};
pub use context::{AppContext, DEFAULT_LEADERBOARD_SIZE, LeafAction, leaf};
pub use error::UiError;
